pub mod category;
pub mod product;

pub use category::{Category, DietFlags, Subcategory};
pub use product::{Product, Variant, MAX_IMAGES};

/// Localized two-state rendering used by the bulk-import schema.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Evet"
    } else {
        "Hayır"
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn renders_localized_bool() {
        assert_eq!("Evet", yes_no(true));
        assert_eq!("Hayır", yes_no(false));
    }
}
