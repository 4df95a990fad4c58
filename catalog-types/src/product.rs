use crate::category::{Category, DietFlags, Subcategory};

/// Hard cap on accumulated image links per product. Only the first
/// three reach the output document; the rest stay in the buffer.
pub const MAX_IMAGES: usize = 10;

/// One purchasable option of a product. Always built from exactly one
/// source row; the fields stay textual because the output schema is.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Variant {
    pub name: String,
    pub weight_grams: String,
    pub price: String,
    pub compare_price: String,
    pub sku: String,
    pub stock_qty: String,
}

/// Aggregated product, keyed by its handle. Variants keep the order of
/// the source rows that produced them.
#[derive(Clone, Debug)]
pub struct Product {
    pub handle: String,
    pub title: String,
    pub body: String,
    pub short_description: String,
    pub category: Category,
    pub subcategory: Subcategory,
    pub tags: String,
    pub flags: DietFlags,
    pub images: Vec<String>,
    pub variants: Vec<Variant>,
}

impl Product {
    /// Appends an image link unless it is empty, already present, or
    /// the buffer is full.
    pub fn push_image(&mut self, url: &str) {
        if url.is_empty() || self.images.len() >= MAX_IMAGES {
            return;
        }
        if self.images.iter().any(|existing| existing == url) {
            return;
        }
        self.images.push(url.to_string());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn product() -> Product {
        Product {
            handle: "h1".to_string(),
            title: String::new(),
            body: String::new(),
            short_description: String::new(),
            category: Category::PeanutButter,
            subcategory: Subcategory::Classic,
            tags: String::new(),
            flags: DietFlags::default(),
            images: Vec::new(),
            variants: Vec::new(),
        }
    }

    #[test]
    fn deduplicates_images() {
        let mut p = product();
        p.push_image("a.jpg");
        p.push_image("");
        p.push_image("a.jpg");
        p.push_image("b.jpg");
        assert_eq!(vec!["a.jpg".to_string(), "b.jpg".to_string()], p.images);
    }

    #[test]
    fn caps_images_at_ten() {
        let mut p = product();
        for i in 0..25 {
            p.push_image(&format!("{i}.jpg"));
        }
        assert_eq!(MAX_IMAGES, p.images.len());
        assert_eq!("0.jpg", p.images[0]);
        assert_eq!("9.jpg", p.images[9]);
    }
}
