use derive_more::Display;
use serde::Serialize;

/// Shop-side category slug, derived from the free-text `Type` cell.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum Category {
    #[display("hazelnut-butter")]
    HazelnutButter,
    #[display("mixed-nuts")]
    MixedNuts,
    #[display("peanut-butter")]
    PeanutButter,
}

/// Shop-side subcategory slug, derived from the free-text `Tags` cell.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum Subcategory {
    #[display("sugar-free")]
    SugarFree,
    #[display("date-sweetened")]
    DateSweetened,
    #[display("honey")]
    Honey,
    #[display("milk-cream")]
    MilkCream,
    #[display("cocoa")]
    Cocoa,
    #[display("raw")]
    Raw,
    #[display("roasted")]
    Roasted,
    #[display("classic")]
    Classic,
}

/// Dietary feature flags. Not mutually exclusive; each one is matched
/// against the tags on its own.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DietFlags {
    pub vegan: bool,
    pub gluten_free: bool,
    pub sugar_free: bool,
    pub high_protein: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slugs_match_bulk_import_contract() {
        assert_eq!("peanut-butter", Category::PeanutButter.to_string());
        assert_eq!("hazelnut-butter", Category::HazelnutButter.to_string());
        assert_eq!("mixed-nuts", Category::MixedNuts.to_string());
        assert_eq!("date-sweetened", Subcategory::DateSweetened.to_string());
        assert_eq!("classic", Subcategory::Classic.to_string());
    }
}
