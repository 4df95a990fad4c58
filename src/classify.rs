use catalog_types::{Category, DietFlags, Subcategory};

// Rule tables are ordered; the first matching term set wins. Keeping
// the priority as data makes it visible and testable instead of being
// buried in an if-chain.

const CATEGORY_RULES: &[(&[&str], Category)] = &[
    (&["fındık", "findik", "hazelnut"], Category::HazelnutButter),
    (&["kuruyemiş", "kuruyemis", "nut"], Category::MixedNuts),
];

const SUGAR_FREE_TERMS: &[&str] = &[
    "şekersiz",
    "sekersiz",
    "şeker ilavesiz",
    "seker ilavesiz",
    "sugar free",
    "sugar-free",
];

const SUBCATEGORY_RULES: &[(&[&str], Subcategory)] = &[
    (SUGAR_FREE_TERMS, Subcategory::SugarFree),
    (&["hurma", "date"], Subcategory::DateSweetened),
    (&["bal", "honey"], Subcategory::Honey),
    (
        &["sütlü", "sutlu", "krema", "milk", "cream"],
        Subcategory::MilkCream,
    ),
    (
        &["kakao", "çikolata", "cikolata", "cocoa", "chocolate"],
        Subcategory::Cocoa,
    ),
    (&["çiğ", "cig", "raw"], Subcategory::Raw),
    (&["kavrulmuş", "kavrulmus", "roasted"], Subcategory::Roasted),
];

/// Derives category, subcategory and diet flags from the free-text
/// `Type` and `Tags` cells. Pure; the import calls it once per
/// product, on the first row of a handle.
pub fn classify(product_type: &str, tags: &str) -> (Category, Subcategory, DietFlags) {
    let product_type = product_type.to_lowercase();
    let tags = tags.to_lowercase();

    let category = CATEGORY_RULES
        .iter()
        .find(|(terms, _)| contains_any(&product_type, terms))
        .map(|(_, category)| *category)
        .unwrap_or(Category::PeanutButter);
    let subcategory = SUBCATEGORY_RULES
        .iter()
        .find(|(terms, _)| contains_any(&tags, terms))
        .map(|(_, subcategory)| *subcategory)
        .unwrap_or(Subcategory::Classic);
    let flags = DietFlags {
        vegan: tags.contains("vegan"),
        gluten_free: tags.contains("gluten"),
        sugar_free: contains_any(&tags, SUGAR_FREE_TERMS),
        high_protein: tags.contains("protein") || tags.contains("sporcu"),
    };
    (category, subcategory, flags)
}

fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| haystack.contains(term))
}
