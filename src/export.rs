use catalog_types::{yes_no, Product};
use itertools::Itertools;

/// The bulk importer expects UTF-8 with a BOM.
pub const BOM: &str = "\u{feff}";

/// Column order is a contract with the downstream bulk importer and
/// must not drift. The six nutrition columns are always empty: they
/// have no source equivalent and defaulting them to 0 would let wrong
/// numbers reach the storefront unreviewed.
pub const HEADER: &str = "ProductName,Slug,Description,ShortDescription,Category,\
Subcategory,VariantName,WeightGrams,Price,ComparePrice,Stock,SKU,\
Image1,Image2,Image3,Calories,Protein,Carbs,Fat,Fiber,Sugar,\
Vegan,GlutenFree,SugarFree,HighProtein,Featured,New,Tags";

/// Renders the aggregated products as the bulk-import document: one
/// row per variant, products in first-encounter order.
pub fn write_document(products: &[Product]) -> String {
    let mut out = String::from(BOM);
    out.push_str(HEADER);
    out.push('\n');
    for product in products {
        let image = |i: usize| product.images.get(i).map(String::as_str).unwrap_or("");
        for variant in &product.variants {
            let columns = [
                quoted(&product.title),
                product.handle.clone(),
                quoted(&product.body),
                quoted(&product.short_description),
                product.category.to_string(),
                product.subcategory.to_string(),
                quoted(&variant.name),
                variant.weight_grams.clone(),
                variant.price.clone(),
                variant.compare_price.clone(),
                variant.stock_qty.clone(),
                variant.sku.clone(),
                image(0).to_string(),
                image(1).to_string(),
                image(2).to_string(),
                String::new(), // Calories
                String::new(), // Protein
                String::new(), // Carbs
                String::new(), // Fat
                String::new(), // Fiber
                String::new(), // Sugar
                yes_no(product.flags.vegan).to_string(),
                yes_no(product.flags.gluten_free).to_string(),
                yes_no(product.flags.sugar_free).to_string(),
                yes_no(product.flags.high_protein).to_string(),
                yes_no(false).to_string(), // Featured
                yes_no(false).to_string(), // New
                quoted(&product.tags),
            ];
            out.push_str(&columns.iter().join(","));
            out.push('\n');
        }
    }
    out
}

/// Quote-wraps a free-text field, doubling embedded quotes. Only the
/// fields that can carry commas go through this; identifiers and
/// numbers are emitted bare.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod test {
    use super::*;
    use catalog_types::{Category, DietFlags, Subcategory, Variant};

    fn product(handle: &str, images: &[&str], variants: usize) -> Product {
        Product {
            handle: handle.to_string(),
            title: format!("{handle} title"),
            body: String::new(),
            short_description: String::new(),
            category: Category::PeanutButter,
            subcategory: Subcategory::Classic,
            tags: String::new(),
            flags: DietFlags::default(),
            images: images.iter().map(|i| i.to_string()).collect(),
            variants: (0..variants)
                .map(|i| Variant {
                    name: format!("v{i}"),
                    sku: format!("{handle}-{i}"),
                    ..Variant::default()
                })
                .collect(),
        }
    }

    #[test]
    fn header_has_28_columns() {
        assert_eq!(28, HEADER.split(',').count());
    }

    #[test]
    fn document_starts_with_bom_and_header() {
        let document = write_document(&[]);
        assert_eq!(format!("{BOM}{HEADER}\n"), document);
    }

    #[test]
    fn emits_one_row_per_variant() {
        let document = write_document(&[product("h1", &[], 3), product("h2", &[], 1)]);
        assert_eq!(4, document.lines().count() - 1);
    }

    #[test]
    fn image_window_is_first_three_slots() {
        let images = ["1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg"];
        let document = write_document(&[product("h1", &images, 1)]);
        let row: Vec<&str> = document.lines().nth(1).unwrap().split(',').collect();
        assert_eq!("1.jpg", row[12]);
        assert_eq!("3.jpg", row[14]);
        // Buffered images past the window never reach the document.
        assert!(!document.contains("4.jpg"));
    }

    #[test]
    fn doubles_embedded_quotes() {
        assert_eq!("\"250g \"\"cam\"\" kavanoz\"", quoted("250g \"cam\" kavanoz"));
        assert_eq!("\"\"", quoted(""));
    }

    #[test]
    fn nutrition_columns_stay_empty() {
        let document = write_document(&[product("h1", &[], 1)]);
        let row: Vec<&str> = document.lines().nth(1).unwrap().split(',').collect();
        for column in &row[15..21] {
            assert_eq!("", *column);
        }
        assert_eq!("Hayır", row[25]);
        assert_eq!("Hayır", row[26]);
    }
}
