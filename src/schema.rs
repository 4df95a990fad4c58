/// Column bindings resolved once from the export's header row.
///
/// Unresolved columns stay `None` and degrade every read to an empty
/// string; the import never aborts over schema gaps. Without a Handle
/// column every data row reads an empty handle and gets skipped, which
/// already covers the broken-header case.
#[derive(Clone, Debug, Default)]
pub struct ColumnSchema {
    pub handle: Option<usize>,
    pub title: Option<usize>,
    pub body: Option<usize>,
    pub product_type: Option<usize>,
    pub tags: Option<usize>,
    pub image_src: Option<usize>,
    /// Resolved but never consulted: the export lists image rows in
    /// the order we want them anyway. Kept until upstream confirms the
    /// position column should win over encounter order.
    pub image_position: Option<usize>,
    pub option_value: Option<usize>,
    pub price: Option<usize>,
    pub compare_price: Option<usize>,
    pub sku: Option<usize>,
    pub grams: Option<usize>,
    pub inventory_qty: Option<usize>,
}

impl ColumnSchema {
    pub fn resolve(headers: &[String]) -> Self {
        Self {
            handle: find_exact(headers, "handle"),
            title: find_exact(headers, "title"),
            body: find_containing(headers, "body"),
            product_type: find_exact(headers, "type"),
            tags: find_exact(headers, "tags"),
            image_src: find_containing(headers, "image src"),
            image_position: find_containing(headers, "image position"),
            option_value: find_containing(headers, "option1 value"),
            price: find_containing(headers, "variant price"),
            compare_price: find_containing(headers, "variant compare"),
            sku: find_containing(headers, "variant sku"),
            grams: find_containing(headers, "variant grams"),
            inventory_qty: find_containing(headers, "variant inventory qty"),
        }
    }
}

fn find_exact(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.to_lowercase() == name)
}

fn find_containing(headers: &[String], needle: &str) -> Option<usize> {
    headers.iter().position(|h| h.to_lowercase().contains(needle))
}

/// Reads a cell at a resolved index; unresolved columns and short rows
/// read as `""`.
pub fn field<'a>(row: &'a [String], index: Option<usize>) -> &'a str {
    index
        .and_then(|i| row.get(i))
        .map(String::as_str)
        .unwrap_or("")
}
