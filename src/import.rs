use crate::classify::classify;
use crate::export;
use crate::schema::{field, ColumnSchema};
use crate::tokenize::split_line;
use anyhow::anyhow;
use catalog_types::{Product, Variant};
use lazy_regex::regex;
use serde::Serialize;
use std::collections::HashMap;

const SHORT_DESCRIPTION_CHARS: usize = 150;

const IMAGES_COPIED: &str = "Görsel bağlantıları kaynak dosyadan otomatik olarak aktarıldı";
const NUTRITION_MANUAL: &str =
    "Besin değerleri (kalori, protein, karbonhidrat, yağ, lif, şeker) boş bırakıldı; elle girilmeli";
const FLAGS_MANUAL: &str =
    "Öne Çıkan ve Yeni alanları \"Hayır\" olarak yazıldı; elle güncellenmeli";
const NOTHING_CONVERTED: &str =
    "Hiçbir satır dönüştürülemedi; Handle sütununu ve veri satırlarını kontrol edin";

/// Converted document plus the user-facing summary.
pub struct Conversion {
    pub document: String,
    pub report: ConversionReport,
}

/// Summary surface for the admin panel: how many variant rows were
/// written and which manual follow-ups remain.
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub converted: usize,
    pub warnings: Vec<String>,
}

impl ConversionReport {
    fn for_count(converted: usize) -> Self {
        let warnings = if converted == 0 {
            vec![NOTHING_CONVERTED.to_string()]
        } else {
            vec![
                IMAGES_COPIED.to_string(),
                NUTRITION_MANUAL.to_string(),
                FLAGS_MANUAL.to_string(),
            ]
        };
        Self {
            converted,
            warnings,
        }
    }
}

/// Handle-keyed accumulator that keeps first-encounter order so output
/// rows follow the source file. Plain `HashMap` iteration order is not
/// stable, so the order lives in its own list.
#[derive(Default)]
pub struct ProductMap {
    order: Vec<String>,
    products: HashMap<String, Product>,
}

impl ProductMap {
    pub fn get_mut(&mut self, handle: &str) -> Option<&mut Product> {
        self.products.get_mut(handle)
    }

    pub fn insert(&mut self, product: Product) {
        if !self.products.contains_key(&product.handle) {
            self.order.push(product.handle.clone());
        }
        self.products.insert(product.handle.clone(), product);
    }

    pub fn into_products(self) -> Vec<Product> {
        let ProductMap {
            order,
            mut products,
        } = self;
        order
            .into_iter()
            .filter_map(|handle| products.remove(&handle))
            .collect()
    }
}

/// Builds products under the aggregation contract: the first row of a
/// handle fixes title, description and classification; every later row
/// only appends a variant and at most one new image. The two-method
/// shape keeps that invariant structural.
pub struct ProductBuilder<'a> {
    schema: &'a ColumnSchema,
    sku_seq: usize,
}

impl<'a> ProductBuilder<'a> {
    pub fn new(schema: &'a ColumnSchema) -> Self {
        Self { schema, sku_seq: 0 }
    }

    /// First row of a handle: full product, one variant, maybe one
    /// seed image.
    pub fn create(&mut self, handle: &str, row: &[String]) -> Product {
        let body = strip_tags(field(row, self.schema.body));
        let short_description = truncate_chars(&body, SHORT_DESCRIPTION_CHARS);
        let tags = field(row, self.schema.tags);
        let (category, subcategory, flags) =
            classify(field(row, self.schema.product_type), tags);
        let mut product = Product {
            handle: handle.to_string(),
            title: field(row, self.schema.title).to_string(),
            body,
            short_description,
            category,
            subcategory,
            tags: tags.to_string(),
            flags,
            images: Vec::new(),
            variants: Vec::new(),
        };
        product.push_image(field(row, self.schema.image_src));
        let variant = self.variant(handle, row);
        product.variants.push(variant);
        product
    }

    /// Any later row of an already-seen handle. Title, body and
    /// classification are left untouched on purpose, even if the row
    /// carries different tags.
    pub fn append(&mut self, product: &mut Product, row: &[String]) {
        product.push_image(field(row, self.schema.image_src));
        let variant = self.variant(&product.handle, row);
        product.variants.push(variant);
    }

    fn variant(&mut self, handle: &str, row: &[String]) -> Variant {
        let sku = field(row, self.schema.sku);
        let sku = if sku.is_empty() {
            self.generate_sku(handle)
        } else {
            sku.to_string()
        };
        let stock_qty = field(row, self.schema.inventory_qty);
        Variant {
            name: field(row, self.schema.option_value).to_string(),
            weight_grams: field(row, self.schema.grams).to_string(),
            price: field(row, self.schema.price).to_string(),
            compare_price: field(row, self.schema.compare_price).to_string(),
            sku,
            stock_qty: if stock_qty.is_empty() {
                "0".to_string()
            } else {
                stock_qty.to_string()
            },
        }
    }

    /// Wall-clock SKUs make blank-SKU runs non-reproducible run to
    /// run; the sequence number keeps a single run collision-free.
    fn generate_sku(&mut self, handle: &str) -> String {
        self.sku_seq += 1;
        let millis = time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let suffix: u16 = rand::random();
        let prefix: String = handle
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .take(6)
            .collect::<String>()
            .to_uppercase();
        let prefix = if prefix.is_empty() {
            "SKU".to_string()
        } else {
            prefix
        };
        format!("{prefix}-{millis}-{}{suffix:04}", self.sku_seq)
    }
}

/// Runs the whole transform: source export text in, converted catalog
/// document and summary out. Synchronous and order-sensitive; rows are
/// walked strictly in file order because classification and image
/// accumulation both depend on it.
pub fn convert(input: &str) -> Result<Conversion, anyhow::Error> {
    let mut lines = input
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty());
    let header = lines
        .next()
        .ok_or_else(|| anyhow!("Kaynak dosya boş, dönüştürülecek satır yok"))?;
    let schema = ColumnSchema::resolve(&split_line(header));
    if schema.handle.is_none() {
        log::warn!("Handle sütunu bulunamadı, hiçbir satır eşleşmeyecek");
    }

    let mut map = ProductMap::default();
    let mut builder = ProductBuilder::new(&schema);
    for line in lines {
        let row = split_line(line);
        let handle = field(&row, schema.handle);
        if handle.is_empty() {
            continue;
        }
        match map.get_mut(handle) {
            Some(product) => builder.append(product, &row),
            None => {
                let product = builder.create(handle, &row);
                map.insert(product);
            }
        }
    }

    let products = map.into_products();
    let converted = products.iter().map(|p| p.variants.len()).sum();
    log::info!("{converted} variant rows from {} products", products.len());
    let document = export::write_document(&products);
    Ok(Conversion {
        document,
        report: ConversionReport::for_count(converted),
    })
}

fn strip_tags(html: &str) -> String {
    let tags = regex!(r"<[^>]*>");
    tags.replace_all(html, "").trim().to_string()
}

fn truncate_chars(input: &str, max: usize) -> String {
    let end = input
        .char_indices()
        .nth(max)
        .map(|(x, _)| x)
        .unwrap_or(input.len());
    input[..end].to_string()
}
