use crate::contact::{ResolvedContact, SignalKind};

/// Number of product slots per shop in the reference output layout.
pub const DEFAULT_PRODUCT_SAMPLE_SIZE: usize = 5;

/// Title and primary image of one sampled catalog product.
///
/// A slot whose product could not be fetched or parsed is a placeholder with
/// both fields `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRecord {
    pub title: Option<String>,
    pub image_src: Option<String>,
}

impl ProductRecord {
    #[must_use]
    pub fn placeholder() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.title.is_none() && self.image_src.is_none()
    }
}

/// Everything scraped for one storefront; becomes one output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopResult {
    pub host: String,
    pub contact: ResolvedContact,
    pub products: Vec<ProductRecord>,
}

impl ShopResult {
    /// Builds a result whose `products` has exactly `sample_size` entries,
    /// padding with placeholders or dropping the surplus.
    #[must_use]
    pub fn new(
        host: String,
        contact: ResolvedContact,
        mut products: Vec<ProductRecord>,
        sample_size: usize,
    ) -> Self {
        products.resize_with(sample_size, ProductRecord::placeholder);
        Self {
            host,
            contact,
            products,
        }
    }

    /// Flattens the result into cells matching [`output_columns`].
    /// Absent values become empty strings.
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(1 + SignalKind::ALL.len() + self.products.len() * 2);
        row.push(self.host.clone());
        for kind in SignalKind::ALL {
            row.push(self.contact.get(kind).unwrap_or_default().to_string());
        }
        for product in &self.products {
            row.push(product.title.clone().unwrap_or_default());
            row.push(product.image_src.clone().unwrap_or_default());
        }
        row
    }
}

/// Header row for the output table with `sample_size` product slots.
///
/// With the default sample size this is `shop_url, twitter, facebook, email,
/// product_0_title, product_0_img_src, ..., product_4_img_src`.
#[must_use]
pub fn output_columns(sample_size: usize) -> Vec<String> {
    let mut columns = vec!["shop_url".to_string()];
    columns.extend(SignalKind::ALL.iter().map(|k| k.column_name().to_string()));
    for i in 0..sample_size {
        columns.push(format!("product_{i}_title"));
        columns.push(format!("product_{i}_img_src"));
    }
    columns
}
