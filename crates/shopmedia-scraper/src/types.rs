//! Response shape of a storefront's `/products/<handle>.json` endpoint.
//!
//! Only the fields that end up in the output are modelled. Both are
//! required: a missing or `null` `title`, `image` or `image.src` fails
//! deserialization and the product slot becomes a placeholder. Products
//! without any image return `"image": null`, so they are placeholders too.

use serde::Deserialize;
use shopmedia_core::ProductRecord;

/// Top-level response from `GET <product-path>.json`.
#[derive(Debug, Deserialize)]
pub struct ProductDetailResponse {
    pub product: ProductDetail,
}

#[derive(Debug, Deserialize)]
pub struct ProductDetail {
    /// Display name of the product.
    pub title: String,
    /// Primary image object.
    pub image: ProductImage,
}

#[derive(Debug, Deserialize)]
pub struct ProductImage {
    /// Canonical CDN URL.
    pub src: String,
}

impl From<ProductDetailResponse> for ProductRecord {
    fn from(response: ProductDetailResponse) -> Self {
        ProductRecord {
            title: Some(response.product.title),
            image_src: Some(response.product.image.src),
        }
    }
}
