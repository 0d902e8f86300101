//! Sellable items and the partial form merchants create them from.

use serde::{Deserialize, Serialize};

use super::style::{FashionStyle, ProductCategory};

pub const DEFAULT_TITLE: &str = "新商品";
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/300/400";

/// A sellable item in the catalog.
///
/// `stock` and `sales` are independent counters; the core never
/// validates one against the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    /// Price in whole yuan.
    pub price: u32,
    pub image: String,
    /// Ordered style tags. Non-empty for catalog-created products; the
    /// first tag drives product-detail theming.
    pub tags: Vec<FashionStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProductCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_address: Option<String>,
}

/// Partial product data supplied by a merchant when listing an item.
///
/// Merge rule: a supplied value always wins, an absent field always
/// takes its declared default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub title: Option<String>,
    pub price: Option<u32>,
    pub image: Option<String>,
    pub tags: Option<Vec<FashionStyle>>,
    pub category: Option<ProductCategory>,
    pub description: Option<String>,
    pub stock: Option<u32>,
    pub sales: Option<u32>,
    pub store_name: Option<String>,
    pub store_address: Option<String>,
}

impl ProductDraft {
    /// Fill unset fields with declared defaults and produce a complete
    /// product. The store name defaults to "{owner}的店".
    pub(crate) fn into_product(self, id: String, owner_name: &str) -> Product {
        let tags = match self.tags {
            Some(tags) if !tags.is_empty() => tags,
            _ => vec![FashionStyle::Casual],
        };
        Product {
            id,
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            price: self.price.unwrap_or(0),
            image: self.image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            tags,
            category: self.category,
            description: Some(self.description.unwrap_or_default()),
            stock: Some(self.stock.unwrap_or(0)),
            sales: Some(self.sales.unwrap_or(0)),
            store_name: Some(
                self.store_name
                    .unwrap_or_else(|| format!("{owner_name}的店")),
            ),
            store_address: self.store_address,
        }
    }
}
