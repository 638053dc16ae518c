//! Products Data

use std::num::FpCategory;

use jiff::Timestamp;

use crate::domain::products::records::{ProductId, ProductRecord};

/// New Product Data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub sku: String,
}

impl NewProduct {
    pub(crate) fn into_record(self, id: ProductId, now: Timestamp) -> ProductRecord {
        ProductRecord {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            sku: self.sku,
            created_at: Some(now),
            updated_at: Some(now),
            deleted_at: None,
        }
    }
}

/// Product Update Data
///
/// Empty strings and a zero price keep the stored value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub sku: String,
}

impl ProductUpdate {
    /// Build the record that replaces `existing`.
    ///
    /// The replacement is whole: timestamps are not carried over from
    /// `existing`, since an update never supplies them.
    #[must_use]
    pub fn merge(&self, existing: &ProductRecord) -> ProductRecord {
        ProductRecord {
            id: existing.id,
            name: or_existing(&self.name, &existing.name),
            description: or_existing(&self.description, &existing.description),
            price: if self.price.classify() == FpCategory::Zero {
                existing.price
            } else {
                self.price
            },
            sku: or_existing(&self.sku, &existing.sku),
            created_at: None,
            updated_at: None,
            deleted_at: None,
        }
    }
}

fn or_existing(value: &str, existing: &str) -> String {
    let kept = if value.is_empty() { existing } else { value };

    kept.to_owned()
}
