//! Product wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use roaster_app::domain::products::{
    data::{NewProduct, ProductUpdate},
    records::ProductRecord,
};

/// Product Request
///
/// Body of both create and update. Missing fields decode as empty, which
/// an update treats as "keep the stored value". Any `id` is ignored.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct ProductRequest {
    /// Product name, at least 3 characters
    pub name: String,

    /// Product description, at least 3 characters
    #[serde(rename = "desc")]
    pub description: String,

    /// Price, greater than 0
    pub price: f64,

    /// Stock keeping unit, e.g. `abc-def-ghi`
    pub sku: String,
}

impl From<ProductRequest> for NewProduct {
    fn from(request: ProductRequest) -> Self {
        NewProduct {
            name: request.name,
            description: request.description,
            price: request.price,
            sku: request.sku,
        }
    }
}

impl From<ProductRequest> for ProductUpdate {
    fn from(request: ProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            description: request.description,
            price: request.price,
            sku: request.sku,
        }
    }
}

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The identifier assigned by the store
    pub id: u64,

    /// Product name
    pub name: String,

    /// Product description
    #[serde(rename = "desc")]
    pub description: String,

    /// Price
    pub price: f64,

    /// Stock keeping unit
    pub sku: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            sku: product.sku,
        }
    }
}
