use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::{Product, ProductInput};

/// Body of `POST /products`.
///
/// Missing fields default to their zero value and are then reported by the
/// validation rules, so callers get a field-specific message.
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    #[oai(default)]
    pub name: String,
    /// Product description (cannot be empty)
    #[oai(default)]
    pub description: String,
    /// Units in stock (must be greater than zero)
    #[oai(default)]
    pub quantity: i32,
    /// Price in the smallest currency unit (must be greater than zero)
    #[oai(default)]
    pub price: i64,
}

impl From<CreateProductRequest> for ProductInput {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            quantity: request.quantity,
            price: request.price,
        }
    }
}

/// Body of `PUT /products/{id}`. Omitted, empty or zero fields keep the
/// stored value.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// New name
    #[oai(default)]
    pub name: String,
    /// New description
    #[oai(default)]
    pub description: String,
    /// New quantity
    #[oai(default)]
    pub quantity: i32,
    /// New price in the smallest currency unit
    #[oai(default)]
    pub price: i64,
}

impl From<UpdateProductRequest> for ProductInput {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            quantity: request.quantity,
            price: request.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Units in stock
    pub quantity: i32,
    /// Price in the smallest currency unit
    pub price: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Soft deletion timestamp, absent while the product is active
    #[oai(skip_serializing_if_is_none)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            quantity: product.quantity,
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
            deleted_at: product.deleted_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
