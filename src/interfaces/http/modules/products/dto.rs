//! Product DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{NewProduct, Product};
use crate::shared::validations::validate_safe_content;

/// Catalog product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Price in smallest currency unit
    pub price: i64,
    pub currency: String,
    /// Price for display, e.g. `12.50 USD`
    pub formatted_price: String,
    pub stock: i32,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            formatted_price: p.formatted_price(),
            in_stock: p.in_stock(),
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            currency: p.currency,
            stock: p.stock,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Paging query for the product list
///
/// Any integer is accepted: pages below 1 become 1 and non-positive sizes
/// fall back to the configured default.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListProductsParams {
    /// Page number (1-based). Default: 1
    pub page: Option<i64>,
    /// Items per page. Default: the configured page size (10)
    pub size: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(
        length(min = 1, max = 100, message = "product name must be 1-100 characters"),
        custom(function = "validate_safe_content")
    )]
    pub name: String,
    #[validate(
        length(max = 2000, message = "description is limited to 2000 characters"),
        custom(function = "validate_safe_content")
    )]
    pub description: Option<String>,
    #[validate(range(min = 0, message = "price must be non-negative"))]
    pub price: i64,
    #[validate(length(equal = 3, message = "currency must be a 3-letter ISO 4217 code"))]
    pub currency: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "stock must be non-negative"))]
    pub stock: i32,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            description: req.description.filter(|d| !d.trim().is_empty()),
            price: req.price,
            currency: req.currency.to_ascii_uppercase(),
            stock: req.stock,
        }
    }
}
