//! Product-related DTOs for API requests and responses.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::dto::timestamp_string;
use crate::error::{AppError, AppResult};
use crate::models::{NewProduct, Product, UpdateProduct};

/// Request body for creating a new product.
///
/// `price` arrives as a decimal string to avoid floating point rounding.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 64, message = "Code must be between 1 and 64 characters"))]
    pub code: String,
    /// Decimal price, e.g. "1299.00"
    #[schema(example = "1299.00")]
    pub price: String,
    pub description: Option<String>,
}

impl CreateProductRequest {
    pub fn into_new_product(self) -> AppResult<NewProduct> {
        let price = parse_price(&self.price)?;
        Ok(NewProduct {
            name: self.name,
            code: self.code,
            price,
            description: self.description,
        })
    }
}

/// Request body for updating a product. Omitted fields are unchanged.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 64, message = "Code must be between 1 and 64 characters"))]
    pub code: Option<String>,
    #[schema(example = "1299.00")]
    pub price: Option<String>,
    pub description: Option<String>,
}

impl UpdateProductRequest {
    pub fn into_update_product(self) -> AppResult<UpdateProduct> {
        let price = self.price.as_deref().map(parse_price).transpose()?;
        Ok(UpdateProduct {
            name: self.name,
            code: self.code,
            price,
            description: self.description,
        })
    }
}

fn parse_price(raw: &str) -> AppResult<BigDecimal> {
    BigDecimal::from_str(raw).map_err(|_| AppError::Validation {
        field: "price".to_string(),
        reason: format!("'{}' is not a valid decimal number", raw),
    })
}

/// Query filters for product listings.
#[derive(Debug, Deserialize, IntoParams, Default)]
pub struct ProductListFilter {
    pub name: Option<String>,
    pub code: Option<String>,
}

/// Response body for product data.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub code: String,
    /// Decimal price as a string
    pub price: String,
    pub description: Option<String>,
    pub created: String,
    pub updated: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            code: product.code,
            price: product.price.to_string(),
            description: product.description,
            created: timestamp_string(product.created),
            updated: timestamp_string(product.updated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_valid() {
        assert_eq!(parse_price("1299.00").unwrap().to_string(), "1299.00");
        assert!(parse_price("0").is_ok());
    }

    #[test]
    fn test_parse_price_invalid() {
        let result = parse_price("twelve");
        match result {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "price"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }
}
