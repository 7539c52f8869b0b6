use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::DateTime;
use serde::Deserialize;

/// Product row as read from the database.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub price: BigDecimal,
    pub description: Option<String>,
    pub created: DateTime,
    pub updated: DateTime,
    pub removed: Option<DateTime>,
}

/// Insertable product data.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub code: String,
    pub price: BigDecimal,
    pub description: Option<String>,
}

/// Partial update for a product; `None` fields are left untouched.
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub code: Option<String>,
    pub price: Option<BigDecimal>,
    pub description: Option<String>,
}
