use diesel::prelude::*;
use jiff_diesel::DateTime;
use serde::Deserialize;

/// Customer row as read from the database.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub telnum: Option<String>,
    pub level: Option<String>,
    pub created: DateTime,
    pub updated: DateTime,
    pub removed: Option<DateTime>,
}

/// Insertable customer data.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer {
    pub name: String,
    pub telnum: Option<String>,
    pub level: Option<String>,
}

/// Partial update for a customer; `None` fields are left untouched.
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::customers)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub telnum: Option<String>,
    pub level: Option<String>,
}
