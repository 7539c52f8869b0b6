use diesel::prelude::*;
use jiff_diesel::DateTime;
use serde::Deserialize;

/// Business row as read from the database.
///
/// `customer_id` references the customers table; `manager_id` is the id of
/// a user in the external identity provider and carries no database
/// constraint.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::businesses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Business {
    pub id: i32,
    pub name: String,
    pub telnum: Option<String>,
    pub customer_id: Option<i32>,
    pub manager_id: Option<i32>,
    pub created: DateTime,
    pub updated: DateTime,
    pub removed: Option<DateTime>,
}

/// Insertable business data.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::businesses)]
pub struct NewBusiness {
    pub name: String,
    pub telnum: Option<String>,
    pub customer_id: Option<i32>,
    pub manager_id: Option<i32>,
}

/// Partial update for a business; `None` fields are left untouched.
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::businesses)]
pub struct UpdateBusiness {
    pub name: Option<String>,
    pub telnum: Option<String>,
    pub customer_id: Option<i32>,
    pub manager_id: Option<i32>,
}

/// Business history entry row.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::business_histories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BusinessHistory {
    pub id: i32,
    pub business_id: i32,
    pub content: String,
    pub created: DateTime,
    pub updated: DateTime,
    pub removed: Option<DateTime>,
}

/// Insertable business history data.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::business_histories)]
pub struct NewBusinessHistory {
    pub business_id: i32,
    pub content: String,
}

/// Partial update for a business history entry.
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::business_histories)]
pub struct UpdateBusinessHistory {
    pub content: Option<String>,
}
