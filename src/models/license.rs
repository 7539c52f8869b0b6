use diesel::prelude::*;
use jiff_diesel::DateTime;

/// License row as read from the database.
///
/// `status` is a caller-supplied string (`active`, `inactive`, `expired`);
/// no transition rules are enforced on it.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::licenses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct License {
    pub id: i32,
    pub business_id: i32,
    pub product_id: i32,
    pub license_key: String,
    pub status: String,
    pub expires_at: Option<DateTime>,
    pub created: DateTime,
    pub updated: DateTime,
    pub removed: Option<DateTime>,
}

/// Insertable license data.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::licenses)]
pub struct NewLicense {
    pub business_id: i32,
    pub product_id: i32,
    pub license_key: String,
    pub status: String,
    pub expires_at: Option<DateTime>,
}

/// Partial update for a license; `None` fields are left untouched.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::licenses)]
pub struct UpdateLicense {
    pub business_id: Option<i32>,
    pub product_id: Option<i32>,
    pub license_key: Option<String>,
    pub status: Option<String>,
    pub expires_at: Option<DateTime>,
}
