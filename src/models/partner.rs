use diesel::prelude::*;
use jiff_diesel::DateTime;
use serde::Deserialize;

/// Partner row as read from the database.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::partners)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Partner {
    pub id: i32,
    pub name: String,
    pub telnum: Option<String>,
    pub level: Option<String>,
    pub created: DateTime,
    pub updated: DateTime,
    pub removed: Option<DateTime>,
}

/// Insertable partner data.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::partners)]
pub struct NewPartner {
    pub name: String,
    pub telnum: Option<String>,
    pub level: Option<String>,
}

/// Partial update for a partner; `None` fields are left untouched.
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::partners)]
pub struct UpdatePartner {
    pub name: Option<String>,
    pub telnum: Option<String>,
    pub level: Option<String>,
}
