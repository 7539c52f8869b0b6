use diesel::prelude::*;
use jiff_diesel::DateTime;
use serde::Deserialize;

/// Notice row as read from the database. Notices have no relations.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::notices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Notice {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub pinned: bool,
    pub created: DateTime,
    pub updated: DateTime,
    pub removed: Option<DateTime>,
}

/// Insertable notice data.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::notices)]
pub struct NewNotice {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
}

/// Partial update for a notice; `None` fields are left untouched.
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::notices)]
pub struct UpdateNotice {
    pub title: Option<String>,
    pub content: Option<String>,
    pub pinned: Option<bool>,
}
