//! Notice-related DTOs for API requests and responses.

use crate::api::dto::timestamp_string;
use crate::models::{NewNotice, Notice, UpdateNotice};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request body for creating a new notice.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateNoticeRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
}

impl CreateNoticeRequest {
    pub fn into_new_notice(self) -> NewNotice {
        NewNotice {
            title: self.title,
            content: self.content,
            pinned: self.pinned,
        }
    }
}

/// Request body for updating a notice. Omitted fields are unchanged.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateNoticeRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,
    pub pinned: Option<bool>,
}

impl UpdateNoticeRequest {
    pub fn into_update_notice(self) -> UpdateNotice {
        UpdateNotice {
            title: self.title,
            content: self.content,
            pinned: self.pinned,
        }
    }
}

/// Query filters for notice listings.
#[derive(Debug, Deserialize, IntoParams, Default)]
pub struct NoticeListFilter {
    /// Substring match on title
    pub title: Option<String>,
}

/// Response body for notice data.
#[derive(Debug, Serialize, ToSchema)]
pub struct NoticeResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub pinned: bool,
    pub created: String,
    pub updated: String,
}

impl From<Notice> for NoticeResponse {
    fn from(notice: Notice) -> Self {
        Self {
            id: notice.id,
            title: notice.title,
            content: notice.content,
            pinned: notice.pinned,
            created: timestamp_string(notice.created),
            updated: timestamp_string(notice.updated),
        }
    }
}
