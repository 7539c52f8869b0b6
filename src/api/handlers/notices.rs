//! Notice CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::api::dto::{
    CreateNoticeRequest, NoticeListFilter, NoticeResponse, PagedResponse, PaginationParams,
    UpdateNoticeRequest,
};
use crate::error::AppError;
use crate::repositories::NoticeFilter;
use crate::state::AppState;

/// Creates notice-related routes.
pub fn notice_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notices).post(create_notice))
        .route(
            "/{id}",
            get(get_notice).put(update_notice).delete(delete_notice),
        )
}

/// GET /api/notices - List notices (pinned first)
async fn list_notices(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<NoticeListFilter>,
) -> Result<Json<PagedResponse<NoticeResponse>>, AppError> {
    let pagination = pagination.normalize();
    let filter = NoticeFilter {
        title: filter.title,
    };

    let (notices, total) = state
        .services
        .notices
        .list_notices(&filter, pagination.offset(), pagination.limit())
        .await?;

    let items: Vec<NoticeResponse> = notices.into_iter().map(NoticeResponse::from).collect();
    Ok(Json(PagedResponse::new(items, &pagination, total as u64)))
}

/// GET /api/notices/{id} - Get notice by ID
async fn get_notice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<NoticeResponse>, AppError> {
    let notice = state.services.notices.get_notice(id).await?;
    Ok(Json(NoticeResponse::from(notice)))
}

/// POST /api/notices - Create new notice
async fn create_notice(
    State(state): State<AppState>,
    Json(payload): Json<CreateNoticeRequest>,
) -> Result<(StatusCode, Json<NoticeResponse>), AppError> {
    payload.validate()?;
    let notice = state
        .services
        .notices
        .create_notice(payload.into_new_notice())
        .await?;
    Ok((StatusCode::CREATED, Json(NoticeResponse::from(notice))))
}

/// PUT /api/notices/{id} - Update notice
async fn update_notice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateNoticeRequest>,
) -> Result<Json<NoticeResponse>, AppError> {
    payload.validate()?;
    let notice = state
        .services
        .notices
        .update_notice(id, payload.into_update_notice())
        .await?;
    Ok(Json(NoticeResponse::from(notice)))
}

/// DELETE /api/notices/{id} - Soft-delete notice
async fn delete_notice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = state.services.notices.delete_notice(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("notice", id))
    }
}
