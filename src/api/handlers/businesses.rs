//! Business CRUD and history request handlers.
//!
//! Reads return enriched responses: manager attributes resolved from the
//! identity provider and the owning customer's name, joined in the
//! service layer with batched lookups.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::api::dto::{
    BusinessDetailResponse, BusinessListFilter, BusinessResponse, CreateBusinessRequest,
    CreateHistoryRequest, HistoryResponse, PagedResponse, PaginationParams, UpdateBusinessRequest,
    UpdateHistoryRequest,
};
use crate::error::AppError;
use crate::repositories::BusinessFilter;
use crate::state::AppState;

/// Creates business-related routes.
///
/// Routes:
/// - GET /                            - List businesses with enrichment
/// - POST /                           - Create a new business
/// - GET /{id}                        - Get enriched business by ID
/// - PUT /{id}                        - Update business by ID
/// - DELETE /{id}                     - Soft-delete business by ID
/// - GET /{id}/histories              - List history entries
/// - POST /{id}/histories             - Add a history entry
/// - PUT /{id}/histories/{history_id} - Update a history entry
/// - DELETE /{id}/histories/{history_id} - Soft-delete a history entry
pub fn business_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_businesses).post(create_business))
        .route(
            "/{id}",
            get(get_business).put(update_business).delete(delete_business),
        )
        .route("/{id}/histories", get(list_histories).post(create_history))
        .route(
            "/{id}/histories/{history_id}",
            axum::routing::put(update_history).delete(delete_history),
        )
}

/// GET /api/businesses - List businesses with enrichment
async fn list_businesses(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<BusinessListFilter>,
) -> Result<Json<PagedResponse<BusinessDetailResponse>>, AppError> {
    let pagination = pagination.normalize();
    let filter = BusinessFilter {
        name: filter.name,
        customer_id: filter.customer_id,
        manager_id: filter.manager_id,
    };

    let (details, total) = state
        .services
        .businesses
        .list_businesses_detailed(&filter, pagination.offset(), pagination.limit())
        .await?;

    let items: Vec<BusinessDetailResponse> = details
        .into_iter()
        .map(BusinessDetailResponse::from)
        .collect();
    Ok(Json(PagedResponse::new(items, &pagination, total as u64)))
}

/// GET /api/businesses/{id} - Get enriched business by ID
async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BusinessDetailResponse>, AppError> {
    let detail = state.services.businesses.get_business_detailed(id).await?;
    Ok(Json(BusinessDetailResponse::from(detail)))
}

/// POST /api/businesses - Create new business
async fn create_business(
    State(state): State<AppState>,
    Json(payload): Json<CreateBusinessRequest>,
) -> Result<(StatusCode, Json<BusinessResponse>), AppError> {
    payload.validate()?;
    let business = state
        .services
        .businesses
        .create_business(payload.into_new_business())
        .await?;
    Ok((StatusCode::CREATED, Json(BusinessResponse::from(business))))
}

/// PUT /api/businesses/{id} - Update business
async fn update_business(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBusinessRequest>,
) -> Result<Json<BusinessResponse>, AppError> {
    payload.validate()?;
    let business = state
        .services
        .businesses
        .update_business(id, payload.into_update_business())
        .await?;
    Ok(Json(BusinessResponse::from(business)))
}

/// DELETE /api/businesses/{id} - Soft-delete business
async fn delete_business(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = state.services.businesses.delete_business(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("business", id))
    }
}

/// GET /api/businesses/{id}/histories - List history entries
async fn list_histories(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PagedResponse<HistoryResponse>>, AppError> {
    let pagination = pagination.normalize();

    let (histories, total) = state
        .services
        .businesses
        .list_histories(id, pagination.offset(), pagination.limit())
        .await?;

    let items: Vec<HistoryResponse> = histories.into_iter().map(HistoryResponse::from).collect();
    Ok(Json(PagedResponse::new(items, &pagination, total as u64)))
}

/// POST /api/businesses/{id}/histories - Add a history entry
async fn create_history(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CreateHistoryRequest>,
) -> Result<(StatusCode, Json<HistoryResponse>), AppError> {
    payload.validate()?;
    let history = state
        .services
        .businesses
        .add_history(id, payload.content)
        .await?;
    Ok((StatusCode::CREATED, Json(HistoryResponse::from(history))))
}

/// PUT /api/businesses/{id}/histories/{history_id} - Update a history entry
async fn update_history(
    State(state): State<AppState>,
    Path((_id, history_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateHistoryRequest>,
) -> Result<Json<HistoryResponse>, AppError> {
    payload.validate()?;
    let history = state
        .services
        .businesses
        .update_history(history_id, payload.into_update_history())
        .await?;
    Ok(Json(HistoryResponse::from(history)))
}

/// DELETE /api/businesses/{id}/histories/{history_id} - Soft-delete a
/// history entry
///
/// A miss surfaces as 404 rather than being reported as success.
async fn delete_history(
    State(state): State<AppState>,
    Path((_id, history_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    let deleted = state.services.businesses.delete_history(history_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("business history", history_id))
    }
}
