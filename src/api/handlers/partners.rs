//! Partner CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::api::dto::{
    CreatePartnerRequest, PagedResponse, PaginationParams, PartnerListFilter, PartnerResponse,
    UpdatePartnerRequest,
};
use crate::error::AppError;
use crate::repositories::PartnerFilter;
use crate::state::AppState;

/// Creates partner-related routes.
pub fn partner_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_partners).post(create_partner))
        .route(
            "/{id}",
            get(get_partner).put(update_partner).delete(delete_partner),
        )
}

/// GET /api/partners - List partners
async fn list_partners(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<PartnerListFilter>,
) -> Result<Json<PagedResponse<PartnerResponse>>, AppError> {
    let pagination = pagination.normalize();
    let filter = PartnerFilter {
        name: filter.name,
        level: filter.level,
    };

    let (partners, total) = state
        .services
        .partners
        .list_partners(&filter, pagination.offset(), pagination.limit())
        .await?;

    let items: Vec<PartnerResponse> = partners.into_iter().map(PartnerResponse::from).collect();
    Ok(Json(PagedResponse::new(items, &pagination, total as u64)))
}

/// GET /api/partners/{id} - Get partner by ID
async fn get_partner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PartnerResponse>, AppError> {
    let partner = state.services.partners.get_partner(id).await?;
    Ok(Json(PartnerResponse::from(partner)))
}

/// POST /api/partners - Create new partner
async fn create_partner(
    State(state): State<AppState>,
    Json(payload): Json<CreatePartnerRequest>,
) -> Result<(StatusCode, Json<PartnerResponse>), AppError> {
    payload.validate()?;
    let partner = state
        .services
        .partners
        .create_partner(payload.into_new_partner())
        .await?;
    Ok((StatusCode::CREATED, Json(PartnerResponse::from(partner))))
}

/// PUT /api/partners/{id} - Update partner
async fn update_partner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePartnerRequest>,
) -> Result<Json<PartnerResponse>, AppError> {
    payload.validate()?;
    let partner = state
        .services
        .partners
        .update_partner(id, payload.into_update_partner())
        .await?;
    Ok(Json(PartnerResponse::from(partner)))
}

/// DELETE /api/partners/{id} - Soft-delete partner
///
/// Returns 404 when nothing matched; a downstream miss is never masked as
/// success.
async fn delete_partner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = state.services.partners.delete_partner(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("partner", id))
    }
}
