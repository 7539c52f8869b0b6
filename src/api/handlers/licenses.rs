//! License CRUD request handlers.
//!
//! Reads return license rows joined with the owning business and licensed
//! product names.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::api::dto::{
    CreateLicenseRequest, LicenseDetailResponse, LicenseListFilter, LicenseResponse,
    PagedResponse, PaginationParams, UpdateLicenseRequest,
};
use crate::error::AppError;
use crate::repositories::LicenseFilter;
use crate::state::AppState;

/// Creates license-related routes.
pub fn license_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_licenses).post(create_license))
        .route(
            "/{id}",
            get(get_license).put(update_license).delete(delete_license),
        )
}

/// GET /api/licenses - List licenses with enrichment
///
/// Supports `status` (equality), `business_id`, and `product_id` filters.
async fn list_licenses(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<LicenseListFilter>,
) -> Result<Json<PagedResponse<LicenseDetailResponse>>, AppError> {
    let pagination = pagination.normalize();
    let filter = LicenseFilter {
        status: filter.status,
        business_id: filter.business_id,
        product_id: filter.product_id,
    };

    let (details, total) = state
        .services
        .licenses
        .list_licenses_detailed(&filter, pagination.offset(), pagination.limit())
        .await?;

    let items: Vec<LicenseDetailResponse> = details
        .into_iter()
        .map(LicenseDetailResponse::from)
        .collect();
    Ok(Json(PagedResponse::new(items, &pagination, total as u64)))
}

/// GET /api/licenses/{id} - Get enriched license by ID
async fn get_license(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<LicenseDetailResponse>, AppError> {
    let detail = state.services.licenses.get_license_detailed(id).await?;
    Ok(Json(LicenseDetailResponse::from(detail)))
}

/// POST /api/licenses - Create new license
async fn create_license(
    State(state): State<AppState>,
    Json(payload): Json<CreateLicenseRequest>,
) -> Result<(StatusCode, Json<LicenseResponse>), AppError> {
    payload.validate()?;
    let license = state
        .services
        .licenses
        .create_license(payload.into_new_license())
        .await?;
    Ok((StatusCode::CREATED, Json(LicenseResponse::from(license))))
}

/// PUT /api/licenses/{id} - Update license
///
/// `status` is stored as supplied; no transition rules apply.
async fn update_license(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLicenseRequest>,
) -> Result<Json<LicenseResponse>, AppError> {
    payload.validate()?;
    let license = state
        .services
        .licenses
        .update_license(id, payload.into_update_license())
        .await?;
    Ok(Json(LicenseResponse::from(license)))
}

/// DELETE /api/licenses/{id} - Soft-delete license
async fn delete_license(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = state.services.licenses.delete_license(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("license", id))
    }
}
