//! Customer CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::api::dto::{
    CreateCustomerRequest, CustomerListFilter, CustomerResponse, PagedResponse, PaginationParams,
    UpdateCustomerRequest,
};
use crate::error::AppError;
use crate::repositories::CustomerFilter;
use crate::state::AppState;

/// Creates customer-related routes.
///
/// Routes:
/// - GET /        - List customers (paginated, filterable)
/// - POST /       - Create a new customer
/// - GET /{id}    - Get customer by ID
/// - PUT /{id}    - Update customer by ID
/// - DELETE /{id} - Soft-delete customer by ID
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

/// GET /api/customers - List customers
///
/// Supports `page`/`page_size` pagination and `name`/`level` LIKE filters.
async fn list_customers(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<CustomerListFilter>,
) -> Result<Json<PagedResponse<CustomerResponse>>, AppError> {
    let pagination = pagination.normalize();
    let filter = CustomerFilter {
        name: filter.name,
        level: filter.level,
    };

    let (customers, total) = state
        .services
        .customers
        .list_customers(&filter, pagination.offset(), pagination.limit())
        .await?;

    let items: Vec<CustomerResponse> = customers.into_iter().map(CustomerResponse::from).collect();
    Ok(Json(PagedResponse::new(items, &pagination, total as u64)))
}

/// GET /api/customers/{id} - Get customer by ID
///
/// Returns 404 when absent or soft-deleted.
async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state.services.customers.get_customer(id).await?;
    Ok(Json(CustomerResponse::from(customer)))
}

/// POST /api/customers - Create new customer
///
/// Returns 201 Created with the created customer data.
async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    payload.validate()?;
    let customer = state
        .services
        .customers
        .create_customer(payload.into_new_customer())
        .await?;
    Ok((StatusCode::CREATED, Json(CustomerResponse::from(customer))))
}

/// PUT /api/customers/{id} - Update customer
///
/// Performs a shallow merge: omitted fields keep their current values.
async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    payload.validate()?;
    let customer = state
        .services
        .customers
        .update_customer(id, payload.into_update_customer())
        .await?;
    Ok(Json(CustomerResponse::from(customer)))
}

/// DELETE /api/customers/{id} - Soft-delete customer
///
/// Returns 204 No Content on success, 404 when nothing matched.
async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = state.services.customers.delete_customer(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("customer", id))
    }
}
