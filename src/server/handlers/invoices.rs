//! Invoice HTTP handlers, including the PDF report endpoint

use crate::core::entity::Entity;
use crate::core::error::AppError;
use crate::core::page::Page;
use crate::core::service::CrudService;
use crate::entities::Invoice;
use crate::server::AppState;
use crate::server::dtos::{InvoicePayload, PageQuery, validated};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use futures::TryStreamExt;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Invoice>>, AppError> {
    let invoices = state.invoices.find_all().try_collect().await?;
    Ok(Json(invoices))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Invoice>, AppError> {
    state
        .invoices
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(Invoice::kind(), id))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<InvoicePayload>,
) -> Result<impl IntoResponse, AppError> {
    // References are not checked here; a dangling client or dish id only
    // surfaces when a report is requested.
    let payload = validated(payload)?;
    let created = state.invoices.save(payload.into_entity()).await?;

    let location = format!("/invoices/{}", created.id().unwrap_or_default());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<InvoicePayload>,
) -> Result<Json<Invoice>, AppError> {
    let payload = validated(payload)?;
    state
        .invoices
        .update(&id, payload.into_entity())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(Invoice::kind(), id))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.invoices.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(Invoice::kind(), id))
    }
}

pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<Invoice>>, AppError> {
    let page = state.invoices.get_page(query.page, query.size).await?;
    Ok(Json(page))
}

/// `GET /invoices/generateReport/{id}` → `application/pdf` body or 404.
///
/// Resolution and render failures come back as 404 like a missing invoice
/// (the contract inherited from the original surface), but the distinct
/// kind is logged before the collapse.
pub async fn generate_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.invoices.generate_report(&id).await {
        Ok(bytes) => Ok((
            [(header::CONTENT_TYPE, "application/pdf")],
            bytes,
        )
            .into_response()),
        Err(err @ (AppError::ReferenceResolution { .. } | AppError::Render(_))) => {
            tracing::warn!(invoice_id = %id, error = %err, "invoice report failed");
            Err(err)
        }
        Err(err) => Err(err),
    }
}
