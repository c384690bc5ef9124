//! Client HTTP handlers

use crate::core::entity::Entity;
use crate::core::error::AppError;
use crate::core::page::Page;
use crate::core::service::CrudService;
use crate::entities::Client;
use crate::server::AppState;
use crate::server::dtos::{ClientPayload, PageQuery, PhotoPayload, validated};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use futures::TryStreamExt;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Client>>, AppError> {
    let clients = state.clients.find_all().try_collect().await?;
    Ok(Json(clients))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Client>, AppError> {
    state
        .clients
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(Client::kind(), id))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload)?;
    let created = state.clients.save(payload.into_entity()).await?;

    let location = format!("/clients/{}", created.id().unwrap_or_default());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ClientPayload>,
) -> Result<Json<Client>, AppError> {
    let payload = validated(payload)?;
    state
        .clients
        .update(&id, payload.into_entity())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(Client::kind(), id))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.clients.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(Client::kind(), id))
    }
}

pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<Client>>, AppError> {
    let page = state.clients.get_page(query.page, query.size).await?;
    Ok(Json(page))
}

pub async fn set_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PhotoPayload>,
) -> Result<Json<Client>, AppError> {
    let payload = validated(payload)?;
    state
        .clients
        .set_photo(&id, payload.url)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(Client::kind(), id))
}
