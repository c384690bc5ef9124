//! Dish HTTP handlers

use crate::core::entity::Entity;
use crate::core::error::AppError;
use crate::core::page::Page;
use crate::core::service::CrudService;
use crate::entities::Dish;
use crate::server::AppState;
use crate::server::dtos::{DishPayload, PageQuery, validated};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use futures::TryStreamExt;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Dish>>, AppError> {
    let dishes = state.dishes.find_all().try_collect().await?;
    Ok(Json(dishes))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Dish>, AppError> {
    state
        .dishes
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(Dish::kind(), id))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<DishPayload>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload)?;
    let created = state.dishes.save(payload.into_entity()).await?;

    let location = format!("/dishes/{}", created.id().unwrap_or_default());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<DishPayload>,
) -> Result<Json<Dish>, AppError> {
    let payload = validated(payload)?;
    state
        .dishes
        .update(&id, payload.into_entity())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(Dish::kind(), id))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.dishes.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(Dish::kind(), id))
    }
}

pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<Dish>>, AppError> {
    let page = state.dishes.get_page(query.page, query.size).await?;
    Ok(Json(page))
}
