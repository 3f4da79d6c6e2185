use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{requests::product::ProductCreateInput, response::product::ProductView},
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use shared::errors::HttpError;
use std::sync::Arc;

fn not_found(id: i32) -> HttpError {
    HttpError::NotFound(format!("Product with ID {id} not found"))
}

pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<ProductCreateInput>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    let location = format!("/products/{}", response.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(response)))
}

pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<ProductView>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    let response = service
        .update_product(&body)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    if !service.delete_product(id).await? {
        return Err(not_found(id));
    }

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Product deleted permanently"
        })),
    ))
}

pub fn product_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/products", get(get_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
