use axum::{
    extract::{Path, State},
    Json,
};
use models::{CloudVendor, Validatable};
use tracing::info;

use crate::{errors::ApiError, extract::VendorJson, routes::AppState};

#[utoipa::path(
    get, path = "/cloudvendor/{id}", tag = "cloudvendor",
    params(("id" = String, Path, description = "Cloud vendor id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CloudVendorDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_cloud_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CloudVendor>, ApiError> {
    let vendor = state.store.get(&id).await?;
    Ok(Json(vendor))
}

#[utoipa::path(
    get, path = "/cloudvendor/", tag = "cloudvendor",
    responses(
        (status = 200, description = "OK", body = [crate::openapi::CloudVendorDoc]),
        (status = 404, description = "No vendors stored")
    )
)]
pub async fn get_all_cloud_vendors(
    State(state): State<AppState>,
) -> Result<Json<Vec<CloudVendor>>, ApiError> {
    let vendors = state.store.get_all().await?;
    info!(count = vendors.len(), "list cloud vendors");
    Ok(Json(vendors))
}

#[utoipa::path(
    post, path = "/cloudvendor/", tag = "cloudvendor",
    request_body = crate::openapi::CloudVendorDoc,
    responses(
        (status = 200, description = "Created", body = String, content_type = "text/plain"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Id already taken"),
        (status = 415, description = "Content type is not JSON")
    )
)]
pub async fn create_cloud_vendor(
    State(state): State<AppState>,
    VendorJson(vendor): VendorJson<CloudVendor>,
) -> Result<String, ApiError> {
    vendor.validate()?;
    let id = vendor.id.clone();
    let outcome = state.store.create(vendor).await?;
    info!(%id, "created cloud vendor");
    Ok(outcome)
}

#[utoipa::path(
    put, path = "/cloudvendor/", tag = "cloudvendor",
    request_body = crate::openapi::CloudVendorDoc,
    responses(
        (status = 200, description = "Updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 415, description = "Content type is not JSON")
    )
)]
pub async fn update_cloud_vendor(
    State(state): State<AppState>,
    VendorJson(vendor): VendorJson<CloudVendor>,
) -> Result<String, ApiError> {
    vendor.validate()?;
    let id = vendor.id.clone();
    let outcome = state.store.update(vendor).await?;
    info!(%id, "updated cloud vendor");
    Ok(outcome)
}

#[utoipa::path(
    delete, path = "/cloudvendor/{id}", tag = "cloudvendor",
    params(("id" = String, Path, description = "Cloud vendor id")),
    responses(
        (status = 200, description = "Deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_cloud_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let outcome = state.store.delete(&id).await?;
    info!(%id, "deleted cloud vendor");
    Ok(outcome)
}
