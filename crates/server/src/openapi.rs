use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of a cloud vendor record.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CloudVendorDoc {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Exactly 10 decimal digits.
    #[schema(example = "1234567890")]
    pub vendor_phone_number: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cloud_vendor::get_cloud_vendor,
        crate::routes::cloud_vendor::get_all_cloud_vendors,
        crate::routes::cloud_vendor::create_cloud_vendor,
        crate::routes::cloud_vendor::update_cloud_vendor,
        crate::routes::cloud_vendor::delete_cloud_vendor,
    ),
    components(
        schemas(
            HealthResponse,
            CloudVendorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "cloudvendor")
    )
)]
pub struct ApiDoc;
