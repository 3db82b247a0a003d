use chefai_core::domain::ingredient::catalog::{CatalogCategory, get_common_fridge_ingredients};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCatalogResponse {
    pub data: Vec<CatalogCategory>,
}

#[utoipa::path(
    get,
    path = "/catalog",
    tag = "catalog",
    summary = "Common ingredients",
    description = "Lists the categorized refrigerator and pantry staples offered for manual selection.",
    responses(
        (status = 200, body = GetCatalogResponse)
    ),
)]
pub async fn get_catalog() -> Response<GetCatalogResponse> {
    Response::OK(GetCatalogResponse {
        data: get_common_fridge_ingredients(),
    })
}
