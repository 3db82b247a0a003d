use chefai_core::domain::recipe::entities::Mood;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMoodsResponse {
    pub data: Vec<Mood>,
}

#[utoipa::path(
    get,
    path = "/moods",
    tag = "catalog",
    summary = "Cooking moods",
    description = "Lists the cooking moods accepted by the recipe endpoint, in menu order.",
    responses(
        (status = 200, body = GetMoodsResponse)
    ),
)]
pub async fn get_moods() -> Response<GetMoodsResponse> {
    Response::OK(GetMoodsResponse {
        data: Mood::ALL.to_vec(),
    })
}
