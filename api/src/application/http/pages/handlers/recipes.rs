use axum::{extract::State, http::StatusCode, response::Html};
use axum_extra::extract::Form;
use chefai_core::domain::recipe::services::RecipeService;
use tracing::error;

use crate::application::http::{
    pages::{
        render::{Notice, PageView, RecipePanel, render_page},
        session::{RecipeForm, SessionContext},
    },
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

/// Builds the ingredient selection from the submitted picker and, when it is
/// not empty, asks for recipes.
pub async fn recipes(
    State(state): State<AppState>,
    Form(form): Form<RecipeForm>,
) -> (StatusCode, Html<String>) {
    let session = match SessionContext::from_form(form) {
        Ok(session) => session,
        Err(e) => {
            let session = SessionContext::default();
            let html = render_page(&PageView {
                root_path: state.root_path(),
                session: &session,
                notice: Some(Notice::Error(e.to_string())),
                panel: RecipePanel::Empty,
            });
            return (e.status(), Html(html));
        }
    };

    let selection = session.selection();
    if selection.is_empty() {
        let html = render_page(&PageView {
            root_path: state.root_path(),
            session: &session,
            notice: None,
            panel: RecipePanel::Empty,
        });
        return (StatusCode::OK, Html(html));
    }

    let stats = session.stats(&selection);
    let (status, recipes) = match state
        .service
        .generate_recipes(selection.items().to_vec(), session.mood)
        .await
    {
        Ok(recipes) => (StatusCode::OK, Ok(recipes)),
        Err(e) => {
            error!("Recipe generation unavailable: {}", e);
            let api_error = ApiError::from(e);
            (api_error.status(), Err(api_error.to_string()))
        }
    };

    let html = render_page(&PageView {
        root_path: state.root_path(),
        session: &session,
        notice: None,
        panel: RecipePanel::Ready {
            selection,
            stats,
            recipes,
        },
    });

    (status, Html(html))
}
