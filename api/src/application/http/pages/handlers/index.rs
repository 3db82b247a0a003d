use axum::{extract::State, response::Html};

use crate::application::http::{
    pages::{
        render::{PageView, RecipePanel, render_page},
        session::SessionContext,
    },
    server::app_state::AppState,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = SessionContext::default();

    Html(render_page(&PageView {
        root_path: state.root_path(),
        session: &session,
        notice: None,
        panel: RecipePanel::Empty,
    }))
}
