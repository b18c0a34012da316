use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::app::AppState;
use crate::document::{Page, Region};
use crate::error::InternalError;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    regions: &'a [Region],
}

pub async fn get_index(State(state): State<AppState>) -> Result<Html<String>, InternalError> {
    render_page(&state.page)
        .map(Html)
        .map_err(|error| InternalError::new(format!("could not render page: {error}")))
}

pub fn render_page(page: &Page) -> askama::Result<String> {
    IndexTemplate {
        regions: page.regions(),
    }
    .render()
}
