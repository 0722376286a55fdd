use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use chrono::Utc;
use engine_logging::{engine_info, engine_warn};
use hn_core::FrontPageView;
use hn_engine::HnClient;

use crate::render::{render_error, render_front_page};

pub struct AppState {
    pub client: HnClient,
    pub num_stories: usize,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(front_page))
        .with_state(state)
}

async fn front_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.client.front_page(state.num_stories).await {
        Ok(page) => {
            engine_info!(
                "Front page with {} stories in {:?}",
                page.batch.stories.len(),
                page.elapsed
            );
            let view = FrontPageView::new(
                &page.batch.stories,
                page.batch.requested,
                page.elapsed,
                Utc::now().timestamp(),
            );
            (StatusCode::OK, Html(render_front_page(&view)))
        }
        Err(err) => {
            engine_warn!("Front page unavailable: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Html(render_error("Could not load the top stories. Try again shortly.")),
            )
        }
    }
}
