//! API 路由模块

mod document;
mod dsa;
mod github;
mod health;

pub use document::document_routes;
pub use dsa::dsa_routes;
pub use github::github_routes;
pub use health::health_routes;

use axum::Router;
use chrono::{SecondsFormat, Utc};

use crate::state::AppState;
use std::sync::Arc;

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(document_routes())
        .merge(github_routes())
        .merge(dsa_routes())
        .with_state(state)
}

/// 响应时间戳（ISO-8601，毫秒精度，UTC）
pub(crate) fn response_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
