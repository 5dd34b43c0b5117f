//! 文档生成端点

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::api::response_timestamp;
use crate::error::{AppError, AppResult};
use crate::services::DocService;
use crate::state::AppState;

/// 文档生成响应
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub success: bool,
    /// 生成的 Markdown 文本
    pub result: String,
    pub timestamp: String,
}

/// 生成文档
async fn generate_document(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> AppResult<Json<DocumentResponse>> {
    // prompt 必须是字符串，其他 JSON 类型一律拒绝
    let prompt = body
        .get("prompt")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::BadRequest("Invalid prompt provided".to_string()))?;

    let entry = state.invocations.begin("document", prompt);
    let start = Instant::now();

    match DocService::new().generate(prompt).await {
        Ok(result) => {
            info!("Documentation generated: {} bytes", result.len());
            state.invocations.log_success(entry, start, result.len());
            Ok(Json(DocumentResponse {
                success: true,
                result,
                timestamp: response_timestamp(),
            }))
        }
        Err(e) => {
            state.invocations.log_error(entry, start, &e.to_string());
            Err(e)
        }
    }
}

/// 创建文档生成路由
pub fn document_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/document", post(generate_document))
}
