//! GitHub 活动分析端点

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::api::response_timestamp;
use crate::error::{AppError, AppResult};
use crate::models::{BarPoint, LinePoint};
use crate::services::GithubAnalysisService;
use crate::state::AppState;

/// 分析响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubAnalysisResponse {
    pub success: bool,
    /// 各语言提交量柱状图
    pub bar_data: Vec<BarPoint>,
    /// 每日提交数折线图，最早的在前
    pub line_data: Vec<LinePoint>,
    /// 回显请求中的时间范围选择器
    pub time_filter: String,
    pub timestamp: String,
}

/// 分析上传的 GitHub 活动 CSV
async fn analyze_github(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> AppResult<Json<GithubAnalysisResponse>> {
    let mut file_name: Option<String> = None;
    let mut file_content: Option<String> = None;
    let mut time_filter = "10d".to_string();

    // 读取 multipart 表单：file 字段 + 可选的 timeFilter 字段
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid form data: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string());
        match field_name.as_deref() {
            Some("file") => {
                file_name = field.file_name().map(|s| s.to_string());
                file_content = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(format!("Failed to read file: {}", e)))?,
                );
            }
            Some("timeFilter") => {
                time_filter = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read form field: {}", e)))?;
            }
            _ => {}
        }
    }

    let entry = state
        .invocations
        .begin("github-analysis", file_name.as_deref().unwrap_or("<no file>"));
    let start = Instant::now();

    let service = GithubAnalysisService::new();
    match service.analyze(file_name.as_deref(), file_content.as_deref(), &time_filter) {
        Ok(data) => {
            info!(
                "GitHub analysis done: {} bar points, {} line points, filter={}",
                data.bar_data.len(),
                data.line_data.len(),
                time_filter
            );
            state
                .invocations
                .log_success(entry, start, data.bar_data.len() + data.line_data.len());
            Ok(Json(GithubAnalysisResponse {
                success: true,
                bar_data: data.bar_data,
                line_data: data.line_data,
                time_filter,
                timestamp: response_timestamp(),
            }))
        }
        Err(e) => {
            state.invocations.log_error(entry, start, &e.to_string());
            Err(e)
        }
    }
}

/// 创建分析路由
pub fn github_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/github-analysis", post(analyze_github))
}
