//! DSA 题库端点

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::api::response_timestamp;
use crate::error::{AppError, AppResult};
use crate::models::DsaQuestion;
use crate::state::AppState;

/// 题库查询参数
#[derive(Debug, Deserialize)]
pub struct DsaQuery {
    /// 主题键，如 "arrays"、"dp"
    pub topic: Option<String>,
}

/// 题库响应
#[derive(Debug, Serialize)]
pub struct DsaResponse {
    pub success: bool,
    /// 规范化（小写）后的主题键
    pub topic: String,
    pub questions: Vec<DsaQuestion>,
    pub count: usize,
    pub timestamp: String,
}

/// 按主题查询题目
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DsaQuery>,
) -> AppResult<Json<DsaResponse>> {
    let entry = state
        .invocations
        .begin("dsa", query.topic.as_deref().unwrap_or("<missing>"));
    let start = Instant::now();

    match lookup_topic(&state, query.topic.as_deref()) {
        Ok((topic, questions)) => {
            info!("DSA lookup: topic={}, {} questions", topic, questions.len());
            state.invocations.log_success(entry, start, questions.len());
            Ok(Json(DsaResponse {
                success: true,
                count: questions.len(),
                questions: questions.to_vec(),
                topic,
                timestamp: response_timestamp(),
            }))
        }
        Err(e) => {
            state.invocations.log_error(entry, start, &e.to_string());
            Err(e)
        }
    }
}

/// 校验并查询主题
///
/// 缺失或为空的 topic 参数返回 BadRequest，未知主题返回 NotFound 并附上可用主题列表
fn lookup_topic(
    state: &AppState,
    topic: Option<&str>,
) -> AppResult<(String, &'static [DsaQuestion])> {
    let topic = match topic {
        Some(t) if !t.is_empty() => t,
        _ => {
            return Err(AppError::BadRequest(
                "Topic parameter is required".to_string(),
            ))
        }
    };

    let normalized = topic.to_lowercase();
    match state.catalog.questions_for(&normalized) {
        Some(questions) => Ok((normalized, questions)),
        None => Err(AppError::NotFound(format!(
            "Topic '{}' not found. Available topics: {}",
            normalized,
            state.catalog.topic_keys().join(", ")
        ))),
    }
}

/// 创建题库路由
pub fn dsa_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/dsa", get(list_questions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_requires_topic() {
        let state = AppState::new();
        let err = lookup_topic(&state, None).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = lookup_topic(&state, Some("")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_lookup_normalizes_case() {
        let state = AppState::new();
        let (topic, questions) = lookup_topic(&state, Some("Linked-Lists")).unwrap();
        assert_eq!(topic, "linked-lists");
        assert_eq!(questions.len(), 5);
    }

    #[test]
    fn test_unknown_topic_lists_all_keys() {
        let state = AppState::new();
        let err = lookup_topic(&state, Some("nonexistent")).unwrap_err();
        match err {
            AppError::NotFound(msg) => {
                assert!(msg.contains("Topic 'nonexistent' not found"));
                let listed = msg.split("Available topics: ").nth(1).unwrap();
                assert_eq!(listed.split(", ").count(), 10);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
