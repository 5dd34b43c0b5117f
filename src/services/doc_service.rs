//! 文档生成服务
//!
//! 根据提示语中的关键词选择固定 Markdown 模板，占位后续接入真实 AI 服务。
//! 关键词分发是确定性的，不调用外部模型，也没有随机性。

use std::time::Duration;

use crate::config::get_config;
use crate::error::{AppError, AppResult};
use crate::services::doc_templates;

/// 文档生成服务
pub struct DocService {
    /// 模拟异步生成的人工延迟
    delay: Duration,
}

impl DocService {
    /// 创建新的文档服务，延迟取自全局配置
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(get_config().doc_delay_ms),
        }
    }

    /// 使用指定延迟创建文档服务
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// 生成文档
    ///
    /// 提示语为空时返回 BadRequest，否则经过人工延迟后返回渲染好的 Markdown。
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        if prompt.trim().is_empty() {
            return Err(AppError::BadRequest("Invalid prompt provided".to_string()));
        }

        // 模拟 AI 服务的响应延迟
        tokio::time::sleep(self.delay).await;

        Ok(Self::render(prompt))
    }

    /// 根据关键词分发到对应模板
    ///
    /// 优先级：api/endpoint > function/code > 入门文档
    fn render(prompt: &str) -> String {
        let lowered = prompt.to_lowercase();

        if lowered.contains("api") || lowered.contains("endpoint") {
            doc_templates::render_api_doc(prompt)
        } else if lowered.contains("function") || lowered.contains("code") {
            doc_templates::render_function_doc(prompt)
        } else {
            doc_templates::render_getting_started_doc(prompt)
        }
    }
}

impl Default for DocService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dispatches_api_template() {
        let result = DocService::render("Document my REST API for orders");
        assert!(result.contains("# API Documentation"));

        let result = DocService::render("describe the /users endpoint");
        assert!(result.contains("# API Documentation"));
    }

    #[test]
    fn test_render_dispatches_function_template() {
        let result = DocService::render("sortItems function in utils");
        assert!(result.contains("# Function Documentation"));
        assert!(result.contains("function sortItems(param1, param2)"));
    }

    #[test]
    fn test_render_api_wins_over_function() {
        // 同时包含两组关键词时 API 模板优先
        let result = DocService::render("api function helper");
        assert!(result.contains("# API Documentation"));
    }

    #[test]
    fn test_render_falls_back_to_getting_started() {
        let result = DocService::render("my awesome library");
        assert!(result.starts_with("# my awesome library"));
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_prompt() {
        let service = DocService::with_delay(Duration::ZERO);
        let err = service.generate("   ").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_generate_returns_markdown() {
        let service = DocService::with_delay(Duration::ZERO);
        let result = service.generate("quickstart guide").await.unwrap();
        assert!(result.starts_with("# quickstart guide"));
    }
}
