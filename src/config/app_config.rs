//! 应用配置管理
//!
//! 提供配置的加载功能，使用全局单例模式管理配置状态。
//! 配置在启动时加载一次，运行期间不会变化。

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// 获取配置文件路径
fn get_config_path() -> PathBuf {
    // 配置文件位于可执行文件同级目录
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 文档生成的模拟延迟（毫秒）
    #[serde(default = "default_doc_delay_ms")]
    pub doc_delay_ms: u64,

    /// 调用日志目录（默认为可执行文件同级的 storage 目录）
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    // Next.js 前端开发服务器占用 3000
    3001
}

fn default_doc_delay_ms() -> u64 {
    500
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            doc_delay_ms: default_doc_delay_ms(),
            log_dir: None,
        }
    }
}

/// 全局配置单例
static CONFIG: Lazy<AppConfig> = Lazy::new(|| load_config_from_file().unwrap_or_default());

/// 从文件加载配置
fn load_config_from_file() -> Option<AppConfig> {
    let path = get_config_path();
    if path.exists() {
        let content = fs::read_to_string(&path).ok()?;
        serde_json::from_str(&content).ok()
    } else {
        None
    }
}

/// 获取当前配置（克隆）
pub fn get_config() -> AppConfig {
    CONFIG.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3001);
        assert_eq!(config.doc_delay_ms, 500);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_config_partial_json() {
        let config: AppConfig = serde_json::from_str(r#"{"port": 8080}"#).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.doc_delay_ms, 500);
    }
}
