//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。

use std::sync::Arc;

use crate::config::get_config;
use crate::services::DsaCatalog;
use crate::utils::InvocationLogger;

/// 应用共享状态
///
/// 使用 Arc 包裹以便在多个处理器之间安全共享。
/// 题库是不可变数据，调用日志内部自带文件锁，处理器之间无需额外同步。
pub struct AppState {
    /// DSA 题库
    pub catalog: DsaCatalog,
    /// 工具调用日志
    pub invocations: InvocationLogger,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new() -> Self {
        Self {
            catalog: DsaCatalog::new(),
            invocations: InvocationLogger::new(get_config().log_dir),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state() -> Arc<AppState> {
    Arc::new(AppState::new())
}
