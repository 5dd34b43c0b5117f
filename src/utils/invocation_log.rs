//! 工具调用日志记录器
//!
//! 记录三个工具端点的每次调用到 JSONL 文件，便于调试和分析。
//! 写入失败会被忽略，日志记录不能影响请求处理。

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use uuid::Uuid;

/// 调用日志条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationEntry {
    /// 请求 ID
    pub request_id: String,
    /// 时间戳
    pub timestamp: DateTime<Utc>,
    /// 工具名称（document / github-analysis / dsa）
    pub tool: String,
    /// 输入预览（截断）
    pub input_preview: String,
    /// 状态
    pub status: String,
    /// 持续时间（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// 响应大小
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_size: Option<usize>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// 调用日志记录器
pub struct InvocationLogger {
    log_path: PathBuf,
    max_entries: usize,
    file: Mutex<Option<File>>,
}

impl InvocationLogger {
    /// 创建新的日志记录器
    pub fn new(log_dir: Option<PathBuf>) -> Self {
        let log_dir = log_dir.unwrap_or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."))
                .join("storage")
        });

        // 确保目录存在
        let _ = fs::create_dir_all(&log_dir);

        let log_path = log_dir.join("tool_invocations.jsonl");

        Self {
            log_path,
            max_entries: 1000,
            file: Mutex::new(None),
        }
    }

    /// 生成请求 ID
    pub fn generate_request_id() -> String {
        Uuid::new_v4().to_string()[..8].to_string()
    }

    /// 截断字符串
    fn truncate(s: &str, max_len: usize) -> String {
        if s.len() <= max_len {
            s.to_string()
        } else {
            let mut end = max_len;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &s[..end])
        }
    }

    /// 构建调用条目，此时尚未写入
    pub fn begin(&self, tool: &str, input: &str) -> InvocationEntry {
        InvocationEntry {
            request_id: Self::generate_request_id(),
            timestamp: Utc::now(),
            tool: tool.to_string(),
            input_preview: Self::truncate(input, 200),
            status: "pending".to_string(),
            duration_ms: None,
            response_size: None,
            error_message: None,
        }
    }

    /// 记录成功
    pub fn log_success(
        &self,
        mut entry: InvocationEntry,
        start_time: std::time::Instant,
        response_size: usize,
    ) {
        entry.status = "success".to_string();
        entry.duration_ms = Some(start_time.elapsed().as_millis() as u64);
        entry.response_size = Some(response_size);
        self.write_entry(&entry);
    }

    /// 记录错误
    pub fn log_error(
        &self,
        mut entry: InvocationEntry,
        start_time: std::time::Instant,
        error_message: &str,
    ) {
        entry.status = "error".to_string();
        entry.duration_ms = Some(start_time.elapsed().as_millis() as u64);
        entry.error_message = Some(Self::truncate(error_message, 500));
        self.write_entry(&entry);
    }

    /// 写入日志条目
    fn write_entry(&self, entry: &InvocationEntry) {
        let mut file_guard = self.file.lock();

        // 懒加载文件
        if file_guard.is_none() {
            if let Ok(f) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.log_path)
            {
                *file_guard = Some(f);
            }
        }

        if let Some(file) = file_guard.as_mut() {
            if let Ok(json) = serde_json::to_string(entry) {
                let _ = writeln!(file, "{}", json);
                let _ = file.flush();
            }
        }

        drop(file_guard);
        self.cleanup_if_needed();
    }

    /// 清理旧日志
    fn cleanup_if_needed(&self) {
        if let Ok(file) = File::open(&self.log_path) {
            let reader = BufReader::new(file);
            let lines: Vec<String> = reader.lines().filter_map(|l| l.ok()).collect();

            if lines.len() > self.max_entries {
                let keep_lines = &lines[lines.len() - self.max_entries..];
                if let Ok(mut file) = File::create(&self.log_path) {
                    for line in keep_lines {
                        let _ = writeln!(file, "{}", line);
                    }
                }
            }
        }
    }
}

impl Default for InvocationLogger {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_id_length() {
        let id = InvocationLogger::generate_request_id();
        assert_eq!(id.len(), 8);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(InvocationLogger::truncate("short", 10), "short");
        assert_eq!(InvocationLogger::truncate("0123456789ab", 10), "0123456789...");
    }

    #[test]
    fn test_begin_entry_is_pending() {
        let logger = InvocationLogger::new(Some(std::env::temp_dir()));
        let entry = logger.begin("dsa", "topic=arrays");
        assert_eq!(entry.status, "pending");
        assert_eq!(entry.tool, "dsa");
        assert!(entry.duration_ms.is_none());
    }
}
