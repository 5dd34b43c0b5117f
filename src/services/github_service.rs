//! GitHub 活动分析服务
//!
//! 校验上传的 CSV 文件并返回合成图表数据，占位后续接入真实统计分析。
//! 上传内容只参与存在性/空内容校验，行内容不会进入输出。

use chrono::Utc;
use rand::Rng;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{BarPoint, LinePoint};

/// 柱状图的固定语言标签及取值区间
const LANGUAGE_RANGES: [(&str, u32, u32); 5] = [
    ("JavaScript", 200, 1200),
    ("TypeScript", 200, 1200),
    ("Python", 100, 900),
    ("Go", 50, 650),
    ("Rust", 30, 530),
];

/// 每日提交数取值区间
const COMMITS_MIN: u32 = 5;
const COMMITS_MAX: u32 = 55;

/// 分析结果数据
#[derive(Debug, Clone)]
pub struct AnalysisData {
    pub bar_data: Vec<BarPoint>,
    pub line_data: Vec<LinePoint>,
}

/// GitHub 活动分析服务
pub struct GithubAnalysisService;

impl GithubAnalysisService {
    /// 创建新的分析服务
    pub fn new() -> Self {
        Self
    }

    /// 分析上传的 CSV 文件
    ///
    /// 校验顺序：文件缺失 -> 扩展名 -> 空内容。通过校验后生成随机图表序列，
    /// 每次调用相互独立，序列长度由时间范围选择器决定。
    pub fn analyze(
        &self,
        file_name: Option<&str>,
        file_content: Option<&str>,
        time_filter: &str,
    ) -> AppResult<AnalysisData> {
        let content = match file_content {
            Some(c) => c,
            None => return Err(AppError::BadRequest("No file provided".to_string())),
        };

        let name = file_name.unwrap_or_default();
        if !name.ends_with(".csv") {
            return Err(AppError::BadRequest(
                "Only CSV files are supported".to_string(),
            ));
        }

        if content.trim().is_empty() {
            return Err(AppError::BadRequest("CSV file is empty".to_string()));
        }

        // 仅统计非空行数用于调试日志，行内容不参与分析
        let line_count = content.lines().filter(|l| !l.trim().is_empty()).count();
        debug!("CSV file accepted: {} non-blank lines", line_count);

        Ok(AnalysisData {
            bar_data: Self::build_bar_data(),
            line_data: Self::build_line_data(time_filter),
        })
    }

    /// 生成柱状图数据：5 个固定语言标签，各自独立取随机值
    fn build_bar_data() -> Vec<BarPoint> {
        let mut rng = rand::rng();
        LANGUAGE_RANGES
            .iter()
            .map(|&(name, min, max)| BarPoint {
                name,
                value: rng.random_range(min..max),
            })
            .collect()
    }

    /// 生成折线图数据
    ///
    /// 从今天往回数 day_count 天到 0 天（含），共 day_count + 1 个点，最早的在前
    fn build_line_data(time_filter: &str) -> Vec<LinePoint> {
        let days_back = Self::days_back(time_filter);
        let today = Utc::now().date_naive();
        let mut rng = rand::rng();

        (0..=days_back)
            .rev()
            .map(|i| {
                let date = today - chrono::Duration::days(i);
                LinePoint {
                    date: date.format("%b %-d").to_string(),
                    commits: rng.random_range(COMMITS_MIN..COMMITS_MAX),
                }
            })
            .collect()
    }

    /// 时间范围选择器映射为天数，未识别的值回退到 10 天
    fn days_back(time_filter: &str) -> i64 {
        match time_filter {
            "1m" => 30,
            "3m" => 90,
            _ => 10,
        }
    }
}

impl Default for GithubAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_rejects_missing_file() {
        let service = GithubAnalysisService::new();
        let err = service.analyze(None, None, "10d").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "No file provided"));
    }

    #[test]
    fn test_analyze_rejects_non_csv() {
        let service = GithubAnalysisService::new();
        let err = service
            .analyze(Some("commits.txt"), Some("a,b,c"), "10d")
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Only CSV files are supported"));
    }

    #[test]
    fn test_analyze_rejects_empty_content() {
        let service = GithubAnalysisService::new();
        let err = service
            .analyze(Some("commits.csv"), Some("  \n\n  "), "10d")
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "CSV file is empty"));
    }

    #[test]
    fn test_line_data_length_per_time_filter() {
        let service = GithubAnalysisService::new();
        for (filter, expected) in [("10d", 11), ("1m", 31), ("3m", 91), ("unknown", 11)] {
            let result = service
                .analyze(Some("data.csv"), Some("a,b\n1,2"), filter)
                .unwrap();
            assert_eq!(result.line_data.len(), expected, "filter {}", filter);
        }
    }

    #[test]
    fn test_line_data_is_oldest_first() {
        let service = GithubAnalysisService::new();
        let result = service
            .analyze(Some("data.csv"), Some("a,b\n1,2"), "1m")
            .unwrap();

        let today = Utc::now().date_naive();
        let oldest = today - chrono::Duration::days(30);
        assert_eq!(result.line_data[0].date, oldest.format("%b %-d").to_string());
        assert_eq!(
            result.line_data.last().unwrap().date,
            today.format("%b %-d").to_string()
        );
    }

    #[test]
    fn test_bar_data_labels_and_ranges() {
        let service = GithubAnalysisService::new();
        let result = service
            .analyze(Some("data.csv"), Some("header\nrow"), "10d")
            .unwrap();

        let names: Vec<&str> = result.bar_data.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["JavaScript", "TypeScript", "Python", "Go", "Rust"]
        );
        for (point, &(_, min, max)) in result.bar_data.iter().zip(LANGUAGE_RANGES.iter()) {
            assert!(point.value >= min && point.value < max);
        }
    }

    #[test]
    fn test_commit_counts_within_range() {
        let service = GithubAnalysisService::new();
        let result = service
            .analyze(Some("data.csv"), Some("header\nrow"), "3m")
            .unwrap();
        for point in &result.line_data {
            assert!(point.commits >= COMMITS_MIN && point.commits < COMMITS_MAX);
        }
    }
}
