//! REST API 请求/响应模型
//!
//! 跨层共享的数据类型，字段命名与前端约定保持一致。

use serde::Serialize;

/// 题目难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// DSA 练习题
#[derive(Debug, Clone, Serialize)]
pub struct DsaQuestion {
    /// 题目 ID（全局唯一且稳定）
    pub id: &'static str,
    /// 题目标题
    pub title: &'static str,
    /// 难度
    pub difficulty: Difficulty,
    /// 分类名称
    pub category: &'static str,
    /// 通过率（百分比，0-100）
    #[serde(rename = "acceptance")]
    pub acceptance_rate: u8,
}

/// 柱状图数据点（语言名称 + 提交量）
#[derive(Debug, Clone, Serialize)]
pub struct BarPoint {
    pub name: &'static str,
    pub value: u32,
}

/// 折线图数据点（日期标签 + 提交数）
#[derive(Debug, Clone, Serialize)]
pub struct LinePoint {
    pub date: String,
    pub commits: u32,
}
