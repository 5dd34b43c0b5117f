//! 数据模型模块

mod api;

pub use api::{BarPoint, Difficulty, DsaQuestion, LinePoint};
