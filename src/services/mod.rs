//! 服务层模块

mod doc_service;
mod doc_templates;
mod dsa_service;
mod github_service;

pub use doc_service::DocService;
pub use dsa_service::DsaCatalog;
pub use github_service::{AnalysisData, GithubAnalysisService};
