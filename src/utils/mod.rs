//! 工具模块

mod invocation_log;

pub use invocation_log::{InvocationEntry, InvocationLogger};
