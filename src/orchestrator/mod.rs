//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (一次完整运行，打印提示和结果)
//!     ↓
//! workflow::Session (状态机 + 进行中保护)
//!     ↓
//! services (能力层：validate / upload / solve / present / export)
//!     ↓
//! clients (求解服务 API)
//!     ↓
//! infrastructure (基础设施：HttpExecutor / FileExporter)
//! ```

pub mod app;

pub use app::{App, RunOutcome};
