//! # Optimal Path Client
//!
//! 把描述 token 矩阵和带奖励序列的文本文件交给远端求解服务，
//! 取回最大奖励路径并展示、导出
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP Client），只暴露能力
//! - `HttpExecutor` - 唯一的 client owner，提供 post_json / post_file
//! - `FileExporter` - 保存文件的能力
//!
//! ### ② 业务能力层（Clients / Services）
//! - `clients/` - `SolverApi` 与其 HTTP 实现 `SolverClient`
//! - `SubmissionValidator` - 文件类型校验
//! - `UploadService` / `SolveService` - 上传、求解
//! - `ResultPresenter` / `ResultExporter` - 展示、导出
//!
//! ### ③ 流程层（Workflow）
//! - `WorkflowState` - 纯函数状态机（Idle → Loaded → Solving → Solved）
//! - `Session` - 串起各能力，保证同一时间最多一个上传、一个求解
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 一次完整的 选择 → 上传 → 求解 → 展示 → 导出
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{SolverApi, SolverClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ProblemInput, SelectedFile, SolveResult};
pub use orchestrator::{App, RunOutcome};
pub use workflow::{Session, WorkflowState};
