//! 单次求解流程 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：启动日志、创建求解服务客户端和导出器
//! 2. **完整流程**：选择文件 → 上传 → 展示题目 → 求解 → 展示结果 → 导出
//! 3. **用户提示**：把错误转换成提示打印出来，细节只进日志
//!
//! 不做具体业务判断，只做调度

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::clients::{SolverApi, SolverClient};
use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::{FileExporter, FsFileExporter};
use crate::models::{Classification, SelectedFile};
use crate::services::{ResultExporter, ResultPresenter};
use crate::utils::logging;
use crate::workflow::Session;

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub classification: Classification,
    pub max_reward: f64,
    pub total_rewards: f64,
    /// 导出文件位置（无序列时不导出）
    pub export_path: Option<PathBuf>,
}

/// 应用主结构
pub struct App<A, E> {
    config: Config,
    session: Session<A>,
    presenter: ResultPresenter,
    exporter: ResultExporter<E>,
}

impl App<SolverClient, FsFileExporter> {
    /// 按配置初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logging::init_log_file(&config.output_log_file)
            .with_context(|| format!("无法初始化日志文件: {}", config.output_log_file))?;
        logging::log_startup(&config);

        let client = SolverClient::new(&config).context("无法创建 HTTP 客户端")?;
        let exporter = FsFileExporter::new(&config.export_dir);

        Ok(Self::with_parts(config, client, exporter))
    }
}

impl<A: SolverApi, E: FileExporter> App<A, E> {
    /// 使用指定的服务实现和导出器创建应用
    pub fn with_parts(config: Config, api: A, exporter: E) -> Self {
        let exporter = ResultExporter::with_file_name(exporter, config.export_file_name.clone());
        Self {
            config,
            session: Session::new(api),
            presenter: ResultPresenter::new(),
            exporter,
        }
    }

    pub fn session(&self) -> &Session<A> {
        &self.session
    }

    /// 处理一个输入文件
    ///
    /// # 参数
    /// - `path`: 输入文件路径
    ///
    /// # 返回
    /// 返回分类和导出位置
    pub async fn run(&mut self, path: &Path) -> Result<RunOutcome> {
        let file = SelectedFile::from_path(path)
            .await
            .map_err(|e| self.notify(e))?;
        self.presenter.close();
        self.session
            .select_file(Some(file))
            .map_err(|e| self.notify(e))?;

        // ========== 上传 ==========
        let problem = self.session.upload().await.map_err(|e| self.notify(e))?;
        let total_rewards = self.session.total_rewards();
        logging::log_problem_loaded(&problem, total_rewards);
        if let Some(view) = ResultPresenter::render_problem(&problem) {
            println!("{}\n", view);
        }

        // ========== 求解 ==========
        let result = self.session.solve().await.map_err(|e| self.notify(e))?;
        let classification = result.classify(total_rewards);
        logging::log_solve_complete(&result, classification);

        self.presenter.open(&result);
        if let Some(text) = self.presenter.render_modal(&result, total_rewards) {
            println!("{}\n", text);
        }

        // ========== 导出 ==========
        let export_path = if ResultPresenter::offers_download(&result, total_rewards) {
            let path = self
                .exporter
                .export(&result)
                .map_err(|e| self.notify(e.into()))?;
            println!("Result saved to {}", path.display());
            Some(path)
        } else {
            info!("无序列结果，不导出");
            None
        };
        self.presenter.close();

        if let Err(e) = logging::append_log_line(
            &self.config.output_log_file,
            &format!(
                "{} | {} | {:?}",
                self.session.selected_file_name().unwrap_or_default(),
                ResultPresenter::headline(classification),
                export_path
            ),
        ) {
            warn!("⚠️ 写入日志文件失败: {}", e);
        }

        Ok(RunOutcome {
            classification,
            max_reward: result.max_reward,
            total_rewards,
            export_path,
        })
    }

    /// 打印用户提示，返回带详细信息的错误
    fn notify(&self, err: AppError) -> anyhow::Error {
        error!("❌ {}", err);
        eprintln!("⚠️ {}", err.user_notice());
        anyhow::Error::new(err)
    }
}
