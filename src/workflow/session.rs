//! 工作流会话 - 流程层
//!
//! 核心职责：串起 校验 → 上传 → 求解 → 结果，并保证
//! 同一时间最多一个上传、一个求解在进行中
//!
//! 会话状态放在一把 `std::sync::Mutex` 里，锁从不跨 `.await` 持有。
//! 进行中的标记由守卫对象在 `Drop` 时释放，成功、失败、被取消都会走到。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::clients::SolverApi;
use crate::error::{
    ApiError, AppResult, Operation, TransitionError, ValidationError, GENERIC_FAILURE_NOTICE,
};
use crate::models::{format_number, ProblemInput, SelectedFile, SolveResult};
use crate::services::{SolveService, SubmissionValidator, UploadService};
use crate::workflow::state::{Event, WorkflowState};

/// 锁内的会话数据
#[derive(Debug, Default)]
struct Inner {
    state: WorkflowState,
    selected: Option<SelectedFile>,
    uploading: bool,
    last_upload_error: Option<String>,
}

impl Inner {
    fn transition(&mut self, event: Event) -> Result<(), TransitionError> {
        self.state = self.state.clone().apply(event)?;
        Ok(())
    }

    /// 有操作在进行中时拒绝新的操作
    fn ensure_idle(&self) -> Result<(), ValidationError> {
        if self.state.is_solving() {
            return Err(ValidationError::OperationInFlight {
                operation: Operation::Solve,
            });
        }
        if self.uploading {
            return Err(ValidationError::OperationInFlight {
                operation: Operation::Upload,
            });
        }
        Ok(())
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 工作流会话
///
/// - 持有当前选择的文件、状态机、进行中标记
/// - 只依赖业务能力（services），不直接发请求
pub struct Session<A> {
    inner: Mutex<Inner>,
    validator: SubmissionValidator,
    upload_service: UploadService<A>,
    solve_service: SolveService<A>,
}

impl<A: SolverApi> Session<A> {
    /// 创建新的会话
    pub fn new(api: A) -> Self {
        Self::with_shared_api(Arc::new(api))
    }

    pub fn with_shared_api(api: Arc<A>) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            validator: SubmissionValidator::new(),
            upload_service: UploadService::new(api.clone()),
            solve_service: SolveService::new(api),
        }
    }

    /// 选择文件（None 表示清空选择）
    ///
    /// 丢弃当前题目和结果，回到 Idle
    pub fn select_file(&self, file: Option<SelectedFile>) -> AppResult<()> {
        let mut inner = lock(&self.inner);
        inner.ensure_idle()?;
        inner.transition(Event::FileSelected)?;

        match &file {
            Some(f) => info!("📄 已选择文件: {} ({:?})", f.name, f.media_type),
            None => debug!("清空文件选择"),
        }
        inner.selected = file;
        inner.last_upload_error = None;
        Ok(())
    }

    /// 上传当前选择的文件
    ///
    /// 每次调用只请求一次 `/upload`。失败时保留原有题目。
    ///
    /// # 返回
    /// 返回服务端解析出的题目
    pub async fn upload(&self) -> AppResult<ProblemInput> {
        let file = {
            let mut inner = lock(&self.inner);
            let file = self.validator.validate(inner.selected.as_ref())?.clone();
            inner.ensure_idle()?;
            inner.uploading = true;
            file
        };
        let _guard = UploadGuard { inner: &self.inner };

        match self.upload_service.upload(&file).await {
            Ok(problem) => {
                let mut inner = lock(&self.inner);
                inner.transition(Event::UploadSucceeded(problem.clone()))?;
                inner.last_upload_error = None;
                info!(
                    "✓ 题目已加载，总奖励: {}",
                    format_number(inner.state.total_rewards())
                );
                Ok(problem)
            }
            Err(e) => {
                let notice = match &e {
                    ApiError::Rejected { message, .. } => message.clone(),
                    _ => GENERIC_FAILURE_NOTICE.to_string(),
                };
                lock(&self.inner).last_upload_error = Some(notice);
                Err(e.into())
            }
        }
    }

    /// 求解当前题目
    ///
    /// 题目为空时拒绝且不发请求；已有求解在进行中时拒绝，不排队
    pub async fn solve(&self) -> AppResult<SolveResult> {
        let problem = {
            let mut inner = lock(&self.inner);
            inner.ensure_idle()?;
            let problem = inner.state.problem().cloned().unwrap_or_default();
            self.solve_service.check(&problem)?;
            inner.transition(Event::SolveRequested)?;
            problem
        };
        let guard = SolvingGuard {
            inner: &self.inner,
            armed: true,
        };

        let result = self.solve_service.solve(&problem).await?;
        guard.commit(result.clone())?;
        info!(
            "✓ 求解完成: 最大奖励 {}, 路径长度 {}",
            format_number(result.max_reward),
            result.coordinates.len()
        );
        Ok(result)
    }

    // ========== 只读访问 ==========

    pub fn state(&self) -> WorkflowState {
        lock(&self.inner).state.clone()
    }

    pub fn is_solving(&self) -> bool {
        lock(&self.inner).state.is_solving()
    }

    pub fn is_uploading(&self) -> bool {
        lock(&self.inner).uploading
    }

    pub fn problem(&self) -> Option<ProblemInput> {
        lock(&self.inner).state.problem().cloned()
    }

    pub fn total_rewards(&self) -> f64 {
        lock(&self.inner).state.total_rewards()
    }

    /// 当前可展示的结果，没有结果时返回 `found = false` 的空结果
    pub fn result(&self) -> SolveResult {
        lock(&self.inner).state.result().cloned().unwrap_or_default()
    }

    /// 上一次上传失败的提示，下一次上传成功或重新选择文件后清空
    pub fn last_upload_error(&self) -> Option<String> {
        lock(&self.inner).last_upload_error.clone()
    }

    pub fn selected_file_name(&self) -> Option<String> {
        lock(&self.inner).selected.as_ref().map(|f| f.name.clone())
    }
}

/// 上传进行中标记，离开作用域即释放
struct UploadGuard<'a> {
    inner: &'a Mutex<Inner>,
}

impl Drop for UploadGuard<'_> {
    fn drop(&mut self) {
        lock(self.inner).uploading = false;
    }
}

/// 求解进行中守卫
///
/// 未 commit 就被释放时回滚为 SolveFailed
struct SolvingGuard<'a> {
    inner: &'a Mutex<Inner>,
    armed: bool,
}

impl SolvingGuard<'_> {
    fn commit(mut self, result: SolveResult) -> Result<(), TransitionError> {
        self.armed = false;
        lock(self.inner).transition(Event::SolveSucceeded(result))
    }
}

impl Drop for SolvingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut inner = lock(self.inner);
        if let Err(e) = inner.transition(Event::SolveFailed) {
            warn!("⚠️ 回滚求解状态失败: {}", e);
        } else {
            debug!("求解未完成，状态回到 {}", inner.state.name());
        }
    }
}
