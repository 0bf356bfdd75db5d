//! 工作流状态机
//!
//! 纯函数式的状态转换：`apply(state, event) -> state`，不发请求、不打日志

use crate::error::TransitionError;
use crate::models::{ProblemInput, SolveResult};

/// 工作流状态
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WorkflowState {
    /// 没有题目
    #[default]
    Idle,
    /// 已有题目，没有结果
    Loaded {
        problem: ProblemInput,
        total_rewards: f64,
    },
    /// 求解请求进行中
    Solving {
        problem: ProblemInput,
        total_rewards: f64,
        /// 从 Solved 重新求解时保留的上一次结果，只用于失败回滚，不展示
        previous: Option<SolveResult>,
    },
    /// 已有结果
    Solved {
        problem: ProblemInput,
        total_rewards: f64,
        result: SolveResult,
    },
}

/// 驱动状态转换的事件
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// 用户选择了新文件
    FileSelected,
    /// 上传成功
    UploadSucceeded(ProblemInput),
    /// 请求求解
    SolveRequested,
    /// 求解成功
    SolveSucceeded(SolveResult),
    /// 求解失败（远端拒绝 / 传输失败 / 响应格式错误 / 被取消）
    SolveFailed,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::FileSelected => "FileSelected",
            Event::UploadSucceeded(_) => "UploadSucceeded",
            Event::SolveRequested => "SolveRequested",
            Event::SolveSucceeded(_) => "SolveSucceeded",
            Event::SolveFailed => "SolveFailed",
        }
    }
}

impl WorkflowState {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "Idle",
            WorkflowState::Loaded { .. } => "Loaded",
            WorkflowState::Solving { .. } => "Solving",
            WorkflowState::Solved { .. } => "Solved",
        }
    }

    /// 状态转换
    ///
    /// | 当前 | 事件 | 结果 |
    /// |---|---|---|
    /// | Idle / Loaded / Solved | UploadSucceeded | Loaded（重新计算总奖励） |
    /// | Loaded / Solved | SolveRequested | Solving |
    /// | Solving | SolveSucceeded | Solved |
    /// | Solving | SolveFailed | Loaded，或带上一次结果的 Solved |
    /// | Idle / Loaded / Solved | FileSelected | Idle |
    pub fn apply(self, event: Event) -> Result<WorkflowState, TransitionError> {
        let from = self.name();
        let event_name = event.name();

        match (self, event) {
            (
                WorkflowState::Idle | WorkflowState::Loaded { .. } | WorkflowState::Solved { .. },
                Event::UploadSucceeded(problem),
            ) => {
                let total_rewards = problem.total_rewards();
                Ok(WorkflowState::Loaded {
                    problem,
                    total_rewards,
                })
            }

            (
                WorkflowState::Loaded {
                    problem,
                    total_rewards,
                },
                Event::SolveRequested,
            ) => Ok(WorkflowState::Solving {
                problem,
                total_rewards,
                previous: None,
            }),

            (
                WorkflowState::Solved {
                    problem,
                    total_rewards,
                    result,
                },
                Event::SolveRequested,
            ) => Ok(WorkflowState::Solving {
                problem,
                total_rewards,
                previous: Some(result),
            }),

            (
                WorkflowState::Solving {
                    problem,
                    total_rewards,
                    ..
                },
                Event::SolveSucceeded(result),
            ) => Ok(WorkflowState::Solved {
                problem,
                total_rewards,
                result,
            }),

            (
                WorkflowState::Solving {
                    problem,
                    total_rewards,
                    previous,
                },
                Event::SolveFailed,
            ) => Ok(match previous {
                Some(result) => WorkflowState::Solved {
                    problem,
                    total_rewards,
                    result,
                },
                None => WorkflowState::Loaded {
                    problem,
                    total_rewards,
                },
            }),

            (
                WorkflowState::Idle | WorkflowState::Loaded { .. } | WorkflowState::Solved { .. },
                Event::FileSelected,
            ) => Ok(WorkflowState::Idle),

            _ => Err(TransitionError {
                from,
                event: event_name,
            }),
        }
    }

    pub fn is_solving(&self) -> bool {
        matches!(self, WorkflowState::Solving { .. })
    }

    /// 当前题目（Idle 时为 None）
    pub fn problem(&self) -> Option<&ProblemInput> {
        match self {
            WorkflowState::Idle => None,
            WorkflowState::Loaded { problem, .. }
            | WorkflowState::Solving { problem, .. }
            | WorkflowState::Solved { problem, .. } => Some(problem),
        }
    }

    /// 当前总奖励（Idle 时为 0）
    pub fn total_rewards(&self) -> f64 {
        match self {
            WorkflowState::Idle => 0.0,
            WorkflowState::Loaded { total_rewards, .. }
            | WorkflowState::Solving { total_rewards, .. }
            | WorkflowState::Solved { total_rewards, .. } => *total_rewards,
        }
    }

    /// 可展示的结果（只有 Solved 才有，Solving 时清空展示）
    pub fn result(&self) -> Option<&SolveResult> {
        match self {
            WorkflowState::Solved { result, .. } => Some(result),
            _ => None,
        }
    }
}
