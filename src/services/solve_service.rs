//! 求解服务 - 业务能力层
//!
//! 只负责"把题目交给求解器"能力，不关心状态流转和并发保护

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::clients::SolverApi;
use crate::error::{ApiError, AppError, ValidationError};
use crate::models::{ProblemInput, SolveResult};

/// 求解服务
pub struct SolveService<A> {
    api: Arc<A>,
}

impl<A: SolverApi> SolveService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// 检查题目是否可以提交
    ///
    /// 矩阵或序列为空时拒绝，不发请求
    pub fn check(&self, problem: &ProblemInput) -> Result<(), ValidationError> {
        if problem.is_solvable() {
            Ok(())
        } else {
            warn!("⚠️ 题目数据为空，拒绝求解");
            Err(ValidationError::EmptyProblem)
        }
    }

    /// 提交题目并返回求解结果
    ///
    /// # 参数
    /// - `problem`: 当前已提交的题目
    ///
    /// # 返回
    /// 返回 `found = true` 的 SolveResult
    pub async fn solve(&self, problem: &ProblemInput) -> Result<SolveResult, AppError> {
        self.check(problem)?;

        info!(
            "🧮 正在求解: {}x{} 矩阵, {} 条序列, buffer {}",
            problem.rows(),
            problem.cols(),
            problem.sequences.len(),
            problem.buffer_size
        );

        let response = self.api.solve(problem).await.inspect_err(|e| {
            error!("❌ 求解失败: {}", e);
        })?;

        if let Err((path_len, coord_len)) = response.check_path_length() {
            error!(
                "❌ 求解结果不一致: 路径 {} 个 token, 坐标 {} 个",
                path_len, coord_len
            );
            return Err(ApiError::malformed(
                "solve",
                format!(
                    "coordinates has {} entries but optimalPath has {}",
                    coord_len, path_len
                ),
            )
            .into());
        }

        Ok(SolveResult::from(response))
    }
}
