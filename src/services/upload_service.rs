//! 上传服务 - 业务能力层
//!
//! 只负责"把文件交给服务端解析"能力，不关心状态流转

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::clients::SolverApi;
use crate::error::ApiError;
use crate::models::{ProblemInput, SelectedFile};

/// 上传服务
///
/// 职责：
/// - 每次用户操作只调用一次 `/upload`
/// - 同一个响应里同时处理错误信息和解析结果
/// - 校验服务端返回的矩阵是否为矩形
pub struct UploadService<A> {
    api: Arc<A>,
}

impl<A: SolverApi> UploadService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// 上传文件并取回解析后的题目
    ///
    /// # 参数
    /// - `file`: 已经通过校验的文件
    ///
    /// # 返回
    /// 返回服务端解析出的 ProblemInput
    pub async fn upload(&self, file: &SelectedFile) -> Result<ProblemInput, ApiError> {
        info!("📤 正在上传文件: {} ({} 字节)", file.name, file.len());

        let problem = self.api.upload(file).await.inspect_err(|e| match e {
            ApiError::Rejected {
                status, message, ..
            } => warn!("⚠️ 上传被拒绝 ({}): {}", status, message),
            other => error!("❌ 上传文件失败: {}", other),
        })?;

        if let Err(row) = problem.check_rectangular() {
            error!("❌ 服务端返回的矩阵第 {} 行长度不一致", row);
            return Err(ApiError::malformed(
                "upload",
                format!("matrix row {} has a different length", row),
            ));
        }
        if let Err(index) = problem.check_rewards() {
            error!("❌ 服务端返回的第 {} 条序列奖励不合法", index);
            return Err(ApiError::malformed(
                "upload",
                format!("sequence {} has a negative or non-finite reward", index),
            ));
        }

        debug!(
            "解析结果: {}x{} 矩阵, {} 条序列, buffer {}",
            problem.rows(),
            problem.cols(),
            problem.sequences.len(),
            problem.buffer_size
        );

        Ok(problem)
    }
}
