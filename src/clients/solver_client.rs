/// 求解服务 API 客户端
///
/// 封装 `/upload` 和 `/solve` 两个接口的请求与响应解析
use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::infrastructure::{HttpExecutor, RawResponse};
use crate::models::{ProblemInput, SelectedFile, SolveResponse, TEXT_PLAIN};
use crate::utils::logging::truncate_text;

pub const UPLOAD_PATH: &str = "upload";
pub const SOLVE_PATH: &str = "solve";

/// 求解服务的能力
///
/// 工作流只依赖这个 trait，测试里可以换成假的实现
pub trait SolverApi {
    /// 上传原始文件，由服务端解析成题目
    fn upload(
        &self,
        file: &SelectedFile,
    ) -> impl Future<Output = Result<ProblemInput, ApiError>> + Send;

    /// 提交题目，返回最优路径
    fn solve(
        &self,
        problem: &ProblemInput,
    ) -> impl Future<Output = Result<SolveResponse, ApiError>> + Send;
}

/// 错误响应体 `{ "message": "..." }`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// 基于 HTTP 的求解服务客户端
#[derive(Clone)]
pub struct SolverClient {
    executor: HttpExecutor,
    upload_url: String,
    solve_url: String,
}

impl SolverClient {
    /// 创建新的求解服务客户端
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let executor = HttpExecutor::new(config)
            .map_err(|e| ApiError::transport(config.api_base_url.clone(), e))?;
        Ok(Self::with_executor(executor, config))
    }

    /// 使用已有的执行器创建
    pub fn with_executor(executor: HttpExecutor, config: &Config) -> Self {
        Self {
            executor,
            upload_url: config.endpoint(UPLOAD_PATH),
            solve_url: config.endpoint(SOLVE_PATH),
        }
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    pub fn solve_url(&self) -> &str {
        &self.solve_url
    }
}

impl SolverApi for SolverClient {
    async fn upload(&self, file: &SelectedFile) -> Result<ProblemInput, ApiError> {
        let response = self
            .executor
            .post_file(
                &self.upload_url,
                "file",
                &file.name,
                TEXT_PLAIN,
                file.bytes.clone(),
            )
            .await?;
        parse_response(&self.upload_url, response)
    }

    async fn solve(&self, problem: &ProblemInput) -> Result<SolveResponse, ApiError> {
        let response = self.executor.post_json(&self.solve_url, problem).await?;
        parse_response(&self.solve_url, response)
    }
}

/// 按状态码分支解析响应
///
/// - 成功：解析为目标类型
/// - 失败：提取 `message`，没有则使用状态码生成提示
pub fn parse_response<T: DeserializeOwned>(
    endpoint: &str,
    response: RawResponse,
) -> Result<T, ApiError> {
    let status = response.status.as_u16();

    if !response.is_success() {
        let message = match serde_json::from_slice::<ErrorBody>(&response.body) {
            Ok(body) => body.message,
            Err(_) => {
                warn!("{} 返回 {}，响应体中没有 message", endpoint, status);
                format!("{} failed with status {}", describe(endpoint), status)
            }
        };
        return Err(ApiError::Rejected {
            endpoint: endpoint.to_string(),
            status,
            message,
        });
    }

    serde_json::from_slice(&response.body).map_err(|e| {
        debug!(
            "无法解析 {} 响应: {}",
            endpoint,
            truncate_text(&String::from_utf8_lossy(&response.body), 200)
        );
        ApiError::malformed(endpoint, e.to_string())
    })
}

fn describe(endpoint: &str) -> &'static str {
    if endpoint.ends_with(SOLVE_PATH) {
        "Solve"
    } else {
        "Upload"
    }
}
