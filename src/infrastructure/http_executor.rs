//! HTTP 执行器 - 基础设施层
//!
//! 持有唯一的 reqwest::Client，只暴露"发请求"的能力

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;

/// 一次请求的原始响应
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// HTTP 执行器
///
/// 职责：
/// - 持有唯一的 Client 资源（连接池、超时）
/// - 只负责把请求发出去、把响应体读回来
/// - 不认识 ProblemInput / SolveResult
/// - 不判断状态码含义
#[derive(Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// 按配置创建执行器
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("optimal-path-client/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// POST JSON 请求体
    ///
    /// # 参数
    /// - `url`: 完整的接口地址
    /// - `payload`: 会被序列化为 JSON 的请求体
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &T,
    ) -> Result<RawResponse, ApiError> {
        debug!("POST {} (json)", url);
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::transport(url, e))?;
        Self::read(url, response).await
    }

    /// POST multipart 表单，只有一个文件字段
    ///
    /// # 参数
    /// - `url`: 完整的接口地址
    /// - `field`: 表单字段名
    /// - `file_name`: 文件名
    /// - `mime_type`: 文件类型
    /// - `bytes`: 文件内容
    pub async fn post_file(
        &self,
        url: &str,
        field: &str,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<RawResponse, ApiError> {
        debug!("POST {} (multipart, {} 字节)", url, bytes.len());
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|e| ApiError::transport(url, e))?;
        let form = Form::new().part(field.to_string(), part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::transport(url, e))?;
        Self::read(url, response).await
    }

    async fn read(url: &str, response: reqwest::Response) -> Result<RawResponse, ApiError> {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(url, e))?
            .to_vec();
        debug!("{} 响应 {} ({} 字节)", url, status, body.len());
        Ok(RawResponse { status, body })
    }
}
