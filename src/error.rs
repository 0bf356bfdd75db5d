use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 本地校验失败（未选择文件 / 文件类型错误 / 题目数据为空 / 操作进行中）
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 求解服务调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 导出结果错误
    #[error("导出错误: {0}")]
    Export(#[from] ExportError),
    /// 状态机转换错误
    #[error("状态错误: {0}")]
    State(#[from] TransitionError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件读取错误
    #[error("读取文件失败 ({path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// 展示给用户的提示信息
    ///
    /// 传输层错误和响应格式错误只给出通用提示，细节只进日志；
    /// 远端拒绝的 message 原样展示（上传和求解一致）。
    pub fn user_notice(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::Api(ApiError::Rejected { message, .. }) => message.clone(),
            AppError::Api(_) => GENERIC_FAILURE_NOTICE.to_string(),
            AppError::Export(e) => e.to_string(),
            AppError::State(_) => "This action is not available right now.".to_string(),
            AppError::Config(e) => e.to_string(),
            AppError::FileRead { path, .. } => format!("Could not read file: {}", path),
        }
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::FileRead {
            path: path.into(),
            source,
        }
    }
}

/// 传输失败时展示给用户的通用提示
pub const GENERIC_FAILURE_NOTICE: &str = "An error occurred while contacting the solver service.";

/// 本地校验错误，错误文本即用户提示
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 上传时没有选择文件
    #[error("Please select a file first!")]
    NoFileSelected,
    /// 文件类型不是 text/plain
    #[error("Only TXT files are allowed.")]
    UnsupportedFileType { media_type: String },
    /// 矩阵或序列为空，不能求解
    #[error("Please upload the file and process it first.")]
    EmptyProblem,
    /// 已有同类操作在进行中
    #[error("Another {operation} is still in progress.")]
    OperationInFlight { operation: Operation },
}

/// 受并发保护的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Upload,
    Solve,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Upload => write!(f, "upload"),
            Operation::Solve => write!(f, "solve"),
        }
    }
}

/// 求解服务 API 错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 服务返回非成功状态码
    #[error("{endpoint} 返回 {status}: {message}")]
    Rejected {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// 网络请求失败
    #[error("请求 {endpoint} 失败: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 响应内容无法解析或不满足约束
    #[error("{endpoint} 响应格式错误: {reason}")]
    MalformedResponse { endpoint: String, reason: String },
}

impl ApiError {
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        ApiError::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn malformed(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        ApiError::MalformedResponse {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }
}

/// 结果导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    /// 还没有求解结果
    #[error("No result to download!")]
    NoResult,
    /// 写入文件失败
    #[error("Could not save {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 状态机非法转换
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("状态 {from} 不接受事件 {event}")]
pub struct TransitionError {
    pub from: &'static str,
    pub event: &'static str,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("无法读取配置文件 {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("配置文件 {path} 解析失败: {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 服务地址不合法
    #[error("服务地址必须以 http:// 或 https:// 开头: {0}")]
    InvalidBaseUrl(String),
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
