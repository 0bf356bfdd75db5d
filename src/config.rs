use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 求解服务地址（/upload 和 /solve 共用）
    pub api_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 结果导出目录
    pub export_dir: String,
    /// 结果导出文件名
    pub export_file_name: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            request_timeout_secs: 30,
            export_dir: ".".to_string(),
            export_file_name: "optimal-path-result.txt".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    /// 加载配置：先读 `CONFIG_FILE` 指定的 TOML 文件（如果有），再用环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        let config = base.with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// 只从环境变量加载（未设置的字段使用默认值）
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载，缺省的键使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 用环境变量覆盖当前配置
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: std::env::var("SOLVER_API_BASE_URL").unwrap_or(self.api_base_url),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", "u64")?
                .unwrap_or(self.request_timeout_secs),
            export_dir: std::env::var("EXPORT_DIR").unwrap_or(self.export_dir),
            export_file_name: std::env::var("EXPORT_FILE_NAME").unwrap_or(self.export_file_name),
            verbose_logging: env_parse("VERBOSE_LOGGING", "bool")?.unwrap_or(self.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
        })
    }

    /// 检查服务地址格式
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidBaseUrl(self.api_base_url.clone()))
        }
    }

    /// 拼接接口地址，容忍 base url 末尾的 `/`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn env_parse<T: FromStr>(var_name: &str, expected_type: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_to_local_solver() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.endpoint("/upload"), "http://localhost:5000/upload");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let config = Config {
            api_base_url: "https://solver.example.com/api/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.endpoint("solve"), "https://solver.example.com/api/solve");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            api_base_url = "http://10.0.0.7:8000"
            request_timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.7:8000");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.export_file_name, "optimal-path-result.txt");
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = Config {
            api_base_url: "localhost:5000".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }
}
