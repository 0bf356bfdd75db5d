//! 用户选择的文件

use std::path::Path;

use crate::error::AppError;

/// 纯文本类型，上传只接受这一种
pub const TEXT_PLAIN: &str = "text/plain";

/// 用户选择的文件（文件名 + 声明的类型 + 原始内容）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// 声明的媒体类型，未知扩展名为空字符串
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// 从磁盘读取文件，按扩展名推断媒体类型
    pub async fn from_path(path: &Path) -> Result<Self, AppError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            media_type: media_type_for_path(path).to_string(),
            bytes,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// 按扩展名推断媒体类型
pub fn media_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());

    match ext.as_deref() {
        Some("txt") | Some("text") => TEXT_PLAIN,
        Some("csv") => "text/csv",
        Some("json") => "application/json",
        Some("md") => "text/markdown",
        Some("html") | Some("htm") => "text/html",
        Some("pdf") => "application/pdf",
        _ => "",
    }
}
