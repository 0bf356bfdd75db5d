//! 文件保存能力 - 基础设施层
//!
//! 一次调用内完成打开、写入、关闭，不持有任何句柄

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ExportError;

/// 保存文件的能力
pub trait FileExporter {
    /// 保存内容，返回实际写入的位置
    ///
    /// # 参数
    /// - `bytes`: 文件内容
    /// - `file_name`: 文件名
    /// - `mime_type`: 文件类型
    fn save(&self, bytes: &[u8], file_name: &str, mime_type: &str) -> Result<PathBuf, ExportError>;
}

/// 写到本地目录
pub struct FsFileExporter {
    dir: PathBuf,
}

impl FsFileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileExporter for FsFileExporter {
    fn save(&self, bytes: &[u8], file_name: &str, mime_type: &str) -> Result<PathBuf, ExportError> {
        let path = self.dir.join(file_name);
        debug!("写入 {} ({}, {} 字节)", path.display(), mime_type, bytes.len());

        let write_failed = |source| ExportError::WriteFailed {
            path: path.display().to_string(),
            source,
        };
        std::fs::create_dir_all(&self.dir).map_err(write_failed)?;
        std::fs::write(&path, bytes).map_err(write_failed)?;

        Ok(path)
    }
}
