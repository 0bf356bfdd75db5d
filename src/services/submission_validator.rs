//! 提交校验 - 业务能力层
//!
//! 只负责"这个文件能不能上传"的判断，不发请求

use tracing::warn;

use crate::error::ValidationError;
use crate::models::{SelectedFile, TEXT_PLAIN};

/// 上传前的文件校验
#[derive(Debug, Default, Clone, Copy)]
pub struct SubmissionValidator;

impl SubmissionValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验用户选择的文件
    ///
    /// # 参数
    /// - `file`: 当前选择的文件，未选择为 None
    ///
    /// # 返回
    /// 校验通过返回文件本身
    pub fn validate<'a>(
        &self,
        file: Option<&'a SelectedFile>,
    ) -> Result<&'a SelectedFile, ValidationError> {
        let Some(file) = file else {
            warn!("⚠️ 未选择文件");
            return Err(ValidationError::NoFileSelected);
        };

        if file.media_type != TEXT_PLAIN {
            warn!("⚠️ 文件类型不支持: {} ({:?})", file.name, file.media_type);
            return Err(ValidationError::UnsupportedFileType {
                media_type: file.media_type.clone(),
            });
        }

        Ok(file)
    }
}
