//! 结果导出 - 业务能力层
//!
//! 只负责"把结果写成下载文件"能力

use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::ExportError;
use crate::infrastructure::FileExporter;
use crate::models::{format_number, SolveResult, TEXT_PLAIN};

/// 默认导出文件名
pub const DEFAULT_EXPORT_FILE_NAME: &str = "optimal-path-result.txt";

/// 结果导出
pub struct ResultExporter<E> {
    exporter: E,
    file_name: String,
}

impl<E: FileExporter> ResultExporter<E> {
    pub fn new(exporter: E) -> Self {
        Self::with_file_name(exporter, DEFAULT_EXPORT_FILE_NAME)
    }

    /// 使用自定义文件名创建
    pub fn with_file_name(exporter: E, file_name: impl Into<String>) -> Self {
        Self {
            exporter,
            file_name: file_name.into(),
        }
    }

    /// 渲染并保存结果
    ///
    /// # 返回
    /// 返回文件写入的位置
    pub fn export(&self, result: &SolveResult) -> Result<PathBuf, ExportError> {
        let content = render(result)?;
        let path = self
            .exporter
            .save(content.as_bytes(), &self.file_name, TEXT_PLAIN)?;
        info!("💾 结果已导出: {}", path.display());
        Ok(path)
    }
}

/// 渲染导出文本
///
/// 依次为：最大奖励、路径 token、每行一个坐标、空行、耗时（取整）
pub fn render(result: &SolveResult) -> Result<String, ExportError> {
    if !result.found {
        warn!("⚠️ 没有可导出的结果");
        return Err(ExportError::NoResult);
    }

    let mut lines = Vec::with_capacity(result.coordinates.len() + 4);
    lines.push(format_number(result.max_reward));
    lines.push(result.sequences_result.join(" "));
    lines.extend(
        result
            .coordinates
            .iter()
            .map(|(row, col)| format!("{}, {}", row, col)),
    );
    lines.push(String::new());
    lines.push(format!("{} ms", format_number(result.execution_time.round())));

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// 记录保存内容的导出器
    #[derive(Default)]
    struct RecordingExporter {
        saved: RefCell<Vec<(Vec<u8>, String, String)>>,
    }

    impl FileExporter for &RecordingExporter {
        fn save(&self, bytes: &[u8], file_name: &str, mime_type: &str) -> Result<PathBuf, ExportError> {
            self.saved
                .borrow_mut()
                .push((bytes.to_vec(), file_name.to_string(), mime_type.to_string()));
            Ok(PathBuf::from(file_name))
        }
    }

    fn example_result() -> SolveResult {
        SolveResult {
            max_reward: 8.0,
            sequences_result: vec!["A".to_string(), "C".to_string()],
            coordinates: vec![(0, 0), (1, 0)],
            found: true,
            execution_time: 12.0,
        }
    }

    #[test]
    fn test_render_example() {
        assert_eq!(render(&example_result()).unwrap(), "8\nA C\n0, 0\n1, 0\n\n12 ms");
    }

    #[test]
    fn test_render_rounds_execution_time() {
        let mut result = example_result();
        result.execution_time = 3.5;
        assert!(render(&result).unwrap().ends_with("\n4 ms"));
        result.execution_time = 0.49;
        assert!(render(&result).unwrap().ends_with("\n0 ms"));
    }

    #[test]
    fn test_render_refuses_without_result() {
        assert!(matches!(
            render(&SolveResult::default()),
            Err(ExportError::NoResult)
        ));
    }

    #[test]
    fn test_export_uses_text_plain() {
        let recorder = RecordingExporter::default();
        let exporter = ResultExporter::new(&recorder);

        let path = exporter.export(&example_result()).unwrap();

        assert_eq!(path, PathBuf::from("optimal-path-result.txt"));
        let saved = recorder.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, b"8\nA C\n0, 0\n1, 0\n\n12 ms");
        assert_eq!(saved[0].2, "text/plain");
    }

    #[test]
    fn test_export_without_result_saves_nothing() {
        let recorder = RecordingExporter::default();
        let exporter = ResultExporter::new(&recorder);
        assert!(exporter.export(&SolveResult::default()).is_err());
        assert!(recorder.saved.borrow().is_empty());
    }
}
