//! 求解结果模型

use serde::{Deserialize, Serialize};

/// `/solve` 成功响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub max_reward: f64,
    pub optimal_path: Vec<String>,
    pub coordinates: Vec<(usize, usize)>,
    pub execution_time: f64,
}

impl SolveResponse {
    /// 检查坐标数是否与路径长度一致，不一致时返回 (路径长度, 坐标数)
    pub fn check_path_length(&self) -> Result<(), (usize, usize)> {
        if self.coordinates.len() == self.optimal_path.len() {
            Ok(())
        } else {
            Err((self.optimal_path.len(), self.coordinates.len()))
        }
    }
}

/// 求解结果
///
/// `found` 在任意一次求解完成后为 true（包括 `max_reward == 0` 的无解情况）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolveResult {
    pub max_reward: f64,
    pub sequences_result: Vec<String>,
    pub coordinates: Vec<(usize, usize)>,
    pub found: bool,
    /// 求解服务报告的耗时（毫秒）
    pub execution_time: f64,
}

impl From<SolveResponse> for SolveResult {
    fn from(resp: SolveResponse) -> Self {
        Self {
            max_reward: resp.max_reward,
            sequences_result: resp.optimal_path,
            coordinates: resp.coordinates,
            found: true,
            execution_time: resp.execution_time,
        }
    }
}

/// 结果分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// `max_reward == 0`
    NoSequences,
    /// `max_reward == total_rewards`
    FullSolution,
    /// 其他情况
    PartialSolution,
}

impl SolveResult {
    /// 按 无序列 → 完整解 → 部分解 的顺序分类
    pub fn classify(&self, total_rewards: f64) -> Classification {
        if self.max_reward == 0.0 {
            Classification::NoSequences
        } else if self.max_reward == total_rewards {
            Classification::FullSolution
        } else {
            Classification::PartialSolution
        }
    }
}

/// 数字转字符串：整数不带小数部分
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// 保留固定位小数，恰好一半时远离零取整（`0.125` → `0.13`）
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    format!("{:.*}", decimals, (value * scale).round() / scale)
}
