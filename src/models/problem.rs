//! 题目数据模型
//!
//! 由远端 `/upload` 解析得到，客户端不解析矩阵/序列语法

use serde::{Deserialize, Serialize};

/// 一条带奖励的 token 序列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub tokens: Vec<String>,
    pub reward: f64,
}

/// 求解输入
///
/// 同时作为 `/upload` 的成功响应体和 `/solve` 的请求体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemInput {
    /// 缓冲区大小，只由求解服务解释
    pub buffer_size: u64,
    /// token 矩阵，每行等长
    pub matrix: Vec<Vec<String>>,
    /// 待匹配的序列
    pub sequences: Vec<Sequence>,
}

impl ProblemInput {
    /// 所有序列的奖励之和
    pub fn total_rewards(&self) -> f64 {
        self.sequences.iter().map(|seq| seq.reward).sum()
    }

    /// 矩阵或序列为空时不能求解
    pub fn is_solvable(&self) -> bool {
        !self.matrix.is_empty() && !self.sequences.is_empty()
    }

    /// 检查矩阵是否为矩形，返回第一行不等长的行号
    pub fn check_rectangular(&self) -> Result<(), usize> {
        let Some(first) = self.matrix.first() else {
            return Ok(());
        };
        match self.matrix.iter().position(|row| row.len() != first.len()) {
            Some(row) => Err(row),
            None => Ok(()),
        }
    }

    /// 检查奖励是否都是非负数，返回第一条不合法序列的下标
    pub fn check_rewards(&self) -> Result<(), usize> {
        match self
            .sequences
            .iter()
            .position(|seq| !(seq.reward.is_finite() && seq.reward >= 0.0))
        {
            Some(index) => Err(index),
            None => Ok(()),
        }
    }

    pub fn rows(&self) -> usize {
        self.matrix.len()
    }

    pub fn cols(&self) -> usize {
        self.matrix.first().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(tokens: &[&str], reward: f64) -> Sequence {
        Sequence {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            reward,
        }
    }

    #[test]
    fn test_parse_upload_response_ignores_extra_fields() {
        let body = r#"{
            "bufferSize": 2,
            "matrix": [["A", "B"], ["C", "D"]],
            "sequences": [{"tokens": ["A", "C"], "reward": 5}, {"tokens": ["B", "D"], "reward": 3}],
            "fileName": "input.txt"
        }"#;
        let problem: ProblemInput = serde_json::from_str(body).unwrap();
        assert_eq!(problem.buffer_size, 2);
        assert_eq!(problem.rows(), 2);
        assert_eq!(problem.cols(), 2);
        assert_eq!(problem.total_rewards(), 8.0);
    }

    #[test]
    fn test_solve_request_uses_camel_case() {
        let problem = ProblemInput {
            buffer_size: 4,
            matrix: vec![vec!["1C".to_string()]],
            sequences: vec![seq(&["1C"], 10.0)],
        };
        let value = serde_json::to_value(&problem).unwrap();
        assert_eq!(value["bufferSize"], 4);
        assert_eq!(value["matrix"][0][0], "1C");
        assert_eq!(value["sequences"][0]["reward"], 10.0);
    }

    #[test]
    fn test_empty_problem_is_not_solvable() {
        let mut problem = ProblemInput::default();
        assert!(!problem.is_solvable());
        problem.matrix = vec![vec!["A".to_string()]];
        assert!(!problem.is_solvable());
        problem.sequences.push(seq(&["A"], 1.0));
        assert!(problem.is_solvable());
    }

    #[test]
    fn test_ragged_matrix_reports_row() {
        let problem = ProblemInput {
            buffer_size: 1,
            matrix: vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["C".to_string()],
            ],
            sequences: vec![],
        };
        assert_eq!(problem.check_rectangular(), Err(1));
    }

    #[test]
    fn test_negative_reward_is_reported() {
        let problem = ProblemInput {
            buffer_size: 1,
            matrix: vec![],
            sequences: vec![seq(&["A"], 2.0), seq(&["B"], -1.0)],
        };
        assert_eq!(problem.check_rewards(), Err(1));
    }
}
