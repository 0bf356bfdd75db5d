//! 结果展示 - 业务能力层
//!
//! 把题目和求解结果渲染成文本，并维护结果弹窗的开关状态

use crate::models::{format_fixed, format_number, Classification, ProblemInput, SolveResult};

/// 结果展示
///
/// 弹窗初始关闭，只有 `found == true` 时才能打开，关闭不设条件
#[derive(Debug, Default)]
pub struct ResultPresenter {
    modal_open: bool,
}

impl ResultPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// 打开弹窗，没有结果时保持关闭
    ///
    /// # 返回
    /// 弹窗当前是否打开
    pub fn open(&mut self, result: &SolveResult) -> bool {
        if result.found {
            self.modal_open = true;
        }
        self.modal_open
    }

    pub fn close(&mut self) {
        self.modal_open = false;
    }

    /// 切换弹窗状态
    pub fn toggle(&mut self, result: &SolveResult) -> bool {
        if self.modal_open {
            self.close();
            false
        } else {
            self.open(result)
        }
    }

    /// 分类标题
    pub fn headline(classification: Classification) -> &'static str {
        match classification {
            Classification::NoSequences => "There are no sequences.",
            Classification::FullSolution => "Full Solution Found!",
            Classification::PartialSolution => "Partial Solution Found!",
        }
    }

    /// 渲染题目：矩阵 + 序列及奖励
    ///
    /// 矩阵或序列为空时不渲染
    pub fn render_problem(problem: &ProblemInput) -> Option<String> {
        if !problem.is_solvable() {
            return None;
        }

        let mut lines = vec!["Matrix".to_string()];
        lines.extend(problem.matrix.iter().map(|row| row.join(" ")));
        lines.push(String::new());
        lines.push("Sequences and Rewards".to_string());
        lines.extend(problem.sequences.iter().map(|seq| {
            format!(
                "{} - Reward: {}",
                seq.tokens.join(" - "),
                format_number(seq.reward)
            )
        }));
        Some(lines.join("\n"))
    }

    /// 渲染结果弹窗内容，弹窗关闭时返回 None
    pub fn render_modal(&self, result: &SolveResult, total_rewards: f64) -> Option<String> {
        if !self.modal_open {
            return None;
        }
        Some(Self::render_result(result, total_rewards))
    }

    /// 渲染求解结果
    pub fn render_result(result: &SolveResult, total_rewards: f64) -> String {
        let classification = result.classify(total_rewards);
        let mut lines = vec!["RESULT".to_string()];

        if classification == Classification::NoSequences {
            lines.push(Self::headline(classification).to_string());
            return lines.join("\n");
        }

        let coordinates = result
            .coordinates
            .iter()
            .map(|(row, col)| format!("({}, {})", row, col))
            .collect::<Vec<_>>()
            .join(" -> ");

        lines.push(Self::headline(classification).to_string());
        lines.push(format!("Max Reward : {}", format_number(result.max_reward)));
        lines.push(format!("Best Path : {}", result.sequences_result.join(" -> ")));
        lines.push(format!("Best Path Coordinates : {}", coordinates));
        lines.push(format!(
            "Execution Time : {} ms",
            format_fixed(result.execution_time, 2)
        ));
        lines.join("\n")
    }

    /// 是否提供下载（无序列时不提供）
    pub fn offers_download(result: &SolveResult, total_rewards: f64) -> bool {
        result.found && result.classify(total_rewards) != Classification::NoSequences
    }
}
