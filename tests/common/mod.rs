//! 测试用的假求解服务
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use optimal_path_client::error::ApiError;
use optimal_path_client::models::{ProblemInput, Sequence, SelectedFile, SolveResponse, TEXT_PLAIN};
use optimal_path_client::SolverApi;
use tokio::sync::Notify;

#[derive(Default)]
struct Shared {
    uploads: Mutex<VecDeque<Result<ProblemInput, ApiError>>>,
    solves: Mutex<VecDeque<Result<SolveResponse, ApiError>>>,
    upload_calls: AtomicUsize,
    solve_calls: AtomicUsize,
    solved_problems: Mutex<Vec<ProblemInput>>,
    upload_gate: Mutex<Option<Arc<Notify>>>,
    solve_gate: Mutex<Option<Arc<Notify>>>,
}

/// 按顺序返回预设响应，并记录调用次数
#[derive(Clone, Default)]
pub struct FakeSolver {
    shared: Arc<Shared>,
}

impl FakeSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_upload(&self, response: Result<ProblemInput, ApiError>) -> &Self {
        self.shared.uploads.lock().unwrap().push_back(response);
        self
    }

    pub fn push_solve(&self, response: Result<SolveResponse, ApiError>) -> &Self {
        self.shared.solves.lock().unwrap().push_back(response);
        self
    }

    /// 上传请求会停在 gate 上，直到 `notify_one`
    pub fn gate_uploads(&self, gate: Arc<Notify>) {
        *self.shared.upload_gate.lock().unwrap() = Some(gate);
    }

    /// 求解请求会停在 gate 上，直到 `notify_one`
    pub fn gate_solves(&self, gate: Arc<Notify>) {
        *self.shared.solve_gate.lock().unwrap() = Some(gate);
    }

    pub fn upload_calls(&self) -> usize {
        self.shared.upload_calls.load(Ordering::SeqCst)
    }

    pub fn solve_calls(&self) -> usize {
        self.shared.solve_calls.load(Ordering::SeqCst)
    }

    pub fn solved_problems(&self) -> Vec<ProblemInput> {
        self.shared.solved_problems.lock().unwrap().clone()
    }
}

impl SolverApi for FakeSolver {
    async fn upload(&self, _file: &SelectedFile) -> Result<ProblemInput, ApiError> {
        self.shared.upload_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.shared.upload_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.shared
            .uploads
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected upload call")
    }

    async fn solve(&self, problem: &ProblemInput) -> Result<SolveResponse, ApiError> {
        self.shared.solve_calls.fetch_add(1, Ordering::SeqCst);
        self.shared
            .solved_problems
            .lock()
            .unwrap()
            .push(problem.clone());

        let gate = self.shared.solve_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.shared
            .solves
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected solve call")
    }
}

pub fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}

/// 2x2 示例题目，总奖励 8
pub fn example_problem() -> ProblemInput {
    ProblemInput {
        buffer_size: 2,
        matrix: vec![tokens(&["A", "B"]), tokens(&["C", "D"])],
        sequences: vec![
            Sequence {
                tokens: tokens(&["A", "C"]),
                reward: 5.0,
            },
            Sequence {
                tokens: tokens(&["B", "D"]),
                reward: 3.0,
            },
        ],
    }
}

pub fn example_response(max_reward: f64) -> SolveResponse {
    SolveResponse {
        max_reward,
        optimal_path: tokens(&["A", "C"]),
        coordinates: vec![(0, 0), (1, 0)],
        execution_time: 12.0,
    }
}

pub fn txt_file() -> SelectedFile {
    SelectedFile::new("grid.txt", TEXT_PLAIN, b"2\n2 2\nA B\nC D\n2\nA C\n5\nB D\n3\n".to_vec())
}

pub fn rejected(endpoint: &str, message: &str) -> ApiError {
    ApiError::Rejected {
        endpoint: endpoint.to_string(),
        status: 400,
        message: message.to_string(),
    }
}
