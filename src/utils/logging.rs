use anyhow::Result;
/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::{format_fixed, format_number, Classification, ProblemInput, SolveResult};

/// 初始化 tracing
///
/// 优先使用 `RUST_LOG`，否则详细模式为 debug，普通模式为 info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n求解日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 向日志文件追加一行（带时间戳）
pub fn append_log_line(log_file_path: &str, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    writeln!(
        file,
        "[{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        line
    )?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 最优路径求解客户端");
    info!("🌐 求解服务: {}", config.api_base_url);
    info!("⏱️ 请求超时: {} 秒", config.request_timeout_secs);
    info!("{}", "=".repeat(60));
}

/// 记录题目加载信息
pub fn log_problem_loaded(problem: &ProblemInput, total_rewards: f64) {
    info!(
        "✓ 矩阵 {}x{}, {} 条序列, buffer {}",
        problem.rows(),
        problem.cols(),
        problem.sequences.len(),
        problem.buffer_size
    );
    info!("📊 总奖励: {}", format_number(total_rewards));
}

/// 记录求解结果
pub fn log_solve_complete(result: &SolveResult, classification: Classification) {
    info!("\n{}", "─".repeat(60));
    info!("📊 求解结果: {:?}", classification);
    info!("最大奖励: {}", format_number(result.max_reward));
    info!("服务端耗时: {} ms", format_fixed(result.execution_time, 2));
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
