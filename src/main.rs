use std::path::PathBuf;

use anyhow::{Context, Result};
use optimal_path_client::utils::logging;
use optimal_path_client::{App, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    let input = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("INPUT_FILE").ok())
        .map(PathBuf::from)
        .context("用法: optimal-path-client <FILE>（或设置 INPUT_FILE）")?;

    // 初始化并运行应用
    let mut app = App::initialize(config)?;
    app.run(&input).await?;

    Ok(())
}
