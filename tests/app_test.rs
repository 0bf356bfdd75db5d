mod common;

use std::path::{Path, PathBuf};

use common::{example_problem, example_response, FakeSolver};
use optimal_path_client::infrastructure::FsFileExporter;
use optimal_path_client::models::Classification;
use optimal_path_client::{App, Config};

use tempfile::TempDir;

fn test_config(dir: &Path) -> Config {
    Config {
        export_dir: dir.join("out").to_string_lossy().to_string(),
        output_log_file: dir.join("output.txt").to_string_lossy().to_string(),
        ..Config::default()
    }
}

fn write_input(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, "2\n2 2\nA B\nC D\n2\nA C\n5\nB D\n3\n").unwrap();
    path
}

#[tokio::test]
async fn test_run_exports_full_solution() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    let config = test_config(dir);
    let solver = FakeSolver::new();
    solver.push_upload(Ok(example_problem()));
    solver.push_solve(Ok(example_response(8.0)));

    let mut app = App::with_parts(config.clone(), solver.clone(), FsFileExporter::new(&config.export_dir));
    let outcome = app.run(&write_input(dir, "grid.txt")).await.unwrap();

    assert_eq!(outcome.classification, Classification::FullSolution);
    assert_eq!(outcome.total_rewards, 8.0);
    let export_path = outcome.export_path.unwrap();
    assert!(export_path.ends_with("optimal-path-result.txt"));
    assert_eq!(
        std::fs::read_to_string(&export_path).unwrap(),
        "8\nA C\n0, 0\n1, 0\n\n12 ms"
    );
    assert_eq!(solver.upload_calls(), 1);
    assert_eq!(solver.solve_calls(), 1);

    let log = std::fs::read_to_string(&config.output_log_file).unwrap();
    assert!(log.contains("grid.txt | Full Solution Found!"));
}

#[tokio::test]
async fn test_run_skips_export_without_sequences() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    let config = test_config(dir);
    let solver = FakeSolver::new();
    solver.push_upload(Ok(example_problem()));
    let mut response = example_response(0.0);
    response.optimal_path.clear();
    response.coordinates.clear();
    solver.push_solve(Ok(response));

    let mut app = App::with_parts(config.clone(), solver, FsFileExporter::new(&config.export_dir));
    let outcome = app.run(&write_input(dir, "grid.txt")).await.unwrap();

    assert_eq!(outcome.classification, Classification::NoSequences);
    assert!(outcome.export_path.is_none());
    assert!(!dir.join("out").join("optimal-path-result.txt").exists());
}

#[tokio::test]
async fn test_run_refuses_non_text_input() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    let config = test_config(dir);
    let solver = FakeSolver::new();

    let mut app = App::with_parts(config.clone(), solver.clone(), FsFileExporter::new(&config.export_dir));
    let err = app.run(&write_input(dir, "grid.json")).await.unwrap_err();

    assert!(err.to_string().contains("校验错误"));
    assert_eq!(solver.upload_calls(), 0);
    assert_eq!(app.session().state().name(), "Idle");
}

#[tokio::test]
async fn test_run_partial_solution_uses_custom_file_name() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    let config = Config {
        export_file_name: "result.txt".to_string(),
        ..test_config(dir)
    };
    let solver = FakeSolver::new();
    solver.push_upload(Ok(example_problem()));
    solver.push_solve(Ok(example_response(5.0)));

    let mut app = App::with_parts(config.clone(), solver, FsFileExporter::new(&config.export_dir));
    let outcome = app.run(&write_input(dir, "grid.txt")).await.unwrap();

    assert_eq!(outcome.classification, Classification::PartialSolution);
    assert!(outcome.export_path.unwrap().ends_with("result.txt"));
}
