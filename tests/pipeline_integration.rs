//! パイプライン統合テスト
//!
//! 実際のOpenCVアダプタ（読み込み・特徴量抽出）とサイレント表示を組み合わせ、
//! ディレクトリ走査から分類までの一連の流れを検証する。
//! 対話的な表示はSilentDisplayAdapterで置き換えるため、ウィンドウは開かない。

use conveyor_sort::application::pipeline::SortPipeline;
use conveyor_sort::domain::{Conveyor, DomainError, Label};
use conveyor_sort::infrastructure::feature_extract::FeatureExtractAdapter;
use conveyor_sort::infrastructure::image_load::ImreadLoaderAdapter;
use conveyor_sort::infrastructure::silent_display::SilentDisplayAdapter;
use opencv::{
    core::{self, Mat, Scalar, Vector},
    imgcodecs,
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 単色のPNGファイルをテスト用に生成する
fn write_solid_png(dir: &Path, name: &str, b: f64, g: f64, r: f64) -> PathBuf {
    let path = dir.join(name);
    let mat = Mat::new_rows_cols_with_default(32, 32, core::CV_8UC3, Scalar::new(b, g, r, 0.0))
        .expect("Failed to create test Mat");
    let written = imgcodecs::imwrite(
        &path.to_string_lossy(),
        &mat,
        &Vector::new(),
    )
    .expect("imwrite call failed");
    assert!(written, "PNG fixture should be written");
    path
}

fn new_pipeline() -> SortPipeline<ImreadLoaderAdapter, FeatureExtractAdapter, SilentDisplayAdapter>
{
    SortPipeline::new(
        ImreadLoaderAdapter::new(),
        FeatureExtractAdapter::new(),
        SilentDisplayAdapter::new(),
    )
}

#[test]
fn white_image_goes_to_conveyor_b() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_solid_png(dir.path(), "white.png", 255.0, 255.0, 255.0);

    let mut pipeline = new_pipeline();
    let result = pipeline.process_file(&path).unwrap();
    assert_eq!(result.label, Label::Transparent);
    assert_eq!(result.conveyor, Conveyor::B);
}

#[test]
fn black_image_goes_to_conveyor_a() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_solid_png(dir.path(), "black.png", 0.0, 0.0, 0.0);

    let mut pipeline = new_pipeline();
    let result = pipeline.process_file(&path).unwrap();
    assert_eq!(result.label, Label::Black);
    assert_eq!(result.conveyor, Conveyor::A);
}

#[test]
fn saturated_image_goes_to_conveyor_c() {
    // 純赤: 輝度は低いが彩度が最大のため有彩色扱い
    let dir = tempfile::tempdir().unwrap();
    let path = write_solid_png(dir.path(), "red.png", 0.0, 0.0, 255.0);

    let mut pipeline = new_pipeline();
    let result = pipeline.process_file(&path).unwrap();
    assert_eq!(result.label, Label::Colorful);
    assert_eq!(result.conveyor, Conveyor::C);
}

#[test]
fn run_processes_only_qualifying_files() {
    let dir = tempfile::tempdir().unwrap();
    write_solid_png(dir.path(), "item.png", 255.0, 255.0, 255.0);

    // 対象外の拡張子は無視される
    let mut decoy = std::fs::File::create(dir.path().join("notes.txt")).unwrap();
    decoy.write_all(b"not an image").unwrap();
    drop(decoy);

    let mut pipeline = new_pipeline();
    let processed = pipeline.run(dir.path()).unwrap();
    assert_eq!(processed, 1);
}

#[test]
fn run_aborts_on_corrupt_image() {
    // 画像拡張子を持つがデコードできないファイルは致命的エラーになる
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.jpg");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"definitely not jpeg bytes").unwrap();
    drop(file);

    let mut pipeline = new_pipeline();
    let result = pipeline.run(dir.path());
    assert!(matches!(result.unwrap_err(), DomainError::Load { .. }));
}

#[test]
fn run_on_missing_directory_processes_nothing() {
    let mut pipeline = new_pipeline();
    let processed = pipeline.run(Path::new("definitely/missing/dir")).unwrap();
    assert_eq!(processed, 0);
}
