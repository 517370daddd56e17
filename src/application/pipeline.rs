//! パイプライン制御モジュール
//!
//! 入力ディレクトリを走査し、各画像ファイルに対して
//! 読み込み → 特徴量抽出 → 分類 → 結果出力 → 表示 を直列に実行する。
//!
//! 単一スレッド・同期実行。表示のキー入力待ちが直列化ポイントとなり、
//! 1ファイルの処理が完全に終わるまで次のファイルには進まない。

use crate::domain::{
    classifier::assign_conveyor,
    error::DomainResult,
    ports::{AnalyzePort, DisplayPort, LoadPort},
    types::Classification,
};
use std::path::{Path, PathBuf};

/// 処理対象とする画像ファイルの拡張子（小文字比較）
const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// パスが処理対象の画像ファイル拡張子を持つか判定する
///
/// 拡張子の大文字小文字は区別しない。
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// 分類パイプライン
pub struct SortPipeline<L, A, D>
where
    L: LoadPort,
    A: AnalyzePort,
    D: DisplayPort,
{
    loader: L,
    analyzer: A,
    display: D,
}

impl<L, A, D> SortPipeline<L, A, D>
where
    L: LoadPort,
    A: AnalyzePort,
    D: DisplayPort,
{
    /// 新しいSortPipelineを作成
    pub fn new(loader: L, analyzer: A, display: D) -> Self {
        Self {
            loader,
            analyzer,
            display,
        }
    }

    /// ディレクトリ内の画像を順に処理する（ブロッキング）
    ///
    /// エントリはファイル名順にソートして処理する（実行順の決定性のため）。
    /// 最初のエラーで残りの処理を中断し、エラーを呼び出し側へ伝播する。
    ///
    /// # Returns
    /// - `Ok(usize)`: 処理したファイル数。ディレクトリが存在しない場合は
    ///   エラー行を出力して `Ok(0)`
    /// - `Err(DomainError)`: 読み込み・処理・表示のいずれかの失敗
    pub fn run(&mut self, dir: &Path) -> DomainResult<usize> {
        if !dir.is_dir() {
            println!(
                "Error: Directory '{}' not found or is not a directory.",
                dir.display()
            );
            tracing::warn!(dir = %dir.display(), "Input directory not found");
            return Ok(0);
        }

        let mut paths = self.collect_image_paths(dir)?;
        paths.sort();

        tracing::info!(
            dir = %dir.display(),
            count = paths.len(),
            "Scanning input directory"
        );

        for path in &paths {
            self.process_file(path)?;
        }

        Ok(paths.len())
    }

    /// 1ファイルを読み込み → 解析 → 分類 → 出力 → 表示の順で処理する
    pub fn process_file(&mut self, path: &Path) -> DomainResult<Classification> {
        println!("\nProcessing image: {}", path.display());

        let image = self.loader.load(path)?;
        let features = self.analyzer.analyze(&image)?;
        let result = assign_conveyor(&features);

        println!("Result: {} → Conveyor {}", result.label, result.conveyor);
        println!(
            "Brightness: {:.2}, Saturation: {:.2}",
            features.brightness, features.saturation
        );

        // 元画像（リサイズ前）を表示し、キー入力まで待つ
        self.display.show(path, &image)?;

        Ok(result)
    }

    /// ディレクトリから処理対象の画像ファイルパスを収集する
    fn collect_image_paths(&self, dir: &Path) -> DomainResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir).map_err(|e| {
            crate::domain::DomainError::Process(format!(
                "Failed to read directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let mut paths = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && is_supported_image(&path) {
                paths.push(path);
            }
        }

        Ok(paths)
    }
}
