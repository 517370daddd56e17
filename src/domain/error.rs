/// エラー型定義
///
/// Domain層の統一エラー型。thiserrorを使用して型安全なエラー処理を提供します。
///
/// # 設計方針
/// - unwrap()の使用を禁止し、明示的なエラーハンドリングを強制
/// - Result型でエラー伝播を明示化
/// - 読み込み失敗は試行したパスをエラー値として保持する

use thiserror::Error;

/// Domain層の統一エラー型
#[derive(Error, Debug)]
pub enum DomainError {
    /// 画像読み込みエラー（デコード結果が空）
    #[error("Could not load image: {path}")]
    Load {
        /// 読み込みを試みたパス
        path: String,
    },

    /// 処理（画像処理）関連のエラー
    #[error("Process error: {0}")]
    Process(String),

    /// 表示関連のエラー
    #[error("Display error: {0}")]
    Display(String),

    /// 設定関連のエラー
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Domain層の統一Result型
pub type DomainResult<T> = Result<T, DomainError>;
