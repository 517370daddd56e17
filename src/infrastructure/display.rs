/// 画像表示アダプタ
///
/// OpenCV highguiによる対話的な画像表示実装。
/// 各画像を表示した後、キー入力があるまで無期限にブロックする。
/// タイムアウトやキャンセルは存在しない（意図的な直列化ポイント）。

use crate::domain::{DisplayPort, DomainError, DomainResult, Image};
use crate::infrastructure::common::image_to_mat_view;
use opencv::highgui;
use std::path::Path;

/// 表示ウィンドウのタイトル
const WINDOW_NAME: &str = "Input Image";

/// 画像表示アダプタ
pub struct WindowDisplayAdapter;

impl WindowDisplayAdapter {
    /// 新しい表示アダプタを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowDisplayAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for WindowDisplayAdapter {
    fn show(&mut self, path: &Path, image: &Image) -> DomainResult<()> {
        // リサイズ前の元画像を表示する
        let mat = image_to_mat_view(image)?;

        // WINDOW_AUTOSIZEで等倍表示（リサイズ不可）
        let _ = highgui::named_window(WINDOW_NAME, highgui::WINDOW_AUTOSIZE);

        highgui::imshow(WINDOW_NAME, &mat)
            .map_err(|e| DomainError::Display(format!("Failed to show image: {:?}", e)))?;

        tracing::debug!(path = %path.display(), "Waiting for key press");

        // 0 = キー入力まで無期限に待つ
        highgui::wait_key(0)
            .map_err(|e| DomainError::Display(format!("Failed to wait for key: {:?}", e)))?;

        highgui::destroy_all_windows()
            .map_err(|e| DomainError::Display(format!("Failed to destroy windows: {:?}", e)))?;

        Ok(())
    }
}
