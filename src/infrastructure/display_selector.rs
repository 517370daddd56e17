//! 表示アダプタのセレクタ（実行時選択用）
//!
//! 設定ファイルの display.enabled で対話表示とサイレント実行を切り替える。
//! vtableのオーバーヘッドを避けるため、trait objectではなくenumでディスパッチ。

use crate::domain::{DisplayPort, DomainResult, Image};
use crate::infrastructure::display::WindowDisplayAdapter;
use crate::infrastructure::silent_display::SilentDisplayAdapter;
use std::path::Path;

/// 表示アダプタの選択
pub enum DisplaySelector {
    /// highguiウィンドウ表示（キー入力待ちあり）
    Window(WindowDisplayAdapter),
    /// 表示なし（連続処理）
    Silent(SilentDisplayAdapter),
}

impl DisplaySelector {
    /// 設定値から表示アダプタを選択する
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            DisplaySelector::Window(WindowDisplayAdapter::new())
        } else {
            DisplaySelector::Silent(SilentDisplayAdapter::new())
        }
    }

    /// 選択中のバックエンド名を取得
    pub fn backend_name(&self) -> &'static str {
        match self {
            DisplaySelector::Window(_) => "window (OpenCV highgui)",
            DisplaySelector::Silent(_) => "silent",
        }
    }
}

impl DisplayPort for DisplaySelector {
    fn show(&mut self, path: &Path, image: &Image) -> DomainResult<()> {
        match self {
            DisplaySelector::Window(adapter) => adapter.show(path, image),
            DisplaySelector::Silent(adapter) => adapter.show(path, image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_from_enabled() {
        assert!(matches!(
            DisplaySelector::from_enabled(true),
            DisplaySelector::Window(_)
        ));
        assert!(matches!(
            DisplaySelector::from_enabled(false),
            DisplaySelector::Silent(_)
        ));
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(
            DisplaySelector::from_enabled(false).backend_name(),
            "silent"
        );
    }
}
