/// サイレント表示アダプタ
///
/// テスト・非対話実行用の表示実装。
/// ウィンドウを開かず、キー入力待ちもせず即座に戻る。

use crate::domain::{DisplayPort, DomainResult, Image};
use std::path::{Path, PathBuf};

/// サイレント表示アダプタ
pub struct SilentDisplayAdapter {
    /// 表示要求を受けたパスの記録（テストでの検証用）
    shown: Vec<PathBuf>,
}

impl SilentDisplayAdapter {
    /// 新しいサイレント表示アダプタを作成
    pub fn new() -> Self {
        Self { shown: Vec::new() }
    }

    /// 表示要求を受けたパスの一覧を取得
    pub fn shown(&self) -> &[PathBuf] {
        &self.shown
    }
}

impl Default for SilentDisplayAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for SilentDisplayAdapter {
    fn show(&mut self, path: &Path, _image: &Image) -> DomainResult<()> {
        self.shown.push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_records_paths_without_blocking() {
        let image = Image::new(vec![0u8; 3], 1, 1).unwrap();
        let mut display = SilentDisplayAdapter::new();

        display.show(Path::new("a.png"), &image).unwrap();
        display.show(Path::new("b.jpg"), &image).unwrap();

        assert_eq!(display.shown().len(), 2);
        assert_eq!(display.shown()[0], Path::new("a.png"));
    }
}
