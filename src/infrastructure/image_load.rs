/// 画像読み込みアダプタ
///
/// OpenCVのimreadによるファイルデコード実装。
/// デコード結果が空の場合は対象パスを載せたLoadエラーを返す。

use crate::domain::{DomainError, DomainResult, Image, LoadPort};
use crate::infrastructure::common::mat_to_image;
use opencv::{core::MatTraitConst, imgcodecs};
use std::path::Path;

/// 画像読み込みアダプタ
pub struct ImreadLoaderAdapter;

impl ImreadLoaderAdapter {
    /// 新しい読み込みアダプタを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImreadLoaderAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadPort for ImreadLoaderAdapter {
    fn load(&self, path: &Path) -> DomainResult<Image> {
        let path_str = path.to_string_lossy();

        // IMREAD_COLORは常に3チャンネルBGRでデコードする
        let mat = imgcodecs::imread(&path_str, imgcodecs::IMREAD_COLOR)
            .map_err(|e| DomainError::Process(format!("imread failed: {:?}", e)))?;

        // 非画像・破損・読み取り不可のいずれでも空Matが返る
        if mat.empty() {
            return Err(DomainError::Load {
                path: path_str.into_owned(),
            });
        }

        tracing::debug!(
            path = %path.display(),
            width = mat.cols(),
            height = mat.rows(),
            "Image decoded"
        );

        mat_to_image(&mat)
    }
}
