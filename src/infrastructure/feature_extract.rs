/// 特徴量抽出アダプタ
///
/// OpenCVを使用した平均輝度・平均彩度の算出実装。
/// 固定解像度へのリサイズで処理コストを抑え、
/// アスペクト比が平均値へ与える影響を正規化する。

use crate::domain::{AnalyzePort, DomainError, DomainResult, Features, Image};
use crate::infrastructure::common::image_to_mat_view;
use opencv::{
    core::{self, Mat, Size},
    imgproc,
    prelude::*,
};

/// 解析用の固定リサイズ解像度（ピクセル）
pub const ANALYSIS_SIZE: i32 = 200;

/// 特徴量抽出アダプタ
pub struct FeatureExtractAdapter;

impl FeatureExtractAdapter {
    /// 新しい特徴量抽出アダプタを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for FeatureExtractAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzePort for FeatureExtractAdapter {
    fn analyze(&self, image: &Image) -> DomainResult<Features> {
        let bgr = image_to_mat_view(image)?;

        // 200x200へリサイズ（線形補間、cv2.resizeのデフォルトと同じ）
        let mut resized = Mat::default();
        imgproc::resize(
            &bgr,
            &mut resized,
            Size::new(ANALYSIS_SIZE, ANALYSIS_SIZE),
            0.0,
            0.0,
            imgproc::INTER_LINEAR,
        )
        .map_err(|e| DomainError::Process(format!("Failed to resize image: {:?}", e)))?;

        // BGR → グレースケール変換、全ピクセルの算術平均が輝度
        let mut gray = Mat::default();
        imgproc::cvt_color(&resized, &mut gray, imgproc::COLOR_BGR2GRAY, 0)
            .map_err(|e| DomainError::Process(format!("Failed to convert BGR to GRAY: {:?}", e)))?;

        let brightness = core::mean(&gray, &core::no_array())
            .map_err(|e| DomainError::Process(format!("Failed to compute mean: {:?}", e)))?[0];

        // BGR → HSV変換、Sチャンネル（8bit表現: [0-255]）の算術平均が彩度
        let mut hsv = Mat::default();
        imgproc::cvt_color(&resized, &mut hsv, imgproc::COLOR_BGR2HSV, 0)
            .map_err(|e| DomainError::Process(format!("Failed to convert BGR to HSV: {:?}", e)))?;

        let mut saturation_channel = Mat::default();
        core::extract_channel(&hsv, &mut saturation_channel, 1)
            .map_err(|e| DomainError::Process(format!("Failed to extract S channel: {:?}", e)))?;

        let saturation = core::mean(&saturation_channel, &core::no_array())
            .map_err(|e| DomainError::Process(format!("Failed to compute mean: {:?}", e)))?[0];

        tracing::debug!(brightness, saturation, "Features extracted");

        Ok(Features {
            brightness,
            saturation,
        })
    }
}
