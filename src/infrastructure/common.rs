//! OpenCVアダプタの共通ユーティリティ
//!
//! Domain型の`Image`とOpenCVの`Mat`の相互変換。
//! 読み込み・解析・表示の各アダプタで共有される。

use crate::domain::{DomainError, DomainResult, Image};
use opencv::{
    core::{self, Mat, MatTraitConst},
    prelude::*,
};

/// MatをDomain型のImageに変換する
///
/// # Arguments
/// - `mat`: BGR形式（CV_8UC3）のMat
///
/// # Returns
/// 所有データを持つImage。非連続メモリのMatは先に深いコピーを行う。
pub(crate) fn mat_to_image(mat: &Mat) -> DomainResult<Image> {
    if mat.channels() != Image::CHANNELS as i32 {
        return Err(DomainError::Process(format!(
            "Expected {}-channel Mat, got {}",
            Image::CHANNELS,
            mat.channels()
        )));
    }

    let width = mat.cols() as u32;
    let height = mat.rows() as u32;

    // data_bytes()は連続メモリを要求するため、非連続ならコピーして詰め直す
    let owned;
    let continuous = if mat.is_continuous() {
        mat
    } else {
        owned = mat
            .try_clone()
            .map_err(|e| DomainError::Process(format!("Failed to clone Mat: {:?}", e)))?;
        &owned
    };

    let data = continuous
        .data_bytes()
        .map_err(|e| DomainError::Process(format!("Failed to read Mat data: {:?}", e)))?
        .to_vec();

    Image::new(data, width, height).ok_or_else(|| {
        DomainError::Process(format!(
            "Mat data length mismatch for {}x{} image",
            width, height
        ))
    })
}

/// ImageをBGR形式のMatビューに変換する
///
/// 返されるMatは`image.data`を借用する（コピーなし）。
/// Matの使用中は`image`が生存している必要がある。
pub(crate) fn image_to_mat_view(image: &Image) -> DomainResult<Mat> {
    let rows = image.height as i32;
    let cols = image.width as i32;

    let bgr_mat = unsafe {
        Mat::new_rows_cols_with_data_unsafe(
            rows,
            cols,
            core::CV_8UC3, // BGR形式
            image.data.as_ptr() as *mut std::ffi::c_void,
            core::Mat_AUTO_STEP,
        )
        .map_err(|e| DomainError::Process(format!("Failed to create Mat: {:?}", e)))?
    };

    Ok(bgr_mat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::Scalar;

    #[test]
    fn test_mat_to_image_roundtrip() {
        let mat = Mat::new_rows_cols_with_default(
            4,
            6,
            core::CV_8UC3,
            Scalar::new(10.0, 20.0, 30.0, 0.0),
        )
        .unwrap();

        let image = mat_to_image(&mat).unwrap();
        assert_eq!(image.width, 6);
        assert_eq!(image.height, 4);
        assert_eq!(image.data.len(), 4 * 6 * 3);
        // BGR順で格納されている
        assert_eq!(&image.data[0..3], &[10, 20, 30]);

        let view = image_to_mat_view(&image).unwrap();
        assert_eq!(view.rows(), 4);
        assert_eq!(view.cols(), 6);
    }

    #[test]
    fn test_mat_to_image_rejects_single_channel() {
        let mat =
            Mat::new_rows_cols_with_default(4, 4, core::CV_8UC1, Scalar::all(0.0)).unwrap();
        let result = mat_to_image(&mat);
        assert!(matches!(result.unwrap_err(), DomainError::Process(_)));
    }
}
