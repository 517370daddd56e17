//! Infrastructure層: 外部技術の統合
//!
//! Domain層のtraitを実装し、外部ライブラリ（OpenCV）と接続する。

pub mod common;
pub mod display;
pub mod display_selector;
pub mod feature_extract;
pub mod image_load;
pub mod silent_display;
