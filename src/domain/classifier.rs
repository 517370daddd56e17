/// コンベア振り分けロジック
///
/// 特徴量ペア（輝度・彩度）を固定しきい値と比較し、
/// ラベルとコンベアを決定する純粋関数。
///
/// # 設計方針
/// - しきい値は名前付き定数（設定ファイルからは変更不可）
/// - 全実数ペアがちょうど1つのコンベアに写る全域関数
/// - 比較は厳密な大小（境界値はフォールスルー）

use crate::domain::types::{Classification, Conveyor, Features, Label};

/// 透明判定の輝度下限（これを超える場合のみ透明候補）
pub const TRANSPARENT_BRIGHTNESS_MIN: f64 = 180.0;
/// 透明判定の彩度上限（これ未満の場合のみ透明候補）
pub const TRANSPARENT_SATURATION_MAX: f64 = 30.0;
/// 黒判定の輝度上限（これ未満の場合のみ黒候補）
pub const BLACK_BRIGHTNESS_MAX: f64 = 80.0;
/// 黒判定の彩度上限（これ未満の場合のみ黒候補）
pub const BLACK_SATURATION_MAX: f64 = 50.0;

/// 特徴量からコンベアを決定する
///
/// ルールは以下の固定優先順で評価される:
/// 1. 輝度 > 180 かつ 彩度 < 30 → Transparent / コンベアB
/// 2. 輝度 < 80 かつ 彩度 < 50 → Black / コンベアA
/// 3. それ以外 → Colorful / コンベアC
pub fn assign_conveyor(features: &Features) -> Classification {
    if features.brightness > TRANSPARENT_BRIGHTNESS_MIN
        && features.saturation < TRANSPARENT_SATURATION_MAX
    {
        Classification {
            label: Label::Transparent,
            conveyor: Conveyor::B,
        }
    } else if features.brightness < BLACK_BRIGHTNESS_MAX
        && features.saturation < BLACK_SATURATION_MAX
    {
        Classification {
            label: Label::Black,
            conveyor: Conveyor::A,
        }
    } else {
        Classification {
            label: Label::Colorful,
            conveyor: Conveyor::C,
        }
    }
}
