/// コア型定義
///
/// Domain層の中心となるデータ構造。
/// すべての処理で共有される不変の型。

use std::fmt;

/// デコード済みの画像データ
///
/// チャンネル順はBGR（OpenCV準拠）、8bit×3チャンネル、行優先の連続メモリ。
/// 各画像は呼び出し側が単独で所有し、処理後に破棄される。
#[derive(Debug, Clone)]
pub struct Image {
    /// ピクセルデータ（BGR形式、連続メモリ、width * height * 3 バイト）
    pub data: Vec<u8>,
    /// 画像の幅
    pub width: u32,
    /// 画像の高さ
    pub height: u32,
}

impl Image {
    /// チャンネル数（BGR固定）
    pub const CHANNELS: u32 = 3;

    /// 新しい画像を作成
    ///
    /// # Returns
    /// - `Some(Image)`: データ長が width * height * 3 と一致する場合
    /// - `None`: データ長が不正な場合
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        if data.len() as u64 != width as u64 * height as u64 * Self::CHANNELS as u64 {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }
}

/// 画像から抽出した特徴量ペア
///
/// いずれも8bit表現での算術平均のため [0, 255] に収まる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    /// 平均輝度（グレースケール変換後の平均）
    pub brightness: f64,
    /// 平均彩度（HSVのSチャンネルの平均）
    pub saturation: f64,
}

/// 分類ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// 高輝度・低彩度（透明物）
    Transparent,
    /// 低輝度・低〜中彩度（黒色物）
    Black,
    /// それ以外（有彩色物）
    Colorful,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transparent => "Transparent",
            Self::Black => "Black",
            Self::Colorful => "Colorful",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 振り分け先のコンベア
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conveyor {
    A,
    B,
    C,
}

impl Conveyor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for Conveyor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 分類結果（ラベルとコンベアの組）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub label: Label,
    pub conveyor: Conveyor,
}
