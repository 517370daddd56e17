/// Port定義（Clean Architectureのインターフェース）
///
/// Domain層が外部実装に依存するための抽象trait。
/// Infrastructure層がこれらを実装し、Application層がDIで注入する。
///
/// 表示（キー入力待ち）をtraitの背後に隔離することで、
/// 分類コアを対話依存ゼロでテストできるようにしている。

use crate::domain::error::DomainResult;
use crate::domain::types::{Features, Image};
use std::path::Path;

/// 読み込みポート: 画像ファイルのデコードを抽象化
pub trait LoadPort {
    /// パスから画像を読み込む
    ///
    /// # Returns
    /// - `Ok(Image)`: デコード成功（BGR形式の所有データ）
    /// - `Err(DomainError::Load)`: デコード結果が空（非画像・破損・読み取り不可）
    fn load(&self, path: &Path) -> DomainResult<Image>;
}

/// 解析ポート: 特徴量抽出を抽象化
pub trait AnalyzePort {
    /// 画像から特徴量ペア（平均輝度・平均彩度）を算出する
    ///
    /// # Returns
    /// - `Ok(Features)`: 各値は [0, 255] の範囲
    /// - `Err(DomainError::Process)`: 画像処理ライブラリの呼び出し失敗
    fn analyze(&self, image: &Image) -> DomainResult<Features>;
}

/// 表示ポート: 画像ウィンドウとキー入力待ちを抽象化
pub trait DisplayPort {
    /// 画像を表示し、次へ進めるまでブロックする
    ///
    /// 対話的な実装はキー入力があるまで無期限に待つ。
    /// テスト・サイレント用の実装は即座に戻る。
    ///
    /// # Arguments
    /// - `path`: 表示対象のファイルパス（ログ・記録用）
    /// - `image`: 表示する元画像（リサイズ前）
    fn show(&mut self, path: &Path, image: &Image) -> DomainResult<()>;
}
