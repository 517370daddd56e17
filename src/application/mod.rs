//! Application層: ユースケースの組み立て
//!
//! Domain層のportsを合成し、ディレクトリ単位の分類フローを制御する。

pub mod pipeline;
