//! JSON Schema生成ツール
//!
//! src/domain/config.rsの設定構造からJSON Schema (schema/config.json) を
//! 自動生成します。
//!
//! 実行方法:
//! ```
//! cargo run --bin generate_schema
//! ```

use conveyor_sort::domain::config::AppConfig;
use schemars::schema_for;
use std::fs;

fn main() {
    println!("JSON Schema生成中...");

    // AppConfigからJSON Schemaを生成
    let schema = schema_for!(AppConfig);

    // JSON文字列に変換（prettify）
    let json = serde_json::to_string_pretty(&schema).expect("Failed to serialize schema to JSON");

    // schema/ディレクトリを作成
    fs::create_dir_all("schema").expect("Failed to create schema/ directory");

    // schema/config.jsonに書き出し
    fs::write("schema/config.json", json).expect("Failed to write schema/config.json");
    println!("  ✓ schema/config.json");

    println!("✅ 生成完了: schema/config.json");
}
