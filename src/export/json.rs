//! JSON Serialization Module
//!
//! 蓄積したレコード列をJSON配列へ直列化するモジュール。
//! キー順は[`Record`]の`Serialize`実装が挿入順のまま書き出します。

use std::io::Write;

use crate::error::IngestError;
use crate::types::Record;

/// レコード列をJSONテキストへ直列化
///
/// # 引数
///
/// * `records` - 直列化対象のレコード列
///
/// # 戻り値
///
/// レコードごとに1オブジェクトの配列を整形出力したJSONテキスト。
/// 空のレコード列の場合は`[]`。
///
/// # 変換規則
///
/// * `Value::Text` → JSON文字列
/// * `Value::Number` → JSON数値（整数値は小数点なしで出力）
/// * `Value::Bool` → JSON真偽値
/// * `Value::Empty` → `null`
pub fn to_json_string(records: &[Record]) -> Result<String, IngestError> {
    serde_json::to_string_pretty(records)
        .map_err(|e| IngestError::Config(format!("JSON serialization error: {}", e)))
}

/// レコード列をJSONテキストとしてライターへ書き出す
///
/// 生成されるテキストは[`to_json_string`]と同一で、末尾に改行を1つ付けます。
pub fn write_json<W: Write>(records: &[Record], writer: &mut W) -> Result<(), IngestError> {
    serde_json::to_writer_pretty(&mut *writer, records)
        .map_err(|e| IngestError::Config(format!("JSON serialization error: {}", e)))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
