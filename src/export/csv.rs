//! CSV Serialization Module
//!
//! 蓄積したレコード列をCSVテキストへ直列化するモジュール。
//! ヘッダー行は先頭レコードのキー順から導出します。

use std::io::Write;

use crate::error::IngestError;
use crate::types::Record;

/// レコード列をCSVテキストへ直列化
///
/// # 引数
///
/// * `records` - 直列化対象のレコード列
///
/// # 戻り値
///
/// CSVテキスト。空のレコード列の場合は空文字列（ヘッダー行も出力しない）。
///
/// # 変換規則
///
/// * ヘッダー行は先頭レコードのキーをキー順で`,`連結したもの
///   （以降のレコードに追加のキーがあっても無視される）
/// * 各セルはヘッダーのキーで引いた表示テキスト（キーが無ければ空文字列）
/// * カンマまたはダブルクォートを含むセルはダブルクォートで囲み、
///   内部のダブルクォートは2つに重ねる。改行は引用の対象外
/// * 行は`\n`で連結し、末尾に改行は付けない
///
/// # 使用例
///
/// ```
/// use sheetsift::{to_csv_string, Record, Value};
///
/// let records = vec![Record::from_iter([
///     ("name".to_string(), Value::Text("Alice".to_string())),
///     ("age".to_string(), Value::Number(30.0)),
/// ])];
///
/// assert_eq!(to_csv_string(&records), "name,age\nAlice,30");
/// ```
pub fn to_csv_string(records: &[Record]) -> String {
    let first = match records.first() {
        Some(record) => record,
        None => return String::new(),
    };

    // 1. ヘッダー行（エスケープなしの素の連結）
    let headers: Vec<String> = first.keys().cloned().collect();
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(headers.join(","));

    // 2. 各レコードをヘッダーのキー順で直列化
    for record in records {
        let line: Vec<String> = headers
            .iter()
            .map(|header| escape_csv(&record.display_text(header)))
            .collect();
        lines.push(line.join(","));
    }

    lines.join("\n")
}

/// レコード列をCSVテキストとしてライターへ書き出す
///
/// 生成されるテキストは[`to_csv_string`]と同一です。
///
/// # エラー
///
/// 書き込みに失敗した場合は`IngestError::IoFailure`を返します。
pub fn write_csv<W: Write>(records: &[Record], writer: &mut W) -> Result<(), IngestError> {
    write!(writer, "{}", to_csv_string(records))?;
    writer.flush()?;
    Ok(())
}

/// CSVセルをエスケープ
///
/// カンマまたはダブルクォートを含む場合のみダブルクォートで囲み、
/// 内部のダブルクォートは2つに重ねます。改行はエスケープ対象に
/// 含まれません。
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
