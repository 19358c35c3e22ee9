//! Excel Reading Module
//!
//! calamineによるExcel系コンテナ（.xlsx / .xls / .xlsb / .ods）の読み取り。
//! ブック内の先頭シートのみを対象とし、セル値は`CellFormatter`で
//! 閉じた値モデルへ変換します。

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Reader};
use log::debug;

use crate::error::IngestError;
use crate::formatter::CellFormatter;
use crate::types::Value;

/// Excelコンテナの先頭シートをセル値のグリッドとして読み取る
///
/// # 引数
///
/// * `buffer` - Excelコンテナの全バイト列
/// * `formatter` - セル値の変換に使用するフォーマッター
///
/// # 戻り値
///
/// * `Ok(Vec<Vec<Value>>)` - 先頭シートの行データ
/// * `Err(IngestError::MalformedDocument)` - コンテナの展開または
///   シートの読み取りに失敗した場合
///
/// # 変換規則
///
/// * シートの選択は文書内の定義順で、常に先頭の1枚のみ
/// * シートが存在しないブックは空のグリッドとして扱う
/// * 行の長さはcalamineが使用範囲で揃えるため、欠損セルは
///   `Value::Empty`として現れる
pub(crate) fn read_first_sheet(
    buffer: &[u8],
    formatter: &CellFormatter,
) -> Result<Vec<Vec<Value>>, IngestError> {
    // 1. コンテナを開く（形式はマジックナンバーから自動判別）
    let cursor = Cursor::new(buffer);
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| IngestError::MalformedDocument(e.to_string()))?;

    // 2. 先頭シートを文書順で特定
    let sheet_name = match workbook.sheet_names().first() {
        Some(name) => name.clone(),
        None => return Ok(Vec::new()),
    };

    // 3. シートの使用範囲を取得
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::MalformedDocument(e.to_string()))?;

    debug!(
        "reading sheet '{}' ({} rows x {} cols)",
        sheet_name,
        range.height(),
        range.width()
    );

    // 4. 各セルを閉じた値モデルへ変換
    let rows = range
        .rows()
        .map(|row| row.iter().map(|cell| formatter.format_cell(cell)).collect())
        .collect();

    Ok(rows)
}
