//! Ingest Module
//!
//! アップロードされたバイト列をレコード列へ取り込む基礎実装。
//! 形式判別は常に内容（マジックナンバー）で行い、ファイル名には依存しません。

mod delimited;
mod excel;

use log::debug;

use crate::api::SourceFormat;
use crate::error::IngestError;
use crate::formatter::CellFormatter;
use crate::types::{Record, RecordSet, Value};

/// ZIPコンテナのマジックナンバー（.xlsx）
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// OLE2コンテナのマジックナンバー（レガシー.xls）
const OLE2_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// UTF-8のバイトオーダーマーク
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// バイト列の内容からソース形式を判別
///
/// # 判別規則
///
/// 1. ZIPマジック（`PK\x03\x04`）またはOLE2マジックで始まる → Excel系コンテナ
/// 2. それ以外で、先頭のBOMを除いたバイト列が有効なUTF-8かつ
///    NULバイトを含まない → 区切りテキスト（CSV）
/// 3. どちらでもない → `None`（デコード不能な内容）
///
/// # 使用例
///
/// ```
/// use sheetsift::{detect_format, SourceFormat};
///
/// assert_eq!(detect_format(b"name,age\nAlice,30"), Some(SourceFormat::Csv));
/// assert_eq!(detect_format(&[0x00, 0x01, 0x02]), None);
/// ```
pub fn detect_format(bytes: &[u8]) -> Option<SourceFormat> {
    if bytes.starts_with(&ZIP_MAGIC) || bytes.starts_with(&OLE2_MAGIC) {
        return Some(SourceFormat::Excel);
    }

    let text = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes);
    if !text.contains(&0x00) && std::str::from_utf8(text).is_ok() {
        return Some(SourceFormat::Csv);
    }

    None
}

/// バイト列をデコードして、先頭シートをセル値の2次元グリッドとして返す
///
/// # 引数
///
/// * `buffer` - アップロードされたファイルの全バイト列
/// * `formatter` - Excelセル値の変換に使用するフォーマッター
///
/// # 戻り値
///
/// * `Ok(Vec<Vec<Value>>)` - 行ごとのセル値（行0がヘッダー行）
/// * `Err(IngestError::MalformedDocument)` - 内容がどの形式にも一致しない、
///   またはデコードに失敗した場合
pub(crate) fn decode_rows(
    buffer: &[u8],
    formatter: &CellFormatter,
) -> Result<Vec<Vec<Value>>, IngestError> {
    match detect_format(buffer) {
        Some(SourceFormat::Excel) => {
            debug!("sniffed Excel container ({} bytes)", buffer.len());
            excel::read_first_sheet(buffer, formatter)
        }
        Some(SourceFormat::Csv) => {
            debug!("sniffed delimited text ({} bytes)", buffer.len());
            delimited::read_rows(buffer)
        }
        None => Err(IngestError::MalformedDocument(
            "content does not match any supported spreadsheet format".to_string(),
        )),
    }
}

/// セル値の2次元グリッドをレコード列へ変換
///
/// 行0をヘッダー行として扱い、各ヘッダーセルを正準変換でテキスト化します
/// （左から右の順、重複は除去しない）。以降の各行はヘッダーと位置で
/// 対応付けます。
///
/// # エッジケース
///
/// * 行がゼロのグリッド → 空のレコード列（エラーではない）
/// * ヘッダーより短い行 → 不足分のキーには明示的な`Value::Empty`
/// * ヘッダーより長い行 → 余剰セルは破棄
/// * 重複ヘッダー → 後方の列が同名キーを上書き（位置は先勝ち）
pub(crate) fn records_from_rows(rows: Vec<Vec<Value>>) -> RecordSet {
    let mut rows = rows.into_iter();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(Value::to_display_text).collect(),
        None => return RecordSet::new(),
    };

    let mut records = RecordSet::new();
    for row in rows {
        let mut record = Record::new();
        for (index, header) in headers.iter().enumerate() {
            let value = row.get(index).cloned().unwrap_or(Value::Empty);
            record.insert(header.clone(), value);
        }
        records.push(record);
    }

    records
}
