//! Export Module
//!
//! 蓄積したレコード列の書き出し（CSV / JSON）と、ホスト層へ渡す
//! ダウンロード成果物の記述子を提供するモジュール。

mod csv;
mod json;

use std::io::Write;

use crate::api::ExportFormat;
use crate::error::IngestError;
use crate::types::Record;

pub use csv::{to_csv_string, write_csv};
pub use json::{to_json_string, write_json};

/// ダウンロード成果物の既定ファイル名
pub const DOWNLOAD_FILENAME: &str = "extracted_data.csv";

/// ダウンロード成果物のコンテンツタイプ
pub const DOWNLOAD_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// ダウンロード成果物の記述子
///
/// CSVテキスト本体と、ホスト層がファイル／Blobを書き出す際に使用する
/// メタデータの組。実際の書き出し（ファイル保存やブラウザのダウンロード）
/// はホスト層の責務です。
///
/// # 使用例
///
/// ```
/// use sheetsift::{Download, Record, Value};
///
/// let records = vec![Record::from_iter([
///     ("name".to_string(), Value::Text("Alice".to_string())),
/// ])];
///
/// let download = Download::csv(&records);
/// assert_eq!(download.filename, "extracted_data.csv");
/// assert_eq!(download.content_type, "text/csv; charset=utf-8");
/// assert_eq!(download.body, "name\nAlice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// 保存時のファイル名
    pub filename: &'static str,

    /// コンテンツタイプ（charset込み）
    pub content_type: &'static str,

    /// 成果物の本体テキスト
    pub body: String,
}

impl Download {
    /// レコード列からCSVダウンロード成果物を構築
    pub fn csv(records: &[Record]) -> Self {
        Self {
            filename: DOWNLOAD_FILENAME,
            content_type: DOWNLOAD_CONTENT_TYPE,
            body: to_csv_string(records),
        }
    }
}

/// レコード列を指定フォーマットのテキストへ直列化
///
/// # 引数
///
/// * `records` - 直列化対象のレコード列
/// * `format` - 出力フォーマット
pub fn export_string(records: &[Record], format: ExportFormat) -> Result<String, IngestError> {
    match format {
        ExportFormat::Csv => Ok(to_csv_string(records)),
        ExportFormat::Json => to_json_string(records),
    }
}

/// レコード列を指定フォーマットでライターへ書き出す
pub fn export_to_writer<W: Write>(
    records: &[Record],
    format: ExportFormat,
    writer: &mut W,
) -> Result<(), IngestError> {
    match format {
        ExportFormat::Csv => write_csv(records, writer),
        ExportFormat::Json => write_json(records, writer),
    }
}
