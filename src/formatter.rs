//! Formatter Module
//!
//! calamineのセル値をレコード値へ変換するモジュール。
//! 日付セルは設定された[`DateFormat`]に従ってテキスト化します。

use calamine::{Data, ExcelDateTime};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::api::DateFormat;
use crate::error::IngestError;
use crate::types::Value;

/// セルフォーマッター
///
/// calamineの[`Data`]を閉じた[`Value`]列挙型へ写像するファサードです。
/// 全域関数であり、変換不能なセルは値を落とさず退避します
/// （日付計算が失敗した場合はシリアル値を数値として残す）。
#[derive(Debug)]
pub(crate) struct CellFormatter {
    /// 日付の出力形式
    date_format: DateFormat,

    /// 日付フォーマッター
    date_formatter: DateFormatter,
}

impl CellFormatter {
    /// 新しいCellFormatterインスタンスを生成
    pub fn new(date_format: DateFormat) -> Self {
        Self {
            date_format,
            date_formatter: DateFormatter,
        }
    }

    /// セル値をレコード値に変換
    ///
    /// # 変換規則
    ///
    /// * `Int` / `Float` → `Value::Number`
    /// * `String` → `Value::Text`
    /// * `Bool` → `Value::Bool`
    /// * `DateTime` → 日付はテキスト化、期間はシリアル値のまま数値
    /// * `DateTimeIso` / `DurationIso` → 文字列のまま`Value::Text`
    /// * `Error` → エラーコード文字列（例: `#DIV/0!`）の`Value::Text`
    /// * `Empty` → `Value::Empty`
    pub fn format_cell(&self, cell: &Data) -> Value {
        match cell {
            Data::Int(i) => Value::Number(*i as f64),
            Data::Float(f) => Value::Number(*f),
            Data::String(s) => Value::Text(s.clone()),
            Data::Bool(b) => Value::Bool(*b),
            Data::DateTime(dt) => self.format_datetime_cell(dt),
            Data::DateTimeIso(s) => Value::Text(s.clone()),
            Data::DurationIso(s) => Value::Text(s.clone()),
            Data::Error(e) => Value::Text(e.to_string()),
            _ => Value::Empty,
        }
    }

    /// 日付・時刻セルを変換
    ///
    /// calamineが暦日時に解決できたセルはそのままテキスト化します。
    /// 解決できなかった場合は1900年エポックのシリアル値として再計算し、
    /// それにも失敗した場合はシリアル値を数値として返します。
    fn format_datetime_cell(&self, dt: &ExcelDateTime) -> Value {
        if !dt.is_datetime() {
            // 期間セルはシリアル値（日数）のまま扱う
            return Value::Number(dt.as_f64());
        }

        if let Some(datetime) = dt.as_datetime() {
            return Value::Text(self.date_formatter.format_datetime(datetime, &self.date_format));
        }

        match self
            .date_formatter
            .format_serial(dt.as_f64(), &self.date_format, false)
        {
            Ok(text) => Value::Text(text),
            Err(_) => Value::Number(dt.as_f64()),
        }
    }
}

/// 日付フォーマッター
///
/// Excelのシリアル日付値と暦日時を文字列に変換します。
#[derive(Debug)]
pub(crate) struct DateFormatter;

impl DateFormatter {
    /// 暦日時をフォーマット
    ///
    /// # 引数
    ///
    /// * `datetime` - 変換対象の暦日時
    /// * `format` - 日付の出力形式
    ///
    /// # 戻り値
    ///
    /// フォーマット済み文字列。`Iso8601`は時刻成分が深夜0時の場合は
    /// `YYYY-MM-DD`、それ以外は`YYYY-MM-DDTHH:MM:SS`を返します。
    /// `Custom`の書式文字列はビルダーで検証済みであることが前提です。
    pub fn format_datetime(&self, datetime: NaiveDateTime, format: &DateFormat) -> String {
        match format {
            DateFormat::Iso8601 => {
                if datetime.time() == NaiveTime::MIN {
                    datetime.format("%Y-%m-%d").to_string()
                } else {
                    datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
                }
            }
            DateFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// シリアル日付値をフォーマット
    ///
    /// # 引数
    ///
    /// * `serial_value` - Excelのシリアル日付値（小数部は時刻）
    /// * `format` - 日付の出力形式
    /// * `is_1904` - 1904年エポックを使用するかどうか
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - フォーマット済み日付文字列
    /// * `Err(IngestError)` - 日付計算が範囲外になった場合
    ///
    /// # エポックシステム
    ///
    /// - 1900年システム（デフォルト）: シリアル値1 = 1900年1月1日。
    ///   Excelはシリアル値60を実在しない1900年2月29日として扱うため、
    ///   値60未満と以降でエポックが1日ずれます。
    /// - 1904年システム（Mac版Excel）: シリアル値0 = 1904年1月1日。
    pub fn format_serial(
        &self,
        serial_value: f64,
        format: &DateFormat,
        is_1904: bool,
    ) -> Result<String, IngestError> {
        let days = serial_value.floor() as i64;

        let epoch = if is_1904 {
            NaiveDate::from_ymd_opt(1904, 1, 1)
        } else if days < 60 {
            // 1900年3月1日より前はうるう年バグの分だけエポックがずれる
            NaiveDate::from_ymd_opt(1899, 12, 31)
        } else {
            NaiveDate::from_ymd_opt(1899, 12, 30)
        }
        .ok_or_else(|| IngestError::Config("Invalid epoch date".to_string()))?;

        let date = Duration::try_days(days)
            .and_then(|delta| epoch.checked_add_signed(delta))
            .ok_or_else(|| {
                IngestError::Config(format!(
                    "Date calculation overflow: serial_value={}, is_1904={}",
                    serial_value, is_1904
                ))
            })?;

        // 小数部を秒数に変換（丸めにより1日に達した場合は繰り上げ）
        let mut seconds = ((serial_value - days as f64) * 86_400.0).round() as i64;
        let date = if seconds >= 86_400 {
            seconds = 0;
            date.checked_add_signed(Duration::days(1)).ok_or_else(|| {
                IngestError::Config(format!(
                    "Date calculation overflow: serial_value={}, is_1904={}",
                    serial_value, is_1904
                ))
            })?
        } else {
            date
        };

        let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds as u32, 0)
            .ok_or_else(|| IngestError::Config("Invalid time of day".to_string()))?;

        Ok(self.format_datetime(date.and_time(time), format))
    }
}
