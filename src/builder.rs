//! Builder Module
//!
//! Fluent Builder APIを提供し、`Ingestor`インスタンスを段階的に構築する。

use std::io::Read;

use chrono::NaiveDate;
use log::debug;

use crate::api::DateFormat;
use crate::error::IngestError;
use crate::formatter::CellFormatter;
use crate::ingest;
use crate::security::SecurityConfig;
use crate::types::RecordSet;

/// 取り込み処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct IngestConfig {
    /// 日付の出力形式
    pub date_format: DateFormat,

    /// 入力ファイルサイズの上限（バイト）
    pub max_input_file_size: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            date_format: DateFormat::Iso8601,
            max_input_file_size: SecurityConfig::default().max_input_file_size,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Ingestor`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```
/// use sheetsift::{DateFormat, IngestorBuilder};
///
/// # fn main() -> Result<(), sheetsift::IngestError> {
/// let ingestor = IngestorBuilder::new()
///     .with_date_format(DateFormat::Custom("%Y/%m/%d".to_string()))
///     .with_max_input_size(10 * 1024 * 1024)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct IngestorBuilder {
    /// 内部設定（構築中）
    config: IngestConfig,
}

impl Default for IngestorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IngestorBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 日付形式: ISO 8601
    /// - 入力サイズ上限: 2GiB
    pub fn new() -> Self {
        Self {
            config: IngestConfig::default(),
        }
    }

    /// 日付の出力形式を指定する
    ///
    /// # 引数
    ///
    /// * `format: DateFormat`: 日付形式
    ///
    /// # 使用例
    ///
    /// ```
    /// use sheetsift::{DateFormat, IngestorBuilder};
    ///
    /// // ISO 8601形式（デフォルト）
    /// let builder = IngestorBuilder::new()
    ///     .with_date_format(DateFormat::Iso8601);
    ///
    /// // カスタム形式
    /// let builder = IngestorBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%Y年%m月%d日".to_string()));
    /// ```
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// 入力ファイルサイズの上限を指定する
    ///
    /// 上限を超えたバイト列の取り込みは`IngestError::SecurityViolation`で
    /// 拒否されます。
    ///
    /// # 引数
    ///
    /// * `max_bytes: u64`: 上限バイト数（0は`build()`時に拒否される）
    pub fn with_max_input_size(mut self, max_bytes: u64) -> Self {
        self.config.max_input_file_size = max_bytes;
        self
    }

    /// 設定を検証し、`Ingestor`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Ingestor)`: 設定が有効な場合、Ingestorインスタンス
    /// * `Err(IngestError::Config)`: 設定が無効な場合
    ///
    /// # 発生し得るエラー
    ///
    /// * `IngestError::Config(String)`: 設定の検証に失敗した場合
    ///   * 入力サイズ上限が0
    ///   * カスタム日付形式が不正な書式文字列
    pub fn build(self) -> Result<Ingestor, IngestError> {
        // 1. サイズ上限の検証
        if self.config.max_input_file_size == 0 {
            return Err(IngestError::Config(
                "Invalid max input size: must be greater than 0".to_string(),
            ));
        }

        // 2. カスタム日付形式の検証
        if let DateFormat::Custom(ref format_str) = self.config.date_format {
            use std::fmt::Write as _;

            // テスト用の日時でフォーマット試行（時刻指定子も通るように日時で試す）
            let probe = NaiveDate::from_ymd_opt(2025, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .ok_or_else(|| IngestError::Config("Failed to create probe date".to_string()))?;

            let mut rendered = String::new();
            let valid = write!(rendered, "{}", probe.format(format_str)).is_ok();
            if !valid || rendered.is_empty() {
                return Err(IngestError::Config(format!(
                    "Invalid date format string: '{}'",
                    format_str
                )));
            }
        }

        // 3. Ingestorインスタンス生成
        Ok(Ingestor::new(self.config))
    }
}

/// 取り込み処理のファサード
///
/// アップロードされたバイト列をレコード列へ取り込むメインエントリー
/// ポイントです。`IngestorBuilder`を使用して構築された設定に基づいて
/// 取り込み処理を実行します。
///
/// # 使用例
///
/// ```
/// use sheetsift::IngestorBuilder;
///
/// # fn main() -> Result<(), sheetsift::IngestError> {
/// let ingestor = IngestorBuilder::new().build()?;
/// let records = ingestor.ingest_bytes(b"name,age\nAlice,30", "people.csv")?;
/// assert_eq!(records.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Ingestor {
    /// 取り込み設定
    config: IngestConfig,

    /// セルフォーマッター
    formatter: CellFormatter,
}

impl Ingestor {
    pub(crate) fn new(config: IngestConfig) -> Self {
        Self {
            formatter: CellFormatter::new(config.date_format.clone()),
            config,
        }
    }

    /// バイトソースをレコード列へ取り込む
    ///
    /// # 引数
    ///
    /// * `reader` - アップロードされたバイトソース
    /// * `filename` - 診断・ログ用のファイル名（形式判別には使用しない）
    ///
    /// # 戻り値
    ///
    /// * `Ok(RecordSet)` - ヘッダー行を除いたレコード列
    /// * `Err(IngestError)` - エラーが発生した場合
    ///
    /// # 処理フロー
    ///
    /// 1. バイトソースを最後まで読み込む（読み取り失敗は`IoFailure`）
    /// 2. サイズ上限を検査（超過は`SecurityViolation`）
    /// 3. 内容からExcel系コンテナ／区切りテキストを判別してデコード
    ///    （判別不能・デコード不能は`MalformedDocument`）
    /// 4. 行0をヘッダーとして各行をレコードへ対応付け
    ///
    /// # エラー
    ///
    /// 失敗時に副作用はありません。呼び出し元の保持するデータは
    /// 変更されません。
    pub fn ingest<R: Read>(&self, mut reader: R, filename: &str) -> Result<RecordSet, IngestError> {
        // 1. 入力データをメモリに読み込む
        let mut buffer = Vec::new();
        let bytes_read = reader.read_to_end(&mut buffer)?;
        debug!("read {} bytes from {}", bytes_read, filename);

        // 2. サイズ上限の検査
        let security_config = SecurityConfig {
            max_input_file_size: self.config.max_input_file_size,
        };
        security_config
            .check_input_size(bytes_read as u64)
            .map_err(IngestError::SecurityViolation)?;

        // 3. 形式判別とデコード
        let rows = ingest::decode_rows(&buffer, &self.formatter)?;

        // 4. ヘッダー行との対応付け
        let records = ingest::records_from_rows(rows);
        debug!("ingested {} records from {}", records.len(), filename);

        Ok(records)
    }

    /// バイト列をレコード列へ取り込む
    ///
    /// [`Ingestor::ingest`]のバイト列版です。
    pub fn ingest_bytes(&self, bytes: &[u8], filename: &str) -> Result<RecordSet, IngestError> {
        self.ingest(bytes, filename)
    }
}
