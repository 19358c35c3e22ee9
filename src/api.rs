//! Public API Types
//!
//! 公開APIで使用する検索クエリと設定列挙型を定義するモジュール。

/// 検索クエリ
///
/// 検索テキストと検索対象フィールドの組。`text`が空文字列の場合は
/// すべてのレコードに一致します（恒等フィルタ）。
///
/// # 使用例
///
/// ```
/// use sheetsift::{Query, QueryField};
///
/// // 全フィールドを対象にした検索
/// let query = Query::all("alice".to_string());
/// assert_eq!(query.field, QueryField::All);
///
/// // 特定の列に限定した検索
/// let query = Query::in_column("tokyo".to_string(), "city".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// 検索テキスト（空文字列はすべてに一致）
    pub text: String,

    /// 検索対象フィールド
    pub field: QueryField,
}

impl Query {
    /// クエリを生成
    pub fn new(text: String, field: QueryField) -> Self {
        Self { text, field }
    }

    /// 全フィールドを対象とするクエリを生成
    pub fn all(text: String) -> Self {
        Self {
            text,
            field: QueryField::All,
        }
    }

    /// 特定の列のみを対象とするクエリを生成
    pub fn in_column(text: String, column: String) -> Self {
        Self {
            text,
            field: QueryField::Column(column),
        }
    }
}

/// 検索対象フィールドの指定
///
/// この2列挙子でクエリ対象の全体を表します（閉じた契約）。
/// 存在しない列名を指定した場合、そのレコードの対象値は空文字列として
/// 扱われます（エラーにはなりません）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryField {
    /// レコード内のすべての値を検索対象とする
    All,

    /// 指定した列の値のみを検索対象とする
    Column(String),
}

impl QueryField {
    /// UI層のフィールドラベルから検索対象を生成
    ///
    /// リテラル`"all"`は全フィールド検索、それ以外は列名として解釈します。
    /// `"all"`という名前の列を直接指定する方法はありません
    /// （元のUI契約から引き継いだ制約）。
    pub fn from_label(label: &str) -> Self {
        if label == "all" {
            QueryField::All
        } else {
            QueryField::Column(label.to_string())
        }
    }
}

/// 日付の出力形式
///
/// Excelの日付セルをテキスト化する際の出力形式を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateFormat {
    /// ISO 8601形式
    ///
    /// 時刻が深夜0時ちょうどの場合は日付のみ（`2025-11-20`）、
    /// それ以外は秒までの日時（`2025-11-20T09:30:00`）を出力します。
    Iso8601,

    /// カスタム形式（chrono互換フォーマット文字列）
    ///
    /// # フォーマット指定子（主要なもの）
    ///
    /// - `%Y`: 4桁の年（例: 2025）
    /// - `%m`: 2桁の月（01-12）
    /// - `%d`: 2桁の日（01-31）
    /// - `%H`: 24時間形式の時（00-23）
    /// - `%M`: 分（00-59）
    /// - `%S`: 秒（00-59）
    ///
    /// # 使用例
    ///
    /// ```
    /// use sheetsift::{DateFormat, IngestorBuilder};
    ///
    /// # fn main() -> Result<(), sheetsift::IngestError> {
    /// let ingestor = IngestorBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%Y年%m月%d日".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Custom(String),
}

/// 出力フォーマット
///
/// 蓄積したレコードを書き出す際の形式を指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExportFormat {
    /// CSV形式（デフォルト）
    ///
    /// 最初のレコードのキー順をヘッダー行とし、各行を`\n`で連結します。
    ///
    /// # 出力例
    ///
    /// ```csv
    /// name,age
    /// Alice,30
    /// ```
    Csv,

    /// JSON形式
    ///
    /// レコードごとに1オブジェクトの配列として出力します。
    ///
    /// # 出力例
    ///
    /// ```json
    /// [
    ///   {"name": "Alice", "age": 30}
    /// ]
    /// ```
    Json,
}

/// 入力バイト列から判別されたソース形式
///
/// 形式の判別は常に内容（マジックナンバー）で行い、
/// ファイル名や拡張子は使用しません。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceFormat {
    /// Excel系コンテナ
    ///
    /// ZIPマジック（.xlsx）またはOLE2マジック（レガシー.xls）を検出した場合。
    Excel,

    /// 区切りテキスト（CSV）
    ///
    /// UTF-8として読めるテキスト（先頭のBOMは許容、NULバイトは不許可）の場合。
    Csv,
}
