//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// 取り込みパイプライン全体で使用するエラー型
///
/// このエラー型は、ファイルバイト列の読み込みとスプレッドシートの
/// デコード中に発生するすべてのエラーを統一的に扱うために使用されます。
/// フィルタとシリアライザは全域関数であり、エラーを返しません。
///
/// # エラーの種類
///
/// - `MalformedDocument`: 内容がスプレッドシートとしてデコードできない
/// - `IoFailure`: バイト列の読み込みが完了しなかった（内容のエラーとは区別）
/// - `SecurityViolation`: 入力サイズが設定上限を超えた
/// - `Config`: ビルダー設定の検証に失敗した（取り込み時には発生しない）
///
/// # 使用例
///
/// ```rust,no_run
/// use sheetsift::IngestError;
/// use std::fs::File;
///
/// fn open_upload(path: &str) -> Result<File, IngestError> {
///     let file = File::open(path)?;  // IoFailureが自動的に変換される
///     Ok(file)
/// }
/// ```
#[derive(Error, Debug)]
pub enum IngestError {
    /// 内容がスプレッドシートとしてデコードできなかったエラー
    ///
    /// Excel系コンテナの解析失敗、CSVの解析失敗、または既知のどの形式の
    /// マジックナンバーにも一致しないバイナリ内容が原因となります。
    /// 付随する文字列は診断用の詳細であり、ユーザー向け文言は
    /// [`IngestError::user_message`]が返します。
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// バイト列の読み込みが完了しなかったエラー
    ///
    /// 内容のエラーとは区別される一時的な読み込み失敗です。
    /// 部分的な取り込みは発生しません。
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO failure: {0}")]
    IoFailure(#[from] std::io::Error),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力バイト列が設定された上限サイズを超えた場合に発生します。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use sheetsift::IngestError;
    ///
    /// let error = IngestError::SecurityViolation(
    ///     "Input file size exceeds maximum: 2000000000 bytes".to_string()
    /// );
    /// ```
    #[error("Security violation: {0}")]
    SecurityViolation(String),

    /// 設定の検証に失敗したエラー
    ///
    /// `IngestorBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。例えば、カスタム日付形式が不正な場合や、
    /// 上限サイズにゼロが指定された場合などです。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use sheetsift::{DateFormat, IngestError, IngestorBuilder};
    ///
    /// let result = IngestorBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%Q".to_string()))  // 無効な指定子
    ///     .build();
    ///
    /// match result {
    ///     Err(IngestError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),
}

impl IngestError {
    /// ユーザー向けの固定文言を返す
    ///
    /// セッションがメッセージタイムラインに表示する文言です。
    /// `MalformedDocument`と`IoFailure`は明確に異なる文言を持ちます。
    pub fn user_message(&self) -> &'static str {
        match self {
            IngestError::MalformedDocument(_) => {
                "Error parsing file. Please ensure it's a valid Excel or CSV file."
            }
            IngestError::IoFailure(_) => "Error reading file.",
            IngestError::SecurityViolation(_) => "File is too large to process.",
            IngestError::Config(_) => "Invalid configuration.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // IoFailureのテスト
    #[test]
    fn test_io_failure_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: IngestError = io_err.into();

        match error {
            IngestError::IoFailure(e) => {
                assert_eq!(e.kind(), io::ErrorKind::NotFound);
                assert_eq!(e.to_string(), "File not found");
            }
            _ => panic!("Expected IoFailure error"),
        }
    }

    #[test]
    fn test_io_failure_display() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let error: IngestError = io_err.into();

        let error_msg = error.to_string();
        assert!(error_msg.contains("IO failure"));
        assert!(error_msg.contains("Permission denied"));
    }

    // MalformedDocumentのテスト
    #[test]
    fn test_malformed_document_display() {
        let error = IngestError::MalformedDocument("unrecognized binary content".to_string());
        let error_msg = error.to_string();

        assert!(error_msg.contains("Malformed document"));
        assert!(error_msg.contains("unrecognized binary content"));
    }

    // Configのテスト
    #[test]
    fn test_config_error_display() {
        let error = IngestError::Config("Invalid date format: '%Q'".to_string());
        let error_msg = error.to_string();

        assert!(error_msg.contains("Configuration error"));
        assert!(error_msg.contains("Invalid date format: '%Q'"));
    }

    // SecurityViolationのテスト
    #[test]
    fn test_security_violation_display() {
        let error = IngestError::SecurityViolation("Input file size exceeds maximum".to_string());
        let error_msg = error.to_string();

        assert!(error_msg.contains("Security violation"));
        assert!(error_msg.contains("exceeds maximum"));
    }

    // エラー変換のテスト（?演算子の動作確認）
    #[test]
    fn test_error_conversion_with_question_mark() {
        fn io_operation() -> Result<(), IngestError> {
            let _file = std::fs::File::open("nonexistent_upload.xlsx")?;
            Ok(())
        }

        let result = io_operation();
        assert!(result.is_err());

        match result {
            Err(IngestError::IoFailure(_)) => {}
            _ => panic!("Expected IoFailure error from ? operator"),
        }
    }

    // ユーザー向け文言のテスト
    #[test]
    fn test_user_messages_are_distinct() {
        let malformed = IngestError::MalformedDocument("detail".to_string());
        let io_failure: IngestError = io::Error::other("detail").into();

        assert_eq!(
            malformed.user_message(),
            "Error parsing file. Please ensure it's a valid Excel or CSV file."
        );
        assert_eq!(io_failure.user_message(), "Error reading file.");
        assert_ne!(malformed.user_message(), io_failure.user_message());
    }

    #[test]
    fn test_all_error_formats() {
        // IoFailure
        let io_err: IngestError = io::Error::other("test io").into();
        assert!(io_err.to_string().starts_with("IO failure"));

        // MalformedDocument
        let malformed_err = IngestError::MalformedDocument("test parse".to_string());
        assert!(malformed_err.to_string().starts_with("Malformed document"));

        // Config
        let config_err = IngestError::Config("test config".to_string());
        assert!(config_err.to_string().starts_with("Configuration error"));

        // SecurityViolation
        let security_err = IngestError::SecurityViolation("test security".to_string());
        assert!(security_err.to_string().starts_with("Security violation"));
    }
}
