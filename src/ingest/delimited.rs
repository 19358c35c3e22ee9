//! Delimited Text Reading Module
//!
//! CSVテキストの読み取りと、フィールド文字列からの値推論。
//! 引用符で囲まれたフィールド内の改行やカンマはcsvクレートが処理します。

use crate::error::IngestError;
use crate::types::Value;

/// UTF-8のバイトオーダーマーク
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// CSVテキストをセル値のグリッドとして読み取る
///
/// # 引数
///
/// * `buffer` - CSVテキストの全バイト列（先頭のBOMは無視される）
///
/// # 戻り値
///
/// * `Ok(Vec<Vec<Value>>)` - 行ごとのセル値
/// * `Err(IngestError)` - レコードのデコードに失敗した場合、または
///   読み取り中のIO障害
///
/// # 変換規則
///
/// 各フィールドは次の順で推論されます。
///
/// 1. 空文字列 → `Value::Empty`
/// 2. `true` / `false`（大文字小文字を区別しない） → `Value::Bool`
/// 3. 有限のf64として解釈できる数値形 → `Value::Number`
/// 4. それ以外 → `Value::Text`
pub(crate) fn read_rows(buffer: &[u8]) -> Result<Vec<Vec<Value>>, IngestError> {
    // 1. 先頭のBOMを除去
    let buffer = buffer.strip_prefix(&UTF8_BOM[..]).unwrap_or(buffer);

    // 2. ヘッダー行も通常の行として読むため、has_headersは無効化。
    //    行ごとのフィールド数の揺れはflexibleで許容する。
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(buffer);

    // 3. 各レコードのフィールドを値へ推論
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(map_csv_error)?;
        rows.push(record.iter().map(infer_value).collect());
    }

    Ok(rows)
}

/// フィールド文字列から閉じた値モデルの値を推論
fn infer_value(field: &str) -> Value {
    if field.is_empty() {
        return Value::Empty;
    }

    if field.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if field.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    // 数値形の判定。f64::from_strは"inf"や"NaN"も受理するため、
    // 先頭文字を数字・符号・小数点に限定したうえで有限値のみ採用する。
    let leading_numeric = field
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+' || c == '.');
    if leading_numeric {
        if let Ok(n) = field.parse::<f64>() {
            if n.is_finite() {
                return Value::Number(n);
            }
        }
    }

    Value::Text(field.to_string())
}

/// csvクレートのエラーをIngestErrorへ対応付け
fn map_csv_error(err: csv::Error) -> IngestError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => IngestError::IoFailure(e),
        _ => IngestError::MalformedDocument(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rows_basic() {
        let rows = read_rows(b"name,age\nAlice,30\nBob,25").unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], Value::Text("name".to_string()));
        assert_eq!(rows[1][1], Value::Number(30.0));
        assert_eq!(rows[2][0], Value::Text("Bob".to_string()));
    }

    #[test]
    fn test_read_rows_strips_bom() {
        let mut buffer = UTF8_BOM.to_vec();
        buffer.extend_from_slice(b"name\nAlice");

        let rows = read_rows(&buffer).unwrap();
        assert_eq!(rows[0][0], Value::Text("name".to_string()));
    }

    #[test]
    fn test_read_rows_quoted_field_with_newline_and_comma() {
        let rows = read_rows(b"note\n\"line one\nline two, with comma\"").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1][0],
            Value::Text("line one\nline two, with comma".to_string())
        );
    }

    #[test]
    fn test_read_rows_ragged_rows_allowed() {
        let rows = read_rows(b"a,b,c\n1\n1,2,3,4").unwrap();

        assert_eq!(rows[1].len(), 1);
        assert_eq!(rows[2].len(), 4);
    }

    #[test]
    fn test_read_rows_empty_input() {
        assert!(read_rows(b"").unwrap().is_empty());
    }

    #[test]
    fn test_read_rows_interior_quote_is_literal() {
        // フィールド先頭以外の引用符はリテラルとして扱われる（寛容な解析）
        let rows = read_rows(b"col\nab\"cd").unwrap();
        assert_eq!(rows[1][0], Value::Text("ab\"cd".to_string()));
    }

    #[test]
    fn test_infer_value_empty() {
        assert_eq!(infer_value(""), Value::Empty);
    }

    #[test]
    fn test_infer_value_bool_case_insensitive() {
        assert_eq!(infer_value("true"), Value::Bool(true));
        assert_eq!(infer_value("TRUE"), Value::Bool(true));
        assert_eq!(infer_value("False"), Value::Bool(false));
    }

    #[test]
    fn test_infer_value_numbers() {
        assert_eq!(infer_value("42"), Value::Number(42.0));
        assert_eq!(infer_value("-3.5"), Value::Number(-3.5));
        assert_eq!(infer_value("+7"), Value::Number(7.0));
        assert_eq!(infer_value(".5"), Value::Number(0.5));
        assert_eq!(infer_value("1e3"), Value::Number(1000.0));
    }

    #[test]
    fn test_infer_value_text_fallback() {
        assert_eq!(infer_value("hello"), Value::Text("hello".to_string()));
        // 数値に隣接するが非数値形のもの
        assert_eq!(infer_value("42abc"), Value::Text("42abc".to_string()));
        // 空白のみのフィールドもテキスト
        assert_eq!(infer_value(" "), Value::Text(" ".to_string()));
    }

    #[test]
    fn test_infer_value_rejects_non_finite_spellings() {
        // "inf"や"NaN"は数値として扱わない
        assert_eq!(infer_value("inf"), Value::Text("inf".to_string()));
        assert_eq!(infer_value("NaN"), Value::Text("NaN".to_string()));
        assert_eq!(infer_value("-inf"), Value::Text("-inf".to_string()));
        assert_eq!(
            infer_value("infinity"),
            Value::Text("infinity".to_string())
        );
    }
}
