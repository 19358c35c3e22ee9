//! Record Filtering Module
//!
//! 蓄積したレコードに対する部分文字列検索。照合はすべて表示テキスト
//! （正準変換の結果）に対して行い、元のレコードは変更しません。

use log::debug;

use crate::api::{Query, QueryField};
use crate::types::Record;

/// クエリに一致するレコードを抽出
///
/// # 引数
///
/// * `records` - 検索対象のレコード列
/// * `query` - 検索テキストと対象フィールド
///
/// # 戻り値
///
/// 一致したレコードの複製。元の相対順序を保ち、重複除去は行いません。
///
/// # 変換規則
///
/// * 検索テキストが空文字列の場合、全レコードを返します（恒等フィルタ）
/// * 照合は大文字小文字を区別しない部分一致（`to_lowercase`による
///   ケースフォールド後の`contains`）
/// * `QueryField::All`はレコード内のいずれかの値の表示テキストに一致すれば採用
/// * `QueryField::Column`は指定列の表示テキストのみを照合し、列が存在しない
///   レコードは空文字列として扱われます（非空のテキストには決して一致しない）
///
/// # 使用例
///
/// ```
/// use sheetsift::{filter, Query, Record, Value};
///
/// let records = vec![
///     Record::from_iter([("name".to_string(), Value::Text("Alice".to_string()))]),
///     Record::from_iter([("name".to_string(), Value::Text("Bob".to_string()))]),
/// ];
///
/// let hits = filter(&records, &Query::all("ali".to_string()));
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].display_text("name"), "Alice");
/// ```
pub fn filter(records: &[Record], query: &Query) -> Vec<Record> {
    // 空の検索テキストは恒等フィルタ（対象フィールドの検証より優先）
    if query.text.is_empty() {
        return records.to_vec();
    }

    let needle = query.text.to_lowercase();
    let hits: Vec<Record> = records
        .iter()
        .filter(|record| matches_query(record, &needle, &query.field))
        .cloned()
        .collect();

    debug!("filter matched {} of {} records", hits.len(), records.len());
    hits
}

/// レコードがケースフォールド済みの検索テキストに一致するか判定
fn matches_query(record: &Record, needle: &str, field: &QueryField) -> bool {
    match field {
        QueryField::All => record
            .values()
            .any(|value| value.to_display_text().to_lowercase().contains(needle)),
        QueryField::Column(name) => record
            .display_text(name)
            .to_lowercase()
            .contains(needle),
    }
}
