//! Preview Rendering Module
//!
//! 蓄積したレコード列をMarkdown形式の整列テーブルとして描画するモジュール。
//! 列幅は表示幅（全角文字は2、半角文字は1）に基づいて揃えます。

use unicode_width::UnicodeWidthStr;

use crate::types::Record;

/// 区切り行が成立する最小の列幅
const MIN_COLUMN_WIDTH: usize = 3;

/// レコード列をMarkdownテーブルとして描画
///
/// # 引数
///
/// * `records` - 描画対象のレコード列
/// * `limit` - 描画する最大レコード数
///
/// # 戻り値
///
/// Markdown形式のテーブル文字列。空のレコード列の場合は空文字列。
///
/// # 変換規則
///
/// * ヘッダー行は先頭レコードのキー順（CSV直列化と同じ方針）
/// * セル内容は表示テキストをtrimしたもの
/// * 各列はヘッダーと描画対象行の中で最も広いセルの表示幅に揃える
/// * `limit`を超えるレコードは省略し、末尾に`… N more record(s)`の
///   注記行を加える
///
/// # 使用例
///
/// ```
/// use sheetsift::{render_preview, Record, Value};
///
/// let records = vec![Record::from_iter([
///     ("name".to_string(), Value::Text("Alice".to_string())),
///     ("age".to_string(), Value::Number(30.0)),
/// ])];
///
/// let table = render_preview(&records, 10);
/// assert!(table.contains("| Alice | 30  |"));
/// ```
pub fn render_preview(records: &[Record], limit: usize) -> String {
    let first = match records.first() {
        Some(record) => record,
        None => return String::new(),
    };

    // 1. ヘッダーと描画対象行のセル内容を確定
    let headers: Vec<String> = first.keys().cloned().collect();
    let header_cells: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();

    let shown = &records[..records.len().min(limit)];
    let rows: Vec<Vec<String>> = shown
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|header| record.display_text(header).trim().to_string())
                .collect()
        })
        .collect();

    // 2. 列幅の計算（表示幅ベース、省略された行は含めない）
    let widths = calculate_column_widths(&header_cells, &rows);

    // 3. 行の描画
    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(render_row(&header_cells, &widths));
    lines.push(generate_separator(&widths));
    for row in &rows {
        lines.push(render_row(row, &widths));
    }

    // 4. 省略されたレコード数の注記
    let hidden = records.len() - shown.len();
    if hidden > 0 {
        lines.push(format!("… {} more record(s)", hidden));
    }

    lines.join("\n")
}

/// 列幅を計算（内部ヘルパー）
///
/// ヘッダーと各行のセル表示幅の最大値を列ごとに求めます。
fn calculate_column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| h.width().max(MIN_COLUMN_WIDTH))
        .collect();

    for row in rows {
        for (col_idx, cell) in row.iter().enumerate() {
            widths[col_idx] = widths[col_idx].max(cell.width());
        }
    }

    widths
}

/// 1行を描画（内部ヘルパー）
///
/// 各セルの前後にスペースを1つ置き、表示幅で左揃えにします。
fn render_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");

    for (cell, &width) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(cell);
        for _ in cell.width()..width {
            line.push(' ');
        }
        line.push_str(" |");
    }

    line
}

/// ヘッダー区切り行を生成（内部ヘルパー）
///
/// 各列幅+2（セル前後のスペース分）のハイフンを`|`で連結します。
fn generate_separator(widths: &[usize]) -> String {
    let mut parts = vec!["|".to_string()];

    for &width in widths {
        parts.push("-".repeat(width + 2));
        parts.push("|".to_string());
    }

    parts.join("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::Text(v.to_string())))
            .collect()
    }

    #[test]
    fn test_render_preview_basic() {
        let records = vec![
            record(&[("name", "Alice"), ("age", "30")]),
            record(&[("name", "Bob"), ("age", "25")]),
        ];

        let table = render_preview(&records, 10);

        assert_eq!(
            table,
            "| name  | age |\n\
             |-------|-----|\n\
             | Alice | 30  |\n\
             | Bob   | 25  |"
        );
    }

    #[test]
    fn test_render_preview_empty_set() {
        assert_eq!(render_preview(&[], 10), "");
    }

    #[test]
    fn test_render_preview_truncation_note() {
        let records = vec![
            record(&[("id", "1")]),
            record(&[("id", "2")]),
            record(&[("id", "3")]),
        ];

        let table = render_preview(&records, 2);

        assert!(table.contains("| 1"), "Got: {}", table);
        assert!(table.contains("| 2"), "Got: {}", table);
        assert!(!table.contains("| 3"), "Got: {}", table);
        assert!(table.ends_with("… 1 more record(s)"), "Got: {}", table);
    }

    #[test]
    fn test_render_preview_no_note_when_all_shown() {
        let records = vec![record(&[("id", "1")])];
        let table = render_preview(&records, 1);
        assert!(!table.contains("more record"), "Got: {}", table);
    }

    #[test]
    fn test_render_preview_zero_limit_shows_header_and_note() {
        let records = vec![record(&[("id", "1")]), record(&[("id", "2")])];
        let table = render_preview(&records, 0);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("id"));
        assert!(lines[1].starts_with("|-"));
        assert_eq!(lines[2], "… 2 more record(s)");
    }

    #[test]
    fn test_render_preview_missing_key_renders_empty_cell() {
        let records = vec![
            record(&[("a", "x"), ("b", "y")]),
            record(&[("a", "z")]),
        ];

        let table = render_preview(&records, 10);
        let lines: Vec<&str> = table.lines().collect();

        // 2件目のb列は空セルとして描画される
        assert_eq!(lines[3], "| z   |     |");
    }

    #[test]
    fn test_render_preview_wide_characters_align() {
        let records = vec![
            record(&[("名前", "アリス"), ("都市", "東京")]),
            record(&[("名前", "Bob"), ("都市", "Osaka")]),
        ];

        let table = render_preview(&records, 10);
        let lines: Vec<&str> = table.lines().collect();

        // 全行の表示幅が一致している（全角は幅2として計算）
        let first_width = lines[0].width();
        for line in &lines {
            assert_eq!(line.width(), first_width, "Got: {}", table);
        }
    }

    #[test]
    fn test_render_preview_min_column_width() {
        let records = vec![record(&[("a", "x")])];
        let table = render_preview(&records, 10);

        // 狭い列も区切り行が成立する幅（3）まで広がる
        assert_eq!(table, "| a   |\n|-----|\n| x   |");
    }

    #[test]
    fn test_render_preview_trims_cell_content() {
        let records = vec![record(&[("note", "  padded  ")])];
        let table = render_preview(&records, 10);

        assert!(table.contains("| padded |"), "Got: {}", table);
        assert!(!table.contains("  padded  "), "Got: {}", table);
    }
}
