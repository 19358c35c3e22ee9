//! Types Module
//!
//! クレート全体で使用するレコードデータ型を定義するモジュール。
//! 取り込まれたスプレッドシートの1行は、列名→値の順序付きマッピング
//! （[`Record`]）として表現されます。

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// セルの値を表す閉じた列挙型
///
/// フィルタ・CSV出力・プレビューは[`Value::to_display_text`]による
/// 単一の文字列化規則を共有します。JSON出力のみ型を保持した直列化
/// （`Serialize`実装）を使用します。
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 文字列
    Text(String),

    /// 数値（f64）
    Number(f64),

    /// 論理値
    Bool(bool),

    /// 空セル（欠損セルも明示的にこの値になる）
    Empty,
}

impl Value {
    /// 値が空かどうかを判定
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// 値を表示用テキストに変換する（正準変換）
    ///
    /// この変換はクレート内で唯一の文字列化規則であり、
    /// 検索・CSV出力・プレビューのすべてがこの結果を使用します。
    ///
    /// # 変換規則
    ///
    /// * `Text(s)` → `s` そのまま
    /// * `Number(n)` → f64の最短表示（`1.0` → `"1"`、`2.5` → `"2.5"`）
    /// * `Bool(b)` → `"true"` / `"false"`（小文字）
    /// * `Empty` → `""`
    ///
    /// # 使用例
    ///
    /// ```
    /// use sheetsift::Value;
    ///
    /// assert_eq!(Value::Number(1.0).to_display_text(), "1");
    /// assert_eq!(Value::Bool(true).to_display_text(), "true");
    /// assert_eq!(Value::Empty.to_display_text(), "");
    /// ```
    pub fn to_display_text(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Empty => String::new(),
        }
    }
}

/// 型を保持したJSON向け直列化
///
/// `Number`は整数値の場合に小数点なしで出力されます（`30.0` → `30`）。
/// `Empty`は`null`になります。
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Text(s) => serializer.serialize_str(s),
            Value::Number(n) => {
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Empty => serializer.serialize_unit(),
        }
    }
}

/// 取り込まれた1行分のレコード
///
/// 列名→値の順序付きマッピング。キーの順序はヘッダー行の並びを保持します。
/// 同名キーへの再挿入は値を上書きし、キーの位置は最初の挿入位置のまま
/// 変わりません（重複ヘッダーの扱いとして仕様化された挙動）。
///
/// # 使用例
///
/// ```
/// use sheetsift::{Record, Value};
///
/// let mut record = Record::new();
/// record.insert("name".to_string(), Value::Text("Alice".to_string()));
/// record.insert("age".to_string(), Value::Number(30.0));
///
/// assert_eq!(record.display_text("name"), "Alice");
/// assert_eq!(record.display_text("missing"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// 空のレコードを生成
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// キーに値を設定する
    ///
    /// 既存キーの場合は値のみ上書きし、挿入位置は維持されます。
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.fields.insert(key, value)
    }

    /// キーに対応する値を取得（存在しない場合は`None`）
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// キーに対応する値の表示用テキストを取得
    ///
    /// キーが存在しない場合は明示的に空文字列を返します。
    /// レコード間でキー集合が異なるセッションでも、この参照は失敗しません。
    pub fn display_text(&self, key: &str) -> String {
        self.fields
            .get(key)
            .map(Value::to_display_text)
            .unwrap_or_default()
    }

    /// キーの一覧を挿入順で返す
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    /// 値の一覧を挿入順で返す
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }

    /// （キー, 値）の組を挿入順で返す
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// フィールド数
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// フィールドが空かどうか
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

/// 挿入順を保持したJSONオブジェクトとして直列化
impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// 順序付きレコード列
///
/// 取り込み順を保持し、セッションからは追記のみ行われます。
pub type RecordSet = Vec<Record>;
