//! Wasm Boundary Module
//!
//! ブラウザホスト向けのセッション境界。レコードやメッセージは
//! JSON文字列として受け渡し、エラーは利用者向け文言の例外として
//! 送出します。`wasm`フィーチャー有効時のwasm32ターゲットでのみ
//! コンパイルされます。

use wasm_bindgen::prelude::*;

use serde_json::json;

use crate::api::{Query, QueryField};
use crate::builder::{Ingestor, IngestorBuilder};
use crate::export::to_json_string;
use crate::session::Session;

/// ブラウザホストへ公開するセッション
#[wasm_bindgen]
pub struct WasmSession {
    ingestor: Ingestor,
    session: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// デフォルト設定のセッションを生成
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmSession, JsError> {
        let ingestor = IngestorBuilder::new()
            .build()
            .map_err(|e| JsError::new(&e.to_string()))?;

        Ok(Self {
            ingestor,
            session: Session::new(),
        })
    }

    /// バイト列を取り込み、追加されたレコード数を返す
    ///
    /// 失敗時は利用者向け文言の例外を送出します。蓄積済みの
    /// レコードは変更されません。
    pub fn upload_bytes(&mut self, bytes: &[u8], filename: &str) -> Result<usize, JsError> {
        self.session
            .upload_bytes(&self.ingestor, bytes, filename)
            .map_err(|e| JsError::new(e.user_message()))
    }

    /// 蓄積済みレコードを検索し、一致したレコードをJSON文字列で返す
    ///
    /// `field`にはリテラル`"all"`（全フィールド検索）または列名を
    /// 指定します。
    pub fn search(&self, text: &str, field: &str) -> Result<String, JsError> {
        let query = Query::new(text.to_string(), QueryField::from_label(field));
        let hits = self.session.search(&query);
        to_json_string(&hits).map_err(|e| JsError::new(&e.to_string()))
    }

    /// 蓄積済みレコード全体のCSVテキストを返す
    pub fn export_csv(&self) -> String {
        self.session.export_csv().body
    }

    /// 蓄積済みレコード全体のJSONテキストを返す
    pub fn export_json(&self) -> Result<String, JsError> {
        self.session
            .export_json()
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// 蓄積済みレコードのプレビューテーブルを返す
    pub fn preview(&self, limit: usize) -> String {
        self.session.preview(limit)
    }

    /// 蓄積済みレコードの総数を返す
    pub fn record_count(&self) -> usize {
        self.session.records().len()
    }

    /// メッセージタイムラインをJSON文字列で返す
    ///
    /// 各要素は`{"role", "body", "timestamp"}`のオブジェクトで、
    /// `timestamp`はRFC 3339形式です。
    pub fn messages_json(&self) -> String {
        let messages: Vec<serde_json::Value> = self
            .session
            .messages()
            .iter()
            .map(|m| {
                json!({
                    "role": m.role.as_str(),
                    "body": m.body,
                    "timestamp": m.timestamp.to_rfc3339(),
                })
            })
            .collect();

        json!(messages).to_string()
    }
}
