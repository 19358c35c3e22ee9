//! Session Module
//!
//! アップロードをまたいでレコードを蓄積し、メッセージタイムラインとして
//! 経過を記録するセッション制御を提供するモジュール。
//! レコード列は追記専用で、取り込み失敗時には一切変更されません。

use std::io::Read;

use chrono::{DateTime, Utc};
use log::debug;

use crate::api::Query;
use crate::builder::Ingestor;
use crate::error::IngestError;
use crate::export::{to_json_string, Download};
use crate::filter::filter;
use crate::preview::render_preview;
use crate::types::{Record, RecordSet};

/// メッセージの発話者
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// 利用者の操作に由来するメッセージ
    User,

    /// 処理結果を通知するシステムメッセージ
    System,
}

impl MessageRole {
    /// 発話者のラベル文字列を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::System => "system",
        }
    }
}

/// タイムライン上の1メッセージ
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// 発話者
    pub role: MessageRole,

    /// メッセージ本文
    pub body: String,

    /// 生成時刻（UTC）
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// 利用者メッセージを生成
    fn user(body: String) -> Self {
        Self {
            role: MessageRole::User,
            body,
            timestamp: Utc::now(),
        }
    }

    /// システムメッセージを生成
    fn system(body: String) -> Self {
        Self {
            role: MessageRole::System,
            body,
            timestamp: Utc::now(),
        }
    }
}

/// 取り込みセッション
///
/// 蓄積済みのレコード列とメッセージタイムラインを所有します。
/// 会話の開始時に生成し、終了時に破棄します（明示的なclose操作はありません）。
///
/// # 使用例
///
/// ```
/// use sheetsift::{IngestorBuilder, Query, Session};
///
/// # fn main() -> Result<(), sheetsift::IngestError> {
/// let ingestor = IngestorBuilder::new().build()?;
/// let mut session = Session::new();
///
/// session.upload_bytes(&ingestor, b"name,age\nAlice,30", "people.csv")?;
///
/// let hits = session.search(&Query::all("alice".to_string()));
/// assert_eq!(hits.len(), 1);
///
/// let download = session.export_csv();
/// assert_eq!(download.body, "name,age\nAlice,30");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Session {
    /// 蓄積済みのレコード列（追記専用）
    records: RecordSet,

    /// メッセージタイムライン
    messages: Vec<Message>,
}

impl Session {
    /// 空のセッションを生成
    pub fn new() -> Self {
        Self::default()
    }

    /// 蓄積済みのレコード列を取得
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// メッセージタイムラインを取得
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// バイトソースを取り込み、成功時はレコードを蓄積
    ///
    /// # 引数
    ///
    /// * `ingestor` - 取り込みに使用するインジェスター
    /// * `reader` - アップロードされたバイトソース
    /// * `filename` - 診断・メッセージ用のファイル名（形式判別には不使用）
    ///
    /// # 戻り値
    ///
    /// * `Ok(usize)` - 追加されたレコード数
    /// * `Err(IngestError)` - 取り込みに失敗した場合。蓄積済みの
    ///   レコード列は変更されない
    ///
    /// # 変換規則
    ///
    /// * 取り込みの成否にかかわらず、まず利用者メッセージ
    ///   （`Uploaded file: {filename}`）が追加される
    /// * 成功時は新しいレコードを末尾に連結し（置き換えない）、
    ///   確認のシステムメッセージを追加する
    /// * 失敗時はエラーの利用者向け文言をシステムメッセージとして
    ///   追加し、エラーを呼び出し元へ返す
    pub fn upload<R: Read>(
        &mut self,
        ingestor: &Ingestor,
        reader: R,
        filename: &str,
    ) -> Result<usize, IngestError> {
        self.messages
            .push(Message::user(format!("Uploaded file: {}", filename)));

        match ingestor.ingest(reader, filename) {
            Ok(new_records) => {
                let count = new_records.len();
                self.records.extend(new_records);
                self.messages.push(Message::system(format!(
                    "Successfully processed {} records from {}",
                    count, filename
                )));
                debug!(
                    "session accumulated {} records ({} total)",
                    count,
                    self.records.len()
                );
                Ok(count)
            }
            Err(e) => {
                self.messages.push(Message::system(e.user_message().to_string()));
                Err(e)
            }
        }
    }

    /// バイト列を取り込み、成功時はレコードを蓄積
    ///
    /// [`Session::upload`]のバイト列版です。
    pub fn upload_bytes(
        &mut self,
        ingestor: &Ingestor,
        bytes: &[u8],
        filename: &str,
    ) -> Result<usize, IngestError> {
        self.upload(ingestor, bytes, filename)
    }

    /// 蓄積済みレコードをクエリで検索（読み取り専用）
    pub fn search(&self, query: &Query) -> Vec<Record> {
        filter(&self.records, query)
    }

    /// 蓄積済みレコード全体のCSVダウンロード成果物を構築
    pub fn export_csv(&self) -> Download {
        Download::csv(&self.records)
    }

    /// 蓄積済みレコード全体をJSONテキストへ直列化
    pub fn export_json(&self) -> Result<String, IngestError> {
        to_json_string(&self.records)
    }

    /// 蓄積済みレコードのプレビューテーブルを描画
    pub fn preview(&self, limit: usize) -> String {
        render_preview(&self.records, limit)
    }
}
