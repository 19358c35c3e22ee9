//! Security Module
//!
//! 入力サイズに関する保護を実装するモジュール。
//! 取り込みはファイル全体をメモリに読み込むため、上限を超える入力を
//! デコード前に拒否します。

/// セキュリティ設定
///
/// ファイル処理時のセキュリティ制限を定義します。
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 2GB (2_147_483_648 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 2_147_483_648, // 2GB
        }
    }
}

impl SecurityConfig {
    /// 読み込んだバイト数が上限以内かを検証
    ///
    /// # 引数
    ///
    /// * `bytes_read` - 読み込み済みのバイト数
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 上限以内の場合
    /// * `Err(String)` - 上限を超えた場合（診断メッセージ付き）
    pub fn check_input_size(&self, bytes_read: u64) -> Result<(), String> {
        if bytes_read > self.max_input_file_size {
            return Err(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes_read, self.max_input_file_size
            ));
        }
        Ok(())
    }
}
