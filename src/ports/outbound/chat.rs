//! チャット補完 Outbound ポート
//!
//! scribe は 1 実行につき 1 リクエストしか行わないため、
//! リクエスト生成・送信・テキスト抽出を 1 メソッドにまとめている。

use crate::error::Error;

/// チャット補完 API の抽象
///
/// 実装は `adapter::OpenAiChat`（実 API）とテスト用の `adapter::StubChat`。
pub trait ChatCompletion: Send + Sync {
    /// リクエストに使うモデル名（メタデータレコードにもこの値を記録する）
    fn model(&self) -> &str;

    /// system + user の 2 メッセージで同期リクエストを 1 回行い、
    /// 最初の choice のテキストを返す。
    ///
    /// # Errors
    /// トランスポート失敗・API エラー・レスポンス形状不正はすべて `Error::Http`。
    fn complete(&self, system_instruction: &str, user_prompt: &str) -> Result<String, Error>;
}
