//! 対話入力 Outbound ポート
//!
//! 資格情報ストアの初期化時にのみ使う。--no-interactive 時は呼ばれない。

use crate::error::Error;

/// 標準入力から 1 行読む抽象
pub trait ConsoleInput: Send + Sync {
    /// プロンプトを表示して 1 行読み、前後の空白を除いて返す
    fn read_line(&self, prompt: &str) -> Result<String, Error>;
}
