//! アダプター（Outbound ポートの標準実装）
//!
//! usecase はポートの trait 経由でのみ外界に触れる。
//! 実装は標準実装（Std* 等）やテスト用のスタブを注入する。

pub mod entropy_id;
pub mod file_json_log;
pub mod openai_chat;
pub mod std_clock;
pub mod std_console;
pub mod std_env_resolver;
pub mod std_fs;
pub mod stub_chat;

pub use entropy_id::EntropyIdGenerator;
pub use file_json_log::{FileJsonLog, NoopLog};
pub use openai_chat::OpenAiChat;
pub use std_clock::StdClock;
pub use std_console::StdConsole;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;

#[cfg(test)]
pub use std_console::StubConsole;
#[cfg(test)]
pub use stub_chat::StubChat;
