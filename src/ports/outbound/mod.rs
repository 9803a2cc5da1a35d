//! Outbound ポート: アプリが外界（FS・時刻・標準入力・LLM・ログ）を使うための trait

pub mod chat;
pub mod clock;
pub mod console;
pub mod env_resolver;
pub mod fs;
pub mod id_generator;
pub mod log;

pub use chat::ChatCompletion;
pub use clock::Clock;
pub use console::ConsoleInput;
pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
pub use id_generator::IdGenerator;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
