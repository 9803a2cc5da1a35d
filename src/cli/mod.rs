//! CLI 層（引数解析）

pub mod args;

pub use args::{parse_args, Config};
