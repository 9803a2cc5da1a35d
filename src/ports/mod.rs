//! ポート定義（Outbound のみ）

pub mod outbound;
