//! 時刻 Outbound ポート

/// 現在時刻の供給源
///
/// 呼び出し ID のエントロピーに使うため秒未満の分解能を持つ。
pub trait Clock: Send + Sync {
    /// UNIX エポックからの経過秒（小数部付き）
    fn now_unix_secs(&self) -> f64;
}
