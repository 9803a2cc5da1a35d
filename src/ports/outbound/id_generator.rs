//! 呼び出し ID 生成 Outbound ポート

use crate::domain::InvokeId;

/// 呼び出し ID の生成
///
/// 一意性の保証は持たない。衝突はハッシュ空間の確率に委ねる。
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> InvokeId;
}
