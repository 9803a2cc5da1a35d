//! 時刻と乱数から呼び出し ID を導出する IdGenerator 実装
//!
//! 形式: sha256("{unix秒(小数部付き)}-{乱数f64}") の hex 先頭 8 文字（小文字）。
//! 外部状態を持たず、一意性は 32bit 相当のハッシュ空間の確率に委ねる。

use crate::domain::InvokeId;
use crate::ports::outbound::{Clock, IdGenerator};
use rand::Rng;
use sha2::{Digest, Sha256};
use std::sync::Arc;

const ID_LEN: usize = 8;

/// Clock + 乱数で InvokeId を生成する標準実装
pub struct EntropyIdGenerator {
    clock: Arc<dyn Clock>,
}

impl EntropyIdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl IdGenerator for EntropyIdGenerator {
    fn next_id(&self) -> InvokeId {
        let draw: f64 = rand::rng().random();
        let entropy = format!("{}-{}", self.clock.now_unix_secs(), draw);
        let mut hasher = Sha256::new();
        hasher.update(entropy.as_bytes());
        let digest = hex::encode(hasher.finalize());
        InvokeId::new(&digest[..ID_LEN])
    }
}
