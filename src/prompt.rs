//! プロンプト組み立て
//!
//! 固定の前書き・マーカー行・締めの指示で、フラグメント→シードの順に連結する。
//! マーカー行は出力の検証には使われず、モデルへの区切りの明示のためだけにある。

/// system ロールに入れる固定のペルソナ記述
pub const SYSTEM_PERSONA: &str = "You are a reflective writing companion. \
You receive a fixed seed document and an optional fragment, and you respond \
with a single coherent piece of writing grounded in both.";

const PREAMBLE: &str =
    "You are asked to read the materials below and compose your response.";

const CLOSING: &str =
    "Now write: reflect on the fragment and the seed above, and compose your response.";

pub const FRAGMENT_BEGIN: &str = "[Fragment Begins]";
pub const FRAGMENT_END: &str = "[Fragment Ends]";
pub const SEED_BEGIN: &str = "[Seed Begins]";
pub const SEED_END: &str = "[Seed Ends]";

/// user ロールのプロンプト全文を組み立てる（フラグメント区画がシード区画より先）
pub fn assemble(fragment_text: &str, seed_text: &str) -> String {
    format!(
        "{preamble}\n\n{fb}\n{fragment}\n{fe}\n\n{sb}\n{seed}\n{se}\n\n{closing}\n",
        preamble = PREAMBLE,
        fb = FRAGMENT_BEGIN,
        fragment = fragment_text,
        fe = FRAGMENT_END,
        sb = SEED_BEGIN,
        seed = seed_text,
        se = SEED_END,
        closing = CLOSING,
    )
}
