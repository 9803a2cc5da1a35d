//! テスト用: 固定の応答を返す ChatCompletion 実装


#[cfg(test)]
pub use stub::StubChat;
