//! 統合テスト（実 FS + Stub アダプタ）

mod credential_tests;
