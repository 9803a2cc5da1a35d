//! ドメイン型（Newtype）とディレクトリレイアウト
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

use serde::Serialize;
use std::path::{Path, PathBuf};

/// ベースディレクトリ直下のシード文書パス
pub const SEED_FILE: &str = "seed/seed.md";
/// フラグメント置き場（直下の .md のみ対象）
pub const FRAGMENTS_DIR: &str = "fragments";
/// フラグメントの対象拡張子
pub const FRAGMENT_EXT: &str = "md";
/// 出力文書の置き場
pub const OUT_DIR: &str = "out";
/// メタデータレコードの置き場
pub const RECORDS_DIR: &str = "records";
/// フラグメントが 1 つも無かったときの番兵値
pub const NO_FRAGMENT: &str = "none";
/// 実行ログ（JSONL 追記）
pub const LOG_FILE: &str = "scribe.log.jsonl";

/// ベースディレクトリのパス
///
/// シード・フラグメント・出力・レコード・資格情報ストアすべての基点。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDir(PathBuf);

impl BaseDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl std::ops::Deref for BaseDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for BaseDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for BaseDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

/// 呼び出し ID（8 文字小文字 hex）
///
/// 出力文書とメタデータレコードを結びつける相関キー。一意性は保証しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeId(String);

impl InvokeId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for InvokeId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for InvokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for InvokeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// API キー
///
/// 平文の秘密情報のため Display は実装しない。値の取り出しは as_str() 経由のみ。
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// 1 回の呼び出しを記録するメタデータレコード
///
/// records/record_<id>.json に整形 JSON で 1 度だけ書かれ、以後変更されない。
#[derive(Debug, Clone, Serialize)]
pub struct InvocationRecord {
    /// 呼び出し ID（出力文書側と一致する）
    pub id: String,
    /// UTC タイムスタンプ（%Y-%m-%dT%H:%M:%SZ）
    pub timestamp_utc: String,
    /// 出力文書のパス（ベースディレクトリ相対）
    pub output_file: String,
    /// 選ばれたフラグメントのファイル名（無ければ "none"）
    pub fragment_file: String,
    /// シード文書のパス（ベースディレクトリ相対）
    pub seed_file: String,
    /// 使用したモデル名
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_id_display() {
        let id = InvokeId::new("a1b2c3d4");
        assert_eq!(id.to_string(), "a1b2c3d4");
        assert_eq!(&*id, "a1b2c3d4");
    }

    #[test]
    fn test_api_key_debug_redacted() {
        let key = ApiKey::new("sk-secret");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.as_str(), "sk-secret");
    }

    #[test]
    fn test_record_serialize_fields() {
        let rec = InvocationRecord {
            id: "deadbeef".to_string(),
            timestamp_utc: "2026-08-07T12:00:00Z".to_string(),
            output_file: "out/invocation_deadbeef.md".to_string(),
            fragment_file: "none".to_string(),
            seed_file: SEED_FILE.to_string(),
            model: "gpt-4o".to_string(),
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"id\":\"deadbeef\""));
        assert!(json.contains("\"fragment_file\":\"none\""));
        assert!(json.contains("\"seed_file\":\"seed/seed.md\""));
        assert!(json.contains("\"model\":\"gpt-4o\""));
    }
}
