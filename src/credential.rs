//! 資格情報ストア（KEY=value 形式）の読み込みと初期化
//!
//! ストアが無ければ標準入力で API キーを受け取って作成する。
//! --no-interactive 時は作成せず Config エラーにする。
//! 副作用: 平文の秘密情報を含むファイルを新規作成することがある。

use crate::domain::{ApiKey, BaseDir};
use crate::error::Error;
use crate::ports::outbound::{ConsoleInput, FileSystem};

/// ベースディレクトリ直下の資格情報ストア
pub const CREDENTIAL_FILE: &str = ".env";
/// ストア内で参照するキー名
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// ストアを読み、無ければ対話で初期化して API キーを返す。
///
/// # Errors
/// ロード後に値が空・欠落なら `Error::Config`（終了コード 78）。
pub fn load_or_init_api_key(
    fs: &dyn FileSystem,
    console: &dyn ConsoleInput,
    base: &BaseDir,
    non_interactive: bool,
) -> Result<ApiKey, Error> {
    let store = base.join(CREDENTIAL_FILE);

    if !fs.exists(&store) {
        if non_interactive {
            return Err(Error::config(format!(
                "Credential store '{}' not found (interactive setup disabled by --no-interactive)",
                store.display()
            )));
        }
        println!("No credential store found. Let's create one.");
        let value = console.read_line("Enter your OpenAI API key: ")?;
        fs.write(&store, &format!("{}={}\n", API_KEY_VAR, value))?;
    }

    let contents = fs.read_to_string(&store)?;
    let value = parse_env_value(&contents, API_KEY_VAR)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            Error::config(format!(
                "{} is missing or empty in '{}'",
                API_KEY_VAR,
                store.display()
            ))
        })?;
    Ok(ApiKey::new(value))
}

/// KEY=value 行の中から key の値を探す。空行と # コメント行は無視。
fn parse_env_value(contents: &str, key: &str) -> Option<String> {
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            if k.trim() == key {
                return Some(v.trim().to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_value_simple() {
        let v = parse_env_value("OPENAI_API_KEY=sk-abc\n", "OPENAI_API_KEY");
        assert_eq!(v.as_deref(), Some("sk-abc"));
    }

    #[test]
    fn test_parse_env_value_skips_comments_and_blanks() {
        let contents = "# credentials\n\nOTHER=1\nOPENAI_API_KEY = sk-abc \n";
        let v = parse_env_value(contents, "OPENAI_API_KEY");
        assert_eq!(v.as_deref(), Some("sk-abc"));
    }

    #[test]
    fn test_parse_env_value_missing_key() {
        assert_eq!(parse_env_value("OTHER=1\n", "OPENAI_API_KEY"), None);
    }

    #[test]
    fn test_parse_env_value_empty_value() {
        // 空値は Some("") で返し、空チェックは呼び出し側で行う
        let v = parse_env_value("OPENAI_API_KEY=\n", "OPENAI_API_KEY");
        assert_eq!(v.as_deref(), Some(""));
    }
}
