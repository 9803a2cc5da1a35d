//! 資格情報ストアの統合テスト

use crate::adapter::{StdFileSystem, StubConsole};
use crate::credential::{load_or_init_api_key, API_KEY_VAR, CREDENTIAL_FILE};
use crate::domain::BaseDir;
use crate::error::Error;

#[test]
fn test_existing_store_does_not_prompt() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CREDENTIAL_FILE),
        format!("{}=sk-test\n", API_KEY_VAR),
    )
    .unwrap();

    let console = StubConsole::new("should-not-be-used");
    let key = load_or_init_api_key(
        &StdFileSystem,
        &console,
        &BaseDir::new(dir.path()),
        false,
    )
    .unwrap();

    assert_eq!(key.as_str(), "sk-test");
    assert_eq!(console.call_count(), 0);
}

#[test]
fn test_missing_store_prompts_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let console = StubConsole::new("sk-new");

    let key = load_or_init_api_key(
        &StdFileSystem,
        &console,
        &BaseDir::new(dir.path()),
        false,
    )
    .unwrap();

    assert_eq!(key.as_str(), "sk-new");
    assert_eq!(console.call_count(), 1);
    // ストアが KEY=value 形式で書かれていること
    let contents = std::fs::read_to_string(dir.path().join(CREDENTIAL_FILE)).unwrap();
    assert_eq!(contents, format!("{}=sk-new\n", API_KEY_VAR));
}

#[test]
fn test_missing_store_non_interactive_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let console = StubConsole::new("should-not-be-used");

    let err = load_or_init_api_key(
        &StdFileSystem,
        &console,
        &BaseDir::new(dir.path()),
        true,
    )
    .unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert_eq!(err.exit_code(), 78);
    assert_eq!(console.call_count(), 0);
    assert!(!dir.path().join(CREDENTIAL_FILE).exists());
}

#[test]
fn test_empty_value_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CREDENTIAL_FILE),
        format!("{}=\n", API_KEY_VAR),
    )
    .unwrap();

    let console = StubConsole::new("should-not-be-used");
    let err = load_or_init_api_key(
        &StdFileSystem,
        &console,
        &BaseDir::new(dir.path()),
        false,
    )
    .unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert_eq!(console.call_count(), 0);
}

#[test]
fn test_store_with_comments_and_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CREDENTIAL_FILE),
        format!("# local credentials\nOTHER=1\n{}=sk-abc\n", API_KEY_VAR),
    )
    .unwrap();

    let console = StubConsole::new("should-not-be-used");
    let key = load_or_init_api_key(
        &StdFileSystem,
        &console,
        &BaseDir::new(dir.path()),
        false,
    )
    .unwrap();

    assert_eq!(key.as_str(), "sk-abc");
}
