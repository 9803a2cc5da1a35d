//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::BaseDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
///
/// $SCRIBE_HOME が非空ならそれを、無ければカレントディレクトリをベースにする。
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_base_dir(&self) -> Result<BaseDir, Error> {
        if let Ok(home) = env::var("SCRIBE_HOME") {
            if !home.is_empty() {
                return Ok(BaseDir::new(PathBuf::from(home)));
            }
        }
        env::current_dir()
            .map(BaseDir::new)
            .map_err(|e| Error::io_msg(format!("Failed to resolve current directory: {}", e)))
    }
}
