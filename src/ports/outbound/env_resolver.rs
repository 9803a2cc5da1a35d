//! 環境変数解決 Outbound ポート

use crate::domain::BaseDir;
use crate::error::Error;

/// ベースディレクトリの解決
///
/// 実装は `adapter::StdEnvResolver`（$SCRIBE_HOME、無ければカレントディレクトリ）。
pub trait EnvResolver: Send + Sync {
    fn resolve_base_dir(&self) -> Result<BaseDir, Error>;
}
