//! エラーハンドリング
//!
//! 失敗種別ごとに variant を分け、終了コード（sysexits 準拠）に対応づける。
//! リトライはしない方針のため、どの variant も即時終了にしか使われない。

use thiserror::Error;

/// scribe 全体で使うエラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// コマンドライン引数の不正（usage 表示対象）
    #[error("{0}")]
    InvalidArgument(String),
    /// 資格情報（API キー）の欠落・空
    #[error("{0}")]
    Config(String),
    /// 必須入力（シード文書）の欠落
    #[error("{0}")]
    NotFound(String),
    /// ファイル I/O の失敗
    #[error("{0}")]
    Io(String),
    /// HTTP・API レベルの失敗（レスポンス形状不正を含む）
    #[error("{0}")]
    Http(String),
    /// JSON の生成・解析の失敗
    #[error("{0}")]
    Json(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    /// プロセス終了コード（sysexits.h 準拠）
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::NotFound(_) => 66,
            Self::Io(_) | Self::Http(_) | Self::Json(_) => 74,
            Self::Config(_) => 78,
        }
    }

    /// usage 表示が必要なエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
