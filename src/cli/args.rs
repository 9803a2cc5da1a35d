//! コマンドライン引数の解析（clap ビルダー API）

use crate::error::Error;
use clap::builder::ArgAction;

/// 解析済みのコマンドライン設定
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub help: bool,
    /// --no-interactive: 資格情報ストアが無いとき対話せずエラーにする
    pub non_interactive: bool,
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("scribe")
        .about("Assemble a prompt from local documents, invoke the chat API once, and persist the response")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-interactive")
                .long("no-interactive")
                .help("Do not prompt for credentials (CI-friendly: a missing store is an error)")
                .action(ArgAction::SetTrue),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        non_interactive: matches.get_flag("no-interactive"),
    }
}

/// コマンドラインを解析する。不明なフラグは usage エラー（終了コード 64）。
pub fn parse_args() -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}
