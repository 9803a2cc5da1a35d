mod adapter;
mod cli;
mod credential;
mod domain;
mod error;
mod ports;
mod prompt;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::process;
use std::sync::Arc;

use adapter::FileJsonLog;
use cli::parse_args;
use domain::LOG_FILE;
use error::Error;
use ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};
use wiring::{invoke_use_case, wire_scribe};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("scribe: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = parse_args()?;
    if config.help {
        print_help();
        return Ok(0);
    }

    let app = wire_scribe();
    let base = app.env_resolver.resolve_base_dir()?;
    let logger: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&app.fs), base.join(LOG_FILE)));

    let _ = logger.log(&LogRecord {
        ts: now_iso8601(),
        level: LogLevel::Info,
        message: "command started".to_string(),
        layer: Some("cli".to_string()),
        kind: Some("lifecycle".to_string()),
        fields: {
            let mut m = BTreeMap::new();
            m.insert(
                "base".to_string(),
                serde_json::json!(base.display().to_string()),
            );
            Some(m)
        },
    });

    let result = credential::load_or_init_api_key(
        app.fs.as_ref(),
        app.console.as_ref(),
        &base,
        config.non_interactive,
    )
    .and_then(|api_key| invoke_use_case(&app, api_key, Arc::clone(&logger)).run(&base));

    match &result {
        Ok(outcome) => {
            let _ = logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Info,
                message: "command finished".to_string(),
                layer: Some("cli".to_string()),
                kind: Some("lifecycle".to_string()),
                fields: {
                    let mut m = BTreeMap::new();
                    m.insert("id".to_string(), serde_json::json!(outcome.id.to_string()));
                    m.insert(
                        "output_file".to_string(),
                        serde_json::json!(outcome.output_file),
                    );
                    m.insert(
                        "record_file".to_string(),
                        serde_json::json!(outcome.record_file),
                    );
                    m.insert("exit_code".to_string(), serde_json::json!(0));
                    Some(m)
                },
            });
        }
        Err(e) => {
            let _ = logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: {
                    let mut m = BTreeMap::new();
                    m.insert("exit_code".to_string(), serde_json::json!(e.exit_code()));
                    Some(m)
                },
            });
        }
    }

    result.map(|_| 0)
}

fn print_usage() {
    eprintln!("Usage: scribe [options]");
}

fn print_help() {
    println!("Usage: scribe [options]");
    println!("Options:");
    println!("  -h, --help            Show this help message");
    println!("  --no-interactive      Do not prompt for credentials (a missing store is an error)");
    println!();
    println!("Environment:");
    println!("  SCRIBE_HOME    Base directory for seed/, fragments/, out/, records/ and the");
    println!("                 credential store. If unset, the current directory is used.");
    println!();
    println!("Description:");
    println!("  Read seed/seed.md and one randomly chosen fragments/*.md, send them to the");
    println!("  chat model as a single prompt, and save the response to out/ together with");
    println!("  a metadata record in records/.");
    println!();
    println!("Files:");
    println!("  .env                      Credential store (OPENAI_API_KEY=<value>)");
    println!("  seed/seed.md              Required seed document");
    println!("  fragments/*.md            Optional fragment documents (one picked at random)");
    println!("  out/invocation_<id>.md    Response document");
    println!("  records/record_<id>.json  Invocation metadata record");
}
