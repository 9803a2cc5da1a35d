//! 標準入力からの対話入力実装

use crate::error::Error;
use crate::ports::outbound::ConsoleInput;
use std::io::{self, BufRead, Write};

/// 標準入出力を使う ConsoleInput 実装
#[derive(Debug, Clone, Default)]
pub struct StdConsole;

impl ConsoleInput for StdConsole {
    fn read_line(&self, prompt: &str) -> Result<String, Error> {
        print!("{}", prompt);
        io::stdout()
            .flush()
            .map_err(|e| Error::io_msg(format!("Failed to flush stdout: {}", e)))?;
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read from stdin: {}", e)))?;
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod stub {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// テスト用: 固定の入力を返し、呼ばれた回数を数える ConsoleInput
    pub struct StubConsole {
        reply: String,
        calls: AtomicUsize,
    }

    impl StubConsole {
        pub fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ConsoleInput for StubConsole {
        fn read_line(&self, _prompt: &str) -> Result<String, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }
}

#[cfg(test)]
pub use stub::StubConsole;
