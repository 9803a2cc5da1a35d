//! 呼び出しユースケース（1 実行 = 1 呼び出し）
//!
//! シード読み込み → フラグメント選択 → プロンプト組み立て → ID 生成 →
//! API 呼び出し → 出力文書とメタデータレコードの書き出し、を順に行う。
//! 2 つの書き込みは独立で、間でクラッシュするとレコード無しの出力文書が残り得る
//! （既知のギャップとして許容）。

use crate::domain::{
    BaseDir, InvocationRecord, InvokeId, FRAGMENTS_DIR, FRAGMENT_EXT, NO_FRAGMENT, OUT_DIR,
    RECORDS_DIR, SEED_FILE,
};
use crate::error::Error;
use crate::ports::outbound::{
    now_iso8601, ChatCompletion, FileSystem, IdGenerator, Log, LogLevel, LogRecord,
};
use crate::prompt;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// 1 回の呼び出しの結果（パスはベースディレクトリ相対）
#[derive(Debug, Clone)]
pub struct InvokeOutcome {
    pub id: InvokeId,
    pub output_file: String,
    pub record_file: String,
}

/// 呼び出しユースケース
pub struct InvokeUseCase {
    fs: Arc<dyn FileSystem>,
    id_gen: Arc<dyn IdGenerator>,
    chat: Arc<dyn ChatCompletion>,
    logger: Arc<dyn Log>,
}

impl InvokeUseCase {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        id_gen: Arc<dyn IdGenerator>,
        chat: Arc<dyn ChatCompletion>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            fs,
            id_gen,
            chat,
            logger,
        }
    }

    /// 1 回の呼び出しを実行する
    ///
    /// # Errors
    /// * シード文書欠落 → `Error::NotFound`（ネットワーク呼び出し前に返す）
    /// * API 失敗・レスポンス形状不正 → `Error::Http`
    /// * ファイル I/O 失敗 → `Error::Io`
    pub fn run(&self, base: &BaseDir) -> Result<InvokeOutcome, Error> {
        // シード文書は必須
        let seed_path = base.join(SEED_FILE);
        if !self.fs.exists(&seed_path) {
            return Err(Error::not_found(format!(
                "Seed document not found at '{}'",
                seed_path.display()
            )));
        }
        let seed_text = self.fs.read_to_string(&seed_path)?;

        let (fragment_text, fragment_file) = self.pick_fragment(base)?;

        let user_prompt = prompt::assemble(&fragment_text, &seed_text);
        let id = self.id_gen.next_id();

        println!("Invoking {}...", self.chat.model());
        let response = self.chat.complete(prompt::SYSTEM_PERSONA, &user_prompt)?;

        // 出力文書とメタデータレコード（独立した 2 書き込み）
        self.fs.create_dir_all(&base.join(OUT_DIR))?;
        self.fs.create_dir_all(&base.join(RECORDS_DIR))?;

        let output_file = format!("{}/invocation_{}.md", OUT_DIR, id);
        let record_file = format!("{}/record_{}.json", RECORDS_DIR, id);

        let document = format!(
            "# Invocation Response\n\n**Invocation ID:** {}\n\n{}",
            id, response
        );
        self.fs.write(&base.join(&output_file), &document)?;

        let record = InvocationRecord {
            id: id.to_string(),
            timestamp_utc: now_utc_timestamp(),
            output_file: output_file.clone(),
            fragment_file,
            seed_file: SEED_FILE.to_string(),
            model: self.chat.model().to_string(),
        };
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| Error::json(format!("Failed to serialize record: {}", e)))?;
        self.fs.write(&base.join(&record_file), &json)?;

        println!("Response saved to: {}", output_file);
        println!("Record saved to: {}", record_file);

        Ok(InvokeOutcome {
            id,
            output_file,
            record_file,
        })
    }

    /// fragments/ 直下の .md から一様ランダムに 1 つ選ぶ。
    /// ディレクトリが無い・候補が無い場合は空文字と番兵値 "none" に退避する。
    fn pick_fragment(&self, base: &BaseDir) -> Result<(String, String), Error> {
        let dir = base.join(FRAGMENTS_DIR);
        let dir_ok = self
            .fs
            .metadata(&dir)
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !dir_ok {
            self.log_no_fragment();
            return Ok((String::new(), NO_FRAGMENT.to_string()));
        }

        let mut candidates: Vec<PathBuf> = Vec::new();
        for path in self.fs.read_dir(&dir)? {
            let is_md = path.extension().and_then(|e| e.to_str()) == Some(FRAGMENT_EXT);
            if is_md
                && self
                    .fs
                    .metadata(&path)
                    .map(|m| m.is_file())
                    .unwrap_or(false)
            {
                candidates.push(path);
            }
        }

        let Some(chosen) = candidates.choose(&mut rand::rng()) else {
            self.log_no_fragment();
            return Ok((String::new(), NO_FRAGMENT.to_string()));
        };

        let text = self.fs.read_to_string(chosen)?;
        let name = chosen
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| NO_FRAGMENT.to_string());

        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Debug,
            message: "fragment selected".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("input".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                m.insert("fragment".to_string(), serde_json::json!(name));
                Some(m)
            },
        });

        Ok((text, name))
    }

    fn log_no_fragment(&self) {
        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Warn,
            message: "no fragment documents found, using empty fragment".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("input".to_string()),
            fields: None,
        });
    }
}

/// レコード用の UTC タイムスタンプ（%Y-%m-%dT%H:%M:%SZ）
fn now_utc_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
