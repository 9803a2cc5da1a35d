//! OpenAI Chat Completions (/chat/completions) アダプター
//!
//! system + user の 2 メッセージで同期リクエストを 1 回行う。
//! temperature 等の追加パラメータは付けない（API デフォルトに従う）。

use crate::domain::ApiKey;
use crate::error::Error;
use crate::ports::outbound::ChatCompletion;
use serde_json::{json, Value};

const BASE_URL: &str = "https://api.openai.com/v1";
const MODEL: &str = "gpt-4o";

/// OpenAI チャット補完アダプター
pub struct OpenAiChat {
    api_key: ApiKey,
    model: String,
    base_url: String,
}

impl OpenAiChat {
    /// 新しいアダプターを作成（モデル・エンドポイントは固定）
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            model: MODEL.to_string(),
            base_url: BASE_URL.to_string(),
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn make_request_payload(&self, system_instruction: &str, user_prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_instruction },
                { "role": "user", "content": user_prompt }
            ]
        })
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .post(self.url())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key.as_str()))
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // エラーレスポンスを解析してメッセージを抽出
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::http(format!("Chat completions error: {}", error_msg)));
        }

        Ok(response_text)
    }

    /// 最初の choice のテキストを取り出す。形状が想定と違う場合は Http エラー。
    fn parse_response_text(&self, response_json: &str) -> Result<String, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                Error::http(
                    "Malformed chat completions response: missing choices[0].message.content"
                        .to_string(),
                )
            })
    }
}

impl ChatCompletion for OpenAiChat {
    fn model(&self) -> &str {
        &self.model
    }

    fn complete(&self, system_instruction: &str, user_prompt: &str) -> Result<String, Error> {
        let payload = self.make_request_payload(system_instruction, user_prompt);
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;
        let response_json = self.make_http_request(&request_json)?;
        self.parse_response_text(&response_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat() -> OpenAiChat {
        OpenAiChat::new(ApiKey::new("test-key"))
    }

    #[test]
    fn test_make_request_payload_two_messages() {
        let payload = chat().make_request_payload("persona", "prompt body");
        assert_eq!(payload["model"], "gpt-4o");
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "persona");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "prompt body");
        // 追加パラメータは付けない
        assert!(payload.get("temperature").is_none());
        assert!(payload.get("max_tokens").is_none());
    }

    #[test]
    fn test_parse_response_text_ok() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"hello there"}}]}"#;
        let text = chat().parse_response_text(json).unwrap();
        assert_eq!(text, "hello there");
    }

    #[test]
    fn test_parse_response_text_api_error_object() {
        let json = r#"{"error":{"message":"Incorrect API key provided"}}"#;
        let err = chat().parse_response_text(json).unwrap_err();
        assert_eq!(err, Error::http("API error: Incorrect API key provided"));
    }

    #[test]
    fn test_parse_response_text_missing_choices_is_http_error() {
        let err = chat().parse_response_text(r#"{"object":"chat.completion"}"#).unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert!(err.to_string().contains("Malformed"));
    }

    #[test]
    fn test_parse_response_text_non_string_content_is_http_error() {
        let json = r#"{"choices":[{"message":{"content":null}}]}"#;
        let err = chat().parse_response_text(json).unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[test]
    fn test_parse_response_text_invalid_json_is_json_error() {
        let err = chat().parse_response_text("not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_url() {
        assert_eq!(chat().url(), "https://api.openai.com/v1/chat/completions");
    }
}
