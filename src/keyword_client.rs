use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use social_optimizer::analyzers::KeywordExtractor;

const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Client for the keyword-extraction sidecar (a KeyBERT-style model behind
/// HTTP). Blocking on purpose: the engine runs on blocking tasks.
pub struct KeywordClient {
    client: Client,
    endpoint: String,
}

impl KeywordClient {
    pub fn from_env() -> Option<Self> {
        let endpoint = env::var("KEYWORD_SERVICE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())?;
        let timeout_ms = env::var("KEYWORD_SERVICE_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .ok()?;
        Some(Self { client, endpoint })
    }
}

#[derive(Serialize)]
struct KeywordRequest<'a> {
    text: &'a str,
    top_n: usize,
}

#[derive(Deserialize)]
struct KeywordResponse {
    keywords: Vec<String>,
}

impl KeywordExtractor for KeywordClient {
    fn extract(&self, text: &str, top_n: usize) -> Result<Vec<String>, String> {
        let url = format!("{}/keywords", self.endpoint.trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .json(&KeywordRequest { text, top_n })
            .send()
            .map_err(|err| format!("keyword service request failed: {}", err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("keyword service error: {}", status));
        }

        let body: KeywordResponse = response
            .json()
            .map_err(|err| format!("keyword service parse failed: {}", err))?;
        Ok(body.keywords.into_iter().take(top_n).collect())
    }
}
