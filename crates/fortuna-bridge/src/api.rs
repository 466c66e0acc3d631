use crate::error::{BridgeError, Result};
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// The platform's bulk endpoint accepts at most this many records per
/// request.
pub const BULK_CHUNK: usize = 1000;

/// One spin-inventory record as the platform's Data API stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpinRecord {
    pub prize_id: String,
    pub participate: String,
    pub sector: usize,
    pub used: String,
    pub prize_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl SpinRecord {
    pub fn unused(
        prize_id: impl Into<String>,
        participate: impl Into<String>,
        sector: usize,
        prize_type: impl Into<String>,
    ) -> Self {
        Self {
            prize_id: prize_id.into(),
            participate: participate.into(),
            sector,
            used: "no".to_string(),
            prize_type: prize_type.into(),
            prize_name: None,
            photo: None,
        }
    }
}

/// Blocking client for the host platform's Data API, used to seed spin
/// inventory and reconcile prize amounts.
#[derive(Debug, Clone)]
pub struct DataApiClient {
    base_url: Url,
    token: String,
    client: Client,
}

impl DataApiClient {
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.scheme() != "https" {
            return Err(BridgeError::InvalidEndpoint(
                "data api url must use https".to_string(),
            ));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder()
            .user_agent("fortuna")
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            base_url,
            token: token.into(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Creates records through the bulk endpoint, newline-delimited JSON in
    /// chunks of [`BULK_CHUNK`]. Returns the number of records created.
    pub fn create_spins(&self, records: &[SpinRecord]) -> Result<usize> {
        let url = self.endpoint("spin/bulk")?;
        let mut created = 0;
        for chunk in records.chunks(BULK_CHUNK) {
            let mut body = String::new();
            for record in chunk {
                body.push_str(&serde_json::to_string(record)?);
                body.push('\n');
            }
            self.client
                .post(url.clone())
                .bearer_auth(&self.token)
                .header("Content-Type", "text/plain")
                .body(body)
                .send()?
                .error_for_status()?;
            created += chunk.len();
            debug!(created, total = records.len(), "spin batch created");
        }
        Ok(created)
    }

    /// Patches a prize with the number of spins actually seeded for it.
    pub fn set_prize_amount(&self, prize_id: &str, amount: usize) -> Result<()> {
        let url = self.endpoint(&format!("prize/{prize_id}"))?;
        self.client
            .patch(url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "amount": amount }))
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
