use crate::error::{BridgeError, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

const BOT_API_ROOT: &str = "https://api.telegram.org";

/// Blocking client for the chat platform's bot API, used to nudge users
/// with unused spins back into the game.
#[derive(Debug)]
pub struct BotApiClient {
    send_message_url: Url,
    client: Client,
}

impl BotApiClient {
    pub fn new(token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(BridgeError::InvalidEndpoint(
                "bot token is empty".to_string(),
            ));
        }
        let send_message_url = Url::parse(&format!("{BOT_API_ROOT}/bot{token}/sendMessage"))?;
        let client = Client::builder()
            .user_agent("fortuna")
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            send_message_url,
            client,
        })
    }

    /// Sends one reminder message with an inline button linking back into
    /// the game.
    pub fn send_game_reminder(
        &self,
        chat_id: i64,
        text: &str,
        button_text: &str,
        game_url: &str,
    ) -> Result<()> {
        self.client
            .post(self.send_message_url.clone())
            .json(&reminder_payload(chat_id, text, button_text, game_url))
            .send()?
            .error_for_status()?;
        debug!(chat_id, "reminder sent");
        Ok(())
    }
}

fn reminder_payload(
    chat_id: i64,
    text: &str,
    button_text: &str,
    game_url: &str,
) -> serde_json::Value {
    serde_json::json!({
        "chat_id": chat_id,
        "text": text,
        "reply_markup": {
            "inline_keyboard": [[{ "text": button_text, "url": game_url }]]
        }
    })
}
