use crate::config::Config;
use crate::error::{Result, WatchError};
use crate::notify::traits::Notifier;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

const ULTRAMSG_API_BASE: &str = "https://api.ultramsg.com";
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    token: &'a str,
    to: &'a str,
    body: &'a str,
}

/// WhatsApp delivery through an UltraMsg instance
pub struct UltraMsgNotifier {
    client: Client,
    endpoint: String,
    token: String,
    to: String,
}

impl UltraMsgNotifier {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, ULTRAMSG_API_BASE)
    }

    /// Notifier against an explicit API base instead of the UltraMsg cloud
    pub fn with_base_url(config: &Config, base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(SEND_TIMEOUT).build()?;

        Ok(Self {
            client,
            endpoint: chat_endpoint(base_url, &config.ultramsg_instance),
            token: config.ultramsg_token.clone(),
            to: config.whatsapp_to.clone(),
        })
    }
}

fn chat_endpoint(base_url: &str, instance: &str) -> String {
    format!("{}/{}/messages/chat", base_url.trim_end_matches('/'), instance)
}

#[async_trait]
impl Notifier for UltraMsgNotifier {
    async fn send(&self, message: &str) -> Result<()> {
        let form = ChatMessage {
            token: &self.token,
            to: &self.to,
            body: message,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .map_err(|e| WatchError::Delivery(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(WatchError::Delivery(format!("HTTP {}: {}", status, text)));
        }

        debug!("UltraMsg accepted message ({} bytes)", message.len());
        Ok(())
    }
}
