use crate::error::Result;
use async_trait::async_trait;
use tracing::info;

/// Delivers a rendered message to the configured recipient
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &str) -> Result<()>;
}

/// Logs messages instead of delivering them
pub struct DryRunNotifier;

#[async_trait]
impl Notifier for DryRunNotifier {
    async fn send(&self, message: &str) -> Result<()> {
        info!("[dry run] would send:\n{}", message);
        Ok(())
    }
}
