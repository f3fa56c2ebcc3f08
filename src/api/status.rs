use super::client::{ApiClient, ApiError};
use crate::models::StatusSnapshot;
use async_trait::async_trait;

pub const STATUS_PATH: &str = "/get_status";

/// Anything the dashboard can poll for a status snapshot
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self) -> Result<StatusSnapshot, ApiError>;
}

impl ApiClient {
    /// Get the current EMS status
    pub async fn get_status(&self) -> Result<StatusSnapshot, ApiError> {
        self.get(STATUS_PATH).await
    }
}

#[async_trait]
impl StatusSource for ApiClient {
    async fn fetch_status(&self) -> Result<StatusSnapshot, ApiError> {
        self.get_status().await
    }
}
