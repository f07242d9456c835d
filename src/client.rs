use async_trait::async_trait;

use crate::error::Error;
use crate::types::Payload;

/// Performs a GET against the athletes API. Only transport failures are
/// errors; any response, whatever its status, comes back as a [`Payload`].
#[async_trait]
pub trait Client: Send + Sync {
    async fn get(&self, path: &str) -> Result<Payload, Error>;
}
