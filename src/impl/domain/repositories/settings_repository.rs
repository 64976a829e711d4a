use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::AppSettings;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Loads the stored settings, filling any field the stored payload lacks
    /// from `defaults`. Returns `None` if nothing is stored.
    async fn load(&self, defaults: AppSettings) -> Result<Option<AppSettings>, ServerError>;

    async fn save(&self, settings: &AppSettings) -> Result<(), ServerError>;
}
