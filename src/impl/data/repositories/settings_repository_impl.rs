use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::key_value_store_datasource::KeyValueStoreDatasource,
        models::app_settings_model::AppSettingsModel,
    },
    domain::repositories::settings_repository::SettingsRepository,
    entities::AppSettings,
    errors::{InvalidSettingsJson, SettingsSerializationFailed},
};

pub(crate) struct SettingsRepositoryImpl<DS: KeyValueStoreDatasource> {
    datasource: DS,
    key: String,
}

impl<DS: KeyValueStoreDatasource> SettingsRepositoryImpl<DS> {
    pub(crate) fn new(datasource: DS, key: impl Into<String>) -> Self {
        Self {
            datasource,
            key: key.into(),
        }
    }
}

#[async_trait]
impl<DS: KeyValueStoreDatasource> SettingsRepository for SettingsRepositoryImpl<DS> {
    async fn load(&self, defaults: AppSettings) -> Result<Option<AppSettings>, ServerError> {
        let Some(raw) = self.datasource.get(&self.key).await? else {
            return Ok(None);
        };
        let model: AppSettingsModel =
            serde_json::from_str(&raw).map_err(|e| InvalidSettingsJson::with_debug(&e))?;
        Ok(Some(model.resolve(defaults)))
    }

    async fn save(&self, settings: &AppSettings) -> Result<(), ServerError> {
        let raw = serde_json::to_string(&AppSettingsModel::from(settings))
            .map_err(|e| SettingsSerializationFailed::with_debug(&e))?;
        self.datasource.set(&self.key, &raw).await
    }
}
