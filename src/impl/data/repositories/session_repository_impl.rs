use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    config::StorageKeys, data::datasources::key_value_store_datasource::KeyValueStoreDatasource,
    domain::repositories::session_repository::SessionRepository,
};

pub(crate) struct SessionRepositoryImpl<DS: KeyValueStoreDatasource> {
    datasource: DS,
    keys: StorageKeys,
}

impl<DS: KeyValueStoreDatasource> SessionRepositoryImpl<DS> {
    pub(crate) fn new(datasource: DS, keys: StorageKeys) -> Self {
        Self { datasource, keys }
    }
}

#[async_trait]
impl<DS: KeyValueStoreDatasource> SessionRepository for SessionRepositoryImpl<DS> {
    async fn token(&self) -> Result<Option<String>, ServerError> {
        self.datasource.get(&self.keys.token).await
    }

    async fn set_token(&self, token: &str) -> Result<(), ServerError> {
        self.datasource.set(&self.keys.token, token).await
    }

    async fn clear_token(&self) -> Result<(), ServerError> {
        self.datasource.remove(&self.keys.token).await
    }

    async fn selected_company_id(&self) -> Result<Option<String>, ServerError> {
        self.datasource.get(&self.keys.selected_company_id).await
    }

    async fn set_selected_company_id(&self, id: &str) -> Result<(), ServerError> {
        self.datasource.set(&self.keys.selected_company_id, id).await
    }

    async fn language(&self) -> Result<Option<String>, ServerError> {
        self.datasource.get(&self.keys.language).await
    }

    async fn set_language(&self, language: &str) -> Result<(), ServerError> {
        self.datasource.set(&self.keys.language, language).await
    }
}
