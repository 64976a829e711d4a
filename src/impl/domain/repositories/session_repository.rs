use async_trait::async_trait;
use fractic_server_error::ServerError;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn token(&self) -> Result<Option<String>, ServerError>;
    async fn set_token(&self, token: &str) -> Result<(), ServerError>;
    async fn clear_token(&self) -> Result<(), ServerError>;

    async fn selected_company_id(&self) -> Result<Option<String>, ServerError>;
    async fn set_selected_company_id(&self, id: &str) -> Result<(), ServerError>;

    async fn language(&self) -> Result<Option<String>, ServerError>;
    async fn set_language(&self, language: &str) -> Result<(), ServerError>;
}
