use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::permission_resolver::{can_access_view, resolve_permissions},
        repositories::{dashboard_api::DashboardApi, session_repository::SessionRepository},
    },
    entities::{PermissionSet, User, ViewAccess},
    errors::{NoCompanySelected, NotAuthenticated},
};

#[async_trait]
pub trait SessionUsecase: Send + Sync {
    /// Signs in through the API. Any failure (bad credentials, unreachable
    /// API, storage error) yields `false`; the cause is only logged.
    async fn login(&mut self, email: &str, password: &str) -> bool;

    async fn logout(&mut self);

    /// Reloads token, selected company and language from storage. Returns
    /// whether a token was found.
    async fn restore(&mut self) -> Result<bool, ServerError>;

    async fn select_company(&mut self, company_id: &str) -> Result<(), ServerError>;

    async fn set_language(&mut self, language: &str) -> Result<(), ServerError>;

    fn user(&self) -> Option<&User>;

    fn token(&self) -> Result<&str, ServerError>;

    fn selected_company_id(&self) -> Result<&str, ServerError>;

    fn language(&self) -> Option<&str>;

    fn permissions(&self) -> PermissionSet {
        resolve_permissions(self.user())
    }

    fn can_access_view(&self, label: &str) -> ViewAccess {
        can_access_view(&self.permissions(), label)
    }
}

pub(crate) struct SessionUsecaseImpl<A: DashboardApi, R: SessionRepository> {
    api: Arc<A>,
    repository: R,
    user: Option<User>,
    token: Option<String>,
    company_id: Option<String>,
    language: Option<String>,
}

impl<A: DashboardApi, R: SessionRepository> SessionUsecaseImpl<A, R> {
    pub(crate) fn new(api: Arc<A>, repository: R) -> Self {
        Self {
            api,
            repository,
            user: None,
            token: None,
            company_id: None,
            language: None,
        }
    }
}

#[async_trait]
impl<A: DashboardApi, R: SessionRepository> SessionUsecase for SessionUsecaseImpl<A, R> {
    async fn login(&mut self, email: &str, password: &str) -> bool {
        let session = match self.api.authenticate(email, password).await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = ?e, "login failed");
                return false;
            }
        };
        if let Err(e) = self.repository.set_token(&session.token).await {
            tracing::warn!(error = ?e, "failed to store session token");
            return false;
        }
        tracing::debug!(user = %session.user.email, role = %session.user.role, "signed in");
        self.token = Some(session.token);
        self.user = Some(session.user);
        true
    }

    async fn logout(&mut self) {
        if let Err(e) = self.repository.clear_token().await {
            tracing::warn!(error = ?e, "failed to clear stored session token");
        }
        self.token = None;
        self.user = None;
    }

    async fn restore(&mut self) -> Result<bool, ServerError> {
        self.token = self.repository.token().await?;
        self.company_id = self.repository.selected_company_id().await?;
        self.language = self.repository.language().await?;
        Ok(self.token.is_some())
    }

    async fn select_company(&mut self, company_id: &str) -> Result<(), ServerError> {
        self.repository.set_selected_company_id(company_id).await?;
        self.company_id = Some(company_id.to_string());
        Ok(())
    }

    async fn set_language(&mut self, language: &str) -> Result<(), ServerError> {
        self.repository.set_language(language).await?;
        self.language = Some(language.to_string());
        Ok(())
    }

    fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn token(&self) -> Result<&str, ServerError> {
        self.token.as_deref().ok_or_else(NotAuthenticated::new)
    }

    fn selected_company_id(&self) -> Result<&str, ServerError> {
        self.company_id
            .as_deref()
            .ok_or_else(NoCompanySelected::new)
    }

    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}
