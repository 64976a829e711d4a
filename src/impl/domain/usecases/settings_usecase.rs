use async_trait::async_trait;

use crate::{
    domain::{
        logic::settings_defaults::default_settings,
        repositories::settings_repository::SettingsRepository,
    },
    entities::{
        AppSettings, Company, CompanyProfile, DashboardLayoutPatch, Theme, ThemeColorsPatch, User,
    },
};

/// Per-session settings. Every mutation is applied in memory first and then
/// written through to storage; a failed write is logged and otherwise
/// ignored, so the in-memory state stays authoritative for the session.
#[async_trait]
pub trait SettingsUsecase: Send + Sync {
    fn settings(&self) -> &AppSettings;

    async fn update_company_settings(&mut self, company: CompanyProfile);

    async fn update_dashboard_layout(&mut self, patch: DashboardLayoutPatch);

    async fn toggle_theme(&mut self);

    async fn update_theme_colors(&mut self, patch: ThemeColorsPatch);
}

pub(crate) struct SettingsUsecaseImpl<R: SettingsRepository> {
    repository: R,
    settings: AppSettings,
}

impl<R: SettingsRepository> SettingsUsecaseImpl<R> {
    /// Loads the stored settings for `user`, or builds role defaults when
    /// nothing usable is stored or the stored settings belong to a different
    /// company than `company`.
    pub(crate) async fn bootstrap(
        repository: R,
        user: &User,
        company: Option<&Company>,
        preferred_theme: Option<Theme>,
    ) -> Self {
        let defaults = default_settings(user.role, company, preferred_theme);
        let settings = match repository.load(defaults.clone()).await {
            Ok(Some(stored)) => {
                let company_changed = company
                    .is_some_and(|c| stored.company.id.as_deref() != Some(c.id.as_str()));
                if company_changed {
                    tracing::debug!(
                        stored_company = ?stored.company.id,
                        "stored settings belong to another company, using defaults"
                    );
                    defaults
                } else {
                    stored
                }
            }
            Ok(None) => defaults,
            Err(e) => {
                tracing::warn!(error = ?e, "failed to load stored settings, using defaults");
                defaults
            }
        };
        Self {
            repository,
            settings,
        }
    }

    async fn persist(&self) {
        if let Err(e) = self.repository.save(&self.settings).await {
            tracing::error!(error = ?e, "failed to persist settings");
        }
    }
}

#[async_trait]
impl<R: SettingsRepository> SettingsUsecase for SettingsUsecaseImpl<R> {
    fn settings(&self) -> &AppSettings {
        &self.settings
    }

    async fn update_company_settings(&mut self, company: CompanyProfile) {
        self.settings.company = company;
        self.persist().await;
    }

    async fn update_dashboard_layout(&mut self, patch: DashboardLayoutPatch) {
        self.settings.dashboard_layout = self.settings.dashboard_layout.merge(&patch);
        self.persist().await;
    }

    async fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        self.persist().await;
    }

    async fn update_theme_colors(&mut self, patch: ThemeColorsPatch) {
        self.settings.theme_colors = self.settings.theme_colors.merge(patch);
        self.persist().await;
    }
}
