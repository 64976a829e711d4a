use std::{path::PathBuf, str::FromStr as _};

use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{data::models::iso_currency_model::ISOCurrencyModel, entities::Theme};

/// Version suffix of the settings storage key. Bump it when the stored
/// settings layout changes incompatibly; older payloads stay untouched under
/// their own key.
pub const SETTINGS_SCHEMA_VERSION: &str = "v2";

/// Names of the entries kept in the per-profile key-value store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub token: String,
    pub selected_company_id: String,
    pub language: String,
    pub settings: String,
}

impl StorageKeys {
    pub fn for_version(version: &str) -> Self {
        Self {
            token: "token".to_string(),
            selected_company_id: "selectedCompanyId".to_string(),
            language: "language".to_string(),
            settings: format!("app_settings_{}", version),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::for_version(SETTINGS_SCHEMA_VERSION)
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Directory holding the profile's persisted entries. `None` keeps
    /// everything in memory.
    pub storage_dir: Option<PathBuf>,
    pub storage_keys: StorageKeys,
    /// Currency reports are expressed in.
    pub base_currency: Currency,
    /// Light/dark preference reported by the environment, used to seed the
    /// theme of fresh settings.
    pub preferred_theme: Option<Theme>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            storage_keys: StorageKeys::default(),
            base_currency: Currency::USD,
            preferred_theme: None,
        }
    }
}

impl DashboardConfig {
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    pub fn with_base_currency_code(mut self, code: &str) -> Result<Self, ServerError> {
        self.base_currency = ISOCurrencyModel::from_str(code)?.into();
        Ok(self)
    }

    pub fn with_preferred_theme(mut self, theme: Theme) -> Self {
        self.preferred_theme = Some(theme);
        self
    }
}
