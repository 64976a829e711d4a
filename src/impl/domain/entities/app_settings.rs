use iso_currency::Currency;

use super::dashboard_layout::DashboardLayout;

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub tax_id: String,
    pub currency: Currency,
}

impl CompanyProfile {
    /// Profile shown until the user fills in their company details.
    pub fn placeholder() -> Self {
        Self {
            id: None,
            name: "My Company".to_string(),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            tax_id: String::new(),
            currency: Currency::USD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            secondary: "#64748b".to_string(),
            accent: "#10b981".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeColorsPatch {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
}

impl ThemeColors {
    pub fn merge(&self, patch: ThemeColorsPatch) -> ThemeColors {
        ThemeColors {
            primary: patch.primary.unwrap_or_else(|| self.primary.clone()),
            secondary: patch.secondary.unwrap_or_else(|| self.secondary.clone()),
            accent: patch.accent.unwrap_or_else(|| self.accent.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub company: CompanyProfile,
    pub dashboard_layout: DashboardLayout,
    pub theme: Theme,
    pub theme_colors: ThemeColors,
}
