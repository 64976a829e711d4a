use iso_currency::Currency;

use crate::entities::{
    AppSettings, CompanyProfile, DashboardLayoutPatch, Theme, ThemeColors, ThemeColorsPatch,
};

// Every field is optional so payloads written by older versions still load;
// anything missing is filled from the defaults passed to `resolve`.

#[derive(Debug, Default, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppSettingsModel {
    #[serde(default)]
    pub company: Option<CompanyProfileModel>,
    #[serde(default)]
    pub dashboard_layout: Option<DashboardLayoutModel>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub theme_colors: Option<ThemeColorsModel>,
}

#[derive(Debug, Default, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompanyProfileModel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub currency: Option<Currency>,
}

#[derive(Debug, Default, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DashboardLayoutModel {
    #[serde(default)]
    pub net_worth: Option<bool>,
    #[serde(default)]
    pub income: Option<bool>,
    #[serde(default)]
    pub expenses: Option<bool>,
    #[serde(default)]
    pub transactions: Option<bool>,
    #[serde(default)]
    pub category_chart: Option<bool>,
    #[serde(default)]
    pub ai_assistant: Option<bool>,
}

#[derive(Debug, Default, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThemeColorsModel {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
}

impl AppSettingsModel {
    /// Completes the stored payload with `defaults` for every absent field.
    pub(crate) fn resolve(self, defaults: AppSettings) -> AppSettings {
        let AppSettings {
            company: default_company,
            dashboard_layout: default_layout,
            theme: default_theme,
            theme_colors: default_colors,
        } = defaults;

        let company = match self.company {
            Some(c) => CompanyProfile {
                id: c.id.or(default_company.id),
                name: c.name.unwrap_or(default_company.name),
                address: c.address.unwrap_or(default_company.address),
                email: c.email.unwrap_or(default_company.email),
                phone: c.phone.unwrap_or(default_company.phone),
                tax_id: c.tax_id.unwrap_or(default_company.tax_id),
                currency: c.currency.unwrap_or(default_company.currency),
            },
            None => default_company,
        };
        let dashboard_layout = default_layout.merge(&self.dashboard_layout.unwrap_or_default().into());
        let theme_colors = match self.theme_colors {
            Some(c) => default_colors.merge(ThemeColorsPatch {
                primary: c.primary,
                secondary: c.secondary,
                accent: c.accent,
            }),
            None => default_colors,
        };

        AppSettings {
            company,
            dashboard_layout,
            theme: self.theme.unwrap_or(default_theme),
            theme_colors,
        }
    }

    /// Id of the company the payload was saved for, if any.
    pub(crate) fn company_id(&self) -> Option<&str> {
        self.company.as_ref().and_then(|c| c.id.as_deref())
    }
}

impl From<DashboardLayoutModel> for DashboardLayoutPatch {
    fn from(m: DashboardLayoutModel) -> Self {
        DashboardLayoutPatch {
            net_worth: m.net_worth,
            income: m.income,
            expenses: m.expenses,
            transactions: m.transactions,
            category_chart: m.category_chart,
            ai_assistant: m.ai_assistant,
        }
    }
}

impl From<&AppSettings> for AppSettingsModel {
    fn from(s: &AppSettings) -> Self {
        let ThemeColors {
            primary,
            secondary,
            accent,
        } = s.theme_colors.clone();
        let layout = s.dashboard_layout;
        AppSettingsModel {
            company: Some(CompanyProfileModel {
                id: s.company.id.clone(),
                name: Some(s.company.name.clone()),
                address: Some(s.company.address.clone()),
                email: Some(s.company.email.clone()),
                phone: Some(s.company.phone.clone()),
                tax_id: Some(s.company.tax_id.clone()),
                currency: Some(s.company.currency),
            }),
            dashboard_layout: Some(DashboardLayoutModel {
                net_worth: Some(layout.net_worth),
                income: Some(layout.income),
                expenses: Some(layout.expenses),
                transactions: Some(layout.transactions),
                category_chart: Some(layout.category_chart),
                ai_assistant: Some(layout.ai_assistant),
            }),
            theme: Some(s.theme),
            theme_colors: Some(ThemeColorsModel {
                primary: Some(primary),
                secondary: Some(secondary),
                accent: Some(accent),
            }),
        }
    }
}
