use crate::entities::{AppSettings, Company, CompanyProfile, Role, Theme, ThemeColors};

use super::layout_resolver::default_layout;

pub(crate) fn default_company_profile(company: Option<&Company>) -> CompanyProfile {
    match company {
        Some(c) => CompanyProfile {
            id: Some(c.id.clone()),
            name: c.name.clone(),
            currency: c.currency,
            ..CompanyProfile::placeholder()
        },
        None => CompanyProfile::placeholder(),
    }
}

/// Settings for a session with nothing stored yet.
pub(crate) fn default_settings(
    role: Role,
    company: Option<&Company>,
    preferred_theme: Option<Theme>,
) -> AppSettings {
    AppSettings {
        company: default_company_profile(company),
        dashboard_layout: default_layout(role),
        theme: preferred_theme.unwrap_or(Theme::Dark),
        theme_colors: ThemeColors::default(),
    }
}
