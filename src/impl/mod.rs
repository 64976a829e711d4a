// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod key_value_store_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod app_settings_model;
        pub(crate) mod iso_currency_model;
        pub(crate) mod iso_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod session_repository_impl;
        pub(crate) mod settings_repository_impl;

        #[cfg(test)]
        mod settings_repository_impl_test;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod app_settings;
        pub(crate) mod assistant;
        pub(crate) mod company;
        pub(crate) mod dashboard_layout;
        pub(crate) mod date_range;
        pub(crate) mod exchange_rates;
        pub(crate) mod permission_set;
        pub(crate) mod reports;
        pub(crate) mod role;
        pub(crate) mod transaction;
        pub(crate) mod user;
        pub(crate) mod wallet;
    }
    pub(crate) mod logic {
        pub(crate) mod layout_resolver;
        pub(crate) mod permission_resolver;
        pub(crate) mod report_aggregator;
        pub(crate) mod settings_defaults;

        #[cfg(test)]
        mod permission_resolver_test;
        #[cfg(test)]
        mod layout_resolver_test;
        #[cfg(test)]
        mod report_aggregator_test;
    }
    pub(crate) mod repositories {
        pub(crate) mod dashboard_api;
        pub(crate) mod session_repository;
        pub(crate) mod settings_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod reports_usecase;
        pub(crate) mod session_usecase;
        pub(crate) mod settings_usecase;

        #[cfg(test)]
        mod settings_usecase_test;
    }
}

pub(crate) mod presentation {
    pub(crate) mod report_csv;
    pub(crate) mod report_printer;
    pub(crate) mod utils;

    #[cfg(test)]
    mod presentation_test;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::app_settings::*;
        pub use crate::domain::entities::assistant::*;
        pub use crate::domain::entities::company::*;
        pub use crate::domain::entities::dashboard_layout::*;
        pub use crate::domain::entities::date_range::*;
        pub use crate::domain::entities::exchange_rates::*;
        pub use crate::domain::entities::permission_set::*;
        pub use crate::domain::entities::reports::*;
        pub use crate::domain::entities::role::*;
        pub use crate::domain::entities::transaction::*;
        pub use crate::domain::entities::user::*;
        pub use crate::domain::entities::wallet::*;
    }

    pub mod permissions {
        pub use crate::domain::logic::permission_resolver::{
            can_access_view, resolve_permissions, view_key,
        };
    }

    pub mod layouts {
        pub use crate::domain::logic::layout_resolver::{default_layout, VIEWER_LAYOUT};
    }

    pub mod repositories {
        pub use crate::data::datasources::key_value_store_datasource::*;
        pub use crate::domain::repositories::dashboard_api::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::reports_usecase::{ReportScope, ReportsUsecase};
        pub use crate::domain::usecases::session_usecase::SessionUsecase;
        pub use crate::domain::usecases::settings_usecase::SettingsUsecase;
    }
}
