use std::{str::FromStr as _, sync::Arc};

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    config::DashboardConfig,
    data::{
        datasources::key_value_store_datasource::{
            FileKeyValueStoreDatasourceImpl, InMemoryKeyValueStoreDatasourceImpl,
            KeyValueStoreDatasource,
        },
        models::iso_date_model::ISODateModel,
        repositories::{
            session_repository_impl::SessionRepositoryImpl,
            settings_repository_impl::SettingsRepositoryImpl,
        },
    },
    domain::{
        repositories::dashboard_api::DashboardApi,
        usecases::{
            reports_usecase::{ReportScope, ReportsUsecase as _, ReportsUsecaseImpl},
            session_usecase::{SessionUsecase as _, SessionUsecaseImpl},
            settings_usecase::{SettingsUsecase, SettingsUsecaseImpl},
        },
    },
    entities::{
        BalanceSheet, Company, DateRange, ForecastPoint, PermissionSet, ProfitAndLoss,
        QueryAnswer, User, ViewAccess,
    },
    errors::NotAuthenticated,
    presentation::{report_csv::ReportCsvWriter, report_printer::ReportPrinter},
};

type SharedStore = Arc<dyn KeyValueStoreDatasource>;

/// Entry point tying one user session together: sign-in, permissions,
/// settings, reports and the assistant, all backed by the given API.
pub struct DashboardUtil<A: DashboardApi> {
    config: DashboardConfig,
    store: SharedStore,
    api: Arc<A>,
    session: SessionUsecaseImpl<A, SessionRepositoryImpl<SharedStore>>,
    reports: ReportsUsecaseImpl<A>,
    printer: ReportPrinter,
    csv: ReportCsvWriter,
}

impl<A: DashboardApi> DashboardUtil<A> {
    /// Persists to `config.storage_dir`, or keeps everything in memory if it
    /// is not set.
    pub fn new(api: A, config: DashboardConfig) -> Self {
        let store: SharedStore = match &config.storage_dir {
            Some(dir) => Arc::new(FileKeyValueStoreDatasourceImpl::new(dir.clone())),
            None => Arc::new(InMemoryKeyValueStoreDatasourceImpl::new()),
        };
        Self::with_store(api, config, store)
    }

    pub fn with_store(api: A, config: DashboardConfig, store: SharedStore) -> Self {
        let api = Arc::new(api);
        Self {
            session: SessionUsecaseImpl::new(
                api.clone(),
                SessionRepositoryImpl::new(store.clone(), config.storage_keys.clone()),
            ),
            reports: ReportsUsecaseImpl::new(api.clone(), config.base_currency),
            printer: ReportPrinter::new(),
            csv: ReportCsvWriter::new(),
            config,
            store,
            api,
        }
    }

    // Session.
    // ---

    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        self.session.login(email, password).await
    }

    pub async fn logout(&mut self) {
        self.session.logout().await
    }

    pub async fn restore(&mut self) -> Result<bool, ServerError> {
        self.session.restore().await
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn permissions(&self) -> PermissionSet {
        self.session.permissions()
    }

    pub fn can_access_view(&self, label: &str) -> ViewAccess {
        self.session.can_access_view(label)
    }

    pub async fn companies(&self) -> Result<Vec<Company>, ServerError> {
        self.api.companies(self.session.token()?).await
    }

    pub async fn select_company(&mut self, company_id: &str) -> Result<(), ServerError> {
        self.session.select_company(company_id).await
    }

    pub fn selected_company_id(&self) -> Option<&str> {
        self.session.selected_company_id().ok()
    }

    pub async fn set_language(&mut self, language: &str) -> Result<(), ServerError> {
        self.session.set_language(language).await
    }

    pub fn language(&self) -> Option<&str> {
        self.session.language()
    }

    // Settings.
    // ---

    /// Bootstraps the settings for the signed-in user and the selected
    /// company. Storage problems never fail this call; they fall back to
    /// defaults.
    pub async fn open_settings(&self) -> Result<impl SettingsUsecase, ServerError> {
        let user = self.session.user().ok_or_else(NotAuthenticated::new)?;
        let company = self.selected_company().await;
        let repository = SettingsRepositoryImpl::new(
            self.store.clone(),
            self.config.storage_keys.settings.clone(),
        );
        Ok(SettingsUsecaseImpl::bootstrap(
            repository,
            user,
            company.as_ref(),
            self.config.preferred_theme,
        )
        .await)
    }

    async fn selected_company(&self) -> Option<Company> {
        let company_id = self.session.selected_company_id().ok()?;
        match self.companies().await {
            Ok(companies) => companies.into_iter().find(|c| c.id == company_id),
            Err(e) => {
                tracing::warn!(error = ?e, company_id, "failed to fetch companies");
                None
            }
        }
    }

    // Reports.
    // ---

    /// Inclusive period from two ISO dates (YYYY-MM-DD).
    pub fn period(start: &str, end: &str) -> Result<DateRange, ServerError> {
        let start: NaiveDate = ISODateModel::from_str(start)?.into();
        let end: NaiveDate = ISODateModel::from_str(end)?.into();
        DateRange::new(start, end)
    }

    pub async fn profit_and_loss(&self, period: DateRange) -> Result<ProfitAndLoss, ServerError> {
        self.reports.profit_and_loss(self.scope()?, period).await
    }

    pub async fn balance_sheet(&self, as_of: NaiveDate) -> Result<BalanceSheet, ServerError> {
        self.reports.balance_sheet(self.scope()?, as_of).await
    }

    pub fn print_profit_and_loss(&self, report: &ProfitAndLoss) -> String {
        self.printer.print_profit_and_loss(report)
    }

    pub fn print_balance_sheet(&self, report: &BalanceSheet) -> String {
        self.printer.print_balance_sheet(report)
    }

    pub fn profit_and_loss_csv(&self, report: &ProfitAndLoss) -> Result<String, ServerError> {
        self.csv.profit_and_loss(report)
    }

    pub fn balance_sheet_csv(&self, report: &BalanceSheet) -> Result<String, ServerError> {
        self.csv.balance_sheet(report)
    }

    fn scope(&self) -> Result<ReportScope<'_>, ServerError> {
        Ok(ReportScope {
            user: self.session.user(),
            token: self.session.token()?,
            company_id: self.session.selected_company_id()?,
        })
    }

    // Assistant.
    // ---

    pub async fn ask(&self, question: &str) -> Result<QueryAnswer, ServerError> {
        let scope = self.scope()?;
        self.api
            .ask(scope.token, scope.company_id, question)
            .await
            .inspect_err(|e| tracing::warn!(error = ?e, "assistant query failed"))
    }

    pub async fn cash_flow_forecast(&self) -> Result<Vec<ForecastPoint>, ServerError> {
        let scope = self.scope()?;
        self.api
            .cash_flow_forecast(scope.token, scope.company_id)
            .await
            .inspect_err(|e| tracing::warn!(error = ?e, "cash flow forecast failed"))
    }
}
