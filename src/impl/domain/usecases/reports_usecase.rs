use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    domain::{
        logic::{permission_resolver::resolve_permissions, report_aggregator::ReportAggregator},
        repositories::dashboard_api::DashboardApi,
    },
    entities::{BalanceSheet, Capability, DateRange, ProfitAndLoss, User},
    errors::AccessDenied,
};

/// Identifies whose data a report is built from.
#[derive(Debug, Clone, Copy)]
pub struct ReportScope<'a> {
    pub user: Option<&'a User>,
    pub token: &'a str,
    pub company_id: &'a str,
}

#[async_trait]
pub trait ReportsUsecase: Send + Sync {
    async fn profit_and_loss(
        &self,
        scope: ReportScope<'_>,
        period: DateRange,
    ) -> Result<ProfitAndLoss, ServerError>;

    async fn balance_sheet(
        &self,
        scope: ReportScope<'_>,
        as_of: NaiveDate,
    ) -> Result<BalanceSheet, ServerError>;
}

pub(crate) struct ReportsUsecaseImpl<A: DashboardApi> {
    api: Arc<A>,
    base_currency: Currency,
}

impl<A: DashboardApi> ReportsUsecaseImpl<A> {
    pub(crate) fn new(api: Arc<A>, base_currency: Currency) -> Self {
        Self { api, base_currency }
    }

    fn authorize(scope: &ReportScope<'_>) -> Result<(), ServerError> {
        let capability = Capability::ViewReports;
        if resolve_permissions(scope.user).has(capability) {
            Ok(())
        } else {
            Err(AccessDenied::new(capability.key()))
        }
    }
}

#[async_trait]
impl<A: DashboardApi> ReportsUsecase for ReportsUsecaseImpl<A> {
    async fn profit_and_loss(
        &self,
        scope: ReportScope<'_>,
        period: DateRange,
    ) -> Result<ProfitAndLoss, ServerError> {
        Self::authorize(&scope)?;
        let (transactions, rates) = futures::try_join!(
            self.api.transactions(scope.token, scope.company_id),
            self.api
                .exchange_rates(scope.token, scope.company_id, period.end()),
        )?;
        let rates = rates.rebased(self.base_currency)?;
        ReportAggregator::new(&transactions, &rates).profit_and_loss(period)
    }

    async fn balance_sheet(
        &self,
        scope: ReportScope<'_>,
        as_of: NaiveDate,
    ) -> Result<BalanceSheet, ServerError> {
        Self::authorize(&scope)?;
        let (transactions, wallets, rates) = futures::try_join!(
            self.api.transactions(scope.token, scope.company_id),
            self.api.wallets(scope.token, scope.company_id),
            self.api.exchange_rates(scope.token, scope.company_id, as_of),
        )?;
        let rates = rates.rebased(self.base_currency)?;
        ReportAggregator::new(&transactions, &rates).balance_sheet(&wallets, as_of)
    }
}
