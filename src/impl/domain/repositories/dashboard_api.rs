use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::entities::{
    AuthSession, Company, ExchangeRates, ForecastPoint, QueryAnswer, Transaction, Wallet,
};

/// Remote API backing the dashboard. Implementations own transport and
/// authentication details; every call is a single request/response.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthSession, ServerError>;

    async fn companies(&self, token: &str) -> Result<Vec<Company>, ServerError>;

    async fn transactions(
        &self,
        token: &str,
        company_id: &str,
    ) -> Result<Vec<Transaction>, ServerError>;

    async fn wallets(&self, token: &str, company_id: &str) -> Result<Vec<Wallet>, ServerError>;

    async fn exchange_rates(
        &self,
        token: &str,
        company_id: &str,
        date: NaiveDate,
    ) -> Result<ExchangeRates, ServerError>;

    async fn ask(
        &self,
        token: &str,
        company_id: &str,
        question: &str,
    ) -> Result<QueryAnswer, ServerError>;

    async fn cash_flow_forecast(
        &self,
        token: &str,
        company_id: &str,
    ) -> Result<Vec<ForecastPoint>, ServerError>;
}
