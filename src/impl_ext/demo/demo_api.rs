use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{Days, NaiveDate};
use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    domain::repositories::dashboard_api::DashboardApi,
    entities::{
        AuthSession, Company, ExchangeRates, ForecastPoint, QueryAnswer, Role, Transaction,
        TransactionType, User, Wallet, WalletType,
    },
    errors::{InvalidCredentials, NotAuthenticated, UnknownCompany},
};

pub const DEMO_PASSWORD: &str = "demo";
pub const DEMO_COMPANY_ID: &str = "demo-co";

const FORECAST_DAYS: u64 = 30;

/// In-process stand-in for the dashboard API: one account per role
/// (`admin@demo.local`, `accountant@demo.local`, `hr@demo.local`,
/// `employee@demo.local`, `viewer@demo.local`, all with password `demo`) and a
/// small fixed data set for a single company.
///
/// Tokens are not signed; this is only meant for demos and tests.
pub struct DemoDashboardApi {
    users: Vec<User>,
    company: Company,
    transactions: Vec<Transaction>,
    wallets: Vec<Wallet>,
}

impl Default for DemoDashboardApi {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoDashboardApi {
    pub fn new() -> Self {
        let users = [
            ("admin", Role::Admin),
            ("accountant", Role::Accountant),
            ("hr", Role::HrManager),
            ("employee", Role::Employee),
            ("viewer", Role::Viewer),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, role))| User {
            id: format!("u{}", i + 1),
            name: name.to_string(),
            email: format!("{}@demo.local", name),
            role,
        })
        .collect();

        Self {
            users,
            company: Company {
                id: DEMO_COMPANY_ID.to_string(),
                name: "Demo Trading Ltd.".to_string(),
                currency: Currency::USD,
            },
            transactions: demo_transactions(),
            wallets: vec![
                demo_wallet("w-bank", "Main Bank", WalletType::Bank, 5_000.0, Currency::USD),
                demo_wallet("w-cash", "Petty Cash", WalletType::Cash, 200.0, Currency::USD),
                demo_wallet("w-eur", "EUR Account", WalletType::Bank, 1_000.0, Currency::EUR),
                demo_wallet("w-card", "Company Card", WalletType::CreditCard, 0.0, Currency::USD),
            ],
        }
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_wallets(mut self, wallets: Vec<Wallet>) -> Self {
        self.wallets = wallets;
        self
    }

    pub fn token_for(user: &User) -> String {
        STANDARD.encode(format!("{}:{}", user.email, user.role))
    }

    fn user_for_token(&self, token: &str) -> Result<&User, ServerError> {
        let decoded = STANDARD
            .decode(token)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or_else(NotAuthenticated::new)?;
        let email = decoded.split(':').next().unwrap_or_default();
        self.users
            .iter()
            .find(|u| u.email == email)
            .ok_or_else(NotAuthenticated::new)
    }

    fn check(&self, token: &str, company_id: &str) -> Result<(), ServerError> {
        self.user_for_token(token)?;
        if company_id != self.company.id {
            return Err(UnknownCompany::new(company_id));
        }
        Ok(())
    }
}

#[async_trait]
impl DashboardApi for DemoDashboardApi {
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthSession, ServerError> {
        let user = self
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
            .filter(|_| password == DEMO_PASSWORD)
            .ok_or_else(InvalidCredentials::new)?;
        Ok(AuthSession {
            token: Self::token_for(user),
            user: user.clone(),
        })
    }

    async fn companies(&self, token: &str) -> Result<Vec<Company>, ServerError> {
        self.user_for_token(token)?;
        Ok(vec![self.company.clone()])
    }

    async fn transactions(
        &self,
        token: &str,
        company_id: &str,
    ) -> Result<Vec<Transaction>, ServerError> {
        self.check(token, company_id)?;
        Ok(self.transactions.clone())
    }

    async fn wallets(&self, token: &str, company_id: &str) -> Result<Vec<Wallet>, ServerError> {
        self.check(token, company_id)?;
        Ok(self.wallets.clone())
    }

    async fn exchange_rates(
        &self,
        token: &str,
        company_id: &str,
        _date: NaiveDate,
    ) -> Result<ExchangeRates, ServerError> {
        self.check(token, company_id)?;
        Ok(ExchangeRates::new(Currency::USD)
            .with_rate(Currency::EUR, 0.8)
            .with_rate(Currency::GBP, 0.75)
            .with_rate(Currency::JPY, 150.0))
    }

    async fn ask(
        &self,
        token: &str,
        company_id: &str,
        question: &str,
    ) -> Result<QueryAnswer, ServerError> {
        self.check(token, company_id)?;
        let (income, expenses) = self.transactions.iter().fold((0.0, 0.0), |(i, e), tx| {
            match (tx.kind, tx.currency) {
                (TransactionType::Income, Currency::USD) => (i + tx.amount.abs(), e),
                (TransactionType::Expense, Currency::USD) => (i, e + tx.amount.abs()),
                _ => (i, e),
            }
        });
        Ok(QueryAnswer {
            answer: format!(
                "You asked: \"{}\". Recorded USD income is {:.2} and USD expenses are {:.2}.",
                question.trim(),
                income,
                expenses
            ),
        })
    }

    async fn cash_flow_forecast(
        &self,
        token: &str,
        company_id: &str,
    ) -> Result<Vec<ForecastPoint>, ServerError> {
        self.check(token, company_id)?;
        let Some(last) = self.transactions.iter().map(|tx| tx.date).max() else {
            return Ok(Vec::new());
        };
        let opening: f64 = self
            .wallets
            .iter()
            .filter(|w| w.currency == Currency::USD)
            .map(|w| {
                w.initial_balance
                    + self
                        .transactions
                        .iter()
                        .filter(|tx| tx.currency == Currency::USD)
                        .map(|tx| tx.effect_on(&w.id))
                        .sum::<f64>()
            })
            .sum();
        // Straight-line projection of the average daily USD movement.
        let first = self
            .transactions
            .iter()
            .map(|tx| tx.date)
            .min()
            .unwrap_or(last);
        let span_days = ((last - first).num_days() + 1) as f64;
        let movement: f64 = self
            .transactions
            .iter()
            .filter(|tx| tx.currency == Currency::USD)
            .map(|tx| match tx.kind {
                TransactionType::Income => tx.amount.abs(),
                TransactionType::Expense => -tx.amount.abs(),
                TransactionType::Transfer => 0.0,
            })
            .sum();
        let daily = movement / span_days;
        Ok((1..=FORECAST_DAYS)
            .filter_map(|d| {
                let date = last.checked_add_days(Days::new(d))?;
                let predicted = opening + daily * d as f64;
                let spread = daily.abs() * (d as f64).sqrt();
                Some(ForecastPoint {
                    date,
                    predicted_balance: predicted,
                    lower_bound: Some(predicted - spread),
                    upper_bound: Some(predicted + spread),
                })
            })
            .collect())
    }
}

fn demo_wallet(id: &str, name: &str, kind: WalletType, initial: f64, c: Currency) -> Wallet {
    Wallet {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        initial_balance: initial,
        currency: c,
    }
}

fn demo_transactions() -> Vec<Transaction> {
    let rows: [(&str, (i32, u32, u32), &str, TransactionType, f64, Currency, &str); 8] = [
        ("t1", (2024, 1, 3), "Sales", TransactionType::Income, 4_200.0, Currency::USD, "w-bank"),
        ("t2", (2024, 1, 5), "Rent", TransactionType::Expense, -1_500.0, Currency::USD, "w-bank"),
        ("t3", (2024, 1, 9), "Supplies", TransactionType::Expense, -85.5, Currency::USD, "w-cash"),
        ("t4", (2024, 1, 15), "Consulting", TransactionType::Income, 800.0, Currency::EUR, "w-eur"),
        ("t5", (2024, 1, 20), "Travel", TransactionType::Expense, -640.0, Currency::USD, "w-card"),
        ("t6", (2024, 2, 2), "Sales", TransactionType::Income, 3_900.0, Currency::USD, "w-bank"),
        ("t7", (2024, 2, 4), "Rent", TransactionType::Expense, -1_500.0, Currency::USD, "w-bank"),
        ("t8", (2024, 2, 10), "Salaries", TransactionType::Expense, -2_300.0, Currency::USD, "w-bank"),
    ];
    rows.into_iter()
        .filter_map(|(id, (y, m, d), category, kind, amount, currency, wallet)| {
            Some(Transaction {
                id: id.to_string(),
                date: NaiveDate::from_ymd_opt(y, m, d)?,
                description: format!("{} ({})", category, id),
                category: category.to_string(),
                kind,
                amount,
                currency,
                wallet_id: wallet.to_string(),
                to_wallet_id: None,
            })
        })
        .collect()
}
