use std::collections::BTreeMap;

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::entities::{
    BalanceSheet, BalanceSheetLine, DateRange, ExchangeRates, ProfitAndLoss, Transaction,
    TransactionType, Wallet,
};

pub(crate) struct ReportAggregator<'a> {
    transactions: &'a [Transaction],
    rates: &'a ExchangeRates,
}

impl<'a> ReportAggregator<'a> {
    pub(crate) fn new(transactions: &'a [Transaction], rates: &'a ExchangeRates) -> Self {
        Self {
            transactions,
            rates,
        }
    }

    pub(crate) fn profit_and_loss(&self, period: DateRange) -> Result<ProfitAndLoss, ServerError> {
        let mut income_by_category: BTreeMap<String, f64> = BTreeMap::new();
        let mut expense_by_category: BTreeMap<String, f64> = BTreeMap::new();

        for tx in self.transactions.iter().filter(|tx| period.contains(tx.date)) {
            let bucket = match tx.kind {
                TransactionType::Income => &mut income_by_category,
                TransactionType::Expense => &mut expense_by_category,
                TransactionType::Transfer => continue,
            };
            let converted = self.rates.to_base(tx.amount.abs(), tx.currency)?;
            *bucket.entry(tx.category.clone()).or_insert(0.0) += converted;
        }

        let income_total: f64 = income_by_category.values().sum();
        let expense_total: f64 = expense_by_category.values().sum();

        Ok(ProfitAndLoss {
            period,
            currency: self.rates.base,
            income_by_category,
            expense_by_category,
            income_total,
            expense_total,
            net_profit: income_total - expense_total,
        })
    }

    pub(crate) fn balance_sheet(
        &self,
        wallets: &[Wallet],
        as_of: NaiveDate,
    ) -> Result<BalanceSheet, ServerError> {
        let mut assets = Vec::new();
        let mut liabilities = Vec::new();

        for wallet in wallets {
            let balance = self.wallet_balance(wallet, as_of)?;
            let line = BalanceSheetLine {
                wallet_id: wallet.id.clone(),
                name: wallet.name.clone(),
                amount: balance.abs(),
            };
            if wallet.kind.is_liability() || balance < 0.0 {
                liabilities.push(line);
            } else {
                assets.push(line);
            }
        }

        let total_assets: f64 = assets.iter().map(|l| l.amount).sum();
        let total_liabilities: f64 = liabilities.iter().map(|l| l.amount).sum();

        // Net profit since the beginning of the history.
        let retained_earnings = self
            .transactions
            .iter()
            .filter(|tx| tx.date <= as_of)
            .map(|tx| match tx.kind {
                TransactionType::Income => self.rates.to_base(tx.amount.abs(), tx.currency),
                TransactionType::Expense => self.rates.to_base(-tx.amount.abs(), tx.currency),
                TransactionType::Transfer => Ok(0.0),
            })
            .sum::<Result<f64, ServerError>>()?;

        // Plug: whatever equity the history cannot explain.
        let retained_earnings_adjustment = total_assets - total_liabilities - retained_earnings;
        let total_equity = retained_earnings + retained_earnings_adjustment;

        Ok(BalanceSheet {
            as_of,
            currency: self.rates.base,
            assets,
            liabilities,
            total_assets,
            total_liabilities,
            retained_earnings,
            retained_earnings_adjustment,
            total_equity,
        })
    }

    /// Wallet balance in the base currency, reconstructed from the opening
    /// balance and every transaction up to (and including) `as_of`.
    fn wallet_balance(&self, wallet: &Wallet, as_of: NaiveDate) -> Result<f64, ServerError> {
        let opening = self.rates.to_base(wallet.initial_balance, wallet.currency)?;
        self.transactions
            .iter()
            .filter(|tx| tx.date <= as_of)
            .map(|tx| match tx.effect_on(&wallet.id) {
                effect if effect == 0.0 => Ok(0.0),
                effect => self.rates.to_base(effect, tx.currency),
            })
            .try_fold(opening, |acc, effect| effect.map(|e| acc + e))
    }
}
