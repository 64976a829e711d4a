use std::collections::BTreeMap;

use iso_currency::Currency;

use super::date_range::DateRange;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfitAndLoss {
    pub period: DateRange,
    pub currency: Currency,
    pub income_by_category: BTreeMap<String, f64>,
    pub expense_by_category: BTreeMap<String, f64>,
    pub income_total: f64,
    pub expense_total: f64,
    pub net_profit: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSheetLine {
    pub wallet_id: String,
    pub name: String,
    /// Always non-negative; the section determines the sign.
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSheet {
    pub as_of: chrono::NaiveDate,
    pub currency: Currency,
    pub assets: Vec<BalanceSheetLine>,
    pub liabilities: Vec<BalanceSheetLine>,
    pub total_assets: f64,
    pub total_liabilities: f64,
    /// Net profit of every transaction up to the balance sheet date.
    pub retained_earnings: f64,
    /// Balancing figure that forces assets = liabilities + equity. It
    /// absorbs opening balances and anything else the transaction history
    /// does not explain; it is not a reconciliation.
    pub retained_earnings_adjustment: f64,
    pub total_equity: f64,
}

impl BalanceSheet {
    pub fn is_balanced(&self) -> bool {
        (self.total_assets - (self.total_liabilities + self.total_equity)).abs() < 1e-6
    }
}
