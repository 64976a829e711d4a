use chrono::NaiveDate;
use iso_currency::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Expense amounts may be recorded with either sign; aggregation only
    /// looks at the magnitude.
    pub amount: f64,
    pub currency: Currency,
    pub wallet_id: String,
    #[serde(default)]
    pub to_wallet_id: Option<String>,
}

impl Transaction {
    /// Effect of this transaction on the given wallet's balance, in the
    /// transaction's own currency.
    pub fn effect_on(&self, wallet_id: &str) -> f64 {
        let magnitude = self.amount.abs();
        match self.kind {
            TransactionType::Income if self.wallet_id == wallet_id => magnitude,
            TransactionType::Expense if self.wallet_id == wallet_id => -magnitude,
            TransactionType::Transfer => {
                let outgoing = if self.wallet_id == wallet_id {
                    -magnitude
                } else {
                    0.0
                };
                let incoming = if self.to_wallet_id.as_deref() == Some(wallet_id) {
                    magnitude
                } else {
                    0.0
                };
                outgoing + incoming
            }
            _ => 0.0,
        }
    }
}
