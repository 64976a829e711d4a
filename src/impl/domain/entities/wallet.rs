use iso_currency::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletType {
    Cash,
    Bank,
    CreditCard,
    Investment,
    Loan,
}

impl WalletType {
    /// Wallets that represent money owed rather than money held.
    pub fn is_liability(&self) -> bool {
        matches!(self, WalletType::CreditCard | WalletType::Loan)
    }
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WalletType,
    #[serde(default)]
    pub initial_balance: f64,
    pub currency: Currency,
}
