use std::collections::HashMap;

use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::errors::{InvalidExchangeRate, MissingExchangeRate};

/// Conversion table relative to a base currency. Each rate is the number of
/// units of that currency worth one unit of the base currency.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct ExchangeRates {
    pub base: Currency,
    pub rates: HashMap<Currency, f64>,
}

impl ExchangeRates {
    pub fn new(base: Currency) -> Self {
        Self {
            base,
            rates: HashMap::from([(base, 1.0)]),
        }
    }

    pub fn with_rate(mut self, currency: Currency, rate: f64) -> Self {
        self.rates.insert(currency, rate);
        self
    }

    pub fn rate(&self, currency: Currency) -> Result<f64, ServerError> {
        if currency == self.base {
            return Ok(1.0);
        }
        let rate = *self
            .rates
            .get(&currency)
            .ok_or_else(|| MissingExchangeRate::new(currency.code(), self.base.code()))?;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(InvalidExchangeRate::new(currency.code(), rate));
        }
        Ok(rate)
    }

    /// Converts an amount in the given currency into the base currency.
    pub fn to_base(&self, amount: f64, currency: Currency) -> Result<f64, ServerError> {
        Ok(amount / self.rate(currency)?)
    }

    /// Re-expresses the table relative to another base currency already
    /// present in it.
    pub fn rebased(&self, base: Currency) -> Result<ExchangeRates, ServerError> {
        if base == self.base {
            return Ok(self.clone());
        }
        let pivot = self.rate(base)?;
        let rates = self
            .rates
            .iter()
            .map(|(currency, rate)| (*currency, rate / pivot))
            .chain(std::iter::once((self.base, 1.0 / pivot)))
            .chain(std::iter::once((base, 1.0)))
            .collect();
        Ok(ExchangeRates { base, rates })
    }
}
