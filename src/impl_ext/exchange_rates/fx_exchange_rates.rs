use std::path::PathBuf;

use chrono::NaiveDate;
use fractic_currency_conversion::util::FxUtil;
use fractic_server_error::ServerError;
use futures::future::try_join_all;
use iso_currency::Currency;

use crate::entities::ExchangeRates;

/// Builds rate tables from open-exchange-rates data, cached on disk.
///
/// Useful for `DashboardApi` implementations whose backend does not provide
/// its own rates.
#[derive(Debug)]
pub struct FxExchangeRates {
    currency_conversion_cache_dir: PathBuf,
    currency_conversion_api_key: String,
}

impl FxExchangeRates {
    pub fn new(
        currency_conversion_cache_dir: impl Into<PathBuf>,
        currency_conversion_api_key: impl Into<String>,
    ) -> Self {
        Self {
            currency_conversion_cache_dir: currency_conversion_cache_dir.into(),
            currency_conversion_api_key: currency_conversion_api_key.into(),
        }
    }

    /// Rate table for `date`, relative to `base`, covering `currencies`.
    pub async fn rate_table(
        &self,
        date: NaiveDate,
        base: Currency,
        currencies: &[Currency],
    ) -> Result<ExchangeRates, ServerError> {
        let fx_util = FxUtil::using_open_exchange_rates_api(
            &self.currency_conversion_api_key,
            &self.currency_conversion_cache_dir,
        )?;
        let fx_util = &fx_util;
        let quotes = try_join_all(
            currencies
                .iter()
                .filter(|c| **c != base)
                .map(|currency| async move {
                    let rate = fx_util
                        .convert(date, base.code(), currency.code(), 1.0)
                        .await?;
                    Ok::<_, ServerError>((*currency, rate))
                }),
        )
        .await?;
        Ok(quotes
            .into_iter()
            .fold(ExchangeRates::new(base), |rates, (currency, rate)| {
                rates.with_rate(currency, rate)
            }))
    }
}
