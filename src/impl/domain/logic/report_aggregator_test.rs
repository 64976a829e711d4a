use std::collections::BTreeMap;

use chrono::NaiveDate;
use iso_currency::Currency;

use crate::{
    domain::logic::report_aggregator::ReportAggregator,
    entities::{DateRange, ExchangeRates, Transaction, TransactionType, Wallet, WalletType},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx(
    id: &str,
    on: NaiveDate,
    kind: TransactionType,
    category: &str,
    amount: f64,
    currency: Currency,
    wallet: &str,
) -> Transaction {
    Transaction {
        id: id.to_owned(),
        date: on,
        description: String::new(),
        category: category.to_owned(),
        kind,
        amount,
        currency,
        wallet_id: wallet.to_owned(),
        to_wallet_id: None,
    }
}

fn wallet(id: &str, kind: WalletType, initial: f64, currency: Currency) -> Wallet {
    Wallet {
        id: id.to_owned(),
        name: id.to_owned(),
        kind,
        initial_balance: initial,
        currency,
    }
}

fn january() -> DateRange {
    DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap()
}

#[test]
fn test_profit_and_loss_scenario() {
    let transactions = vec![
        tx("1", date(2024, 1, 10), TransactionType::Income, "Sales", 1000.0, Currency::USD, "w"),
        tx("2", date(2024, 1, 11), TransactionType::Expense, "Rent", -400.0, Currency::USD, "w"),
    ];
    let rates = ExchangeRates::new(Currency::USD);

    let report = ReportAggregator::new(&transactions, &rates)
        .profit_and_loss(january())
        .unwrap();

    assert_eq!(report.net_profit, 600.0);
    assert_eq!(
        report.income_by_category,
        BTreeMap::from([("Sales".to_owned(), 1000.0)])
    );
    assert_eq!(
        report.expense_by_category,
        BTreeMap::from([("Rent".to_owned(), 400.0)])
    );
    assert_eq!(report.income_total, 1000.0);
    assert_eq!(report.expense_total, 400.0);
}

#[test]
fn test_profit_and_loss_range_is_inclusive() {
    let transactions = vec![
        tx("1", date(2023, 12, 31), TransactionType::Income, "Sales", 50.0, Currency::USD, "w"),
        tx("2", date(2024, 1, 1), TransactionType::Income, "Sales", 100.0, Currency::USD, "w"),
        tx("3", date(2024, 1, 31), TransactionType::Income, "Sales", 10.0, Currency::USD, "w"),
        tx("4", date(2024, 2, 1), TransactionType::Income, "Sales", 70.0, Currency::USD, "w"),
    ];
    let rates = ExchangeRates::new(Currency::USD);

    let report = ReportAggregator::new(&transactions, &rates)
        .profit_and_loss(january())
        .unwrap();

    assert_eq!(report.income_total, 110.0);
}

#[test]
fn test_profit_and_loss_converts_and_skips_transfers() {
    let mut transfer = tx(
        "3",
        date(2024, 1, 12),
        TransactionType::Transfer,
        "Transfer",
        999.0,
        Currency::USD,
        "a",
    );
    transfer.to_wallet_id = Some("b".to_owned());
    let transactions = vec![
        tx("1", date(2024, 1, 10), TransactionType::Income, "Consulting", 80.0, Currency::EUR, "w"),
        tx("2", date(2024, 1, 11), TransactionType::Expense, "Rent", 40.0, Currency::EUR, "w"),
        transfer,
    ];
    let rates = ExchangeRates::new(Currency::USD).with_rate(Currency::EUR, 0.5);

    let report = ReportAggregator::new(&transactions, &rates)
        .profit_and_loss(january())
        .unwrap();

    assert_eq!(report.income_by_category["Consulting"], 160.0);
    assert_eq!(report.expense_by_category["Rent"], 80.0);
    assert_eq!(report.net_profit, 80.0);
    assert!(!report.income_by_category.contains_key("Transfer"));
}

#[test]
fn test_missing_rate_is_an_error() {
    let transactions = vec![tx(
        "1",
        date(2024, 1, 10),
        TransactionType::Income,
        "Sales",
        10.0,
        Currency::GBP,
        "w",
    )];
    let rates = ExchangeRates::new(Currency::USD);

    let result = ReportAggregator::new(&transactions, &rates).profit_and_loss(january());
    assert!(result.is_err());
}

#[test]
fn test_balance_sheet_balances_with_plug() {
    let mut transfer = tx(
        "4",
        date(2024, 1, 20),
        TransactionType::Transfer,
        "Card payment",
        100.0,
        Currency::USD,
        "bank",
    );
    transfer.to_wallet_id = Some("card".to_owned());
    let transactions = vec![
        tx("1", date(2024, 1, 5), TransactionType::Income, "Sales", 1000.0, Currency::USD, "bank"),
        tx("2", date(2024, 1, 6), TransactionType::Expense, "Travel", -300.0, Currency::USD, "card"),
        tx("3", date(2024, 1, 7), TransactionType::Expense, "Rent", -400.0, Currency::USD, "bank"),
        transfer,
        // After the balance sheet date.
        tx("5", date(2024, 3, 1), TransactionType::Income, "Sales", 5000.0, Currency::USD, "bank"),
    ];
    let wallets = vec![
        wallet("bank", WalletType::Bank, 2000.0, Currency::USD),
        wallet("card", WalletType::CreditCard, 0.0, Currency::USD),
    ];
    let rates = ExchangeRates::new(Currency::USD);

    let sheet = ReportAggregator::new(&transactions, &rates)
        .balance_sheet(&wallets, date(2024, 1, 31))
        .unwrap();

    // bank: 2000 + 1000 - 400 - 100; card: -300 + 100.
    assert_eq!(sheet.total_assets, 2500.0);
    assert_eq!(sheet.total_liabilities, 200.0);
    assert_eq!(sheet.retained_earnings, 300.0);
    // The opening balance is not explained by any transaction.
    assert_eq!(sheet.retained_earnings_adjustment, 2000.0);
    assert_eq!(sheet.total_equity, 2300.0);
    assert!(sheet.is_balanced());
}

#[test]
fn test_overdrawn_asset_wallet_is_a_liability() {
    let transactions = vec![tx(
        "1",
        date(2024, 1, 5),
        TransactionType::Expense,
        "Rent",
        -150.0,
        Currency::EUR,
        "bank",
    )];
    let wallets = vec![wallet("bank", WalletType::Bank, 100.0, Currency::EUR)];
    let rates = ExchangeRates::new(Currency::USD).with_rate(Currency::EUR, 0.5);

    let sheet = ReportAggregator::new(&transactions, &rates)
        .balance_sheet(&wallets, date(2024, 1, 31))
        .unwrap();

    assert!(sheet.assets.is_empty());
    assert_eq!(sheet.liabilities.len(), 1);
    assert_eq!(sheet.liabilities[0].amount, 100.0);
    assert!(sheet.is_balanced());
}

#[test]
fn test_rebased_rates() {
    let rates = ExchangeRates::new(Currency::USD)
        .with_rate(Currency::EUR, 0.5)
        .with_rate(Currency::JPY, 100.0);

    let rebased = rates.rebased(Currency::EUR).unwrap();

    assert_eq!(rebased.base, Currency::EUR);
    assert_eq!(rebased.rate(Currency::USD).unwrap(), 2.0);
    assert_eq!(rebased.rate(Currency::JPY).unwrap(), 200.0);
    assert_eq!(rebased.to_base(10.0, Currency::USD).unwrap(), 5.0);
}

#[test]
fn test_date_range_rejects_reversed_bounds() {
    assert!(DateRange::new(date(2024, 2, 1), date(2024, 1, 1)).is_err());
    assert!(DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).is_ok());
}
