use std::collections::BTreeMap;

use chrono::NaiveDate;
use iso_currency::Currency;

use crate::{
    entities::{BalanceSheet, BalanceSheetLine, DateRange, ProfitAndLoss},
    presentation::{
        report_csv::ReportCsvWriter,
        report_printer::ReportPrinter,
        utils::{format_amount, format_plain},
    },
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn profit_and_loss() -> ProfitAndLoss {
    ProfitAndLoss {
        period: DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap(),
        currency: Currency::USD,
        income_by_category: BTreeMap::from([("Sales".to_owned(), 1234.5)]),
        expense_by_category: BTreeMap::from([("Rent".to_owned(), 400.0)]),
        income_total: 1234.5,
        expense_total: 400.0,
        net_profit: 834.5,
    }
}

fn balance_sheet() -> BalanceSheet {
    BalanceSheet {
        as_of: date(2024, 1, 31),
        currency: Currency::USD,
        assets: vec![BalanceSheetLine {
            wallet_id: "bank".to_owned(),
            name: "Main Bank".to_owned(),
            amount: 2500.0,
        }],
        liabilities: vec![],
        total_assets: 2500.0,
        total_liabilities: 0.0,
        retained_earnings: 300.0,
        retained_earnings_adjustment: 2200.0,
        total_equity: 2500.0,
    }
}

#[test]
fn test_format_amount() {
    assert_eq!(format_amount(1234567.891, Currency::USD), "1,234,567.89 USD");
    assert_eq!(format_amount(-0.5, Currency::USD), "-0.50 USD");
    assert_eq!(format_amount(1500.4, Currency::JPY), "1,500 JPY");
    assert_eq!(format_amount(-0.001, Currency::USD), "0.00 USD");
    assert_eq!(format_plain(12.5, Currency::USD), "12.50");
}

#[test]
fn test_print_profit_and_loss() {
    let out = ReportPrinter::new().print_profit_and_loss(&profit_and_loss());

    assert!(out.starts_with("; --- Profit & Loss: 2024-01-01 to 2024-01-31 "));
    assert!(out.contains("1,234.50 USD"));
    assert!(out.lines().any(|l| l.starts_with("Net profit") && l.ends_with("834.50 USD")));
}

#[test]
fn test_print_wraps_long_category_names() {
    let mut report = profit_and_loss();
    let long = "Professional services rendered to very important customers ".repeat(2);
    report.income_by_category = BTreeMap::from([(long.trim().to_owned(), 10.0)]);

    let out = ReportPrinter::new().print_profit_and_loss(&report);

    assert!(out.lines().all(|l| l.chars().count() <= 80));
    assert!(out.lines().any(|l| l.ends_with("10.00 USD") && l.starts_with("  ")));
}

#[test]
fn test_print_balance_sheet() {
    let out = ReportPrinter::new().print_balance_sheet(&balance_sheet());

    assert!(out.contains("Main Bank"));
    assert!(out.contains("  (none)"));
    assert!(out
        .lines()
        .any(|l| l.starts_with("  Retained earnings adjustment") && l.ends_with("2,200.00 USD")));
    assert!(out
        .lines()
        .any(|l| l.starts_with("Total liabilities and equity") && l.ends_with("2,500.00 USD")));
}

#[test]
fn test_profit_and_loss_csv() {
    let csv = ReportCsvWriter::new()
        .profit_and_loss(&profit_and_loss())
        .unwrap();

    assert_eq!(
        csv,
        "section,line,amount\n\
         income,Sales,1234.50\n\
         income,Total,1234.50\n\
         expense,Rent,400.00\n\
         expense,Total,400.00\n\
         net,Net profit,834.50\n"
    );
}

#[test]
fn test_balance_sheet_csv_quotes_when_needed() {
    let mut sheet = balance_sheet();
    sheet.assets[0].name = "Bank, main".to_owned();

    let csv = ReportCsvWriter::new().balance_sheet(&sheet).unwrap();

    assert!(csv.contains("asset,\"Bank, main\",2500.00\n"));
    assert!(csv.ends_with("equity,Total,2500.00\n"));
}
