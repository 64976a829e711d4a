use std::collections::BTreeMap;

use iso_currency::Currency;

use crate::entities::{BalanceSheet, BalanceSheetLine, ProfitAndLoss};

use super::utils::format_amount;

const WIDTH: usize = 80;
const AMOUNT_WIDTH: usize = 24;
const LABEL_WIDTH: usize = WIDTH - AMOUNT_WIDTH - 4;

pub(crate) struct ReportPrinter;

impl ReportPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_profit_and_loss(&self, report: &ProfitAndLoss) -> String {
        let mut out = String::new();
        self.print_header(
            &mut out,
            &format!(
                "Profit & Loss: {} to {}",
                report.period.start(),
                report.period.end()
            ),
        );

        self.print_section(&mut out, "Income");
        self.print_categories(&mut out, &report.income_by_category, report.currency);
        self.print_line(&mut out, "Total income", report.income_total, report.currency);
        out.push('\n');

        self.print_section(&mut out, "Expenses");
        self.print_categories(&mut out, &report.expense_by_category, report.currency);
        self.print_line(&mut out, "Total expenses", report.expense_total, report.currency);
        out.push('\n');

        self.print_rule(&mut out);
        self.print_line(&mut out, "Net profit", report.net_profit, report.currency);
        out
    }

    pub(crate) fn print_balance_sheet(&self, report: &BalanceSheet) -> String {
        let mut out = String::new();
        self.print_header(&mut out, &format!("Balance Sheet as of {}", report.as_of));

        self.print_section(&mut out, "Assets");
        self.print_wallets(&mut out, &report.assets, report.currency);
        self.print_line(&mut out, "Total assets", report.total_assets, report.currency);
        out.push('\n');

        self.print_section(&mut out, "Liabilities");
        self.print_wallets(&mut out, &report.liabilities, report.currency);
        self.print_line(
            &mut out,
            "Total liabilities",
            report.total_liabilities,
            report.currency,
        );
        out.push('\n');

        self.print_section(&mut out, "Equity");
        self.print_line(
            &mut out,
            "  Retained earnings",
            report.retained_earnings,
            report.currency,
        );
        self.print_line(
            &mut out,
            "  Retained earnings adjustment",
            report.retained_earnings_adjustment,
            report.currency,
        );
        self.print_line(&mut out, "Total equity", report.total_equity, report.currency);
        out.push('\n');

        self.print_rule(&mut out);
        self.print_line(
            &mut out,
            "Total liabilities and equity",
            report.total_liabilities + report.total_equity,
            report.currency,
        );
        out
    }

    fn print_header(&self, out: &mut String, title: &str) {
        out.push_str(&format!("; --- {} ", title));
        let used = title.len() + 7;
        out.push_str(&"-".repeat(WIDTH.saturating_sub(used)));
        out.push_str("\n\n");
    }

    fn print_section(&self, out: &mut String, name: &str) {
        out.push_str(name);
        out.push('\n');
    }

    fn print_rule(&self, out: &mut String) {
        out.push_str(&"=".repeat(WIDTH));
        out.push('\n');
    }

    fn print_categories(&self, out: &mut String, categories: &BTreeMap<String, f64>, c: Currency) {
        if categories.is_empty() {
            out.push_str("  (none)\n");
        }
        for (category, amount) in categories {
            self.print_line(out, &format!("  {}", category), *amount, c);
        }
    }

    fn print_wallets(&self, out: &mut String, lines: &[BalanceSheetLine], c: Currency) {
        if lines.is_empty() {
            out.push_str("  (none)\n");
        }
        for line in lines {
            self.print_line(out, &format!("  {}", line.name), line.amount, c);
        }
    }

    /// Long labels wrap; the amount goes on the last wrapped line.
    fn print_line(&self, out: &mut String, label: &str, amount: f64, currency: Currency) {
        let indent: String = label.chars().take_while(|c| *c == ' ').collect();
        let options = textwrap::Options::new(LABEL_WIDTH)
            .initial_indent(&indent)
            .subsequent_indent(&indent);
        let wrapped = textwrap::wrap(label.trim_start(), options);
        let (last, rest) = match wrapped.split_last() {
            Some((last, rest)) => (last.to_string(), rest),
            None => (String::new(), &[][..]),
        };
        for line in rest {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!(
            "{:<label_width$}    {:>amount_width$}\n",
            last,
            format_amount(amount, currency),
            label_width = LABEL_WIDTH,
            amount_width = AMOUNT_WIDTH,
        ));
    }
}
