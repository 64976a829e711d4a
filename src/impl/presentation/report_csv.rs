use fractic_server_error::ServerError;

use crate::{
    entities::{BalanceSheet, ProfitAndLoss},
    errors::CsvExportFailed,
};

use super::utils::format_plain;

/// CSV export of reports, one `section,line,amount` row per figure.
pub(crate) struct ReportCsvWriter;

impl ReportCsvWriter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn profit_and_loss(&self, report: &ProfitAndLoss) -> Result<String, ServerError> {
        let c = report.currency;
        let mut rows: Vec<(&str, &str, String)> = Vec::new();
        for (category, amount) in &report.income_by_category {
            rows.push(("income", category.as_str(), format_plain(*amount, c)));
        }
        rows.push(("income", "Total", format_plain(report.income_total, c)));
        for (category, amount) in &report.expense_by_category {
            rows.push(("expense", category.as_str(), format_plain(*amount, c)));
        }
        rows.push(("expense", "Total", format_plain(report.expense_total, c)));
        rows.push(("net", "Net profit", format_plain(report.net_profit, c)));
        self.write(rows)
    }

    pub(crate) fn balance_sheet(&self, report: &BalanceSheet) -> Result<String, ServerError> {
        let c = report.currency;
        let mut rows: Vec<(&str, &str, String)> = Vec::new();
        for line in &report.assets {
            rows.push(("asset", line.name.as_str(), format_plain(line.amount, c)));
        }
        rows.push(("asset", "Total", format_plain(report.total_assets, c)));
        for line in &report.liabilities {
            rows.push(("liability", line.name.as_str(), format_plain(line.amount, c)));
        }
        rows.push(("liability", "Total", format_plain(report.total_liabilities, c)));
        rows.push((
            "equity",
            "Retained earnings",
            format_plain(report.retained_earnings, c),
        ));
        rows.push((
            "equity",
            "Retained earnings adjustment",
            format_plain(report.retained_earnings_adjustment, c),
        ));
        rows.push(("equity", "Total", format_plain(report.total_equity, c)));
        self.write(rows)
    }

    fn write(&self, rows: Vec<(&str, &str, String)>) -> Result<String, ServerError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(["section", "line", "amount"])
            .map_err(|e| CsvExportFailed::with_debug(&e))?;
        for (section, line, amount) in rows {
            writer
                .write_record([section, line, amount.as_str()])
                .map_err(|e| CsvExportFailed::with_debug(&e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CsvExportFailed::with_debug(&e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| CsvExportFailed::with_debug(&e))
    }
}
