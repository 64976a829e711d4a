use chrono::NaiveDate;
use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading '{key}' from storage.", { key: &str });
define_client_error!(WriteError, "Error writing '{key}' to storage.", { key: &str });

// Parsing-related.
define_client_error!(InvalidSettingsJson, "Invalid stored settings (invalid JSON format).");
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_internal_error!(
    SettingsSerializationFailed,
    "Failed to serialize settings for storage."
);

// Session-related.
define_client_error!(InvalidCredentials, "Invalid credentials.");
define_client_error!(NotAuthenticated, "No user is signed in.");
define_client_error!(
    AccessDenied,
    "Access denied: missing capability '{capability}'.",
    { capability: &str }
);
define_client_error!(NoCompanySelected, "No company selected.");
define_client_error!(UnknownCompany, "Unknown company: {id}.", { id: &str });

// Report-related.
define_client_error!(
    InvalidDateRange,
    "Invalid date range: start ({start}) is after end ({end}).",
    { start: &NaiveDate, end: &NaiveDate }
);
define_client_error!(
    MissingExchangeRate,
    "No exchange rate for '{currency}' (base: {base}).",
    { currency: &str, base: &str }
);
define_client_error!(
    InvalidExchangeRate,
    "Invalid exchange rate for '{currency}': {rate}.",
    { currency: &str, rate: f64 }
);

// Presentation-related.
define_internal_error!(CsvExportFailed, "Failed to export report as CSV.");
