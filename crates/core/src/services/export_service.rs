use chrono::NaiveDate;

use crate::models::snapshot::PortfolioSnapshot;

const CSV_HEADERS: [&str; 8] = [
    "Symbol",
    "Company Name",
    "Quantity",
    "Buy Price",
    "Current Price",
    "Threshold",
    "Return Value",
    "Last Updated",
];

/// Placeholder for absent optional columns.
const NOT_AVAILABLE: &str = "N/A";

/// Serializes a snapshot for the "Export CSV" button.
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Render the snapshot as CSV: one header row, one row per holding,
    /// 8 fixed columns.
    ///
    /// The company name is always wrapped in quotes so embedded commas
    /// survive. Known limitation: embedded quote characters in the company
    /// name are not escaped. Absent current price, threshold and timestamp
    /// render as `N/A`; an absent return value renders as `0`.
    #[must_use]
    pub fn holdings_to_csv(&self, snapshot: &PortfolioSnapshot) -> String {
        let mut csv = CSV_HEADERS.join(",");
        csv.push('\n');

        for holding in snapshot {
            let current_price = holding
                .current_price
                .map_or_else(|| NOT_AVAILABLE.to_string(), |p| p.to_string());
            let threshold = holding
                .threshold
                .map_or_else(|| NOT_AVAILABLE.to_string(), |t| t.to_string());
            let return_value = holding.return_value.unwrap_or(0.0).to_string();
            let last_updated = holding
                .last_updated
                .map_or_else(|| NOT_AVAILABLE.to_string(), |t| t.to_rfc3339());

            csv.push_str(&format!(
                "{},\"{}\",{},{},{},{},{},{}\n",
                holding.symbol,
                holding.company_name,
                holding.quantity,
                holding.buy_price,
                current_price,
                threshold,
                return_value,
                last_updated,
            ));
        }

        csv
    }

    /// File name for a download on `date`: `portfolio_data_YYYY-MM-DD.csv`.
    #[must_use]
    pub fn suggested_file_name(&self, date: NaiveDate) -> String {
        format!("portfolio_data_{}.csv", date.format("%Y-%m-%d"))
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
