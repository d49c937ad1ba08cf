//! Output formatting utilities.

use colored::{ColoredString, Colorize};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use fundwatch_portfolio::{AssetClass, FundPosition, Signal};

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No holdings.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

// =============================================================================
// VALUE FORMATTING
// =============================================================================

/// Formats a unit price or cost: 4 decimals, `--` when zero.
pub fn format_price(value: f64) -> String {
    if value == 0.0 {
        "--".to_string()
    } else {
        format!("{value:.4}")
    }
}

/// Formats a share count.
pub fn format_shares(value: f64) -> String {
    format!("{value:.2}")
}

/// Formats a money amount.
pub fn format_amount(value: f64) -> String {
    format!("¥{value:.2}")
}

/// Formats a fraction as a percentage.
pub fn format_weight(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Formats a drawdown fraction, `--` when undefined.
pub fn format_drawdown(drawdown: Option<f64>) -> String {
    drawdown.map_or_else(|| "--".to_string(), |d| format!("{:.2}%", d * 100.0))
}

/// Horizontal gauge for a core leg. Full width at the gauge cap.
pub fn gauge_bar(gauge_pct: f64, cap_pct: f64, width: usize) -> String {
    let ratio = if cap_pct > 0.0 {
        (gauge_pct / cap_pct).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Signal code colored by severity.
pub fn signal_tag(signal: Signal) -> ColoredString {
    match signal {
        Signal::Normal => signal.code().normal(),
        Signal::Watch => signal.code().yellow(),
        Signal::Buy => signal.code().green(),
        Signal::StrongBuy => signal.code().green().bold(),
    }
}

/// Asset class name colored by class.
pub fn class_tag(class: AssetClass) -> ColoredString {
    match class {
        AssetClass::Core => class.name().cyan(),
        AssetClass::Defense => class.name().blue(),
        AssetClass::HighBeta => class.name().magenta(),
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints a divider line.
pub fn print_divider() {
    println!("{}", "─".repeat(60).dimmed());
}

// =============================================================================
// ROWS
// =============================================================================

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair formatted as a percentage of a fraction.
    pub fn from_weight(key: impl Into<String>, fraction: f64) -> Self {
        Self::new(key, format_weight(fraction))
    }
}

/// Display row for the holdings table.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct HoldingRow {
    #[tabled(rename = "Class")]
    pub class: String,
    #[tabled(rename = "Fund")]
    pub name: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Cost")]
    pub cost: String,
    #[tabled(rename = "Shares")]
    pub shares: String,
    #[tabled(rename = "Value")]
    pub amount: String,
    #[tabled(rename = "3M High")]
    pub high_3m: String,
    #[tabled(rename = "Drawdown")]
    pub drawdown: String,
    #[tabled(rename = "Weight")]
    pub weight: String,
    #[tabled(rename = "Signal")]
    pub signal: String,
    #[tabled(rename = "Suggestion")]
    pub suggestion: String,
}

impl From<&FundPosition> for HoldingRow {
    fn from(position: &FundPosition) -> Self {
        let record = &position.record;
        Self {
            class: position.asset_class().name().to_string(),
            name: record.fund_name.clone(),
            price: format_price(record.current_value),
            cost: format_price(record.cost),
            shares: format_shares(record.shares),
            amount: format_amount(record.amount),
            high_3m: format_price(record.high_3m),
            drawdown: format_drawdown(record.drawdown),
            weight: format_weight(record.current_weight),
            signal: position.signal().label().to_string(),
            suggestion: position.suggestion().text().to_string(),
        }
    }
}

/// Machine-readable holdings row for CSV output.
#[derive(Debug, Clone, Serialize)]
pub struct HoldingRecord<'a> {
    pub fund_name: &'a str,
    pub code: &'a str,
    pub asset_class: &'static str,
    pub cost: f64,
    pub shares: f64,
    pub current_value: f64,
    pub high_3m: f64,
    pub amount: f64,
    pub drawdown: Option<f64>,
    pub current_weight: f64,
    pub signal: &'static str,
    pub suggestion: &'static str,
}

impl<'a> From<&'a FundPosition> for HoldingRecord<'a> {
    fn from(position: &'a FundPosition) -> Self {
        let record = &position.record;
        Self {
            fund_name: &record.fund_name,
            code: &record.code,
            asset_class: position.asset_class().code(),
            cost: record.cost,
            shares: record.shares,
            current_value: record.current_value,
            high_3m: record.high_3m,
            amount: record.amount,
            drawdown: record.drawdown,
            current_weight: record.current_weight,
            signal: position.signal().code(),
            suggestion: position.suggestion().text(),
        }
    }
}

/// One entry of the signal list.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SignalRow {
    #[tabled(rename = "Fund")]
    pub fund_name: String,
    #[tabled(rename = "Class")]
    pub asset_class: String,
    #[tabled(rename = "Drawdown")]
    pub drawdown: String,
    #[tabled(rename = "Signal")]
    pub signal: String,
    #[tabled(rename = "Suggestion")]
    pub suggestion: String,
}

impl From<&FundPosition> for SignalRow {
    fn from(position: &FundPosition) -> Self {
        Self {
            fund_name: position.name().to_string(),
            asset_class: position.asset_class().code().to_string(),
            drawdown: format_drawdown(position.record.drawdown),
            signal: position.signal().code().to_string(),
            suggestion: position.suggestion().text().to_string(),
        }
    }
}
