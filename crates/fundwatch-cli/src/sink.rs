//! Terminal presentation sink.

use colored::Colorize;

use fundwatch_portfolio::classify::GAUGE_CAP_PCT;
use fundwatch_portfolio::{
    FundPosition, Portfolio, PortfolioError, PortfolioResult, PresentationSink, StatusLine,
};

use crate::cli::OutputFormat;
use crate::output::{
    class_tag, format_amount, format_drawdown, format_weight, gauge_bar, print_divider,
    print_header, print_json, print_output, print_warning, signal_tag, HoldingRecord, HoldingRow,
    KeyValue, SignalRow,
};

const GAUGE_WIDTH: usize = 24;

/// Which part of the snapshot to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Summary, core legs, signal list and holdings table.
    Dashboard,
    /// Signal list only.
    Signals,
}

/// Writes snapshots to stdout in the selected format.
#[derive(Debug, Clone)]
pub struct TerminalSink {
    view: View,
    format: OutputFormat,
    quiet: bool,
    actionable_only: bool,
}

impl TerminalSink {
    /// Creates a sink for the given view and format.
    pub fn new(view: View, format: OutputFormat) -> Self {
        Self {
            view,
            format,
            quiet: false,
            actionable_only: false,
        }
    }

    /// Suppresses headers and the status footer in table output.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Limits the signal view to buy and strong buy funds.
    pub fn actionable_only(mut self, actionable_only: bool) -> Self {
        self.actionable_only = actionable_only;
        self
    }

    fn listed<'a>(&self, portfolio: &'a Portfolio) -> Vec<&'a FundPosition> {
        if self.view == View::Signals && self.actionable_only {
            portfolio.actionable()
        } else {
            portfolio.funds.iter().collect()
        }
    }

    fn render_dashboard(&self, portfolio: &Portfolio) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => print_json(portfolio),
            OutputFormat::Csv => {
                let rows: Vec<HoldingRecord<'_>> =
                    portfolio.funds.iter().map(HoldingRecord::from).collect();
                let mut wtr = csv::Writer::from_writer(std::io::stdout());
                for row in &rows {
                    wtr.serialize(row)?;
                }
                wtr.flush()?;
                Ok(())
            }
            OutputFormat::Table => {
                if !self.quiet {
                    print_header(&format!("Fund dashboard · {}", portfolio.as_of));
                }
                let summary = vec![
                    KeyValue::new("Total value", format_amount(portfolio.total_amount)),
                    KeyValue::from_weight("Overseas", portfolio.overseas_weight),
                    KeyValue::from_weight("Defense", portfolio.defense_weight),
                    KeyValue::from_weight("High beta", portfolio.high_beta_weight),
                ];
                print_output(&summary, self.format)?;

                self.print_core_legs(portfolio);
                self.print_signal_list(portfolio);

                if !self.quiet {
                    print_header("Holdings");
                }
                let rows: Vec<HoldingRow> = portfolio.funds.iter().map(HoldingRow::from).collect();
                print_output(&rows, self.format)?;

                if portfolio.dropped_rows > 0 && !self.quiet {
                    print_warning(&format!(
                        "{} malformed row(s) skipped",
                        portfolio.dropped_rows
                    ));
                }
                self.print_status(&portfolio.status_line());
                Ok(())
            }
        }
    }

    fn print_core_legs(&self, portfolio: &Portfolio) {
        if portfolio.core_legs.is_empty() {
            return;
        }
        if !self.quiet {
            print_header("Core legs");
        }
        for leg in &portfolio.core_legs {
            println!(
                "{:<16} {:<16} {:>8}  {}  {}",
                leg.label,
                leg.fund_name,
                format_weight(leg.weight),
                gauge_bar(leg.gauge_pct, GAUGE_CAP_PCT, GAUGE_WIDTH),
                leg.suggestion.text()
            );
        }
    }

    fn print_signal_list(&self, portfolio: &Portfolio) {
        if !self.quiet {
            print_header("Signals");
        }
        let funds = self.listed(portfolio);
        if funds.is_empty() {
            println!("No holdings.");
            return;
        }
        for fund in funds {
            println!(
                "{:<10} {:<20} {:>9}  {:<7} {}",
                class_tag(fund.asset_class()),
                fund.name(),
                format_drawdown(fund.record.drawdown),
                signal_tag(fund.signal()),
                fund.suggestion().text()
            );
        }
    }

    fn render_signals(&self, portfolio: &Portfolio) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Table => {
                self.print_signal_list(portfolio);
                self.print_status(&portfolio.status_line());
                Ok(())
            }
            OutputFormat::Json | OutputFormat::Csv => {
                let rows: Vec<SignalRow> = self
                    .listed(portfolio)
                    .into_iter()
                    .map(SignalRow::from)
                    .collect();
                print_output(&rows, self.format)
            }
        }
    }

    fn print_status(&self, status: &StatusLine) {
        if self.quiet {
            return;
        }
        print_divider();
        if status.is_online() {
            println!("{} {}", "●".green(), status);
        } else {
            println!("{} {}", "●".red(), status);
        }
    }
}

impl PresentationSink for TerminalSink {
    fn render(&mut self, portfolio: &Portfolio) -> PortfolioResult<()> {
        let result = match self.view {
            View::Dashboard => self.render_dashboard(portfolio),
            View::Signals => self.render_signals(portfolio),
        };
        result.map_err(|e| PortfolioError::render_failed(e.to_string()))
    }

    fn report_unavailable(&mut self, status: &StatusLine) -> PortfolioResult<()> {
        match self.format {
            OutputFormat::Json => {
                print_json(status).map_err(|e| PortfolioError::render_failed(e.to_string()))
            }
            OutputFormat::Table | OutputFormat::Csv => {
                print_warning(&status.to_string());
                Ok(())
            }
        }
    }
}
