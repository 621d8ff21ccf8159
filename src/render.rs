use crate::menu::Plugin;
use crate::quote::fetch::FetchOutcome;
use crate::quote::response::DisplayQuote;
use bigdecimal::BigDecimal;
use bigdecimal::FromPrimitive;
use bigdecimal::RoundingMode;
use std::num::NonZeroU64;

const GREEN: &str = "green";
const RED: &str = "red";

const SIG_DIGITS: u64 = 5;

/// Builds the full menu for an open-market run. Errors become red dropdown
/// lines; successes get a status line plus two dropdown detail lines, all
/// colored by the sign of the day change.
pub fn build_menu(outcomes: &[FetchOutcome]) -> Plugin {
    let mut plugin = Plugin::new();
    if outcomes.is_empty() {
        plugin.status_line("No assets configured").dropdown(false);
        return plugin;
    }
    for outcome in outcomes {
        match &outcome.result {
            Ok(quote) => quote_lines(&mut plugin, quote),
            Err(err) => {
                plugin.line(&format!("{}", err)).color(RED);
            }
        }
    }
    plugin
}

/// The single static line shown outside the trading window.
pub fn closed_menu() -> Plugin {
    let mut plugin = Plugin::new();
    plugin.status_line("Markets closed").dropdown(false);
    plugin
}

/// Single red status line for failures that precede any fetch.
pub fn error_menu(message: &str) -> Plugin {
    let mut plugin = Plugin::new();
    plugin.status_line(message).dropdown(false).color(RED);
    plugin
}

fn quote_lines(plugin: &mut Plugin, quote: &DisplayQuote) {
    let color = change_color(quote.change);

    let status = format!(
        "{}: {} {}",
        quote.symbol,
        sig5(quote.bid),
        quote.percent_change
    );
    plugin.status_line(&status).dropdown(false).color(color);

    let detail = format!(
        "{} - {}: {} {}",
        quote.time,
        quote.symbol,
        sig5(quote.bid),
        sig5(quote.change)
    );
    plugin.line(&detail).href(&quote.web_url).color(color);

    let range = format!(
        "{}: {} {} [{} - {}]",
        quote.symbol,
        sig5(quote.bid),
        quote.percent_change,
        sig5(quote.low),
        sig5(quote.high)
    );
    plugin
        .line(&range)
        .alternate(true)
        .href(&quote.web_url)
        .color(color);
}

/// The sign decides the color; zero counts as non-negative.
fn change_color(change: f64) -> &'static str {
    if change < 0.0 {
        RED
    } else {
        GREEN
    }
}

/// Five significant digits, trailing zeros trimmed. NaN and infinities have
/// no decimal form and fall back to the plain float formatting.
fn sig5(value: f64) -> String {
    match (BigDecimal::from_f64(value), NonZeroU64::new(SIG_DIGITS)) {
        (Some(decimal), Some(precision)) => decimal
            .with_precision_round(precision, RoundingMode::HalfEven)
            .normalized()
            .to_string(),
        _ => value.to_string(),
    }
}
