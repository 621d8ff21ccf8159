use crate::quote::client::QuoteSource;
use crate::quote::error::QuoteFetchError;
use crate::quote::response::DisplayQuote;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

/// Exactly one of these exists per configured asset, success or failure.
#[derive(Debug)]
pub struct FetchOutcome {
    pub symbol: String,
    pub result: Result<DisplayQuote, QuoteFetchError>,
}

/// Fans one fetch task out per symbol and collects outcomes from a shared
/// channel until every symbol has reported back. A failed fetch delivers its
/// error outcome without disturbing the other in-flight tasks. Arrival order
/// is unspecified; the returned vec is sorted into the configured symbol
/// order so presentation stays deterministic.
pub async fn fetch_all<S>(source: Arc<S>, symbols: &[String]) -> Vec<FetchOutcome>
where
    S: QuoteSource + ?Sized,
{
    if symbols.is_empty() {
        return Vec::new();
    }

    let (sender, mut receiver) = mpsc::unbounded_channel();
    for symbol in symbols {
        let source = Arc::clone(&source);
        let sender = sender.clone();
        let symbol = symbol.clone();
        tokio::spawn(async move {
            let result = source.fetch(&symbol).await;
            // the receiver only hangs up once it has every outcome
            let _ = sender.send(FetchOutcome { symbol, result });
        });
    }
    drop(sender);

    let mut outcomes: Vec<FetchOutcome> = Vec::with_capacity(symbols.len());
    while outcomes.len() < symbols.len() {
        match receiver.recv().await {
            Some(outcome) => outcomes.push(outcome),
            None => {
                warn!(
                    "result channel closed after {} of {} outcomes",
                    outcomes.len(),
                    symbols.len()
                );
                break;
            }
        }
    }

    outcomes.sort_by_key(|outcome| {
        symbols
            .iter()
            .position(|symbol| *symbol == outcome.symbol)
            .unwrap_or(usize::MAX)
    });
    outcomes
}
