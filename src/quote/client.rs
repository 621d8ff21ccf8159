use crate::config::Config;
use crate::quote::error::QuoteFetchError;
use crate::quote::response::DisplayQuote;
use crate::quote::response::QuoteRecord;
use crate::useragent;
use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;
use std::time::Duration;
use tracing::debug;

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Anything that can resolve an asset symbol into a display quote. The HTTP
/// client below is the production implementation; tests substitute their own.
#[async_trait]
pub trait QuoteSource: Send + Sync + 'static {
    async fn fetch(&self, symbol: &str) -> Result<DisplayQuote, QuoteFetchError>;
}

#[derive(Clone, Debug)]
pub struct QuoteClient {
    http: reqwest::Client,
    api_url: String,
    web_url: String,
    timezone: Tz,
}

impl QuoteClient {
    /// Builds the one HTTP client for the run. Every concurrent fetch shares
    /// it; each request carries the same randomized User-Agent and a 5-second
    /// budget.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(useragent::random())
            .build()?;
        Ok(QuoteClient {
            http,
            api_url: config.api_url.clone(),
            web_url: config.web_url.clone(),
            timezone: config.timezone,
        })
    }

    fn display_quote(&self, symbol: &str, record: QuoteRecord) -> DisplayQuote {
        DisplayQuote {
            symbol: symbol.to_string(),
            time: local_quote_time(record.quote_tm, self.timezone),
            bid: record.bid_price,
            percent_change: record.bid_day_change_pcnt,
            change: record.bid_day_change,
            high: record.high_bid_price,
            low: record.low_bid_price,
            web_url: format!("{}?a={}", self.web_url, symbol),
        }
    }
}

#[async_trait]
impl QuoteSource for QuoteClient {
    async fn fetch(&self, symbol: &str) -> Result<DisplayQuote, QuoteFetchError> {
        // the trailing dot is part of the API's URL scheme
        let url = format!("{}{}.", self.api_url, symbol);
        debug!("fetching quote for {} from {}", symbol, url);
        let response = self.http.get(&url).send().await?;
        let body = response.text().await?;
        let record = first_quote(&body, symbol)?;
        Ok(self.display_quote(symbol, record))
    }
}

/// Decodes the JSON array body and takes its first element. An empty array
/// is an error result like any other, not a fault.
fn first_quote(body: &str, symbol: &str) -> Result<QuoteRecord, QuoteFetchError> {
    let quotes: Vec<QuoteRecord> = serde_json::from_str(body)?;
    quotes
        .into_iter()
        .next()
        .ok_or_else(|| QuoteFetchError::EmptyResponse(symbol.to_string()))
}

fn local_quote_time(epoch_millis: i64, timezone: Tz) -> String {
    match DateTime::from_timestamp_millis(epoch_millis) {
        Some(tm) => tm.with_timezone(&timezone).format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_quote_takes_the_first_element() {
        let body = r#"[
            {"_symbol": "EURUSD", "_bid_price": 1.08325},
            {"_symbol": "EURUSD", "_bid_price": 1.08999}
        ]"#;
        let record = first_quote(body, "EURUSD").unwrap();
        assert_eq!(1.08325, record.bid_price);
    }

    #[test]
    fn test_first_quote_rejects_malformed_body() {
        let err = first_quote("<html>503</html>", "EURUSD").unwrap_err();
        assert!(matches!(err, QuoteFetchError::JsonParse(_)));
    }

    #[test]
    fn test_first_quote_rejects_empty_array() {
        let err = first_quote("[]", "EURUSD").unwrap_err();
        match err {
            QuoteFetchError::EmptyResponse(symbol) => assert_eq!("EURUSD", symbol),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_local_quote_time_in_configured_zone() {
        // 2023-11-14 22:13:20 UTC
        assert_eq!(
            "22:13:20",
            local_quote_time(1700000000000, chrono_tz::UTC)
        );
        assert_eq!(
            "07:13:20",
            local_quote_time(1700000000000, chrono_tz::Asia::Tokyo)
        );
    }

    #[test]
    fn test_local_quote_time_out_of_range() {
        assert_eq!("--:--:--", local_quote_time(i64::MAX, chrono_tz::UTC));
    }

    #[test]
    fn test_display_quote_builds_deep_link() {
        let client = QuoteClient {
            http: reqwest::Client::new(),
            api_url: "https://quotes.example.com/api/".to_string(),
            web_url: "https://quotes.example.com/chart".to_string(),
            timezone: chrono_tz::UTC,
        };
        let record = QuoteRecord {
            symbol: "EURUSD".to_string(),
            bid_price: 1.08325,
            bid_day_change: -0.0012,
            bid_day_change_pcnt: "-0.11%".to_string(),
            high_bid_price: 1.0851,
            low_bid_price: 1.0811,
            quote_tm: 1700000000000,
            ..Default::default()
        };
        let quote = client.display_quote("EURUSD", record);
        assert_eq!("https://quotes.example.com/chart?a=EURUSD", quote.web_url);
        assert_eq!("-0.11%", quote.percent_change);
        assert_eq!("22:13:20", quote.time);
        assert_eq!(1.08325, quote.bid);
        assert_eq!(-0.0012, quote.change);
    }
}
