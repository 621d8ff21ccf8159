use serde::Deserialize;

/// One element of the quote API's JSON array body. Field names follow the
/// wire format verbatim; the pip/digit and 30-day fields are never read by
/// the renderer but are part of the shape. Missing fields decode to their
/// zero values, matching the API's habit of omitting them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuoteRecord {
    #[serde(rename = "_symbol")]
    pub symbol: String,
    #[serde(rename = "_ask_price")]
    pub ask_price: f64,
    #[serde(rename = "_bid_price")]
    pub bid_price: f64,
    #[serde(rename = "_ref_bid_price")]
    pub ref_bid_price: f64,
    #[serde(rename = "_high_bid_price")]
    pub high_bid_price: f64,
    #[serde(rename = "_low_bid_price")]
    pub low_bid_price: f64,
    #[serde(rename = "_bid_day_change")]
    pub bid_day_change: f64,
    #[serde(rename = "_bid_day_change_pcnt")]
    pub bid_day_change_pcnt: String,
    #[serde(rename = "_quote_tm")]
    pub quote_tm: i64,
    #[serde(rename = "_pips")]
    pub pips: f64,
    #[serde(rename = "_pips_lot")]
    pub pips_lot: f64,
    #[serde(rename = "_digits")]
    pub digits: f64,
    #[serde(rename = "_30d_min_bid_price")]
    pub month_min: f64,
    #[serde(rename = "_30d_max_bid_price")]
    pub month_max: f64,
}

/// Render-ready projection of one quote, built by the client after parsing.
/// The percent-change string is passed through exactly as the API sent it.
#[derive(Debug, Clone)]
pub struct DisplayQuote {
    pub symbol: String,
    pub time: String,
    pub bid: f64,
    pub percent_change: String,
    pub change: f64,
    pub high: f64,
    pub low: f64,
    pub web_url: String,
}
