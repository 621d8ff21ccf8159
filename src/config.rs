use chrono_tz::Tz;
use std::env;
use tracing::error;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,     // Prefix for the per-asset quote fetch URL
    pub web_url: String,     // Prefix for the per-asset deep-link URL
    pub timezone: Tz,        // Display time zone for quote timestamps and the trading window
    pub time_start: String,  // Trading window start boundary, zero-padded HHMM
    pub time_end: String,    // Trading window end boundary, zero-padded HHMM
    pub assets: Vec<String>, // Asset symbols to fetch, from the colon-separated ASSETS variable
}

impl Config {
    /// Reads every setting from the environment. Problems are logged and
    /// degraded, never fatal: a broken configuration yields an empty or
    /// closed run, not an aborted one.
    pub fn from_env() -> Self {
        let api_url = required_var("API_URL");
        let web_url = required_var("WEB_URL");

        let timezone = match env::var("CITY") {
            Ok(name) => match name.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!("CITY '{}' is not a known time zone, falling back to UTC", name);
                    Tz::UTC
                }
            },
            Err(_) => {
                warn!("CITY is not set, falling back to UTC");
                Tz::UTC
            }
        };

        let time_start = window_boundary("TIME_START", "0000");
        let time_end = window_boundary("TIME_END", "2400");

        let assets = split_assets(&env::var("ASSETS").unwrap_or_default());
        if assets.is_empty() {
            warn!("ASSETS is empty, nothing to fetch");
        }

        Config {
            api_url,
            web_url,
            timezone,
            time_start,
            time_end,
            assets,
        }
    }
}

fn required_var(name: &str) -> String {
    match env::var(name) {
        Ok(value) => value,
        Err(_) => {
            error!("{} is not set", name);
            String::new()
        }
    }
}

fn window_boundary(name: &str, default: &str) -> String {
    let value = match env::var(name) {
        Ok(value) => value,
        Err(_) => {
            warn!("{} is not set, defaulting to {}", name, default);
            return default.to_string();
        }
    };
    if !is_hhmm(&value) {
        warn!("{} '{}' is not a zero-padded HHMM string", name, value);
    }
    value
}

fn is_hhmm(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
}

fn split_assets(raw: &str) -> Vec<String> {
    raw.split(':')
        .filter(|symbol| !symbol.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_assets() {
        assert_eq!(vec!["EURUSD", "GBPUSD"], split_assets("EURUSD:GBPUSD"));
        assert_eq!(vec!["EURUSD"], split_assets("EURUSD"));
    }

    #[test]
    fn test_split_assets_drops_empty_segments() {
        assert_eq!(vec!["EURUSD"], split_assets("EURUSD:"));
        assert_eq!(vec!["EURUSD", "USDJPY"], split_assets(":EURUSD::USDJPY"));
        assert!(split_assets("").is_empty());
        assert!(split_assets(":::").is_empty());
    }

    #[test]
    fn test_is_hhmm() {
        assert!(is_hhmm("0000"));
        assert!(is_hhmm("0930"));
        assert!(is_hhmm("2359"));
        assert!(!is_hhmm("930"));
        assert!(!is_hhmm("09300"));
        assert!(!is_hhmm("09:30"));
        assert!(!is_hhmm(""));
    }
}
