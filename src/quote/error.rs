use std::error;
use std::fmt;

#[derive(Debug)]
pub enum QuoteFetchError {
    HttpRequest(reqwest::Error),
    JsonParse(serde_json::Error),
    EmptyResponse(String),
}

impl fmt::Display for QuoteFetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QuoteFetchError::HttpRequest(ref err) => write!(f, "HTTP Request Error: {}", err),
            QuoteFetchError::JsonParse(ref err) => write!(f, "JSON Parse Error: {}", err),
            QuoteFetchError::EmptyResponse(ref symbol) => {
                write!(f, "Empty Quote Response: {}", symbol)
            }
        }
    }
}

impl error::Error for QuoteFetchError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            QuoteFetchError::HttpRequest(ref err) => Some(err),
            QuoteFetchError::JsonParse(ref err) => Some(err),
            QuoteFetchError::EmptyResponse(_) => None,
        }
    }
}

impl From<reqwest::Error> for QuoteFetchError {
    fn from(err: reqwest::Error) -> QuoteFetchError {
        QuoteFetchError::HttpRequest(err)
    }
}

impl From<serde_json::Error> for QuoteFetchError {
    fn from(err: serde_json::Error) -> QuoteFetchError {
        QuoteFetchError::JsonParse(err)
    }
}
