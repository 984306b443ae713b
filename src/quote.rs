use async_trait::async_trait;
use reqwest::Client as HTTPClient;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error as ThisError;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(StatusCode),
    #[error("invalid ticker URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),
}

/// Current quote for a single coin. The upstream ticker reports both fields
/// as decimal strings but has been seen emitting bare numbers too; either
/// way the values are carried verbatim into the answer, never reformatted.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CoinQuote {
    #[serde(deserialize_with = "string_or_number")]
    pub price_usd: String,
    #[serde(deserialize_with = "string_or_number")]
    pub percent_change_24h: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[async_trait]
pub trait Interface: Send + Sync {
    async fn fetch_quote(&self, coin: String) -> Result<CoinQuote, Error>;
}

#[derive(Clone)]
pub struct Client {
    ticker_base_url: Url,
    http_client: HTTPClient,
}

impl Client {
    pub fn new(ticker_base_url: Url) -> Result<Self, reqwest::Error> {
        let http_client = HTTPClient::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Client {
            ticker_base_url,
            http_client,
        })
    }
}

#[async_trait]
impl Interface for Client {
    async fn fetch_quote(&self, coin: String) -> Result<CoinQuote, Error> {
        let ticker_url = self.ticker_base_url.join(&coin)?;

        let response = self.http_client.get(ticker_url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }

        let quotes: Vec<CoinQuote> = response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;

        first_quote(quotes)
    }
}

// The ticker endpoint answers with a one-element array per coin.
fn first_quote(quotes: Vec<CoinQuote>) -> Result<CoinQuote, Error> {
    quotes
        .into_iter()
        .next()
        .ok_or_else(|| Error::MalformedResponse("empty ticker array".to_string()))
}
