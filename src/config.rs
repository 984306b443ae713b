use anyhow::{anyhow, Result};
use std::env;
use url::Url;

const DEFAULT_TICKER_BASE_URL: &str = "https://api.coinmarketcap.com/v1/ticker/";
const DEFAULT_SERVER_PORT: u16 = 5000;

#[derive(Clone, Debug)]
pub struct Config {
    pub ticker_base_url: Url,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let ticker_base_url = env::var("TICKER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_TICKER_BASE_URL.to_string());

        // Url::join drops the last path segment when the base has no
        // trailing slash.
        let ticker_base_url = if ticker_base_url.ends_with('/') {
            ticker_base_url
        } else {
            format!("{}/", ticker_base_url)
        };

        let ticker_base_url = Url::parse(&ticker_base_url)
            .map_err(|e| anyhow!("invalid TICKER_BASE_URL: {}", e))?;

        let server_port = match env::var("SERVER_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| anyhow!("invalid SERVER_PORT: {}", e))?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        Ok(Config {
            ticker_base_url,
            server_port,
        })
    }
}
