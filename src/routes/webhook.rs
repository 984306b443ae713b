use crate::coins;
use crate::intent::{Intent, WebhookRequest, WebhookResponse};
use crate::quote;
use crate::quote::Interface as QuoteInterface;
use actix_web::{post, web, HttpResponse};
use log::{error, info};
use mockall::mock;
use std::sync::Arc;

#[post("/")]
pub async fn handler(
    request: web::Json<WebhookRequest>,
    quote_client: web::Data<Arc<dyn quote::Interface>>,
) -> HttpResponse {
    let intent_name = request.result.metadata.intent_name.as_str();

    let response = match Intent::from_name(intent_name) {
        Some(Intent::Hello) => hello(),
        Some(Intent::PriceOfCoin) => {
            let coin = request
                .result
                .parameters
                .get("coin")
                .map(String::as_str)
                .unwrap_or("");

            price_of_coin(coin, quote_client.get_ref().as_ref()).await
        }
        None => {
            info!("unknown intent name: {}", intent_name);

            WebhookResponse::tell("Desculpe, não entendi o que você quis dizer.")
        }
    };

    // the platform treats non-200 as fulfillment failure
    HttpResponse::Ok().json(response)
}

fn hello() -> WebhookResponse {
    WebhookResponse::tell(format!(
        "Oi! Eu sou o CryptoBot e posso lhe dar o preço atual das seguintes moedas: {}",
        coins::listing()
    ))
}

async fn price_of_coin(coin: &str, quote_client: &dyn quote::Interface) -> WebhookResponse {
    if !coins::is_available(coin) {
        return WebhookResponse::tell(format!(
            "Desculpe, ainda não conheço essa moeda.. Pergunte-me sobre: {}",
            coins::listing()
        ));
    }

    match quote_client.fetch_quote(coin.to_string()).await {
        Ok(coin_quote) => WebhookResponse::tell(format!(
            "O preço atual da {} é {} USD. Variou {}% nas ultimas 24 horas.",
            coin.to_uppercase(),
            coin_quote.price_usd,
            coin_quote.percent_change_24h,
        )),
        Err(e) => {
            error!("failed to fetch quote for {}: {}", coin, e);

            WebhookResponse::tell(
                "Desculpe, não consegui consultar o preço agora. Tente novamente mais tarde.",
            )
        }
    }
}

mock! {
    pub QuoteInterfaceMock {}

    #[async_trait::async_trait]
    impl QuoteInterface for QuoteInterfaceMock {
        async fn fetch_quote(&self, coin: String) -> Result<quote::CoinQuote, quote::Error>;
    }
}
