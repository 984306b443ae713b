use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The closed set of intents this webhook fulfills. The conversational
/// platform classifies the user's utterance and sends us the intent name;
/// anything outside this set gets the fallback answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Hello,
    PriceOfCoin,
}

impl Intent {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hello" => Some(Intent::Hello),
            "price_of_coin" => Some(Intent::PriceOfCoin),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    pub result: IntentResult,
}

#[derive(Debug, Deserialize)]
pub struct IntentResult {
    pub metadata: IntentMetadata,
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct IntentMetadata {
    #[serde(rename = "intentName")]
    pub intent_name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WebhookResponse {
    pub speech: String,
    #[serde(rename = "displayText")]
    pub display_text: String,
}

impl WebhookResponse {
    /// End-of-turn utterance: the platform speaks and displays the same text.
    pub fn tell(speech: impl Into<String>) -> Self {
        let speech = speech.into();
        WebhookResponse {
            display_text: speech.clone(),
            speech,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn intent_names_map_to_variants() {
        assert_eq!(Intent::from_name("hello"), Some(Intent::Hello));
        assert_eq!(Intent::from_name("price_of_coin"), Some(Intent::PriceOfCoin));
        assert_eq!(Intent::from_name("Hello"), None);
        assert_eq!(Intent::from_name("order_pizza"), None);
    }

    #[test]
    fn request_deserializes_from_fulfillment_payload() {
        let payload = json!({
            "result": {
                "metadata": {"intentName": "price_of_coin"},
                "parameters": {"coin": "bitcoin"},
            }
        });

        let request: WebhookRequest = serde_json::from_value(payload).unwrap();

        assert_eq!(request.result.metadata.intent_name, "price_of_coin");
        assert_eq!(
            request.result.parameters.get("coin").map(String::as_str),
            Some("bitcoin")
        );
    }

    #[test]
    fn request_tolerates_missing_parameters() {
        let payload = json!({
            "result": {
                "metadata": {"intentName": "hello"},
            }
        });

        let request: WebhookRequest = serde_json::from_value(payload).unwrap();

        assert!(request.result.parameters.is_empty());
    }

    #[test]
    fn tell_mirrors_speech_into_display_text() {
        let response = WebhookResponse::tell("Oi!");

        assert_eq!(response.speech, "Oi!");
        assert_eq!(response.display_text, "Oi!");

        let rendered = serde_json::to_value(&response).unwrap();
        assert_eq!(rendered, json!({"speech": "Oi!", "displayText": "Oi!"}));
    }
}
