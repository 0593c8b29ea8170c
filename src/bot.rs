use crate::error::ChatError;
use crate::models::chat::MessageExchange;

use chrono::Utc;
use serde_json::Value as JsonValue;

const REPLY_PREFIX: &str = "Hello there! I'm a simple bot. I received your message: '";
const REPLY_SUFFIX: &str = "'. How can I help further?";

/// Extracts the raw `message` field. Whitespace-only, missing or non-string values are rejected;
/// the returned slice is the untrimmed original.
pub fn validate_message(body: &JsonValue) -> Result<&str, ChatError> {
    match body.get("message").and_then(JsonValue::as_str) {
        Some(message) if !message.trim().is_empty() => Ok(message),
        _ => Err(ChatError::MissingMessage),
    }
}

#[derive(Clone, Debug, Default)]
pub struct SimpleBot;

impl SimpleBot {
    pub fn new() -> Self {
        Self
    }

    pub fn reply_to(&self, message: &str) -> String {
        let mut reply =
            String::with_capacity(REPLY_PREFIX.len() + message.len() + REPLY_SUFFIX.len());
        reply.push_str(REPLY_PREFIX);
        reply.push_str(message);
        reply.push_str(REPLY_SUFFIX);
        reply
    }

    pub fn exchange(&self, body: &JsonValue) -> Result<MessageExchange, ChatError> {
        let text = validate_message(body)?;
        Ok(MessageExchange {
            text: text.to_string(),
            reply: self.reply_to(text),
            timestamp: Utc::now().timestamp_millis(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replies_with_fixed_template() {
        let bot = SimpleBot::new();
        assert_eq!(
            bot.reply_to("Hello bot, how are you?"),
            "Hello there! I'm a simple bot. I received your message: 'Hello bot, how are you?'. How can I help further?"
        );
    }

    #[test]
    fn keeps_surrounding_whitespace_verbatim() {
        let exchange = SimpleBot::new()
            .exchange(&json!({ "message": "  hi  " }))
            .unwrap();
        assert_eq!(exchange.text, "  hi  ");
        assert!(exchange.reply.contains("'  hi  '"));
    }

    #[test]
    fn rejects_missing_blank_and_non_string() {
        for body in [
            json!({}),
            json!({ "message": null }),
            json!({ "message": 42 }),
            json!({ "message": ["hi"] }),
            json!({ "message": "" }),
            json!({ "message": " \t\n " }),
            json!("message"),
        ] {
            assert_eq!(
                validate_message(&body),
                Err(ChatError::MissingMessage),
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn same_input_same_reply() {
        let bot = SimpleBot::new();
        let body = json!({ "message": "ping" });
        let first = bot.exchange(&body).unwrap();
        let second = bot.exchange(&body).unwrap();
        assert_eq!(first.reply, second.reply);
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn template_handles_quotes_and_unicode() {
        let reply = SimpleBot::new().reply_to("it's 🦀");
        assert_eq!(
            reply,
            "Hello there! I'm a simple bot. I received your message: 'it's 🦀'. How can I help further?"
        );
    }
}
