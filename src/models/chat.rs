use serde::Serialize;

/// One request/response pair. Lives only for the duration of a single POST.
#[derive(Clone, Debug)]
pub struct MessageExchange {
    pub text: String,
    pub reply: String,
    pub timestamp: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<MessageExchange> for ChatReply {
    fn from(exchange: MessageExchange) -> Self {
        Self {
            reply: exchange.reply,
        }
    }
}
