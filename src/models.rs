use serde::Deserialize;

/// Request message for `ChuckNorrisService/GetJoke`
#[derive(Clone, PartialEq, prost::Message)]
pub struct JokeRequest {
    /// Optional joke category; empty means "any category"
    #[prost(string, tag = "1")]
    pub category: String,
}

/// Response message for `ChuckNorrisService/GetJoke`
#[derive(Clone, PartialEq, prost::Message)]
pub struct JokeResponse {
    #[prost(string, tag = "1")]
    pub joke: String,
    #[prost(bool, tag = "2")]
    pub success: bool,
    #[prost(string, tag = "3")]
    pub error_message: String,
}

/// Body returned by the upstream API for a random joke.
/// Only `value` is needed; the remaining fields are ignored.
#[derive(Debug, Deserialize)]
pub struct UpstreamJoke {
    pub value: String,
}

impl JokeRequest {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    /// The requested category, or `None` when the field was empty or omitted
    pub fn category(&self) -> Option<&str> {
        if self.category.is_empty() {
            None
        } else {
            Some(&self.category)
        }
    }
}

impl JokeResponse {
    pub fn joke(joke: String) -> Self {
        Self {
            joke,
            success: true,
            error_message: String::new(),
        }
    }

    pub fn failure(joke: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            joke: joke.into(),
            success: false,
            error_message: error_message.into(),
        }
    }
}
