use thiserror::Error;

/// Errors that can occur while finding and serving a drink
#[derive(Error, Debug)]
pub enum BotError {
    /// Failed to reach the drink database
    #[error("Failed to query the drink database: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The drink database returned a body that is not the expected JSON
    #[error("Failed to decode drink database response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The chat platform rejected an outbound message
    #[error("Failed to post chat message: {0}")]
    Chat(String),

    /// The query matched no recipes; the message is what the bot replies with
    #[error("Could not find you a drink, either you're too drunk to spell or just a little too needy!")]
    NoMatch,
}
