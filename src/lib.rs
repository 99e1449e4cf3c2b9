pub mod bartender;
pub mod bot;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod tokenize;

pub use bartender::Bartender;
pub use bot::{template_recipe, ChatClient, DrinkBot, MessageEvent};
pub use config::BotConfig;
pub use error::BotError;
pub use model::{Drink, DrinkList, Ingredient, Taste};

/// Find a drink for a free-text request using configuration from the
/// environment. Convenience wrapper over [`Bartender::find_drink`].
pub async fn find_drink(request: &str) -> Result<Drink, BotError> {
    let config = BotConfig::load()?;
    Bartender::new(config).find_drink(request).await
}
