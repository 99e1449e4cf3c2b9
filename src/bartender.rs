//! Queries the drink database and picks a recipe to serve.

use log::debug;
use rand::RngExt;
use reqwest::Client;

use crate::config::BotConfig;
use crate::error::BotError;
use crate::model::{Drink, DrinkList};
use crate::query::query_to_url;
use crate::tokenize::tokenize;

/// Finds drinks in the database from natural-language requests.
pub struct Bartender {
    client: Client,
    config: BotConfig,
}

impl Bartender {
    pub fn new(config: BotConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Run a free-text request through the whole pipeline: tokenize,
    /// build the query URL, fetch, and pick one of the matches.
    pub async fn find_drink(&self, request: &str) -> Result<Drink, BotError> {
        let query = tokenize(request);
        let url = query_to_url(&query, &self.config);
        debug!("query: {:?}", query);
        debug!("url: {}", url);

        let body = self.client.get(&url).send().await?.text().await?;
        let drinks: DrinkList = serde_json::from_str(&body)?;
        self.serve_drink(drinks)
    }

    /// Pick one drink uniformly at random and attach its image URL.
    /// An empty result set is the database's way of saying no recipe
    /// matched.
    fn serve_drink(&self, drinks: DrinkList) -> Result<Drink, BotError> {
        let mut drinks = drinks.result;
        if drinks.is_empty() {
            return Err(BotError::NoMatch);
        }
        let pick = rand::rng().random_range(0..drinks.len());
        let mut drink = drinks.swap_remove(pick);
        drink.image = format!(
            "{}/transparent-background-white/floor-reflection/200x200/{}.png",
            self.config.asset_url, drink.id
        );
        debug!("serving: {}", drink.id);
        Ok(drink)
    }
}
