//! Chat-facing layer: decides which channel messages deserve a drink and
//! posts the reply.
//!
//! The real-time chat connection itself lives outside this crate; whatever
//! drives it hands completed [`MessageEvent`]s to [`DrinkBot::handle`] and
//! provides a [`ChatClient`] for the replies.

use async_trait::async_trait;
use log::info;
use serde::Deserialize;

use crate::bartender::Bartender;
use crate::config::BotConfig;
use crate::error::BotError;
use crate::model::Drink;

/// A real-time message event as the chat platform delivers it.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub user: String,
}

/// Outbound side of the chat platform.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Post a plain-text message to a channel. `as_user` posts as the
    /// authenticated bot user rather than as an integration.
    async fn post_message(&self, channel: &str, text: &str, as_user: bool)
        -> Result<(), BotError>;
}

/// The bot: holds the chat client and a [`Bartender`], reacts to channel
/// messages that mention its name.
pub struct DrinkBot<C: ChatClient> {
    chat: C,
    bartender: Bartender,
    name: String,
    /// The bot's own user id, once the chat connection has resolved it.
    /// Without it the self-message check is skipped.
    self_id: Option<String>,
}

impl<C: ChatClient> DrinkBot<C> {
    pub fn new(chat: C, config: BotConfig) -> Self {
        let name = config.name.clone();
        Self {
            chat,
            bartender: Bartender::new(config),
            name,
            self_id: None,
        }
    }

    /// Record the bot's own user id so its replies don't trigger it.
    pub fn set_self_id(&mut self, id: impl Into<String>) {
        self.self_id = Some(id.into());
    }

    /// Greet a channel once the connection is up.
    pub async fn welcome(&self, channel: &str) -> Result<(), BotError> {
        let text = format!(
            "Anyone up for a refreshing beverage?\n\n\
             I can find you a specific recipe or you can give me an idea of \
             what you want and I can go find a drink that will match your taste.\n\n\
             Type `{} help` to understand how you can help me make your perfect drink!",
            self.name
        );
        self.chat.post_message(channel, &text, true).await
    }

    /// React to one inbound event. Messages that don't pass the gate are
    /// ignored; a query with no match becomes a friendly reply; transport
    /// failures propagate to the caller.
    pub async fn handle(&self, event: &MessageEvent) -> Result<(), BotError> {
        if !self.should_reply(event) {
            return Ok(());
        }
        info!("handling request from {} in {}", event.user, event.channel);

        let text = event.text.to_lowercase();
        let reply = if text.contains("help") {
            self.help_text()
        } else if text.contains("explain mvc") {
            self.mvc_text()
        } else {
            match self.bartender.find_drink(&event.text).await {
                Ok(drink) => template_recipe(&drink),
                Err(BotError::NoMatch) => BotError::NoMatch.to_string(),
                Err(other) => return Err(other),
            }
        };
        self.chat.post_message(&event.channel, &reply, true).await
    }

    /// A message deserves a reply when it is an actual chat message, sent
    /// to a channel, not by the bot itself, and mentions the bot's name.
    fn should_reply(&self, event: &MessageEvent) -> bool {
        self.is_chat_message(event)
            && is_channel_conversation(event)
            && !self.is_from_self(event)
            && self.is_mentioning_bot(event)
    }

    fn is_chat_message(&self, event: &MessageEvent) -> bool {
        event.kind == "message" && !event.text.is_empty()
    }

    fn is_from_self(&self, event: &MessageEvent) -> bool {
        self.self_id.as_deref() == Some(event.user.as_str())
    }

    fn is_mentioning_bot(&self, event: &MessageEvent) -> bool {
        event
            .text
            .to_lowercase()
            .contains(&self.name.to_lowercase())
    }

    fn help_text(&self) -> String {
        format!(
            "Here's a very specific example:\n\n\
             `{name} make me a sour drink with bourbon or tequila and pineapple juice \
             that takes average skill to make that was given a gte90 rating`\n\n\
             You probably don't want to be that specific as my recipe book isn't that \
             extensive but you get the gist, besides\n\n\
             `{name} make me a drink with coke`\n\nwill do most just fine.\n\n\
             Alternatively you can also request a specific drink in the following fashion:\n\
             `{name} I want a Negroni`\n",
            name = self.name
        )
    }

    fn mvc_text(&self) -> String {
        format!(
            "Nothing fancy: I listen for messages that mention `{}`, translate them \
             into a drink database query, and pour whatever comes back into the channel.",
            self.name
        )
    }
}

/// Channel ids start with 'C'; everything else is a DM or group chat.
fn is_channel_conversation(event: &MessageEvent) -> bool {
    event.channel.starts_with('C')
}

/// Render a selected drink into the plain-text reply posted to the channel.
pub fn template_recipe(drink: &Drink) -> String {
    let tastes = drink
        .tastes
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let ingredients = drink
        .ingredients
        .iter()
        .map(|i| i.text_plain.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n{name} ({rating}%)\n{image}\n{description}\n\nIngredients:\n{ingredients}\n\nTaste: {tastes}\n",
        name = drink.name,
        rating = drink.rating,
        image = drink.image,
        description = drink.description_plain,
        ingredients = ingredients,
        tastes = tastes,
    )
}
