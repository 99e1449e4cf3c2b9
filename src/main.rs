use std::env;

use drinkbot::{template_recipe, BotError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // The request is whatever follows the program name
    let request = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if request.is_empty() {
        return Err("Please provide a drink request, e.g. `drinkbot make me a drink with coke`".into());
    }

    match drinkbot::find_drink(&request).await {
        Ok(drink) => println!("{}", template_recipe(&drink)),
        Err(BotError::NoMatch) => println!("{}", BotError::NoMatch),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
