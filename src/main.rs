use std::{collections::HashMap, sync::Arc};

use log::{info, trace};

use map_measure::{DisplayOptions, Path};

use serenity::{
    async_trait,
    framework::StandardFramework,
    http::Http,
    model::prelude::{Ready, UserId},
    prelude::{Client, Context, EventHandler, GatewayIntents, TypeMapKey},
};

use thiserror::Error;
use tokio::sync::Mutex;

mod commands;
mod config;
mod services;

use crate::{
    commands::{GENERAL_GROUP, HELP},
    config::Config,
};

pub type GenericError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum MapBotError {
    #[error("No location found for that place.")]
    LocationNotFound,
    #[error("No measurement in progress. Start one with `point` or `place`.")]
    NoMeasurementInProgress,
    #[error("Measurement sessions are not available.")]
    SessionsUnavailable,
    #[error("Give at least one point as 'lat,lng'.")]
    MissingPoints,
}

/// Paths being built, one per user.
pub struct MeasureSessions;

impl TypeMapKey for MeasureSessions {
    type Value = Arc<Mutex<HashMap<UserId, Path>>>;
}

pub struct DisplaySettings;

impl TypeMapKey for DisplaySettings {
    type Value = Arc<DisplayOptions>;
}

struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

#[tokio::main]
async fn main() -> Result<(), GenericError> {
    env_logger::builder()
        .filter_module("map_measure", log::LevelFilter::Trace)
        .init();
    trace!("Logger init with level TRACE.");

    let config = Config::from_env()?;
    trace!("Loaded config: {:?}", config.display);

    let http = Http::new(&config.discord_token);
    let bot_id = http.get_current_user().await?.id;

    let framework = StandardFramework::new()
        .configure(|c| {
            c.with_whitespace(true)
                .on_mention(Some(bot_id))
                .prefix("!measure")
        })
        .help(&HELP)
        .group(&GENERAL_GROUP);

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;
    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler)
        .framework(framework)
        .type_map_insert::<MeasureSessions>(Arc::new(Mutex::new(HashMap::default())))
        .type_map_insert::<DisplaySettings>(Arc::new(config.display))
        .await?;

    client.start().await?;
    Ok(())
}
