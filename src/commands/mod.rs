use std::{collections::HashSet, sync::Arc};

use crate::{
    services::{
        database::{MeasurementStorageService, SupabaseService},
        geocoding::{GeocodingService, GoogleMapsService},
        StoredMeasurement,
    },
    DisplaySettings, MapBotError, MeasureSessions,
};

use log::*;
use map_measure::{Coordinate, DisplayOptions, Measurement, Path, Shape};
use serenity::{
    framework::standard::{
        help_commands::with_embeds,
        macros::{command, group, help},
        Args, CommandGroup, CommandResult, HelpOptions,
    },
    model::{channel::Message, id::UserId},
    prelude::*,
};

#[help]
async fn help(
    context: &Context,
    msg: &Message,
    args: Args,
    help_options: &'static HelpOptions,
    groups: &[&'static CommandGroup],
    owners: HashSet<UserId>,
) -> CommandResult {
    let _ = with_embeds(context, msg, args, help_options, groups, owners).await?;
    Ok(())
}

#[group]
#[commands(point, place, undo, finish, cancel, path, history, clear)]
struct General;

async fn say(ctx: &Context, msg: &Message, content: String) {
    if let Err(why) = msg.channel_id.say(&ctx.http, content).await {
        warn!("Error sending message: {:?}", why);
    }
}

async fn display_options(ctx: &Context) -> Arc<DisplayOptions> {
    let data = ctx.data.read().await;
    data.get::<DisplaySettings>().cloned().unwrap_or_default()
}

async fn sessions(ctx: &Context) -> Result<<MeasureSessions as TypeMapKey>::Value, MapBotError> {
    let data = ctx.data.read().await;
    data.get::<MeasureSessions>()
        .cloned()
        .ok_or(MapBotError::SessionsUnavailable)
}

/// Running totals while a path is still being built.
fn progress_report(display: &DisplayOptions, path: &Path) -> String {
    let summary = display.short_display(&path.measure());
    let mut lines = vec![format!("{} point(s).", path.len())];

    if let Some(segment) = path.segment_lengths().last() {
        lines.push(format!("Last segment: {}", display.segment_display(*segment)));
        lines.push(format!("Path distance: {}", summary.length_display));
    }
    if path.shape() == Shape::Polygon {
        lines.push(format!("Area: {}", summary.area_display));
    }
    lines.join("\n")
}

fn finished_report(
    display: &DisplayOptions,
    path: &Path,
    measurement: &Measurement,
) -> Result<String, MapBotError> {
    let summary = display.display(measurement);
    let report = match (path.shape(), path.last()) {
        (Shape::Point, Some(point)) => format!("Point location: {}", point),
        (Shape::Line, _) => format!("Path distance: {}", summary.length_display),
        (Shape::Polygon, _) => format!(
            "Perimeter: {}\nArea: {}",
            summary.length_display, summary.area_display
        ),
        _ => return Err(MapBotError::NoMeasurementInProgress),
    };
    Ok(report)
}

async fn add_point(ctx: &Context, msg: &Message, point: Coordinate) -> CommandResult {
    let display = display_options(ctx).await;
    let reply = {
        let sessions = sessions(ctx).await?;
        let mut sessions = sessions.lock().await;
        let path = sessions.entry(msg.author.id).or_default();
        if path.push(point) {
            debug!("User {} added point {}.", msg.author.id, point);
            progress_report(&display, path)
        } else {
            format!("{} is already the last point.", point)
        }
    };

    say(ctx, msg, reply).await;
    Ok(())
}

#[command]
#[description("Add a point to your measurement.")]
#[usage("[lat,lng]")]
#[example("39.953338,-75.163471")]
async fn point(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let point: Coordinate = args.rest().trim().parse()?;
    add_point(ctx, msg, point).await
}

#[command]
#[description("Look up a place and add it to your measurement.")]
#[usage("[place]")]
#[example("City Hall, Philadelphia")]
async fn place(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let geocoding_service: GoogleMapsService = GeocodingService::new()?;
    let point = geocoding_service.geocode(args.rest()).await?;
    add_point(ctx, msg, point).await
}

#[command]
#[description = "Remove the last point of your measurement."]
async fn undo(ctx: &Context, msg: &Message) -> CommandResult {
    let display = display_options(ctx).await;
    let reply = {
        let sessions = sessions(ctx).await?;
        let mut sessions = sessions.lock().await;
        let path = sessions
            .get_mut(&msg.author.id)
            .ok_or(MapBotError::NoMeasurementInProgress)?;
        path.pop().ok_or(MapBotError::NoMeasurementInProgress)?;
        if path.is_empty() {
            "All points removed. Add a point to start again.".to_string()
        } else {
            progress_report(&display, path)
        }
    };

    say(ctx, msg, reply).await;
    Ok(())
}

#[command]
#[description = "Finish your measurement, closing it into an area if it has three or more points."]
async fn finish(ctx: &Context, msg: &Message) -> CommandResult {
    let display = display_options(ctx).await;
    let path = {
        let sessions = sessions(ctx).await?;
        let mut sessions = sessions.lock().await;
        sessions.remove(&msg.author.id)
    }
    .filter(|path| !path.is_empty())
    .ok_or(MapBotError::NoMeasurementInProgress)?;

    let measurement = path.measure_closed();
    say(ctx, msg, finished_report(&display, &path, &measurement)?).await;

    let storage_service: SupabaseService = MeasurementStorageService::new()?;
    let record = StoredMeasurement::new(
        msg.author.id.0.to_string(),
        msg.author.name.to_string(),
        &path,
        measurement,
    );
    storage_service.save_measurement(&record).await?;

    Ok(())
}

#[command]
#[description = "Throw away your measurement in progress."]
async fn cancel(ctx: &Context, msg: &Message) -> CommandResult {
    let removed = {
        let sessions = sessions(ctx).await?;
        let mut sessions = sessions.lock().await;
        sessions.remove(&msg.author.id)
    };

    let reply = match removed {
        Some(path) if !path.is_empty() => "Measurement discarded.",
        _ => "No measurement in progress.",
    };
    say(ctx, msg, reply.to_string()).await;
    Ok(())
}

#[command]
#[description("Measure a whole path at once, without saving it.")]
#[usage("[lat,lng]...[lat,lng]")]
#[example("0,0 0,1 1,1 1,0")]
async fn path(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let path = args
        .rest()
        .split_whitespace()
        .map(str::parse::<Coordinate>)
        .collect::<Result<Path, _>>()?;
    if path.is_empty() {
        return Err(MapBotError::MissingPoints.into());
    }

    let display = display_options(ctx).await;
    let measurement = path.measure_closed();
    say(ctx, msg, finished_report(&display, &path, &measurement)?).await;
    Ok(())
}

#[command]
#[description = "List your saved measurements."]
async fn history(ctx: &Context, msg: &Message) -> CommandResult {
    let author_id = msg.author.id.0.to_string();

    let storage_service: SupabaseService = MeasurementStorageService::new()?;
    let saved = storage_service.get_measurements(&author_id).await?;

    let display = display_options(ctx).await;
    let reply = if saved.is_empty() {
        "No saved measurements.".to_string()
    } else {
        saved
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let summary = display.display(&record.measurement());
                match record.shape() {
                    Shape::Polygon => format!(
                        "{}. {} points: {}, {}",
                        i + 1,
                        record.points.len(),
                        summary.length_display,
                        summary.area_display
                    ),
                    _ => format!(
                        "{}. {} point(s): {}",
                        i + 1,
                        record.points.len(),
                        summary.length_display
                    ),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    say(ctx, msg, reply).await;
    Ok(())
}

#[command]
#[description = "Delete your saved measurements."]
#[usage("")]
async fn clear(_: &Context, msg: &Message) -> CommandResult {
    let author_id = format!("{}", msg.author.id.0);

    let storage_service: SupabaseService = MeasurementStorageService::new()?;
    storage_service.delete_measurements(&author_id).await?;

    Ok(())
}
