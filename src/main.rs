use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use map_canvas::camera::Point;
use map_canvas::input::Button;
use map_canvas::render::DrawList;
use map_canvas::zone::{RoomId, ZoneId, ZoneRooms};
use mudmap::config::{ConfigError, ViewerConfig};
use mudmap::db::{MapStore, SqliteMapStore, StoreError};
use mudmap::svg::SvgSurface;
use mudmap::view::MapView;
use serde::Serialize;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("map store failed: {0}")]
    Store(#[from] StoreError),
    #[error("room {0} not found")]
    RoomNotFound(RoomId),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "mudmap", about = "Render a MUD zone map from a room database")]
struct Cli {
    #[command(flatten)]
    config: ViewerConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the configured room, apply clicks in order, and render the view.
    Render {
        /// Primary-button press at surface coordinates `X,Y`. Repeatable.
        #[arg(long = "click", value_parser = parse_click)]
        clicks: Vec<Point>,

        #[arg(long, value_enum, default_value_t = Format::Svg)]
        format: Format,

        #[arg(long, help = "Output file path; stdout when omitted")]
        out: Option<PathBuf>,
    },
    /// Print one room with its exits as JSON.
    Room { id: RoomId },
    /// Print every room of a zone as JSON, ordered by id.
    Zone { zone_id: ZoneId },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Svg,
    Json,
}

fn parse_click(raw: &str) -> Result<Point, String> {
    let (x, y) = raw.split_once(',').ok_or_else(|| format!("expected X,Y, got `{raw}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{raw}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{raw}`: {e}"))?;
    Ok(Point::new(x, y))
}

fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "ignoring unreadable .env"),
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    load_dotenv();

    let cli = Cli::parse();
    cli.config.validate()?;

    let store = Arc::new(SqliteMapStore::open(&cli.config.database_url).await?);
    let result = match cli.command {
        Command::Render { clicks, format, out } => {
            run_render(&cli.config, Arc::clone(&store), &clicks, format, out).await
        }
        Command::Room { id } => run_room(store.as_ref(), id).await,
        Command::Zone { zone_id } => run_zone(store.as_ref(), zone_id).await,
    };
    store.close().await;
    result
}

async fn run_render(
    config: &ViewerConfig,
    store: Arc<SqliteMapStore>,
    clicks: &[Point],
    format: Format,
    out: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut view = MapView::new(store, Handle::current(), config);
    while view.is_loading() {
        view.next_load().await;
    }
    for &click in clicks {
        view.on_pointer_down(click, Button::Primary);
    }

    let rendered = match format {
        Format::Svg => {
            let mut svg = SvgSurface::new(config.width, config.height);
            let stats = view.render(&mut svg);
            info!(?stats, "rendered svg");
            svg.finish()
        }
        Format::Json => {
            let mut list = DrawList::new();
            let stats = view.render(&mut list);
            info!(?stats, "rendered draw list");
            serde_json::to_string_pretty(&list)?
        }
    };

    match out {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            info!(path = %path.display(), "map written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

async fn run_room(store: &dyn MapStore, id: RoomId) -> Result<(), CliError> {
    let room = store.room_by_id(id).await?.ok_or(CliError::RoomNotFound(id))?;
    print_json(&room)
}

async fn run_zone(store: &dyn MapStore, zone_id: ZoneId) -> Result<(), CliError> {
    let zone: ZoneRooms = store.rooms_by_zone_id(zone_id).await?.into_values().collect();
    print_json(&zone.sorted_rooms())
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
