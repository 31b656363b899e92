use clap::Parser;
use color_eyre::Result;
use nearby_places::{
    api::HttpPlaceSearch,
    app::App,
    config::Config,
    db::SqliteCoordinateStore,
    events::{Event, EventHandler},
    location, logging,
    pipeline::SearchPipeline,
    ui,
};
use std::{path::PathBuf, sync::Arc};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "nearby-places", about = "Find places near you")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Look up the current position via IP geolocation before searching
    #[arg(long)]
    locate: bool,

    /// Save the current position before searching
    #[arg(long)]
    save: bool,

    /// Reload the saved position before searching
    #[arg(long)]
    load: bool,

    /// What to search for (may be empty)
    #[arg(default_value = "")]
    query: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = Config::load(&cli.config);
    let _log_guard = logging::initialize_logging(&config.logging);

    let store = SqliteCoordinateStore::open(&config.storage.database_path)?;
    let mut app = App::new(store, config.location.default_coordinate())?;
    let mut events = EventHandler::new();

    if cli.locate || config.location.use_ip_geolocation {
        if let Some(fix) = location::get_current_location(&config.location.lookup_ip).await {
            app.handle_event(Event::LiveFix(fix))?;
        }
    }

    if cli.load {
        match app.load_saved_location()? {
            Some(c) => println!("Loaded saved location ({}, {})", c.latitude, c.longitude),
            None => println!("No saved location"),
        }
    }
    if cli.save {
        let c = app.save_current_location()?;
        println!("Saved location ({}, {})", c.latitude, c.longitude);
    }

    let pipeline = Arc::new(SearchPipeline::new(HttpPlaceSearch::new(&config.api)?));
    let ticket = app.spawn_search(pipeline, cli.query, events.tx.clone());
    info!("Started search {:?}", ticket);

    while app.is_searching {
        let Some(event) = events.next().await else {
            break;
        };
        if let Err(e) = app.handle_event(event) {
            error!("Search failed: {:?}", e);
            return Err(e.into());
        }
    }

    print!("{}", ui::render(app.map_focus().as_ref(), &app.results));
    Ok(())
}
