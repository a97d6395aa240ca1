//! Command-line front end for the car catalog.
//!
//! Each subcommand constructs the matching flow controller, feeds it the
//! user's input as intents, and drains the flow's channel until it
//! settles, which is the same loop a graphical shell would run, minus the
//! widgets.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use motorpool::api::{CarService, HttpCarService};
use motorpool::capability::{
    CameraSource, CapabilityError, LocationSource, MapSurface, MediaStore,
};
use motorpool::config::Config;
use motorpool::flow::create::{CreateController, CreateIntent, CreatePhase};
use motorpool::flow::detail::{DetailController, DetailIntent, DetailPhase};
use motorpool::flow::listing::{ListingController, ListingIntent};
use motorpool::model::Place;

#[derive(Parser)]
#[command(name = "motorpool", about = "Manage a small catalog of cars over its REST API")]
struct Cli {
    /// Override the API base URL from configuration.
    #[arg(long, global = true)]
    api: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every car in the catalog.
    List,
    /// Show one car, including its location.
    Show { id: String },
    /// Add a car to the catalog.
    Add {
        #[arg(long)]
        name: String,
        /// Year range, e.g. 2020/2020.
        #[arg(long)]
        year: String,
        /// Licence plate, e.g. ABC-1234.
        #[arg(long)]
        licence: String,
        #[arg(long)]
        image_url: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        long: f64,
    },
    /// Replace the licence on an existing car.
    Relicence { id: String, licence: String },
    /// Delete a car.
    Remove { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("motorpool=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load().context("loading configuration")?;
    if let Some(api) = cli.api {
        config.api.base_url = api;
    }
    config.validate()?;

    let service: Arc<dyn CarService> = Arc::new(HttpCarService::new(&config.api));

    match cli.command {
        Command::List => run_list(service).await,
        Command::Show { id } => run_show(service, id).await,
        Command::Add {
            name,
            year,
            licence,
            image_url,
            lat,
            long,
        } => run_add(service, name, year, licence, image_url, Place { lat, long }).await,
        Command::Relicence { id, licence } => {
            run_detail_action(service, id, DetailIntent::SubmitLicence(licence)).await
        }
        Command::Remove { id } => run_detail_action(service, id, DetailIntent::Delete).await,
    }
}

async fn run_list(service: Arc<dyn CarService>) -> anyhow::Result<()> {
    let (mut controller, mut intents) = ListingController::new(service);
    controller.dispatch(ListingIntent::Refresh);
    while controller.state().refreshing {
        let Some(intent) = intents.recv().await else { break };
        controller.dispatch(intent);
    }
    if let Some(notice) = &controller.state().notice {
        anyhow::bail!("{notice}");
    }
    for car in &controller.state().cars {
        println!("{}  {}  {}  {}", car.id, car.name, car.year, car.licence);
    }
    Ok(())
}

async fn run_show(service: Arc<dyn CarService>, id: String) -> anyhow::Result<()> {
    let (mut controller, mut intents) = DetailController::open(service, Arc::new(ConsoleMap), id);
    // The "map" is stdout, so it is ready before the data is.
    controller.dispatch(DetailIntent::MapReady);
    loop {
        match controller.state().phase {
            DetailPhase::Closed => break,
            DetailPhase::Ready if controller.state().marker_placed => break,
            _ => {}
        }
        let Some(intent) = intents.recv().await else { break };
        controller.dispatch(intent);
    }
    if let Some(notice) = &controller.state().notice {
        anyhow::bail!("{notice}");
    }
    let Some(car) = &controller.state().car else {
        anyhow::bail!("car not loaded");
    };
    println!("name:    {}", car.name);
    println!("year:    {}", car.year);
    println!("licence: {}", car.licence);
    if !car.image_url.is_empty() {
        println!("image:   {}", car.image_url);
    }
    Ok(())
}

async fn run_add(
    service: Arc<dyn CarService>,
    name: String,
    year: String,
    licence: String,
    image_url: String,
    place: Place,
) -> anyhow::Result<()> {
    let (mut controller, mut intents) = CreateController::new(
        service,
        Arc::new(NoLocationFix),
        Arc::new(UnsupportedCamera),
        Arc::new(UnsupportedStore),
    );
    controller.dispatch(CreateIntent::Opened);
    controller.dispatch(CreateIntent::NameChanged(name));
    controller.dispatch(CreateIntent::YearChanged(year));
    controller.dispatch(CreateIntent::LicenceChanged(licence));
    controller.dispatch(CreateIntent::ImageUrlChanged(image_url));
    controller.dispatch(CreateIntent::LocationPicked(place));
    controller.dispatch(CreateIntent::Save);
    loop {
        if controller.state().phase == CreatePhase::Closed {
            break;
        }
        if let Some(notice) = &controller.state().notice {
            anyhow::bail!("{notice}");
        }
        let Some(intent) = intents.recv().await else { break };
        controller.dispatch(intent);
    }
    if let Some(notice) = &controller.state().notice {
        println!("{notice}");
    }
    Ok(())
}

/// Shared driver for the two detail-screen actions: wait for the car to
/// load, fire the action, wait for the screen to close.
async fn run_detail_action(
    service: Arc<dyn CarService>,
    id: String,
    action: DetailIntent,
) -> anyhow::Result<()> {
    let (mut controller, mut intents) = DetailController::open(service, Arc::new(ConsoleMap), id);
    while controller.state().phase == DetailPhase::Loading {
        let Some(intent) = intents.recv().await else { break };
        controller.dispatch(intent);
    }
    if controller.state().phase == DetailPhase::Closed {
        let notice = controller.state().notice.clone().unwrap_or_default();
        anyhow::bail!("{notice}");
    }
    controller.dispatch(action);
    loop {
        if controller.state().phase == DetailPhase::Closed {
            break;
        }
        if let Some(notice) = &controller.state().notice {
            anyhow::bail!("{notice}");
        }
        let Some(intent) = intents.recv().await else { break };
        controller.dispatch(intent);
    }
    if let Some(notice) = &controller.state().notice {
        println!("{notice}");
    }
    Ok(())
}

/// The CLI's map widget: markers land on stdout.
struct ConsoleMap;

#[async_trait]
impl MapSurface for ConsoleMap {
    async fn place_marker(&self, place: Place, title: &str) -> Result<(), CapabilityError> {
        println!("{title} is at {}, {}", place.lat, place.long);
        Ok(())
    }
}

/// No device location in a terminal; the flow treats that as "no hint".
struct NoLocationFix;

#[async_trait]
impl LocationSource for NoLocationFix {
    async fn last_known(&self) -> Result<Place, CapabilityError> {
        Err(CapabilityError::Unavailable("device location"))
    }
}

struct UnsupportedCamera;

#[async_trait]
impl CameraSource for UnsupportedCamera {
    async fn capture(&self) -> Result<PathBuf, CapabilityError> {
        Err(CapabilityError::Unavailable("camera"))
    }
}

struct UnsupportedStore;

#[async_trait]
impl MediaStore for UnsupportedStore {
    async fn upload(&self, _path: &Path) -> Result<String, CapabilityError> {
        Err(CapabilityError::Unavailable("photo upload"))
    }
}
