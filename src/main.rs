//! IS23 CamAdmin - Camera Fleet Admin Console
//!
//! Main entry point for the admin console binary.

use std::io::Write as _;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use is23_camadmin::camera_provider::{CameraProvider, NewCamera};
use is23_camadmin::state::{AppConfig, SessionState};
use is23_camadmin::Error;

#[derive(Parser, Debug)]
#[command(name = "is23-camadmin", about = "Camera fleet admin console")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List cameras registered on the management API
    List,

    /// Register a new camera
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        ip: String,
    },

    /// Delete a camera by identifier
    Delete { camera_id: String },

    /// List known installation locations
    Locations,

    /// Fleet overview: totals, daily trend, recent activity
    Overview,

    /// Interactive console sharing one session
    Console,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "is23_camadmin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting IS23 CamAdmin v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = AppConfig::default();
    tracing::info!(
        api_base_url = %config.api_base_url,
        operator = %config.operator,
        "Configuration loaded"
    );

    let session = SessionState::new(config);
    let provider = session.provider;

    match args.command {
        Command::List => cmd_list(&provider).await?,
        Command::Add { name, location, ip } => {
            cmd_add(&provider, NewCamera::new(name, location, ip)).await?
        }
        Command::Delete { camera_id } => cmd_delete(&provider, &camera_id).await?,
        Command::Locations => cmd_locations(&provider).await?,
        Command::Overview => {
            provider.fetch_cameras().await?;
            cmd_overview(&provider).await?
        }
        Command::Console => run_console(provider).await?,
    }

    Ok(())
}

async fn cmd_list(provider: &CameraProvider) -> anyhow::Result<()> {
    provider.fetch_cameras().await?;
    let cameras = provider.cameras().await;

    if cameras.is_empty() {
        println!("No cameras registered");
        return Ok(());
    }

    println!("{:<26} {:<20} {:<16} {}", "ID", "NAME", "IP", "LOCATION");
    for cam in cameras {
        println!(
            "{:<26} {:<20} {:<16} {}",
            cam.camera_id,
            cam.display_name(),
            cam.ipaddress,
            cam.location_name
        );
    }
    Ok(())
}

async fn cmd_add(provider: &CameraProvider, form: NewCamera) -> anyhow::Result<()> {
    match provider.add_camera(form).await {
        Ok(camera) => {
            println!(
                "Camera added: {} ({})",
                camera.display_name(),
                camera.camera_id
            );
            Ok(())
        }
        Err(Error::Form(errors)) => {
            for e in errors.fields() {
                eprintln!("  {}: {}", e.field, e.message);
            }
            Err(anyhow::anyhow!("camera form rejected"))
        }
        Err(e) => Err(e.into()),
    }
}

async fn cmd_delete(provider: &CameraProvider, camera_id: &str) -> anyhow::Result<()> {
    provider.delete_camera(camera_id).await?;
    println!("Camera deleted: {}", camera_id);
    Ok(())
}

async fn cmd_locations(provider: &CameraProvider) -> anyhow::Result<()> {
    let locations = provider.fetch_locations().await?;

    if locations.is_empty() {
        println!("No locations known");
        return Ok(());
    }

    println!("{:<24} {}", "LOCATION", "IP");
    for loc in locations {
        println!("{:<24} {}", loc.location_name, loc.ipaddress);
    }
    Ok(())
}

async fn cmd_overview(provider: &CameraProvider) -> anyhow::Result<()> {
    let overview = provider.overview().await;

    println!("Cameras total: {}", overview.total_cameras);
    println!("Added today:   {}", overview.added_today);

    println!("Registrations, last 7 days (cumulative):");
    for dc in &overview.daily_counts {
        println!("  {}  {:>3}  {}", dc.date, dc.count, "#".repeat(dc.count.min(40)));
    }

    if overview.recent_activity.is_empty() {
        println!("No session activity");
    } else {
        println!("Recent activity:");
        for entry in &overview.recent_activity {
            println!(
                "  {}  {}  {} by {}",
                entry.created_at.format("%Y-%m-%d %H:%M:%S"),
                entry.event,
                entry.camera_name,
                entry.created_by
            );
        }
    }
    Ok(())
}

async fn prompt_line(
    lines: &mut Lines<BufReader<Stdin>>,
    label: &str,
) -> anyhow::Result<Option<String>> {
    print!("{}", label);
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

/// Interactive console. All commands share one provider, so the activity
/// feed accumulates across the session; operation failures are printed
/// and never terminate the loop.
async fn run_console(provider: Arc<CameraProvider>) -> anyhow::Result<()> {
    println!("IS23 CamAdmin console. Type 'help' for commands, 'quit' to exit.");

    if let Err(e) = provider.fetch_cameras().await {
        eprintln!("warning: initial camera fetch failed: {}", e);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("camadmin> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        match parts.next().unwrap_or("") {
            "list" => {
                if let Err(e) = cmd_list(&provider).await {
                    eprintln!("error: {}", e);
                }
            }
            "add" => {
                let Some(name) = prompt_line(&mut lines, "Camera name: ").await? else {
                    break;
                };
                let Some(location) = prompt_line(&mut lines, "Location: ").await? else {
                    break;
                };
                let Some(ip) = prompt_line(&mut lines, "IP address: ").await? else {
                    break;
                };

                let form = NewCamera::new(name.trim(), location.trim(), ip.trim());
                if let Err(e) = cmd_add(&provider, form).await {
                    eprintln!("error: {}", e);
                }
            }
            "delete" => match parts.next() {
                Some(id) => {
                    if let Err(e) = cmd_delete(&provider, id).await {
                        eprintln!("error: {}", e);
                    }
                }
                None => eprintln!("usage: delete <camera-id>"),
            },
            "locations" => {
                if let Err(e) = cmd_locations(&provider).await {
                    eprintln!("error: {}", e);
                }
            }
            "overview" => {
                if let Err(e) = cmd_overview(&provider).await {
                    eprintln!("error: {}", e);
                }
            }
            "activity" => {
                let logs = provider.logs().await;
                if logs.is_empty() {
                    println!("No session activity");
                } else {
                    println!("{} entries, newest first:", logs.len());
                    for entry in logs {
                        println!(
                            "  {}  {}  {} by {}",
                            entry.created_at.format("%Y-%m-%d %H:%M:%S"),
                            entry.event,
                            entry.camera_name,
                            entry.created_by
                        );
                    }
                }
            }
            "help" => {
                println!("Commands:");
                println!("  list       refresh and show the camera list");
                println!("  add        register a camera (prompts for each field)");
                println!("  delete ID  delete a camera by identifier");
                println!("  locations  show known installation locations");
                println!("  overview   totals, daily trend, recent activity");
                println!("  activity   full session log");
                println!("  quit       exit the console");
            }
            "quit" | "exit" => break,
            other => eprintln!("unknown command '{}', try 'help'", other),
        }
    }

    println!("Bye");
    Ok(())
}
