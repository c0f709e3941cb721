mod api;
mod cli_messages;
mod config;
mod consts;
mod error_classifier;
mod events;
mod format;
mod logging;
mod model;
mod report;
mod session;
mod state;
mod ui;
mod view_model;
mod workers;

use crate::config::{ApiConfig, Config, get_config_path};
use crate::session::headless_mode::collect_state;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Base URL of the analytics backend
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Log fetch events to the console and print a text snapshot instead of the TUI
        #[arg(long, default_value = "false")]
        headless: bool,

        /// Enable background colors in the dashboard
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,

        /// Connect and request timeout in seconds
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },
    /// Fetch once and print the dashboard figures
    Snapshot {
        /// Base URL of the analytics backend
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print chart descriptors and the summary as JSON
        #[arg(long, action = clap::ArgAction::SetTrue)]
        json: bool,

        /// Connect and request timeout in seconds
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },
    /// Save the backend base URL to the config file
    SetApiUrl {
        /// Base URL of the analytics backend
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Delete the config file
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    logging::init_logging(matches!(
        args.command,
        Command::Start {
            headless: false,
            ..
        }
    ));

    match args.command {
        Command::Start {
            api_url,
            headless,
            with_background,
            timeout_secs,
        } => {
            let api_config = resolve_api_config(api_url, timeout_secs, &config_path);
            start(api_config, headless, with_background).await
        }
        Command::Snapshot {
            api_url,
            json,
            timeout_secs,
        } => {
            let api_config = resolve_api_config(api_url, timeout_secs, &config_path);
            snapshot(api_config, json).await
        }
        Command::SetApiUrl { url } => {
            let url = url.trim();
            if url.is_empty() {
                print_cmd_error!("Invalid API URL", "URL must not be empty");
                return Err(Box::from("empty API URL"));
            }
            Config::new(url.to_string()).save(&config_path)?;
            print_cmd_success!("API URL saved", "{}", config_path.display());
            Ok(())
        }
        Command::ClearConfig => {
            print_cmd_info!("Clearing configuration", "{}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

fn resolve_api_config(
    api_url: Option<String>,
    timeout_secs: Option<u64>,
    config_path: &std::path::Path,
) -> ApiConfig {
    let api_config = ApiConfig::resolve(api_url, config_path);
    match timeout_secs {
        Some(secs) => api_config.with_timeout(Duration::from_secs(secs)),
        None => api_config,
    }
}

/// Starts the dashboard, interactively or headless.
async fn start(
    api_config: ApiConfig,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let session = setup_session(api_config);
    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, with_background).await
    }
}

/// Fetches once and prints the result. Fetch failures go to stderr and leave
/// their part of the output at its initial value.
async fn snapshot(api_config: ApiConfig, json: bool) -> Result<(), Box<dyn Error>> {
    let session = setup_session(api_config);
    let state = collect_state(session, |event| {
        if event.event_type == events::EventType::Error && event.should_display() {
            eprintln!("{}", event);
        }
    })
    .await;

    if json {
        println!("{}", report::render_json(&state)?);
    } else {
        print!("{}", report::render_text(&state));
    }
    Ok(())
}
