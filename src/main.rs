use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;

use dessert_catalog::view::{self, LoadState};
use dessert_catalog::{CatalogConfig, RecipeClient};

#[derive(Parser)]
#[command(name = "dessert-catalog", version, about = "Browse dessert recipes from TheMealDB")]
struct Cli {
    #[arg(long, global = true, help = "Catalog API root (overrides config)")]
    base_url: Option<String>,
    #[arg(long, global = true, help = "Request timeout in seconds")]
    timeout: Option<u64>,
    #[arg(long, global = true, help = "Number of ingredient slots to read")]
    slots: Option<usize>,
    #[arg(long, global = true, help = "Print JSON instead of text")]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all desserts, sorted by name
    List,
    /// Show one recipe's instructions and ingredients
    Show {
        #[arg(help = "Recipe id as printed by `list`")]
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = CatalogConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = Some(timeout);
    }
    if let Some(slots) = cli.slots {
        config.ingredient_slots = slots;
    }
    debug!("{:?}", config);

    let client = RecipeClient::builder().from_config(&config).build()?;

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let loaded = match cli.command {
        Command::List => {
            let state = view::load_dessert_list(&client).await;
            report(
                &state,
                cli.json,
                |recipes: &Vec<_>| view::render_list(recipes),
                &mut out,
                &mut err,
            )?
        }
        Command::Show { id } => {
            let state = view::load_recipe_detail(&client, &id).await;
            report(&state, cli.json, view::render_detail, &mut out, &mut err)?
        }
    };

    Ok(if loaded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Print a resolved screen state. Loaded values go to `out` (as JSON when
/// asked), anything else goes to `err`. Returns whether the value loaded.
fn report<T: serde::Serialize>(
    state: &LoadState<T>,
    json: bool,
    render: impl Fn(&T) -> String,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    match state {
        LoadState::Loaded(value) if json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
            Ok(true)
        }
        LoadState::Loaded(_) => {
            write!(out, "{}", view::render_state(state, render))?;
            Ok(true)
        }
        _ => {
            write!(err, "{}", view::render_state(state, render))?;
            Ok(false)
        }
    }
}
