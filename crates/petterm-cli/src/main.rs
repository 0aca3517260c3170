//! `pet`: a virtual pet that lives in your terminal and grows with your commits.
//!
//! Every invocation loads the save file, catches the pet up on the time that
//! passed, runs one command and writes the result back.

mod app;
mod commands;
mod display;
mod tutorial;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use petterm_types::{CareAction, Species};

use crate::app::App;

#[derive(Parser)]
#[command(name = "pet")]
#[command(about = "A virtual pet that lives in your terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Adopt a new pet
    Init {
        /// Pet name (will prompt if not provided)
        #[arg(short, long)]
        name: Option<String>,
        /// Species: cat, dog, rabbit, hamster, bird or dragon
        #[arg(short, long)]
        species: Option<Species>,
    },

    /// Show your pet's stats and mood
    Status,

    /// Feed your pet
    Feed(ActionArgs),

    /// Play with your pet
    Play(ActionArgs),

    /// Clean your pet
    Clean(ActionArgs),

    /// Give your pet medicine
    Heal(ActionArgs),

    /// Put your pet to bed or wake it up
    Sleep,

    /// Use an item from your inventory
    Use {
        /// Item id, e.g. "fish"
        item: String,
    },

    /// Catch up on the time that passed
    Sync,

    /// List the items you own
    #[command(alias = "inv")]
    Inventory,

    /// Browse or buy items
    #[command(alias = "store")]
    Shop {
        #[command(subcommand)]
        action: Option<ShopAction>,
    },

    /// Reward new Git commits in the current repository
    #[command(alias = "commits")]
    Git,

    /// Take care of every need at once
    #[command(aliases = ["auto", "all"])]
    Care,

    /// Show the getting started guide
    Tutorial,

    /// Say goodbye to your pet
    Release {
        /// Skip the confirmation prompts
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage config.yaml
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Show the logo
    Hello,
}

#[derive(Args)]
struct ActionArgs {
    /// Use this item instead of choosing from a menu
    #[arg(short, long)]
    item: Option<String>,
    /// Skip items and do the plain action
    #[arg(short, long, conflicts_with = "item")]
    basic: bool,
}

#[derive(Subcommand)]
enum ShopAction {
    /// Buy an item
    Buy {
        /// Item id, e.g. "fish"
        item: String,
        /// How many to buy
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active settings
    Show,
    /// Write a default config.yaml if none exists
    Init,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut app = App::open()?;

    match cli.command {
        None | Some(Commands::Hello) => commands::hello(&app),
        Some(Commands::Init { name, species }) => commands::init(&mut app, name, species),
        Some(Commands::Status) => commands::status(&mut app),
        Some(Commands::Feed(args)) => {
            commands::care_action(&mut app, CareAction::Feed, args.item.as_deref(), args.basic)
        }
        Some(Commands::Play(args)) => {
            commands::care_action(&mut app, CareAction::Play, args.item.as_deref(), args.basic)
        }
        Some(Commands::Clean(args)) => {
            commands::care_action(&mut app, CareAction::Clean, args.item.as_deref(), args.basic)
        }
        Some(Commands::Heal(args)) => {
            commands::care_action(&mut app, CareAction::Heal, args.item.as_deref(), args.basic)
        }
        Some(Commands::Sleep) => commands::sleep(&mut app),
        Some(Commands::Use { item }) => commands::use_item(&mut app, &item),
        Some(Commands::Sync) => commands::sync(&mut app),
        Some(Commands::Inventory) => commands::inventory(&mut app),
        Some(Commands::Shop { action }) => match action {
            None => commands::shop(&mut app),
            Some(ShopAction::Buy { item, quantity }) => commands::buy(&mut app, &item, quantity),
        },
        Some(Commands::Git) => commands::git(&mut app),
        Some(Commands::Care) => commands::care(&mut app),
        Some(Commands::Tutorial) => commands::tutorial(&mut app),
        Some(Commands::Release { yes }) => commands::release(&mut app, yes),
        Some(Commands::Config { action }) => match action {
            None | Some(ConfigAction::Show) => commands::config_show(&app),
            Some(ConfigAction::Init) => commands::config_init(&app),
        },
    }
}
