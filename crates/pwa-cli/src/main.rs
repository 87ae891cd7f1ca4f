use clap::{Parser, Subcommand};
use pwa::{
    commands::{
        detect::{self, DetectCommand},
        init::{self, InitCommand},
        instructions::{self, InstructionsCommand},
        meta::{self, MetaCommand},
        update::{self, UpdateCommand},
    },
    errors::CliError,
    logger, GlobalOpts,
};

#[derive(Parser)]
#[command(name = "pwa")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Progressive Web App metadata tool",
    long_about = "pwa generates web app manifests from pwa.config.json, keeps them in sync without \
                  touching custom members, and prints head tags and install instructions."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create pwa.config.json, or a manifest with --manifest
    Init(InitCommand),
    /// Regenerate the manifest from pwa.config.json, keeping custom members
    Update(UpdateCommand),
    /// Print install instructions for a platform
    Instructions(InstructionsCommand),
    /// Print the PWA head tags derived from pwa.config.json
    Meta(MetaCommand),
    /// Guess the install platform from a user-agent string
    Detect(DetectCommand),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    pwa::init_logging();

    let result = match cli.command {
        Commands::Init(cmd) => init::handle_init(cmd, &cli.global),
        Commands::Update(cmd) => update::handle_update(cmd, &cli.global),
        Commands::Instructions(cmd) => instructions::handle_instructions(cmd, &cli.global),
        Commands::Meta(cmd) => meta::handle_meta(cmd, &cli.global),
        Commands::Detect(cmd) => detect::handle_detect(cmd, &cli.global),
    };

    if let Err(e) = result {
        match &e {
            CliError::Cancelled => {
                println!("Cancelled by user");
                std::process::exit(0);
            }
            _ => {
                logger::error(&e.to_string());
                if let Some(tip) = e.tip() {
                    logger::tip(&tip);
                }
            }
        }
        std::process::exit(1);
    }
}
