use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use waypost::cli;
use waypost::infrastructure::config::ConfigStore;
use waypost::infrastructure::tracing::init_tracing;

#[derive(Parser)]
#[command(name = "waypost")]
#[command(about = "Map local domains to ports or folders")]
#[command(version)]
struct Cli {
    /// Directory holding the config file (defaults to ~/.waypost)
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the config file if it doesn't already exist
    Init,

    /// Print the config file
    Show,

    /// Map a domain to a local port
    SetHost {
        /// Domain name to map
        domain: String,

        /// Local port the service listens on
        port: u16,
    },

    /// Map a domain to a folder served as static files
    SetFolder {
        /// Domain name to map
        domain: String,

        /// Folder whose contents are served for the domain
        folder: PathBuf,
    },

    /// Remove the mapping for a domain
    Remove {
        /// Domain name to unmap
        domain: String,
    },

    /// List all mapped domains
    List,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = cli.config_dir.unwrap_or_else(ConfigStore::default_root);
    let store = ConfigStore::new(root);

    match cli.command {
        Commands::Init => cli::init::execute(&store),
        Commands::Show => cli::show::execute(&store),
        Commands::SetHost { domain, port } => cli::set_host::execute(&store, domain, port),
        Commands::SetFolder { domain, folder } => cli::set_folder::execute(&store, domain, folder),
        Commands::Remove { domain } => cli::remove::execute(&store, domain),
        Commands::List => cli::list::execute(&store),
        Commands::Completions { shell } => cli::completions::execute(Cli::command(), shell),
    }
}
