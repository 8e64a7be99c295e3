mod lookup;
mod providers;

use clap::{Parser, Subcommand};
use classpath_core::RegistryConfig;
use std::path::PathBuf;

pub use lookup::OutputFormat;

#[derive(Parser)]
#[command(
    name = "classpath",
    version,
    about = "Resolve named classpaths to the files they contain",
    long_about = "Looks up a symbolic classpath name (e.g. \"jdk\", \"runtime\", or a \
                  group:artifact:version coordinate) against the configured providers and \
                  prints the resolved entries."
)]
pub struct Cli {
    /// Registry config file (defaults to ~/.classpath/registry.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a classpath name and print its entries
    Lookup {
        /// Classpath name to resolve
        #[arg(value_name = "NAME")]
        name: String,

        /// Representation of each entry
        #[arg(long, value_enum, default_value_t = OutputFormat::Files)]
        format: OutputFormat,
    },
    /// List providers in the order they are consulted
    Providers,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = classpath_runtime::init_logging("cli", cli.verbose);

    let config = RegistryConfig::load_or_default(cli.config.as_deref())?;
    let registry = classpath_runtime::build_default_registry(&config);

    match cli.command {
        Commands::Lookup { name, format } => lookup::run(&registry, &name, format),
        Commands::Providers => providers::run(&registry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from(["classpath", "lookup", "jdk", "--format", "search-path"])
            .unwrap();
        match cli.command {
            Commands::Lookup { name, format } => {
                assert_eq!(name, "jdk");
                assert_eq!(format, OutputFormat::SearchPath);
            }
            Commands::Providers => panic!("expected lookup"),
        }
        assert!(cli.config.is_none());
    }
}
