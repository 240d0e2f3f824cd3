//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::Result;
use crate::store::{apply_seed, load_seed_file, seed_defaults, DuckDbStore};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Serve { port } => {
                let port = port.unwrap_or(config.server.port);
                let store = self.open_store(&config)?;
                crate::cli::serve(store, config.pagination.page_size, port).await
            }
            Commands::Seed { file } => self.seed(&config, file.as_deref()),
            Commands::Check => self.check(&config),
        }
    }

    /// Load the config file when given, defaults otherwise
    fn load_config(&self) -> Result<AppConfig> {
        match &self.cli.config {
            Some(path) => AppConfig::load(path),
            None => Ok(AppConfig::default()),
        }
    }

    /// Open the store at the CLI-overridable database path
    fn open_store(&self, config: &AppConfig) -> Result<DuckDbStore> {
        let path = self
            .cli
            .database
            .as_deref()
            .unwrap_or(&config.database.path);
        tracing::info!("Opening database at {}", path.display());
        DuckDbStore::open(path)
    }

    fn seed(&self, config: &AppConfig, file: Option<&std::path::Path>) -> Result<()> {
        let store = self.open_store(config)?;

        let (categories, questions) = match file {
            Some(path) => {
                let seed = load_seed_file(path)?;
                apply_seed(&store, &seed)?
            }
            None => seed_defaults(&store)?,
        };

        println!("Seeded {categories} categories and {questions} questions");
        Ok(())
    }

    fn check(&self, config: &AppConfig) -> Result<()> {
        let store = self.open_store(config)?;
        store.check_connection()?;

        let (questions, categories) = store.counts()?;
        println!("Database OK: {questions} questions, {categories} categories");
        Ok(())
    }
}
