use crate::config::toml_config::IntakeConfig;
use crate::domain::ports::{GroupOrder, MismatchPolicy, StoreKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "poll-intake")]
#[command(about = "Intake form and store for election-poll disclosure records")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum)]
    pub group_order: Option<GroupOrder>,

    #[arg(long, global = true, value_enum)]
    pub on_mismatch: Option<MismatchPolicy>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the web intake server
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:8000
        #[arg(long)]
        bind: Option<String>,

        #[arg(long, value_enum)]
        store: Option<StoreKind>,

        /// Directory for the file store
        #[arg(long)]
        store_path: Option<String>,
    },
    /// Normalize a saved submission and print the record as JSON
    Normalize {
        /// JSON array of [name, value] pairs, in submission order
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long)]
        pretty: bool,
    },
}

impl CliConfig {
    /// Load the configuration file if one was given, then apply flag
    /// overrides on top of it.
    pub fn resolve(&self) -> crate::utils::error::Result<IntakeConfig> {
        let mut config = match &self.config {
            Some(path) => IntakeConfig::from_file(path)?,
            None => IntakeConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut IntakeConfig) {
        if let Some(order) = self.group_order {
            config.normalizer.group_order = order;
        }
        if let Some(policy) = self.on_mismatch {
            config.normalizer.on_mismatch = policy;
        }

        if let Command::Serve {
            bind,
            store,
            store_path,
        } = &self.command
        {
            if let Some(bind) = bind {
                config.server.bind_addr = bind.clone();
            }
            if let Some(kind) = store {
                config.store.kind = *kind;
            }
            if let Some(path) = store_path {
                config.store.path = path.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigProvider;

    #[test]
    fn test_serve_flags_override_defaults() {
        let cli = CliConfig::parse_from([
            "poll-intake",
            "--on-mismatch",
            "reject",
            "serve",
            "--bind",
            "0.0.0.0:9999",
            "--store",
            "memory",
        ]);

        let config = cli.resolve().unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:9999");
        assert_eq!(config.store_kind(), StoreKind::Memory);
        assert_eq!(config.normalizer.on_mismatch, MismatchPolicy::Reject);
        assert_eq!(config.normalizer.group_order, GroupOrder::BySuffix);
    }

    #[test]
    fn test_normalize_subcommand() {
        let cli = CliConfig::parse_from([
            "poll-intake",
            "normalize",
            "--input",
            "form.json",
            "--group-order",
            "as-submitted",
        ]);

        assert!(matches!(cli.command, Command::Normalize { pretty: false, .. }));
        assert_eq!(cli.group_order, Some(GroupOrder::AsSubmitted));
    }
}
