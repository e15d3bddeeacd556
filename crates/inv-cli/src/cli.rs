use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "inv",
    about = "Inventory material service",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum IdStrategyArg {
    Sequential,
    Random,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides config file and PORT)
    #[arg(long)]
    pub bind: Option<String>,
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub id_strategy: Option<IdStrategyArg>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve_defaults() {
        let cli = Cli::try_parse_from(["inv", "serve"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert!(args.bind.is_none());
            assert!(args.config.is_none());
            assert!(args.id_strategy.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_serve_with_flags() {
        let cli = Cli::try_parse_from([
            "inv", "serve", "--bind", "0.0.0.0:8080", "-c", "inv.toml", "--id-strategy", "random",
        ])
        .unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind.as_deref(), Some("0.0.0.0:8080"));
            assert_eq!(args.config, Some(PathBuf::from("inv.toml")));
            assert_eq!(args.id_strategy, Some(IdStrategyArg::Random));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_config() {
        let cli = Cli::try_parse_from(["inv", "config", "--config", "x.toml"]).unwrap();
        if let Command::Config(args) = cli.command {
            assert_eq!(args.config, Some(PathBuf::from("x.toml")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["inv", "--verbose", "serve"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn reject_unknown_strategy() {
        assert!(Cli::try_parse_from(["inv", "serve", "--id-strategy", "uuid"]).is_err());
    }
}
