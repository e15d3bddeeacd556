use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use inv_server::{InvServer, ServerConfig};
use inv_store::{IdStrategy, DEFAULT_RANDOM_MAX};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Config(args) => cmd_config(args),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref(), args.bind.as_deref(), args.id_strategy, true)?;
    println!(
        "{} Inventory server on {} (ids: {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        strategy_label(config.store.id_strategy).cyan(),
    );
    InvServer::new(config).serve().await?;
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref(), None, None, true)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Defaults, then the config file, then `PORT`, then command-line flags.
pub fn resolve_config(
    file: Option<&Path>,
    bind: Option<&str>,
    strategy: Option<IdStrategyArg>,
    read_env: bool,
) -> anyhow::Result<ServerConfig> {
    let mut config = match file {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if read_env {
        config.apply_env()?;
    }
    if let Some(bind) = bind {
        config.bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid bind address {bind:?}"))?;
    }
    match strategy {
        Some(IdStrategyArg::Sequential) => config.store.id_strategy = IdStrategy::Sequential,
        Some(IdStrategyArg::Random) => {
            if !matches!(config.store.id_strategy, IdStrategy::Random { .. }) {
                config.store.id_strategy = IdStrategy::Random { max: DEFAULT_RANDOM_MAX };
            }
        }
        None => {}
    }
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

fn strategy_label(strategy: IdStrategy) -> String {
    match strategy {
        IdStrategy::Sequential => "sequential".into(),
        IdStrategy::Random { max } => format!("random 1..={max}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file_or_flags() {
        let config = resolve_config(None, None, None, false).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"127.0.0.1:7000\"").unwrap();
        writeln!(file, "[store.id_strategy]").unwrap();
        writeln!(file, "kind = \"random\"").unwrap();
        writeln!(file, "max = 20").unwrap();

        let from_file = resolve_config(Some(file.path()), None, None, false).unwrap();
        assert_eq!(from_file.bind_addr.port(), 7000);
        assert_eq!(from_file.store.id_strategy, IdStrategy::Random { max: 20 });

        let overridden = resolve_config(
            Some(file.path()),
            Some("127.0.0.1:7100"),
            Some(IdStrategyArg::Sequential),
            false,
        )
        .unwrap();
        assert_eq!(overridden.bind_addr.port(), 7100);
        assert_eq!(overridden.store.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn random_flag_keeps_configured_range() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store.id_strategy]\nkind = \"random\"\nmax = 20").unwrap();
        let config =
            resolve_config(Some(file.path()), None, Some(IdStrategyArg::Random), false).unwrap();
        assert_eq!(config.store.id_strategy, IdStrategy::Random { max: 20 });

        let config = resolve_config(None, None, Some(IdStrategyArg::Random), false).unwrap();
        assert_eq!(
            config.store.id_strategy,
            IdStrategy::Random { max: DEFAULT_RANDOM_MAX }
        );
    }

    // The only test that touches the process environment.
    #[test]
    fn port_env_sits_between_file_and_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"127.0.0.1:7000\"").unwrap();

        std::env::set_var(inv_server::config::PORT_ENV, "7200");
        let from_env = resolve_config(Some(file.path()), None, None, true);
        let from_flag = resolve_config(Some(file.path()), Some("127.0.0.1:7300"), None, true);
        let ignored = resolve_config(Some(file.path()), None, None, false);
        std::env::set_var(inv_server::config::PORT_ENV, "not-a-port");
        let invalid = resolve_config(None, None, None, true);
        std::env::remove_var(inv_server::config::PORT_ENV);

        let from_env = from_env.unwrap();
        assert_eq!(from_env.bind_addr, "127.0.0.1:7200".parse::<SocketAddr>().unwrap());
        assert_eq!(from_flag.unwrap().bind_addr.port(), 7300);
        assert_eq!(ignored.unwrap().bind_addr.port(), 7000);
        assert!(invalid.is_err());
    }

    #[test]
    fn invalid_bind_is_error() {
        assert!(resolve_config(None, Some("not-an-address"), None, false).is_err());
    }

    #[test]
    fn strategy_labels() {
        assert_eq!(strategy_label(IdStrategy::Sequential), "sequential");
        assert_eq!(strategy_label(IdStrategy::Random { max: 5 }), "random 1..=5");
    }
}
