use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use serde::{Deserialize, Serialize};

use inv_store::StorePolicy;

use crate::error::{ServerError, ServerResult};

/// Environment variable that overrides the listening port.
pub const PORT_ENV: &str = "PORT";

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Allow any origin, method and header.
    pub cors_permissive: bool,
    pub store: StorePolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            cors_permissive: true,
            store: StorePolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> ServerResult<Self> {
        toml::from_str(source).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string(self).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Replace the port of `bind_addr`, keeping the host.
    pub fn set_port(&mut self, port: &str) -> ServerResult<()> {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| ServerError::Config(format!("invalid port: {port:?}")))?;
        self.bind_addr.set_port(port);
        Ok(())
    }

    /// Apply `PORT` from the process environment, if set.
    pub fn apply_env(&mut self) -> ServerResult<()> {
        match std::env::var(PORT_ENV) {
            Ok(port) => self.set_port(&port),
            Err(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inv_store::IdStrategy;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert!(c.cors_permissive);
        assert_eq!(c.store, StorePolicy::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ServerConfig::from_toml_str(
            r#"
            bind_addr = "127.0.0.1:8080"

            [store]
            unique_barcode_on_update = false
            "#,
        )
        .unwrap();
        assert_eq!(c.bind_addr.port(), 8080);
        assert!(c.cors_permissive);
        assert!(!c.store.unique_barcode_on_update);
        assert!(c.store.reject_zero_values);
    }

    #[test]
    fn random_strategy_from_toml() {
        let c = ServerConfig::from_toml_str(
            r#"
            [store.id_strategy]
            kind = "random"
            max = 500
            "#,
        )
        .unwrap();
        assert_eq!(c.store.id_strategy, IdStrategy::Random { max: 500 });
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = ServerConfig::from_toml_str("bind_addr = 42").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn toml_output_parses_back() {
        let mut c = ServerConfig::default();
        c.store.id_strategy = IdStrategy::Random { max: 99 };
        let text = c.to_toml_string().unwrap();
        assert!(text.contains("bind_addr"));
        assert_eq!(ServerConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn from_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cors_permissive = false").unwrap();
        let c = ServerConfig::from_file(file.path()).unwrap();
        assert!(!c.cors_permissive);
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn set_port_keeps_host() {
        let mut c = ServerConfig::default();
        c.set_port(" 4000 ").unwrap();
        assert_eq!(c.bind_addr, "0.0.0.0:4000".parse::<SocketAddr>().unwrap());
        assert!(c.set_port("http").is_err());
        assert!(c.set_port("70000").is_err());
    }
}
