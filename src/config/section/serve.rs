//! `[serve]` section configuration.
//!
//! Development server settings.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"     # Network interface (127.0.0.1 = localhost only)
//! port = 4173                 # HTTP port number
//! watch = true                # Auto-rebuild on file changes
//! ```
//!
//! Use `interface = "0.0.0.0"` to make the server accessible from LAN.

use std::net::{IpAddr, Ipv4Addr};

use serde::{Deserialize, Serialize};

/// Development server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    pub interface: IpAddr,

    /// HTTP port number.
    pub port: u16,

    /// Enable file watcher for live reload.
    pub watch: bool,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 4173,
            watch: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    use crate::config::test_parse_config;

    #[test]
    fn test_serve_config() {
        let config =
            test_parse_config("[serve]\ninterface = \"0.0.0.0\"\nport = 8080\nwatch = false");

        assert_eq!(
            config.serve.interface,
            IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))
        );
        assert_eq!(config.serve.port, 8080);
        assert!(!config.serve.watch);
    }

    #[test]
    fn test_serve_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(
            config.serve.interface,
            IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
        );
        assert_eq!(config.serve.port, 4173);
        assert!(config.serve.watch);
    }

    #[test]
    fn test_serve_config_interface_variants() {
        let config = test_parse_config("[serve]\ninterface = \"::1\"");
        assert_eq!(
            config.serve.interface,
            IpAddr::V6(Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))
        );
    }

    #[test]
    fn test_serve_config_partial_override() {
        let config = test_parse_config("[serve]\nport = 3000");

        assert_eq!(config.serve.port, 3000);
        assert_eq!(
            config.serve.interface,
            IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
        );
        assert!(config.serve.watch);
    }
}
