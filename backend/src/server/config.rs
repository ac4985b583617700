//! Listener configuration loaded via OrthoConfig.
//!
//! Values come from `USERS_API_*` environment variables, optional config
//! files and command-line flags, in OrthoConfig's usual precedence.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;

fn default_host() -> String {
    DEFAULT_HOST.to_owned()
}

/// Raw listener settings as supplied by the operator.
///
/// Both fields carry defaults so the service starts with no configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct ServerSettings {
    /// Interface address to bind.
    #[ortho_config(default = default_host())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
}

/// Validated configuration for [`super::create_server`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Configuration binding exactly `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

impl TryFrom<&ServerSettings> for ServerConfig {
    type Error = std::net::AddrParseError;

    fn try_from(settings: &ServerSettings) -> Result<Self, Self::Error> {
        let ip: IpAddr = settings.host.parse()?;
        Ok(Self::new(SocketAddr::new(ip, settings.port)))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for listener configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::{EnvGuard, lock_env};
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("user-service")])
            .expect("config should load")
    }

    fn clear_environment() -> EnvGuard<'static> {
        lock_env([
            ("USERS_API_HOST", None::<String>),
            ("USERS_API_PORT", None::<String>),
            ("USERS_API_CONFIG_PATH", None::<String>),
        ])
    }

    #[rstest]
    fn loads_with_no_configuration() {
        let _guard = clear_environment();

        let settings = load_from_empty_args();
        assert_eq!(settings.host, DEFAULT_HOST);
        assert_eq!(settings.port, DEFAULT_PORT);
    }

    #[rstest]
    fn defaults_bind_all_interfaces_on_port_4000() {
        let _guard = clear_environment();

        let settings = load_from_empty_args();
        let config = ServerConfig::try_from(&settings).expect("default host parses");
        assert_eq!(config.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 4000)));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USERS_API_HOST", Some("127.0.0.1".to_owned())),
            ("USERS_API_PORT", Some("8081".to_owned())),
            ("USERS_API_CONFIG_PATH", None::<String>),
        ]);

        let settings = load_from_empty_args();
        let config = ServerConfig::try_from(&settings).expect("host parses");
        assert_eq!(config.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 8081)));
    }

    #[rstest]
    fn partial_environment_keeps_remaining_default() {
        let _guard = lock_env([
            ("USERS_API_HOST", None::<String>),
            ("USERS_API_PORT", Some("9000".to_owned())),
            ("USERS_API_CONFIG_PATH", None::<String>),
        ]);

        let settings = load_from_empty_args();
        let config = ServerConfig::try_from(&settings).expect("default host parses");
        assert_eq!(config.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 9000)));
    }

    #[rstest]
    fn non_ip_host_is_rejected() {
        let settings = ServerSettings {
            host: "localhost".to_owned(),
            port: DEFAULT_PORT,
        };
        assert!(ServerConfig::try_from(&settings).is_err());
    }
}
