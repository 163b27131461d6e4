use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

// Process configuration, resolved once at startup and handed to the server.

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 5000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    pub addr: SocketAddr,
    pub data_dir: PathBuf,
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Directories default to `data/`, `templates/` and `static/` under
    /// `DASHBOARD_ROOT`, which itself defaults to the crate directory.
    /// Values that fail to parse fall back to their defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let host = var("DASHBOARD_HOST")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_HOST);
        let port = var("DASHBOARD_PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let root = var("DASHBOARD_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        let dir = |key: &str, default: &str| {
            var(key)
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join(default))
        };

        Self {
            addr: SocketAddr::new(host, port),
            data_dir: dir("DASHBOARD_DATA_DIR", "data"),
            template_dir: dir("DASHBOARD_TEMPLATE_DIR", "templates"),
            static_dir: dir("DASHBOARD_STATIC_DIR", "static"),
        }
    }
}
