use anyhow::anyhow;
use std::{env, net::SocketAddr, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    /// `None` allows any origin.
    pub cors_allow_origin: Option<String>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_addr: SocketAddr = bind_raw
            .parse()
            .map_err(|_| anyhow!("Invalid BIND_ADDR value: {}", bind_raw))?;

        let data_path = lookup("DIRECTORY_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data/directory.json"));

        let cors_allow_origin = lookup("CORS_ALLOW_ORIGIN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty() && v != "*");

        Ok(Config {
            bind_addr,
            data_path,
            cors_allow_origin,
        })
    }
}
