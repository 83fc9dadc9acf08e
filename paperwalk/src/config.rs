//! Process configuration, read once at startup by the binaries.

use std::env;

use anyhow::{Context, Result};

use crate::store::StoreConfig;

/// Port the API binds when `PORT` is unset.
const DEFAULT_PORT: u16 = 5007;

#[derive(Clone, Debug)]
pub struct Settings {
    pub store: StoreConfig,
    pub scholar_api_key: Option<String>,
    pub port: u16,
}

impl Settings {
    /// Read `NEO4J_URI`, `NEO4J_USER` and `NEO4J_PWD` (required), the
    /// optional `SEMANTIC_SCHOLAR_API_KEY`, and `PORT`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            store: StoreConfig {
                uri: env::var("NEO4J_URI").context("NEO4J_URI is not set")?,
                user: env::var("NEO4J_USER").context("NEO4J_USER is not set")?,
                password: env::var("NEO4J_PWD").context("NEO4J_PWD is not set")?,
            },
            scholar_api_key: env::var("SEMANTIC_SCHOLAR_API_KEY").ok(),
            port: match env::var("PORT") {
                Ok(port) => port.parse().context("PORT is not a number")?,
                Err(_) => DEFAULT_PORT,
            },
        })
    }
}
