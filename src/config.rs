// SPDX-License-Identifier: MIT

//! Server configuration from the environment

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::TriageError;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 8501;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Read `TRIAGE_HOST` / `TRIAGE_PORT`, falling back to defaults
    pub fn from_env() -> Result<Self, TriageError> {
        Self::from_values(
            env::var("TRIAGE_HOST").ok().as_deref(),
            env::var("TRIAGE_PORT").ok().as_deref(),
        )
    }

    pub fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, TriageError> {
        let host = match host.filter(|h| !h.is_empty()) {
            Some(h) => h.parse::<IpAddr>().map_err(|e| {
                TriageError::config(format!("TRIAGE_HOST is not an IP address: {}", e))
            })?,
            None => DEFAULT_HOST,
        };

        let port = match port.filter(|p| !p.is_empty()) {
            Some(p) => p
                .parse::<u16>()
                .map_err(|e| TriageError::config(format!("TRIAGE_PORT is not a port: {}", e)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// Apply CLI overrides on top of the environment
    pub fn with_overrides(mut self, host: Option<IpAddr>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}
