//! Server settings read from the environment (after `dotenvy` has loaded `.env`).

use crate::error::ConfigError;
use crate::routes::DEFAULT_BODY_LIMIT;
use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/hotel";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_PORT: u16 = 3000;

/// Backing store selected by `HOTEL_STORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(StoreKind::Postgres),
            "memory" | "mem" => Ok(StoreKind::Memory),
            _ => Err(()),
        }
    }
}

/// Where the Postgres store connects: a full `DATABASE_URL`, or the separate `DB_*`
/// values, which are passed to the driver as fields and never pasted into a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: Option<String>,
        name: String,
    },
}

impl DatabaseTarget {
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match self {
            DatabaseTarget::Url(url) => PgConnectOptions::from_str(url)
                .map_err(|e| ConfigError::Database(e.to_string())),
            DatabaseTarget::Parts {
                host,
                port,
                user,
                password,
                name,
            } => {
                let options = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .database(name);
                Ok(match password {
                    Some(password) => options.password(password),
                    None => options,
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database: DatabaseTarget,
    /// Pool capacity. Requests beyond it queue for a connection.
    pub max_connections: u32,
    pub bind_addr: String,
    pub port: u16,
    pub store: StoreKind,
    pub body_limit: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database = match get("DATABASE_URL") {
            Some(url) => DatabaseTarget::Url(url),
            None => match get("DB_HOST") {
                Some(host) => DatabaseTarget::Parts {
                    host,
                    port: parse("DB_PORT", get("DB_PORT"))?.unwrap_or(5432),
                    user: get("DB_USER").unwrap_or_else(|| "postgres".into()),
                    // Passwords are taken verbatim, surrounding spaces included.
                    password: lookup("DB_PASSWORD").filter(|v| !v.is_empty()),
                    name: get("DB_NAME").unwrap_or_else(|| "hotel".into()),
                },
                None => DatabaseTarget::Url(DEFAULT_DATABASE_URL.into()),
            },
        };

        let store = match get("HOTEL_STORE") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                key: "HOTEL_STORE",
                value: v,
            })?,
            None => StoreKind::Postgres,
        };

        Ok(ServerConfig {
            database,
            max_connections: parse("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"))?
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse("PORT", get("PORT"))?.unwrap_or(DEFAULT_PORT),
            store,
            body_limit: parse("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"))?
                .unwrap_or(DEFAULT_BODY_LIMIT),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse<T: FromStr>(key: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| v.parse::<T>().map_err(|_| ConfigError::Invalid { key, value: v }))
        .transpose()
}
