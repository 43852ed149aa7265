use std::env;
use std::str::FromStr;

use eyre::{bail, WrapErr};

use mindcheck_instruments::safety::SafetyPolicy;

const DEFAULT_BUCKET: &str = "mindcheck";
const DEFAULT_ISSUER: &str = "mindcheck";
const DEFAULT_SAFETY_MIN_SCORE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    S3,
    /// Process-local, for development. Nothing survives a restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s3" => Ok(StorageBackend::S3),
            "memory" => Ok(StorageBackend::Memory),
            other => bail!("unknown storage backend '{other}', expected s3 or memory"),
        }
    }
}

/// Settings read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bucket: String,
    pub storage: StorageBackend,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub safety: SafetyPolicy,
    pub region: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let Some(jwt_secret) = var("MINDCHECK_JWT_SECRET") else {
            bail!("MINDCHECK_JWT_SECRET must be set");
        };

        let storage = match var("MINDCHECK_STORAGE") {
            Some(v) => v.parse()?,
            None => StorageBackend::S3,
        };

        let watched = match var("MINDCHECK_SAFETY_QUESTIONS") {
            Some(list) => SafetyPolicy::parse_watched(&list)
                .wrap_err("MINDCHECK_SAFETY_QUESTIONS must be a comma-separated list of UUIDs")?,
            None => Vec::new(),
        };
        let min_score = match var("MINDCHECK_SAFETY_MIN_SCORE") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .wrap_err("MINDCHECK_SAFETY_MIN_SCORE must be a non-negative integer")?,
            None => DEFAULT_SAFETY_MIN_SCORE,
        };

        Ok(Self {
            bucket: var("MINDCHECK_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            storage,
            jwt_secret,
            jwt_issuer: var("MINDCHECK_JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
            safety: SafetyPolicy::new(watched, min_score),
            region: var("AWS_REGION"),
        })
    }
}
