use anyhow::{bail, Context, Result};

use crate::highlight::BoundaryMode;

/// Application configuration loaded from environment variables.
/// Every variable is optional; the defaults suit local development.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Per-field character cap on diffed content.
    pub max_field_chars: usize,
    /// Cap on bullets/tags per review request.
    pub max_list_items: usize,
    /// Run-boundary comparison mode. `legacy` matches the web client's
    /// original highlighter; `normalized` compares cleaned tokens on both
    /// sides.
    pub boundary_mode: BoundaryMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            max_field_chars: env_or("MAX_FIELD_CHARS", "20000")
                .parse()
                .context("MAX_FIELD_CHARS must be a non-negative integer")?,
            max_list_items: env_or("MAX_LIST_ITEMS", "200")
                .parse()
                .context("MAX_LIST_ITEMS must be a non-negative integer")?,
            boundary_mode: parse_boundary_mode(&env_or("HIGHLIGHT_BOUNDARY_MODE", "legacy"))?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Invalid modes are a startup error, not a silent fallback.
fn parse_boundary_mode(value: &str) -> Result<BoundaryMode> {
    match value {
        "legacy" => Ok(BoundaryMode::Legacy),
        "normalized" => Ok(BoundaryMode::Normalized),
        other => bail!("HIGHLIGHT_BOUNDARY_MODE must be 'legacy' or 'normalized', got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boundary_mode_legacy() {
        assert_eq!(parse_boundary_mode("legacy").unwrap(), BoundaryMode::Legacy);
    }

    #[test]
    fn test_parse_boundary_mode_normalized() {
        assert_eq!(
            parse_boundary_mode("normalized").unwrap(),
            BoundaryMode::Normalized
        );
    }

    #[test]
    fn test_parse_boundary_mode_rejects_unknown() {
        assert!(parse_boundary_mode("strict").is_err());
    }
}
