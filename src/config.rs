use crate::models::ECLevel;
use std::sync::OnceLock;

fn parse_env_ec_level(name: &str, default: ECLevel) -> ECLevel {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<ECLevel>().ok())
        .unwrap_or(default)
}

static DEFAULT_EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

pub(crate) fn default_ec_level() -> ECLevel {
    *DEFAULT_EC_LEVEL.get_or_init(|| parse_env_ec_level("QR_DEFAULT_EC", ECLevel::L))
}
