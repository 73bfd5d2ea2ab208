use crate::schema::RulesConfig;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const RULES_FILE: &str = "rules.json";

pub fn load_rules_config(path: &Path) -> anyhow::Result<RulesConfig> {
    let config: RulesConfig = load_json(path)?;
    validate_rules_config(&config).with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

/// Reads `rules.json` from `dir`, or the built-in rules when the file is absent.
pub fn load_rules_or_default(dir: &Path) -> anyhow::Result<RulesConfig> {
    let path = dir.join(RULES_FILE);
    if path.exists() {
        load_rules_config(&path)
    } else {
        Ok(RulesConfig::default())
    }
}

pub fn validate_rules_config(config: &RulesConfig) -> anyhow::Result<()> {
    config.validate()?;
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
