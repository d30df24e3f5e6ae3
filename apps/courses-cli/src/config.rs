//! Layered configuration: defaults, then YAML file, then environment.

use anyhow::{Context, Result, bail};
use courses_sdk::CoursesClientConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use std::path::Path;

/// Environment prefix; `COURSES__BASE_URL` sets `base_url`.
pub const ENV_PREFIX: &str = "COURSES__";

/// Build the figment without extracting it.
///
/// `base_url` from the command line overrides every other layer.
pub fn figment(path: Option<&Path>, base_url: Option<&str>) -> Result<Figment> {
    let mut figment = Figment::new().merge(Serialized::defaults(CoursesClientConfig::default()));

    if let Some(path) = path {
        if !path.is_file() {
            bail!("config file does not exist: {}", path.display());
        }
        figment = figment.merge(Yaml::file(path));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    if let Some(base_url) = base_url {
        figment = figment.merge(Serialized::default("base_url", base_url));
    }

    Ok(figment)
}

/// Load the effective client configuration.
pub fn load(path: Option<&Path>, base_url: Option<&str>) -> Result<CoursesClientConfig> {
    figment(path, base_url)?
        .extract()
        .context("invalid courses client configuration")
}
