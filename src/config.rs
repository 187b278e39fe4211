use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use tracing::{debug, info};
use crate::error::{IconError, Result};
use crate::models::Config;

pub const CONFIG_FILE: &str = "iconforge_config.txt";

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "iconforge").map(|d| d.config_dir().join(CONFIG_FILE))
}

/// Candidate config files in lookup order.
pub fn config_candidates() -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Some(p) = user_config_path() {
        out.push(p);
    }
    out.push(PathBuf::from(CONFIG_FILE));
    out
}

/// Parse `key=value` lines on top of the defaults. Blank lines and `#`
/// comments are skipped, unknown keys ignored.
pub fn parse_config(content: &str, origin: &Path) -> Result<Config> {
    let mut cfg = Config::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((k, v)) = line.split_once('=') else { continue };
        let (k, v) = (k.trim(), v.trim());
        let slot = match k {
            "source" => &mut cfg.source,
            "res_dir" => &mut cfg.res_dir,
            "icons_dir" => &mut cfg.icons_dir,
            "ios_icon_dir" => &mut cfg.ios_icon_dir,
            "report_file" => {
                cfg.report_file = if v.is_empty() { None } else { Some(PathBuf::from(v)) };
                continue;
            }
            _ => {
                debug!(key = k, "ignoring unknown config key");
                continue;
            }
        };
        if v.is_empty() {
            return Err(IconError::Config {
                path: origin.to_path_buf(),
                message: format!("empty value for `{}`", k),
            });
        }
        *slot = PathBuf::from(v);
    }
    Ok(cfg)
}

pub fn read_config_from(path: &Path) -> Result<Option<Config>> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content, path).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(IconError::io(path, e)),
    }
}

/// First config file found wins; with none present the built-in paths apply.
pub fn read_config() -> Result<Config> {
    for path in config_candidates() {
        if let Some(cfg) = read_config_from(&path)? {
            info!(path = %path.display(), "using config file");
            return Ok(cfg);
        }
    }
    debug!("no config file found, using defaults");
    Ok(Config::default())
}
