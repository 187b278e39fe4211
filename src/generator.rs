use crate::android;
use crate::error::{IconError, Result};
use crate::imaging::load_master;
use crate::ios;
use crate::models::{Config, RunReport};
use crate::pwa;
use std::fs;
use tracing::info;

/// One full regeneration. Steps run strictly in order: the colour rewrite
/// relies on the adaptive XML having been recreated, and nothing is touched
/// before the master image has loaded.
pub fn run(cfg: &Config) -> Result<RunReport> {
    let master = load_master(&cfg.source)?;
    let mut report = RunReport {
        source: cfg.source.clone(),
        source_width: master.width(),
        source_height: master.height(),
        ..RunReport::default()
    };

    android::remove_legacy_files(&cfg.res_dir, &mut report)?;

    info!("generating Android icons");
    android::generate_launcher_icons(&master, &cfg.res_dir, &mut report)?;

    info!("creating adaptive icon XML");
    android::write_adaptive_icon_xml(&cfg.res_dir, &mut report)?;
    android::rewrite_background_color(&cfg.res_dir, &mut report)?;

    info!("updating PWA icons");
    pwa::generate_pwa_icons(&master, &cfg.icons_dir, &mut report)?;

    info!("generating iOS icon");
    ios::generate_ios_icon(&master, &cfg.ios_icon_dir, &mut report)?;

    if let Some(path) = &cfg.report_file {
        write_report(&report, path)?;
    }
    Ok(report)
}

pub fn write_report(report: &RunReport, path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IconError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(report).map_err(|source| IconError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|e| IconError::io(path, e))?;
    info!(path = %path.display(), "wrote run report");
    Ok(())
}
