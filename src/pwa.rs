use crate::error::{IconError, Result};
use crate::imaging::render_to_file;
use crate::models::{OutputSpec, Role, RunReport, PWA_ICONS};
use image::RgbaImage;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn pwa_outputs(icons_dir: &Path) -> Vec<OutputSpec> {
    PWA_ICONS
        .iter()
        .map(|(size, name)| OutputSpec::new(*size, icons_dir.join(name), Role::Pwa))
        .collect()
}

/// Web manifest icons. The 512px one usually overwrites its own source.
pub fn generate_pwa_icons(master: &RgbaImage, icons_dir: &Path, report: &mut RunReport) -> Result<()> {
    fs::create_dir_all(icons_dir).map_err(|e| IconError::io(icons_dir, e))?;
    for spec in pwa_outputs(icons_dir) {
        render_to_file(master, &spec)?;
        info!(path = %spec.path.display(), "written");
        report.record_image(&spec);
    }
    Ok(())
}
