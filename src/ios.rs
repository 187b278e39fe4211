use crate::error::Result;
use crate::imaging::render_to_file;
use crate::models::{OutputSpec, Role, RunReport, SkippedOutput, IOS_ICON_FILE, IOS_ICON_SIZE};
use image::RgbaImage;
use std::path::Path;
use tracing::{info, warn};

/// App Store icon. Only written into an existing asset catalog; a project
/// without an iOS platform is not an error. Returns whether the icon was
/// written.
pub fn generate_ios_icon(master: &RgbaImage, icon_dir: &Path, report: &mut RunReport) -> Result<bool> {
    let spec = OutputSpec::new(IOS_ICON_SIZE, icon_dir.join(IOS_ICON_FILE), Role::Ios);
    if !icon_dir.is_dir() {
        warn!(dir = %icon_dir.display(), "iOS icon directory not found, skipping");
        report.skipped.push(SkippedOutput {
            path: spec.path,
            reason: format!("directory {} not found", icon_dir.display()),
        });
        return Ok(false);
    }
    render_to_file(master, &spec)?;
    info!(path = %spec.path.display(), "written");
    report.record_image(&spec);
    Ok(true)
}
