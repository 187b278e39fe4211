use crate::error::{IconError, Result};
use crate::imaging::render_to_file;
use crate::models::{DensityBucket, OutputSpec, Role, RunReport, DENSITY_BUCKETS};
use image::RgbaImage;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

const ANYDPI_V26: &str = "mipmap-anydpi-v26";
const DRAWABLE_V24: &str = "drawable-v24";

/// Placeholder XML files the platform template ships with. They shadow the
/// generated PNGs and have to go.
const LEGACY_FILES: [(&str, &str); 4] = [
    (ANYDPI_V26, "ic_launcher.xml"),
    (ANYDPI_V26, "ic_launcher_round.xml"),
    (DRAWABLE_V24, "ic_launcher_foreground.xml"),
    ("drawable", "ic_launcher_background.xml"),
];

const LEGACY_DIRS: [&str; 2] = [ANYDPI_V26, DRAWABLE_V24];

pub const ADAPTIVE_ICON_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@color/ic_launcher_background"/>
    <foreground android:drawable="@mipmap/ic_launcher_foreground"/>
</adaptive-icon>
"#;

const ADAPTIVE_ICON_FILES: [&str; 2] = ["ic_launcher.xml", "ic_launcher_round.xml"];

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Fa-f]{6}").expect("valid hex color pattern"));

pub fn color_file(res_dir: &Path) -> PathBuf {
    res_dir.join("values").join("ic_launcher_background.xml")
}

fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(IconError::io(path, e)),
    }
}

fn remove_dir_if_empty(path: &Path) -> Result<bool> {
    let mut entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(IconError::io(path, e)),
    };
    if entries.next().is_some() {
        return Ok(false);
    }
    fs::remove_dir(path).map_err(|e| IconError::io(path, e))?;
    Ok(true)
}

/// Delete template-generated adaptive icon XML, then the directories that
/// held them if nothing else is left inside. Missing targets are fine.
pub fn remove_legacy_files(res_dir: &Path, report: &mut RunReport) -> Result<()> {
    info!("removing template adaptive icon files");
    for (dir, name) in LEGACY_FILES {
        let path = res_dir.join(dir).join(name);
        if remove_file_if_exists(&path)? {
            info!(path = %path.display(), "removed");
            report.removed.push(path);
        }
    }
    for dir in LEGACY_DIRS {
        let path = res_dir.join(dir);
        if remove_dir_if_empty(&path)? {
            info!(path = %path.display(), "removed empty dir");
            report.removed.push(path);
        }
    }
    Ok(())
}

pub fn bucket_outputs(res_dir: &Path, bucket: &DensityBucket) -> [OutputSpec; 3] {
    let dir = res_dir.join(bucket.mipmap_dir());
    [
        OutputSpec::new(bucket.size, dir.join("ic_launcher.png"), Role::LauncherSquare),
        OutputSpec::new(bucket.size, dir.join("ic_launcher_round.png"), Role::LauncherRound),
        OutputSpec::new(
            bucket.foreground_size,
            dir.join("ic_launcher_foreground.png"),
            Role::AdaptiveForeground,
        ),
    ]
}

pub fn generate_bucket(
    master: &RgbaImage,
    res_dir: &Path,
    bucket: &DensityBucket,
    report: &mut RunReport,
) -> Result<()> {
    let dir = res_dir.join(bucket.mipmap_dir());
    fs::create_dir_all(&dir).map_err(|e| IconError::io(&dir, e))?;
    info!(bucket = bucket.name, size = bucket.size, "generating launcher icons");
    for spec in bucket_outputs(res_dir, bucket) {
        render_to_file(master, &spec)?;
        info!(path = %spec.path.display(), "written");
        report.record_image(&spec);
    }
    Ok(())
}

pub fn generate_launcher_icons(
    master: &RgbaImage,
    res_dir: &Path,
    report: &mut RunReport,
) -> Result<()> {
    for bucket in &DENSITY_BUCKETS {
        generate_bucket(master, res_dir, bucket, report)?;
    }
    Ok(())
}

/// Recreate the Android 8+ adaptive icon descriptors.
pub fn write_adaptive_icon_xml(res_dir: &Path, report: &mut RunReport) -> Result<()> {
    let dir = res_dir.join(ANYDPI_V26);
    fs::create_dir_all(&dir).map_err(|e| IconError::io(&dir, e))?;
    for name in ADAPTIVE_ICON_FILES {
        let path = dir.join(name);
        fs::write(&path, ADAPTIVE_ICON_XML).map_err(|e| IconError::io(&path, e))?;
        info!(path = %path.display(), "written");
        report.record_file(path);
    }
    Ok(())
}

/// Replace every `#RRGGBB` colour in `content` with white.
pub fn whiten_colors(content: &str) -> String {
    HEX_COLOR.replace_all(content, "#FFFFFF").into_owned()
}

/// Point the adaptive icon background colour resource at white. Returns
/// `false` when the resource file does not exist.
pub fn rewrite_background_color(res_dir: &Path, report: &mut RunReport) -> Result<bool> {
    let path = color_file(res_dir);
    let content = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no background color resource");
            return Ok(false);
        }
        Err(e) => return Err(IconError::io(&path, e)),
    };
    fs::write(&path, whiten_colors(&content)).map_err(|e| IconError::io(&path, e))?;
    info!(path = %path.display(), "updated background color to white");
    report.color_updated = true;
    report.record_file(path);
    Ok(true)
}
