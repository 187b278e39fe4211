use serde::Serialize;
use std::path::PathBuf;

/// Fill colour behind launcher and iOS icons.
pub const BACKGROUND_RGB: [u8; 3] = [255, 255, 255];

/// Android density buckets: (name, launcher size, adaptive foreground size).
/// The foreground canvas is 108dp against the 48dp launcher icon.
pub const DENSITY_BUCKETS: [DensityBucket; 6] = [
    DensityBucket { name: "ldpi", size: 36, foreground_size: 54 },
    DensityBucket { name: "mdpi", size: 48, foreground_size: 72 },
    DensityBucket { name: "hdpi", size: 72, foreground_size: 108 },
    DensityBucket { name: "xhdpi", size: 96, foreground_size: 144 },
    DensityBucket { name: "xxhdpi", size: 144, foreground_size: 216 },
    DensityBucket { name: "xxxhdpi", size: 192, foreground_size: 288 },
];

pub const PWA_ICONS: [(u32, &str); 2] = [(192, "icon-192.png"), (512, "icon-512.png")];

pub const IOS_ICON_SIZE: u32 = 1024;
pub const IOS_ICON_FILE: &str = "AppIcon-512@2x.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityBucket {
    pub name: &'static str,
    pub size: u32,
    pub foreground_size: u32,
}

impl DensityBucket {
    pub fn mipmap_dir(&self) -> String {
        format!("mipmap-{}", self.name)
    }
}

/// What an output file is for; decides how the master image is composited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    LauncherSquare,
    LauncherRound,
    AdaptiveForeground,
    Pwa,
    Ios,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::LauncherSquare => "launcher_square",
            Role::LauncherRound => "launcher_round",
            Role::AdaptiveForeground => "adaptive_foreground",
            Role::Pwa => "pwa",
            Role::Ios => "ios",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    pub size: u32,
    pub path: PathBuf,
    pub role: Role,
}

impl OutputSpec {
    pub fn new(size: u32, path: impl Into<PathBuf>, role: Role) -> Self {
        Self { size, path: path.into(), role }
    }
}

/// Paths used by a run. Defaults match the layout of a Capacitor project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PathBuf,
    pub res_dir: PathBuf,
    pub icons_dir: PathBuf,
    pub ios_icon_dir: PathBuf,
    pub report_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from("icons/icon-512.png"),
            res_dir: PathBuf::from("android/app/src/main/res"),
            icons_dir: PathBuf::from("icons"),
            ios_icon_dir: PathBuf::from("ios/App/App/Assets.xcassets/AppIcon.appiconset"),
            report_file: None,
        }
    }
}

impl Config {
    /// Re-roots every relative path under `root`. Absolute paths are kept.
    pub fn rooted_at(&self, root: &std::path::Path) -> Self {
        let join = |p: &PathBuf| if p.is_absolute() { p.clone() } else { root.join(p) };
        Self {
            source: join(&self.source),
            res_dir: join(&self.res_dir),
            icons_dir: join(&self.icons_dir),
            ios_icon_dir: join(&self.ios_icon_dir),
            report_file: self.report_file.as_ref().map(join),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub role: Option<Role>,
    pub size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedOutput {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything a run touched, in the order it happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub source: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub removed: Vec<PathBuf>,
    pub written: Vec<WrittenFile>,
    pub skipped: Vec<SkippedOutput>,
    pub color_updated: bool,
}

impl RunReport {
    pub fn record_image(&mut self, spec: &OutputSpec) {
        self.written.push(WrittenFile {
            path: spec.path.clone(),
            role: Some(spec.role),
            size: Some(spec.size),
        });
    }

    pub fn record_file(&mut self, path: impl Into<PathBuf>) {
        self.written.push(WrittenFile { path: path.into(), role: None, size: None });
    }

    pub fn images_written(&self) -> usize {
        self.written.iter().filter(|w| w.role.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn buckets_keep_foreground_at_108_over_48() {
        for b in DENSITY_BUCKETS {
            assert_eq!(b.size * 108, b.foreground_size * 48, "{}", b.name);
        }
    }

    #[test]
    fn rooted_at_keeps_absolute_paths() {
        let mut cfg = Config::default();
        cfg.ios_icon_dir = PathBuf::from("/opt/ios");
        let rooted = cfg.rooted_at(Path::new("/work"));
        assert_eq!(rooted.source, PathBuf::from("/work/icons/icon-512.png"));
        assert_eq!(rooted.ios_icon_dir, PathBuf::from("/opt/ios"));
        assert_eq!(rooted.report_file, None);
    }

    #[test]
    fn role_serializes_snake_case() {
        let s = serde_json::to_string(&Role::AdaptiveForeground).unwrap();
        assert_eq!(s, "\"adaptive_foreground\"");
    }
}
