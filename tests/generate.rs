use iconforge::models::{DENSITY_BUCKETS, IOS_ICON_FILE};
use iconforge::{Config, IconError, Role, run};
use image::{ColorType, Rgba, RgbaImage};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Opaque blue disc on a transparent background, like a typical logo.
fn write_master(path: &Path, size: u32) {
    let c = size as f32 / 2.0;
    let img = RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - c;
        let dy = y as f32 + 0.5 - c;
        if (dx * dx + dy * dy).sqrt() < c * 0.7 {
            Rgba([20, 60, 220, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    img.save(path).unwrap();
}

fn project(with_ios: bool) -> (TempDir, Config) {
    let tmp = TempDir::new().unwrap();
    let mut cfg = Config::default().rooted_at(tmp.path());
    // keep the master out of icons/, where the 512px PWA icon lands
    cfg.source = tmp.path().join("art").join("master.png");
    write_master(&cfg.source, 512);
    if with_ios {
        fs::create_dir_all(&cfg.ios_icon_dir).unwrap();
    }
    (tmp, cfg)
}

#[test]
fn full_run_writes_every_output() {
    let (_tmp, cfg) = project(true);
    let report = run(&cfg).unwrap();

    for bucket in DENSITY_BUCKETS {
        let dir = cfg.res_dir.join(bucket.mipmap_dir());

        let square = image::open(dir.join("ic_launcher.png")).unwrap();
        assert_eq!((square.width(), square.height()), (bucket.size, bucket.size));
        assert_eq!(square.color(), ColorType::Rgb8);

        let round = image::open(dir.join("ic_launcher_round.png")).unwrap().to_rgba8();
        let s = bucket.size;
        assert_eq!(round.dimensions(), (s, s));
        for (x, y) in [(0, 0), (s - 1, 0), (0, s - 1), (s - 1, s - 1)] {
            assert_eq!(round.get_pixel(x, y)[3], 0, "{} corner", bucket.name);
        }
        assert_eq!(round.get_pixel(s / 2, s / 2)[3], 255);

        let fg = image::open(dir.join("ic_launcher_foreground.png")).unwrap();
        let f = bucket.foreground_size;
        assert_eq!((fg.width(), fg.height()), (f, f));
        assert!(fg.color().has_alpha());
        assert_eq!(fg.to_rgba8().get_pixel(0, 0)[3], 0);
    }

    for name in ["ic_launcher.xml", "ic_launcher_round.xml"] {
        let xml = fs::read_to_string(cfg.res_dir.join("mipmap-anydpi-v26").join(name)).unwrap();
        assert!(xml.contains("@color/ic_launcher_background"));
        assert!(xml.contains("@mipmap/ic_launcher_foreground"));
    }

    for (size, name) in [(192, "icon-192.png"), (512, "icon-512.png")] {
        let img = image::open(cfg.icons_dir.join(name)).unwrap();
        assert_eq!((img.width(), img.height()), (size, size));
        assert_eq!(img.color(), ColorType::Rgb8);
    }

    let ios = image::open(cfg.ios_icon_dir.join(IOS_ICON_FILE)).unwrap();
    assert_eq!((ios.width(), ios.height()), (1024, 1024));
    assert_eq!(ios.color(), ColorType::Rgb8);

    // 6 buckets * 3 + 2 pwa + 1 ios
    assert_eq!(report.images_written(), 21);
    assert!(report.skipped.is_empty());
    assert_eq!(
        report.written.iter().filter(|w| w.role == Some(Role::AdaptiveForeground)).count(),
        6
    );
}

#[test]
fn missing_ios_project_is_skipped() {
    let (_tmp, cfg) = project(false);
    let report = run(&cfg).unwrap();
    assert!(!cfg.ios_icon_dir.exists());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.images_written(), 20);
}

#[test]
fn second_run_is_byte_identical() {
    let (_tmp, cfg) = project(true);
    let first = run(&cfg).unwrap();
    let snapshot: Vec<_> = first
        .written
        .iter()
        .map(|w| (w.path.clone(), fs::read(&w.path).unwrap()))
        .collect();

    run(&cfg).unwrap();
    for (path, bytes) in snapshot {
        assert_eq!(fs::read(&path).unwrap(), bytes, "{}", path.display());
    }
}

#[test]
fn unreadable_master_aborts_before_touching_anything() {
    let tmp = TempDir::new().unwrap();
    let cfg = Config::default().rooted_at(tmp.path());
    let legacy = cfg.res_dir.join("drawable").join("ic_launcher_background.xml");
    fs::create_dir_all(legacy.parent().unwrap()).unwrap();
    fs::write(&legacy, "<vector/>").unwrap();

    let err = run(&cfg).unwrap_err();
    assert!(matches!(err, IconError::SourceLoad { .. }));
    assert!(legacy.exists());
    assert!(!cfg.icons_dir.exists());
}

#[test]
fn cleans_template_files_and_whitens_color() {
    let (_tmp, cfg) = project(false);
    let anydpi = cfg.res_dir.join("mipmap-anydpi-v26");
    let v24 = cfg.res_dir.join("drawable-v24");
    fs::create_dir_all(&anydpi).unwrap();
    fs::create_dir_all(&v24).unwrap();
    fs::write(anydpi.join("ic_launcher.xml"), "<old/>").unwrap();
    fs::write(v24.join("ic_launcher_foreground.xml"), "<vector/>").unwrap();
    let values = cfg.res_dir.join("values");
    fs::create_dir_all(&values).unwrap();
    fs::write(
        values.join("ic_launcher_background.xml"),
        "<resources><color name=\"ic_launcher_background\">#26A69A</color></resources>",
    )
    .unwrap();

    let report = run(&cfg).unwrap();

    assert!(!v24.exists());
    assert!(fs::read_to_string(anydpi.join("ic_launcher.xml")).unwrap().contains("adaptive-icon"));
    let color = fs::read_to_string(values.join("ic_launcher_background.xml")).unwrap();
    assert!(color.contains("#FFFFFF"));
    assert!(report.color_updated);
    assert_eq!(report.removed.len(), 4);
}

#[test]
fn report_file_is_json() {
    let (tmp, mut cfg) = project(false);
    let path = tmp.path().join("build").join("icons.json");
    cfg.report_file = Some(path.clone());
    run(&cfg).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(parsed["source_width"], 512);
    assert_eq!(parsed["written"].as_array().unwrap().len(), 22);
    assert_eq!(parsed["skipped"].as_array().unwrap().len(), 1);
}
