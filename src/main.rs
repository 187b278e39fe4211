use anyhow::Context;
use iconforge::{config, generator, logger};

fn main() -> anyhow::Result<()> {
    logger::init();

    let cfg = config::read_config().context("failed to read config")?;
    let report = generator::run(&cfg).context("icon generation failed")?;

    println!();
    println!(
        "All icons generated: {} images from {} ({}x{})",
        report.images_written(),
        report.source.display(),
        report.source_width,
        report.source_height
    );
    for skip in &report.skipped {
        println!("  skipped {}: {}", skip.path.display(), skip.reason);
    }
    println!();
    println!("Next steps:");
    println!("  npx cap sync");
    println!("  Rebuild in Android Studio / Xcode");
    Ok(())
}
