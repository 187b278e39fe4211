use crate::error::{IconError, Result};
use crate::geometry::SafeZone;
use crate::models::{OutputSpec, Role, BACKGROUND_RGB};
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::imageops;
use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;
use tracing::{debug, info};

/// Decode the master image and normalise it to RGBA. Sources without an
/// alpha channel come out fully opaque.
pub fn load_master(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| IconError::SourceLoad {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "loaded master image"
    );
    Ok(img.to_rgba8())
}

/// Lanczos3 resample to exactly `size x size`, alpha preserved.
///
/// Colour is filtered premultiplied by alpha, so the (usually black) RGB
/// of fully transparent pixels never bleeds into the edges of the artwork.
pub fn resize(img: &RgbaImage, size: u32) -> Result<RgbaImage> {
    let fail = |message: String| IconError::Resize { size, message };

    let src = Image::from_vec_u8(img.width(), img.height(), img.as_raw().clone(), PixelType::U8x4)
        .map_err(|e| fail(format!("failed to create source image: {e}")))?;
    let mut dst = Image::new(size, size, PixelType::U8x4);

    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src,
            &mut dst,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
        )
        .map_err(|e| fail(format!("resize failed: {e}")))?;

    RgbaImage::from_raw(size, size, dst.into_vec())
        .ok_or_else(|| fail("failed to convert resized image".to_string()))
}

#[inline]
fn blend(src: u8, bg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
}

/// Alpha-blend onto a solid colour. The result has no alpha channel.
pub fn composite_on_background(img: &RgbaImage, bg: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
        Rgb([blend(r, bg[0], a), blend(g, bg[1], a), blend(b, bg[2], a)])
    })
}

/// Binary mask of the circle inscribed in a `size x size` square, sampled
/// at pixel centres. The circle runs through the centres of the outermost
/// row and column, so corners are always outside for sizes above 2.
pub fn circular_mask(size: u32) -> GrayImage {
    let c = (size as f64 - 1.0) / 2.0;
    let r2 = c * c;
    GrayImage::from_fn(size, size, |x, y| {
        let dx = x as f64 - c;
        let dy = y as f64 - c;
        if dx * dx + dy * dy <= r2 { Luma([255]) } else { Luma([0]) }
    })
}

/// Push an opaque icon through `mask` onto a transparent canvas.
pub fn apply_mask(img: &RgbImage, mask: &GrayImage) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let Luma([m]) = *mask.get_pixel(x, y);
        if m == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        let Rgb([r, g, b]) = *img.get_pixel(x, y);
        Rgba([r, g, b, m])
    })
}

pub fn apply_circular_mask(img: &RgbImage, size: u32) -> RgbaImage {
    apply_mask(img, &circular_mask(size))
}

/// Master scaled into the safe zone and centred on a transparent canvas.
pub fn adaptive_foreground(master: &RgbaImage, canvas: u32) -> Result<RgbaImage> {
    let zone = SafeZone::for_canvas(canvas);
    let inner = resize(master, zone.inner_size)?;
    let mut fg = RgbaImage::new(canvas, canvas);
    let (x, y) = zone.offset();
    imageops::replace(&mut fg, &inner, x as i64, y as i64);
    Ok(fg)
}

/// Produce the bitmap for one output according to its role.
pub fn render(master: &RgbaImage, spec: &OutputSpec) -> Result<DynamicImage> {
    let img = match spec.role {
        Role::LauncherSquare | Role::Ios => {
            let resized = resize(master, spec.size)?;
            DynamicImage::ImageRgb8(composite_on_background(&resized, BACKGROUND_RGB))
        }
        Role::LauncherRound => {
            let resized = resize(master, spec.size)?;
            let filled = composite_on_background(&resized, BACKGROUND_RGB);
            DynamicImage::ImageRgba8(apply_circular_mask(&filled, spec.size))
        }
        Role::AdaptiveForeground => {
            DynamicImage::ImageRgba8(adaptive_foreground(master, spec.size)?)
        }
        // alpha is dropped, not blended
        Role::Pwa => DynamicImage::ImageRgba8(resize(master, spec.size)?).to_rgb8().into(),
    };
    Ok(img)
}

/// Write as PNG, replacing whatever is at `path`.
pub fn save_png(img: &DynamicImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), width = img.width(), height = img.height(), "wrote png");
    Ok(())
}

pub fn render_to_file(master: &RgbaImage, spec: &OutputSpec) -> Result<()> {
    let img = render(master, spec)?;
    save_png(&img, &spec.path)
}
