//! Shared helpers for the example binaries: tracing setup and PNG output.
use std::path::Path;

use image::{Rgb, RgbImage};
use mint::Vector2;
use randomly::palette::Palette;
use randomly::points::Region;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Image size and styling for point rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub background: [u8; 3],
    pub point_color: [u8; 3],
    pub point_radius: i64,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            background: [26, 26, 26],
            point_color: [235, 235, 235],
            point_radius: 2,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }
}

/// Render sampled points over `region` as filled circles on a PNG.
pub fn render_points_to_png(
    points: &[Vector2<f64>],
    region: Region,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (width, height) = config.image_size;
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));

    if region.width() > 0.0 && region.height() > 0.0 {
        let min = region.min();
        for p in points {
            let u = (p.x - min.x) / region.width();
            let v = (p.y - min.y) / region.height();
            // Region y grows upward, image y grows downward.
            let cx = (u * width as f64) as i64;
            let cy = ((1.0 - v) * height as f64) as i64;
            fill_circle(&mut img, cx, cy, config.point_radius, config.point_color);
        }
    }

    img.save(path.as_ref())?;
    info!(path = %path.as_ref().display(), points = points.len(), "wrote point render");
    Ok(())
}

/// Render the five palette swatches side by side on a PNG.
pub fn render_palette_to_png(
    palette: &Palette,
    swatch_size: (u32, u32),
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (sw, sh) = swatch_size;
    let mut img = RgbImage::new(sw * 5, sh);

    for (idx, &color) in palette.colors().iter().enumerate() {
        let x0 = idx as u32 * sw;
        for x in x0..x0 + sw {
            for y in 0..sh {
                img.put_pixel(x, y, Rgb(color));
            }
        }
    }

    img.save(path.as_ref())?;
    for label in palette.labels() {
        info!(%label, "swatch");
    }
    info!(path = %path.as_ref().display(), "wrote palette render");
    Ok(())
}

fn fill_circle(img: &mut RgbImage, cx: i64, cy: i64, radius: i64, color: [u8; 3]) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
                img.put_pixel(x as u32, y as u32, Rgb(color));
            }
        }
    }
}
