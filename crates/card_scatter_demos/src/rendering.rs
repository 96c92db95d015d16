//! PNG rendering of sessions and tracing setup shared by the demo binaries.
use anyhow::Context;
use card_scatter::prelude::*;
use glam::{Mat2, Vec2};
use image::{Rgba, RgbaImage};
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Image size and world area to render.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    /// World-space area mapped onto the image, centered on the origin.
    pub world_extent: Vec2,
    pub background: [u8; 3],
    /// Card footprint in world units.
    pub card_size: Vec2,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), world_extent: Vec2) -> Self {
        Self {
            image_size,
            world_extent,
            background: [20, 70, 40],
            card_size: Vec2::new(1.0, 1.4),
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    fn to_pixel(&self, p: Vec2) -> (i64, i64) {
        let (w, h) = self.image_size;
        let u = p.x / self.world_extent.x + 0.5;
        let v = 0.5 - p.y / self.world_extent.y;
        ((u * w as f32) as i64, (v * h as f32) as i64)
    }

    fn to_world(&self, x: u32, y: u32) -> Vec2 {
        let (w, h) = self.image_size;
        Vec2::new(
            ((x as f32 + 0.5) / w as f32 - 0.5) * self.world_extent.x,
            (0.5 - (y as f32 + 0.5) / h as f32) * self.world_extent.y,
        )
    }
}

/// Renders board, borders, boundary and cards of a session to `path`.
pub fn render_session_to_png(
    result: &SessionResult,
    boundary: &BoundaryRect,
    borders: &BorderLayout,
    rc: &RenderConfig,
    path: &str,
) -> anyhow::Result<()> {
    let (w, h) = rc.image_size;
    let [br, bg, bb] = rc.background;
    let mut img = RgbaImage::from_pixel(w, h, Rgba([br, bg, bb, 255]));

    fill_rect(&mut img, rc, &borders.board, [35, 100, 60, 255]);
    for piece in &borders.pieces {
        fill_rect(&mut img, rc, &piece.rect, [110, 70, 40, 255]);
    }

    let mut outline = PixelLines {
        img: &mut img,
        rc,
    };
    draw_boundary(&mut outline, boundary);

    for p in &result.placements {
        let color = if p.special {
            [200, 40, 200, 255]
        } else {
            p.color.unwrap_or(Color::WHITE).to_rgba8()
        };
        fill_card(&mut img, rc, p, color);
    }

    img.save(path)
        .with_context(|| format!("failed to write {path}"))?;
    tracing::info!("Wrote {} ({} cards).", path, result.placements.len());
    Ok(())
}

fn fill_rect(img: &mut RgbaImage, rc: &RenderConfig, rect: &BoundaryRect, color: [u8; 4]) {
    let (x0, y0) = rc.to_pixel(Vec2::new(rect.min().x, rect.max().y));
    let (x1, y1) = rc.to_pixel(Vec2::new(rect.max().x, rect.min().y));
    for y in y0.max(0)..y1.min(img.height() as i64) {
        for x in x0.max(0)..x1.min(img.width() as i64) {
            img.put_pixel(x as u32, y as u32, Rgba(color));
        }
    }
}

fn fill_card(img: &mut RgbaImage, rc: &RenderConfig, p: &Placement, color: [u8; 4]) {
    let radius = rc.card_size.length() * 0.5;
    let (x0, y0) = rc.to_pixel(p.position + Vec2::new(-radius, radius));
    let (x1, y1) = rc.to_pixel(p.position + Vec2::new(radius, -radius));
    let inverse = Mat2::from_angle(-p.rotation.to_radians());
    let half = rc.card_size * 0.5;
    for y in y0.max(0)..=y1.min(img.height() as i64 - 1) {
        for x in x0.max(0)..=x1.min(img.width() as i64 - 1) {
            let local = inverse * (rc.to_world(x as u32, y as u32) - p.position);
            if local.x.abs() <= half.x && local.y.abs() <= half.y {
                img.put_pixel(x as u32, y as u32, Rgba(color));
            }
        }
    }
}

/// [`DebugDraw`] backend plotting lines straight into the image.
struct PixelLines<'a> {
    img: &'a mut RgbaImage,
    rc: &'a RenderConfig,
}

impl DebugDraw for PixelLines<'_> {
    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let (x0, y0) = self.rc.to_pixel(from);
        let (x1, y1) = self.rc.to_pixel(to);
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
        let rgba = Rgba(color.to_rgba8());
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = x0 as f32 + (x1 - x0) as f32 * t;
            let y = y0 as f32 + (y1 - y0) as f32 * t;
            if x >= 0.0 && y >= 0.0 && (x as u32) < self.img.width() && (y as u32) < self.img.height()
            {
                self.img.put_pixel(x as u32, y as u32, rgba);
            }
        }
    }
}
