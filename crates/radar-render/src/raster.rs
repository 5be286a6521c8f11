//! Software rasterizer.
//!
//! `PixelSurface` holds premultiplied RGBA in `f32` and composites every
//! command source-over, with one pixel of anti-aliasing on curved and
//! stroked edges. Nothing is ever cleared between frames unless asked:
//! the renderer's translucent fill is what makes old frames fade.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::command::{DrawCommand, Paint, Rgba, Stroke};
use crate::error::RenderError;
use crate::surface::Surface;

/// Largest side accepted for a pixel surface.
const MAX_SIDE: u32 = 16_384;

/// RGBA pixel buffer, premultiplied, row-major.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
}

impl PixelSurface {
    /// Allocate a transparent surface. Fails when the size is empty or too
    /// large to allocate.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
            return Err(RenderError::SurfaceUnavailable { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill([0.0; 4]);
    }

    /// Straight-alpha color of a pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, a] = self.pixels[(y * self.width + x) as usize];
        Some(unpremultiply(r, g, b, a))
    }

    /// Straight-alpha RGBA8 bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &[r, g, b, a] in &self.pixels {
            let color = unpremultiply(r, g, b, a);
            bytes.extend_from_slice(&[
                color.r,
                color.g,
                color.b,
                (color.a * 255.0).round() as u8,
            ]);
        }
        bytes
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgba, coverage: f32) {
        let sa = color.a * coverage.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let src = [
            color.r as f32 / 255.0 * sa,
            color.g as f32 / 255.0 * sa,
            color.b as f32 / 255.0 * sa,
            sa,
        ];
        let dst = &mut self.pixels[(y * self.width + x) as usize];
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s + *d * (1.0 - sa);
        }
    }

    /// Pixel range covering `[min, max]`, clipped to the surface.
    fn clip(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        let x0 = min.x.floor().max(0.0);
        let y0 = min.y.floor().max(0.0);
        let x1 = max.x.ceil().min(self.width as f32 - 1.0);
        let y1 = max.y.ceil().min(self.height as f32 - 1.0);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    /// Visit every pixel center inside the clipped box.
    fn shade(&mut self, min: Vec2, max: Vec2, mut f: impl FnMut(Vec2) -> Option<(Rgba, f32)>) {
        let Some((x0, y0, x1, y1)) = self.clip(min, max) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if let Some((color, coverage)) = f(p) {
                    self.blend(x, y, color, coverage);
                }
            }
        }
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: Paint) {
        let max = origin + size;
        self.shade(origin, max, |p| {
            let inside = p.x >= origin.x && p.y >= origin.y && p.x < max.x && p.y < max.y;
            inside.then(|| (paint.color_at(p), 1.0))
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        let reach = Vec2::splat(radius + 1.0);
        self.shade(center - reach, center + reach, |p| {
            let coverage = edge_coverage(radius - p.distance(center));
            (coverage > 0.0).then(|| (paint.color_at(p), coverage))
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        let half = stroke.width / 2.0;
        let reach = Vec2::splat(radius + half + 1.0);
        self.shade(center - reach, center + reach, |p| {
            let coverage = edge_coverage(half - (p.distance(center) - radius).abs());
            (coverage > 0.0).then_some((stroke.color, coverage))
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        let half = stroke.width / 2.0;
        let axis = to - from;
        let len = axis.length();
        let dir = if len > f32::EPSILON { axis / len } else { Vec2::ZERO };
        let reach = Vec2::splat(half + 1.0);

        self.shade(from.min(to) - reach, from.max(to) + reach, |p| {
            let along = (p - from).dot(dir).clamp(0.0, len);
            if let Some([on, off]) = stroke.dash {
                if on + off > 0.0 && along.rem_euclid(on + off) >= on {
                    return None;
                }
            }
            let distance = p.distance(from + dir * along);
            let coverage = edge_coverage(half - distance);
            (coverage > 0.0).then_some((stroke.color, coverage))
        });
    }

    fn fill_wedge(&mut self, center: Vec2, radius: f32, start: f32, end: f32, paint: Paint) {
        let span = (end - start).clamp(0.0, TAU);
        let reach = Vec2::splat(radius + 1.0);
        self.shade(center - reach, center + reach, |p| {
            let v = p - center;
            let coverage = edge_coverage(radius - v.length());
            if coverage <= 0.0 {
                return None;
            }
            let offset = (v.y.atan2(v.x) - start).rem_euclid(TAU);
            (offset <= span).then(|| (paint.color_at(p), coverage))
        });
    }
}

impl Surface for PixelSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw(&mut self, command: &DrawCommand) {
        match *command {
            DrawCommand::FillRect {
                origin,
                size,
                paint,
            } => self.fill_rect(origin, size, paint),
            DrawCommand::StrokeCircle {
                center,
                radius,
                stroke,
            } => self.stroke_circle(center, radius, stroke),
            DrawCommand::FillCircle {
                center,
                radius,
                paint,
            } => self.fill_circle(center, radius, paint),
            DrawCommand::StrokeLine { from, to, stroke } => self.stroke_line(from, to, stroke),
            DrawCommand::FillWedge {
                center,
                radius,
                start_angle,
                end_angle,
                paint,
            } => self.fill_wedge(center, radius, start_angle, end_angle, paint),
        }
    }
}

/// Coverage of a pixel whose center lies `inside` pixels within an edge.
fn edge_coverage(inside: f32) -> f32 {
    (inside + 0.5).clamp(0.0, 1.0)
}

fn unpremultiply(r: f32, g: f32, b: f32, a: f32) -> Rgba {
    if a <= 0.0 {
        return Rgba::TRANSPARENT;
    }
    let channel = |c: f32| ((c / a).clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba::new(channel(r), channel(g), channel(b), a.clamp(0.0, 1.0))
}
