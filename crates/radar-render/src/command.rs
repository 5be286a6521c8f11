//! Draw commands: the vocabulary between the renderer and a surface.

use glam::Vec2;

use radar_core::constants::RADAR_GREEN;

/// Straight-alpha color: 8-bit channels, alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn black(alpha: f32) -> Self {
        Self::new(0, 0, 0, alpha.clamp(0.0, 1.0))
    }

    /// Radar phosphor green at the given alpha.
    pub fn green(alpha: f32) -> Self {
        let [r, g, b] = RADAR_GREEN;
        Self::new(r, g, b, alpha.clamp(0.0, 1.0))
    }

    /// Linear interpolation of every channel, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// How a filled shape is colored at a given point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Gradient along the `start -> end` axis, clamped outside it.
    LinearGradient {
        start: Vec2,
        end: Vec2,
        from: Rgba,
        to: Rgba,
    },
    /// Gradient from `inner` at `center` to `outer` at `radius`.
    RadialGradient {
        center: Vec2,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
}

impl Paint {
    /// Color of the paint at a surface point.
    pub fn color_at(&self, point: Vec2) -> Rgba {
        match *self {
            Paint::Solid(color) => color,
            Paint::LinearGradient {
                start,
                end,
                from,
                to,
            } => {
                let axis = end - start;
                let len_sq = axis.length_squared();
                if len_sq <= f32::EPSILON {
                    return from;
                }
                from.lerp(to, (point - start).dot(axis) / len_sq)
            }
            Paint::RadialGradient {
                center,
                radius,
                inner,
                outer,
            } => {
                if radius <= f32::EPSILON {
                    return outer;
                }
                inner.lerp(outer, point.distance(center) / radius)
            }
        }
    }
}

/// Stroke style for lines and outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
    /// `[on, off]` lengths in pixels; `None` draws a solid line.
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub fn solid(color: Rgba, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn dashed(color: Rgba, width: f32, dash: [f32; 2]) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }
}

/// One drawing operation, composited source-over onto whatever is below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillRect {
        origin: Vec2,
        size: Vec2,
        paint: Paint,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        stroke: Stroke,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    /// Pie slice from `start_angle` clockwise (screen space) to `end_angle`.
    FillWedge {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        paint: Paint,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_gradient_clamps_outside_axis() {
        let paint = Paint::LinearGradient {
            start: Vec2::ZERO,
            end: Vec2::new(100.0, 0.0),
            from: Rgba::green(0.3),
            to: Rgba::green(0.0),
        };
        assert!((paint.color_at(Vec2::new(-10.0, 5.0)).a - 0.3).abs() < 1e-6);
        assert!((paint.color_at(Vec2::new(50.0, 40.0)).a - 0.15).abs() < 1e-6);
        assert_eq!(paint.color_at(Vec2::new(150.0, 0.0)).a, 0.0);
    }

    #[test]
    fn test_radial_gradient_fades_to_outer() {
        let paint = Paint::RadialGradient {
            center: Vec2::new(10.0, 10.0),
            radius: 20.0,
            inner: Rgba::green(0.6),
            outer: Rgba::green(0.0),
        };
        assert!((paint.color_at(Vec2::new(10.0, 10.0)).a - 0.6).abs() < 1e-6);
        assert!((paint.color_at(Vec2::new(20.0, 10.0)).a - 0.3).abs() < 1e-6);
        assert_eq!(paint.color_at(Vec2::new(40.0, 10.0)).a, 0.0);
    }

    #[test]
    fn test_color_alpha_is_clamped() {
        assert_eq!(Rgba::green(1.7).a, 1.0);
        assert_eq!(Rgba::black(-0.2).a, 0.0);
    }
}
