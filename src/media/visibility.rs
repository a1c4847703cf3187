/// Axis-aligned rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Grow by `margin` on every side. Negative margins shrink.
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: (self.width + 2.0 * margin).max(0.0),
            height: (self.height + 2.0 * margin).max(0.0),
        }
    }

    /// Overlap with positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Result of one visibility observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bands {
    /// Element overlaps the viewport itself.
    pub in_viewport: bool,
    /// Element overlaps the viewport grown by the proximity margin.
    pub in_proximity: bool,
}

pub fn observe(element: Rect, viewport: Rect, margin: f32) -> Bands {
    Bands {
        in_viewport: element.intersects(&viewport),
        in_proximity: element.intersects(&viewport.expand(margin)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proximity_band_reaches_past_the_viewport() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let just_below = Rect::new(0.0, 630.0, 800.0, 200.0);
        let bands = observe(just_below, viewport, 50.0);
        assert!(!bands.in_viewport);
        assert!(bands.in_proximity);

        let far_below = just_below.translate(0.0, 100.0);
        assert_eq!(
            observe(far_below, viewport, 50.0),
            Bands {
                in_viewport: false,
                in_proximity: false
            }
        );
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }
}
