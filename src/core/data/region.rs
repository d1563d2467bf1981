use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    NonFinite {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "region bounds must be finite: x [{}, {}], y [{}, {}]",
                    x_min, x_max, y_min, y_max
                )
            }
        }
    }
}

impl Error for RegionError {}

/// A rectangle of the complex plane, stored as its four bounds.
///
/// Construction only rejects non-finite bounds. Degenerate extents (zero,
/// negative or below the floor) are legal here and get clamped by
/// [`Region::with_min_extent`] wherever the view is committed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Region {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, RegionError> {
        if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
            return Err(RegionError::NonFinite {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Builds a region around a centre. `None` when any input is non-finite
    /// or either extent is not positive.
    #[must_use]
    pub fn from_center(center_x: f64, center_y: f64, width: f64, height: f64) -> Option<Self> {
        if !center_x.is_finite()
            || !center_y.is_finite()
            || !width.is_finite()
            || !height.is_finite()
            || width <= 0.0
            || height <= 0.0
        {
            return None;
        }

        let half_width = width * 0.5;
        let half_height = height * 0.5;

        Self::new(
            center_x - half_width,
            center_x + half_width,
            center_y - half_height,
            center_y + half_height,
        )
        .ok()
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn bounds(&self) -> [f64; 4] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.bounds().iter().all(|bound| bound.is_finite())
            && self.width().is_finite()
            && self.height().is_finite()
    }

    /// Re-centres any axis narrower than `min_extent` so that it spans
    /// exactly `min_extent` about its original midpoint.
    #[must_use]
    pub fn with_min_extent(self, min_extent: f64) -> Self {
        let mut clamped = self;

        if clamped.width() < min_extent {
            let (center_x, _) = clamped.center();
            clamped.x_min = center_x - min_extent / 2.0;
            clamped.x_max = center_x + min_extent / 2.0;
        }

        if clamped.height() < min_extent {
            let (_, center_y) = clamped.center();
            clamped.y_min = center_y - min_extent / 2.0;
            clamped.y_max = center_y + min_extent / 2.0;
        }

        clamped
    }

    #[must_use]
    pub fn is_below_extent(&self, min_extent: f64) -> bool {
        self.width() < min_extent || self.height() < min_extent
    }

    /// Linear interpolation of each bound, `t == 0` giving `self` and
    /// `t == 1` giving `target` exactly.
    #[must_use]
    pub fn lerp(&self, target: &Region, t: f64) -> Self {
        let mix = |from: f64, to: f64| from * (1.0 - t) + to * t;

        Self {
            x_min: mix(self.x_min, target.x_min),
            x_max: mix(self.x_max, target.x_max),
            y_min: mix(self.y_min, target.y_min),
            y_max: mix(self.y_max, target.y_max),
        }
    }

    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Option<Self> {
        Self::new(
            self.x_min + dx,
            self.x_max + dx,
            self.y_min + dy,
            self.y_max + dy,
        )
        .ok()
    }

    /// Scales both extents by `factor` about `anchor`. `factor < 1` zooms in.
    #[must_use]
    pub fn scaled(&self, factor: f64, anchor: (f64, f64)) -> Option<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return None;
        }

        let (anchor_x, anchor_y) = anchor;

        Self::new(
            anchor_x + (self.x_min - anchor_x) * factor,
            anchor_x + (self.x_max - anchor_x) * factor,
            anchor_y + (self.y_min - anchor_y) * factor,
            anchor_y + (self.y_max - anchor_y) * factor,
        )
        .ok()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x [{:.17}, {:.17}] y [{:.17}, {:.17}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
