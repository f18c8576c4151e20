use glam::DVec3;

/// Half-line in world space, produced by screen-space picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: DVec3,
    /// Unit direction.
    pub direction: DVec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    #[must_use]
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Parameter of the point on the ray closest to `point` (may be
    /// negative when `point` lies behind the origin).
    #[must_use]
    pub fn closest_parameter(&self, point: DVec3) -> f64 {
        (point - self.origin).dot(self.direction)
    }
}
