// Side-scrolling follow camera

use crate::core::math::{clamp, lerp};

/// How quickly the camera eases toward its target (higher = snappier)
const FOLLOW_SMOOTHNESS: f32 = 5.0;

/// Smooth-follow camera for a horizontally scrolling scene.
///
/// Tracks only an x offset; the view is always the full scene height. Pure
/// math, no projection matrices: the renderer derives its ortho bounds from
/// [`view_range`](Self::view_range).
#[derive(Debug, Clone)]
pub struct FollowCamera {
    /// Left edge of the view in world space
    x: f32,
    /// Width of the visible slice of the scene
    view_width: f32,
    /// Total scene width the camera may pan across
    scene_width: f32,
}

impl FollowCamera {
    pub fn new(view_width: f32, scene_width: f32) -> Self {
        Self {
            x: 0.0,
            view_width,
            scene_width,
        }
    }

    /// Ease toward centering `target_x`, clamped to the scene edges
    pub fn follow(&mut self, target_x: f32, dt: f32) {
        let desired = target_x - self.view_width / 2.0;
        let blend = (FOLLOW_SMOOTHNESS * dt).min(1.0);

        self.x = lerp(self.x, desired, blend);
        self.x = clamp(self.x, 0.0, self.scene_width - self.view_width);
    }

    /// Left edge of the view
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Visible world-space range as (left, right)
    pub fn view_range(&self) -> (f32, f32) {
        (self.x, self.x + self.view_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_starts_at_scene_origin() {
        let camera = FollowCamera::new(800.0, 1600.0);
        assert_relative_eq!(camera.x(), 0.0);
        assert_eq!(camera.view_range(), (0.0, 800.0));
    }

    #[test]
    fn test_eases_toward_target() {
        let mut camera = FollowCamera::new(800.0, 1600.0);

        camera.follow(900.0, 0.1);
        let first = camera.x();
        assert!(first > 0.0 && first < 500.0, "should move part way");

        camera.follow(900.0, 0.1);
        assert!(camera.x() > first, "should keep closing the gap");
    }

    #[test]
    fn test_converges_on_a_still_target() {
        let mut camera = FollowCamera::new(800.0, 1600.0);
        for _ in 0..200 {
            camera.follow(900.0, 0.1);
        }
        // Target centered: left edge at 900 - 400
        assert_relative_eq!(camera.x(), 500.0, epsilon = 0.5);
    }

    #[test]
    fn test_clamped_to_scene_edges() {
        let mut camera = FollowCamera::new(800.0, 1600.0);

        // Target far left: cannot scroll before the scene start
        for _ in 0..50 {
            camera.follow(50.0, 0.1);
        }
        assert_relative_eq!(camera.x(), 0.0);

        // Target far right: right edge pinned to the scene end
        for _ in 0..200 {
            camera.follow(1550.0, 0.1);
        }
        assert_relative_eq!(camera.x(), 800.0);
        assert_eq!(camera.view_range(), (800.0, 1600.0));
    }

    #[test]
    fn test_large_delta_does_not_overshoot() {
        let mut camera = FollowCamera::new(800.0, 1600.0);
        camera.follow(900.0, 10.0);
        assert_relative_eq!(camera.x(), 500.0);
    }
}
