//! Camera system: frame-based perspective and orthographic cameras,
//! navigation commands, and screen-space picking.

/// Navigation commands produced by the input layer.
pub mod command;
/// Camera trait and shared viewpoint state.
pub mod core;
/// Orthographic projection.
pub mod orthographic;
/// Perspective projection.
pub mod perspective;

pub use self::command::CameraCommand;
pub use self::core::{Camera, ClipRange, ProjectionKind, Viewpoint};
pub use self::orthographic::{OrthoExtents, OrthographicCamera};
pub use self::perspective::PerspectiveCamera;

#[cfg(test)]
mod tests {
    use glam::DVec3;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    const TOLERANCE: f64 = 1e-5;

    fn cameras() -> Vec<Box<dyn Camera>> {
        let viewpoint = Viewpoint::new(
            DVec3::new(0.0, 0.0, 5.0),
            DVec3::NEG_Z,
            DVec3::Y,
            ClipRange::new(0.1, 100.0).unwrap(),
        )
        .unwrap();
        vec![
            Box::new(PerspectiveCamera::new(viewpoint, 45.0, 1.0).unwrap()),
            Box::new(OrthographicCamera::new(
                viewpoint,
                OrthoExtents::centered(800.0, 600.0).unwrap(),
            )),
        ]
    }

    fn random_command(rng: &mut StdRng) -> CameraCommand {
        let angle = rng.random_range(-std::f64::consts::PI..std::f64::consts::PI);
        match rng.random_range(0..5) {
            0 => CameraCommand::Yaw { angle },
            1 => CameraCommand::Pitch { angle },
            2 => CameraCommand::Roll { angle },
            3 => CameraCommand::Pan {
                right: rng.random_range(-10.0..10.0),
                up: rng.random_range(-10.0..10.0),
            },
            _ => CameraCommand::Dolly {
                distance: rng.random_range(-10.0..10.0),
            },
        }
    }

    #[test]
    fn navigation_preserves_orthonormality() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for mut camera in cameras() {
            for step in 0..10_000 {
                let _ = random_command(&mut rng).apply(camera.as_mut());
                let (r, u, f) = (camera.right(), camera.up(), camera.look_at());
                assert!(
                    camera.frame().is_orthonormal(TOLERANCE),
                    "basis drifted after {step} steps: {r:?} {u:?} {f:?}"
                );
            }
        }
    }

    #[test]
    fn navigation_preserves_handedness() {
        let mut rng = StdRng::seed_from_u64(42);
        for mut camera in cameras() {
            for _ in 0..1_000 {
                let _ = random_command(&mut rng).apply(camera.as_mut());
            }
            let right = camera.look_at().cross(camera.up());
            assert!(right.abs_diff_eq(camera.right(), TOLERANCE));
        }
    }

    #[test]
    fn each_rotation_keeps_its_own_axis() {
        let mut rng = StdRng::seed_from_u64(7);
        for mut camera in cameras() {
            for _ in 0..200 {
                let angle = rng.random_range(-3.0..3.0);

                let up = camera.up();
                camera.yaw(angle);
                assert!(camera.up().abs_diff_eq(up, TOLERANCE));

                let right = camera.right();
                camera.pitch(angle);
                assert!(camera.right().abs_diff_eq(right, TOLERANCE));

                let forward = camera.look_at();
                camera.roll(angle);
                assert!(camera.look_at().abs_diff_eq(forward, TOLERANCE));
            }
        }
    }

    #[test]
    fn positive_yaw_turns_left() {
        for mut camera in cameras() {
            camera.yaw(std::f64::consts::FRAC_PI_2);
            // Looking down -Z with +Y up, a counter-clockwise turn about +Y
            // ends up looking down -X.
            assert!(camera.look_at().abs_diff_eq(DVec3::NEG_X, 1e-12));
        }
    }

    #[test]
    fn positive_pitch_tilts_up() {
        for mut camera in cameras() {
            camera.pitch(std::f64::consts::FRAC_PI_2);
            // Right is +X; -Z turned +90° about +X is +Y.
            assert!(camera.look_at().abs_diff_eq(DVec3::Y, 1e-12));
        }
    }

    #[test]
    fn translate_along_up_moves_by_magnitude() {
        for mut camera in cameras() {
            camera.roll(0.8);
            let start = camera.position();
            let up = camera.up();
            camera.translate(up * 2.5);
            assert!(((camera.position() - start).length() - 2.5).abs() < 1e-12);
            assert!(camera.up().abs_diff_eq(up, 1e-12));
        }
    }

    #[test]
    fn kinds_are_reported() {
        let kinds: Vec<_> = cameras().iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            [ProjectionKind::Perspective, ProjectionKind::Orthographic]
        );
    }
}
