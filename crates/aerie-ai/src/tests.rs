#[cfg(test)]
mod tests {
    use glam::DVec3;

    use aerie_core::constants::*;

    use crate::homing::{evaluate, in_aggro_range, HomingContext};

    fn make_context(position: DVec3, target: DVec3, dt: f64) -> HomingContext {
        HomingContext {
            position,
            target,
            speed: DRONE_SPEED,
            dt,
        }
    }

    #[test]
    fn test_drone_inside_radius_closes_in() {
        let ctx = make_context(DVec3::new(10.0, 3.0, 0.0), DVec3::new(0.0, 3.0, 0.0), 0.5);
        let update = evaluate(&ctx);
        assert!(update.pursuing);
        // 2 units/s for 0.5 s.
        assert!((update.new_position.x - 9.0).abs() < 1e-12);
        assert_eq!(update.new_position.y, 3.0);
    }

    #[test]
    fn test_drone_outside_radius_holds() {
        let start = DVec3::new(DRONE_AGGRO_RADIUS + 0.5, 1.0, 0.0);
        let update = evaluate(&make_context(start, DVec3::new(0.0, 1.0, 0.0), 0.1));
        assert!(!update.pursuing);
        assert_eq!(update.new_position, start);
    }

    #[test]
    fn test_aggro_boundary_is_exclusive() {
        let target = DVec3::ZERO;
        assert!(!in_aggro_range(DVec3::new(DRONE_AGGRO_RADIUS, 0.0, 0.0), target));
        assert!(in_aggro_range(DVec3::new(DRONE_AGGRO_RADIUS - 1e-6, 0.0, 0.0), target));
    }

    #[test]
    fn test_drone_steps_full_speed_near_target() {
        // Greedy pursuit: the step is speed * dt even when that passes the player.
        let ctx = make_context(DVec3::new(0.1, 0.0, 0.0), DVec3::ZERO, 1.0);
        let update = evaluate(&ctx);
        assert!(update.pursuing);
        assert!((update.new_position.x - (0.1 - DRONE_SPEED)).abs() < 1e-12);
        assert_eq!(update.new_position.y, 0.0);
        assert_eq!(update.new_position.z, 0.0);
    }

    #[test]
    fn test_drone_on_target_stays_put() {
        let update = evaluate(&make_context(DVec3::ONE, DVec3::ONE, 0.1));
        assert!(update.pursuing);
        assert_eq!(update.new_position, DVec3::ONE);
    }

    #[test]
    fn test_homing_follows_3d_heading() {
        let ctx = make_context(DVec3::new(-8.0, 5.0, -6.0), DVec3::new(0.0, 1.0, 0.0), 0.1);
        let update = evaluate(&ctx);
        let moved = update.new_position - ctx.position;
        assert!((moved.length() - DRONE_SPEED * 0.1).abs() < 1e-12);
        assert!(moved.y < 0.0, "Drone above the player should descend");
        assert!(update.new_position.distance(ctx.target) < ctx.position.distance(ctx.target));
    }

    #[test]
    fn test_zero_dt_is_inert() {
        let start = DVec3::new(1.0, 1.0, 1.0);
        let update = evaluate(&make_context(start, DVec3::ZERO, 0.0));
        assert!(!update.pursuing);
        assert_eq!(update.new_position, start);
    }
}
