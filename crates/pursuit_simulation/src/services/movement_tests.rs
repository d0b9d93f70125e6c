//! Tests for headless movement agent.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use crate::services::{KinematicAgent, MovementAgent};

    #[test]
    fn test_stopped_agent_does_not_move() {
        let mut agent = KinematicAgent::new(0.5);
        agent.set_speed(4.0);
        agent.set_destination(Vec3::new(10.0, 0.0, 0.0));

        // По умолчанию агент остановлен
        assert!(agent.is_stopped());
        assert_eq!(agent.step(Vec3::ZERO, 1.0), Vec3::ZERO);
    }

    #[test]
    fn test_agent_moves_towards_destination() {
        let mut agent = KinematicAgent::new(0.5);
        agent.set_speed(2.0);
        agent.set_stopped(false);
        agent.set_destination(Vec3::new(10.0, 0.0, 0.0));

        let next = agent.step(Vec3::ZERO, 1.0);
        assert!((next.x - 2.0).abs() < 1e-5);
        assert_eq!(next.z, 0.0);
    }

    #[test]
    fn test_agent_never_overshoots() {
        let mut agent = KinematicAgent::new(0.0);
        agent.set_speed(100.0);
        agent.set_stopped(false);
        agent.set_destination(Vec3::new(3.0, 0.0, 4.0));

        let next = agent.step(Vec3::ZERO, 1.0);
        assert!(next.distance(Vec3::new(3.0, 0.0, 4.0)) < 1e-5);
    }

    #[test]
    fn test_agent_rests_inside_stopping_distance() {
        let mut agent = KinematicAgent::new(1.0);
        agent.set_speed(5.0);
        agent.set_stopped(false);
        agent.set_destination(Vec3::new(0.8, 0.0, 0.0));

        assert_eq!(agent.step(Vec3::ZERO, 1.0), Vec3::ZERO);
    }

    #[test]
    fn test_negative_speed_is_clamped() {
        let mut agent = KinematicAgent::default();
        agent.set_speed(-3.0);
        assert_eq!(agent.speed(), 0.0);
    }
}
