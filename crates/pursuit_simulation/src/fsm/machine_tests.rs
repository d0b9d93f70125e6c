//! Tests for generic state machine.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use crate::fsm::{FsmError, State, StateMachine, Transition};
    use crate::services::{DebugShape, GizmoBuffer, GizmoColor};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Key {
        A,
        B,
        C,
    }

    /// Контекст = журнал вызовов
    type Journal = Vec<String>;

    struct Probe {
        name: &'static str,
        next: Option<Key>,
        after_ticks: u32,
        ticks: u32,
    }

    impl Probe {
        fn idle(name: &'static str) -> Self {
            Self { name, next: None, after_ticks: 0, ticks: 0 }
        }

        fn leading_to(name: &'static str, next: Key, after_ticks: u32) -> Self {
            Self { name, next: Some(next), after_ticks, ticks: 0 }
        }
    }

    impl State<Key, Journal> for Probe {
        fn on_enter(&mut self, ctx: &mut Journal) {
            self.ticks = 0;
            ctx.push(format!("enter {}", self.name));
        }

        fn on_update(&mut self, ctx: &mut Journal, _delta: f32) -> Transition<Key, Journal> {
            self.ticks += 1;
            ctx.push(format!("update {}", self.name));
            match self.next {
                Some(next) if self.ticks >= self.after_ticks => Transition::To(next),
                _ => Transition::Stay,
            }
        }

        fn on_exit(&mut self, ctx: &mut Journal) {
            ctx.push(format!("exit {}", self.name));
        }

        fn draw_gizmos(&self, _ctx: &Journal, gizmos: &mut GizmoBuffer) {
            gizmos.wire_sphere(Vec3::ZERO, self.ticks as f32, GizmoColor::Blue);
        }
    }

    /// Состояние, которое на первом update просит свежий инстанс себя же
    struct Restarting;

    impl State<Key, Journal> for Restarting {
        fn on_enter(&mut self, ctx: &mut Journal) {
            ctx.push("enter restarting".to_string());
        }

        fn on_update(&mut self, _ctx: &mut Journal, _delta: f32) -> Transition<Key, Journal> {
            Transition::Fresh(Key::C, Box::new(Probe::idle("fresh")))
        }

        fn on_exit(&mut self, ctx: &mut Journal) {
            ctx.push("exit restarting".to_string());
        }
    }

    fn two_state_machine() -> StateMachine<Key, Journal> {
        StateMachine::builder()
            .entry(Key::A)
            .state(Key::A, Probe::idle("a"))
            .state(Key::B, Probe::idle("b"))
            .build()
            .expect("valid machine")
    }

    #[test]
    fn test_build_without_entry_fails() {
        let result = StateMachine::<Key, Journal>::builder()
            .state(Key::A, Probe::idle("a"))
            .build();
        assert!(matches!(result, Err(FsmError::MissingEntryState)));
    }

    #[test]
    fn test_build_with_unregistered_entry_fails() {
        let result = StateMachine::<Key, Journal>::builder()
            .entry(Key::B)
            .state(Key::A, Probe::idle("a"))
            .build();
        assert!(matches!(result, Err(FsmError::EntryNotRegistered(_))));
    }

    #[test]
    fn test_no_state_before_first_tick() {
        let fsm = two_state_machine();
        assert!(!fsm.is_started());
        assert_eq!(fsm.current(), None);
        assert_eq!(fsm.entry(), Key::A);
    }

    #[test]
    fn test_first_tick_enters_entry_then_updates() {
        let mut fsm = two_state_machine();
        let mut journal = Journal::new();

        fsm.tick(&mut journal, 0.1).unwrap();

        assert!(fsm.is_in(Key::A));
        assert_eq!(journal, vec!["enter a", "update a"]);
    }

    #[test]
    fn test_exit_completes_before_enter() {
        let mut fsm = two_state_machine();
        let mut journal = Journal::new();

        fsm.set_state(Key::A, &mut journal).unwrap();
        fsm.set_state(Key::B, &mut journal).unwrap();
        fsm.set_state(Key::A, &mut journal).unwrap();

        assert_eq!(
            journal,
            vec!["enter a", "exit a", "enter b", "exit b", "enter a"]
        );
        assert_eq!(fsm.previous(), Some(Key::B));
    }

    #[test]
    fn test_reentering_same_state_runs_exit_and_enter() {
        let mut fsm = two_state_machine();
        let mut journal = Journal::new();

        fsm.set_state(Key::B, &mut journal).unwrap();
        fsm.set_state(Key::B, &mut journal).unwrap();

        assert_eq!(journal, vec!["enter b", "exit b", "enter b"]);
        assert!(fsm.is_in(Key::B));
    }

    #[test]
    fn test_unknown_state_leaves_machine_untouched() {
        let mut fsm = two_state_machine();
        let mut journal = Journal::new();
        fsm.set_state(Key::A, &mut journal).unwrap();

        let result = fsm.set_state(Key::C, &mut journal);

        assert!(matches!(result, Err(FsmError::UnknownState(_))));
        assert!(fsm.is_in(Key::A));
        assert_eq!(journal, vec!["enter a"]);
    }

    #[test]
    fn test_update_requested_transition() {
        let mut fsm = StateMachine::builder()
            .entry(Key::A)
            .state(Key::A, Probe::leading_to("a", Key::B, 2))
            .state(Key::B, Probe::idle("b"))
            .build()
            .unwrap();
        let mut journal = Journal::new();

        fsm.tick(&mut journal, 0.1).unwrap();
        assert!(fsm.is_in(Key::A));

        fsm.tick(&mut journal, 0.1).unwrap();
        assert!(fsm.is_in(Key::B));
        assert_eq!(
            journal,
            vec!["enter a", "update a", "update a", "exit a", "enter b"]
        );
    }

    #[test]
    fn test_fresh_transition_replaces_instance_after_exit() {
        let mut fsm = StateMachine::builder()
            .entry(Key::C)
            .state(Key::C, Restarting)
            .build()
            .unwrap();
        let mut journal = Journal::new();

        fsm.tick(&mut journal, 0.1).unwrap();

        assert!(fsm.is_in(Key::C));
        assert_eq!(fsm.previous(), Some(Key::C));
        assert_eq!(
            journal,
            vec!["enter restarting", "exit restarting", "enter fresh"]
        );

        // Теперь под ключом C живёт новый инстанс
        fsm.tick(&mut journal, 0.1).unwrap();
        assert_eq!(journal.last().map(String::as_str), Some("update fresh"));
    }

    #[test]
    fn test_fresh_state_can_introduce_unregistered_key() {
        let mut fsm = two_state_machine();
        let mut journal = Journal::new();
        fsm.tick(&mut journal, 0.1).unwrap();

        assert!(!fsm.is_registered(Key::C));
        fsm.set_fresh_state(Key::C, Box::new(Probe::idle("late")), &mut journal);

        assert!(fsm.is_in(Key::C));
        assert!(fsm.is_registered(Key::C));
        assert_eq!(journal[journal.len() - 2..], ["exit a", "enter late"]);
    }

    #[test]
    fn test_draw_gizmos_delegates_to_current_state() {
        let mut fsm = two_state_machine();
        let mut journal = Journal::new();
        let mut gizmos = GizmoBuffer::new();

        fsm.draw_gizmos(&journal, &mut gizmos);
        assert!(gizmos.shapes().is_empty());

        fsm.tick(&mut journal, 0.1).unwrap();
        fsm.draw_gizmos(&journal, &mut gizmos);
        assert_eq!(
            gizmos.shapes(),
            &[DebugShape::WireSphere { center: Vec3::ZERO, radius: 1.0, color: GizmoColor::Blue }]
        );
    }
}
