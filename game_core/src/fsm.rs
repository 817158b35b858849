//! Run-state machine
//!
//! `Idle → Running → {Paused ⇄ Running} → GameOver → Idle`. A start from any
//! state restarts the session.

/// Game run states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Pause,
    Resume,
    Win,
    Reset,
}

/// Game Finite State Machine
#[derive(Debug, Default)]
pub struct GameFsm {
    state: RunState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Apply `action`; an action the current state does not accept is
    /// logged and leaves the state unchanged.
    pub fn transition(&mut self, action: GameAction) {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                log::info!("Run state {from_state:?} -> {next_state:?} ({action:?})");
            }
            None => log::warn!("Ignored {action:?} in {from_state:?}"),
        }
    }

    fn get_next_state(&self, action: GameAction) -> Option<RunState> {
        match (self.state, action) {
            (_, GameAction::Start) => Some(RunState::Running),

            (RunState::Running, GameAction::Pause) => Some(RunState::Paused),
            (RunState::Running, GameAction::Win) => Some(RunState::GameOver),

            (RunState::Paused, GameAction::Resume) => Some(RunState::Running),

            (RunState::GameOver, GameAction::Reset) => Some(RunState::Idle),

            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), RunState::Idle);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        assert_eq!(fsm.state(), RunState::Running);
    }

    #[test]
    fn test_rejected_transition_keeps_state() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Pause);
        assert_eq!(fsm.state(), RunState::Idle);
        fsm.transition(GameAction::Resume);
        assert_eq!(fsm.state(), RunState::Idle);
    }

    #[test]
    fn test_pause_resume_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::Pause);
        assert_eq!(fsm.state(), RunState::Paused);
        fsm.transition(GameAction::Win);
        assert_eq!(fsm.state(), RunState::Paused, "No win while paused");
        fsm.transition(GameAction::Resume);
        assert!(fsm.is_running());
    }

    #[test]
    fn test_game_over_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::Win);
        assert_eq!(fsm.state(), RunState::GameOver);
        fsm.transition(GameAction::Reset);
        assert_eq!(fsm.state(), RunState::Idle);
    }

    #[test]
    fn test_start_restarts_from_any_state() {
        for action in [GameAction::Pause, GameAction::Win] {
            let mut fsm = GameFsm::new();
            fsm.transition(GameAction::Start);
            fsm.transition(action);
            fsm.transition(GameAction::Start);
            assert!(fsm.is_running());
        }
    }
}
