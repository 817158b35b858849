//! Game loop controller
//!
//! Owns the session and drives it one frame at a time from the host's frame
//! scheduler. At most one frame request is outstanding; pausing or resetting
//! cancels it so no stale tick can run against a fresh session.

use crate::render::draw_frame;
use crate::systems::handle_key_down;
use crate::{
    Difficulty, FrameHandle, FrameScheduler, GameAction, GameFsm, GameSession, Prompt, RunState,
    Score, ScoreStore, Side, Snapshot, Surface,
};

pub const CONFIRM_RESTART: &str = "Do you want to start a new game?";

/// Host collaborators the loop drives
pub struct Host {
    pub surface: Box<dyn Surface>,
    pub scheduler: Box<dyn FrameScheduler>,
    pub store: Box<dyn ScoreStore>,
    pub prompt: Box<dyn Prompt>,
}

pub struct GameLoop {
    session: GameSession,
    fsm: GameFsm,
    host: Host,
    pending_frame: Option<FrameHandle>,
}

impl GameLoop {
    pub fn new(session: GameSession, host: Host) -> Self {
        Self {
            session,
            fsm: GameFsm::new(),
            host,
            pending_frame: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.fsm.state()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot(self.fsm.state())
    }

    /// Start (or restart) a game. Discarding nonzero scores needs confirmation.
    pub fn start(&mut self) {
        if !self.session.score.is_zero() && !self.host.prompt.confirm(CONFIRM_RESTART) {
            log::info!("Restart declined, keeping {:?}", self.session.score);
            return;
        }

        self.cancel_frame();
        self.session.reset();
        self.push_scores();
        self.fsm.transition(GameAction::Start);
        self.schedule_frame();
    }

    /// Toggle Running ⇄ Paused; ignored in any other state
    pub fn pause(&mut self) {
        match self.fsm.state() {
            RunState::Running => {
                self.fsm.transition(GameAction::Pause);
                self.cancel_frame();
            }
            RunState::Paused => {
                self.fsm.transition(GameAction::Resume);
                self.schedule_frame();
            }
            RunState::Idle | RunState::GameOver => {}
        }
    }

    /// Frame callback from the scheduler
    pub fn tick(&mut self) {
        // The request that invoked us has fired
        self.pending_frame = None;

        if !self.fsm.is_running() {
            return;
        }

        self.draw();

        let events = self.session.advance();
        if events.ball_hit_paddle {
            log::debug!("Ball hit a paddle");
        }
        if events.ball_hit_wall {
            log::debug!("Ball hit a wall");
        }
        let scorer = events.scorer;
        if let Some(scorer) = scorer {
            if let Some(winner) = self.on_point_scored(scorer) {
                self.finish(winner);
                return;
            }
            self.session.serve_again();
        }

        self.schedule_frame();
    }

    /// Paint the current state without advancing it
    pub fn draw(&mut self) {
        let snap = self.snapshot();
        draw_frame(self.host.surface.as_mut(), &snap, &self.session.config);
    }

    /// Paddle control from a keydown event, applied immediately
    pub fn handle_key(&mut self, key: &str) {
        handle_key_down(&mut self.session.world, &self.session.config, key);
    }

    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        log::info!("Difficulty {} -> {}", self.session.difficulty, difficulty);
        self.session.set_difficulty(difficulty);
    }

    /// Hydrate scores pushed by the store subscription; `None` reads as zero.
    /// Last writer wins.
    pub fn apply_remote_scores(&mut self, remote: Option<Score>) {
        let score = remote.unwrap_or_default();
        if score != self.session.score {
            log::debug!("Remote scores {:?} replace {:?}", score, self.session.score);
        }
        self.session.score = score;
    }

    fn on_point_scored(&mut self, scorer: Side) -> Option<Side> {
        let win_score = self.session.config.win_score;
        let (score, winner) = self.session.score.on_point_scored(scorer, win_score);
        log::debug!("Player {} scored: {}-{}", scorer.player_number(), score.left, score.right);
        self.push_scores();
        winner
    }

    fn finish(&mut self, winner: Side) {
        self.fsm.transition(GameAction::Win);
        log::info!("Player {} wins", winner.player_number());
        self.host
            .prompt
            .notify(&format!("Player {} Wins!", winner.player_number()));

        self.cancel_frame();
        self.session.reset();
        self.push_scores();
        self.fsm.transition(GameAction::Reset);
    }

    /// Fire-and-forget write of the current scores
    fn push_scores(&mut self) {
        if let Err(e) = self.host.store.set(self.session.score) {
            log::warn!("Score push failed, continuing locally: {e}");
        }
    }

    fn schedule_frame(&mut self) {
        if self.pending_frame.is_some() {
            return;
        }
        match self.host.scheduler.request_frame() {
            Ok(handle) => self.pending_frame = Some(handle),
            // Left unset so the next start or resume asks again
            Err(e) => log::error!("{e}"),
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.host.scheduler.cancel_frame(handle);
        }
    }
}
