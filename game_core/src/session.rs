use crate::{
    advance, create_ball, create_paddle, Ball, Config, Difficulty, Events, GameRng, Paddle,
    Playfield, RunState, Score, Side,
};
use glam::Vec2;
use hecs::World;

/// Read-only copy of what the renderer and the score store need
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub score: Score,
    pub state: RunState,
}

/// Everything one game mutates: playfield, paddles, ball and scores
pub struct GameSession {
    pub world: World,
    pub config: Config,
    pub field: Playfield,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub difficulty: Difficulty,
}

impl GameSession {
    pub fn new(config: Config, rng: GameRng) -> Self {
        let field = Playfield::from_config(&config);
        let difficulty = config.difficulty;
        let mut session = Self {
            world: World::new(),
            config,
            field,
            score: Score::new(),
            events: Events::new(),
            rng,
            difficulty,
        };
        session.reset();
        session
    }

    /// Centre the ball on a random diagonal, centre the paddles, zero the scores
    pub fn reset(&mut self) {
        self.world.clear();
        self.score = Score::new();
        self.events.clear();

        create_paddle(&mut self.world, Side::Left, self.config.paddle_spawn_y);
        create_paddle(&mut self.world, Side::Right, self.config.paddle_spawn_y);

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(self.field.center(), self.difficulty.speed(), &mut self.rng);
        create_ball(&mut self.world, ball.pos, ball.vel);
    }

    /// Run the physics for one frame
    pub fn advance(&mut self) -> &Events {
        advance(&mut self.world, &self.field, &self.config, &mut self.events);
        &self.events
    }

    /// Put the ball back in the middle for the next rally
    pub fn serve_again(&mut self) {
        let center = self.field.center();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve_again(center);
        }
    }

    /// Switch speed preset, rescaling the ball in flight
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.rescale(difficulty.speed());
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| paddle.y)
            .unwrap_or(self.config.paddle_spawn_y)
    }

    pub fn snapshot(&self, state: RunState) -> Snapshot {
        let center = self.field.center();
        let (ball_x, ball_y) = self
            .ball()
            .map(|ball| (ball.pos.x, ball.pos.y))
            .unwrap_or((center.x, center.y));

        Snapshot {
            ball_x,
            ball_y,
            paddle_left_y: self.paddle_y(Side::Left),
            paddle_right_y: self.paddle_y(Side::Right),
            score: self.score,
            state,
        }
    }
}
