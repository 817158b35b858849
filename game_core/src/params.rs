/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (canvas pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPAWN_Y: f32 = 160.0; // top edge, vertically centred
    pub const PADDLE_STEP: f32 = 30.0; // units per keydown event

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;

    // Difficulty speeds (units per frame)
    pub const SPEED_EASY: f32 = 2.0;
    pub const SPEED_MEDIUM: f32 = 4.0;
    pub const SPEED_HARD: f32 = 6.0;

    // Score
    pub const WIN_SCORE: u8 = 3; // First to 3 wins
}
