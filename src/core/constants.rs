// Tick and timing
/// One animation frame at roughly 60Hz.
pub const TICK_INTERVAL_MS: u64 = 16;
/// Most ticks replayed after a stall (terminal resize, suspended process).
pub const MAX_CATCH_UP_TICKS: u32 = 5;

// Canvas
pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 500.0;
/// Horizontal spawn margin; balloons spawn with x in [margin, width - margin).
pub const SPAWN_MARGIN: f64 = 40.0;
/// Upper bound for configured canvas sizes and balloon radius.
pub const MAX_CANVAS_EXTENT: f64 = 1_000_000.0;

// Balloons
pub const BALLOON_RADIUS: f64 = 40.0;
pub const BALLOON_STRING_LENGTH: f64 = 20.0;
pub const MIN_BALLOON_SPEED: f64 = 0.5;
pub const MAX_BALLOON_SPEED: f64 = 1.0;

// Scoring
pub const CORRECT_POP_POINTS: u32 = 10;
pub const WRONG_POP_PENALTY: u32 = 5;
