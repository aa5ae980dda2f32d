/// localStorage key the session is persisted under.
pub const STORAGE_KEY: &str = "reward_spinner_v1";

/// How often the client re-samples the wall clock.
pub const CLOCK_INTERVAL_MS: u32 = 60_000;

/// Duration of the spin animation in milliseconds.
pub const SPIN_DURATION_MS: u32 = 4_000;

pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Minimum number of full rotations added on top of the prior rotation.
pub const MIN_SPIN_TURNS: f64 = 5.0;

/// Jitter stays within this fraction of a slice on either side of its center.
pub const JITTER_FRACTION: f64 = 0.4;

/// Pointer position in screen coordinates (0 = 3 o'clock, clockwise), i.e. the top.
pub const POINTER_ANGLE_DEGREES: f64 = 270.0;

pub const LOCKED_TASK_MESSAGE: &str = "Complete a Special Task to Unlock!";
pub const LOCKED_TIME_MESSAGE: &str = "Not available right now.";
