//! Application-level configuration constants.

/// Path of the calculation endpoint, joined to the page origin.
pub const CALCULATE_PATH: &str = "/calculate";

/// How long the result area keeps its highlight class after a render.
pub const HIGHLIGHT_MS: u32 = 1_000;
