use std::time::Duration;

// Page integration for the background canvas.

// DOM hooks
pub const CONTAINER_ID: &str = "p5-background"; // host element the canvas is appended to
pub const CANVAS_ID: &str = "background-canvas";

// Broadcast to the 3D/overlay layer whenever the front artist changes
pub const ARTIST_CHANGE_EVENT: &str = "artist-change";

// `?seed=<u64>` pins the pattern RNG
pub const SEED_QUERY_PARAM: &str = "seed";

// Frame pacing: the grid is redrawn at most this often
pub const TARGET_FPS: u32 = 30;
// rAF timestamps jitter; a frame this close to its slot still counts
pub const FRAME_SLACK: Duration = Duration::from_millis(2);
