/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Weekly total colour: over 40h yellow, zero grey, otherwise plain.
pub fn color_for_week_total(hours: f64) -> &'static str {
    if hours > 40.0 {
        YELLOW
    } else if hours == 0.0 {
        GREY
    } else {
        RESET
    }
}
