//! Default value functions for serde deserialization.

use super::time::Clock;

pub fn show_milliseconds() -> bool {
    false
}

pub fn clock() -> Clock {
    Clock::Local
}
