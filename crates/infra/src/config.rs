use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// How far ahead of now, in millis, pending events are materialized
    /// when a rotation is synced. Occurrences beyond this horizon are
    /// created by a later sync.
    pub event_sync_horizon: i64,
    /// Upcoming events further away than this, in millis, are hidden
    /// from the upcoming-events query. The UI does not display years,
    /// so "lapping" events close to a year out would be confusing.
    /// This is a display window only and never affects event sync.
    pub upcoming_events_window: i64,
}

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

impl Config {
    pub fn new() -> Self {
        Self {
            event_sync_horizon: parse_millis_env("EVENT_SYNC_HORIZON", 90 * MILLIS_PER_DAY),
            upcoming_events_window: parse_millis_env(
                "UPCOMING_EVENTS_WINDOW",
                // 11 months
                335 * MILLIS_PER_DAY,
            ),
        }
    }
}

fn parse_millis_env(var: &str, default: i64) -> i64 {
    let value = match std::env::var(var) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.parse::<i64>() {
        Ok(millis) if millis > 0 => millis,
        _ => {
            warn!(
                "The given {}: {} is not a valid positive millisecond count, falling back to the default: {}.",
                var, value, default
            );
            default
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
