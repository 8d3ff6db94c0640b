use crate::domain::ParticleTuning;
use crate::domain::systems::win::WinRule;
use std::{env, time::Duration};

// Runtime constants and environment overrides (gameplay defaults live in `ParticleTuning`).

pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;

pub const TICK_INTERVAL: Duration = Duration::from_millis(20);
// Lets the final state render before the winner is shown.
pub const ANNOUNCE_DELAY: Duration = Duration::from_millis(100);

pub const RENDER_CHANNEL_CAPACITY: usize = 4096;

/// Shape of the diagnostic log lines on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// How the binary presents the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// Structured `tracing` output only.
    Log,
    /// Newline-delimited JSON render events on stdout.
    Json,
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

// Arena extents must be real, positive lengths; `inf` and `NaN` parse as f32 too.
fn extent(raw: Option<f32>, default: f32) -> f32 {
    raw.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(default)
}

pub fn arena_width() -> f32 {
    extent(parsed("ARENA_WIDTH"), DEFAULT_ARENA_WIDTH)
}

pub fn arena_height() -> f32 {
    extent(parsed("ARENA_HEIGHT"), DEFAULT_ARENA_HEIGHT)
}

pub fn tick_interval() -> Duration {
    parsed::<u64>("TICK_INTERVAL_MS")
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
        .unwrap_or(TICK_INTERVAL)
}

pub fn announce_delay() -> Duration {
    parsed::<u64>("ANNOUNCE_DELAY_MS")
        .map(Duration::from_millis)
        .unwrap_or(ANNOUNCE_DELAY)
}

pub fn render_channel_capacity() -> usize {
    parsed::<usize>("RENDER_CHANNEL_CAPACITY")
        .filter(|c| *c > 0)
        .unwrap_or(RENDER_CHANNEL_CAPACITY)
}

pub fn particle_tuning() -> ParticleTuning {
    let defaults = ParticleTuning::default();
    ParticleTuning {
        initial_count_per_type: parsed("INITIAL_COUNT_PER_TYPE")
            .unwrap_or(defaults.initial_count_per_type),
        ..defaults
    }
}

pub fn win_rule() -> WinRule {
    match env::var("WIN_RULE").as_deref() {
        Ok("single_survivor") => WinRule::SingleSurvivor,
        Ok("as_observed") | Err(_) => WinRule::AsObserved,
        Ok(other) => {
            tracing::warn!(value = other, "unknown WIN_RULE; using as_observed");
            WinRule::AsObserved
        }
    }
}

pub fn log_format() -> LogFormat {
    log_format_from(env::var("LOG_FORMAT").ok().as_deref())
}

fn log_format_from(value: Option<&str>) -> LogFormat {
    match value.map(str::trim) {
        Some("json") => LogFormat::Json,
        _ => LogFormat::Compact,
    }
}

pub fn render_format() -> RenderFormat {
    match env::var("RENDER_FORMAT").as_deref() {
        Ok("json") => RenderFormat::Json,
        _ => RenderFormat::Log,
    }
}
