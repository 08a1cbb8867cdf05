//! Cron cadence analysis
//!
//! Models declare how often they should run as a cron expression. The
//! bridge consolidates those into one orchestrator schedule: it maps each
//! cadence to an interval, takes the finest one, and buckets it to a
//! recommended expression that dominates every model's run requirement.

const MINUTE: u64 = 60;
const HOUR: u64 = 3600;
const DAY: u64 = 86_400;
const WEEK: u64 = 604_800;
const MONTH: u64 = 2_592_000;
const YEAR: u64 = 31_536_000;

/// Platform-default schedule used when no model declares a cadence
/// (or when model cadences are explicitly ignored): every 6 hours.
pub const DEFAULT_SCHEDULE: &str = "0 */6 * * *";

/// Map a cron expression to its run interval in seconds.
///
/// Understands the `@` aliases and the common five-field shapes
/// (`*/N * * * *`, `0 * * * *`, `0 */N * * *`, `0 0 * * *`, `0 0 * * 0`,
/// and fixed day-of-month variants). Returns `None` for expressions it
/// cannot classify; callers treat those as "no declared cadence".
pub fn cadence_interval_seconds(expr: &str) -> Option<u64> {
    match expr.trim() {
        "@hourly" => return Some(HOUR),
        "@daily" | "@midnight" => return Some(DAY),
        "@weekly" => return Some(WEEK),
        "@monthly" => return Some(MONTH),
        "@yearly" | "@annually" => return Some(YEAR),
        _ => {}
    }

    let fields: Vec<&str> = expr.split_whitespace().collect();
    if fields.len() != 5 {
        return None;
    }
    let (minute, hour, dom, _month, dow) = (fields[0], fields[1], fields[2], fields[3], fields[4]);

    // Sub-hourly: */N in the minute field
    if let Some(step) = step_of(minute) {
        return Some(step * MINUTE);
    }

    if is_fixed(minute) {
        if hour == "*" {
            return Some(HOUR);
        }
        if let Some(step) = step_of(hour) {
            return Some(step * HOUR);
        }
        if is_fixed(hour) {
            if dom == "*" && dow == "*" {
                return Some(DAY);
            }
            if dom == "*" && is_fixed(dow) {
                return Some(WEEK);
            }
            if is_fixed(dom) && dow == "*" {
                return Some(MONTH);
            }
        }
    }

    None
}

/// Bucket an interval to the recommended orchestrator schedule expression.
pub fn recommended_expression(interval_seconds: u64) -> &'static str {
    if interval_seconds <= 5 * MINUTE {
        "*/5 * * * *"
    } else if interval_seconds <= 15 * MINUTE {
        "*/15 * * * *"
    } else if interval_seconds <= 30 * MINUTE {
        "*/30 * * * *"
    } else if interval_seconds <= HOUR {
        "0 * * * *"
    } else if interval_seconds <= 6 * HOUR {
        "0 */6 * * *"
    } else if interval_seconds <= DAY {
        "0 0 * * *"
    } else {
        "0 0 * * 0"
    }
}

fn step_of(field: &str) -> Option<u64> {
    field.strip_prefix("*/").and_then(|n| n.parse().ok())
}

fn is_fixed(field: &str) -> bool {
    field.parse::<u64>().is_ok()
}

#[cfg(test)]
#[path = "cadence_test.rs"]
mod tests;
