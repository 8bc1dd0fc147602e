//! Clean logic
//!
//! Removes playgrounds that have not been accessed for a given age.
//! Ages use the familiar duration syntax (`720h`, `1h30m`, `1.5h`, `300ms`)
//! with the extra `d` (day) and `w` (week) units.

use chrono::{DateTime, Duration, Utc};
use regex::Regex;

use crate::core::project::Project;
use crate::core::registry::Registry;
use crate::error::CleanError;

const AGE_UNIT: &str = "ns|us|µs|μs|ms|h|m|s|d|w";

// Fraction digits beyond this are below one nanosecond for every unit
const MAX_FRACTION_DIGITS: usize = 18;

/// Result of a clean operation
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Playgrounds that were removed
    pub removed: Vec<String>,
    /// Playgrounds that could not be removed, with the reason
    pub failed: Vec<(String, String)>,
}

fn unit_nanos(unit: &str) -> i128 {
    const SECOND: i128 = 1_000_000_000;
    match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => SECOND,
        "m" => 60 * SECOND,
        "h" => 3_600 * SECOND,
        "d" => 86_400 * SECOND,
        _ => 604_800 * SECOND,
    }
}

/// Parse an age such as `720h`, `30d`, `1h30m` or `1.5h`
///
/// Components are `<number><unit>` concatenated in any order, where the
/// number may carry a decimal fraction and the unit is one of `w`, `d`, `h`,
/// `m`, `s`, `ms`, `us` (or `µs`) and `ns`. A bare `0` is accepted. Signs
/// are rejected.
pub fn parse_age(input: &str) -> Result<Duration, CleanError> {
    let invalid = || CleanError::InvalidAge {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    if trimmed == "0" {
        return Ok(Duration::zero());
    }

    let whole = Regex::new(&format!(r"^(?:(?:\d+(?:\.\d*)?|\.\d+)(?:{AGE_UNIT}))+$"))
        .map_err(|_| invalid())?;
    if !whole.is_match(trimmed) {
        return Err(invalid());
    }

    let component =
        Regex::new(&format!(r"(\d*)(?:\.(\d*))?({AGE_UNIT})")).map_err(|_| invalid())?;
    let mut total: i128 = 0;
    for caps in component.captures_iter(trimmed) {
        let unit = unit_nanos(&caps[3]);

        let integer = match &caps[1] {
            "" => 0,
            digits => digits.parse::<i128>().map_err(|_| invalid())?,
        };
        let mut nanos = integer.checked_mul(unit).ok_or_else(invalid)?;

        if let Some(fraction) = caps.get(2).map(|m| m.as_str()) {
            let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            if !digits.is_empty() {
                let value: i128 = digits.parse().map_err(|_| invalid())?;
                let scale = 10_i128.pow(digits.len() as u32);
                nanos = nanos.checked_add(value * unit / scale).ok_or_else(invalid)?;
            }
        }

        total = total.checked_add(nanos).ok_or_else(invalid)?;
    }

    let nanos = i64::try_from(total).map_err(|_| invalid())?;
    Ok(Duration::nanoseconds(nanos))
}

/// Playgrounds last accessed strictly before `now - age`, oldest first
pub fn select_stale(projects: Vec<Project>, age: Duration, now: DateTime<Utc>) -> Vec<Project> {
    let Some(cutoff) = now.checked_sub_signed(age) else {
        return Vec::new();
    };
    let mut stale: Vec<Project> = projects
        .into_iter()
        .filter(|p| p.last_accessed < cutoff)
        .collect();
    stale.sort_by(|a, b| a.last_accessed.cmp(&b.last_accessed));
    stale
}

/// Remove every playground in `stale`
///
/// A failure on one playground is recorded and the rest are still removed.
pub fn remove_stale(registry: &Registry, stale: &[Project]) -> CleanResult {
    let mut result = CleanResult::default();
    for project in stale {
        match registry.remove(&project.name) {
            Ok(()) => result.removed.push(project.name.clone()),
            Err(e) => {
                tracing::warn!("Failed to remove '{}': {e}", project.name);
                result.failed.push((project.name.clone(), e.to_string()));
            }
        }
    }
    result
}
