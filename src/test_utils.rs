//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;

    use crate::core::project::Project;

    /// Generate a valid playground name (lowercase alphanumeric with hyphens)
    pub fn project_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,30}[a-z0-9]?".prop_filter("Name must not be empty", |s| !s.is_empty())
    }

    /// Generate a free-form tag
    pub fn tag() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 _.:-]{1,16}"
    }

    /// Generate free-form notes, including quotes and newlines
    pub fn notes() -> impl Strategy<Value = String> {
        "[ -~\n\t]{0,80}"
    }

    /// Generate a UTC timestamp with sub-second precision
    pub fn timestamp() -> impl Strategy<Value = DateTime<Utc>> {
        (0i64..4_102_444_800, 0u32..1_000_000_000).prop_map(|(secs, nanos)| {
            Utc.timestamp_opt(secs, nanos)
                .single()
                .unwrap_or_else(|| Utc.timestamp_opt(0, 0).unwrap())
        })
    }

    /// Generate a complete playground record with `path` cleared
    pub fn project_strategy() -> impl Strategy<Value = Project> {
        (
            project_name(),
            timestamp(),
            timestamp(),
            prop_oneof![Just("basic"), Just("web"), Just("cli"), Just("api"), Just("lib")],
            prop::collection::vec(tag(), 0..5),
            notes(),
        )
            .prop_map(|(name, created, last_accessed, template, tags, notes)| Project {
                name,
                created,
                last_accessed,
                template: template.to_string(),
                tags,
                notes,
                path: None,
            })
    }

    /// Generate an age string such as `90m`, `3d` or `1h30m`
    pub fn age_string() -> impl Strategy<Value = (String, i64)> {
        (0i64..500, 0i64..60).prop_map(|(hours, minutes)| {
            (format!("{hours}h{minutes}m"), hours * 3600 + minutes * 60)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_project_name_generator(name in project_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn test_project_strategy_has_no_path(project in project_strategy()) {
            prop_assert!(project.path.is_none());
        }
    }
}
