//! Filtering and ordering of listed playgrounds

use std::str::FromStr;

use crate::core::project::Project;

/// Field to order a listing by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Playground name
    #[default]
    Name,
    /// Creation time
    Created,
    /// Last access time
    Accessed,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "created" => Ok(Self::Created),
            "accessed" => Ok(Self::Accessed),
            other => Err(format!(
                "unknown sort key '{other}' (expected name, created or accessed)"
            )),
        }
    }
}

/// Listing options
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Keep only playgrounds carrying this exact tag
    pub filter_tag: Option<String>,
    /// Ordering key
    pub sort: SortKey,
    /// Reverse the final order
    pub reverse: bool,
}

impl ListOptions {
    /// Filter and order `projects`
    ///
    /// Ties on the sort key are broken by name so the output is deterministic.
    pub fn apply(&self, projects: Vec<Project>) -> Vec<Project> {
        let mut projects: Vec<Project> = match &self.filter_tag {
            Some(tag) => projects.into_iter().filter(|p| p.has_tag(tag)).collect(),
            None => projects,
        };

        match self.sort {
            SortKey::Name => projects.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Created => {
                projects.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.name.cmp(&b.name)));
            }
            SortKey::Accessed => projects.sort_by(|a, b| {
                a.last_accessed
                    .cmp(&b.last_accessed)
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }

        if self.reverse {
            projects.reverse();
        }
        projects
    }
}
