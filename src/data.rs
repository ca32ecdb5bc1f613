use serde::Deserialize;

fn missing_id() -> i64 {
    -1
}

/// A GitLab project, as returned by `GET /projects?simple=true`
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Project {
    #[serde(default = "missing_id")]
    pub id: i64,
    pub name: String,
}

/// A project label with its usage counters (`GET /projects/:id/labels?with_counts=true`)
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Label {
    #[serde(default = "missing_id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_project_label: bool,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub closed_issues_count: u64,
    #[serde(default)]
    pub open_merge_requests_count: u64,
}

/// Why a project label is still in use
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    OpenIssues,
    ClosedIssues,
    OpenMergeRequests,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            Self::OpenIssues => "has open issues",
            Self::ClosedIssues => "has closed issues",
            Self::OpenMergeRequests => "has open merge requests",
        }
    }
}

impl Label {
    /// The first counter that keeps this label alive, checked in a fixed order.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        if self.open_issues_count > 0 {
            Some(SkipReason::OpenIssues)
        } else if self.closed_issues_count > 0 {
            Some(SkipReason::ClosedIssues)
        } else if self.open_merge_requests_count > 0 {
            Some(SkipReason::OpenMergeRequests)
        } else {
            None
        }
    }

    /// A project-scoped label nobody references.
    pub fn is_orphan(&self) -> bool {
        self.is_project_label && self.skip_reason().is_none()
    }
}
