//! Delete unused ("orphan") labels from every GitLab project a token can see.
//!
//! A label is an orphan when it belongs to the project itself (not to a group) and no open
//! issue, closed issue or open merge request uses it.

pub mod cleaner;
pub mod config;
pub mod data;
pub mod error;
pub mod gitlab;
pub mod output;

pub use cleaner::{Cleaner, Summary, exit_code, filter_orphans};
pub use config::{Credentials, Options};
pub use error::Error;
pub use gitlab::{GitlabClient, LabelApi};
