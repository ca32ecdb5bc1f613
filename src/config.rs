use std::fmt;

use crate::error::Error;

pub const MISSING_BASE_URL: &str = "Please provide Gitlab instance base URL.";
pub const MISSING_TOKEN: &str = "Please provide Gitlab private token.";

/// Where to connect and who to connect as. Fixed for the whole run.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    base_url: String,
    token: String,
}

impl Credentials {
    /// Validate the two positional arguments.
    ///
    /// Reports every missing value at once. Trailing slashes are stripped from the base URL
    /// so that `{base}/api/v4/...` never contains `//`.
    pub fn resolve(base_url: Option<&str>, token: Option<&str>) -> Result<Self, Error> {
        let base_url = base_url.filter(|s| !s.trim().is_empty());
        let token = token.filter(|s| !s.trim().is_empty());

        let mut missing = Vec::new();
        if base_url.is_none() {
            missing.push(MISSING_BASE_URL.to_owned());
        }
        if token.is_none() {
            missing.push(MISSING_TOKEN.to_owned());
        }

        match (base_url, token) {
            (Some(base_url), Some(token)) => Ok(Self {
                base_url: base_url.trim_end_matches('/').to_owned(),
                token: token.to_owned(),
            }),
            _ => Err(Error::Usage(missing)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// How far the cleanup goes beyond the default single-page, abort-on-error run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Follow `x-next-page` instead of stopping after the first 100 records
    pub all_pages: bool,

    /// Report what would be deleted without deleting anything
    pub dry_run: bool,

    /// Report a failing project and move on to the next one
    pub keep_going: bool,
}
