use thiserror::Error;

/// Everything that stops a cleanup run. All of them are fatal.
#[derive(Debug, Error)]
pub enum Error {
    /// One message per missing command-line value
    #[error("{}", .0.join(" "))]
    Usage(Vec<String>),

    /// The API answered with an `error` (or `message`) object
    #[error("{description}")]
    Api { description: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from GitLab: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Lines to show the user, one per problem.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Usage(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_keeps_one_message_per_argument() {
        let err = Error::Usage(vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(err.messages(), vec!["a", "b"]);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn api_error_shows_description_verbatim() {
        let err = Error::Api {
            description: "bad token".to_owned(),
        };
        assert_eq!(err.messages(), vec!["bad token"]);
    }
}
