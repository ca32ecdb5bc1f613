use reqwest::blocking::Client;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Credentials;
use crate::data::{Label, Project};
use crate::error::Error;

const TOKEN_HEADER: &str = "PRIVATE-TOKEN";
const NEXT_PAGE_HEADER: &str = "x-next-page";

/// The three GitLab calls the cleanup needs.
pub trait LabelApi {
    fn list_projects(&self) -> Result<Vec<Project>, Error>;

    fn list_labels(&self, project_id: i64) -> Result<Vec<Label>, Error>;

    fn delete_label(&self, project_id: i64, label_id: i64) -> Result<(), Error>;
}

/// Blocking client for the GitLab REST API (v4)
pub struct GitlabClient {
    http: Client,
    credentials: Credentials,
    all_pages: bool,
}

struct Page {
    body: Option<Value>,
    next_page: Option<u32>,
}

impl GitlabClient {
    pub fn new(credentials: Credentials, all_pages: bool) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            credentials,
            all_pages,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v4/{path}", self.credentials.base_url())
    }

    /// Send one request and check the decoded body for GitLab's error shapes.
    fn send(&self, method: Method, url: &str) -> Result<Page, Error> {
        tracing::debug!(method = method.as_str(), url, "GitLab request");

        let response = self
            .http
            .request(method, url)
            .header(TOKEN_HEADER, self.credentials.token())
            .send()?;

        let status = response.status();
        let next_page = response
            .headers()
            .get(NEXT_PAGE_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok());
        let text = response.text()?;

        tracing::trace!(%status, bytes = text.len(), "GitLab response");

        Ok(Page {
            body: check_body(status, &text)?,
            next_page,
        })
    }

    /// GET a listing, following `x-next-page` only when asked to.
    fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, Error> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let url = if self.all_pages {
                format!("{}&page={page}", self.url(path))
            } else {
                self.url(path)
            };

            let response = self.send(Method::GET, &url)?;
            match response.body {
                None | Some(Value::Null) => {}
                Some(body) => items.extend(serde_json::from_value::<Vec<T>>(body)?),
            }

            match response.next_page {
                Some(next) if self.all_pages && next > page => {
                    tracing::debug!(next, "following next page");
                    page = next;
                }
                _ => break,
            }
        }
        Ok(items)
    }
}

impl LabelApi for GitlabClient {
    fn list_projects(&self) -> Result<Vec<Project>, Error> {
        let projects: Vec<Project> = self.list("projects?simple=true&per_page=100")?;
        tracing::info!(count = projects.len(), "fetched projects");
        Ok(projects)
    }

    fn list_labels(&self, project_id: i64) -> Result<Vec<Label>, Error> {
        let labels: Vec<Label> =
            self.list(&format!("projects/{project_id}/labels?with_counts=true&per_page=100"))?;
        tracing::info!(project_id, count = labels.len(), "fetched labels");
        Ok(labels)
    }

    fn delete_label(&self, project_id: i64, label_id: i64) -> Result<(), Error> {
        let url = self.url(&format!("projects/{project_id}/labels/{label_id}"));
        self.send(Method::DELETE, &url)?;
        Ok(())
    }
}

/// An empty body is fine (DELETE answers `204 No Content`).
fn check_body(status: StatusCode, text: &str) -> Result<Option<Value>, Error> {
    if text.trim().is_empty() {
        return if status.is_success() {
            Ok(None)
        } else {
            Err(status_error(status))
        };
    }

    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) if !status.is_success() => return Err(status_error(status)),
        Err(err) => return Err(err.into()),
    };

    if let Some(object) = value.as_object() {
        if object.contains_key("error") {
            return Err(Error::Api {
                description: object
                    .get("error_description")
                    .map(value_to_text)
                    .unwrap_or_default(),
            });
        }
        if !status.is_success() {
            if let Some(message) = object.get("message") {
                return Err(Error::Api {
                    description: value_to_text(message),
                });
            }
        }
    }

    if status.is_success() {
        Ok(Some(value))
    } else {
        Err(status_error(status))
    }
}

fn status_error(status: StatusCode) -> Error {
    Error::Api {
        description: status.to_string(),
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
