use std::io::{self, Write};

use crate::config::Options;
use crate::data::{Label, Project};
use crate::error::Error;
use crate::gitlab::LabelApi;
use crate::output::{
    print_deleted, print_deleting, print_errors, print_processing, print_skip, print_would_delete,
};

/// What a run did, for the final report and the exit code
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub projects: usize,
    pub deleted: usize,
    pub skipped: usize,
    pub failed_projects: usize,
}

/// Process exit status for a finished run: 1 on any failure, including projects skipped
/// with `keep_going`.
pub fn exit_code(result: &Result<Summary, Error>) -> i32 {
    match result {
        Ok(summary) => i32::from(summary.failed_projects > 0),
        Err(error) => error.exit_code(),
    }
}

/// Keep the orphans, in order. Labels still in use get a `[SKIP]` notice with the first
/// reason found; group labels are dropped without a word.
pub fn filter_orphans(labels: Vec<Label>, out: &mut impl Write) -> io::Result<Vec<Label>> {
    let mut orphans = Vec::new();
    for label in labels {
        if !label.is_project_label {
            continue;
        }
        match label.skip_reason() {
            Some(reason) => print_skip(out, &label, reason)?,
            None => orphans.push(label),
        }
    }
    Ok(orphans)
}

/// Walks every project and deletes its orphan labels, one request at a time.
pub struct Cleaner<A> {
    api: A,
    options: Options,
}

impl<A: LabelApi> Cleaner<A> {
    pub fn new(api: A, options: Options) -> Self {
        Self { api, options }
    }

    /// Progress goes to `out`. With `keep_going`, per-project errors go to `err`;
    /// otherwise the first error ends the run.
    pub fn run(&self, out: &mut impl Write, err: &mut impl Write) -> Result<Summary, Error> {
        let mut summary = Summary::default();

        for project in self.api.list_projects()? {
            summary.projects += 1;
            print_processing(out, &project)?;

            match self.clean_project(&project, out, &mut summary) {
                Ok(()) => {}
                Err(Error::Io(io_err)) => return Err(Error::Io(io_err)),
                Err(error) if self.options.keep_going => {
                    tracing::warn!(project_id = project.id, %error, "project failed, continuing");
                    summary.failed_projects += 1;
                    print_errors(err, &error.messages())?;
                }
                Err(error) => return Err(error),
            }

            writeln!(out)?;
        }

        writeln!(out)?;
        Ok(summary)
    }

    fn clean_project(
        &self,
        project: &Project,
        out: &mut impl Write,
        summary: &mut Summary,
    ) -> Result<(), Error> {
        let labels = self.api.list_labels(project.id)?;
        let project_labels = labels.iter().filter(|l| l.is_project_label).count();

        let orphans = filter_orphans(labels, out)?;
        summary.skipped += project_labels - orphans.len();

        for label in &orphans {
            if self.options.dry_run {
                print_would_delete(out, label)?;
                continue;
            }
            print_deleting(out, label)?;
            if let Err(error) = self.api.delete_label(project.id, label.id) {
                // Finish the `deleting ... ..` line before the error is reported.
                writeln!(out)?;
                return Err(error);
            }
            print_deleted(out)?;
            summary.deleted += 1;
        }
        Ok(())
    }
}
