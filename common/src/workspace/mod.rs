//! Page-controller operations over an injected [`Repository`].
//!
//! Each page of the application reads what it needs through a `Workspace`
//! when it mounts and writes back through it on submit. Nothing is cached: a
//! `Workspace` holds only the repository, so two pages never disagree about
//! what is stored.
//!
//! Timestamps are passed in by the caller so the operations stay
//! deterministic under test.

mod draft;

pub use draft::{FieldDraft, ProjectDraft, TemplateDraft};

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::error::{FormError, RecordKind, Result};
use crate::form::{self, FormValues};
use crate::model::{FormSubmission, Project, Template, new_id};
use crate::storage::Repository;

/// Name shown for a project whose template no longer resolves.
pub const UNKNOWN_TEMPLATE: &str = "Unknown";

/// A project as listed on the projects page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub project: Project,
    pub template_name: String,
}

/// Everything the submission detail page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionDetail {
    pub project: Project,
    pub template: Template,
    pub submission: FormSubmission,
}

/// Record counts for the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overview {
    pub templates: usize,
    pub projects: usize,
}

impl Overview {
    /// Whether the landing page shows the management cards instead of the
    /// getting-started card.
    pub fn has_content(&self) -> bool {
        self.templates > 0 || self.projects > 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct Workspace<R> {
    repo: R,
}

impl<R: Repository> Workspace<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Wraps `repo` after making sure every collection exists.
    pub fn open(repo: R) -> Result<Self> {
        repo.initialize()?;
        Ok(Self::new(repo))
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn overview(&self) -> Overview {
        Overview {
            templates: self.repo.read_all::<Template>().len(),
            projects: self.repo.read_all::<Project>().len(),
        }
    }

    pub fn templates(&self) -> Vec<Template> {
        self.repo.read_all()
    }

    pub fn template(&self, id: &str) -> Result<Template> {
        self.repo
            .find_by_id(id)
            .ok_or_else(|| FormError::not_found(RecordKind::Template, id))
    }

    pub fn create_template(&self, draft: &TemplateDraft, now: DateTime<Utc>) -> Result<Template> {
        draft.check()?;
        let template = Template {
            id: new_id(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            fields: draft.fields.clone(),
            created_at: now,
        };
        self.repo.append(template.clone())?;
        info!(
            "created template {} ({} fields)",
            template.id,
            template.fields.len()
        );
        Ok(template)
    }

    pub fn projects(&self) -> Vec<Project> {
        self.repo.read_all()
    }

    /// Projects with the name of their template, or [`UNKNOWN_TEMPLATE`].
    pub fn project_summaries(&self) -> Vec<ProjectSummary> {
        let templates = self.templates();
        self.projects()
            .into_iter()
            .map(|project| {
                let template_name = templates
                    .iter()
                    .find(|t| t.id == project.template_id)
                    .map_or_else(|| UNKNOWN_TEMPLATE.to_string(), |t| t.name.clone());
                ProjectSummary {
                    project,
                    template_name,
                }
            })
            .collect()
    }

    pub fn project(&self, id: &str) -> Result<Project> {
        self.repo
            .find_by_id(id)
            .ok_or_else(|| FormError::not_found(RecordKind::Project, id))
    }

    /// The project and the template it binds; either missing is not-found.
    pub fn project_with_template(&self, id: &str) -> Result<(Project, Template)> {
        let project = self.project(id)?;
        let template = self.template(&project.template_id)?;
        Ok((project, template))
    }

    pub fn create_project(&self, draft: &ProjectDraft, now: DateTime<Utc>) -> Result<Project> {
        draft.check()?;
        let project = Project {
            id: new_id(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            template_id: draft.template_id.clone(),
            created_at: now,
        };
        self.repo.append(project.clone())?;
        info!("created project {} on template {}", project.id, project.template_id);
        Ok(project)
    }

    /// Whether the project has collected submissions and is therefore frozen.
    pub fn is_locked(&self, project_id: &str) -> bool {
        self.repo
            .read_all::<FormSubmission>()
            .iter()
            .any(|s| s.project_id == project_id)
    }

    /// Replaces name, description and template of an existing project in
    /// place. Id and creation time are kept.
    pub fn update_project(&self, id: &str, draft: &ProjectDraft) -> Result<Project> {
        draft.check()?;
        if self.is_locked(id) {
            warn!("refusing to edit project {} with submissions", id);
            return Err(FormError::ProjectLocked { id: id.to_string() });
        }

        let mut updated = self.project(id)?;
        updated.name = draft.name.clone();
        updated.description = draft.description.clone();
        updated.template_id = draft.template_id.clone();

        if !self.repo.replace(&updated)? {
            return Err(FormError::not_found(RecordKind::Project, id));
        }
        info!("updated project {}", id);
        Ok(updated)
    }

    /// Submissions of one project, in the order they were made.
    pub fn submissions_for(&self, project_id: &str) -> Vec<FormSubmission> {
        self.repo
            .read_all::<FormSubmission>()
            .into_iter()
            .filter(|s| s.project_id == project_id)
            .collect()
    }

    /// Validates `values` against the project's template and stores a new
    /// submission. Nothing is written when validation fails.
    pub fn submit(
        &self,
        project_id: &str,
        values: &FormValues,
        now: DateTime<Utc>,
    ) -> Result<FormSubmission> {
        let (project, template) = self.project_with_template(project_id)?;
        form::validate(&template, values)?;

        let submission = FormSubmission {
            id: new_id(),
            project_id: project.id,
            template_id: template.id,
            values: values.clone(),
            submitted_at: now,
        };
        self.repo.append(submission.clone())?;
        info!(
            "stored submission {} for project {}",
            submission.id, submission.project_id
        );
        Ok(submission)
    }

    /// Looks up a submission shown under `project_id`. A submission filed
    /// under another project is not found here.
    pub fn submission_detail(&self, project_id: &str, submission_id: &str) -> Result<SubmissionDetail> {
        let (project, template) = self.project_with_template(project_id)?;
        let submission = self
            .repo
            .find_by_id::<FormSubmission>(submission_id)
            .filter(|s| s.project_id == project.id)
            .ok_or_else(|| FormError::not_found(RecordKind::Submission, submission_id))?;
        Ok(SubmissionDetail {
            project,
            template,
            submission,
        })
    }
}
