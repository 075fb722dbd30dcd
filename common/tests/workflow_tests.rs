//! End-to-end flows through the workspace, backed by the in-memory store.

use chrono::{DateTime, TimeZone, Utc};
use common::FormError;
use common::form::{FieldInput, FormValues};
use common::model::{FieldKind, FieldValue, FormSubmission, Project, Template};
use common::storage::{JsonRepository, KeyValueBackend, MemoryBackend, Repository};
use common::workspace::{ProjectDraft, TemplateDraft, Workspace};
use pretty_assertions::assert_eq;

type MemoryWorkspace = Workspace<JsonRepository<MemoryBackend>>;

// ═══════════════════════════════════════════════════════════════════════
// Fixtures
// ═══════════════════════════════════════════════════════════════════════

fn workspace() -> MemoryWorkspace {
    Workspace::open(JsonRepository::new(MemoryBackend::new())).unwrap()
}

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 2, hour, 0, 0).unwrap()
}

/// `Survey` with one required email field.
fn survey(ws: &MemoryWorkspace) -> Template {
    let mut draft = TemplateDraft::new();
    draft.name = "Survey".into();
    draft.current.label = "Email".into();
    draft.current.kind = FieldKind::Email;
    draft.current.required = true;
    draft.add_field();
    ws.create_template(&draft, at(8)).unwrap()
}

fn project_on(ws: &MemoryWorkspace, name: &str, template_id: &str) -> Project {
    let draft = ProjectDraft {
        name: name.into(),
        description: String::new(),
        template_id: template_id.into(),
    };
    ws.create_project(&draft, at(9)).unwrap()
}

fn email_form(template: &Template, email: &str) -> FormValues {
    let mut values = FormValues::initial_for(template);
    values.apply(&template.fields[0], FieldInput::Text(email.into()));
    values
}

// ═══════════════════════════════════════════════════════════════════════
// Submissions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn empty_required_email_is_rejected_and_nothing_stored() {
    let ws = workspace();
    let template = survey(&ws);
    let project = project_on(&ws, "Q1", &template.id);

    let err = ws
        .submit(&project.id, &email_form(&template, ""), at(10))
        .unwrap_err();

    match &err {
        FormError::Validation(validation) => assert_eq!(validation.labels(), ["Email"]),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Email is required");
    assert!(ws.repository().read_all::<FormSubmission>().is_empty());
}

#[test]
fn filled_email_is_stored_once() {
    let ws = workspace();
    let template = survey(&ws);
    let project = project_on(&ws, "Q1", &template.id);
    let email_id = template.fields[0].id.clone();

    let submission = ws
        .submit(&project.id, &email_form(&template, "a@b.com"), at(10))
        .unwrap();

    assert_eq!(
        submission.values.get(&email_id),
        Some(&FieldValue::Text("a@b.com".into()))
    );
    assert_eq!(submission.project_id, project.id);
    assert_eq!(submission.template_id, template.id);
    assert_eq!(submission.submitted_at, at(10));

    let listed = ws.submissions_for(&project.id);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], submission);
}

#[test]
fn only_violated_labels_are_reported() {
    let ws = workspace();
    let mut draft = TemplateDraft::new();
    draft.name = "Intake".into();
    for (label, kind, required) in [
        ("Name", FieldKind::Text, true),
        ("Notes", FieldKind::Textarea, false),
        ("Topics", FieldKind::Checkbox, true),
        ("Start", FieldKind::Date, true),
    ] {
        draft.current.label = label.into();
        draft.current.kind = kind;
        draft.current.required = required;
        if kind.uses_options() {
            draft.current.options = vec!["rust".into(), "wasm".into()];
        }
        draft.add_field();
    }
    let template = ws.create_template(&draft, at(8)).unwrap();
    let project = project_on(&ws, "Intake 2024", &template.id);

    let mut values = FormValues::initial_for(&template);
    values.apply(&template.fields[0], FieldInput::Text("Ada".into()));

    let err = ws.submit(&project.id, &values, at(10)).unwrap_err();
    assert_eq!(err.to_string(), "Topics is required, Start is required");
    assert!(ws.submissions_for(&project.id).is_empty());

    values.apply(
        &template.fields[2],
        FieldInput::Toggle {
            option: "wasm".into(),
            checked: true,
        },
    );
    values.apply(&template.fields[3], FieldInput::Text("2024-06-01".into()));
    ws.submit(&project.id, &values, at(11)).unwrap();
    assert_eq!(ws.submissions_for(&project.id).len(), 1);
}

#[test]
fn submissions_are_listed_per_project_in_order() {
    let ws = workspace();
    let template = survey(&ws);
    let a = project_on(&ws, "A", &template.id);
    let b = project_on(&ws, "B", &template.id);

    let first = ws.submit(&a.id, &email_form(&template, "1@a.com"), at(10)).unwrap();
    ws.submit(&b.id, &email_form(&template, "1@b.com"), at(11)).unwrap();
    let second = ws.submit(&a.id, &email_form(&template, "2@a.com"), at(12)).unwrap();

    let ids: Vec<String> = ws.submissions_for(&a.id).into_iter().map(|s| s.id).collect();
    assert_eq!(ids, [first.id, second.id]);
}

// ═══════════════════════════════════════════════════════════════════════
// Projects
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn project_resolves_the_template_it_was_created_with() {
    let ws = workspace();
    let template = survey(&ws);
    let project = project_on(&ws, "Q1", &template.id);

    let (loaded, resolved) = ws.project_with_template(&project.id).unwrap();
    assert_eq!(loaded, project);
    assert_eq!(resolved, template);
}

#[test]
fn project_with_submissions_cannot_be_edited() {
    let ws = workspace();
    let template = survey(&ws);
    let other = survey(&ws);
    let project = project_on(&ws, "Q1", &template.id);
    ws.submit(&project.id, &email_form(&template, "a@b.com"), at(10))
        .unwrap();
    let before = ws.repository().backend().get("projects");

    let mut draft = ProjectDraft::from_project(&project);
    draft.name = "Renamed".into();
    draft.template_id = other.id.clone();
    let err = ws.update_project(&project.id, &draft).unwrap_err();

    assert!(matches!(err, FormError::ProjectLocked { .. }));
    assert_eq!(
        err.to_string(),
        "Can not edit the project. Already project have submissions"
    );
    assert_eq!(ws.project(&project.id).unwrap(), project);
    assert_eq!(ws.repository().backend().get("projects"), before);
}

#[test]
fn project_without_submissions_is_edited_in_place() {
    let ws = workspace();
    let template = survey(&ws);
    let other = survey(&ws);
    let first = project_on(&ws, "First", &template.id);
    let second = project_on(&ws, "Second", &template.id);

    let mut draft = ProjectDraft::from_project(&first);
    draft.template_id = other.id.clone();
    ws.update_project(&first.id, &draft).unwrap();

    let projects = ws.projects();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, first.id);
    assert_eq!(projects[0].template_id, other.id);
    assert_eq!(projects[1], second);
}

// ═══════════════════════════════════════════════════════════════════════
// Persistence
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn a_second_workspace_sees_the_same_records() {
    let backend = MemoryBackend::new();
    let first = Workspace::open(JsonRepository::new(&backend)).unwrap();
    let mut draft = TemplateDraft::new();
    draft.name = "Shared".into();
    draft.current.label = "Name".into();
    draft.add_field();
    let template = first.create_template(&draft, at(8)).unwrap();

    let second = Workspace::open(JsonRepository::new(&backend)).unwrap();
    assert_eq!(second.templates(), vec![template]);
}

#[test]
fn collections_round_trip_through_storage() {
    let ws = workspace();
    let template = survey(&ws);
    let project = project_on(&ws, "Q1", &template.id);
    let submission = ws
        .submit(&project.id, &email_form(&template, "a@b.com"), at(10))
        .unwrap();

    let repo = JsonRepository::new(MemoryBackend::new());
    repo.replace_all(&ws.templates()).unwrap();
    repo.replace_all(&ws.projects()).unwrap();
    repo.replace_all(&ws.submissions_for(&project.id)).unwrap();

    assert_eq!(repo.read_all::<Template>(), vec![template]);
    assert_eq!(repo.read_all::<Project>(), vec![project]);
    assert_eq!(repo.read_all::<FormSubmission>(), vec![submission]);
}
