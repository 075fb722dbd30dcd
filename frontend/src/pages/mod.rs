//! One component per route.

pub mod home;
pub mod not_found;
pub mod project_detail;
pub mod project_editor;
pub mod project_form;
pub mod projects;
pub mod submission_detail;
pub mod template_builder;
pub mod templates;
