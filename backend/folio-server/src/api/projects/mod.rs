pub mod project_submission;
#[allow(clippy::module_inception)]
pub mod projects;
