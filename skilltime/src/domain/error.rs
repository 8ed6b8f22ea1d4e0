use thiserror::Error;

use super::{EntryId, ProjectId};
use crate::export::ExportError;
use crate::store::StorageError;

/// Errors that can occur during time tracking operations.
///
/// Validation variants leave tracker state untouched.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("project {0} must not be blank")]
    BlankProjectField(&'static str),
    #[error("invalid hourly rate: {0}")]
    InvalidRate(f64),
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    #[error("entry not found: {0}")]
    EntryNotFound(EntryId),
    #[error("no project selected")]
    NoProjectSelected,
    #[error("duration must be greater than zero")]
    EmptyDuration,
    #[error("duration of {hours}h {minutes}m is too long")]
    DurationTooLong { hours: u32, minutes: u32 },
    #[error("project {0} is in use by the running timer")]
    ProjectInUse(ProjectId),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}
