//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod integrity;
mod staleness;

pub use integrity::{find_integrity_issues, validate_integrity, IntegrityIssue};
pub use staleness::{compare, has_pending_changes, ChangeKind, LessonChange};
