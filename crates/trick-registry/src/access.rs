//! Administrative access collaborator
//!
//! Viewing or editing installation home paths is an administrative
//! operation. The host decides who holds that right; the registry only
//! asks through this seam and surfaces a hard denial.

/// Host permission seam for the configuration surface.
pub trait AccessPolicy: Send + Sync {
    /// Whether the current caller holds administer rights.
    fn can_administer(&self) -> bool;
}

/// Grants everything. Standalone and test use.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrestricted;

impl AccessPolicy for Unrestricted {
    fn can_administer(&self) -> bool {
        true
    }
}

/// Denies all administrative operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnly;

impl AccessPolicy for ReadOnly {
    fn can_administer(&self) -> bool {
        false
    }
}
