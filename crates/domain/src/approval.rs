//! Review approval settings.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// How many peer approvals a review needs before it counts as approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawApprovalConfig")]
pub struct ApprovalConfig {
    min_count: u32,
}

/// Unchecked wire shape of [`ApprovalConfig`].
#[derive(Deserialize)]
struct RawApprovalConfig {
    min_count: u32,
}

impl TryFrom<RawApprovalConfig> for ApprovalConfig {
    type Error = ValidationError;

    fn try_from(raw: RawApprovalConfig) -> Result<Self, Self::Error> {
        Self::new(raw.min_count)
    }
}

impl ApprovalConfig {
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroApprovalCount`] when `min_count` is zero.
    pub fn new(min_count: u32) -> Result<Self, ValidationError> {
        if min_count == 0 {
            return Err(ValidationError::ZeroApprovalCount);
        }
        Ok(Self { min_count })
    }

    #[must_use]
    pub fn min_count(self) -> u32 {
        self.min_count
    }

    /// Whether `approval_count` approvals are enough.
    #[must_use]
    pub fn is_approved(self, approval_count: u32) -> bool {
        approval_count >= self.min_count
    }
}
