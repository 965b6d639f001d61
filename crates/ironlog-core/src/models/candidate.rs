// ABOUTME: Exercise match candidate model with ownership scope
// ABOUTME: Candidates are user-owned or global; other users' exercises are never visible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who can see a candidate exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum CandidateScope {
    /// Created by one user, visible only to them
    User {
        /// Owning user
        owner_id: Uuid,
    },
    /// Shared catalog entry
    Global,
}

/// An exercise the matcher may return
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Exercise identifier
    pub id: Uuid,
    /// Display title as stored
    pub title: String,
    /// Ownership scope
    pub scope: CandidateScope,
}

impl MatchCandidate {
    /// A global catalog exercise
    pub fn global(id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            scope: CandidateScope::Global,
        }
    }

    /// An exercise owned by `owner_id`
    pub fn owned_by(id: Uuid, title: impl Into<String>, owner_id: Uuid) -> Self {
        Self {
            id,
            title: title.into(),
            scope: CandidateScope::User { owner_id },
        }
    }

    /// Whether `user_id` may see this candidate
    #[must_use]
    pub fn is_visible_to(&self, user_id: Uuid) -> bool {
        match self.scope {
            CandidateScope::Global => true,
            CandidateScope::User { owner_id } => owner_id == user_id,
        }
    }

    /// Whether the candidate belongs to a specific user
    #[must_use]
    pub const fn is_user_owned(&self) -> bool {
        matches!(self.scope, CandidateScope::User { .. })
    }
}
