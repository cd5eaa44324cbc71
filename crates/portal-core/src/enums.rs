//! Status enums, conversation states, message roles, and languages.
//!
//! Case-facing enums use `snake_case` serialization. `ConversationState` keeps
//! the server's PascalCase names verbatim since the chat backend owns them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// CaseStatus
// ---------------------------------------------------------------------------

/// Status of a citizen's case.
///
/// ```text
/// new → under_review → approved → completed
///                    → rejected
/// ```
///
/// The store does not enforce this lifecycle: any status may follow any
/// status. `can_transition_to` reports whether a move stays on the forward
/// path so callers can flag the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    New,
    UnderReview,
    Approved,
    Rejected,
    Completed,
}

impl CaseStatus {
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::UnderReview,
        Self::Approved,
        Self::Rejected,
        Self::Completed,
    ];

    /// Forward lifecycle successors of the current status.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::New => &[Self::UnderReview],
            Self::UnderReview => &[Self::Approved, Self::Rejected],
            Self::Approved => &[Self::Completed],
            Self::Rejected | Self::Completed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// `completed` and `rejected` end the lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Completed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::UnderReview => "under_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
        }
    }

    /// Translation key for the status badge label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::New => "statusNew",
            Self::UnderReview => "statusUnderReview",
            Self::Approved => "statusApproved",
            Self::Rejected => "statusRejected",
            Self::Completed => "statusCompleted",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConversationState
// ---------------------------------------------------------------------------

/// Server-reported stage of the chat intake flow.
///
/// ```text
/// AwaitingGreeting → AwaitingServiceSelection → AwaitingDetails
///   → AwaitingDocuments → AwaitingConfirmation → Completed
/// ```
///
/// The diagram is descriptive only. The client adopts whatever state the
/// server reports after each exchange and never validates the move.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum ConversationState {
    #[default]
    AwaitingGreeting,
    AwaitingServiceSelection,
    AwaitingDetails,
    AwaitingDocuments,
    AwaitingConfirmation,
    Completed,
}

impl ConversationState {
    pub const ALL: [Self; 6] = [
        Self::AwaitingGreeting,
        Self::AwaitingServiceSelection,
        Self::AwaitingDetails,
        Self::AwaitingDocuments,
        Self::AwaitingConfirmation,
        Self::Completed,
    ];

    /// Parse the wire name. Unknown names fall back to `AwaitingGreeting`.
    ///
    /// Use [`ConversationState::is_known`] first if the caller wants to log
    /// the fallback.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "AwaitingGreeting" => Self::AwaitingGreeting,
            "AwaitingServiceSelection" => Self::AwaitingServiceSelection,
            "AwaitingDetails" => Self::AwaitingDetails,
            "AwaitingDocuments" => Self::AwaitingDocuments,
            "AwaitingConfirmation" => Self::AwaitingConfirmation,
            "Completed" => Self::Completed,
            _ => Self::AwaitingGreeting,
        }
    }

    /// Whether `raw` names one of the six server states.
    #[must_use]
    pub fn is_known(raw: &str) -> bool {
        Self::ALL.iter().any(|state| state.as_str() == raw)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingGreeting => "AwaitingGreeting",
            Self::AwaitingServiceSelection => "AwaitingServiceSelection",
            Self::AwaitingDetails => "AwaitingDetails",
            Self::AwaitingDocuments => "AwaitingDocuments",
            Self::AwaitingConfirmation => "AwaitingConfirmation",
            Self::Completed => "Completed",
        }
    }

    /// The display stage this state maps to, 1:1.
    #[must_use]
    pub const fn ui_stage(self) -> UiStage {
        match self {
            Self::AwaitingGreeting => UiStage::Greeting,
            Self::AwaitingServiceSelection => UiStage::Selecting,
            Self::AwaitingDetails => UiStage::Details,
            Self::AwaitingDocuments => UiStage::Documents,
            Self::AwaitingConfirmation => UiStage::Confirm,
            Self::Completed => UiStage::Complete,
        }
    }

    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UiStage
// ---------------------------------------------------------------------------

/// Display-facing label for a conversation state.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UiStage {
    #[default]
    Greeting,
    Selecting,
    Details,
    Documents,
    Confirm,
    Complete,
}

impl UiStage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Selecting => "selecting",
            Self::Details => "details",
            Self::Documents => "documents",
            Self::Confirm => "confirm",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for UiStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MessageRole
// ---------------------------------------------------------------------------

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Agent,
}

impl MessageRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Agent => "agent",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Interface language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    /// Arabic renders right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
