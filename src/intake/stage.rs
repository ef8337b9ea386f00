use serde::{Deserialize, Serialize};
use strum::Display;

/// One position in the fixed six-step intake flow.
///
/// Declaration order is progression order; `Ord` follows it, so
/// `Stage::Business < Stage::Preview` holds by construction.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    #[default]
    Business,
    Audience,
    Story,
    Voice,
    Generating,
    Preview,
}

/// All stages in progression order.
pub const ALL_STAGES: [Stage; 6] = [
    Stage::Business,
    Stage::Audience,
    Stage::Story,
    Stage::Voice,
    Stage::Generating,
    Stage::Preview,
];

impl Stage {
    /// 1-based position shown in the progress header.
    pub fn position(self) -> u8 {
        match self {
            Self::Business => 1,
            Self::Audience => 2,
            Self::Story => 3,
            Self::Voice => 4,
            Self::Generating => 5,
            Self::Preview => 6,
        }
    }

    /// Next stage, clamped at `Preview`.
    pub fn next(self) -> Self {
        match self {
            Self::Business => Self::Audience,
            Self::Audience => Self::Story,
            Self::Story => Self::Voice,
            Self::Voice => Self::Generating,
            Self::Generating | Self::Preview => Self::Preview,
        }
    }

    /// Previous stage, clamped at `Business`.
    pub fn prev(self) -> Self {
        match self {
            Self::Business | Self::Audience => Self::Business,
            Self::Story => Self::Audience,
            Self::Voice => Self::Story,
            Self::Generating => Self::Voice,
            Self::Preview => Self::Generating,
        }
    }

    /// Human-facing title for the progress header.
    pub fn title(self) -> &'static str {
        match self {
            Self::Business => "Your Business",
            Self::Audience => "Your Audience",
            Self::Story => "Your Story",
            Self::Voice => "Your Voice",
            Self::Generating => "Generating Strategy",
            Self::Preview => "Strategy Preview",
        }
    }
}
