pub mod record;
pub mod stage;
pub mod validate;

pub use record::{
    AudienceInfo, AudiencePatch, BusinessInfo, BusinessPatch, IntakePatch, IntakeRecord,
    StoryInfo, StoryPatch, Tone, VoiceInfo, VoicePatch,
};
pub use stage::{ALL_STAGES, Stage};
pub use validate::{VOICE_STYLES_MAX, VOICE_STYLES_MIN, validate};
