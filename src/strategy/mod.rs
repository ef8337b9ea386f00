pub mod markdown;
pub mod model;
pub mod parse;
pub mod prompt;

pub use model::{
    BrandSummary, ContentPillar, CtaLibrary, DailyTemplate, HookLibrary, Strategy, VoiceSummary,
    Weekday,
};
