use super::record::IntakeRecord;
use super::stage::Stage;

/// Closed range of voice styles the voice stage accepts.
pub const VOICE_STYLES_MIN: usize = 2;
pub const VOICE_STYLES_MAX: usize = 4;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Whether the record holds enough data for `stage` to be left forward.
///
/// Pure predicate: reads the record, mutates nothing, total over all six
/// stages. `Generating` and `Preview` carry no user-editable data and
/// always pass. Tone is never checked; it always has a value.
pub fn validate(stage: Stage, record: &IntakeRecord) -> bool {
    match stage {
        Stage::Business => {
            !is_blank(&record.business.name)
                && !record.business.types.is_empty()
                && !is_blank(&record.business.one_liner)
        }
        Stage::Audience => {
            !is_blank(&record.audience.ideal_client) && !record.audience.pain_points.is_empty()
        }
        Stage::Story => {
            !is_blank(&record.story.origin)
                && !is_blank(&record.story.common_mistake)
                && !is_blank(&record.story.transformation)
        }
        Stage::Voice => {
            (VOICE_STYLES_MIN..=VOICE_STYLES_MAX).contains(&record.voice.styles.len())
        }
        Stage::Generating | Stage::Preview => true,
    }
}
