use serde::{Deserialize, Serialize};
use strum::Display;

/// Stage-1 data: who the business is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub types: Vec<String>,
    pub one_liner: String,
    pub website: Option<String>,
}

/// Stage-2 data: who the business serves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceInfo {
    pub ideal_client: String,
    pub pain_points: Vec<String>,
    pub custom_pain_point: Option<String>,
}

/// Stage-3 data: the founder narrative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryInfo {
    pub origin: String,
    pub common_mistake: String,
    pub transformation: String,
}

/// Stage-4 data: how the brand should sound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub styles: Vec<String>,
    pub tone: Tone,
}

/// Brand tone. Always has a value; there is no "unset" tone.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Conversational,
    Mix,
}

/// Everything the wizard collects across stages 1-4.
///
/// Four independent sub-records. Mutation happens only through
/// [`IntakeRecord::apply`], one sub-record per patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub business: BusinessInfo,
    pub audience: AudienceInfo,
    pub story: StoryInfo,
    pub voice: VoiceInfo,
}

/// Partial update to the business sub-record. `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessPatch {
    pub name: Option<String>,
    pub types: Option<Vec<String>>,
    pub one_liner: Option<String>,
    /// `Some` replaces the stored value; blank input clears it to `None`.
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudiencePatch {
    pub ideal_client: Option<String>,
    pub pain_points: Option<Vec<String>>,
    pub custom_pain_point: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryPatch {
    pub origin: Option<String>,
    pub common_mistake: Option<String>,
    pub transformation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoicePatch {
    pub styles: Option<Vec<String>>,
    pub tone: Option<Tone>,
}

/// A partial update scoped to exactly one sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakePatch {
    Business(BusinessPatch),
    Audience(AudiencePatch),
    Story(StoryPatch),
    Voice(VoicePatch),
}

impl IntakeRecord {
    /// Merge a partial update into the named sub-record. Sibling
    /// sub-records are never touched.
    pub fn apply(&mut self, patch: IntakePatch) {
        match patch {
            IntakePatch::Business(p) => self.business.apply(p),
            IntakePatch::Audience(p) => self.audience.apply(p),
            IntakePatch::Story(p) => self.story.apply(p),
            IntakePatch::Voice(p) => self.voice.apply(p),
        }
    }
}

impl BusinessInfo {
    fn apply(&mut self, patch: BusinessPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(types) = patch.types {
            self.types = types;
        }
        if let Some(one_liner) = patch.one_liner {
            self.one_liner = one_liner;
        }
        if let Some(website) = patch.website {
            // Blank input means "no website", stored as None rather than "".
            let trimmed = website.trim();
            self.website = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
    }
}

impl AudienceInfo {
    fn apply(&mut self, patch: AudiencePatch) {
        if let Some(ideal_client) = patch.ideal_client {
            self.ideal_client = ideal_client;
        }
        if let Some(pain_points) = patch.pain_points {
            self.pain_points = pain_points;
        }
        if let Some(custom) = patch.custom_pain_point {
            let trimmed = custom.trim();
            self.custom_pain_point = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
    }
}

impl StoryInfo {
    fn apply(&mut self, patch: StoryPatch) {
        if let Some(origin) = patch.origin {
            self.origin = origin;
        }
        if let Some(common_mistake) = patch.common_mistake {
            self.common_mistake = common_mistake;
        }
        if let Some(transformation) = patch.transformation {
            self.transformation = transformation;
        }
    }
}

impl VoiceInfo {
    fn apply(&mut self, patch: VoicePatch) {
        if let Some(styles) = patch.styles {
            self.styles = styles;
        }
        if let Some(tone) = patch.tone {
            self.tone = tone;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_merges_only_some_fields() {
        let mut record = IntakeRecord::default();
        record.apply(IntakePatch::Business(BusinessPatch {
            name: Some("Acme".into()),
            one_liner: Some("We help coaches scale.".into()),
            ..Default::default()
        }));

        record.apply(IntakePatch::Business(BusinessPatch {
            types: Some(vec!["Coaching".into()]),
            ..Default::default()
        }));

        assert_eq!(record.business.name, "Acme");
        assert_eq!(record.business.one_liner, "We help coaches scale.");
        assert_eq!(record.business.types, vec!["Coaching".to_string()]);
    }

    #[test]
    fn patch_never_touches_sibling_subrecords() {
        let mut record = IntakeRecord::default();
        record.apply(IntakePatch::Business(BusinessPatch {
            name: Some("Acme".into()),
            types: Some(vec!["Coaching".into()]),
            one_liner: Some("We help coaches scale.".into()),
            ..Default::default()
        }));
        let business_before = record.business.clone();

        record.apply(IntakePatch::Voice(VoicePatch {
            tone: Some(Tone::Mix),
            ..Default::default()
        }));

        assert_eq!(record.business, business_before);
        assert_eq!(record.voice.tone, Tone::Mix);
    }

    #[test]
    fn blank_website_normalizes_to_none() {
        let mut record = IntakeRecord::default();
        record.apply(IntakePatch::Business(BusinessPatch {
            website: Some("  https://acme.example  ".into()),
            ..Default::default()
        }));
        assert_eq!(record.business.website.as_deref(), Some("https://acme.example"));

        record.apply(IntakePatch::Business(BusinessPatch {
            website: Some("   ".into()),
            ..Default::default()
        }));
        assert_eq!(record.business.website, None);
    }

    #[test]
    fn blank_custom_pain_point_normalizes_to_none() {
        let mut record = IntakeRecord::default();
        record.apply(IntakePatch::Audience(AudiencePatch {
            custom_pain_point: Some("".into()),
            ..Default::default()
        }));
        assert_eq!(record.audience.custom_pain_point, None);
    }

    #[test]
    fn styles_patch_replaces_list_wholesale() {
        let mut record = IntakeRecord::default();
        record.apply(IntakePatch::Voice(VoicePatch {
            styles: Some(vec!["direct".into(), "witty".into()]),
            ..Default::default()
        }));
        record.apply(IntakePatch::Voice(VoicePatch {
            styles: Some(vec!["warm".into()]),
            ..Default::default()
        }));

        assert_eq!(record.voice.styles, vec!["warm".to_string()]);
    }

    #[test]
    fn default_tone_is_professional() {
        assert_eq!(Tone::default(), Tone::Professional);
        assert_eq!(Tone::Mix.to_string(), "mix");
    }

    #[test]
    fn tone_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Tone::Conversational).unwrap(),
            "\"conversational\""
        );
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut record = IntakeRecord::default();
        record.apply(IntakePatch::Story(StoryPatch {
            origin: Some("Started in a garage.".into()),
            ..Default::default()
        }));
        let before = record.clone();

        record.apply(IntakePatch::Story(StoryPatch::default()));

        assert_eq!(record, before);
    }
}
