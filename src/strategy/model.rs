use serde::{Deserialize, Serialize};
use strum::Display;

/// Brand-level identity summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandSummary {
    pub name: String,
    pub tagline: String,
    pub hashtags: Vec<String>,
}

/// One recurring content theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPillar {
    pub name: String,
    pub problem: String,
    pub truth: String,
    pub narrative: String,
}

/// Opening-line templates, grouped by the device they lean on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookLibrary {
    pub question: Vec<String>,
    pub story: Vec<String>,
    pub proof: Vec<String>,
    pub contrarian: Vec<String>,
}

/// Call-to-action templates, grouped by the response they ask for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaLibrary {
    pub engage: Vec<String>,
    pub follow: Vec<String>,
    pub dm: Vec<String>,
    pub offer: Vec<String>,
}

/// How the brand should sound, restated by the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceSummary {
    pub tone: String,
    pub styles: Vec<String>,
    pub guidelines: Vec<String>,
}

/// Posting day for the weekly cadence. Weekends are deliberately absent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}

/// One day's posting template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTemplate {
    pub day: Weekday,
    pub name: String,
    pub goal: String,
    pub structure: String,
}

/// The generated content strategy.
///
/// Immutable once produced; regeneration replaces the whole value. The
/// serde shape doubles as the JSON contract the generation collaborator
/// must return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub brand: BrandSummary,
    pub pillars: Vec<ContentPillar>,
    pub hooks: HookLibrary,
    pub ctas: CtaLibrary,
    pub voice: VoiceSummary,
    pub weekly: Vec<DailyTemplate>,
}

/// Fully populated strategy used by unit tests across the crate.
#[cfg(test)]
pub(crate) fn sample_strategy() -> Strategy {
    Strategy {
        brand: BrandSummary {
            name: "Acme".into(),
            tagline: "Scale without the chaos".into(),
            hashtags: vec!["#acme".into(), "#coachgrowth".into()],
        },
        pillars: vec![ContentPillar {
            name: "Systems over hustle".into(),
            problem: "Coaches burn out doing everything manually.".into(),
            truth: "Repeatable systems free up creative energy.".into(),
            narrative: "From 60-hour weeks to booked-out calm.".into(),
        }],
        hooks: HookLibrary {
            question: vec!["What if one post a day was enough?".into()],
            story: vec!["Three years ago I almost quit coaching.".into()],
            proof: vec!["12 clients signed in 30 days. Here's how.".into()],
            contrarian: vec!["Stop posting daily. Seriously.".into()],
        },
        ctas: CtaLibrary {
            engage: vec!["Drop a 🔥 if this hit home.".into()],
            follow: vec!["Follow for daily coaching systems.".into()],
            dm: vec!["DM me SCALE for the playbook.".into()],
            offer: vec!["Doors open Friday. Link in bio.".into()],
        },
        voice: VoiceSummary {
            tone: "professional".into(),
            styles: vec!["direct".into(), "warm".into()],
            guidelines: vec!["Short sentences.".into(), "No jargon.".into()],
        },
        weekly: vec![
            DailyTemplate {
                day: Weekday::Monday,
                name: "Myth Monday".into(),
                goal: "Challenge a common belief".into(),
                structure: "Hook, myth, truth, CTA".into(),
            },
            DailyTemplate {
                day: Weekday::Friday,
                name: "Win Friday".into(),
                goal: "Share a client result".into(),
                structure: "Result, method, invitation".into(),
            },
        ],
    }
}
