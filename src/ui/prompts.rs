use anyhow::Result;
use dialoguer::{Input, MultiSelect, Select};

use crate::intake::{
    AudienceInfo, AudiencePatch, BusinessInfo, BusinessPatch, Stage, StoryInfo, StoryPatch, Tone,
    VOICE_STYLES_MAX, VOICE_STYLES_MIN, VoiceInfo, VoicePatch,
};
use crate::ui::view::{print_bullet, print_error};

pub const BUSINESS_TYPES: &[&str] = &[
    "Coaching",
    "Consulting",
    "Freelance services",
    "Local business",
    "Online courses",
    "Digital products",
    "E-commerce",
    "Content creator",
];

pub const PAIN_POINTS: &[&str] = &[
    "No consistent leads",
    "Posting without a plan",
    "Invisible in a crowded niche",
    "No time to create content",
    "Unclear messaging",
    "Audience that never buys",
];

pub const VOICE_STYLES: &[&str] = &[
    "Educator",
    "Storyteller",
    "Straight shooter",
    "Hype friend",
    "Calm expert",
    "Contrarian",
    "Relatable peer",
    "Coach on your shoulder",
];

const TONES: &[(&str, Tone)] = &[
    ("Professional", Tone::Professional),
    ("Conversational", Tone::Conversational),
    ("A mix of both", Tone::Mix),
];

// ── Stage prompts ────────────────────────────────────────────────────────────

pub fn business_step(current: &BusinessInfo) -> Result<BusinessPatch> {
    let name = required_text("Business name", &current.name)?;
    let types = choose_many(
        "What kind of business is it? (space to toggle)",
        BUSINESS_TYPES,
        &current.types,
        1,
        BUSINESS_TYPES.len(),
    )?;
    let one_liner = required_text("One line on what you do and for whom", &current.one_liner)?;
    let website = optional_text(
        "Website or main social link (optional)",
        current.website.as_deref(),
    )?;

    Ok(BusinessPatch {
        name: Some(name),
        types: Some(types),
        one_liner: Some(one_liner),
        website: Some(website),
    })
}

pub fn audience_step(current: &AudienceInfo) -> Result<AudiencePatch> {
    let ideal_client = required_text("Who is your ideal client?", &current.ideal_client)?;
    let pain_points = choose_many(
        "What are they struggling with? (space to toggle)",
        PAIN_POINTS,
        &current.pain_points,
        1,
        PAIN_POINTS.len(),
    )?;
    let custom_pain_point = optional_text(
        "Anything else they struggle with? (optional)",
        current.custom_pain_point.as_deref(),
    )?;

    Ok(AudiencePatch {
        ideal_client: Some(ideal_client),
        pain_points: Some(pain_points),
        custom_pain_point: Some(custom_pain_point),
    })
}

pub fn story_step(current: &StoryInfo) -> Result<StoryPatch> {
    let origin = required_text("How did this business start?", &current.origin)?;
    let common_mistake = required_text(
        "What mistake do you see your clients make?",
        &current.common_mistake,
    )?;
    let transformation = required_text(
        "What transformation do you deliver?",
        &current.transformation,
    )?;

    Ok(StoryPatch {
        origin: Some(origin),
        common_mistake: Some(common_mistake),
        transformation: Some(transformation),
    })
}

pub fn voice_step(current: &VoiceInfo) -> Result<VoicePatch> {
    print_bullet("Pick the styles that sound like you.");
    let styles = choose_many(
        "Voice styles (space to toggle)",
        VOICE_STYLES,
        &current.styles,
        VOICE_STYLES_MIN,
        VOICE_STYLES_MAX,
    )?;

    let labels: Vec<&str> = TONES.iter().map(|(label, _)| *label).collect();
    let default = TONES
        .iter()
        .position(|(_, tone)| *tone == current.tone)
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("  Overall tone")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(VoicePatch {
        styles: Some(styles),
        tone: Some(TONES[picked].1),
    })
}

// ── Menus ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureChoice {
    Retry,
    EditAnswers,
    Quit,
}

pub fn generation_failure_menu(reason: &str) -> Result<FailureChoice> {
    print_error(&format!("Generation failed: {reason}"));
    let items = ["Try again", "Edit my answers", "Quit"];
    let choice = Select::new()
        .with_prompt("  What next?")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => FailureChoice::Retry,
        1 => FailureChoice::EditAnswers,
        _ => FailureChoice::Quit,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewChoice {
    Save,
    Regenerate,
    Edit(Stage),
    StartOver,
    Quit,
}

pub fn preview_menu() -> Result<PreviewChoice> {
    let items = [
        "Save and finish",
        "Regenerate",
        "Edit an earlier answer",
        "Start over",
        "Quit without saving",
    ];
    let choice = Select::new()
        .with_prompt("  What next?")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => PreviewChoice::Save,
        1 => PreviewChoice::Regenerate,
        2 => {
            let stages = [Stage::Business, Stage::Audience, Stage::Story, Stage::Voice];
            let titles: Vec<&str> = stages.iter().map(|stage| stage.title()).collect();
            let picked = Select::new()
                .with_prompt("  Edit which part?")
                .items(&titles)
                .default(0)
                .interact()?;
            PreviewChoice::Edit(stages[picked])
        }
        3 => PreviewChoice::StartOver,
        _ => PreviewChoice::Quit,
    })
}

// ── Input helpers ────────────────────────────────────────────────────────────

fn required_text(label: &str, current: &str) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(format!("  {label}"));
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?)
}

fn optional_text(label: &str, current: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(format!("  {label}"))
        .allow_empty(true);
    if let Some(value) = current {
        input = input.default(value.to_string());
    }
    Ok(input.interact_text()?)
}

fn choose_many(
    label: &str,
    options: &[&str],
    current: &[String],
    min: usize,
    max: usize,
) -> Result<Vec<String>> {
    loop {
        let defaults: Vec<bool> = options
            .iter()
            .map(|option| current.iter().any(|picked| picked == option))
            .collect();
        let picked = MultiSelect::new()
            .with_prompt(format!("  {label}"))
            .items(options)
            .defaults(&defaults)
            .interact()?;

        if picked.len() < min || picked.len() > max {
            if max < options.len() {
                print_bullet(&format!("Pick between {min} and {max}."));
            } else {
                print_bullet(&format!("Pick at least {min}."));
            }
            continue;
        }

        return Ok(picked.into_iter().map(|i| options[i].to_string()).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_duplicates(options: &[&str]) -> bool {
        let mut seen = std::collections::HashSet::new();
        options.iter().any(|option| !seen.insert(*option))
    }

    #[test]
    fn choice_lists_are_unique() {
        assert!(!has_duplicates(BUSINESS_TYPES));
        assert!(!has_duplicates(PAIN_POINTS));
        assert!(!has_duplicates(VOICE_STYLES));
    }

    #[test]
    fn style_list_can_satisfy_the_voice_range() {
        assert!(VOICE_STYLES.len() >= VOICE_STYLES_MAX);
    }

    #[test]
    fn every_tone_has_a_label() {
        for tone in [Tone::Professional, Tone::Conversational, Tone::Mix] {
            assert!(TONES.iter().any(|(_, t)| *t == tone));
        }
    }
}
