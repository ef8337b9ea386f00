use super::model::Strategy;
use std::fmt::Write;

/// Render a strategy as markdown for the preview screen and `show`.
pub fn render(strategy: &Strategy) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}", strategy.brand.name);
    let _ = writeln!(out, "_{}_", strategy.brand.tagline);
    if !strategy.brand.hashtags.is_empty() {
        let _ = writeln!(out, "\n{}", strategy.brand.hashtags.join(" "));
    }

    out.push_str("\n## Content Pillars\n");
    for (i, pillar) in strategy.pillars.iter().enumerate() {
        let _ = writeln!(out, "\n### {}. {}", i + 1, pillar.name);
        let _ = writeln!(out, "- Problem: {}", pillar.problem);
        let _ = writeln!(out, "- Truth: {}", pillar.truth);
        let _ = writeln!(out, "- Narrative: {}", pillar.narrative);
    }

    out.push_str("\n## Hooks\n");
    render_templates(&mut out, "Question", &strategy.hooks.question);
    render_templates(&mut out, "Story", &strategy.hooks.story);
    render_templates(&mut out, "Proof", &strategy.hooks.proof);
    render_templates(&mut out, "Contrarian", &strategy.hooks.contrarian);

    out.push_str("\n## Calls to Action\n");
    render_templates(&mut out, "Engage", &strategy.ctas.engage);
    render_templates(&mut out, "Follow", &strategy.ctas.follow);
    render_templates(&mut out, "DM", &strategy.ctas.dm);
    render_templates(&mut out, "Offer", &strategy.ctas.offer);

    out.push_str("\n## Voice\n");
    let _ = writeln!(out, "- Tone: {}", strategy.voice.tone);
    let _ = writeln!(out, "- Styles: {}", strategy.voice.styles.join(", "));
    for guideline in &strategy.voice.guidelines {
        let _ = writeln!(out, "- {guideline}");
    }

    out.push_str("\n## Weekly Cadence\n");
    for day in &strategy.weekly {
        let _ = writeln!(out, "\n### {} — {}", day.day.label(), day.name);
        let _ = writeln!(out, "- Goal: {}", day.goal);
        let _ = writeln!(out, "- Structure: {}", day.structure);
    }

    out
}

fn render_templates(out: &mut String, category: &str, templates: &[String]) {
    if templates.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n**{category}**");
    for template in templates {
        let _ = writeln!(out, "- {template}");
    }
}
