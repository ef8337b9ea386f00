use crate::intake::IntakeRecord;
use std::fmt::Write;

/// Persona plus the exact JSON shape the generator must return.
///
/// The field names here mirror [`crate::strategy::Strategy`]'s serde
/// shape; drift between the two breaks parsing.
pub fn system_prompt() -> &'static str {
    concat!(
        "You are a senior brand strategist. From the intake below, produce a ",
        "complete content strategy for short-form social posting.\n\n",
        "Respond with a JSON object in this exact format:\n",
        "{\n",
        "  \"brand\": { \"name\": \"<brand name>\", \"tagline\": \"<one line>\", \"hashtags\": [\"#tag\", ...] },\n",
        "  \"pillars\": [\n",
        "    { \"name\": \"<pillar>\", \"problem\": \"<audience problem>\", \"truth\": \"<reframing truth>\", \"narrative\": \"<story angle>\" }\n",
        "  ],\n",
        "  \"hooks\": { \"question\": [...], \"story\": [...], \"proof\": [...], \"contrarian\": [...] },\n",
        "  \"ctas\": { \"engage\": [...], \"follow\": [...], \"dm\": [...], \"offer\": [...] },\n",
        "  \"voice\": { \"tone\": \"<tone>\", \"styles\": [...], \"guidelines\": [\"<writing rule>\", ...] },\n",
        "  \"weekly\": [\n",
        "    { \"day\": \"monday\", \"name\": \"<series name>\", \"goal\": \"<what the post achieves>\", \"structure\": \"<beat-by-beat outline>\" }\n",
        "  ]\n",
        "}\n\n",
        "Rules:\n",
        "- Exactly 3 pillars.\n",
        "- 3 to 5 templates per hook category and per CTA category; every hook and CTA category must be present.\n",
        "- Exactly 5 weekly entries, days \"monday\" through \"friday\", each day once.\n",
        "- voice.tone echoes the intake tone; voice.styles echoes the chosen styles.\n",
        "Wrap the JSON in a ```json code fence.",
    )
}

/// Render the intake as labeled sections for the user message.
pub fn user_prompt(record: &IntakeRecord) -> String {
    let mut out = String::new();

    out.push_str("## Business\n");
    let _ = writeln!(out, "Name: {}", record.business.name);
    let _ = writeln!(out, "Type: {}", record.business.types.join(", "));
    let _ = writeln!(out, "One-liner: {}", record.business.one_liner);
    if let Some(website) = &record.business.website {
        let _ = writeln!(out, "Website: {website}");
    }

    out.push_str("\n## Audience\n");
    let _ = writeln!(out, "Ideal client: {}", record.audience.ideal_client);
    let _ = writeln!(
        out,
        "Pain points: {}",
        record.audience.pain_points.join("; ")
    );
    if let Some(custom) = &record.audience.custom_pain_point {
        let _ = writeln!(out, "Additional pain point: {custom}");
    }

    out.push_str("\n## Story\n");
    let _ = writeln!(out, "Origin: {}", record.story.origin);
    let _ = writeln!(out, "Common mistake they see: {}", record.story.common_mistake);
    let _ = writeln!(
        out,
        "Transformation they deliver: {}",
        record.story.transformation
    );

    out.push_str("\n## Voice\n");
    let _ = writeln!(out, "Styles: {}", record.voice.styles.join(", "));
    let _ = writeln!(out, "Tone: {}", record.voice.tone);

    out
}
