use super::model::Strategy;
use anyhow::{Context, Result, bail};

/// Coerce generator output into a [`Strategy`].
///
/// Accepts the raw assistant message; fenced or bare JSON both work.
pub fn parse(text: &str) -> Result<Strategy> {
    let Some(json) = extract_json(text) else {
        bail!("no JSON object found in generator output");
    };

    let strategy: Strategy =
        serde_json::from_str(json).context("invalid strategy JSON")?;

    if strategy.pillars.is_empty() {
        bail!("strategy must have at least one content pillar");
    }
    if strategy.weekly.is_empty() {
        bail!("strategy must have at least one daily template");
    }

    Ok(strategy)
}

/// Pull the JSON payload out of an assistant message.
///
/// Tries a ```json fence first, then a bare ``` fence opening on `{`,
/// then falls back to the outermost brace pair.
pub fn extract_json(text: &str) -> Option<&str> {
    if let Some(start) = text.find("```json") {
        let json_start = start + "```json".len();
        let rest = &text[json_start..];
        if let Some(end) = rest.find("```") {
            let candidate = rest[..end].trim();
            if !candidate.is_empty() {
                return Some(candidate);
            }
        }
    }

    if let Some(start) = text.find("```\n{") {
        let json_start = start + "```\n".len();
        let rest = &text[json_start..];
        if let Some(end) = rest.find("```") {
            let candidate = rest[..end].trim();
            if !candidate.is_empty() {
                return Some(candidate);
            }
        }
    }

    let open = text.find('{')?;
    let close = text.rfind('}')?;
    if close > open {
        return Some(&text[open..=close]);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::model::sample_strategy;

    fn strategy_json() -> String {
        serde_json::to_string_pretty(&sample_strategy()).unwrap()
    }

    #[test]
    fn extract_json_from_json_fence() {
        let text = format!("Here is your strategy:\n```json\n{}\n```\nEnjoy!", strategy_json());
        let extracted = extract_json(&text).unwrap();
        assert!(extracted.starts_with('{'));
        assert!(extracted.ends_with('}'));
    }

    #[test]
    fn extract_json_from_bare_fence() {
        let text = format!("```\n{}\n```", strategy_json());
        let extracted = extract_json(&text).unwrap();
        assert!(extracted.starts_with('{'));
    }

    #[test]
    fn extract_json_from_surrounding_prose() {
        let text = format!("The result is {} as requested.", strategy_json());
        assert!(extract_json(&text).is_some());
    }

    #[test]
    fn extract_json_returns_none_without_braces() {
        assert!(extract_json("no json here").is_none());
    }

    #[test]
    fn parse_accepts_fenced_payload() {
        let text = format!("```json\n{}\n```", strategy_json());
        let strategy = parse(&text).unwrap();
        assert_eq!(strategy.brand.name, "Acme");
        assert_eq!(strategy.weekly.len(), 2);
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        let err = parse(r#"{"foo": "bar"}"#).unwrap_err().to_string();
        assert!(err.contains("invalid strategy JSON"));
    }

    #[test]
    fn parse_rejects_empty_pillars() {
        let mut strategy = sample_strategy();
        strategy.pillars.clear();
        let json = serde_json::to_string(&strategy).unwrap();

        let err = parse(&json).unwrap_err().to_string();
        assert!(err.contains("content pillar"));
    }

    #[test]
    fn parse_rejects_plain_text() {
        let err = parse("sorry, I cannot do that").unwrap_err().to_string();
        assert!(err.contains("no JSON object"));
    }
}
