// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting instructions.

/// Appended to every extraction prompt so replies stay line-parseable.
pub const LABELLED_LINES_INSTRUCTION: &str = "\
    Reply with the labelled lines only, one field per line, in the order given. \
    Do NOT use markdown, bullet points, or code fences. \
    If a field cannot be found, write `Unknown` after its label.";

/// Appended to every document-generation prompt.
pub const FACTUALITY_INSTRUCTION: &str = "\
    Use ONLY facts present in the candidate profile. \
    Do NOT invent employers, dates, degrees, certifications, or metrics. \
    Where the profile is silent, leave the detail out rather than guessing.";

/// Fills `{name}` placeholders in one left-to-right pass. Substituted values
/// are never rescanned, so page or profile text containing `{...}` stays
/// literal. Unknown placeholders are left as-is.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });
        match value {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_known_placeholders() {
        let text = render_template("Hi {name}, re {role}.", &[("name", "Sam"), ("role", "SRE")]);
        assert_eq!(text, "Hi Sam, re SRE.");
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        let text = render_template(
            "A: {a}\nB: {b}",
            &[("a", "{b} and {a}"), ("b", "secret")],
        );
        assert_eq!(text, "A: {b} and {a}\nB: secret");
    }

    #[test]
    fn test_render_keeps_unknown_and_unbalanced_braces() {
        let text = render_template("{unknown} {x} { open", &[("x", "1")]);
        assert_eq!(text, "{unknown} 1 { open");
    }
}
