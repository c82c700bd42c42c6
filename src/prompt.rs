//! Analysis prompt templating.
//!
//! The full prompt text lives in one template file and is rendered from a
//! single code path: the collected request plus the two reference tables.

use crate::reference::{
    render_emotion_spectrum, render_universal_needs, EMOTION_SPECTRUM, UNIVERSAL_NEEDS,
};
use crate::request::AnalysisRequest;
use std::collections::BTreeMap;

const ANALYSIS_PROMPT_TEMPLATE: &str = include_str!("templates/analysis_prompt.template");

/// Render the analysis prompt for one request.
///
/// Total and deterministic: the same request always yields the same bytes.
pub fn build_prompt(request: &AnalysisRequest) -> String {
    let mut vars = BTreeMap::<&str, String>::new();
    vars.insert("SENDER_TITLE", request.sender_title.clone());
    vars.insert("RELATIONSHIP", request.relationship.label().to_string());
    vars.insert("EMAIL_CONTENT", request.email_content.clone());
    vars.insert(
        "EMOTION_SPECTRUM",
        render_emotion_spectrum(EMOTION_SPECTRUM),
    );
    vars.insert("UNIVERSAL_NEEDS", render_universal_needs(UNIVERSAL_NEEDS));

    render_template(ANALYSIS_PROMPT_TEMPLATE, &vars)
}

/// Substitute `{{KEY}}` placeholders in one left-to-right pass.
///
/// Substituted values are never rescanned, so placeholder-like text inside
/// the email body survives verbatim. Unknown keys are left as-is.
fn render_template(template: &str, vars: &BTreeMap<&str, String>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let key = &after_open[..end];
        match vars.get(key) {
            Some(value) => rendered.push_str(value),
            None => {
                rendered.push_str("{{");
                rendered.push_str(key);
                rendered.push_str("}}");
            }
        }
        rest = &after_open[end + 2..];
    }

    rendered.push_str(rest);
    rendered
}
