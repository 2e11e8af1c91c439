//! Prompt construction for the generation backends.

use serde::{Deserialize, Serialize};

use super::templates::{PRIMARY_PREAMBLE, SECONDARY_PREAMBLE};

/// Which backend a prompt is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptTarget {
    Primary,
    Secondary,
}

impl PromptTarget {
    fn preamble(&self) -> &'static str {
        match self {
            PromptTarget::Primary => PRIMARY_PREAMBLE,
            PromptTarget::Secondary => SECONDARY_PREAMBLE,
        }
    }
}

/// Builds the instruction string sent to `target`.
///
/// The preamble comes first and the verbatim query last, so the model
/// answers the question actually asked.
pub fn build_prompt(query: &str, target: PromptTarget) -> String {
    let preamble = target.preamble();
    let mut prompt = String::with_capacity(preamble.len() + query.len() + 2);
    prompt.push_str(preamble);
    prompt.push_str("\n\n");
    prompt.push_str(query);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY: &str = "What slump value should I use for M25 grade concrete?";

    #[test]
    fn both_targets_end_with_the_verbatim_query() {
        for target in [PromptTarget::Primary, PromptTarget::Secondary] {
            let prompt = build_prompt(QUERY, target);
            assert!(prompt.ends_with(QUERY), "{target:?} prompt must end with the query");
        }
    }

    #[test]
    fn prompts_are_deterministic() {
        assert_eq!(
            build_prompt(QUERY, PromptTarget::Secondary),
            build_prompt(QUERY, PromptTarget::Secondary)
        );
    }

    #[test]
    fn secondary_preamble_is_more_detailed() {
        let primary = build_prompt(QUERY, PromptTarget::Primary);
        let secondary = build_prompt(QUERY, PromptTarget::Secondary);

        assert_ne!(primary, secondary);
        assert!(secondary.len() > primary.len());
    }

    #[test]
    fn prompts_ask_for_sectioned_output() {
        for target in [PromptTarget::Primary, PromptTarget::Secondary] {
            let prompt = build_prompt(QUERY, target).to_lowercase();
            assert!(prompt.contains("bullet"));
            assert!(prompt.contains("section"));
        }
    }

    #[test]
    fn query_is_not_rewritten() {
        let odd = "  IS 456 ${clause} {{26.5}}  ";
        assert!(build_prompt(odd, PromptTarget::Primary).ends_with(odd));
    }
}
