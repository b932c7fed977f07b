//! Parsing of result intents sent back by the configuration service.

use crate::protocol::{
    Bundle, Intent, RESULT_ACTION, RESULT_COMMAND_KEY, RESULT_INFO_KEY, RESULT_KEY,
    RESULT_LIST_KEY, RESULT_PROFILE_NAME_KEY, RESULT_SUCCESS,
};
use crate::types::{CommandResult, CompleteResult, LastResult};

/// Header value used when the info bundle has no string `RESULT`.
const MISSING_RESULT: &str = "null";

/// Appends one `key: value` line per entry of `bundle`.
fn append_entries(out: &mut String, bundle: &Bundle) {
    for key in bundle.keys() {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&bundle.display_value(key));
        out.push('\n');
    }
}

/// Renders a complete-result list.
///
/// Each entry is preceded by a blank line so entries read as separate blocks.
#[must_use]
pub fn format_result_list(results: &[Bundle]) -> String {
    let mut out = String::new();
    for entry in results {
        out.push_str("\n\n");
        append_entries(&mut out, entry);
    }
    out
}

/// Renders a last-result info bundle, headed by its own `RESULT` entry.
///
/// The header reads `null` when the info bundle has no string `RESULT`.
#[must_use]
pub fn format_result_info(info: Option<&Bundle>) -> String {
    let result = info
        .and_then(|b| b.get_str(RESULT_KEY))
        .unwrap_or(MISSING_RESULT);
    let mut out = format!("Result: {result}\n");
    if let Some(info) = info {
        append_entries(&mut out, info);
    }
    out
}

/// Parses a result intent.
///
/// Returns `None` if the intent is not a result intent or carries neither
/// a result list nor a result info bundle. A result list takes precedence
/// over a result info bundle.
#[must_use]
pub fn parse_result(intent: &Intent) -> Option<CommandResult> {
    if intent.action() != Some(RESULT_ACTION) {
        return None;
    }

    let command = intent.string_extra(RESULT_COMMAND_KEY).map(str::to_owned);
    let profile_name = intent
        .string_extra(RESULT_PROFILE_NAME_KEY)
        .map(str::to_owned);

    if intent.has_extra(RESULT_LIST_KEY) {
        let results = intent
            .extras
            .get_bundle_list(RESULT_LIST_KEY)
            .map(<[Bundle]>::to_vec)
            .unwrap_or_default();
        let display = format_result_list(&results);
        return Some(CommandResult::Complete(CompleteResult {
            results,
            display,
            command,
            profile_name,
        }));
    }

    if intent.has_extra(RESULT_INFO_KEY) {
        let successful = intent.string_extra(RESULT_KEY) == Some(RESULT_SUCCESS);
        let info = intent.extras.get_bundle(RESULT_INFO_KEY).cloned();
        let display = format_result_info(info.as_ref());
        return Some(CommandResult::Last(LastResult {
            successful,
            info,
            display,
            command,
            profile_name,
        }));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_intent() -> Intent {
        Intent::new(RESULT_ACTION)
            .extra(RESULT_COMMAND_KEY, "com.symbol.datawedge.api.SET_CONFIG")
            .extra(RESULT_PROFILE_NAME_KEY, "Scanning")
    }

    #[test]
    fn test_parse_last_result_success() {
        let info = Bundle::new().with("RESULT_CODE", "NONE");
        let intent = result_intent()
            .extra(RESULT_KEY, "SUCCESS")
            .extra(RESULT_INFO_KEY, info.clone());

        let Some(CommandResult::Last(result)) = parse_result(&intent) else {
            panic!("expected last result");
        };
        assert!(result.successful);
        assert_eq!(result.info, Some(info));
        assert_eq!(result.display, "Result: null\nRESULT_CODE: NONE\n");
        assert_eq!(
            result.command.as_deref(),
            Some("com.symbol.datawedge.api.SET_CONFIG")
        );
        assert_eq!(result.profile_name.as_deref(), Some("Scanning"));
    }

    #[test]
    fn test_parse_last_result_failure() {
        let info = Bundle::new()
            .with("RESULT", "FAILURE")
            .with("RESULT_CODE", vec!["PROFILE_NOT_FOUND".to_owned(), "X".to_owned()]);
        let intent = result_intent()
            .extra(RESULT_KEY, "FAILURE")
            .extra(RESULT_INFO_KEY, info);

        let Some(CommandResult::Last(result)) = parse_result(&intent) else {
            panic!("expected last result");
        };
        assert!(!result.successful);
        assert_eq!(
            result.display,
            "Result: FAILURE\nRESULT: FAILURE\nRESULT_CODE: PROFILE_NOT_FOUND\nX\n"
        );
    }

    #[test]
    fn test_result_header_needs_string_result() {
        assert_eq!(format_result_info(None), "Result: null\n");

        let info = Bundle::new().with("RESULT", vec!["A".to_owned(), "B".to_owned()]);
        assert_eq!(format_result_info(Some(&info)), "Result: null\nRESULT: A\nB\n");
    }

    #[test]
    fn test_success_is_exact_match() {
        let intent = result_intent()
            .extra(RESULT_KEY, "success")
            .extra(RESULT_INFO_KEY, Bundle::new());

        assert!(matches!(
            parse_result(&intent),
            Some(CommandResult::Last(LastResult {
                successful: false,
                ..
            }))
        ));
    }

    #[test]
    fn test_parse_complete_result() {
        let first = Bundle::new().with("RESULT", "SUCCESS").with("PLUGIN", "DCP");
        let second = Bundle::new()
            .with("RESULT", "FAILURE")
            .with("PLUGIN", "BARCODE");
        let intent = result_intent()
            .extra(RESULT_LIST_KEY, vec![first, second])
            .extra(RESULT_INFO_KEY, Bundle::new());

        let Some(CommandResult::Complete(result)) = parse_result(&intent) else {
            panic!("expected complete result");
        };
        assert_eq!(result.results.len(), 2);
        assert_eq!(
            result.display,
            "\n\nRESULT: SUCCESS\nPLUGIN: DCP\n\n\nRESULT: FAILURE\nPLUGIN: BARCODE\n"
        );
        assert_eq!(result.profile_name.as_deref(), Some("Scanning"));
    }

    #[test]
    fn test_parse_ignores_other_intents() {
        let wrong_action = Intent::new("com.example.OTHER").extra(RESULT_INFO_KEY, Bundle::new());
        assert!(parse_result(&wrong_action).is_none());

        let no_result = result_intent();
        assert!(parse_result(&no_result).is_none());
    }
}
