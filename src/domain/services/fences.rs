const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Remove markdown code-fence markers from model output.
///
/// Every ```` ```json ```` marker is removed first, then every bare
/// ```` ``` ````. This is token removal, not markdown parsing: text between
/// fences is kept, and any number of markers (including none) is accepted.
pub fn strip_fences(text: &str) -> String {
    text.replace(JSON_FENCE, "").replace(FENCE, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_tagged_fence() {
        assert_eq!(strip_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_fences(""), "");
    }

    #[test]
    fn strips_multiple_fences() {
        let text = "```json\n[1,\n```\n```json\n2]\n```";
        assert_eq!(strip_fences(text), "[1,\n\n\n2]");
    }

    #[test]
    fn is_idempotent() {
        for text in ["```json\n{}\n```", "```{}```", "{}", "``````json"] {
            let once = strip_fences(text);
            assert_eq!(strip_fences(&once), once);
        }
    }

    #[test]
    fn nested_backticks_inside_strings_are_removed_textually() {
        assert_eq!(strip_fences("{\"code\":\"```rs```\"}"), "{\"code\":\"rs\"}");
    }
}
