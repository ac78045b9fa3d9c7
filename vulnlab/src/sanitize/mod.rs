//! Sanitization gate for submitted content
//!
//! Deliberately partial: only `<` and `>` are escaped, quotes and
//! ampersands pass through untouched. The limited behavior is part of the
//! documented teaching contract and must not be widened into a full HTML
//! encoder.

/// Conditionally neutralize markup-significant characters
///
/// When enabled, every `<` becomes `&lt;` and every `>` becomes `&gt;`;
/// nothing else changes. When disabled, the input is returned verbatim,
/// which is the intended vulnerable mode: stored content is later rendered
/// as-is and scripts execute. Total over any input, including the empty
/// string.
pub fn sanitize(raw: &str, sanitization_enabled: bool) -> String {
    if !sanitization_enabled {
        return raw.to_string();
    }
    raw.replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Test that the enabled gate escapes exactly the two angle brackets
    #[test]
    fn test_sanitize_escapes_angle_brackets() {
        assert_eq!(sanitize("<script>", true), "&lt;script&gt;");
        assert_eq!(
            sanitize("<img src=x onerror=alert(1)>", true),
            "&lt;img src=x onerror=alert(1)&gt;"
        );
    }

    /// Test that other markup-significant characters are left alone
    #[test]
    fn test_sanitize_is_deliberately_partial() {
        assert_eq!(sanitize(r#"a & b "quoted" 'single'"#, true), r#"a & b "quoted" 'single'"#);
        // An already-escaped entity is not double-escaped
        assert_eq!(sanitize("&lt;script&gt;", true), "&lt;script&gt;");
    }

    /// Test the disabled gate: verbatim passthrough
    #[test]
    fn test_sanitize_disabled_is_identity() {
        assert_eq!(sanitize("<script>alert(1)</script>", false), "<script>alert(1)</script>");
        assert_eq!(sanitize("", false), "");
    }

    /// Test the empty string through the enabled gate
    #[test]
    fn test_sanitize_empty_string() {
        assert_eq!(sanitize("", true), "");
    }

    /// Applying the gate a second time to already-sanitized output is a no-op
    #[test]
    fn test_sanitize_second_pass_is_noop() {
        let once = sanitize("<b>bold</b>", true);
        let twice = sanitize(&once, true);
        assert_eq!(once, twice);
    }

    proptest! {
        /// Disabled gate is the identity for every input
        #[test]
        fn test_disabled_identity(raw in "\\PC*") {
            prop_assert_eq!(sanitize(&raw, false), raw);
        }

        /// Enabled gate leaves no bare angle brackets behind
        #[test]
        fn test_enabled_removes_angle_brackets(raw in "\\PC*") {
            let escaped = sanitize(&raw, true);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
        }

        /// Enabled gate touches nothing but angle brackets: stripping the
        /// escapes back out recovers the original input
        #[test]
        fn test_enabled_escapes_are_reversible(raw in "\\PC*") {
            let escaped = sanitize(&raw, true);
            let recovered = escaped.replace("&lt;", "<").replace("&gt;", ">");
            // Only holds for inputs that contained no pre-existing entities
            prop_assume!(!raw.contains("&lt;") && !raw.contains("&gt;"));
            prop_assert_eq!(recovered, raw);
        }

        /// Output of the enabled gate is a fixed point: a second pass never
        /// changes it
        #[test]
        fn test_enabled_output_is_fixed_point(raw in "\\PC*") {
            let once = sanitize(&raw, true);
            prop_assert_eq!(sanitize(&once, true), once);
        }
    }
}
