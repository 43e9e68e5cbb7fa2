//! Markup comment tracking.
//!
//! This is a heuristic, not a markup parser. A span opens a comment when it
//! starts with `<!--` and closes one when it ends with `-->`, whitespace
//! around the span aside. Nothing else about the surrounding markup is
//! inspected.
//!
//! Markers glued to other markup inside one separator span are missed. An
//! opening marker after a tag (`"</p><!-- "` splits into `"</"`, `"p"`,
//! `"><!-- "`) never opens a comment, and a closing marker followed by a tag
//! (`" -->\n<p>"` yields the span `" -->\n<"`) never closes one, so
//! everything after it stays unannotated.

/// Opening marker of a markup comment.
pub const COMMENT_OPEN: &str = "<!--";

/// Closing marker of a markup comment.
pub const COMMENT_CLOSE: &str = "-->";

/// Whether the cursor is inside a markup comment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommentState {
    #[default]
    Normal,
    InComment,
}

/// True if `span` starts a markup comment.
pub fn opens_comment(span: &str) -> bool {
    span.trim_start().starts_with(COMMENT_OPEN)
}

/// True if `span` ends a markup comment.
pub fn closes_comment(span: &str) -> bool {
    span.trim_end().ends_with(COMMENT_CLOSE)
}

impl CommentState {
    /// The state after reading `span`.
    ///
    /// The opening rule is applied first and the closing rule second, so a
    /// span that both opens and closes a comment leaves the state `Normal`.
    pub fn advance(self, span: &str) -> Self {
        let mut state = self;
        if state == CommentState::Normal && opens_comment(span) {
            state = CommentState::InComment;
        }
        if state == CommentState::InComment && closes_comment(span) {
            state = CommentState::Normal;
        }
        state
    }

    pub fn in_comment(self) -> bool {
        self == CommentState::InComment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(opens_comment("<!-- "));
        assert!(opens_comment("\n<!--"));
        assert!(!opens_comment("</p><!-- "));
        assert!(!opens_comment("<!-"));

        assert!(closes_comment(" --> "));
        assert!(closes_comment("-->"));
        assert!(!closes_comment(" --> <p>"));
        assert!(!closes_comment("->"));
    }

    #[test]
    fn test_transitions() {
        let state = CommentState::default();
        assert_eq!(state, CommentState::Normal);

        let state = state.advance("<!-- ");
        assert!(state.in_comment());

        // Opening marker inside a comment changes nothing
        let state = state.advance("<!-- ");
        assert!(state.in_comment());

        let state = state.advance("GLAAD");
        assert!(state.in_comment());

        let state = state.advance(" --> ");
        assert_eq!(state, CommentState::Normal);

        // Closing marker outside a comment changes nothing
        assert_eq!(state.advance(" --> "), CommentState::Normal);
    }

    #[test]
    fn test_close_followed_by_markup_keeps_comment_open() {
        let state = CommentState::Normal.advance(" <!-- ").advance("GLAAD");
        let state = state.advance(" -->\n<");
        assert!(state.in_comment());
        assert!(state.advance("GLAAD").advance("</p>").in_comment());
    }

    #[test]
    fn test_open_and_close_in_one_span() {
        assert_eq!(CommentState::Normal.advance("<!---->"), CommentState::Normal);
        assert_eq!(CommentState::Normal.advance(" <!-- --> "), CommentState::Normal);
    }
}
