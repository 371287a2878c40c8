use crate::diagnostics::SourceSpan;

/// Node tags attached by the parser. The reader classifies nodes by
/// substring matching on these, so downstream code never depends on the
/// parser's internal rule names.
pub mod tag {
    pub const PROGRAM: &str = "program";
    pub const NUMBER: &str = "number";
    pub const SYMBOL: &str = "symbol";
    pub const SEXPR: &str = "sexpr";
    pub const QEXPR: &str = "qexpr";
    pub const CHAR: &str = "char";
}

/// A generic parse-tree node: a tag string, text contents for leaves, and
/// an ordered list of children.
///
/// Expression lists keep their delimiter leaves (`(`, `)`, `{`, `}`) in
/// place among the children; stripping them is the reader's job, not the
/// parser's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    pub tag: &'static str,
    pub contents: String,
    pub children: Vec<ParseNode>,
    pub span: SourceSpan,
}

impl ParseNode {
    pub fn leaf(tag: &'static str, contents: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            tag,
            contents: contents.into(),
            children: Vec::new(),
            span,
        }
    }

    pub fn branch(tag: &'static str, children: Vec<ParseNode>, span: SourceSpan) -> Self {
        Self {
            tag,
            contents: String::new(),
            children,
            span,
        }
    }

    pub fn is_delimiter(&self) -> bool {
        matches!(self.contents.as_str(), "(" | ")" | "{" | "}")
    }
}
