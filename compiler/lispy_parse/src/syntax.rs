//! The labeled syntax tree produced by the parser.
//!
//! Every node carries a tag, a span, optional literal text and ordered
//! children. Punctuation is kept in the tree as `Delimiter` and `Anchor`
//! nodes so the tree covers the whole input; the reader skips them.

use std::fmt;

use lispy_ir::Span;

/// Structural tag of a syntax node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeTag {
    /// The whole input: `^ expr* $`.
    Root,
    Number,
    Symbol,
    /// `( expr* )`
    SExpr,
    /// `{ expr* }`
    QExpr,
    /// One of `(`, `)`, `{`, `}`; the character is the node text.
    Delimiter,
    /// Start or end of input. Zero-width.
    Anchor,
}

impl NodeTag {
    /// Whether nodes with this tag are punctuation rather than content.
    #[inline]
    pub fn is_syntax(self) -> bool {
        matches!(self, NodeTag::Delimiter | NodeTag::Anchor)
    }

    pub fn name(self) -> &'static str {
        match self {
            NodeTag::Root => "root",
            NodeTag::Number => "number",
            NodeTag::Symbol => "symbol",
            NodeTag::SExpr => "sexpr",
            NodeTag::QExpr => "qexpr",
            NodeTag::Delimiter => "char",
            NodeTag::Anchor => "regex",
        }
    }
}

impl fmt::Display for NodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SyntaxNode {
    pub tag: NodeTag,
    pub span: Span,
    /// Literal text for `Number`, `Symbol` and `Delimiter` nodes.
    pub text: Option<String>,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// A leaf node carrying literal text.
    pub fn leaf(tag: NodeTag, span: Span, text: impl Into<String>) -> Self {
        SyntaxNode {
            tag,
            span,
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// An interior node.
    pub fn branch(tag: NodeTag, span: Span, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode {
            tag,
            span,
            text: None,
            children,
        }
    }

    pub fn delimiter(ch: char, span: Span) -> Self {
        SyntaxNode::leaf(NodeTag::Delimiter, span, ch)
    }

    pub fn anchor(offset: u32) -> Self {
        SyntaxNode::branch(NodeTag::Anchor, Span::point(offset), Vec::new())
    }

    /// Literal text, or `""` for nodes without any.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Children that carry content, skipping delimiters and anchors.
    pub fn content(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter(|child| !child.tag.is_syntax())
    }
}
