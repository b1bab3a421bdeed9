//! Rendered output of a hosted application.
//!
//! A [`Document`] is a small tree of presentational nodes. The TUI lays it
//! out; the app layer only needs it to resolve what a click or keyboard
//! activation targets.

/// A node in a rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Page or section heading
    Heading(String),
    /// Body text
    Text(String),
    /// De-emphasized text
    Muted(String),
    /// Hyperlink wrapping other nodes
    Link { href: String, children: Vec<Node> },
    /// Clickable button that triggers an application action
    Button { label: String, action: String },
    /// Labelled single-line input
    Field { label: String, placeholder: String },
    /// Bordered group with optional title and description
    Card {
        title: Option<String>,
        description: Option<String>,
        children: Vec<Node>,
    },
    /// Children laid out side by side
    Row(Vec<Node>),
    /// Horizontal rule
    Separator,
}

impl Node {
    pub fn heading(text: impl Into<String>) -> Self {
        Node::Heading(text.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Node::Muted(text.into())
    }

    /// Link whose only child is a text label
    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Node::Link {
            href: href.into(),
            children: vec![Node::Text(label.into())],
        }
    }

    pub fn button(label: impl Into<String>, action: impl Into<String>) -> Self {
        Node::Button {
            label: label.into(),
            action: action.into(),
        }
    }

    pub fn field(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Node::Field {
            label: label.into(),
            placeholder: placeholder.into(),
        }
    }
}

/// What a click landed on: the closest enclosing link (if any) and the
/// action handlers that see the click, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub href: Option<String>,
    pub actions: Vec<String>,
}

impl ClickTarget {
    pub fn link(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            actions: Vec::new(),
        }
    }

    pub fn action(action: impl Into<String>) -> Self {
        Self {
            href: None,
            actions: vec![action.into()],
        }
    }
}

/// Output of one hosted application render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// All click targets in pre-order.
    ///
    /// A link yields one target for itself before the targets of its
    /// children; a button yields one target carrying the href of the
    /// closest enclosing link. Renderers number interactive nodes in the
    /// same order, so an index into this list identifies a node on screen.
    pub fn targets(&self) -> Vec<ClickTarget> {
        let mut out = Vec::new();
        collect_targets(&self.nodes, None, &mut out);
        out
    }

    /// Number of interactive nodes
    pub fn target_count(&self) -> usize {
        self.targets().len()
    }
}

fn collect_targets(nodes: &[Node], href: Option<&str>, out: &mut Vec<ClickTarget>) {
    for node in nodes {
        match node {
            Node::Link {
                href: link,
                children,
            } => {
                out.push(ClickTarget::link(link.clone()));
                collect_targets(children, Some(link), out);
            }
            Node::Button { action, .. } => out.push(ClickTarget {
                href: href.map(str::to_string),
                actions: vec![action.clone()],
            }),
            Node::Card { children, .. } | Node::Row(children) => {
                collect_targets(children, href, out)
            }
            _ => {}
        }
    }
}
