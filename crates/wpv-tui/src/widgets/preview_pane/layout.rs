//! Lays a [`Document`] out as terminal lines.
//!
//! Interactive nodes are numbered in document pre-order (a link before its
//! children), the same order as `Document::targets()`, so a segment's
//! target index is also the index of its click target.

use ratatui::style::Style;
use wpv_app::document::{Document, Node};

use crate::theme::styles;
use crate::widgets::{display_width, wrap_text};

/// Gap between items laid out side by side
const INLINE_GAP: &str = "  ";

/// Widest an input field is drawn
const MAX_FIELD_WIDTH: usize = 32;

/// A run of text on a laid-out line
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
    /// Click target activated by this segment
    pub target: Option<usize>,
    /// Enclosing link, highlighted together with the link when focused
    pub link: Option<usize>,
}

impl Segment {
    fn plain(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            target: None,
            link: None,
        }
    }

    pub fn width(&self) -> usize {
        display_width(&self.text)
    }

    /// Whether focusing `index` highlights this segment
    pub fn is_focused(&self, index: Option<usize>) -> bool {
        index.is_some() && (self.target == index || self.link == index)
    }
}

/// One terminal line of a laid-out document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocLine {
    pub segments: Vec<Segment>,
}

impl DocLine {
    fn single(segment: Segment) -> Self {
        Self {
            segments: vec![segment],
        }
    }

    pub fn width(&self) -> usize {
        self.segments.iter().map(Segment::width).sum()
    }

    /// Plain text of the line
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A document laid out for a given width
#[derive(Debug, Clone, Default)]
pub struct DocumentLayout {
    pub lines: Vec<DocLine>,
}

impl DocumentLayout {
    pub fn build(document: &Document, width: u16) -> Self {
        let mut builder = Builder::default();
        builder.blocks(&document.nodes, usize::from(width).max(1), None);
        Self {
            lines: builder.lines,
        }
    }

    /// First line showing target `index` or anything inside it
    pub fn line_of_target(&self, index: usize) -> Option<usize> {
        self.lines.iter().position(|line| {
            line.segments
                .iter()
                .any(|segment| segment.is_focused(Some(index)))
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Default)]
struct Builder {
    lines: Vec<DocLine>,
    next_target: usize,
}

impl Builder {
    fn take_target(&mut self) -> usize {
        let index = self.next_target;
        self.next_target += 1;
        index
    }

    /// Lay out nodes as stacked blocks separated by blank lines
    fn blocks(&mut self, nodes: &[Node], width: usize, link: Option<usize>) {
        for node in nodes {
            self.separate();
            self.block(node, width, link);
        }
    }

    /// Blank line between blocks
    fn separate(&mut self) {
        if self.lines.last().is_some_and(|line| !line.segments.is_empty()) {
            self.lines.push(DocLine::default());
        }
    }

    fn block(&mut self, node: &Node, width: usize, link: Option<usize>) {
        match node {
            Node::Field { label, placeholder } => {
                self.wrapped(label, styles::text_secondary(), width);
                let field_width = width.min(MAX_FIELD_WIDTH);
                let mut text = format!(" {}", placeholder);
                let pad = field_width.saturating_sub(display_width(&text));
                text.push_str(&" ".repeat(pad));
                self.lines
                    .push(DocLine::single(Segment::plain(text, styles::field())));
            }
            Node::Card {
                title,
                description,
                children,
            } => self.card(title.as_deref(), description.as_deref(), children, width, link),
            Node::Separator => {
                self.lines.push(DocLine::single(Segment::plain(
                    "─".repeat(width),
                    styles::text_muted(),
                )));
            }
            Node::Row(children) | Node::Link { children, .. } if !is_inline(node) => {
                // Rows and links holding block content stack their children
                let link = match node {
                    Node::Link { .. } => Some(self.take_target()),
                    _ => link,
                };
                self.blocks(children, width, link);
            }
            Node::Heading(_)
            | Node::Text(_)
            | Node::Muted(_)
            | Node::Button { .. }
            | Node::Row(_)
            | Node::Link { .. } => {
                let mut segments = Vec::new();
                self.inline(node, link, &mut segments);
                self.flow(segments, width);
            }
        }
    }

    fn card(
        &mut self,
        title: Option<&str>,
        description: Option<&str>,
        children: &[Node],
        width: usize,
        link: Option<usize>,
    ) {
        // Too narrow for borders: lay the content out bare
        if width < 6 {
            if let Some(title) = title {
                self.wrapped(title, styles::text_bright_bold(), width);
            }
            if let Some(description) = description {
                self.wrapped(description, styles::text_muted(), width);
            }
            self.blocks(children, width, link);
            return;
        }

        let inner_width = width - 4;
        let mut inner = Builder {
            lines: Vec::new(),
            next_target: self.next_target,
        };
        if let Some(title) = title {
            inner.wrapped(title, styles::text_bright_bold(), inner_width);
        }
        if let Some(description) = description {
            inner.wrapped(description, styles::text_muted(), inner_width);
        }
        inner.blocks(children, inner_width, link);
        self.next_target = inner.next_target;

        let border = styles::border_inactive();
        self.lines.push(DocLine::single(Segment::plain(
            format!("╭{}╮", "─".repeat(width - 2)),
            border,
        )));
        for line in inner.lines {
            let pad = inner_width.saturating_sub(line.width());
            let mut segments = Vec::with_capacity(line.segments.len() + 3);
            segments.push(Segment::plain("│ ", border));
            segments.extend(line.segments);
            segments.push(Segment::plain(" ".repeat(pad), Style::default()));
            segments.push(Segment::plain(" │", border));
            self.lines.push(DocLine { segments });
        }
        self.lines.push(DocLine::single(Segment::plain(
            format!("╰{}╯", "─".repeat(width - 2)),
            border,
        )));
    }

    fn wrapped(&mut self, text: &str, style: Style, width: usize) {
        for line in wrap_text(text, width) {
            self.lines.push(DocLine::single(Segment::plain(line, style)));
        }
    }

    /// Inline segments for a node, numbering targets as they are met
    fn inline(&mut self, node: &Node, link: Option<usize>, out: &mut Vec<Segment>) {
        match node {
            Node::Heading(text) => out.push(text_segment(text, styles::accent_bold(), link)),
            Node::Text(text) => out.push(text_segment(text, styles::text_primary(), link)),
            Node::Muted(text) => out.push(text_segment(text, styles::text_muted(), link)),
            Node::Button { label, .. } => {
                let index = self.take_target();
                out.push(Segment {
                    text: format!(" {} ", label),
                    style: styles::button(),
                    target: Some(index),
                    link,
                });
            }
            Node::Link { children, .. } => {
                let index = self.take_target();
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        out.push(Segment::plain(" ", Style::default()));
                    }
                    self.inline(child, Some(index), out);
                }
            }
            Node::Row(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        out.push(Segment::plain(INLINE_GAP, Style::default()));
                    }
                    self.inline(child, link, out);
                }
            }
            // Not reached: block nodes never go through the inline path
            Node::Field { .. } | Node::Card { .. } | Node::Separator => {}
        }
    }

    /// Flow inline segments into lines no wider than `width`.
    ///
    /// Gaps are dropped at line starts; unclickable text wider than the
    /// line is word-wrapped, other segments are placed whole and clipped
    /// when drawn.
    fn flow(&mut self, segments: Vec<Segment>, width: usize) {
        let mut line = DocLine::default();
        let mut used = 0;

        for segment in segments {
            let gap = is_gap(&segment);
            if gap && used == 0 {
                continue;
            }

            let segment_width = segment.width();
            if used + segment_width <= width {
                used += segment_width;
                line.segments.push(segment);
                continue;
            }
            if gap {
                // A gap that does not fit ends the line
                self.finish_line(std::mem::take(&mut line));
                used = 0;
                continue;
            }

            if used > 0 {
                self.finish_line(std::mem::take(&mut line));
            }

            if segment.target.is_none() && segment_width > width {
                let mut pieces = wrap_text(&segment.text, width);
                let last = pieces.pop().unwrap_or_default();
                for piece in pieces {
                    self.lines.push(DocLine::single(Segment {
                        text: piece,
                        ..segment.clone()
                    }));
                }
                used = display_width(&last);
                line.segments.push(Segment {
                    text: last,
                    ..segment
                });
            } else {
                used = segment_width;
                line.segments.push(segment);
            }
        }

        if !line.segments.is_empty() {
            self.finish_line(line);
        }
    }

    /// Push a flowed line without its trailing gaps
    fn finish_line(&mut self, mut line: DocLine) {
        while line.segments.last().is_some_and(is_gap) {
            line.segments.pop();
        }
        self.lines.push(line);
    }
}

fn is_gap(segment: &Segment) -> bool {
    segment.target.is_none() && segment.text.trim().is_empty()
}

/// Text inside a link is drawn as a link and activates it
fn text_segment(text: &str, style: Style, link: Option<usize>) -> Segment {
    Segment {
        text: text.to_string(),
        style: if link.is_some() { styles::link() } else { style },
        target: link,
        link,
    }
}

fn is_inline(node: &Node) -> bool {
    match node {
        Node::Heading(_) | Node::Text(_) | Node::Muted(_) | Node::Button { .. } => true,
        Node::Link { children, .. } | Node::Row(children) => children.iter().all(is_inline),
        Node::Field { .. } | Node::Card { .. } | Node::Separator => false,
    }
}
