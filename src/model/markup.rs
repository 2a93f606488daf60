// Pure builders for the injected page fragments.
//
// Content lives in plain data (`SurpriseMessage`, `FooterContent`); the
// builders turn it into an immutable `Node` tree that the browser side
// mounts. Nothing here touches the DOM.

use serde::Deserialize;

/// A node of a static markup tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(ElementNode),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

#[inline]
pub fn el(tag: &'static str) -> ElementNode {
    ElementNode {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl ElementNode {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Depth-first search for the first element carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&ElementNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| match c {
            Node::Element(e) => e.find_by_class(class),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for c in &self.children {
            match c {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

impl From<ElementNode> for Node {
    fn from(e: ElementNode) -> Self {
        Node::Element(e)
    }
}

fn write_element(e: &ElementNode, out: &mut String) {
    out.push('<');
    out.push_str(e.tag);
    for (name, value) in &e.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, out);
        out.push('"');
    }
    out.push('>');
    for c in &e.children {
        match c {
            Node::Text(t) => escape_into(t, out),
            Node::Element(child) => write_element(child, out),
        }
    }
    out.push_str("</");
    out.push_str(e.tag);
    out.push('>');
}

fn escape_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Text of the surprise dialog.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SurpriseMessage {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub signature: String,
}

impl Default for SurpriseMessage {
    fn default() -> Self {
        Self {
            title: "Surprise for Mom & Dad ✨".to_string(),
            paragraphs: vec![
                "ความรักที่ดู “ธรรมดา” ในทุกวันของพ่อกับแม่… \
                 จริง ๆ มันคือความรักที่โคตรพิเศษ — เพราะมันสม่ำเสมอ อบอุ่น และไม่เคยทิ้งกันไว้ข้างหลัง"
                    .to_string(),
                "ขอบคุณที่ทำให้บ้านเป็นที่ที่เรากลับมาแล้วรู้สึกปลอดภัยเสมอ ❤️".to_string(),
            ],
            signature: "Happy Valentine’s Day, with all our love.".to_string(),
        }
    }
}

/// Text of the injected footer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    pub attribution: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            attribution: "Made with ❤️ for Mom & Dad".to_string(),
        }
    }
}

/// The surprise dialog: backdrop plus a panel with title, close control and
/// message body. Nodes that close the dialog carry `data-close="true"`.
pub fn surprise_dialog(message: &SurpriseMessage) -> ElementNode {
    let mut body = el("div").class("modal__body");
    for p in &message.paragraphs {
        body = body.child(el("p").text(p.as_str()));
    }
    body = body.child(el("p").class("signature").text(message.signature.as_str()));

    el("div")
        .class("modal")
        .attr("role", "dialog")
        .attr("aria-modal", "true")
        .attr("aria-label", "Surprise message")
        .child(el("div").class("modal__backdrop").attr("data-close", "true"))
        .child(
            el("div")
                .class("modal__panel")
                .child(
                    el("div")
                        .class("modal__top")
                        .child(
                            el("h3")
                                .class("modal__title")
                                .text(message.title.as_str()),
                        )
                        .child(
                            el("button")
                                .class("modal__close")
                                .attr("type", "button")
                                .attr("aria-label", "Close")
                                .attr("data-close", "true")
                                .text("✕"),
                        ),
                )
                .child(body),
        )
}

/// Footer with the attribution line and the given calendar year.
pub fn footer(content: &FooterContent, year: u32) -> ElementNode {
    el("footer").class("footer").child(
        el("div")
            .class("container footer__row")
            .child(el("small").text(content.attribution.as_str()))
            .child(el("small").text(year.to_string())),
    )
}
