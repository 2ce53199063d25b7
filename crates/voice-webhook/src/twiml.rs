//! TwiML call-control documents.
//!
//! A document is a `<Response>` element holding verbs in execution order.
//! Rendering is deterministic: one verb per line, two-space indent, no XML
//! declaration and no trailing newline.

use common::types::PhoneNumber;

/// A single instruction inside `<Response>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// Bridge the current call to another number.
    Dial(PhoneNumber),
}

impl Verb {
    fn render_into(&self, out: &mut String) {
        match self {
            Verb::Dial(number) => {
                out.push_str("<Dial>");
                out.push_str(&escape_text(number.as_str()));
                out.push_str("</Dial>");
            }
        }
    }
}

/// Builder for a `<Response>` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceResponse {
    verbs: Vec<Verb>,
}

impl VoiceResponse {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `<Dial>` verb.
    #[must_use]
    pub fn dial(mut self, number: PhoneNumber) -> Self {
        self.verbs.push(Verb::Dial(number));
        self
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    /// Render the document as XML text.
    pub fn render(&self) -> String {
        if self.verbs.is_empty() {
            return "<Response/>".to_string();
        }

        let mut out = String::from("<Response>\n");
        for verb in &self.verbs {
            out.push_str("  ");
            verb.render_into(&mut out);
            out.push('\n');
        }
        out.push_str("</Response>");
        out
    }
}

/// Escape XML special characters in text content.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
