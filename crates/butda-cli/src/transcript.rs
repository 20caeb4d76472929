//! HTML transcript export.
//!
//! Lays the conversation out the way the web client does: one row per entry,
//! user bubbles on the right, assistant and error bubbles on the left.

use butda_engine::{escape_html, Message, Role};
use std::fmt::Write;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;background:#f5f6f8;margin:0;padding:24px}\
.chat{max-width:760px;margin:0 auto;display:flex;flex-direction:column;gap:12px}\
.message-row{display:flex}.message-row.align-end{justify-content:flex-end}\
.chat-bubble{max-width:80%;padding:12px 16px;border-radius:14px;background:#fff}\
.chat-bubble.outgoing{background:#2563eb;color:#fff}\
.chat-bubble.error{background:#fee2e2;color:#991b1b}\
.chat-bubble.loading{color:#6b7280;font-style:italic}\
.message-title{font-weight:600;margin-bottom:6px}\
.message-body pre{overflow-x:auto}\
.message-meta,.message-timestamp{font-size:12px;opacity:.7;margin-top:6px}";

/// Render `messages` as a standalone HTML document.
pub fn render_transcript(messages: &[Message]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>BUTDA conversation</title>\n");
    let _ = writeln!(html, "<style>{STYLE}</style>");
    html.push_str("</head>\n<body>\n<div class=\"chat\">\n");
    for message in messages {
        push_message(&mut html, message);
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn push_message(html: &mut String, message: &Message) {
    let role = message.role();
    let row_class = if role == Role::User {
        "message-row align-end"
    } else {
        "message-row"
    };
    let bubble_class = match role {
        Role::User => "chat-bubble outgoing",
        Role::Assistant => "chat-bubble incoming",
        Role::Error => "chat-bubble incoming error",
        Role::Pending => "chat-bubble incoming loading",
    };

    let _ = writeln!(
        html,
        "<div class=\"{row_class}\" id=\"{}\">",
        escape_html(message.id())
    );
    let _ = writeln!(html, "<div class=\"{bubble_class}\">");

    if let Some(title) = message.title() {
        let _ = writeln!(
            html,
            "<div class=\"message-title\">{}</div>",
            escape_html(title)
        );
    }

    match role {
        // Assistant bodies are already sanitized markup.
        Role::Assistant => {
            let _ = writeln!(html, "<div class=\"message-body\">{}</div>", message.body());
        }
        Role::User | Role::Error => {
            let _ = writeln!(
                html,
                "<div class=\"message-body\">{}</div>",
                escape_html(message.body())
            );
        }
        Role::Pending => {
            html.push_str("<div class=\"message-body\">&hellip;</div>\n");
        }
    }

    if let Some(meta) = message.meta() {
        let _ = writeln!(html, "<div class=\"message-meta\">{}</div>", escape_html(meta));
    }
    let _ = writeln!(
        html,
        "<div class=\"message-timestamp\">{}</div>",
        escape_html(message.timestamp())
    );
    html.push_str("</div>\n</div>\n");
}
