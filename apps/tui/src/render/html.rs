//! Static HTML page for a rendered [`Document`].
//!
//! Mirrors the markup of the browser front-end: `tablink` triggers,
//! `tabcontent` panels and `div.card[data-id]` cards.

use std::fmt::Write as _;

use crate::domain::Category;

use super::{Card, ContainerContent, Document};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0; }
.tab { overflow: hidden; background: #222; }
.tablink { background: inherit; color: #ddd; border: none; padding: 12px 18px; cursor: pointer; }
.tablink.active { background: #3a7; color: #fff; }
.tabcontent { padding: 12px; }
.card { display: inline-block; vertical-align: top; width: 240px; margin: 8px; padding: 8px; border: 1px solid #ccc; border-radius: 6px; cursor: pointer; }
.card img { max-width: 100%; }
.resident img, .character img { width: 48px; height: 48px; }
";

/// Escapes text for use in element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Text shown when a card is clicked: the title, then one line per field.
fn detail_text(card: &Card) -> String {
    let mut lines = vec![card.title.clone()];
    lines.extend(
        card.fields
            .iter()
            .map(|field| format!("{}: {}", field.label, field.value)),
    );
    if let Some(label) = card.related_label {
        lines.push(format!("{label}: {}", card.related.len()));
    }
    lines.join("\n")
}

pub fn render_card(card: &Card) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<div class="card" data-id="{}" data-detail="{}">"#,
        escape(&card.id),
        escape(&detail_text(card)).replace('\n', "&#10;")
    );
    if let Some(image) = &card.image {
        let _ = writeln!(
            out,
            r#"  <img src="{}" alt="{}">"#,
            escape(image),
            escape(&card.title)
        );
    }
    let _ = writeln!(out, "  <h3>{}</h3>", escape(&card.title));
    for field in &card.fields {
        let _ = writeln!(out, "  <p>{}: {}</p>", field.label, escape(&field.value));
    }
    if let Some(label) = card.related_label {
        let (group, item) = match card.category {
            Category::Locations => ("residents", "resident"),
            _ => ("characters", "character"),
        };
        let _ = writeln!(out, r#"  <div class="{group}" title="{label}">"#);
        for entry in &card.related {
            let _ = writeln!(
                out,
                r#"    <div class="{item}"><img src="{}" alt="{}"><p>{}</p></div>"#,
                escape(&entry.image),
                escape(&entry.name),
                escape(&entry.name)
            );
        }
        let _ = writeln!(out, "  </div>");
    }
    out.push_str("</div>\n");
    out
}

/// Inner markup of one container.
pub fn render_container(content: &ContainerContent) -> String {
    match content {
        ContainerContent::Message(message) => format!("<p>{}</p>", escape(message)),
        ContainerContent::Cards(cards) => cards.iter().map(render_card).collect(),
    }
}

pub fn render_page(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Rick and Morty Explorer</title>\n<style>\n");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n<div class=\"tab\">\n");

    for trigger in doc.tabs.triggers() {
        let class = if trigger.active {
            "tablink active"
        } else {
            "tablink"
        };
        let _ = writeln!(
            out,
            r#"  <button class="{class}" data-tab="{}">{}</button>"#,
            escape(&trigger.target),
            escape(&trigger.label)
        );
    }
    out.push_str("</div>\n");

    for panel in doc.tabs.panels() {
        let display = if panel.visible { "block" } else { "none" };
        let _ = writeln!(
            out,
            r#"<div id="{}" class="tabcontent" style="display: {display}">"#,
            escape(&panel.name)
        );
        if let Some(category) = Category::parse(&panel.name) {
            let _ = writeln!(out, r#"<div id="{}">"#, category.container());
            out.push_str(&render_container(doc.content(category)));
            out.push_str("\n</div>\n");
        }
        out.push_str("</div>\n");
    }

    out.push_str(
        "<script>\n\
         document.querySelectorAll('.tablink').forEach(function (btn) {\n\
           btn.addEventListener('click', function () {\n\
             document.querySelectorAll('.tabcontent').forEach(function (p) { p.style.display = 'none'; });\n\
             document.querySelectorAll('.tablink').forEach(function (b) { b.classList.remove('active'); });\n\
             document.getElementById(btn.dataset.tab).style.display = 'block';\n\
             btn.classList.add('active');\n\
           });\n\
         });\n\
         document.querySelectorAll('.card').forEach(function (card) {\n\
           card.addEventListener('click', function () { alert(card.dataset.detail); });\n\
         });\n\
         </script>\n",
    );
    out.push_str("</body>\n</html>\n");
    out
}
