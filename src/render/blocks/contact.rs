//! Contact details and enquiry form

use serde_json::Value;

use crate::content::{ContentBlock, Theme};
use crate::helpers::{class_name, css_value, escape_text, heading, html_escape, paragraph, section_open};
use crate::render::{BlockStrategy, Props, RenderOptions};

const DEFAULT_FIELDS: &[&str] = &["name", "email", "message"];

/// Input kind, inferred from the field name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Tel,
    TextArea,
    Text,
}

impl FieldKind {
    pub fn infer(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "phone" => FieldKind::Tel,
            "message" => FieldKind::TextArea,
            _ => FieldKind::Text,
        }
    }

    fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::TextArea | FieldKind::Text => "text",
        }
    }
}

/// One form field
#[derive(Debug, Clone, PartialEq, Eq)]
struct FormField {
    name: String,
    label: String,
    required: bool,
}

impl FormField {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label_for(name),
            required: false,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) if !name.trim().is_empty() => Some(Self::named(name.trim())),
            Value::Object(map) => {
                let props = Props::new(map);
                let name = props.opt_text("name")?;
                let name = name.trim();
                Some(Self {
                    name: name.to_string(),
                    label: props.text("label", &label_for(name)),
                    required: props.flag("required", false),
                })
            }
            _ => None,
        }
    }
}

/// `first_name` -> `First name`
fn label_for(name: &str) -> String {
    let spaced = name.replace(&['_', '-'][..], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn form_fields(props: &Props<'_>) -> Vec<FormField> {
    let fields: Vec<FormField> = props
        .items("fields")
        .iter()
        .filter_map(FormField::from_value)
        .collect();
    if fields.is_empty() {
        DEFAULT_FIELDS.iter().map(|n| FormField::named(n)).collect()
    } else {
        fields
    }
}

/// Phone, email, address and a dynamic form
pub struct Contact;

impl BlockStrategy for Contact {
    fn render(&self, block: &ContentBlock, theme: &Theme, _options: &RenderOptions) -> String {
        let props = Props::of(block);
        let title = props.text("title", "Contact Us");
        let subtitle = props.text("subtitle", "");
        let action = props.text("form_action", "/api/contacts");
        let submit_text = props.text("submit_text", "Send Message");

        let mut info = String::new();
        if let Some(phone) = props.opt_text("phone") {
            let dial: String = phone
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect();
            info.push_str(&format!(
                r#"<li class="contact-phone"><a href="tel:{}">{}</a></li>"#,
                dial,
                escape_text(&phone)
            ));
        }
        if let Some(email) = props.opt_text("email") {
            info.push_str(&format!(
                r#"<li class="contact-email"><a href="mailto:{}">{}</a></li>"#,
                html_escape(email.trim()),
                escape_text(&email)
            ));
        }
        if let Some(address) = props.opt_text("address") {
            info.push_str(&format!(
                r#"<li class="contact-address">{}</li>"#,
                escape_text(&address)
            ));
        }

        let inputs: String = form_fields(&props)
            .iter()
            .map(|field| render_field(&block.id, field))
            .collect();

        let mut html = section_open(&block.block_type, &block.id, "");
        html.push_str(&heading(2, &title, "section-title"));
        html.push_str(&paragraph(&subtitle, "section-subtitle"));
        if !info.is_empty() {
            html.push_str(&format!(r#"<ul class="contact-info">{}</ul>"#, info));
        }
        html.push_str(&format!(
            r#"<form class="contact-form" method="post" action="{}">{}<button type="submit" style="background-color:{};color:{}">{}</button></form>"#,
            html_escape(&action),
            inputs,
            css_value(theme.primary_color(), "#1e3a8a"),
            css_value(theme.background_color(), "#ffffff"),
            escape_text(&submit_text)
        ));
        html.push_str("</section>");
        html
    }
}

fn render_field(block_id: &str, field: &FormField) -> String {
    let id = format!("contact-{}-{}", class_name(block_id), class_name(&field.name));
    let name = html_escape(&field.name);
    let required = if field.required { " required" } else { "" };

    let control = match FieldKind::infer(&field.name) {
        FieldKind::TextArea => format!(
            r#"<textarea id="{}" name="{}" rows="5"{}></textarea>"#,
            id, name, required
        ),
        kind => format!(
            r#"<input id="{}" type="{}" name="{}"{}>"#,
            id,
            kind.input_type(),
            name,
            required
        ),
    };

    format!(
        r#"<div class="form-field"><label for="{}">{}</label>{}</div>"#,
        id,
        escape_text(&field.label),
        control
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(props: Value) -> String {
        let block = ContentBlock::new("c1", "contact", props);
        Contact.render(&block, &Theme::new(), &RenderOptions::default())
    }

    #[test]
    fn test_infer_field_kind() {
        assert_eq!(FieldKind::infer("email"), FieldKind::Email);
        assert_eq!(FieldKind::infer("Phone"), FieldKind::Tel);
        assert_eq!(FieldKind::infer("message"), FieldKind::TextArea);
        assert_eq!(FieldKind::infer("loan_amount"), FieldKind::Text);
    }

    #[test]
    fn test_default_fields() {
        let html = render(json!({}));
        assert!(html.contains(r#"type="text" name="name""#));
        assert!(html.contains(r#"type="email" name="email""#));
        assert!(html.contains(r#"<textarea id="contact-c1-message" name="message""#));
        assert!(!html.contains("contact-info"));
        assert!(html.contains(r#"action="/api/contacts""#));
    }

    #[test]
    fn test_custom_fields_and_details() {
        let html = render(json!({
            "phone": "+61 2 9999 0000",
            "email": "hello@example.com",
            "address": "1 Market St",
            "fields": ["phone", {"name": "loan_amount", "label": "Amount", "required": true}, 7]
        }));
        assert!(html.contains(r#"href="tel:+61299990000""#));
        assert!(html.contains("mailto:hello@example.com"));
        assert!(html.contains(">1 Market St</li>"));
        assert!(html.contains(r#"type="tel" name="phone""#));
        assert!(html.contains(r#"name="loan_amount" required"#));
        assert!(html.contains(">Amount</label>"));
        assert!(!html.contains(r#"name="email""#));
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for("first_name"), "First name");
        assert_eq!(label_for(""), "");
    }
}
