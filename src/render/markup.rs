use std::fmt::Write;

use crate::core::Notification;

use super::{AutomationDialogModel, DialogAction, SettingsControl, SettingsDialogModel};

/// Escapes text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn action_button(out: &mut String, action: DialogAction) {
    let _ = write!(
        out,
        r#"<button type="button" data-action="{action:?}">{}</button>"#,
        escape_html(action.label())
    );
}

#[must_use]
pub fn settings_dialog_markup(model: &SettingsDialogModel) -> String {
    let mut out = String::new();
    out.push_str(r#"<div class="settings-modal" role="dialog"><div class="modal-body">"#);
    let _ = write!(out, "<h3>{}</h3>", escape_html(&model.title));
    for section in &model.sections {
        let _ = write!(out, "<section><h4>{}</h4>", escape_html(&section.heading));
        for control in &section.controls {
            match control {
                SettingsControl::Toggle {
                    field,
                    label,
                    checked,
                } => {
                    let _ = write!(
                        out,
                        r#"<label><input type="checkbox" id="{}"{}> {}</label>"#,
                        field.key(),
                        if *checked { " checked" } else { "" },
                        escape_html(label)
                    );
                }
                SettingsControl::Select {
                    field,
                    label,
                    options,
                } => {
                    let _ = write!(
                        out,
                        r#"<label>{} <select id="{}">"#,
                        escape_html(label),
                        field.key()
                    );
                    for option in options {
                        let _ = write!(
                            out,
                            r#"<option value="{}"{}>{}</option>"#,
                            escape_html(&option.value),
                            if option.selected { " selected" } else { "" },
                            escape_html(&option.label)
                        );
                    }
                    out.push_str("</select></label>");
                }
            }
        }
        out.push_str("</section>");
    }
    out.push_str(r#"<div class="modal-actions">"#);
    for action in &model.actions {
        action_button(&mut out, *action);
    }
    out.push_str("</div></div></div>");
    out
}

#[must_use]
pub fn automation_dialog_markup(model: &AutomationDialogModel) -> String {
    let mut out = String::new();
    out.push_str(r#"<div class="n8n-modal" role="dialog"><div class="modal-body">"#);
    let _ = write!(
        out,
        "<h3>{}</h3><p>{}</p><ul>",
        escape_html(&model.title),
        escape_html(&model.intro)
    );
    for capability in &model.capabilities {
        let _ = write!(out, "<li>{}</li>", escape_html(capability));
    }
    out.push_str(r#"</ul><div class="modal-actions">"#);
    for action in &model.actions {
        action_button(&mut out, *action);
    }
    out.push_str("</div></div></div>");
    out
}

#[must_use]
pub fn notification_markup(notification: &Notification) -> String {
    let mut classes = format!("notification {}", notification.severity.css_class());
    if notification.is_exiting() {
        classes.push_str(" notification-exiting");
    }
    format!(
        r#"<div id="{}" class="{}" style="background: {};">{}</div>"#,
        notification.id,
        classes,
        notification.severity.background_color(),
        escape_html(&notification.message)
    )
}
