//! Placeholder form submission.
//!
//! Three form kinds, resolved from the submitted node's role. Validation
//! is local: field values are read from the form's field nodes, failures
//! surface as toasts and leave fields intact, successes reset the form
//! (and, for signup, close the enclosing window). Nothing is transmitted;
//! successful submissions are logged only.

use atrium_scene::SceneRegistry;
use atrium_types::role::{FormKind, Role};

/// Outcome of a submission, for the controller to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResult {
    pub ok: bool,
    /// User-facing toast message.
    pub toast: String,
    /// Window to close on success (signup only).
    pub close_window: Option<String>,
}

/// Validate and "submit" the named form. Returns `None` when the name does
/// not resolve to a form node (silent no-op for the caller). Successful
/// submissions reset the form's fields.
pub fn submit(scene: &mut SceneRegistry, form: &str) -> Option<FormResult> {
    let kind = match scene.get(form).ok()?.role {
        Role::Form(kind) => kind,
        _ => return None,
    };
    let result = match kind {
        FormKind::Signup => signup(scene, form),
        FormKind::Contact => contact(scene, form),
        FormKind::Message => message(scene, form),
    };
    if result.ok {
        reset_fields(scene, form);
    }
    Some(result)
}

/// Current value of a field node, or empty when the node is missing.
pub fn field_value(scene: &SceneRegistry, form: &str, field: &str) -> String {
    scene
        .get(&format!("{form}_{field}"))
        .ok()
        .and_then(|node| node.text.clone())
        .unwrap_or_default()
}

/// Set a field node's value (hosts type into fields through this).
pub fn set_field(scene: &mut SceneRegistry, form: &str, field: &str, value: &str) {
    if let Ok(node) = scene.get_mut(&format!("{form}_{field}")) {
        node.text = Some(value.to_string());
    }
}

fn signup(scene: &SceneRegistry, form: &str) -> FormResult {
    let name = field_value(scene, form, "name").trim().to_string();
    let email = field_value(scene, form, "email").trim().to_string();
    let password = field_value(scene, form, "password");
    let confirm = field_value(scene, form, "confirm");
    if name.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        return failure("Please complete all fields");
    }
    if password != confirm {
        return failure("Passwords do not match");
    }
    log::info!("signup: name={name:?} email={email:?}");
    FormResult {
        ok: true,
        toast: "Thanks! Check your email to confirm signup".to_string(),
        close_window: scene.get(form).ok().and_then(|node| node.target.clone()),
    }
}

fn contact(scene: &SceneRegistry, form: &str) -> FormResult {
    let name = field_value(scene, form, "name").trim().to_string();
    let email = field_value(scene, form, "email").trim().to_string();
    let message = field_value(scene, form, "message").trim().to_string();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return failure("Please complete all fields");
    }
    log::info!("contact form: name={name:?} email={email:?} message={message:?}");
    FormResult {
        ok: true,
        toast: "Message sent! We'll get back to you soon.".to_string(),
        close_window: None,
    }
}

fn message(scene: &SceneRegistry, form: &str) -> FormResult {
    let to = field_value(scene, form, "to").trim().to_string();
    let subject = field_value(scene, form, "subject");
    let body = field_value(scene, form, "body").trim().to_string();
    if to.is_empty() || body.is_empty() {
        return failure("Please enter recipient and message");
    }
    log::info!("message: to={to:?} subject={subject:?} body={body:?}");
    FormResult {
        ok: true,
        toast: format!("Message sent to {to}!"),
        close_window: None,
    }
}

fn failure(toast: &str) -> FormResult {
    FormResult {
        ok: false,
        toast: toast.to_string(),
        close_window: None,
    }
}

fn reset_fields(scene: &mut SceneRegistry, form: &str) {
    for name in scene.names_where(|n| n.role == Role::FormField) {
        let belongs = scene
            .get(&name)
            .map(|node| node.parent.as_deref() == Some(form))
            .unwrap_or(false);
        if belongs && let Ok(node) = scene.get_mut(&name) {
            node.text = None;
        }
    }
}
