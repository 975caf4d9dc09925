#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;
#[cfg(target_arch = "wasm32")]
use serde::Deserialize;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::error::SubmitError;

pub const FORM_ID: &str = "contactForm";
pub const STATUS_ID: &str = "contactStatus";
const BOUND_MARKER: &str = "data-contact-bound";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactStatus {
    Sending,
    Sent,
    Failed(String),
}

impl ContactStatus {
    pub fn from_outcome(outcome: &Result<(), SubmitError>) -> Self {
        match outcome {
            Ok(()) => ContactStatus::Sent,
            Err(err) => ContactStatus::Failed(err.detail()),
        }
    }

    pub fn text(&self) -> String {
        match self {
            ContactStatus::Sending => "Sending...".to_string(),
            ContactStatus::Sent => "Message sent — thank you!".to_string(),
            ContactStatus::Failed(detail) => format!("Send failed. {detail}"),
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            ContactStatus::Sending => "form-status sending",
            ContactStatus::Sent => "form-status success",
            ContactStatus::Failed(_) => "form-status error",
        }
    }
}

pub trait SubmitControl {
    fn set_disabled(&self, disabled: bool);
}

pub trait ContactView {
    fn show_status(&self, status: &ContactStatus);
    fn clear_fields(&self);
}

pub struct SubmitGuard<C: SubmitControl> {
    control: C,
}

impl<C: SubmitControl> SubmitGuard<C> {
    pub fn disable(control: C) -> Self {
        control.set_disabled(true);
        Self { control }
    }
}

impl<C: SubmitControl> Drop for SubmitGuard<C> {
    fn drop(&mut self) {
        self.control.set_disabled(false);
    }
}

pub trait BindTarget {
    fn is_bound(&self) -> bool;
    fn mark_bound(&self);
}

/// Runs `bind` unless `target` already carries a handler. A successful bind
/// marks the target.
pub fn bind_once<T: BindTarget>(target: &T, bind: impl FnOnce(&T) -> bool) -> bool {
    if target.is_bound() || !bind(target) {
        return false;
    }
    target.mark_bound();
    true
}

pub fn apply_outcome(view: &impl ContactView, outcome: &Result<(), SubmitError>) {
    let status = ContactStatus::from_outcome(outcome);
    view.show_status(&status);
    if outcome.is_ok() {
        view.clear_fields();
    }
}

#[cfg(target_arch = "wasm32")]
impl SubmitControl for web_sys::HtmlButtonElement {
    fn set_disabled(&self, disabled: bool) {
        web_sys::HtmlButtonElement::set_disabled(self, disabled);
    }
}

#[cfg(target_arch = "wasm32")]
impl BindTarget for web_sys::HtmlFormElement {
    fn is_bound(&self) -> bool {
        self.has_attribute(BOUND_MARKER)
    }

    fn mark_bound(&self) {
        let _ = self.set_attribute(BOUND_MARKER, "true");
    }
}

#[cfg(target_arch = "wasm32")]
struct DomContactView {
    form: web_sys::HtmlFormElement,
    status: Option<web_sys::Element>,
}

#[cfg(target_arch = "wasm32")]
impl ContactView for DomContactView {
    fn show_status(&self, status: &ContactStatus) {
        if let Some(element) = &self.status {
            element.set_text_content(Some(&status.text()));
            element.set_class_name(status.class_name());
        }
    }

    fn clear_fields(&self) {
        self.form.reset();
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[cfg(target_arch = "wasm32")]
fn contact_form() -> Option<web_sys::HtmlFormElement> {
    crate::dom::document()?
        .get_element_by_id(FORM_ID)?
        .dyn_into::<web_sys::HtmlFormElement>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
pub fn attach_contact_handler(endpoint: &str, subject: &str) {
    let Some(form) = contact_form() else {
        return;
    };
    let endpoint: Rc<str> = Rc::from(endpoint);
    let subject: Rc<str> = Rc::from(subject);
    let attached = bind_once(&form, |form| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            handle_submit(event, Rc::clone(&endpoint), Rc::clone(&subject));
        }) as Box<dyn FnMut(_)>);
        let added = form
            .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
            .is_ok();
        closure.forget();
        added
    });
    if attached {
        tracing::debug!("contact: submit handler attached");
    }
}

#[cfg(target_arch = "wasm32")]
fn handle_submit(event: web_sys::Event, endpoint: Rc<str>, subject: Rc<str>) {
    let Some(form) = contact_form() else {
        return;
    };
    event.prevent_default();

    let status = crate::dom::document().and_then(|document| document.get_element_by_id(STATUS_ID));
    let guard = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|button| button.dyn_into::<web_sys::HtmlButtonElement>().ok())
        .map(SubmitGuard::disable);
    let view = DomContactView {
        form: form.clone(),
        status,
    };
    view.show_status(&ContactStatus::Sending);
    tracing::info!("contact: sending message");

    wasm_bindgen_futures::spawn_local(async move {
        let _guard = guard;
        let outcome = post_form(&form, &endpoint, &subject).await;
        match &outcome {
            Ok(()) => tracing::info!("contact: message sent"),
            Err(err) => tracing::warn!("contact: send failed: {err}"),
        }
        apply_outcome(&view, &outcome);
    });
}

#[cfg(target_arch = "wasm32")]
async fn post_form(
    form: &web_sys::HtmlFormElement,
    endpoint: &str,
    subject: &str,
) -> Result<(), SubmitError> {
    let data = web_sys::FormData::new_with_form(form)
        .map_err(|err| SubmitError::Network(crate::dom::js_error_message(&err)))?;
    data.append_with_str("_subject", subject)
        .map_err(|err| SubmitError::Network(crate::dom::js_error_message(&err)))?;

    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .body(data)
        .map_err(|err| SubmitError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| SubmitError::Network(err.to_string()))?;

    if response.ok() {
        return Ok(());
    }
    let server_message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error);
    Err(SubmitError::Rejected {
        status: response.status(),
        status_text: response.status_text(),
        server_message,
    })
}
