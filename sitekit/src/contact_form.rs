//! Client-side contact form validation.

use std::any::Any;

use log::debug;
use sitedom::element::{
    find_element, find_element_mut, insert_after, is_within, query, query_all, query_within,
    remove_element,
};
use sitedom::{Color, Content, Edges, Element, Event, Selector};

use crate::behavior::{Behavior, EventResult, PageContext};
use crate::error::{ConfigError, require_class};
use crate::validation::{ValidationResult, Validator};

/// Attribute linking an error message to the field it describes.
const ERROR_FOR_ATTR: &str = "data-error-for";

/// One validated form control, located by tag and `name` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub tag: String,
    pub name: String,
    /// Message shown when the field is invalid.
    pub message: String,
}

impl FieldSpec {
    pub fn new(
        tag: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            message: message.into(),
        }
    }

    fn selector(&self) -> Selector {
        Selector::tag(self.tag.as_str()).and(Selector::attr("name", self.name.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormConfig {
    pub form_class: String,
    pub name: FieldSpec,
    pub email: FieldSpec,
    pub message: FieldSpec,
    /// Class of the inline error elements.
    pub error_class: String,
    /// Text color of error messages and border color of invalid fields.
    pub error_color: Color,
    /// Acknowledgment shown after a valid submission.
    pub success_message: String,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            form_class: "contact-form".to_string(),
            name: FieldSpec::new("input", "name", "Prosím vyplňte jméno"),
            email: FieldSpec::new("input", "email", "Prosím vyplňte platný email"),
            message: FieldSpec::new("textarea", "message", "Prosím vyplňte zprávu"),
            error_class: "error-message".to_string(),
            error_color: Color::rgb(0xe7, 0x4c, 0x3c),
            success_message: "Děkujeme za vaši zprávu! Brzy se vám ozveme.".to_string(),
        }
    }
}

impl ContactFormConfig {
    pub fn new(form_class: impl Into<String>) -> Self {
        Self {
            form_class: form_class.into(),
            ..Default::default()
        }
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    pub fn error_color(mut self, color: Color) -> Self {
        self.error_color = color;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_class(&self.form_class, "form")?;
        require_class(&self.error_class, "error")?;
        for field in [&self.name, &self.email, &self.message] {
            if field.message.trim().is_empty() {
                return Err(ConfigError::EmptyLabel("field error"));
            }
        }
        if self.success_message.trim().is_empty() {
            return Err(ConfigError::EmptyLabel("success"));
        }
        Ok(())
    }
}

/// Validates the contact form on submit.
///
/// Submission never reaches the host: valid input is acknowledged with an
/// alert and the form is reset, invalid fields get an inline message.
#[derive(Debug)]
pub struct ContactForm {
    config: ContactFormConfig,
    form_id: Option<String>,
    last_result: Option<ValidationResult>,
}

impl ContactForm {
    pub fn new(config: ContactFormConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            form_id: None,
            last_result: None,
        })
    }

    pub fn config(&self) -> &ContactFormConfig {
        &self.config
    }

    pub fn form_id(&self) -> Option<&str> {
        self.form_id.as_deref()
    }

    /// Outcome of the most recent submission.
    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last_result.as_ref()
    }

    /// Validate the form, update the inline errors and acknowledge a valid
    /// submission.
    pub fn submit(&mut self, cx: &mut PageContext<'_>) -> Option<&ValidationResult> {
        let form_id = self.form_id.clone()?;
        let config = &self.config;

        let field_ids: Vec<(&FieldSpec, Option<String>)> =
            [&config.name, &config.email, &config.message]
                .into_iter()
                .map(|field| (field, query_within(cx.root, &form_id, &field.selector())))
                .collect();

        let lookup = |id: &Option<String>| id.as_deref().and_then(|id| find_element(cx.root, id));
        let result = Validator::new()
            .field(&lookup(&field_ids[0].1), config.name.name.as_str())
            .required(config.name.message.as_str())
            .field(&lookup(&field_ids[1].1), config.email.name.as_str())
            .required(config.email.message.as_str())
            .email(config.email.message.as_str())
            .field(&lookup(&field_ids[2].1), config.message.name.as_str())
            .required(config.message.message.as_str())
            .validate();

        for (field, id) in &field_ids {
            let Some(id) = id else {
                debug!("[contact_form] no {}[name={}] in form", field.tag, field.name);
                continue;
            };
            match result.error_for(&field.name) {
                Some(error) => self.show_error(cx, id, &error.message),
                None => self.clear_error(cx, id),
            }
        }

        if result.is_valid() {
            cx.alert(self.config.success_message.as_str());
            reset_form(cx.root, &form_id);
        }

        self.last_result = Some(result);
        self.last_result.as_ref()
    }

    fn show_error(&self, cx: &mut PageContext<'_>, field_id: &str, message: &str) {
        self.clear_error(cx, field_id);

        let mut error = Element::div()
            .class(self.config.error_class.as_str())
            .attr(ERROR_FOR_ATTR, field_id)
            .margin(Edges::top(4));
        error.set_text(message);
        error.style.color = Some(self.config.error_color);

        if !insert_after(cx.root, field_id, error) {
            debug!("[contact_form] cannot place error after {}", field_id);
        }
        if let Some(field) = cx.element_mut(field_id) {
            field.style.border_color = Some(self.config.error_color);
        }
        debug!(
            "[contact_form] {} marked {}: {}",
            field_id, self.config.error_color, message
        );
    }

    fn clear_error(&self, cx: &mut PageContext<'_>, field_id: &str) {
        let selector = Selector::class(self.config.error_class.as_str())
            .and(Selector::attr(ERROR_FOR_ATTR, field_id));
        for error_id in query_all(cx.root, &selector) {
            remove_element(cx.root, &error_id);
        }
        if let Some(field) = cx.element_mut(field_id) {
            field.style.border_color = None;
        }
    }
}

/// Put every form control back to its initial `value` attribute.
fn reset_form(root: &mut Element, form_id: &str) {
    let Some(form) = find_element_mut(root, form_id) else {
        return;
    };
    reset_controls(form);
}

fn reset_controls(element: &mut Element) {
    // A textarea resets to its `value` attribute too, not to its text
    // content; controls without one clear to "".
    if element.value.is_some() {
        let initial = element.get_attr("value").unwrap_or_default().to_string();
        element.value = Some(initial);
    }
    if let Content::Children(children) = &mut element.content {
        for child in children {
            reset_controls(child);
        }
    }
}

impl Behavior for ContactForm {
    fn name(&self) -> &'static str {
        "contact_form"
    }

    fn init(&mut self, cx: &mut PageContext<'_>) {
        self.form_id = query(cx.root, &Selector::class(self.config.form_class.as_str()));
        if self.form_id.is_none() {
            debug!("[contact_form] no .{} in page, skipping", self.config.form_class);
        }
    }

    fn handle(&mut self, event: &Event, cx: &mut PageContext<'_>) -> EventResult {
        let Event::Submit { target } = event else {
            return EventResult::Ignored;
        };
        let Some(form_id) = &self.form_id else {
            return EventResult::Ignored;
        };
        if !is_within(cx.root, target, form_id) {
            return EventResult::Ignored;
        }
        self.submit(cx);
        EventResult::PreventDefault
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
