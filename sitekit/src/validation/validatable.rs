//! Validatable trait for things that hold a form value.

use sitedom::Element;

/// Something a [`Validator`](super::Validator) can read a value from.
pub trait Validatable {
    /// The current value, or None when the field does not exist.
    fn validation_value(&self) -> Option<String>;

    /// Element to report errors against.
    fn element_id(&self) -> Option<String>;
}

impl Validatable for Element {
    fn validation_value(&self) -> Option<String> {
        Some(self.value.clone().unwrap_or_default())
    }

    fn element_id(&self) -> Option<String> {
        Some(self.id.clone())
    }
}

impl Validatable for str {
    fn validation_value(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn element_id(&self) -> Option<String> {
        None
    }
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn validation_value(&self) -> Option<String> {
        (**self).validation_value()
    }

    fn element_id(&self) -> Option<String> {
        (**self).element_id()
    }
}

impl<T: Validatable> Validatable for Option<T> {
    fn validation_value(&self) -> Option<String> {
        self.as_ref().and_then(|value| value.validation_value())
    }

    fn element_id(&self) -> Option<String> {
        self.as_ref().and_then(|value| value.element_id())
    }
}
