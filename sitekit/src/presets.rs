//! The two pages of the site, wired with their behaviors.

use sitedom::Element;

use crate::collapsible::{CollapsibleConfig, CollapsibleController};
use crate::contact_form::{ContactForm, ContactFormConfig};
use crate::error::ConfigError;
use crate::lightbox::{Lightbox, LightboxConfig};
use crate::nav::{NavConfig, NavMenu};
use crate::page::Page;
use crate::reveal::{RevealConfig, RevealObserver};
use crate::smooth_scroll::SmoothScroll;

/// Home page: navigation, smooth scrolling, the contact form, reveal on
/// scroll and collapsible reference cards.
pub fn home_page(root: Element) -> Result<Page, ConfigError> {
    Ok(Page::new(root)
        .behavior(NavMenu::new(NavConfig::default())?)
        .behavior(SmoothScroll::default())
        .behavior(ContactForm::new(ContactFormConfig::default())?)
        .behavior(RevealObserver::new(RevealConfig::home_page())?)
        .behavior(CollapsibleController::new(
            CollapsibleConfig::reference_cards(),
        )?))
}

/// Property detail page: navigation, the gallery lightbox, reveal on scroll
/// and the collapsible description.
pub fn property_page(root: Element) -> Result<Page, ConfigError> {
    Ok(Page::new(root)
        .behavior(NavMenu::new(NavConfig::default())?)
        .behavior(SmoothScroll::default())
        .behavior(Lightbox::new(LightboxConfig::default())?)
        .behavior(RevealObserver::new(RevealConfig::property_page())?)
        .behavior(CollapsibleController::new(
            CollapsibleConfig::property_description(),
        )?))
}
