//! Mobile navigation menu toggle.

use std::any::Any;

use log::debug;
use sitedom::element::{closest, is_within, query};
use sitedom::{Event, Selector};

use crate::behavior::{Behavior, EventResult, PageContext};
use crate::error::{ConfigError, require_class};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    pub toggle_class: String,
    pub menu_class: String,
    /// Class set on both the toggle and the menu while the menu is open.
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_class: "nav-toggle".to_string(),
            menu_class: "nav-menu".to_string(),
            active_class: "active".to_string(),
        }
    }
}

impl NavConfig {
    pub fn new(toggle_class: impl Into<String>, menu_class: impl Into<String>) -> Self {
        Self {
            toggle_class: toggle_class.into(),
            menu_class: menu_class.into(),
            ..Default::default()
        }
    }

    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_class(&self.toggle_class, "toggle")?;
        require_class(&self.menu_class, "menu")?;
        require_class(&self.active_class, "active")
    }
}

/// Opens and closes the navigation menu.
///
/// The toggle flips the active class on itself and the menu; following any
/// link inside the menu closes it.
#[derive(Debug)]
pub struct NavMenu {
    config: NavConfig,
    toggle_id: Option<String>,
    menu_id: Option<String>,
}

impl NavMenu {
    pub fn new(config: NavConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            toggle_id: None,
            menu_id: None,
        })
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn toggle_id(&self) -> Option<&str> {
        self.toggle_id.as_deref()
    }

    pub fn menu_id(&self) -> Option<&str> {
        self.menu_id.as_deref()
    }

    /// True while the menu carries the active class.
    pub fn is_open(&self, cx: &PageContext<'_>) -> bool {
        self.menu_id
            .as_deref()
            .and_then(|id| cx.element(id))
            .is_some_and(|menu| menu.has_class(&self.config.active_class))
    }

    fn set_active(&self, cx: &mut PageContext<'_>, active: bool) {
        let class = self.config.active_class.as_str();
        for id in [&self.toggle_id, &self.menu_id].into_iter().flatten() {
            if let Some(element) = cx.element_mut(id) {
                if active {
                    element.add_class(class);
                } else {
                    element.remove_class(class);
                }
            }
        }
    }
}

impl Behavior for NavMenu {
    fn name(&self) -> &'static str {
        "nav"
    }

    fn init(&mut self, cx: &mut PageContext<'_>) {
        self.menu_id = query(cx.root, &Selector::class(self.config.menu_class.as_str()));
        if self.menu_id.is_none() {
            debug!("[nav] no .{} in page, skipping", self.config.menu_class);
            return;
        }
        self.toggle_id = query(cx.root, &Selector::class(self.config.toggle_class.as_str()));
        match &self.toggle_id {
            Some(id) => {
                if let Some(toggle) = cx.element_mut(id) {
                    toggle.clickable = true;
                }
            }
            None => debug!("[nav] no .{} in page", self.config.toggle_class),
        }
    }

    fn handle(&mut self, event: &Event, cx: &mut PageContext<'_>) -> EventResult {
        let Event::Click { target } = event else {
            return EventResult::Ignored;
        };
        let Some(menu_id) = self.menu_id.clone() else {
            return EventResult::Ignored;
        };

        let on_toggle = self
            .toggle_id
            .as_deref()
            .is_some_and(|toggle_id| is_within(cx.root, target, toggle_id));
        if on_toggle {
            let open = !self.is_open(cx);
            debug!("[nav] menu {}", if open { "opened" } else { "closed" });
            self.set_active(cx, open);
            return EventResult::Handled;
        }

        let in_menu_link = closest(cx.root, target, &Selector::tag("a"))
            .is_some_and(|link| is_within(cx.root, &link, &menu_id));
        if in_menu_link {
            self.set_active(cx, false);
            // The link's own action still runs.
            return EventResult::Handled;
        }

        EventResult::Ignored
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
