use crate::error::{ConfigError, require_class};

/// Where a block's toggle control comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlPlacement {
    /// Create a button and append it to the nearest ancestor carrying
    /// `container_class`. Blocks without such an ancestor are skipped.
    Create {
        container_class: String,
        control_class: String,
    },
    /// Wire a control already in the page: the nearest element carrying
    /// `control_class`, searching outwards from the block. It is hidden when
    /// the block is short enough to need none.
    Existing { control_class: String },
}

/// Sibling group settings: cards sharing one height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    pub card_class: String,
}

/// Configuration for one [`CollapsibleController`](super::CollapsibleController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsibleConfig {
    /// Blocks taller than this many pixels are collapsed to it.
    pub threshold: u32,
    /// Class of the managed blocks.
    pub block_class: String,
    /// Class set on a block while it is collapsed.
    pub collapsed_class: String,
    /// Control label while collapsed.
    pub expand_label: String,
    /// Control label while expanded.
    pub collapse_label: String,
    /// `aria-label` for created controls.
    pub aria_label: Option<String>,
    pub control: ControlPlacement,
    /// Equalize the heights of the enclosing cards (None = no grouping).
    pub group: Option<GroupConfig>,
}

impl Default for CollapsibleConfig {
    fn default() -> Self {
        Self {
            threshold: 120,
            block_class: "collapsible".to_string(),
            collapsed_class: "collapsed".to_string(),
            expand_label: "Více".to_string(),
            collapse_label: "Méně".to_string(),
            aria_label: None,
            control: ControlPlacement::Create {
                container_class: "collapsible-content".to_string(),
                control_class: "collapsible-toggle".to_string(),
            },
            group: None,
        }
    }
}

impl CollapsibleConfig {
    /// Manage blocks with the given class, collapsing above `threshold`.
    pub fn new(block_class: impl Into<String>, threshold: u32) -> Self {
        Self {
            block_class: block_class.into(),
            threshold,
            ..Default::default()
        }
    }

    /// Reference cards: 120px, created "Více" / "Méně" buttons, grouped
    /// card heights.
    pub fn reference_cards() -> Self {
        Self::new("reference-text", 120)
            .labels("Více", "Méně")
            .aria_label("Zobrazit více textu")
            .create_control_in("reference-content", "reference-toggle")
            .grouped("reference-card")
    }

    /// Property description: 200px, an existing toggle in the page, no
    /// grouping.
    pub fn property_description() -> Self {
        Self::new("property-description-text", 200)
            .labels("Zobrazit více", "Zobrazit méně")
            .existing_control("property-description-toggle")
    }

    pub fn threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn labels(mut self, expand: impl Into<String>, collapse: impl Into<String>) -> Self {
        self.expand_label = expand.into();
        self.collapse_label = collapse.into();
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn collapsed_class(mut self, class: impl Into<String>) -> Self {
        self.collapsed_class = class.into();
        self
    }

    pub fn create_control_in(
        mut self,
        container_class: impl Into<String>,
        control_class: impl Into<String>,
    ) -> Self {
        self.control = ControlPlacement::Create {
            container_class: container_class.into(),
            control_class: control_class.into(),
        };
        self
    }

    pub fn existing_control(mut self, control_class: impl Into<String>) -> Self {
        self.control = ControlPlacement::Existing {
            control_class: control_class.into(),
        };
        self
    }

    /// Equalize the heights of the nearest ancestors carrying `card_class`.
    pub fn grouped(mut self, card_class: impl Into<String>) -> Self {
        self.group = Some(GroupConfig {
            card_class: card_class.into(),
        });
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.expand_label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel("expand"));
        }
        if self.collapse_label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel("collapse"));
        }
        require_class(&self.block_class, "block")?;
        require_class(&self.collapsed_class, "collapsed")?;
        match &self.control {
            ControlPlacement::Create {
                container_class,
                control_class,
            } => {
                require_class(container_class, "container")?;
                require_class(control_class, "control")?;
            }
            ControlPlacement::Existing { control_class } => {
                require_class(control_class, "control")?;
            }
        }
        if let Some(group) = &self.group {
            require_class(&group.card_class, "card")?;
        }
        Ok(())
    }
}
