//! Sidebar visibility
//!
//! Opening an artifact hides the sidebar competing for width with it: a lesson
//! artifact hides the chat panel, a chat artifact hides the course panel.
//! Nothing is ever shown again automatically; only user toggles reopen a
//! panel.

use crate::layout::Transition;
use art_artifact::Origin;
use serde::{Deserialize, Serialize};

/// Sidebar panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    /// Course navigation (left)
    Course,
    /// Chat (right)
    Chat,
}

/// Instruction to the shell hosting the sidebars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisibilityDirective {
    /// Collapse the chat panel
    HideChatPanel,
    /// Collapse the course panel
    HideCoursePanel,
}

impl VisibilityDirective {
    /// Panel the directive hides
    #[must_use]
    pub fn panel(&self) -> Panel {
        match self {
            Self::HideChatPanel => Panel::Chat,
            Self::HideCoursePanel => Panel::Course,
        }
    }
}

/// Sidebar visibility flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelVisibility {
    /// Course panel open
    pub course_open: bool,
    /// Chat panel open
    pub chat_open: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            course_open: true,
            chat_open: true,
        }
    }
}

/// Owner of the sidebar visibility flags
#[derive(Debug, Clone, Default)]
pub struct PanelVisibilityCoordinator {
    panels: PanelVisibility,
}

impl PanelVisibilityCoordinator {
    /// Create coordinator with initial visibility
    #[inline]
    #[must_use]
    pub fn new(panels: PanelVisibility) -> Self {
        Self { panels }
    }

    /// Current flags
    #[inline]
    #[must_use]
    pub fn panels(&self) -> PanelVisibility {
        self.panels
    }

    /// Whether `panel` is open
    #[must_use]
    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Course => self.panels.course_open,
            Panel::Chat => self.panels.chat_open,
        }
    }

    /// React to a layout transition
    ///
    /// Only open transitions produce a directive.
    pub fn observe(&mut self, transition: &Transition) -> Option<VisibilityDirective> {
        let directive = match transition.opened_origin()? {
            Origin::Lesson => VisibilityDirective::HideChatPanel,
            Origin::Chat => VisibilityDirective::HideCoursePanel,
            Origin::Manual => return None,
        };
        self.set(directive.panel(), false);
        tracing::debug!(?directive, "sidebar auto-hidden");
        Some(directive)
    }

    /// User sets the course panel
    pub fn set_course_panel(&mut self, open: bool) {
        self.set(Panel::Course, open);
    }

    /// User sets the chat panel
    pub fn set_chat_panel(&mut self, open: bool) {
        self.set(Panel::Chat, open);
    }

    /// User toggles the course panel; returns the new state
    pub fn toggle_course_panel(&mut self) -> bool {
        self.panels.course_open = !self.panels.course_open;
        self.panels.course_open
    }

    /// User toggles the chat panel; returns the new state
    pub fn toggle_chat_panel(&mut self) -> bool {
        self.panels.chat_open = !self.panels.chat_open;
        self.panels.chat_open
    }

    fn set(&mut self, panel: Panel, open: bool) {
        match panel {
            Panel::Course => self.panels.course_open = open,
            Panel::Chat => self.panels.chat_open = open,
        }
    }
}
