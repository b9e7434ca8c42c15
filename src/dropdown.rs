//! Placement and open/close state for dropdown menus.
//!
//! Callers measure the page themselves and feed the numbers in; nothing here
//! touches a document.

/// Menus taller than this scroll instead of growing.
pub const MAX_MENU_HEIGHT: f64 = 300.0;

/// Space kept free below a menu before it flips above its anchor.
pub const BOTTOM_MARGIN: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Below,
    Above,
}

/// Page measurements taken when the menu is about to open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub viewport_height: f64,
    /// Distance from the top of the viewport to the anchor element.
    pub anchor_top: f64,
    /// Full content height of the menu.
    pub menu_scroll_height: f64,
}

impl Geometry {
    /// Unmeasurable heights count as the full cap.
    pub fn menu_height(&self) -> f64 {
        if !self.menu_scroll_height.is_finite() {
            return MAX_MENU_HEIGHT;
        }
        self.menu_scroll_height.clamp(0.0, MAX_MENU_HEIGHT)
    }

    pub fn placement(&self) -> Placement {
        if self.viewport_height - self.anchor_top < self.menu_height() + BOTTOM_MARGIN {
            Placement::Above
        } else {
            Placement::Below
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropdownAction {
    /// Open; geometry is `None` when the anchor or menu is not mounted yet.
    Open(Option<Geometry>),
    Close,
    /// A click anywhere on the page.
    Click { inside: bool },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dropdown {
    pub open: bool,
    pub placement: Placement,
}

impl Dropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_top(&self) -> bool {
        self.placement == Placement::Above
    }
}

/// Apply an action. Placement is only recomputed when geometry is known;
/// otherwise the previous placement is kept.
pub fn update(state: &mut Dropdown, action: DropdownAction) {
    match action {
        DropdownAction::Open(geometry) => {
            if let Some(g) = geometry {
                state.placement = g.placement();
            }
            state.open = true;
        }
        DropdownAction::Close => {
            state.open = false;
        }
        DropdownAction::Click { inside } => {
            if !inside {
                state.open = false;
            }
        }
    }
}

/// Inline height style for the menu: its full height while open, unset when closed.
pub fn expanded_height(open: bool, scroll_height: f64) -> Option<String> {
    open.then(|| format!("{scroll_height}px"))
}
