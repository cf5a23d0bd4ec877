use serde::{Deserialize, Serialize};

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Route {
    Inbox,
    Today,
    Upcoming,
    ProjectAtlas,
    ProjectOrbit,
    Settings,
}

impl Route {
    /// Row title shown in the sidebar and the page header.
    pub(crate) fn title(self) -> &'static str {
        match self {
            Route::Inbox => "Inbox",
            Route::Today => "Today",
            Route::Upcoming => "Upcoming",
            Route::ProjectAtlas => "Atlas",
            Route::ProjectOrbit => "Orbit",
            Route::Settings => "Settings",
        }
    }
}

/// Action rows that trigger behavior instead of navigating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellAction {
    Search,
    Support,
}

impl ShellAction {
    pub(crate) fn title(self) -> &'static str {
        match self {
            ShellAction::Search => "Search",
            ShellAction::Support => "Support",
        }
    }
}

/// Identity of a sidebar row, used for hover tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavId {
    Route(Route),
    Action(ShellAction),
}

/// One link entry in a navigation section.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavEntry {
    pub(crate) route: Route,
    pub(crate) icon: Option<&'static [u8]>,
}

/// Persisted shell preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ShellSettings {
    pub(crate) last_route: Route,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            last_route: Route::Inbox,
        }
    }
}

/// Read-only view model for the shell presentation layer.
pub(crate) struct ShellViewModel<'a> {
    pub(crate) route: Route,
    pub(crate) compact: bool,
    pub(crate) drawer_open: bool,
    pub(crate) hovered: Option<NavId>,
    pub(crate) header_scope: &'a loft_ui_sidebar::SectionScope,
    pub(crate) body_sections: &'a [super::state::NavSection],
    pub(crate) footer_section: &'a super::state::NavSection,
}
