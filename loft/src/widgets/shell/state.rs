use loft_ui_sidebar::{IndicatorMotion, SectionScope};

use super::model::{NavEntry, NavId, Route, ShellSettings};
use crate::icons;

/// Window widths below this render the sidebar as a dismissible drawer.
pub(super) const COMPACT_WIDTH: f32 = 720.0;

/// One mounted navigation section: its scope, entries, and indicator.
pub(crate) struct NavSection {
    heading: Option<&'static str>,
    entries: Vec<NavEntry>,
    scope: SectionScope,
    motion: IndicatorMotion,
}

impl NavSection {
    fn new(heading: Option<&'static str>, entries: Vec<NavEntry>) -> Self {
        Self {
            heading,
            entries,
            scope: SectionScope::new(),
            motion: IndicatorMotion::default(),
        }
    }

    pub(crate) fn heading(&self) -> Option<&'static str> {
        self.heading
    }

    pub(crate) fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub(crate) fn scope(&self) -> &SectionScope {
        &self.scope
    }

    pub(crate) fn motion(&self) -> &IndicatorMotion {
        &self.motion
    }

    pub(crate) fn slot_of(&self, route: Route) -> Option<usize> {
        self.entries.iter().position(|entry| entry.route == route)
    }

    fn place(&mut self, route: Route, animate: bool) {
        if let Some(slot) = self.slot_of(route) {
            if animate {
                self.motion.go_to(slot as f32);
            } else {
                self.motion.jump_to(slot as f32);
            }
        }
    }
}

/// Internal runtime state for the navigation shell.
pub(super) struct ShellState {
    route: Route,
    compact: bool,
    drawer_open: bool,
    hovered: Option<NavId>,
    header_scope: SectionScope,
    body_sections: Vec<NavSection>,
    footer_section: NavSection,
}

impl ShellState {
    pub(super) fn new(settings: ShellSettings) -> Self {
        let body_sections = vec![
            NavSection::new(
                None,
                vec![
                    NavEntry {
                        route: Route::Inbox,
                        icon: Some(icons::INBOX),
                    },
                    NavEntry {
                        route: Route::Today,
                        icon: Some(icons::TODAY),
                    },
                    NavEntry {
                        route: Route::Upcoming,
                        icon: Some(icons::UPCOMING),
                    },
                ],
            ),
            NavSection::new(
                Some("Projects"),
                vec![
                    NavEntry {
                        route: Route::ProjectAtlas,
                        icon: Some(icons::PROJECT),
                    },
                    NavEntry {
                        route: Route::ProjectOrbit,
                        icon: Some(icons::PROJECT),
                    },
                ],
            ),
        ];

        let footer_section = NavSection::new(
            None,
            vec![NavEntry {
                route: Route::Settings,
                icon: Some(icons::SETTINGS),
            }],
        );

        let mut state = Self {
            route: settings.last_route,
            compact: false,
            drawer_open: false,
            hovered: None,
            header_scope: SectionScope::new(),
            body_sections,
            footer_section,
        };
        state.place_indicators(false);
        state
    }

    pub(super) fn route(&self) -> Route {
        self.route
    }

    pub(super) fn is_compact(&self) -> bool {
        self.compact
    }

    pub(super) fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub(super) fn hovered(&self) -> Option<NavId> {
        self.hovered
    }

    pub(super) fn header_scope(&self) -> &SectionScope {
        &self.header_scope
    }

    pub(super) fn body_sections(&self) -> &[NavSection] {
        &self.body_sections
    }

    pub(super) fn footer_section(&self) -> &NavSection {
        &self.footer_section
    }

    pub(super) fn set_route(&mut self, route: Route) {
        self.route = route;
        self.place_indicators(true);
    }

    pub(super) fn set_compact(&mut self, compact: bool) {
        if self.compact == compact {
            return;
        }
        self.compact = compact;
        self.drawer_open = false;
    }

    pub(super) fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub(super) fn dismiss_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub(super) fn set_hovered(&mut self, id: NavId) {
        self.hovered = Some(id);
    }

    /// Clear hover only if the pointer left the row that set it.
    pub(super) fn clear_hovered_if(&mut self, id: NavId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    pub(super) fn advance_motions(&mut self) {
        for section in &mut self.body_sections {
            section.motion.advance();
        }
        self.footer_section.motion.advance();
    }

    pub(super) fn is_animating(&self) -> bool {
        self.body_sections
            .iter()
            .any(|section| !section.motion.is_settled())
            || !self.footer_section.motion.is_settled()
    }

    fn place_indicators(&mut self, animate: bool) {
        let route = self.route;
        for section in &mut self.body_sections {
            section.place(route, animate);
        }
        self.footer_section.place(route, animate);
    }
}
