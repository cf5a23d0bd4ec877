//! Sidebar navigation widgets for [`iced`] applications.
//!
//! This crate is split into three layers:
//! - model helpers ([`SectionScope`], [`IndicatorMotion`]) that are
//!   UI-agnostic;
//! - style classes ([`SidebarClass`], [`ItemClass`]) merged over
//!   theme-derived base rules;
//! - view builders ([`Sidebar`], [`SidebarSection`], [`SidebarItem`], ...)
//!   that render in `iced`.
//!
//! The recommended flow for a navigation shell:
//! 1. keep one [`SectionScope`] and one [`IndicatorMotion`] per mounted
//!    section in your app state;
//! 2. mark at most one item per section with [`SidebarItem::current`];
//! 3. on navigation, retarget the section's motion with
//!    [`IndicatorMotion::go_to`] and tick it from a subscription every
//!    [`INDICATOR_TICK_MS`] milliseconds until it settles.
//!
//! See `examples/sidebar.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::{Element, Length};
//! use loft_ui_sidebar::{
//!     IndicatorMotion, SectionScope, Sidebar, SidebarBody, SidebarItem,
//!     SidebarLabel, SidebarSection,
//! };
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Navigate(usize),
//! }
//!
//! struct State {
//!     scope: SectionScope,
//!     motion: IndicatorMotion,
//!     route: usize,
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     let mut section =
//!         SidebarSection::new(&state.scope).indicator(&state.motion);
//!
//!     for (slot, title) in ["Inbox", "Today"].iter().enumerate() {
//!         section = section.item(
//!             SidebarItem::link(
//!                 SidebarLabel::new(*title).view(),
//!                 Message::Navigate(slot),
//!             )
//!             .current(slot == state.route),
//!         );
//!     }
//!
//!     Sidebar::new()
//!         .width(Length::Fixed(260.0))
//!         .push(SidebarBody::new().section(section).view())
//!         .view()
//! }
//! ```

mod model;
mod style;
mod view;

pub use model::{INDICATOR_TICK_MS, IndicatorMotion, ScopeId, SectionScope};
pub use style::{ItemClass, SidebarClass};
pub use view::{
    Sidebar, SidebarBody, SidebarDivider, SidebarFooter, SidebarHeader,
    SidebarHeading, SidebarItem, SidebarLabel, SidebarSection, SidebarSpacer,
};
