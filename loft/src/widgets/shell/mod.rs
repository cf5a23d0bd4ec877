mod errors;
mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod storage;
pub(crate) mod view;

use iced::Task;

pub(crate) use event::{ShellEffect, ShellEvent, ShellIntent};
pub(crate) use model::ShellSettings;
use model::ShellViewModel;
pub(crate) use reducer::ShellCtx;
use state::ShellState;

/// Navigation shell widget owning its private state.
pub(crate) struct ShellWidget {
    state: ShellState,
}

impl ShellWidget {
    /// Construct the shell from persisted settings.
    pub(crate) fn new(settings: ShellSettings) -> Self {
        Self {
            state: ShellState::new(settings),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: ShellIntent,
        ctx: &ShellCtx,
    ) -> Task<ShellEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> ShellViewModel<'_> {
        ShellViewModel {
            route: self.state.route(),
            compact: self.state.is_compact(),
            drawer_open: self.state.is_drawer_open(),
            hovered: self.state.hovered(),
            header_scope: self.state.header_scope(),
            body_sections: self.state.body_sections(),
            footer_section: self.state.footer_section(),
        }
    }

    /// Return whether any indicator slide is still in flight.
    pub(crate) fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Snapshot the persistable part of the shell state.
    pub(crate) fn settings(&self) -> ShellSettings {
        ShellSettings {
            last_route: self.state.route(),
        }
    }
}
