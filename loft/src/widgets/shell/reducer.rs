use iced::Task;

use super::event::{ShellEffect, ShellEvent, ShellIntent};
use super::state::{COMPACT_WIDTH, ShellState};

/// Read-only context for shell reduction.
pub(crate) struct ShellCtx;

/// Reduce a shell intent into state updates and effect events.
///
/// Activating a link row follows the closeable-panel convention: besides
/// switching the route it dismisses the drawer when one is open, so a tap in
/// the compact overlay both navigates and closes it.
pub(crate) fn reduce(
    state: &mut ShellState,
    intent: ShellIntent,
    _ctx: &ShellCtx,
) -> Task<ShellEvent> {
    match intent {
        ShellIntent::ItemActivated(route) => {
            state.set_route(route);
            if state.is_compact() {
                state.dismiss_drawer();
            }
            Task::done(ShellEvent::Effect(ShellEffect::PersistSettings))
        },
        ShellIntent::ActionInvoked(action) => Task::done(ShellEvent::Effect(
            ShellEffect::ActionRequested(action),
        )),
        ShellIntent::ItemEntered(id) => {
            state.set_hovered(id);
            Task::none()
        },
        ShellIntent::ItemExited(id) => {
            state.clear_hovered_if(id);
            Task::none()
        },
        ShellIntent::DrawerToggled => {
            state.toggle_drawer();
            Task::none()
        },
        ShellIntent::DrawerDismissed => {
            state.dismiss_drawer();
            Task::none()
        },
        ShellIntent::WindowResized { size } => {
            state.set_compact(size.width < COMPACT_WIDTH);
            Task::none()
        },
        ShellIntent::IndicatorTick => {
            state.advance_motions();
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::ShellCtx;
    use crate::widgets::shell::model::{
        NavId, Route, ShellAction, ShellSettings,
    };
    use crate::widgets::shell::{ShellIntent, ShellWidget};

    fn compact_widget_with_open_drawer() -> ShellWidget {
        let mut widget = ShellWidget::new(ShellSettings::default());
        let _resize = widget.reduce(
            ShellIntent::WindowResized {
                size: Size::new(480.0, 800.0),
            },
            &ShellCtx,
        );
        let _toggle = widget.reduce(ShellIntent::DrawerToggled, &ShellCtx);
        widget
    }

    #[test]
    fn given_link_activation_when_reduced_then_route_and_indicator_update() {
        let mut widget = ShellWidget::new(ShellSettings::default());
        let _task = widget
            .reduce(ShellIntent::ItemActivated(Route::Today), &ShellCtx);

        let vm = widget.vm();
        assert_eq!(vm.route, Route::Today);
        assert_eq!(vm.body_sections[0].motion().target(), 1.0);
        assert!(widget.is_animating());
    }

    #[test]
    fn given_compact_open_drawer_when_link_activated_then_drawer_dismisses() {
        let mut widget = compact_widget_with_open_drawer();
        assert!(widget.vm().drawer_open);

        let _task = widget
            .reduce(ShellIntent::ItemActivated(Route::Upcoming), &ShellCtx);

        let vm = widget.vm();
        assert_eq!(vm.route, Route::Upcoming);
        assert!(!vm.drawer_open);
    }

    #[test]
    fn given_action_invocation_when_reduced_then_navigation_is_untouched() {
        let mut widget = compact_widget_with_open_drawer();
        let initial_route = widget.vm().route;

        let _task = widget.reduce(
            ShellIntent::ActionInvoked(ShellAction::Search),
            &ShellCtx,
        );

        let vm = widget.vm();
        assert_eq!(vm.route, initial_route);
        assert!(vm.drawer_open);
    }

    #[test]
    fn given_tick_events_when_reduced_then_indicator_settles_at_target() {
        let mut widget = ShellWidget::new(ShellSettings::default());
        let _task = widget
            .reduce(ShellIntent::ItemActivated(Route::Upcoming), &ShellCtx);

        for _ in 0..32 {
            let _tick =
                widget.reduce(ShellIntent::IndicatorTick, &ShellCtx);
        }

        assert!(!widget.is_animating());
        let vm = widget.vm();
        assert_eq!(vm.body_sections[0].motion().offset(), 2.0);
    }

    #[test]
    fn given_footer_route_activation_then_footer_indicator_retargets() {
        let mut widget = ShellWidget::new(ShellSettings::default());
        let _task = widget
            .reduce(ShellIntent::ItemActivated(Route::Settings), &ShellCtx);

        let vm = widget.vm();
        assert_eq!(vm.footer_section.motion().target(), 0.0);
        assert_eq!(vm.footer_section.slot_of(Route::Settings), Some(0));
    }

    #[test]
    fn given_pointer_enter_and_exit_when_reduced_then_hover_tracks_rows() {
        let mut widget = ShellWidget::new(ShellSettings::default());
        let inbox = NavId::Route(Route::Inbox);
        let today = NavId::Route(Route::Today);

        let _enter = widget.reduce(ShellIntent::ItemEntered(inbox), &ShellCtx);
        assert_eq!(widget.vm().hovered, Some(inbox));

        // A stale exit from another row must not clear the active hover.
        let _exit = widget.reduce(ShellIntent::ItemExited(today), &ShellCtx);
        assert_eq!(widget.vm().hovered, Some(inbox));

        let _exit = widget.reduce(ShellIntent::ItemExited(inbox), &ShellCtx);
        assert_eq!(widget.vm().hovered, None);
    }

    #[test]
    fn given_resize_when_reduced_then_compact_flag_follows_width() {
        let mut widget = ShellWidget::new(ShellSettings::default());
        assert!(!widget.vm().compact);

        let _task = widget.reduce(
            ShellIntent::WindowResized {
                size: Size::new(480.0, 800.0),
            },
            &ShellCtx,
        );
        assert!(widget.vm().compact);

        let _task = widget.reduce(
            ShellIntent::WindowResized {
                size: Size::new(1024.0, 800.0),
            },
            &ShellCtx,
        );
        assert!(!widget.vm().compact);
    }

    #[test]
    fn given_activation_when_settings_snapshot_taken_then_route_is_recorded()
    {
        let mut widget = ShellWidget::new(ShellSettings::default());
        let _task = widget
            .reduce(ShellIntent::ItemActivated(Route::ProjectOrbit), &ShellCtx);

        assert_eq!(widget.settings().last_route, Route::ProjectOrbit);
    }
}
