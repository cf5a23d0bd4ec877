use std::time::Duration;

use iced::{Element, Subscription, Task, Theme, window};
use loft_ui_sidebar::INDICATOR_TICK_MS;

use crate::widgets::shell::view::ShellViewProps;
use crate::widgets::shell::{
    ShellCtx, ShellEffect, ShellEvent, ShellIntent, ShellWidget, storage,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Widget set owned by the application.
pub(crate) struct Widgets {
    pub(crate) shell: ShellWidget,
}

/// Application root owning all widgets.
pub(crate) struct App {
    pub(crate) widgets: Widgets,
}

/// App event stream routed through the update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    Shell(ShellEvent),
    Window(window::Event),
}

impl App {
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = storage::load_initial_shell_settings();
        let app = Self {
            widgets: Widgets {
                shell: ShellWidget::new(settings),
            },
        };
        (app, Task::none())
    }

    pub(crate) fn title(&self) -> String {
        String::from("Loft")
    }

    pub(crate) fn theme(&self) -> Theme {
        Theme::Light
    }

    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        match event {
            AppEvent::Shell(ShellEvent::Intent(intent)) => self
                .widgets
                .shell
                .reduce(intent, &ShellCtx)
                .map(AppEvent::Shell),
            AppEvent::Shell(ShellEvent::Effect(effect)) => {
                self.handle_shell_effect(effect)
            },
            AppEvent::Window(window::Event::Resized(size)) => self
                .widgets
                .shell
                .reduce(ShellIntent::WindowResized { size }, &ShellCtx)
                .map(AppEvent::Shell),
            AppEvent::Window(_) => Task::none(),
        }
    }

    fn handle_shell_effect(&mut self, effect: ShellEffect) -> Task<AppEvent> {
        match effect {
            ShellEffect::PersistSettings => {
                let settings = self.widgets.shell.settings();
                if let Err(err) = storage::save_shell_settings(&settings) {
                    log::warn!("Failed to persist shell settings: {err}");
                }
                Task::none()
            },
            ShellEffect::ActionRequested(action) => {
                log::info!("Shell action requested: {action:?}");
                Task::none()
            },
        }
    }

    pub(crate) fn view(&self) -> Element<'_, AppEvent> {
        let vm = self.widgets.shell.vm();
        crate::widgets::shell::view::view(ShellViewProps { vm })
            .map(|intent| AppEvent::Shell(ShellEvent::Intent(intent)))
    }

    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        let win_subs =
            window::events().map(|(_id, event)| AppEvent::Window(event));

        let mut subs = vec![win_subs];

        // Indicator tick only while a slide is in flight.
        if self.widgets.shell.is_animating() {
            let tick =
                iced::time::every(Duration::from_millis(INDICATOR_TICK_MS))
                    .map(|_| {
                        AppEvent::Shell(ShellEvent::Intent(
                            ShellIntent::IndicatorTick,
                        ))
                    });
            subs.push(tick);
        }

        Subscription::batch(subs)
    }
}
