use super::model::{NavId, Route, ShellAction};

/// Intent events handled by the shell presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum ShellIntent {
    ItemActivated(Route),
    ActionInvoked(ShellAction),
    ItemEntered(NavId),
    ItemExited(NavId),
    DrawerToggled,
    DrawerDismissed,
    WindowResized { size: iced::Size },
    IndicatorTick,
}

/// Effect events produced by the shell reducer.
#[derive(Debug, Clone)]
pub(crate) enum ShellEffect {
    PersistSettings,
    ActionRequested(ShellAction),
}

/// Shell event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ShellEvent {
    /// Intent event reduced by the shell widget.
    Intent(ShellIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ShellEffect),
}
