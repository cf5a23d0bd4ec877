use iced::widget::container;
use iced::{Border, Color, Theme};

/// Default corner radius for interactive rows.
const ITEM_RADIUS: f32 = 8.0;

const EDGE_ALPHA: f32 = 0.08;
const ROW_FILL_ALPHA: f32 = 0.05;

/// Partial style override for structural sidebar containers.
///
/// Every field is one independent style group; `None` falls through to the
/// theme-derived base. Merging two classes resolves conflicts per group with
/// the override winning.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SidebarClass {
    /// Container background fill.
    pub background: Option<Color>,
    /// Color of border and divider lines.
    pub edge: Option<Color>,
    /// Base text color cascaded to children.
    pub text: Option<Color>,
    /// Accent color used by section headings.
    pub accent: Option<Color>,
}

impl SidebarClass {
    /// Merge `over` on top of `base`, group by group.
    pub fn merge(base: Self, over: Self) -> Self {
        Self {
            background: over.background.or(base.background),
            edge: over.edge.or(base.edge),
            text: over.text.or(base.text),
            accent: over.accent.or(base.accent),
        }
    }
}

/// Partial style override for [`SidebarItem`](crate::SidebarItem) rows.
///
/// Same merge semantics as [`SidebarClass`]: each field overrides one group
/// of the fixed base rule set and `None` keeps the theme default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemClass {
    /// Row text color.
    pub text: Option<Color>,
    /// Row text color while the item is current.
    pub text_current: Option<Color>,
    /// Row fill while hovered.
    pub hover_background: Option<Color>,
    /// Row fill while pressed.
    pub press_background: Option<Color>,
    /// Icon color at rest.
    pub icon: Option<Color>,
    /// Icon color while hovered, pressed, or current.
    pub icon_current: Option<Color>,
    /// Current-indicator bar color.
    pub indicator: Option<Color>,
    /// Row corner radius.
    pub radius: Option<f32>,
}

impl ItemClass {
    /// Merge `over` on top of `base`, group by group.
    pub fn merge(base: Self, over: Self) -> Self {
        Self {
            text: over.text.or(base.text),
            text_current: over.text_current.or(base.text_current),
            hover_background: over.hover_background.or(base.hover_background),
            press_background: over.press_background.or(base.press_background),
            icon: over.icon.or(base.icon),
            icon_current: over.icon_current.or(base.icon_current),
            indicator: over.indicator.or(base.indicator),
            radius: over.radius.or(base.radius),
        }
    }
}

/// Interaction state an item row is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ItemState {
    pub(crate) hovered: bool,
    pub(crate) pressed: bool,
    pub(crate) current: bool,
}

pub(crate) fn edge_color(theme: &Theme, class: &SidebarClass) -> Color {
    class
        .edge
        .unwrap_or_else(|| faint(contrast_color(theme), EDGE_ALPHA))
}

pub(crate) fn accent_color(theme: &Theme, class: &SidebarClass) -> Color {
    class
        .accent
        .unwrap_or_else(|| theme.extended_palette().primary.base.color)
}

pub(crate) fn shell_style(
    theme: &Theme,
    class: &SidebarClass,
) -> container::Style {
    container::Style {
        background: class.background.map(Into::into),
        text_color: Some(
            class.text.unwrap_or_else(|| contrast_color(theme)),
        ),
        ..Default::default()
    }
}

pub(crate) fn item_row_style(
    theme: &Theme,
    class: &ItemClass,
    state: ItemState,
) -> container::Style {
    let contrast = contrast_color(theme);

    let background = if state.pressed {
        Some(
            class
                .press_background
                .unwrap_or_else(|| faint(contrast, ROW_FILL_ALPHA)),
        )
    } else if state.hovered {
        Some(
            class
                .hover_background
                .unwrap_or_else(|| faint(contrast, ROW_FILL_ALPHA)),
        )
    } else {
        None
    };

    let text = if state.current {
        class.text_current.or(class.text).unwrap_or(contrast)
    } else {
        class.text.unwrap_or(contrast)
    };

    container::Style {
        background: background.map(Into::into),
        text_color: Some(text),
        border: Border {
            radius: class.radius.unwrap_or(ITEM_RADIUS).into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

pub(crate) fn item_icon_color(
    theme: &Theme,
    class: &ItemClass,
    state: ItemState,
) -> Color {
    if state.current || state.hovered || state.pressed {
        class.icon_current.unwrap_or_else(|| contrast_color(theme))
    } else {
        class
            .icon
            .unwrap_or_else(|| theme.extended_palette().primary.base.color)
    }
}

pub(crate) fn indicator_color(theme: &Theme, class: &ItemClass) -> Color {
    class.indicator.unwrap_or_else(|| contrast_color(theme))
}

/// Strongest readable color on the sidebar surface for the active theme.
fn contrast_color(theme: &Theme) -> Color {
    theme.extended_palette().background.base.text
}

fn faint(color: Color, alpha: f32) -> Color {
    let mut faded = color;
    faded.a = alpha;
    faded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_base_groups_when_override_is_empty() {
        let base = SidebarClass {
            background: Some(Color::BLACK),
            edge: Some(Color::WHITE),
            text: None,
            accent: None,
        };
        let merged = SidebarClass::merge(base, SidebarClass::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn merge_lets_override_groups_win_over_base() {
        let base = ItemClass {
            text: Some(Color::BLACK),
            hover_background: Some(Color::WHITE),
            ..ItemClass::default()
        };
        let over = ItemClass {
            hover_background: Some(Color::TRANSPARENT),
            ..ItemClass::default()
        };

        let merged = ItemClass::merge(base, over);
        assert_eq!(merged.hover_background, Some(Color::TRANSPARENT));
        assert_eq!(merged.text, Some(Color::BLACK));
    }

    #[test]
    fn merge_does_not_leak_between_groups() {
        let over = ItemClass {
            indicator: Some(Color::WHITE),
            ..ItemClass::default()
        };
        let merged = ItemClass::merge(ItemClass::default(), over);
        assert_eq!(merged.indicator, Some(Color::WHITE));
        assert_eq!(merged.icon, None);
        assert_eq!(merged.text, None);
    }

    #[test]
    fn hover_background_override_is_used_when_hovered() {
        let class = ItemClass {
            hover_background: Some(Color::WHITE),
            ..ItemClass::default()
        };
        let state = ItemState {
            hovered: true,
            ..ItemState::default()
        };

        let style = item_row_style(&Theme::Dark, &class, state);
        assert_eq!(style.background, Some(Color::WHITE.into()));
    }

    #[test]
    fn resting_rows_have_no_background_fill() {
        let style = item_row_style(
            &Theme::Dark,
            &ItemClass::default(),
            ItemState::default(),
        );
        assert_eq!(style.background, None);
    }

    #[test]
    fn icon_color_switches_to_contrast_when_current() {
        let theme = Theme::Dark;
        let class = ItemClass::default();

        let resting = item_icon_color(&theme, &class, ItemState::default());
        let current = item_icon_color(
            &theme,
            &class,
            ItemState {
                current: true,
                ..ItemState::default()
            },
        );

        assert_ne!(resting, current);
        assert_eq!(current, theme.extended_palette().background.base.text);
    }

    #[test]
    fn pressed_fill_wins_over_hover_fill() {
        let class = ItemClass {
            hover_background: Some(Color::WHITE),
            press_background: Some(Color::BLACK),
            ..ItemClass::default()
        };
        let style = item_row_style(
            &Theme::Dark,
            &class,
            ItemState {
                hovered: true,
                pressed: true,
                current: false,
            },
        );
        assert_eq!(style.background, Some(Color::BLACK.into()));
    }
}
