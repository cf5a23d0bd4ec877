use iced::widget::text::Wrapping;
use iced::widget::{
    Column, Row, Space, column, container, mouse_area, scrollable, svg, text,
};
use iced::{Border, Element, Length, Padding, alignment, mouse};

use crate::model::{IndicatorMotion, ScopeId, SectionScope};
use crate::style::{self, ItemClass, ItemState, SidebarClass};

const SHELL_PADDING: f32 = 16.0;
const SECTION_ITEM_GAP: f32 = 2.0;
const SECTION_GAP_TIGHT: f32 = 10.0;
const SECTION_GAP_WIDE: f32 = 32.0;
const DIVIDER_MARGIN: f32 = 16.0;
const EDGE_WIDTH: f32 = 1.0;
const HEADING_SIZE: f32 = 12.0;
const HEADING_PADDING_X: f32 = 8.0;
const HEADING_GAP: f32 = 4.0;
const ITEM_HEIGHT: f32 = 36.0;
const ITEM_PADDING_X: f32 = 8.0;
const ITEM_CONTENT_GAP: f32 = 12.0;
const ITEM_FONT_SIZE: f32 = 14.0;
const ICON_SIZE: f32 = 20.0;
const INDICATOR_WIDTH: f32 = 2.0;
const INDICATOR_INSET_Y: f32 = 8.0;

/// Vertical distance between the tops of two adjacent item rows.
pub(crate) const ROW_PITCH: f32 = ITEM_HEIGHT + SECTION_ITEM_GAP;

/// Vertical sidebar shell: header, body, and footer stacked full-height.
pub struct Sidebar<'a, Message> {
    children: Vec<Element<'a, Message>>,
    width: Length,
    class: SidebarClass,
}

impl<'a, Message: 'a> Sidebar<'a, Message> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            width: Length::Fill,
            class: SidebarClass::default(),
        }
    }

    /// Append a child region (header, body, footer, or any element).
    pub fn push(mut self, child: impl Into<Element<'a, Message>>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Merge a style override on top of the base class.
    pub fn class(mut self, class: SidebarClass) -> Self {
        self.class = SidebarClass::merge(self.class, class);
        self
    }

    pub fn view(self) -> Element<'a, Message> {
        let class = self.class;
        container(
            column(self.children)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(self.width)
        .height(Length::Fill)
        .style(move |theme| style::shell_style(theme, &class))
        .into()
    }
}

impl<'a, Message: 'a> Default for Sidebar<'a, Message> {
    fn default() -> Self {
        Self::new()
    }
}

/// Padded top region closed off by a bottom edge line.
pub struct SidebarHeader<'a, Message> {
    slots: Vec<Slot<'a, Message>>,
    padding: f32,
    class: SidebarClass,
}

impl<'a, Message: Clone + 'a> SidebarHeader<'a, Message> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            padding: SHELL_PADDING,
            class: SidebarClass::default(),
        }
    }

    pub fn push(mut self, child: impl Into<Element<'a, Message>>) -> Self {
        self.slots.push(Slot::plain(child.into()));
        self
    }

    /// Append a section; adjacent sections receive the tight section gap.
    pub fn section(mut self, section: SidebarSection<'a, Message>) -> Self {
        self.slots.push(Slot::section(section.view()));
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn class(mut self, class: SidebarClass) -> Self {
        self.class = SidebarClass::merge(self.class, class);
        self
    }

    pub fn view(self) -> Element<'a, Message> {
        let class = self.class;
        let content = container(stack_slots(self.slots, SECTION_GAP_TIGHT))
            .width(Length::Fill)
            .padding(self.padding);
        column![content, edge_rule(class)].width(Length::Fill).into()
    }
}

impl<'a, Message: Clone + 'a> Default for SidebarHeader<'a, Message> {
    fn default() -> Self {
        Self::new()
    }
}

/// Scrolling middle region that takes the remaining sidebar height.
pub struct SidebarBody<'a, Message> {
    slots: Vec<Slot<'a, Message>>,
    padding: f32,
}

impl<'a, Message: Clone + 'a> SidebarBody<'a, Message> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            padding: SHELL_PADDING,
        }
    }

    pub fn push(mut self, child: impl Into<Element<'a, Message>>) -> Self {
        self.slots.push(Slot::plain(child.into()));
        self
    }

    /// Append a section; adjacent sections receive the wide section gap.
    pub fn section(mut self, section: SidebarSection<'a, Message>) -> Self {
        self.slots.push(Slot::section(section.view()));
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn view(self) -> Element<'a, Message> {
        let content = container(stack_slots(self.slots, SECTION_GAP_WIDE))
            .width(Length::Fill)
            .padding(self.padding);

        let scroll = scrollable::Scrollable::with_direction(
            content,
            scrollable::Direction::Vertical(
                scrollable::Scrollbar::new()
                    .width(0)
                    .scroller_width(0)
                    .margin(0),
            ),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        container(scroll)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<'a, Message: Clone + 'a> Default for SidebarBody<'a, Message> {
    fn default() -> Self {
        Self::new()
    }
}

/// Padded bottom region opened by a top edge line.
pub struct SidebarFooter<'a, Message> {
    slots: Vec<Slot<'a, Message>>,
    padding: f32,
    class: SidebarClass,
}

impl<'a, Message: Clone + 'a> SidebarFooter<'a, Message> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            padding: SHELL_PADDING,
            class: SidebarClass::default(),
        }
    }

    pub fn push(mut self, child: impl Into<Element<'a, Message>>) -> Self {
        self.slots.push(Slot::plain(child.into()));
        self
    }

    /// Append a section; adjacent sections receive the tight section gap.
    pub fn section(mut self, section: SidebarSection<'a, Message>) -> Self {
        self.slots.push(Slot::section(section.view()));
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn class(mut self, class: SidebarClass) -> Self {
        self.class = SidebarClass::merge(self.class, class);
        self
    }

    pub fn view(self) -> Element<'a, Message> {
        let class = self.class;
        let content = container(stack_slots(self.slots, SECTION_GAP_TIGHT))
            .width(Length::Fill)
            .padding(self.padding);
        column![edge_rule(class), content].width(Length::Fill).into()
    }
}

impl<'a, Message: Clone + 'a> Default for SidebarFooter<'a, Message> {
    fn default() -> Self {
        Self::new()
    }
}

/// Group of item rows sharing one indicator scope.
///
/// At most one item per section should be marked current at a time; the
/// section resolves its indicator against the first current item and leaves
/// anything beyond that to the caller.
pub struct SidebarSection<'a, Message> {
    scope: ScopeId,
    heading: Option<Element<'a, Message>>,
    items: Vec<SidebarItem<'a, Message>>,
    indicator: Option<&'a IndicatorMotion>,
}

impl<'a, Message: Clone + 'a> SidebarSection<'a, Message> {
    pub fn new(scope: &SectionScope) -> Self {
        Self {
            scope: scope.id(),
            heading: None,
            items: Vec::new(),
            indicator: None,
        }
    }

    pub fn heading(mut self, heading: impl Into<Element<'a, Message>>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn item(mut self, item: SidebarItem<'a, Message>) -> Self {
        self.items.push(item);
        self
    }

    /// Attach this scope's indicator motion for current-item rendering.
    pub fn indicator(mut self, motion: &'a IndicatorMotion) -> Self {
        self.indicator = Some(motion);
        self
    }

    /// Identifier of the scope this section was created with.
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Row slot of the first current item, if any.
    pub fn current_slot(&self) -> Option<usize> {
        current_slot(&self.items)
    }

    pub fn view(self) -> Element<'a, Message> {
        let slot = current_slot(&self.items);
        let indicator_class = slot
            .map(|index| self.items[index].class)
            .unwrap_or_default();

        let rows = column(
            self.items
                .into_iter()
                .map(SidebarItem::view)
                .collect::<Vec<_>>(),
        )
        .spacing(SECTION_ITEM_GAP)
        .width(Length::Fill);

        let rows: Element<'a, Message> = match (self.indicator, slot) {
            (Some(motion), Some(_)) => {
                let offset =
                    motion.offset() * ROW_PITCH + INDICATOR_INSET_Y;
                let bar = container(Space::new())
                    .width(Length::Fixed(INDICATOR_WIDTH))
                    .height(Length::Fixed(
                        ITEM_HEIGHT - 2.0 * INDICATOR_INSET_Y,
                    ))
                    .style(move |theme| container::Style {
                        background: Some(
                            style::indicator_color(theme, &indicator_class)
                                .into(),
                        ),
                        border: Border {
                            radius: (INDICATOR_WIDTH / 2.0).into(),
                            ..Border::default()
                        },
                        ..Default::default()
                    });
                let overlay = column![
                    Space::new().height(Length::Fixed(offset)),
                    bar
                ];

                iced::widget::stack!(rows, overlay)
                    .width(Length::Fill)
                    .into()
            },
            _ => rows.into(),
        };

        match self.heading {
            Some(heading) => {
                column![heading, rows].width(Length::Fill).into()
            },
            None => rows,
        }
    }
}

/// Horizontal separator line with vertical margin.
pub struct SidebarDivider {
    class: SidebarClass,
}

impl SidebarDivider {
    pub fn new() -> Self {
        Self {
            class: SidebarClass::default(),
        }
    }

    pub fn class(mut self, class: SidebarClass) -> Self {
        self.class = SidebarClass::merge(self.class, class);
        self
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let class = self.class;
        container(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fixed(EDGE_WIDTH))
                .style(move |theme| container::Style {
                    background: Some(
                        style::edge_color(theme, &class).into(),
                    ),
                    ..Default::default()
                }),
        )
        .width(Length::Fill)
        .padding(Padding {
            top: DIVIDER_MARGIN,
            right: 0.0,
            bottom: DIVIDER_MARGIN,
            left: 0.0,
        })
        .into()
    }
}

impl Default for SidebarDivider {
    fn default() -> Self {
        Self::new()
    }
}

/// Decorative flexible filler; renders nothing and never takes interaction.
pub struct SidebarSpacer {
    height: Length,
}

impl SidebarSpacer {
    pub fn new() -> Self {
        Self {
            height: Length::Fill,
        }
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        Space::new().width(Length::Fill).height(self.height).into()
    }
}

impl Default for SidebarSpacer {
    fn default() -> Self {
        Self::new()
    }
}

/// Small accent-colored section heading.
pub struct SidebarHeading {
    label: String,
    class: SidebarClass,
}

impl SidebarHeading {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            class: SidebarClass::default(),
        }
    }

    pub fn class(mut self, class: SidebarClass) -> Self {
        self.class = SidebarClass::merge(self.class, class);
        self
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let class = self.class;
        container(text(self.label).size(HEADING_SIZE))
            .width(Length::Fill)
            .padding(Padding {
                top: 0.0,
                right: HEADING_PADDING_X,
                bottom: HEADING_GAP,
                left: HEADING_PADDING_X,
            })
            .style(move |theme| container::Style {
                text_color: Some(style::accent_color(theme, &class)),
                ..Default::default()
            })
            .into()
    }
}

/// Single-line row label that truncates instead of wrapping.
pub struct SidebarLabel {
    label: String,
}

impl SidebarLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        container(
            text(self.label)
                .size(ITEM_FONT_SIZE)
                .wrapping(Wrapping::None),
        )
        .width(Length::Fill)
        .clip(true)
        .into()
    }
}

/// One selectable sidebar row: either a navigable link or an action trigger.
pub struct SidebarItem<'a, Message> {
    content: Element<'a, Message>,
    kind: ItemKind,
    icon: Option<svg::Handle>,
    current: bool,
    hovered: bool,
    pressed: bool,
    class: ItemClass,
    on_press: Option<Message>,
    on_release: Option<Message>,
    on_enter: Option<Message>,
    on_exit: Option<Message>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemKind {
    Link,
    Action,
}

impl<'a, Message: Clone + 'a> SidebarItem<'a, Message> {
    /// A navigable row. Activation emits `on_press`; shells following the
    /// closeable-panel convention also dismiss any enclosing drawer when
    /// routing this message.
    pub fn link(
        content: impl Into<Element<'a, Message>>,
        on_press: Message,
    ) -> Self {
        Self::with_kind(content.into(), ItemKind::Link, Some(on_press))
    }

    /// An action row: clickable, default cursor, no dismissal signaling.
    pub fn action(content: impl Into<Element<'a, Message>>) -> Self {
        Self::with_kind(content.into(), ItemKind::Action, None)
    }

    fn with_kind(
        content: Element<'a, Message>,
        kind: ItemKind,
        on_press: Option<Message>,
    ) -> Self {
        Self {
            content,
            kind,
            icon: None,
            current: false,
            hovered: false,
            pressed: false,
            class: ItemClass::default(),
            on_press,
            on_release: None,
            on_enter: None,
            on_exit: None,
        }
    }

    /// Leading icon, tinted by the item's interaction state.
    pub fn icon(mut self, handle: svg::Handle) -> Self {
        self.icon = Some(handle);
        self
    }

    /// Mark this row as the current navigation target.
    pub fn current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }

    /// Feed the hovered flag from application state.
    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// Feed the pressed flag from application state.
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    /// Emit a message when the row is pressed.
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Emit a message when the press is released.
    pub fn on_release(mut self, message: Message) -> Self {
        self.on_release = Some(message);
        self
    }

    /// Emit a message when the pointer enters the row.
    pub fn on_enter(mut self, message: Message) -> Self {
        self.on_enter = Some(message);
        self
    }

    /// Emit a message when the pointer leaves the row.
    pub fn on_exit(mut self, message: Message) -> Self {
        self.on_exit = Some(message);
        self
    }

    /// Merge a style override on top of the base rule set.
    pub fn class(mut self, class: ItemClass) -> Self {
        self.class = ItemClass::merge(self.class, class);
        self
    }

    /// Whether this row carries the current marker.
    pub fn is_current(&self) -> bool {
        self.current
    }

    pub fn view(self) -> Element<'a, Message> {
        let class = self.class;
        let state = ItemState {
            hovered: self.hovered,
            pressed: self.pressed,
            current: self.current,
        };

        let mut content_row = Row::new()
            .spacing(ITEM_CONTENT_GAP)
            .align_y(alignment::Vertical::Center)
            .width(Length::Fill);

        if let Some(handle) = self.icon {
            let icon = svg::Svg::new(handle)
                .width(Length::Fixed(ICON_SIZE))
                .height(Length::Fixed(ICON_SIZE))
                .style(move |theme, _status| svg::Style {
                    color: Some(style::item_icon_color(
                        theme, &class, state,
                    )),
                });
            content_row = content_row.push(icon);
        }

        content_row = content_row.push(self.content);

        let row = container(touch_target(content_row.into()))
            .width(Length::Fill)
            .height(Length::Fixed(ITEM_HEIGHT))
            .style(move |theme| style::item_row_style(theme, &class, state));

        let mut area = mouse_area(row);

        if let Some(message) = self.on_press {
            area = area.on_press(message);
        }
        if let Some(message) = self.on_release {
            area = area.on_release(message);
        }
        if let Some(message) = self.on_enter {
            area = area.on_enter(message);
        }
        if let Some(message) = self.on_exit {
            area = area.on_exit(message);
        }

        area.interaction(interaction_for(self.kind)).into()
    }
}

/// Links advertise navigability with a pointer; actions keep the default
/// cursor.
fn interaction_for(kind: ItemKind) -> mouse::Interaction {
    match kind {
        ItemKind::Link => mouse::Interaction::Pointer,
        ItemKind::Action => mouse::Interaction::Idle,
    }
}

/// Expand the interactive surface to the full row while leaving the visible
/// content where it is.
fn touch_target<'a, Message: 'a>(
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding(Padding {
            top: 0.0,
            right: ITEM_PADDING_X,
            bottom: 0.0,
            left: ITEM_PADDING_X,
        })
        .into()
}

fn current_slot<Message>(items: &[SidebarItem<'_, Message>]) -> Option<usize> {
    items.iter().position(|item| item.current)
}

struct Slot<'a, Message> {
    element: Element<'a, Message>,
    is_section: bool,
}

impl<'a, Message> Slot<'a, Message> {
    fn plain(element: Element<'a, Message>) -> Self {
        Self {
            element,
            is_section: false,
        }
    }

    fn section(element: Element<'a, Message>) -> Self {
        Self {
            element,
            is_section: true,
        }
    }
}

/// Indices that must receive a section gap before them: a slot is pushed
/// down only when it and its predecessor are both sections.
fn section_gap_positions(flags: &[bool]) -> Vec<usize> {
    flags
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] && pair[1])
        .map(|(index, _)| index + 1)
        .collect()
}

fn stack_slots<'a, Message: 'a>(
    slots: Vec<Slot<'a, Message>>,
    section_gap: f32,
) -> Column<'a, Message> {
    let flags: Vec<bool> = slots.iter().map(|slot| slot.is_section).collect();
    let gaps = section_gap_positions(&flags);

    let mut column = Column::new().width(Length::Fill);
    for (index, slot) in slots.into_iter().enumerate() {
        if gaps.contains(&index) {
            column = column
                .push(Space::new().height(Length::Fixed(section_gap)));
        }
        column = column.push(slot.element);
    }
    column
}

fn edge_rule<'a, Message: 'a>(class: SidebarClass) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(EDGE_WIDTH))
        .style(move |theme| container::Style {
            background: Some(style::edge_color(theme, &class).into()),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Color;

    fn label(text_value: &str) -> Element<'static, ()> {
        text(text_value.to_owned()).into()
    }

    #[test]
    fn section_gap_positions_only_separate_adjacent_sections() {
        assert!(section_gap_positions(&[]).is_empty());
        assert!(section_gap_positions(&[true]).is_empty());
        assert!(section_gap_positions(&[true, false, true]).is_empty());
        assert_eq!(section_gap_positions(&[true, true]), vec![1]);
        assert_eq!(
            section_gap_positions(&[false, true, true, true]),
            vec![2, 3]
        );
    }

    #[test]
    fn current_slot_is_none_without_a_current_item() {
        let items = vec![
            SidebarItem::link(label("Inbox"), ()),
            SidebarItem::action(label("Search")),
        ];
        assert_eq!(current_slot(&items), None);
    }

    #[test]
    fn current_slot_finds_the_marked_row() {
        let items = vec![
            SidebarItem::link(label("Inbox"), ()),
            SidebarItem::link(label("Today"), ()).current(true),
        ];
        assert_eq!(current_slot(&items), Some(1));
    }

    #[test]
    fn first_current_row_wins_when_the_caller_marks_several() {
        let items = vec![
            SidebarItem::link(label("Inbox"), ()).current(true),
            SidebarItem::link(label("Today"), ()).current(true),
        ];
        assert_eq!(current_slot(&items), Some(0));
    }

    #[test]
    fn link_constructor_yields_the_link_kind_with_a_press_message() {
        let item = SidebarItem::link(label("Inbox"), ());
        assert_eq!(item.kind, ItemKind::Link);
        assert!(item.on_press.is_some());
        assert!(!item.is_current());
    }

    #[test]
    fn action_constructor_yields_the_action_kind_without_a_press_message() {
        let item: SidebarItem<'_, ()> = SidebarItem::action(label("Search"));
        assert_eq!(item.kind, ItemKind::Action);
        assert!(item.on_press.is_none());
    }

    #[test]
    fn links_get_a_pointer_cursor_and_actions_keep_the_default() {
        assert_eq!(
            interaction_for(ItemKind::Link),
            mouse::Interaction::Pointer
        );
        assert_eq!(
            interaction_for(ItemKind::Action),
            mouse::Interaction::Idle
        );
    }

    #[test]
    fn item_class_overrides_merge_instead_of_replacing() {
        let item = SidebarItem::link(label("Inbox"), ())
            .class(ItemClass {
                text: Some(Color::WHITE),
                ..ItemClass::default()
            })
            .class(ItemClass {
                indicator: Some(Color::BLACK),
                ..ItemClass::default()
            });

        assert_eq!(item.class.text, Some(Color::WHITE));
        assert_eq!(item.class.indicator, Some(Color::BLACK));
    }

    #[test]
    fn section_reports_scope_and_current_slot() {
        let scope = SectionScope::new();
        let section = SidebarSection::<'_, ()>::new(&scope)
            .item(SidebarItem::link(label("Inbox"), ()))
            .item(SidebarItem::link(label("Today"), ()).current(true));

        assert_eq!(section.scope(), scope.id());
        assert_eq!(section.current_slot(), Some(1));
    }

    #[test]
    fn spacer_defaults_to_filling_remaining_height() {
        let spacer = SidebarSpacer::new();
        assert_eq!(spacer.height, Length::Fill);
    }

    #[test]
    fn sidebar_width_setter_passes_through() {
        let sidebar: Sidebar<'_, ()> =
            Sidebar::new().width(Length::Fixed(260.0));
        assert_eq!(sidebar.width, Length::Fixed(260.0));
    }
}
