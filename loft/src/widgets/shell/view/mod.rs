use iced::widget::{
    Space, button, column, container, mouse_area, row, svg, text,
};
use iced::{Color, Element, Length, alignment};
use loft_ui_sidebar::{
    Sidebar, SidebarBody, SidebarDivider, SidebarFooter, SidebarHeader,
    SidebarHeading, SidebarItem, SidebarLabel, SidebarSection, SidebarSpacer,
};

use super::event::ShellIntent;
use super::model::{NavEntry, NavId, ShellAction, ShellViewModel};
use super::state::NavSection;
use crate::icons;

const SIDEBAR_WIDTH: f32 = 260.0;
const BRAND_SIZE: f32 = 18.0;
const PAGE_PADDING: f32 = 24.0;
const TOP_BAR_PADDING: f32 = 12.0;
const SCRIM_ALPHA: f32 = 0.5;

/// Props for the shell view aggregator.
pub(crate) struct ShellViewProps<'a> {
    pub(crate) vm: ShellViewModel<'a>,
}

/// Render the navigation shell: sidebar plus the active page.
pub(crate) fn view(props: ShellViewProps<'_>) -> Element<'_, ShellIntent> {
    let vm = props.vm;
    if vm.compact {
        compact_view(&vm)
    } else {
        row![sidebar_view(&vm), page_view(&vm)].into()
    }
}

/// Compact layout: top bar plus page, with the sidebar as a drawer overlay.
fn compact_view<'a>(vm: &ShellViewModel<'a>) -> Element<'a, ShellIntent> {
    let menu_button = button(text("Menu").size(14.0))
        .on_press(ShellIntent::DrawerToggled);

    let top_bar = container(
        row![menu_button, text(vm.route.title()).size(16.0)]
            .spacing(16.0)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding(TOP_BAR_PADDING);

    let base = column![top_bar, page_view(vm)]
        .width(Length::Fill)
        .height(Length::Fill);

    if !vm.drawer_open {
        return base.into();
    }

    let scrim = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(
                    Color {
                        a: SCRIM_ALPHA,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..Default::default()
            }),
    )
    .on_press(ShellIntent::DrawerDismissed);

    let drawer = row![sidebar_view(vm), scrim]
        .width(Length::Fill)
        .height(Length::Fill);

    iced::widget::stack!(base, drawer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn page_view<'a>(vm: &ShellViewModel<'a>) -> Element<'a, ShellIntent> {
    container(
        column![
            text(vm.route.title()).size(24.0),
            text(page_blurb(vm)).size(14.0),
        ]
        .spacing(8.0),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(PAGE_PADDING)
    .into()
}

fn page_blurb(vm: &ShellViewModel<'_>) -> &'static str {
    use super::model::Route;

    match vm.route {
        Route::Inbox => "Everything new lands here.",
        Route::Today => "Planned for today.",
        Route::Upcoming => "Scheduled for the days ahead.",
        Route::ProjectAtlas => "Notes and tasks for Atlas.",
        Route::ProjectOrbit => "Notes and tasks for Orbit.",
        Route::Settings => "Workspace preferences.",
    }
}

fn sidebar_view<'a>(vm: &ShellViewModel<'a>) -> Element<'a, ShellIntent> {
    let search_section = SidebarSection::new(vm.header_scope)
        .item(action_item(vm, ShellAction::Search, icons::SEARCH));

    let header = SidebarHeader::new()
        .push(text("Loft").size(BRAND_SIZE))
        .section(search_section);

    let mut body = SidebarBody::new();
    for section in vm.body_sections {
        body = body.section(nav_section(vm, section));
    }
    body = body
        .push(SidebarDivider::new().view())
        .push(SidebarSpacer::new().view());

    let footer = SidebarFooter::new().section(
        nav_section(vm, vm.footer_section).item(action_item(
            vm,
            ShellAction::Support,
            icons::SUPPORT,
        )),
    );

    Sidebar::new()
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .push(header.view())
        .push(body.view())
        .push(footer.view())
        .view()
}

fn nav_section<'a>(
    vm: &ShellViewModel<'a>,
    section: &'a NavSection,
) -> SidebarSection<'a, ShellIntent> {
    let mut out = SidebarSection::new(section.scope());

    if let Some(heading) = section.heading() {
        out = out.heading(SidebarHeading::new(heading).view());
    }

    out = out.indicator(section.motion());

    for entry in section.entries() {
        out = out.item(link_item(vm, *entry));
    }

    out
}

fn link_item<'a>(
    vm: &ShellViewModel<'_>,
    entry: NavEntry,
) -> SidebarItem<'a, ShellIntent> {
    let id = NavId::Route(entry.route);
    let mut item = SidebarItem::link(
        SidebarLabel::new(entry.route.title()).view(),
        ShellIntent::ItemActivated(entry.route),
    )
    .current(vm.route == entry.route)
    .hovered(vm.hovered == Some(id))
    .on_enter(ShellIntent::ItemEntered(id))
    .on_exit(ShellIntent::ItemExited(id));

    if let Some(icon) = entry.icon {
        item = item.icon(svg::Handle::from_memory(icon));
    }

    item
}

fn action_item<'a>(
    vm: &ShellViewModel<'_>,
    action: ShellAction,
    icon: &'static [u8],
) -> SidebarItem<'a, ShellIntent> {
    let id = NavId::Action(action);
    SidebarItem::action(SidebarLabel::new(action.title()).view())
        .icon(svg::Handle::from_memory(icon))
        .on_press(ShellIntent::ActionInvoked(action))
        .hovered(vm.hovered == Some(id))
        .on_enter(ShellIntent::ItemEntered(id))
        .on_exit(ShellIntent::ItemExited(id))
}
