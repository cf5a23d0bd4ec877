use std::time::Duration;

use iced::widget::{container, row, text};
use iced::{Element, Length, Subscription};
use loft_ui_sidebar::{
    INDICATOR_TICK_MS, IndicatorMotion, SectionScope, Sidebar, SidebarBody,
    SidebarDivider, SidebarFooter, SidebarHeader, SidebarHeading, SidebarItem,
    SidebarLabel, SidebarSection, SidebarSpacer,
};

#[derive(Debug, Clone)]
enum Message {
    Navigate(Page),
    SearchPressed,
    Hover(Option<Page>),
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Inbox,
    Today,
    Upcoming,
    Settings,
}

impl Page {
    const NAV: [Page; 3] = [Page::Inbox, Page::Today, Page::Upcoming];

    fn title(self) -> &'static str {
        match self {
            Page::Inbox => "Inbox",
            Page::Today => "Today",
            Page::Upcoming => "Upcoming",
            Page::Settings => "Settings",
        }
    }

    fn nav_slot(self) -> Option<usize> {
        Self::NAV.iter().position(|page| *page == self)
    }
}

struct AppState {
    page: Page,
    hovered: Option<Page>,
    nav_scope: SectionScope,
    nav_motion: IndicatorMotion,
    meta_scope: SectionScope,
    meta_motion: IndicatorMotion,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: Page::Inbox,
            hovered: None,
            nav_scope: SectionScope::new(),
            nav_motion: IndicatorMotion::settled_at(0.0),
            meta_scope: SectionScope::new(),
            meta_motion: IndicatorMotion::settled_at(0.0),
        }
    }
}

fn update(state: &mut AppState, message: Message) {
    match message {
        Message::Navigate(page) => {
            state.page = page;
            if let Some(slot) = page.nav_slot() {
                state.nav_motion.go_to(slot as f32);
            }
            if page == Page::Settings {
                state.meta_motion.go_to(0.0);
            }
        },
        Message::SearchPressed => {
            println!("search requested");
        },
        Message::Hover(page) => {
            state.hovered = page;
        },
        Message::Tick => {
            state.nav_motion.advance();
            state.meta_motion.advance();
        },
    }
}

fn subscription(state: &AppState) -> Subscription<Message> {
    if state.nav_motion.is_settled() && state.meta_motion.is_settled() {
        Subscription::none()
    } else {
        iced::time::every(Duration::from_millis(INDICATOR_TICK_MS))
            .map(|_| Message::Tick)
    }
}

fn view(state: &AppState) -> Element<'_, Message> {
    let mut nav_section = SidebarSection::new(&state.nav_scope)
        .heading(SidebarHeading::new("Workspace").view())
        .indicator(&state.nav_motion);

    for page in Page::NAV {
        nav_section = nav_section.item(nav_link(state, page));
    }

    let meta_section = SidebarSection::new(&state.meta_scope)
        .indicator(&state.meta_motion)
        .item(nav_link(state, Page::Settings))
        .item(
            SidebarItem::action(SidebarLabel::new("Search").view())
                .on_press(Message::SearchPressed),
        );

    let sidebar = Sidebar::new()
        .width(Length::Fixed(260.0))
        .push(
            SidebarHeader::new()
                .push(SidebarLabel::new("Acme").view())
                .view(),
        )
        .push(
            SidebarBody::new()
                .section(nav_section)
                .push(SidebarDivider::new().view())
                .push(SidebarSpacer::new().view())
                .view(),
        )
        .push(SidebarFooter::new().section(meta_section).view())
        .view();

    let content = container(text(state.page.title()).size(24))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24);

    row![sidebar, content].into()
}

fn nav_link(state: &AppState, page: Page) -> SidebarItem<'static, Message> {
    SidebarItem::link(
        SidebarLabel::new(page.title()).view(),
        Message::Navigate(page),
    )
    .current(state.page == page)
    .hovered(state.hovered == Some(page))
    .on_enter(Message::Hover(Some(page)))
    .on_exit(Message::Hover(None))
}

fn main() -> iced::Result {
    iced::application(AppState::default, update, view)
        .subscription(subscription)
        .run()
}
