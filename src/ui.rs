//! Terminal views: catalog list, search bar, detail card and favorites.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_dispatch::{
    Component, DataResource, EventContext, EventKind, EventRoutingState, HandlerResponse,
    RenderContext,
};
use tui_dispatch_components::style::BorderStyle;
use tui_dispatch_components::{
    BaseStyle, Padding, SelectList, SelectListBehavior, SelectListProps, SelectListStyle,
    SelectionStyle, StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection,
    StatusBarStyle,
};

use crate::action::Action;
use crate::state::{AppState, CatalogDetail, CatalogEntry, ListMode, Screen};

const BG_BASE: Color = Color::Rgb(12, 18, 28);
const BG_PANEL: Color = Color::Rgb(20, 32, 46);
const BG_HIGHLIGHT: Color = Color::Rgb(28, 92, 110);
const TEXT_MAIN: Color = Color::Rgb(232, 242, 244);
const TEXT_DIM: Color = Color::Rgb(176, 195, 207);
const ACCENT_TEAL: Color = Color::Rgb(72, 204, 184);
const ACCENT_GOLD: Color = Color::Rgb(228, 176, 88);
const ACCENT_RED: Color = Color::Rgb(220, 96, 88);

/// Rows skipped by PageUp/PageDown.
const PAGE_JUMP: i16 = 10;
const STAT_BAR_MAX: u32 = 255;
const STAT_BAR_WIDTH: u32 = 24;

/// Chip color for a creature type; unknown types fall back to the normal grey.
pub fn type_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "fire" => Color::Rgb(240, 128, 48),
        "water" => Color::Rgb(104, 144, 240),
        "grass" => Color::Rgb(120, 200, 80),
        "electric" => Color::Rgb(248, 208, 48),
        "psychic" => Color::Rgb(248, 88, 136),
        "ice" => Color::Rgb(152, 216, 216),
        "dragon" => Color::Rgb(112, 56, 248),
        "dark" => Color::Rgb(112, 88, 72),
        "fairy" => Color::Rgb(238, 153, 172),
        "fighting" => Color::Rgb(192, 48, 40),
        "poison" => Color::Rgb(160, 64, 160),
        "ground" => Color::Rgb(224, 192, 104),
        "flying" => Color::Rgb(168, 144, 240),
        "bug" => Color::Rgb(168, 184, 32),
        "rock" => Color::Rgb(184, 160, 56),
        "ghost" => Color::Rgb(112, 88, 152),
        "steel" => Color::Rgb(184, 184, 208),
        _ => Color::Rgb(168, 168, 120),
    }
}

fn type_chips(types: &[String]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(types.len() * 2);
    for (idx, name) in types.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {name} "),
            Style::default()
                .fg(BG_BASE)
                .bg(type_color(name))
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DexComponentId {
    List,
    Search,
    Detail,
    Favorites,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DexContext {
    List,
    Search,
    Detail,
    Favorites,
}

impl EventRoutingState<DexComponentId, DexContext> for AppState {
    fn focused(&self) -> Option<DexComponentId> {
        match self.screen {
            Screen::Home if self.search.editing => Some(DexComponentId::Search),
            Screen::Home => Some(DexComponentId::List),
            Screen::Detail => Some(DexComponentId::Detail),
            Screen::Favorites => Some(DexComponentId::Favorites),
        }
    }

    fn modal(&self) -> Option<DexComponentId> {
        if self.screen == Screen::Home && self.search.editing {
            Some(DexComponentId::Search)
        } else {
            None
        }
    }

    fn binding_context(&self, id: DexComponentId) -> DexContext {
        match id {
            DexComponentId::List => DexContext::List,
            DexComponentId::Search => DexContext::Search,
            DexComponentId::Detail => DexContext::Detail,
            DexComponentId::Favorites => DexContext::Favorites,
        }
    }

    fn default_context(&self) -> DexContext {
        DexContext::List
    }
}

/// Screen areas produced by one draw, used for mouse routing.
#[derive(Clone, Copy, Debug, Default)]
pub struct DrawnAreas {
    pub header: Rect,
    pub body: Rect,
}

pub struct PokedexUi {
    catalog_list: SelectList,
    favorites_list: SelectList,
    status_bar: StatusBar,
}

impl Default for PokedexUi {
    fn default() -> Self {
        Self::new()
    }
}

impl PokedexUi {
    pub fn new() -> Self {
        Self {
            catalog_list: SelectList::new(),
            favorites_list: SelectList::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        _render_ctx: RenderContext,
        event_ctx: &mut EventContext<DexComponentId>,
    ) {
        let areas = self.draw(frame, area, state);
        match state.screen {
            Screen::Home => {
                event_ctx.set_component_area(DexComponentId::List, areas.body);
                if state.search.editing {
                    event_ctx.set_component_area(DexComponentId::Search, areas.header);
                } else {
                    event_ctx.component_areas.remove(&DexComponentId::Search);
                }
            }
            Screen::Detail => event_ctx.set_component_area(DexComponentId::Detail, areas.body),
            Screen::Favorites => {
                event_ctx.set_component_area(DexComponentId::Favorites, areas.body)
            }
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, state: &AppState) -> DrawnAreas {
        let base = Block::default().style(Style::default().bg(BG_BASE));
        frame.render_widget(base, area);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        render_header(frame, layout[0], state);
        match state.screen {
            Screen::Home => render_catalog(frame, layout[1], state, &mut self.catalog_list),
            Screen::Detail => render_detail(frame, layout[1], state),
            Screen::Favorites => {
                render_favorites(frame, layout[1], state, &mut self.favorites_list)
            }
        }
        render_footer(frame, layout[2], state, &mut self.status_bar);

        DrawnAreas {
            header: layout[0],
            body: layout[1],
        }
    }

    pub fn handle_list_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        handle_list_event(event, state, &mut self.catalog_list)
    }

    pub fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        handle_search_event(event, state)
    }

    pub fn handle_detail_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        handle_detail_event(event, state)
    }

    pub fn handle_favorites_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        handle_favorites_event(event, state, &mut self.favorites_list)
    }
}

/// Keys that work everywhere except while typing a query.
pub fn handle_global_event(event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
    match event {
        EventKind::Resize(width, height) => {
            HandlerResponse::action(Action::UiTerminalResize(*width, *height)).with_render()
        }
        EventKind::Key(key) if !state.search.editing => match key.code {
            KeyCode::Char('q') => HandlerResponse::action(Action::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                HandlerResponse::action(Action::Quit)
            }
            _ => HandlerResponse::ignored(),
        },
        _ => HandlerResponse::ignored(),
    }
}

pub fn handle_list_event(
    event: &EventKind,
    state: &AppState,
    list: &mut SelectList,
) -> HandlerResponse<Action> {
    let actions = match event {
        EventKind::Key(key) => match key.code {
            KeyCode::Char('/') => vec![Action::SearchFocus],
            KeyCode::Enter => vec![Action::DetailOpen],
            KeyCode::Char('f') => vec![Action::FavoriteToggle],
            KeyCode::Char('v') => vec![Action::ScreenFavorites],
            KeyCode::Char('m') if state.mode == ListMode::Browsing => vec![Action::LoadMore],
            KeyCode::Char('m') => vec![Action::SearchLoadMore],
            KeyCode::Esc | KeyCode::Char('c') if state.is_searching() => {
                vec![Action::SearchClear]
            }
            KeyCode::PageDown => vec![Action::ListMove(PAGE_JUMP)],
            KeyCode::PageUp => vec![Action::ListMove(-PAGE_JUMP)],
            _ => {
                let items = catalog_items(state);
                let props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: state.selected_index.min(items.len().saturating_sub(1)),
                    is_focused: true,
                    style: list_style(),
                    behavior: SelectListBehavior {
                        show_scrollbar: true,
                        wrap_navigation: false,
                    },
                    on_select: Action::ListSelect,
                    render_item: &|item| item.clone(),
                };
                list.handle_event(event, props).into_iter().collect()
            }
        },
        EventKind::Scroll { delta, .. } => vec![Action::ListMove((*delta * 3) as i16)],
        _ => vec![],
    };
    handler_response(actions)
}

/// Search input is modal: every key is consumed.
pub fn handle_search_event(event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
    let actions = match event {
        EventKind::Key(key) => match key.code {
            KeyCode::Esc => vec![Action::SearchBlur],
            KeyCode::Enter => vec![Action::SearchSubmit],
            KeyCode::Backspace => {
                let mut query = state.search.query.clone();
                if query.pop().is_some() {
                    vec![Action::SearchQueryChange(query)]
                } else {
                    vec![]
                }
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut query = state.search.query.clone();
                query.push(ch);
                vec![Action::SearchQueryChange(query)]
            }
            _ => vec![],
        },
        _ => vec![],
    };
    HandlerResponse {
        actions,
        consumed: true,
        needs_render: false,
    }
}

pub fn handle_detail_event(event: &EventKind, _state: &AppState) -> HandlerResponse<Action> {
    let actions = match event {
        EventKind::Key(key) => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => vec![Action::DetailClose],
            KeyCode::Char('f') => vec![Action::FavoriteToggle],
            KeyCode::Char('v') => vec![Action::ScreenFavorites],
            _ => vec![],
        },
        _ => vec![],
    };
    handler_response(actions)
}

pub fn handle_favorites_event(
    event: &EventKind,
    state: &AppState,
    list: &mut SelectList,
) -> HandlerResponse<Action> {
    let actions = match event {
        EventKind::Key(key) => match key.code {
            KeyCode::Esc | KeyCode::Char('h') => vec![Action::ScreenHome],
            KeyCode::Enter => vec![Action::DetailOpen],
            KeyCode::Char('x') | KeyCode::Delete => vec![Action::FavoriteRemove],
            _ => {
                let items = favorite_items(state);
                let props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: state.favorite_selected.min(items.len().saturating_sub(1)),
                    is_focused: true,
                    style: list_style(),
                    behavior: SelectListBehavior {
                        show_scrollbar: true,
                        wrap_navigation: true,
                    },
                    on_select: Action::FavoriteSelect,
                    render_item: &|item| item.clone(),
                };
                list.handle_event(event, props).into_iter().collect()
            }
        },
        _ => vec![],
    };
    handler_response(actions)
}

fn handler_response(actions: Vec<Action>) -> HandlerResponse<Action> {
    if actions.is_empty() {
        HandlerResponse::ignored()
    } else {
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let title_style = Style::default()
        .fg(ACCENT_TEAL)
        .add_modifier(Modifier::BOLD);
    let search = if state.search.editing {
        format!("/{}_", state.search.query)
    } else if state.search.query.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", state.search.query)
    };
    let summary = match (state.screen, state.mode) {
        (Screen::Favorites, _) => format!("FAVORITES ({})", state.favorites.len()),
        (_, ListMode::Searching) => format!(
            "RESULTS {}",
            state.search.matches.as_ref().map_or(0, Vec::len)
        ),
        (_, ListMode::Browsing) => format!("LOADED {}", state.browse.items.len()),
    };
    let mut spans = vec![
        Span::styled(summary, title_style),
        Span::raw("  |  Search: "),
        Span::styled(search, Style::default().fg(ACCENT_GOLD)),
    ];
    if state.search.in_flight {
        spans.push(Span::styled(
            format!("  searching{}", spinner_dots(state.tick)),
            Style::default().fg(TEXT_DIM),
        ));
    }

    let border = if state.search.editing {
        ACCENT_TEAL
    } else {
        TEXT_DIM
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(Style::default().fg(border))
        .title("POKEDEX");
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_catalog(frame: &mut Frame, area: Rect, state: &AppState, list: &mut SelectList) {
    let title = if state.is_searching() { "SEARCH" } else { "DEX" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(Style::default().fg(ACCENT_TEAL));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.browse.items.is_empty() {
        let text = if state.browse.is_initial_loading {
            format!("Loading catalog{}", spinner_dots(state.tick))
        } else if state.is_searching() {
            "No results. Press Esc to go back.".to_string()
        } else {
            "Nothing to show yet.".to_string()
        };
        let placeholder = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(TEXT_DIM));
        frame.render_widget(placeholder, inner);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let items = catalog_items(state);
    let props = SelectListProps {
        items: &items,
        count: items.len(),
        selected: state.selected_index.min(items.len().saturating_sub(1)),
        is_focused: !state.search.editing,
        style: list_style(),
        behavior: SelectListBehavior {
            show_scrollbar: true,
            wrap_navigation: false,
        },
        on_select: Action::ListSelect,
        render_item: &|item| item.clone(),
    };
    list.render(frame, layout[0], props);

    let footer = Paragraph::new(list_footer(state))
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_DIM));
    frame.render_widget(footer, layout[1]);
}

/// Status row under the list: loading-more spinner or end-of-list marker.
pub fn list_footer(state: &AppState) -> String {
    if state.browse.is_loading_more {
        return format!("Loading more{}", spinner_dots(state.tick));
    }
    match state.mode {
        ListMode::Browsing if !state.browse.has_more => "End of catalog".to_string(),
        ListMode::Browsing => String::new(),
        ListMode::Searching => {
            let total = state.search.matches.as_ref().map_or(0, Vec::len);
            format!("{} of {} results", state.browse.items.len(), total)
        }
    }
}

fn render_detail(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = state
        .detail_entry
        .as_ref()
        .map(|entry| format!("{} {}", dex_number(entry.id), entry.name.to_uppercase()))
        .unwrap_or_else(|| "DETAIL".to_string());
    let favorite = state
        .detail_entry
        .as_ref()
        .is_some_and(|entry| state.is_favorite(entry));
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(Style::default().fg(if favorite { ACCENT_RED } else { ACCENT_TEAL }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = match &state.detail {
        DataResource::Loaded(detail) => detail_text(detail, favorite),
        DataResource::Failed(error) => Text::from(vec![
            Line::from(Span::styled(error.clone(), Style::default().fg(ACCENT_RED))),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to go back",
                Style::default().fg(TEXT_DIM),
            )),
        ]),
        DataResource::Loading | DataResource::Empty => Text::from(Line::from(Span::styled(
            format!("Loading{}", spinner_dots(state.tick)),
            Style::default().fg(TEXT_DIM),
        ))),
    };
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

pub fn detail_text(detail: &CatalogDetail, favorite: bool) -> Text<'static> {
    let label = Style::default().fg(ACCENT_GOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}  {}", dex_number(detail.id), detail.name.to_uppercase()),
                Style::default()
                    .fg(ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                if favorite { "  [FAVORITE]" } else { "" },
                Style::default().fg(ACCENT_RED),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Height   ", label),
            Span::raw(format_tenths(detail.height, "m")),
        ]),
        Line::from(vec![
            Span::styled("Weight   ", label),
            Span::raw(format_tenths(detail.weight, "kg")),
        ]),
        Line::from(
            std::iter::once(Span::styled("Types    ", label))
                .chain(type_chips(&detail.types))
                .collect::<Vec<_>>(),
        ),
        Line::from(vec![
            Span::styled("Abilities ", label),
            Span::raw(
                detail
                    .abilities
                    .iter()
                    .map(|name| ability_label(name))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        ]),
    ];
    if !detail.stats.is_empty() {
        lines.push(Line::from(""));
        for stat in &detail.stats {
            let filled = (stat.value.min(STAT_BAR_MAX) * STAT_BAR_WIDTH / STAT_BAR_MAX) as usize;
            lines.push(Line::from(vec![
                Span::styled(format!("{:<16}", stat.name), Style::default().fg(TEXT_DIM)),
                Span::raw(format!("{:>3} ", stat.value)),
                Span::styled("#".repeat(filled), Style::default().fg(ACCENT_TEAL)),
            ]));
        }
    }
    Text::from(lines)
}

fn render_favorites(frame: &mut Frame, area: Rect, state: &AppState, list: &mut SelectList) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("FAVORITES ({})", state.favorites.len()))
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(Style::default().fg(ACCENT_RED));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.favorites.is_empty() {
        let text = if state.favorites_loaded {
            "No favorites yet. Press f on a creature to add it."
        } else {
            "Loading favorites..."
        };
        let placeholder = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(TEXT_DIM));
        frame.render_widget(placeholder, inner);
        return;
    }

    let items = favorite_items(state);
    let props = SelectListProps {
        items: &items,
        count: items.len(),
        selected: state.favorite_selected.min(items.len().saturating_sub(1)),
        is_focused: true,
        style: list_style(),
        behavior: SelectListBehavior {
            show_scrollbar: true,
            wrap_navigation: true,
        },
        on_select: Action::FavoriteSelect,
        render_item: &|item| item.clone(),
    };
    list.render(frame, inner, props);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, status_bar: &mut StatusBar) {
    let status = state.message.clone().unwrap_or_default();
    let hints = status_hints(state);
    let status_span = Span::styled(status.as_str(), Style::default().fg(ACCENT_GOLD));
    let status_items = [StatusBarItem::span(status_span)];

    let style = StatusBarStyle {
        base: BaseStyle {
            border: Some(BorderStyle {
                borders: Borders::ALL,
                style: Style::default().fg(TEXT_DIM),
                focused_style: Some(Style::default().fg(ACCENT_TEAL)),
            }),
            padding: Padding::xy(1, 0),
            bg: Some(BG_PANEL),
            fg: Some(TEXT_MAIN),
        },
        text: Style::default().fg(TEXT_DIM),
        hint_key: Style::default()
            .fg(ACCENT_TEAL)
            .add_modifier(Modifier::BOLD),
        hint_label: Style::default().fg(TEXT_DIM),
        separator: Style::default().fg(TEXT_DIM),
    };

    let props = StatusBarProps {
        left: StatusBarSection::hints(&hints).with_separator("  "),
        center: StatusBarSection::empty(),
        right: StatusBarSection::items(&status_items).with_separator("  "),
        style,
        is_focused: false,
    };
    Component::<Action>::render(status_bar, frame, area, props);
}

fn status_hints(state: &AppState) -> Vec<StatusBarHint<'static>> {
    match state.screen {
        Screen::Home if state.search.editing => vec![
            StatusBarHint::new("Enter", "Search"),
            StatusBarHint::new("Esc", "Done"),
            StatusBarHint::new("Bksp", "Delete"),
        ],
        Screen::Home => {
            let mut hints = vec![
                StatusBarHint::new("j/k", "Move"),
                StatusBarHint::new("Enter", "Open"),
                StatusBarHint::new("/", "Search"),
            ];
            if state.is_searching() {
                hints.push(StatusBarHint::new("Esc", "Clear"));
            }
            hints.push(StatusBarHint::new("f", "Favorite"));
            hints.push(StatusBarHint::new("v", "Favorites"));
            hints.push(StatusBarHint::new("q", "Quit"));
            hints
        }
        Screen::Detail => vec![
            StatusBarHint::new("Esc", "Back"),
            StatusBarHint::new("f", "Favorite"),
            StatusBarHint::new("v", "Favorites"),
            StatusBarHint::new("q", "Quit"),
        ],
        Screen::Favorites => vec![
            StatusBarHint::new("j/k", "Move"),
            StatusBarHint::new("Enter", "Open"),
            StatusBarHint::new("x", "Remove"),
            StatusBarHint::new("Esc", "Home"),
            StatusBarHint::new("q", "Quit"),
        ],
    }
}

fn catalog_items(state: &AppState) -> Vec<Line<'static>> {
    state
        .browse
        .items
        .iter()
        .map(|entry| entry_line(entry, state.is_favorite(entry)))
        .collect()
}

fn favorite_items(state: &AppState) -> Vec<Line<'static>> {
    state
        .favorites
        .iter()
        .map(|entry| entry_line(entry, true))
        .collect()
}

fn entry_line(entry: &CatalogEntry, favorite: bool) -> Line<'static> {
    let marker = if favorite { "*" } else { " " };
    Line::from(format!("{marker} {} {}", dex_number(entry.id), entry.name))
}

fn list_style() -> SelectListStyle {
    SelectListStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: None,
            fg: Some(TEXT_MAIN),
        },
        selection: SelectionStyle {
            style: Some(
                Style::default()
                    .bg(BG_HIGHLIGHT)
                    .fg(TEXT_MAIN)
                    .add_modifier(Modifier::BOLD),
            ),
            marker: None,
            disabled: false,
        },
        ..SelectListStyle::default()
    }
}

fn spinner_dots(tick: u64) -> &'static str {
    match tick % 4 {
        0 => "",
        1 => ".",
        2 => "..",
        _ => "...",
    }
}

/// `#001`-style catalog number.
pub fn dex_number(id: u32) -> String {
    format!("#{id:03}")
}

/// Renders a tenths value (decimetres, hectograms) in whole units.
pub fn format_tenths(tenths: u32, unit: &str) -> String {
    format!("{}.{} {unit}", tenths / 10, tenths % 10)
}

pub fn ability_label(name: &str) -> String {
    name.replace('-', " ")
}
