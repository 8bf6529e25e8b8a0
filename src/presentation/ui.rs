use crate::application::{App, DetailState, Screen};
use crate::domain::Pet;
use crate::presentation::strings::{format_template, Strings};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const LIST_ITEM_HEIGHT: usize = 3;

pub fn render_ui(f: &mut Frame, app: &mut App, strings: &Strings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, strings, chunks[0]);
    match &app.screen {
        Screen::List => render_pet_list(f, app, strings, chunks[1]),
        Screen::Detail(detail) => render_pet_detail(f, detail, strings, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);

    if app.show_help {
        render_help_popup(f);
    }
}

fn render_header(f: &mut Frame, app: &App, strings: &Strings, area: Rect) {
    let title = match app.current_pet() {
        Some(pet) => format!("← {}", pet.name()),
        None if app.is_on_detail() => "←".to_string(),
        None => format!("≡ {}", strings.app_name),
    };
    let header = Paragraph::new(title).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(header, area);
}

fn render_pet_list(f: &mut Frame, app: &mut App, strings: &Strings, area: Rect) {
    let inner_rows = area.height.saturating_sub(2) as usize;
    app.set_viewport_rows((inner_rows / LIST_ITEM_HEIGHT).max(1));

    let items: Vec<ListItem> = app
        .pets()
        .iter()
        .map(|pet| ListItem::new(list_item_lines(pet, strings)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(strings.app_name.as_str()))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");

    let mut state = ListState::default()
        .with_offset(app.scroll)
        .with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn list_item_lines(pet: &Pet, strings: &Strings) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            pet.name().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format_template(strings.years_old, pet.age())),
        Line::from(vec![
            Span::styled("⌖ ", Style::default().fg(Color::Red)),
            Span::raw(pet.location().to_string()),
        ]),
    ]
}

fn render_pet_detail(f: &mut Frame, detail: &DetailState, strings: &Strings, area: Rect) {
    let Some(pet) = &detail.pet else {
        let empty = Paragraph::new(strings.no_pet)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let image = Paragraph::new(format!("[image: {}]", pet.image().asset_path()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(image, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);
    render_round_card(f, strings.age, &format_template(strings.age_value, pet.age()), cards[0]);
    render_round_card(f, strings.weight, &format_template(strings.weight_value, pet.weight()), cards[1]);
    render_round_card(f, strings.location, pet.location(), cards[2]);

    let owner = Paragraph::new(vec![
        Line::from(Span::styled(
            strings.owner_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(strings.owner),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(owner, chunks[2]);

    let reason = Paragraph::new(strings.reason).wrap(Wrap { trim: true });
    f.render_widget(reason, chunks[3]);

    let button = Paragraph::new(format!("{} (a)", strings.adoption))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD));
    f.render_widget(button, chunks[4]);
}

fn render_round_card(f: &mut Frame, title: &str, text: &str, area: Rect) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(title.to_string(), Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            text.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(card, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match (&app.status_message, &app.screen) {
        (Some(status), _) => status.clone(),
        (None, Screen::List) => "↑↓/jk: move | Enter: details | ?: help | q: quit".to_string(),
        (None, Screen::Detail(_)) => "Esc/←: back | a: adopt | ?: help | q: quit".to_string(),
    };

    let status = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help = Paragraph::new(HELP_TEXT)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));
    f.render_widget(help, popup_area);
}

const HELP_TEXT: &str = "=== PET LIST ===
↑↓ or k/j       Move the cursor
Home/g End/G    Jump to first / last pet
PgUp PgDn       Move one page
Enter/→/l       Show details

=== PET DETAILS ===
Esc/←/h         Back to the list
Backspace       Back to the list
a               Adopt

=== GENERAL ===
? or F1         Toggle this help
q               Quit";
