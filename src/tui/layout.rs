use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::cli::commands::MASTHEAD;
use crate::config::ColorConfig;
use crate::domain::Story;
use crate::layout::{bucketize, continued_page, excerpt, FrontPage, Region, EXCERPT_WORDS};
use crate::timefmt::{format_masthead_date, format_relative_at};
use crate::tui::app::TuiApp;

pub fn render(frame: &mut Frame, app: &TuiApp, colors: &ColorConfig) {
    let now = Local::now();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Masthead
            Constraint::Min(10),   // Page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_masthead(frame, app, chunks[0], colors, &now);

    if app.stories().is_empty() {
        let message = if app.is_loading {
            "Loading stories..."
        } else {
            "No stories to show"
        };
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors.dateline));
        frame.render_widget(paragraph, chunks[1]);
    } else {
        render_page(frame, app, chunks[1], colors, &now);
    }

    render_status_bar(frame, app, chunks[2], colors);
}

fn render_masthead(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig, now: &DateTime<Local>) {
    let lines = vec![
        Line::from(Span::styled(
            MASTHEAD.to_uppercase(),
            Style::default()
                .fg(colors.masthead)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format_masthead_date(now),
            Style::default().fg(colors.dateline),
        )),
        Line::from(Span::styled(
            app.selector.describe(),
            Style::default().fg(colors.edition),
        )),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(colors.region_border));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_page(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig, now: &DateTime<Local>) {
    let page = bucketize(app.stories());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Lead row
            Constraint::Percentage(20), // Bottom
            Constraint::Percentage(25), // Minis
        ])
        .split(area);

    let lead = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

    let minis = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[2]);

    let placements = [
        (Region::LeftSidebar, lead[0]),
        (Region::CenterSpread, lead[1]),
        (Region::SidebarSpread, lead[2]),
        (Region::Bottom, rows[1]),
        (Region::Mini, minis[0]),
        (Region::Mini2, minis[1]),
        (Region::Mini3, minis[2]),
    ];

    for (region, rect) in placements {
        render_region(frame, app, &page, region, rect, colors, now);
    }
}

fn render_region(
    frame: &mut Frame,
    app: &TuiApp,
    page: &FrontPage<'_>,
    region: Region,
    area: Rect,
    colors: &ColorConfig,
    now: &DateTime<Local>,
) {
    let mut lines = Vec::new();

    for (i, story) in page.get(region).iter().enumerate() {
        let is_selected = region.offset() + i == app.selected;
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(story_lines(story, region, is_selected, colors, now));
    }

    let block = Block::default()
        .title(format!(" {} ", region.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.region_border));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn story_lines(
    story: &Story,
    region: Region,
    is_selected: bool,
    colors: &ColorConfig,
    now: &DateTime<Local>,
) -> Vec<Line<'static>> {
    let headline_style = if is_selected {
        Style::default()
            .fg(colors.selected_headline)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default()
            .fg(colors.headline)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(Span::styled(story.title.clone(), headline_style)),
        Line::from(Span::styled(
            format!(
                "By {} | {} | {}",
                story.display_author(),
                story.source,
                format_relative_at(story.created, *now)
            ),
            Style::default().fg(colors.byline),
        )),
    ];

    if story.image_href.is_some() {
        lines.push(Line::from(Span::styled(
            "[photo]",
            Style::default().fg(colors.dateline),
        )));
    }

    if region == Region::CenterSpread && story.has_text() {
        let body = excerpt(&story.text, EXCERPT_WORDS);
        lines.push(Line::from(body.text));
        if body.truncated {
            lines.push(Line::from(Span::styled(
                format!("Continued on Page A{}", continued_page(story)),
                Style::default()
                    .fg(colors.dateline)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    }

    lines
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if let Some(ref msg) = app.status_message {
        msg.clone()
    } else if app.is_loading && !app.stories().is_empty() {
        format!("Loading {}...", app.selector)
    } else {
        "j/k:Story  h/l:Source  t:Top  r:Refresh  o:Open  q:Quit".to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}
