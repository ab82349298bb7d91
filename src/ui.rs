use chrono::Local;
use mpd_client::responses::PlayState;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, MessageType, Tab};
use crate::ascii::AsciiArtwork;

/// Renders the user interface.
pub fn render(frame: &mut Frame<'_>, app: &App, artwork: Option<&AsciiArtwork>) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(4), // header: clock + tab bar
        Constraint::Min(0),    // main area
        Constraint::Length(3), // directory selection bar
        Constraint::Length(3), // footer
    ])
    .split(area);

    render_header(frame, app, chunks[0]);

    match app.current_tab {
        Tab::Home => render_home(frame, app, artwork, chunks[1]),
        Tab::Directory => render_directory(frame, app, chunks[1]),
        Tab::Queue => render_queue(frame, app, chunks[1]),
        Tab::Help => render_help(frame, app, chunks[1]),
    }
    render_status_message(frame, app, chunks[1]);

    render_directory_selection(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);
}

fn bordered_block<'a>(app: &App, title: &'a str) -> Block<'a> {
    let mut block = Block::default()
        .border_type(BorderType::Rounded)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.config.colors.border_color()));
    if !title.is_empty() {
        block = block.title(Span::styled(
            title,
            Style::default().fg(app.config.colors.border_title_color()),
        ));
    }
    block
}

/// Clock plus the tab bar, current tab in reverse video.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let now = Local::now().format("%I:%M:%S").to_string();

    let mut tabs: Vec<Span> = Vec::new();
    for tab in Tab::ALL {
        let label = format!(" {} ", tab.title());
        if tab == app.current_tab {
            tabs.push(Span::styled(
                label,
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        } else {
            tabs.push(Span::raw(label));
        }
        tabs.push(Span::raw(" "));
    }

    let lines = vec![Line::from(format!("Time: {now}")), Line::from(tabs)];
    let widget = Paragraph::new(lines)
        .style(Style::default().fg(app.config.colors.text_color()))
        .block(bordered_block(app, ""));
    frame.render_widget(widget, area);
}

fn render_home(frame: &mut Frame<'_>, app: &App, artwork: Option<&AsciiArtwork>, area: Rect) {
    let block = bordered_block(app, " Orpheus ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("Orpheus - Music Player"), Line::from("")];

    match &app.current_song {
        Some(song) => lines.push(Line::from(format!(
            "Now Playing: {} - {}",
            song.artist, song.title
        ))),
        None => lines.push(Line::from("No song playing")),
    }
    lines.push(Line::from(""));

    match artwork {
        Some(art) => {
            // center the grid horizontally
            let pad = (inner.width as usize).saturating_sub(art.width()) / 2;
            for row in art.rows() {
                lines.push(Line::from(format!("{}{}", " ".repeat(pad), row)));
            }
        }
        None => {
            if app.current_song.is_some() {
                lines.push(Line::from("No album art"));
            }
        }
    }

    let widget = Paragraph::new(lines).style(Style::default().fg(app.config.colors.text_color()));
    frame.render_widget(widget, inner);
}

/// Entry list for the current directory, selection inverted. Directories
/// carry a trailing slash.
fn render_directory(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!(" Directory: {} ", display_path(&app.current_directory));
    let block = bordered_block(app, &title);

    if app.entries.is_empty() {
        let widget = Paragraph::new("No items found")
            .style(Style::default().fg(app.config.colors.text_color()))
            .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let inner_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|entry| {
            let label = if entry.is_directory() {
                format!("{}/", entry.uri)
            } else {
                entry.uri.clone()
            };
            ListItem::new(truncate_to_width(&label, inner_width))
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(app.config.colors.text_color()))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(block);

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_queue(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = bordered_block(app, " Queue ");
    let inner_width = area.width.saturating_sub(4) as usize;

    let lines: Vec<Line> = if app.queue.is_empty() {
        vec![Line::from("Queue is empty")]
    } else {
        app.queue
            .iter()
            .take(area.height.saturating_sub(2) as usize)
            .enumerate()
            .map(|(i, song)| {
                let row = format!("{}. {} - {}", i + 1, song.artist, song.title);
                Line::from(truncate_to_width(&row, inner_width))
            })
            .collect()
    };

    let widget = Paragraph::new(lines)
        .style(Style::default().fg(app.config.colors.text_color()))
        .block(block);
    frame.render_widget(widget, area);
}

fn render_help(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = vec![
        Line::from("Help:"),
        Line::from("p              | Play/Pause"),
        Line::from("< >            | Previous/Next track"),
        Line::from("<LEFT> <RIGHT> | Move to tabs left or right (cycles)"),
        Line::from("q              | Quit"),
        Line::from(""),
        Line::from("Directory Help:"),
        Line::from("<UP> <DOWN>    | Scrolls up and down the list"),
        Line::from("u              | Goes up a directory"),
        Line::from("<ENTER>        | Goes down a directory or adds song to queue"),
        Line::from("e              | Edit the music directory path"),
    ];

    let widget = Paragraph::new(lines)
        .style(Style::default().fg(app.config.colors.text_color()))
        .block(bordered_block(app, " Help "));
    frame.render_widget(widget, area);
}

/// One-line message drawn over the bottom of the main area.
fn render_status_message(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(ref message) = app.status_message else {
        return;
    };
    if area.height < 3 || area.width < 6 {
        return;
    }

    let style = match message.kind {
        MessageType::Error => Style::default().fg(ratatui::style::Color::Red),
        MessageType::Info => Style::default().fg(app.config.colors.message_color()),
    };

    let row = Rect {
        x: area.x + 2,
        y: area.y + area.height - 2,
        width: area.width - 4,
        height: 1,
    };
    let text = truncate_to_width(&message.text, row.width as usize);
    frame.render_widget(Paragraph::new(text).style(style), row);
}

/// Bottom bar mirroring the path edit buffer.
fn render_directory_selection(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = bordered_block(app, "");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shown = if app.editing_active {
        &app.input_buffer
    } else {
        &app.current_directory
    };
    let text = format!("Music Directory: {}", display_path(shown));

    let hint = if app.editing_active {
        "[Enter to save, Esc to cancel]"
    } else {
        "[e to edit]"
    };
    let hint_width = hint.width() as u16;

    let path_width = inner.width.saturating_sub(hint_width + 1);
    let path_area = Rect {
        width: path_width,
        ..inner
    };
    let widget = Paragraph::new(truncate_to_width(&text, path_width as usize))
        .style(Style::default().fg(app.config.colors.text_color()));
    frame.render_widget(widget, path_area);

    if inner.width > hint_width {
        let hint_area = Rect {
            x: inner.x + inner.width - hint_width,
            width: hint_width,
            ..inner
        };
        let widget =
            Paragraph::new(hint).style(Style::default().fg(app.config.colors.border_title_color()));
        frame.render_widget(widget, hint_area);
    }
}

/// Playback state line; a wandering bar while playing.
fn render_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = bordered_block(app, "");
    let inner_width = area.width.saturating_sub(4) as usize;

    let text = match app.mpd_status.as_ref().map(|s| s.state) {
        Some(PlayState::Playing) => {
            let pos = (app.viz_pos as usize).min(inner_width.saturating_sub(1));
            format!("{}|", " ".repeat(pos))
        }
        Some(PlayState::Paused) => "Paused".to_string(),
        Some(PlayState::Stopped) => "Stopped".to_string(),
        None => "No status".to_string(),
    };

    let widget = Paragraph::new(text)
        .style(Style::default().fg(app.config.colors.text_color()))
        .block(block);
    frame.render_widget(widget, area);
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}

/// Cut a string to at most `max_width` terminal columns.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_column_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 3), "hel");
        // wide CJK glyphs count as two columns
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(truncate_to_width("日本語", 3), "日");
    }

    #[test]
    fn empty_path_displays_as_root() {
        assert_eq!(display_path(""), "/");
        assert_eq!(display_path("a/b"), "a/b");
    }
}
