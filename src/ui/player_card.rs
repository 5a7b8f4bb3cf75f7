use crate::app::{App, ArtworkState};
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(Span::styled(
            " Now Playing ",
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(theme.blue))
        .style(Style::default().bg(Color::Reset));

    let inner = card_block.inner(area);
    f.render_widget(card_block, area);

    if inner.height < 1 {
        return;
    }

    // Tiny panes drop the artwork and keep info + keys.
    let is_cramped = inner.height < 10;
    let constraints = if is_cramped {
        vec![
            Constraint::Length(0),                                // artwork (hidden)
            Constraint::Length(inner.height.saturating_sub(1)),   // info
            Constraint::Length(1),                                // keys
        ]
    } else {
        vec![
            Constraint::Min(0),    // artwork (elastic)
            Constraint::Length(3), // info
            Constraint::Length(1), // spacer
            Constraint::Length(1), // keys
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    if !is_cramped {
        render_artwork(f, chunks[0], app);
    }

    let info_area = chunks[1];
    let keys_area = *chunks.last().unwrap_or(&Rect::default());

    render_info(f, info_area, app);
    render_keys(f, keys_area, app);
}

fn render_info(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let width = area.width as usize;

    let lines = match &app.snapshot.track {
        Some(track) => {
            let glyph = if app.snapshot.is_playing { "▶ " } else { "⏸ " };
            vec![
                Line::from(Span::styled(
                    truncate(&format!("{}{}", glyph, track.display_title()), width),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    truncate(track.display_artist(), width),
                    Style::default().fg(theme.blue),
                )),
                Line::from(Span::styled(
                    truncate(track.display_album(), width),
                    Style::default().fg(theme.overlay),
                )),
            ]
        }
        None => vec![
            Line::from(Span::styled(
                "No Music Playing",
                Style::default()
                    .fg(theme.overlay)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Open Apple Music",
                Style::default().fg(theme.overlay),
            )),
        ],
    };

    let info = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().style(Style::default().bg(Color::Reset)));
    f.render_widget(info, area);
}

fn render_keys(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let hint = Line::from(vec![
        Span::styled("space", Style::default().fg(theme.blue)),
        Span::styled(" play/pause  ", Style::default().fg(theme.overlay)),
        Span::styled("n", Style::default().fg(theme.blue)),
        Span::styled(" next  ", Style::default().fg(theme.overlay)),
        Span::styled("p", Style::default().fg(theme.blue)),
        Span::styled(" prev  ", Style::default().fg(theme.overlay)),
        Span::styled("q", Style::default().fg(theme.blue)),
        Span::styled(" quit", Style::default().fg(theme.overlay)),
    ]);
    let footer = Paragraph::new(hint).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn render_artwork(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    if area.height < 1 {
        return;
    }

    match &app.artwork {
        ArtworkState::Loaded(raw_image) => {
            let available_width = area.width as u32;
            let available_height = area.height as u32;

            // One text row is two sub-pixels tall with half-block glyphs.
            let target_width = available_width;
            let target_height = available_height * 2;

            if target_width > 0 && target_height > 0 {
                use image::imageops::FilterType;
                use image::GenericImageView;

                let resized = raw_image.resize(target_width, target_height, FilterType::Triangle);

                let img_height_subpixels = resized.height();
                let img_rows = img_height_subpixels.div_ceil(2);
                let padding_top = available_height.saturating_sub(img_rows) / 2;

                let mut lines = Vec::new();
                for _ in 0..padding_top {
                    lines.push(Line::default());
                }

                for y in (0..img_height_subpixels).step_by(2) {
                    let mut spans = Vec::new();
                    for x in 0..resized.width() {
                        let p1 = resized.get_pixel(x, y);
                        let p2 = if y + 1 < img_height_subpixels {
                            resized.get_pixel(x, y + 1)
                        } else {
                            p1
                        };

                        spans.push(Span::styled(
                            "▀",
                            Style::default()
                                .fg(Color::Rgb(p1[0], p1[1], p1[2]))
                                .bg(Color::Rgb(p2[0], p2[1], p2[2])),
                        ));
                    }
                    lines.push(Line::from(spans));
                }

                let artwork_widget = Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(Block::default().style(Style::default().bg(Color::Reset)));
                f.render_widget(artwork_widget, area);
            }
        }
        ArtworkState::Failed | ArtworkState::Idle => {
            let text = "\n\n\n\n\n        ♪\n    No Album\n      Art".to_string();
            let p = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().style(Style::default().fg(theme.overlay).bg(Color::Reset)));
            f.render_widget(p, area);
        }
    }
}
