//! Section renderers
//!
//! Each function appends one section's lines to the builder.

use folio_core::{ContactField, SubmitState};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::builder::{truncate, PageBuilder, INDENT};
use super::PageView;
use crate::tui::state::FormSlot;

/// Minimum rows shown for the message box
const MESSAGE_MIN_ROWS: usize = 4;

/// Widest the contact form gets
const FORM_MAX_WIDTH: usize = 60;

pub fn hero(b: &mut PageBuilder<'_>, view: &PageView<'_>) {
    let theme = b.theme;
    let owner = &view.portfolio.owner;

    b.blanks(3);
    b.push_centered("Hi, I'm", Style::default().fg(theme.dim_color));
    b.push_centered(
        &owner.name,
        Style::default()
            .fg(theme.title_color)
            .add_modifier(Modifier::BOLD),
    );
    b.blank();

    // Typewriter line: fixed height so later sections never shift
    let cursor_room = 1;
    let tagline = truncate(view.tagline, b.width().saturating_sub(cursor_room + INDENT));
    b.push(
        Line::from(vec![
            Span::styled(tagline, Style::default().fg(theme.accent_color)),
            Span::styled(
                "_",
                Style::default()
                    .fg(theme.secondary_color)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ])
        .centered(),
    );
    b.blank();

    if let Some(location) = &owner.location {
        b.push_centered(&format!("📍 {location}"), Style::default().fg(theme.dim_color));
    }
    b.blank();

    b.push(
        Line::from(vec![
            Span::styled(
                " h ",
                Style::default()
                    .fg(theme.bg_color)
                    .bg(theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Hire Me", Style::default().fg(theme.text_color)),
        ])
        .centered(),
    );
    b.blank();

    if !view.portfolio.socials.is_empty() {
        let names: Vec<&str> = view.portfolio.socials.iter().map(|s| s.name.as_str()).collect();
        b.push_centered(&names.join("  ·  "), Style::default().fg(theme.dim_color));
    }
    b.blanks(3);
}

pub fn about(b: &mut PageBuilder<'_>, view: &PageView<'_>) {
    let theme = b.theme;
    let about = &view.portfolio.about;

    b.heading("About Me");
    for paragraph in &about.paragraphs {
        b.paragraph(paragraph, Style::default().fg(theme.text_color), INDENT);
        b.blank();
    }

    if !about.highlights.is_empty() {
        b.subheading("Technologies I work with");
        b.badges(&about.highlights, INDENT + 2);
        b.blank();
    }

    let owner = &view.portfolio.owner;
    if let Some(email) = &owner.email {
        b.field("Email", email, INDENT);
    }
    if let Some(location) = &owner.location {
        b.field("Location", location, INDENT);
    }
    b.blank();
}

pub fn skills(b: &mut PageBuilder<'_>, view: &PageView<'_>) {
    b.heading("Skills");
    for (category, skills) in view.portfolio.skills_by_category() {
        b.subheading(category);
        let names: Vec<String> = skills.iter().map(|s| s.name.clone()).collect();
        b.badges(&names, INDENT + 2);
        b.blank();
    }
}

pub fn projects(b: &mut PageBuilder<'_>, view: &PageView<'_>) {
    let theme = b.theme;

    b.heading("Projects");
    for project in &view.portfolio.projects {
        b.push(Line::from(vec![
            Span::raw(" ".repeat(INDENT)),
            Span::styled("▸ ", Style::default().fg(theme.accent_color)),
            Span::styled(
                project.title.clone(),
                Style::default()
                    .fg(theme.text_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        b.paragraph(
            &project.description,
            Style::default().fg(theme.dim_color),
            INDENT + 2,
        );
        b.badges(&project.technologies, INDENT + 2);
        if let Some(live) = &project.live {
            b.field("Live", live, INDENT + 2);
        }
        if let Some(source) = &project.source {
            b.field("Code", source, INDENT + 2);
        }
        b.blank();
    }
}

pub fn experience(b: &mut PageBuilder<'_>, view: &PageView<'_>) {
    let theme = b.theme;

    b.heading("Experience");
    for job in &view.portfolio.experience {
        b.push(Line::from(vec![
            Span::raw(" ".repeat(INDENT)),
            Span::styled("● ", Style::default().fg(theme.accent_color)),
            Span::styled(
                job.role.clone(),
                Style::default()
                    .fg(theme.text_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        b.push(Line::from(vec![
            Span::raw(" ".repeat(INDENT + 2)),
            Span::styled(job.company.clone(), Style::default().fg(theme.secondary_color)),
            Span::styled(
                format!("  ·  {}", job.period),
                Style::default().fg(theme.dim_color),
            ),
        ]));
        if !job.details.is_empty() {
            b.paragraph(&job.details, Style::default().fg(theme.text_color), INDENT + 2);
        }
        b.badges(&job.skills, INDENT + 2);
        b.blank();
    }

    if !view.portfolio.education.is_empty() {
        b.subheading("Education");
        b.blank();
        for edu in &view.portfolio.education {
            b.push(Line::from(vec![
                Span::raw(" ".repeat(INDENT)),
                Span::styled("◆ ", Style::default().fg(theme.secondary_color)),
                Span::styled(
                    edu.degree.clone(),
                    Style::default()
                        .fg(theme.text_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({})", edu.year),
                    Style::default().fg(theme.dim_color),
                ),
            ]));
            b.push(Line::from(vec![
                Span::raw(" ".repeat(INDENT + 2)),
                Span::styled(edu.institute.clone(), Style::default().fg(theme.accent_color)),
            ]));
            if let Some(score) = &edu.score {
                b.push(Line::from(vec![
                    Span::raw(" ".repeat(INDENT + 2)),
                    Span::styled(score.clone(), Style::default().fg(theme.dim_color)),
                ]));
            }
            b.blank();
        }
    }
}

/// Render the contact form; returns the rows each slot occupies
pub fn contact(b: &mut PageBuilder<'_>, view: &PageView<'_>) -> Vec<(FormSlot, usize)> {
    let theme = b.theme;
    let mut rows = Vec::new();

    b.heading("Get In Touch");
    b.push_centered(
        "Have a project in mind? Send a message.",
        Style::default().fg(theme.dim_color),
    );
    b.blank();

    let form_width = b.width().saturating_sub(INDENT * 2).min(FORM_MAX_WIDTH);
    let left = (b.width().saturating_sub(form_width)) / 2;
    let inner = form_width.saturating_sub(4);
    // One column stays free for the cursor
    let text_width = inner.saturating_sub(1).max(1);

    for field in ContactField::ALL {
        let slot = FormSlot::Field(field);
        let focused = view.focus == Some(slot);
        let border_style = if focused {
            Style::default().fg(theme.accent_color)
        } else {
            Style::default().fg(theme.border_color)
        };

        let value = view.form.value(field);
        let mut content: Vec<(String, Style)> = if value.is_empty() {
            vec![(
                field.placeholder().to_string(),
                Style::default().fg(theme.dim_color),
            )]
        } else if field.is_multiline() {
            value
                .split('\n')
                .flat_map(|line| {
                    if line.is_empty() {
                        vec![String::new()]
                    } else {
                        textwrap::wrap(line, text_width)
                            .into_iter()
                            .map(|w| w.into_owned())
                            .collect()
                    }
                })
                .map(|line| (line, Style::default().fg(theme.text_color)))
                .collect()
        } else {
            vec![(tail(value, text_width), Style::default().fg(theme.text_color))]
        };

        if focused && view.form.is_editable() {
            if let Some((last, _)) = content.last_mut() {
                if value.is_empty() {
                    last.clear();
                }
                last.push('▏');
            }
        }

        if field.is_multiline() {
            while content.len() < MESSAGE_MIN_ROWS {
                content.push((String::new(), Style::default()));
            }
        }

        let label = format!(" {} ", field.label());
        let top_fill = form_width.saturating_sub(label.width() + 3);
        rows.push((slot, b.row()));
        b.push(Line::from(vec![
            Span::raw(" ".repeat(left)),
            Span::styled("╭─", border_style),
            Span::styled(label, border_style.add_modifier(Modifier::BOLD)),
            Span::styled(format!("{}╮", "─".repeat(top_fill)), border_style),
        ]));

        for (text, style) in content {
            let pad = inner.saturating_sub(text.width());
            rows.push((slot, b.row()));
            b.push(Line::from(vec![
                Span::raw(" ".repeat(left)),
                Span::styled("│ ", border_style),
                Span::styled(text, style),
                Span::raw(" ".repeat(pad)),
                Span::styled(" │", border_style),
            ]));
        }

        rows.push((slot, b.row()));
        b.push(Line::from(vec![
            Span::raw(" ".repeat(left)),
            Span::styled(
                format!("╰{}╯", "─".repeat(form_width.saturating_sub(2))),
                border_style,
            ),
        ]));
    }

    b.blank();
    rows.push((FormSlot::SendButton, b.row()));
    let button_focused = view.focus == Some(FormSlot::SendButton);
    let button = match view.form.state() {
        SubmitState::Idle => {
            let style = if button_focused {
                Style::default()
                    .fg(theme.bg_color)
                    .bg(theme.accent_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD)
            };
            Line::from(Span::styled("  ➤ Send Message  ", style))
        }
        SubmitState::Submitting { .. } => Line::from(Span::styled(
            format!("  {} Sending...  ", view.spinner),
            Style::default().fg(theme.warning_color),
        )),
        SubmitState::Submitted { .. } => Line::from(Span::styled(
            "  ✓ Message Sent! I'll get back to you soon.  ",
            Style::default()
                .fg(theme.success_color)
                .add_modifier(Modifier::BOLD),
        )),
    };
    b.push(button.centered());

    b.blank();
    b.push_centered(
        "c focus form · Tab next field · Esc leave form",
        Style::default().fg(theme.dim_color),
    );
    b.blank();

    rows
}

pub fn footer(b: &mut PageBuilder<'_>, view: &PageView<'_>) {
    let theme = b.theme;
    let portfolio = view.portfolio;

    b.blank();
    b.push(Line::from(Span::styled(
        "─".repeat(b.width()),
        Style::default().fg(theme.border_color),
    )));
    b.blank();

    b.push(Line::from(vec![
        Span::raw(" ".repeat(INDENT)),
        Span::styled(
            portfolio.owner.name.clone(),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    if !portfolio.footer.tagline.is_empty() {
        b.paragraph(
            &portfolio.footer.tagline,
            Style::default().fg(theme.dim_color),
            INDENT,
        );
    }
    b.blank();

    b.subheading("Quick Links");
    let quick_links: Vec<String> = folio_core::SectionKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| format!("{} {}", i + 1, kind.label()))
        .collect();
    b.badges(&quick_links, INDENT + 2);
    b.blank();

    if !portfolio.socials.is_empty() {
        b.subheading("Connect");
        for social in &portfolio.socials {
            b.field(&social.name, &social.url, INDENT + 2);
        }
        b.blank();
    }

    b.push_centered(
        &format!(
            "© {} {}. All rights reserved.",
            view.year, portfolio.owner.name
        ),
        Style::default().fg(theme.dim_color),
    );
    b.push_centered("t  Back to top ↑", Style::default().fg(theme.accent_color));
    b.blank();
}

/// Keep the end of a single-line value that overflows its box
fn tail(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut used = 1;
    for ch in value.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        kept.push(ch);
        used += w;
    }
    kept.reverse();
    let mut out = String::from("…");
    out.extend(kept);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_keeps_end() {
        assert_eq!(tail("abc", 5), "abc");
        assert_eq!(tail("abcdefgh", 5), "…efgh");
    }
}
