//! Page document
//!
//! Builds the whole scrollable page - hero, cube viewport, skills,
//! projects, about, contact, footer - as styled rows, and records the
//! two anchors the rest of the app needs: where the hero title sits
//! (the intro's merge destination) and where the cube viewport is
//! (pointer routing and per-frame repaint).

use folio_core::content::{Content, ProjectKind};
use folio_core::RectF;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::glyphs;
use crate::icons;
use crate::theme::Palette;

/// Rows reserved for the cube viewport.
pub const CUBE_VIEW_HEIGHT: u16 = 14;

/// The built page.
pub struct Document {
    rows: Vec<Line<'static>>,
    /// Hero title placement in document coordinates
    pub hero_title: Rect,
    /// Row range holding the hero title (skipped until revealed)
    pub hero_rows: std::ops::Range<usize>,
    /// Cube viewport in document coordinates
    pub cube_view: Rect,
    width: u16,
}

impl Document {
    /// Lay the page out for a given content width and first-screen
    /// height.
    #[must_use]
    pub fn build(content: &Content, palette: &Palette, width: u16, viewport: u16, year: i32) -> Self {
        let mut b = Builder {
            rows: Vec::new(),
            width,
            palette: *palette,
        };

        let (hero_title, hero_rows) = b.hero(content, viewport);
        let cube_view = b.cube(content, width);
        b.skills(content);
        b.projects(content);
        b.about(content);
        b.contact(content);
        b.footer(content, year);

        Self {
            rows: b.rows,
            hero_title,
            hero_rows,
            cube_view,
            width,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Line<'static>] {
        &self.rows
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn max_scroll(&self, viewport: u16) -> usize {
        self.rows.len().saturating_sub(viewport as usize)
    }

    /// The hero title as the intro coordinator's destination rect, in
    /// pixel-equivalent (cell) units at scroll zero.
    #[must_use]
    pub fn hero_rect_f(&self) -> RectF {
        RectF::new(
            f32::from(self.hero_title.x),
            f32::from(self.hero_title.y),
            f32::from(self.hero_title.width),
            f32::from(self.hero_title.height),
        )
    }
}

struct Builder {
    rows: Vec<Line<'static>>,
    width: u16,
    palette: Palette,
}

impl Builder {
    fn blank(&mut self) {
        self.rows.push(Line::default());
    }

    fn blanks(&mut self, n: u16) {
        for _ in 0..n {
            self.blank();
        }
    }

    fn pad_for(&self, text_width: u16) -> u16 {
        (self.width.saturating_sub(text_width)) / 2
    }

    /// A single centered span.
    fn centered(&mut self, text: String, style: Style) {
        let pad = self.pad_for(text.width() as u16);
        self.rows.push(Line::from(vec![
            Span::raw(" ".repeat(pad as usize)),
            Span::styled(text, style),
        ]));
    }

    /// Centered group of pre-styled spans.
    fn centered_spans(&mut self, spans: Vec<Span<'static>>) {
        let total: u16 = spans.iter().map(|s| s.content.width() as u16).sum();
        let pad = self.pad_for(total);
        let mut row = vec![Span::raw(" ".repeat(pad as usize))];
        row.extend(spans);
        self.rows.push(Line::from(row));
    }

    fn left(&mut self, indent: u16, spans: Vec<Span<'static>>) {
        let mut row = vec![Span::raw(" ".repeat(indent as usize))];
        row.extend(spans);
        self.rows.push(Line::from(row));
    }

    fn heading(&mut self, text: &str) {
        self.blanks(2);
        self.centered(
            text.to_string(),
            Style::default()
                .fg(self.palette.heading)
                .add_modifier(Modifier::BOLD),
        );
        let rule_w = (text.width() as u16 + 8).min(self.width);
        self.centered(
            icons::sep::RULE.repeat(rule_w as usize),
            Style::default().fg(self.palette.faint),
        );
        self.blank();
    }

    /// Body column width for wrapped prose.
    fn column(&self) -> usize {
        (self.width.saturating_sub(8) as usize).min(72)
    }

    fn hero(&mut self, content: &Content, viewport: u16) -> (Rect, std::ops::Range<usize>) {
        // The hero fills the first screen; everything inside is centered
        // vertically around the title block.
        let block_height = 12;
        let pad_top = viewport.saturating_sub(block_height + 2).max(2) / 2;
        self.blanks(pad_top);

        let name = content.profile.name.clone();
        let title_w = glyphs::text_width(&name, false);
        let title_x = self.pad_for(title_w);
        let title_y = self.rows.len() as u16;
        let hero_rows = self.rows.len()..self.rows.len() + 3;

        let title_style = Style::default()
            .fg(self.palette.heading)
            .add_modifier(Modifier::BOLD);
        for row in glyphs::big_lines(&name, false) {
            let pad = " ".repeat(title_x as usize);
            self.rows.push(Line::from(vec![
                Span::raw(pad),
                Span::styled(row, title_style),
            ]));
        }

        self.blank();
        self.centered(
            format!(" {} ", content.profile.tagline),
            Style::default()
                .fg(self.palette.pill_fg)
                .bg(self.palette.pill_bg),
        );
        self.blank();
        self.centered(
            icons::diamond_list(&content.profile.roles),
            Style::default().fg(self.palette.dim),
        );
        self.blanks(2);
        self.centered_spans(vec![
            Span::styled(
                "[ Explore My Work ]".to_string(),
                Style::default()
                    .fg(self.palette.bg)
                    .bg(self.palette.heading),
            ),
            Span::raw("   "),
            Span::styled(
                "[ View 3D Projects ]".to_string(),
                Style::default().fg(self.palette.heading),
            ),
        ]);

        // Push the scroll hint to the bottom edge of the first screen
        let used = self.rows.len() as u16 + 2;
        self.blanks(viewport.saturating_sub(used));
        self.centered("Scroll Down".to_string(), Style::default().fg(self.palette.dim));
        self.centered(icons::nav::DOWN.to_string(), Style::default().fg(self.palette.dim));

        (Rect::new(title_x, title_y, title_w, 3), hero_rows)
    }

    fn cube(&mut self, content: &Content, width: u16) -> Rect {
        self.heading(&content.cube.heading);
        self.centered(
            content.cube.description.clone(),
            Style::default().fg(self.palette.dim),
        );
        self.blank();

        let view_y = self.rows.len() as u16;
        self.blanks(CUBE_VIEW_HEIGHT);
        self.centered(
            format!("drag to rotate {} r resumes the spin", icons::sep::DOT),
            Style::default().fg(self.palette.faint),
        );
        self.blank();

        Rect::new(0, view_y, width, CUBE_VIEW_HEIGHT)
    }

    fn skills(&mut self, content: &Content) {
        self.heading("Skills & Expertise");

        let bar_w = 20;
        let name_w = 18;
        let inner = name_w + 1 + bar_w + 5;
        let indent = self.pad_for(inner as u16);

        for category in &content.skills {
            self.left(
                indent,
                vec![Span::styled(
                    category.title.clone(),
                    Style::default()
                        .fg(self.palette.accent)
                        .add_modifier(Modifier::BOLD),
                )],
            );
            for skill in &category.skills {
                self.left(
                    indent,
                    vec![
                        Span::styled(
                            format!("{:<name_w$}", skill.name),
                            Style::default().fg(self.palette.fg),
                        ),
                        Span::raw(" "),
                        Span::styled(
                            icons::level_bar(skill.level, bar_w),
                            Style::default().fg(self.palette.bar_fill),
                        ),
                        Span::styled(
                            format!(" {:>3}%", skill.level),
                            Style::default().fg(self.palette.dim),
                        ),
                    ],
                );
            }
            self.blank();
        }
    }

    fn projects(&mut self, content: &Content) {
        self.heading("Selected Projects");

        let column = self.column();
        let indent = self.pad_for(column as u16);

        for project in &content.projects {
            let tag_style = match project.kind {
                ProjectKind::ThreeD => Style::default().fg(self.palette.accent),
                ProjectKind::Web => Style::default().fg(self.palette.link),
            };
            self.left(
                indent,
                vec![
                    Span::styled(
                        format!("{} ", icons::nav::ITEM),
                        Style::default().fg(self.palette.accent),
                    ),
                    Span::styled(
                        project.title.clone(),
                        Style::default()
                            .fg(self.palette.heading)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(format!("[{}]", project.kind.tag()), tag_style),
                ],
            );

            for line in textwrap::wrap(&project.description, column.saturating_sub(2)) {
                self.left(
                    indent + 2,
                    vec![Span::styled(
                        line.to_string(),
                        Style::default().fg(self.palette.dim),
                    )],
                );
            }

            self.left(
                indent + 2,
                vec![Span::styled(
                    project.technologies.join(&format!(" {} ", icons::sep::DOT)),
                    Style::default().fg(self.palette.faint),
                )],
            );

            let mut links: Vec<Span<'static>> = Vec::new();
            if let Some(repo) = &project.repo {
                links.push(Span::styled(
                    format!("{} {}", repo, icons::nav::LINK),
                    Style::default().fg(self.palette.link),
                ));
            }
            if let Some(live) = &project.live {
                if !links.is_empty() {
                    links.push(Span::raw("   "));
                }
                links.push(Span::styled(
                    format!("{} {}", live, icons::nav::LINK),
                    Style::default().fg(self.palette.link),
                ));
            }
            if !links.is_empty() {
                self.left(indent + 2, links);
            }
            self.blank();
        }
    }

    fn about(&mut self, content: &Content) {
        self.heading("About Me");

        let column = self.column();
        let indent = self.pad_for(column as u16);

        for paragraph in &content.about.paragraphs {
            for line in textwrap::wrap(paragraph, column) {
                self.left(
                    indent,
                    vec![Span::styled(
                        line.to_string(),
                        Style::default().fg(self.palette.fg),
                    )],
                );
            }
            self.blank();
        }

        for stat in &content.about.stats {
            self.centered_spans(vec![
                Span::styled(
                    format!("{:>4} ", stat.value),
                    Style::default()
                        .fg(self.palette.heading)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(stat.label.clone(), Style::default().fg(self.palette.dim)),
            ]);
        }
    }

    fn contact(&mut self, content: &Content) {
        self.heading("Get In Touch");

        let rows = [
            ("email", content.contact.email.clone()),
            ("github", content.contact.github.clone()),
            ("linkedin", content.contact.linkedin.clone()),
        ];
        for (label, value) in rows {
            self.centered_spans(vec![
                Span::styled(
                    format!("{label:>9}  "),
                    Style::default().fg(self.palette.dim),
                ),
                Span::styled(value, Style::default().fg(self.palette.link)),
            ]);
        }
    }

    fn footer(&mut self, content: &Content, year: i32) {
        self.blanks(2);
        self.centered(
            icons::sep::RULE.repeat((self.width / 2) as usize),
            Style::default().fg(self.palette.faint),
        );
        self.centered(
            format!("© {year} {} {}", icons::sep::DOT, content.profile.name),
            Style::default().fg(self.palette.dim),
        );
        self.centered(
            content.profile.location.clone(),
            Style::default().fg(self.palette.faint),
        );
        self.blank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ThemeMode;
    use pretty_assertions::assert_eq;

    fn doc() -> Document {
        Document::build(
            &Content::default(),
            &Palette::for_mode(ThemeMode::Dark),
            120,
            36,
            2025,
        )
    }

    #[test]
    fn hero_title_anchor_matches_its_rows() {
        let doc = doc();
        assert_eq!(doc.hero_title.height, 3);
        assert_eq!(doc.hero_rows.len(), 3);
        assert_eq!(doc.hero_rows.start as u16, doc.hero_title.y);

        // The recorded x really is where the glyphs start
        let row = &doc.rows()[doc.hero_rows.start];
        let leading: u16 = row
            .spans
            .first()
            .map(|s| s.content.width() as u16)
            .unwrap_or(0);
        assert_eq!(leading, doc.hero_title.x);
    }

    #[test]
    fn hero_title_is_horizontally_centered() {
        let doc = doc();
        let right = 120 - (doc.hero_title.x + doc.hero_title.width);
        assert!(doc.hero_title.x.abs_diff(right) <= 1);
    }

    #[test]
    fn cube_view_is_reserved_and_blank() {
        let doc = doc();
        assert_eq!(doc.cube_view.height, CUBE_VIEW_HEIGHT);
        for idx in doc.cube_view.y..doc.cube_view.y + doc.cube_view.height {
            assert_eq!(doc.rows()[idx as usize].width(), 0, "row {idx} not blank");
        }
    }

    #[test]
    fn first_screen_is_exactly_the_hero() {
        let doc = doc();
        // The cube heading starts right after the first viewport
        assert!(doc.cube_view.y > 36);
        assert!(doc.hero_title.y < 36);
    }

    #[test]
    fn document_contains_every_section() {
        let doc = doc();
        let text: String = doc
            .rows()
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
                    + "\n"
            })
            .collect();

        for needle in [
            "Skills & Expertise",
            "Selected Projects",
            "About Me",
            "Get In Touch",
            "Turning Ideas into Reality",
            "Scroll Down",
            "© 2025",
        ] {
            assert!(text.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn narrow_terminal_still_builds() {
        let doc = Document::build(
            &Content::default(),
            &Palette::for_mode(ThemeMode::Light),
            40,
            12,
            2025,
        );
        assert!(doc.height() > 40);
        assert!(doc.max_scroll(12) > 0);
    }
}
