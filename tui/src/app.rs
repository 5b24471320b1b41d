//! Main application
//!
//! The App owns the compositor, the core controllers and the built
//! page, and runs the event loop:
//!
//! 1. Terminal events steer the page (scroll, theme, cube drags)
//! 2. A frame tick advances the intro coordinator and the cube spin
//! 3. Layers are repainted and composited
//!
//! Scrolling stays locked until the intro coordinator reports
//! completion, mirroring the original page's scroll lock during the
//! splash.

use std::io;
use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use crossterm::event::{
    self, Event, EventStream, KeyCode, KeyEventKind, MouseButton, MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Terminal;

use folio_core::backdrop::DEFAULT_COUNT;
use folio_core::{
    Config, Content, DriveMode, IconField, IntroCoordinator, IntroEvent, OrientationController,
    Settings, ThemeMode,
};

use crate::backdrop::{self, ScrollActivity, ScrollDirection};
use crate::compositor::{Compositor, LayerId};
use crate::cube;
use crate::icons;
use crate::intro::{self, StageLayout};
use crate::sections::{Document, CUBE_VIEW_HEIGHT};
use crate::theme::Palette;

/// ~30 fps keeps the cube and the splash travel smooth without
/// noticeable CPU cost.
const FRAME: Duration = Duration::from_millis(33);

/// The post-intro content fade-in.
const REVEAL_FADE: Duration = Duration::from_millis(1000);

/// Cell-to-pointer-unit conversion. A terminal cell stands in for
/// roughly an 8x16 pixel block, so drags feel like the pointer drags
/// they are modeled on.
const CELL_PX_X: f32 = 8.0;
const CELL_PX_Y: f32 = 16.0;

/// Wheel scroll step in rows.
const WHEEL_STEP: i32 = 3;

/// Layer ids for the page regions
struct PageLayers {
    backdrop: LayerId,
    content: LayerId,
    status: LayerId,
    splash: LayerId,
}

/// Main application state
pub struct App {
    running: bool,

    // === Core controllers ===
    intro: IntroCoordinator,
    orientation: OrientationController,
    settings: Settings,

    // === Page state ===
    config: Config,
    content: Content,
    palette: Palette,
    doc: Document,
    scroll: usize,
    scroll_activity: ScrollActivity,
    field: IconField,

    // === Intro progression ===
    intro_done: bool,
    hero_visible: bool,
    reveal_clock: Option<Duration>,

    // === Rendering ===
    compositor: Compositor,
    layers: PageLayers,
    size: (u16, u16),
    last_frame: Instant,
}

impl App {
    /// Create the app for the current terminal size.
    pub fn new(config: Config, settings: Settings) -> anyhow::Result<Self> {
        let size = crossterm::terminal::size()?;
        let area = Rect::new(0, 0, size.0, size.1);
        let page = page_area(area);

        let mut compositor = Compositor::new(area);
        let layers = PageLayers {
            backdrop: compositor.create_layer(page, 0),
            content: compositor.create_layer(page, 10),
            status: compositor.create_layer(status_area(area), 20),
            splash: compositor.create_layer(area, 100),
        };
        // The content fades in after the intro
        compositor.set_opacity(layers.content, 0.0);

        let palette = Palette::for_mode(settings.theme());
        let content = config.content.clone();
        let doc = Document::build(&content, &palette, page.width, page.height, Local::now().year());

        Ok(Self {
            running: true,
            intro: IntroCoordinator::new(config.intro),
            orientation: OrientationController::new(config.orientation),
            settings,
            content,
            palette,
            doc,
            scroll: 0,
            scroll_activity: ScrollActivity::default(),
            field: IconField::from_seed(rand::random(), DEFAULT_COUNT),
            intro_done: false,
            hero_visible: false,
            reveal_clock: None,
            compositor,
            layers,
            size,
            last_frame: Instant::now(),
            config,
        })
    }

    /// Main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();

        // First frame immediately so the splash appears without delay
        self.render(terminal)?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key);
                            }
                            Event::Mouse(mouse) => self.handle_mouse(mouse),
                            Event::Resize(w, h) => self.handle_resize(w, h),
                            _ => {}
                        }
                    }
                }

                _ = tokio::time::sleep(FRAME) => {}
            }

            self.update();
            self.render(terminal)?;

            // Frame rate limiting
            let elapsed = frame_start.elapsed();
            if elapsed < FRAME {
                tokio::time::sleep(FRAME - elapsed).await;
            }
        }

        Ok(())
    }

    /// Advance controllers by the wall-clock delta since the last frame.
    fn update(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;

        self.scroll_activity.tick(delta);

        if !self.intro_done {
            let stage = StageLayout {
                area: page_area(self.screen()),
                name: &self.content.profile.name,
                hero: Some(self.doc.hero_rect_f()),
            };
            for event in self.intro.update(delta, &stage) {
                match event {
                    IntroEvent::TravelStarted => {
                        tracing::debug!("splash travel started");
                    }
                    IntroEvent::HeroRevealed => {
                        self.hero_visible = true;
                        self.reveal_clock = Some(Duration::ZERO);
                    }
                    IntroEvent::Completed => {
                        self.intro_done = true;
                        self.compositor.set_visible(self.layers.splash, false);
                        tracing::info!("intro complete, page unlocked");
                    }
                }
            }
        }

        if let Some(clock) = &mut self.reveal_clock {
            *clock += delta;
            let t = (clock.as_secs_f32() / REVEAL_FADE.as_secs_f32()).min(1.0);
            self.compositor
                .set_opacity(self.layers.content, folio_core::EasingFunction::EaseOut.apply(t));
            if *clock >= REVEAL_FADE {
                self.reveal_clock = None;
            }
        }

        self.orientation.advance(delta);
    }

    fn handle_key(&mut self, key: event::KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('r') => self.orientation.resume_auto(),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-i32::from(self.page_height()) / 2),
            KeyCode::PageDown => self.scroll_by(i32::from(self.page_height()) / 2),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(usize::MAX),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: event::MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                let on_content =
                    self.compositor.layer_at(mouse.column, mouse.row) == Some(self.layers.content);
                if on_content && self.cube_hit(mouse.column, mouse.row) {
                    self.orientation.pointer_down(
                        f32::from(mouse.column) * CELL_PX_X,
                        f32::from(mouse.row) * CELL_PX_Y,
                    );
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.orientation.is_dragging() {
                    if self.cube_hit(mouse.column, mouse.row) {
                        self.orientation.pointer_move(
                            f32::from(mouse.column) * CELL_PX_X,
                            f32::from(mouse.row) * CELL_PX_Y,
                        );
                    } else {
                        self.orientation.pointer_leave();
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.orientation.pointer_up(),
            _ => {}
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        let area = Rect::new(0, 0, width, height);
        let page = page_area(area);

        self.compositor.resize(area);
        self.compositor.move_layer(self.layers.backdrop, page.x, page.y);
        self.compositor.resize_layer(self.layers.backdrop, page.width, page.height);
        self.compositor.move_layer(self.layers.content, page.x, page.y);
        self.compositor.resize_layer(self.layers.content, page.width, page.height);
        let status = status_area(area);
        self.compositor.move_layer(self.layers.status, status.x, status.y);
        self.compositor.resize_layer(self.layers.status, status.width, status.height);
        self.compositor.resize_layer(self.layers.splash, width, height);

        self.rebuild_document();
        self.scroll = self.scroll.min(self.doc.max_scroll(page.height));
    }

    fn toggle_theme(&mut self) {
        match self.settings.toggle_theme() {
            Ok(mode) => {
                self.palette = Palette::for_mode(mode);
                self.rebuild_document();
                tracing::info!(theme = mode.as_str(), "theme toggled");
            }
            Err(err) => {
                tracing::warn!(%err, "could not persist theme");
            }
        }
    }

    fn rebuild_document(&mut self) {
        let page = page_area(self.screen());
        self.doc = Document::build(
            &self.content,
            &self.palette,
            page.width,
            page.height,
            Local::now().year(),
        );
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = self.doc.max_scroll(self.page_height());
        if let Some(next) = next_scroll(self.scroll, delta, max, self.intro_done) {
            self.scroll_activity.bump(if next > self.scroll {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            });
            self.scroll = next;
        }
    }

    fn scroll_to(&mut self, target: usize) {
        let max = self.doc.max_scroll(self.page_height());
        let next = target.min(max);
        if self.intro_done && next != self.scroll {
            self.scroll_activity.bump(if next > self.scroll {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            });
            self.scroll = next;
        }
    }

    fn screen(&self) -> Rect {
        Rect::new(0, 0, self.size.0, self.size.1)
    }

    fn page_height(&self) -> u16 {
        page_area(self.screen()).height
    }

    /// The cube viewport in screen coordinates, if any of it is on
    /// screen at the current scroll.
    fn cube_screen_top(&self) -> Option<i32> {
        let top = i32::from(self.doc.cube_view.y) - self.scroll as i32;
        let page_h = i32::from(self.page_height());
        (top + i32::from(CUBE_VIEW_HEIGHT) > 0 && top < page_h).then_some(top)
    }

    fn cube_hit(&self, column: u16, row: u16) -> bool {
        let Some(top) = self.cube_screen_top() else {
            return false;
        };
        let row = i32::from(row);
        if row < top || row >= top + i32::from(CUBE_VIEW_HEIGHT) {
            return false;
        }
        // Grab zone: the central band the cube actually occupies
        let center = i32::from(self.doc.cube_view.width) / 2;
        (i32::from(column) - center).abs() <= 22
    }

    /// Render the page.
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        self.render_backdrop();
        self.render_content();
        self.render_status();
        self.render_splash();

        let output = self.compositor.composite(self.palette.bg);
        terminal.draw(|frame| {
            frame.buffer_mut().merge(output);
        })?;

        Ok(())
    }

    fn render_backdrop(&mut self) {
        let palette = self.palette;
        let field = self.field.clone();
        let activity = &self.scroll_activity;
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.backdrop) {
            let area = buf.area;
            backdrop::render(buf, area, &field, activity, &palette);
        }
    }

    fn render_content(&mut self) {
        let rows = self.doc.rows();
        let hero_rows = self.doc.hero_rows.clone();
        let scroll = self.scroll;
        let hero_visible = self.hero_visible;
        let page_done = self.intro_done;

        // Cube orientation for this frame
        let pitch = self.orientation.pitch();
        let yaw = self.orientation.yaw_wrapped();
        let cube_top = self.cube_screen_top();
        let tuning = self.config.cube;
        let faces = self.content.cube.faces.clone();
        let palette = self.palette;

        let Some(buf) = self.compositor.layer_buffer_mut(self.layers.content) else {
            return;
        };
        buf.reset();
        let area = buf.area;

        for screen_row in 0..area.height {
            let doc_row = scroll + screen_row as usize;
            let Some(line) = rows.get(doc_row) else {
                break;
            };
            if hero_rows.contains(&doc_row) && !hero_visible {
                continue;
            }
            if !page_done && !hero_rows.contains(&doc_row) {
                continue;
            }
            buf.set_line(0, screen_row, line, area.width);
        }

        if page_done {
            if let Some(top) = cube_top {
                let mut scratch =
                    ratatui::buffer::Buffer::empty(Rect::new(0, 0, area.width, CUBE_VIEW_HEIGHT));
                let scratch_area = scratch.area;
                cube::render(
                    &mut scratch,
                    scratch_area,
                    pitch,
                    yaw,
                    &tuning,
                    &faces,
                    &palette,
                );
                blit_rows(buf, &scratch, top);
            }
        }
    }

    fn render_status(&mut self) {
        let palette = self.palette;
        let location = self.content.profile.location.clone();
        let clock = Local::now().format("%H:%M").to_string();
        let theme = self.settings.theme();
        let spinning = self.orientation.mode() == DriveMode::Auto;
        let scroll_pct = {
            let max = self.doc.max_scroll(self.page_height());
            if self.intro_done && max > 0 {
                Some(self.scroll * 100 / max)
            } else {
                None
            }
        };

        let Some(buf) = self.compositor.layer_buffer_mut(self.layers.status) else {
            return;
        };
        buf.reset();
        let area = buf.area;
        for x in 0..area.width {
            if let Some(cell) = buf.cell_mut((x, 0)) {
                cell.set_char(' ');
                cell.set_bg(palette.bg);
            }
        }

        let dim = Style::default().fg(palette.dim).bg(palette.bg);
        let faint = Style::default().fg(palette.faint).bg(palette.bg);
        let accent = Style::default().fg(palette.accent).bg(palette.bg);

        let mut x = 1;
        let mut put = |buf: &mut ratatui::buffer::Buffer, text: &str, style: Style| {
            buf.set_stringn(x, 0, text, (area.width.saturating_sub(x)) as usize, style);
            x += text.chars().count() as u16;
        };

        put(buf, icons::status::PIN, accent);
        put(buf, " ", dim);
        put(buf, &location, dim);
        put(buf, &format!(" {} {clock}", icons::sep::DOT), dim);
        put(
            buf,
            &format!(
                " {} {}",
                icons::sep::DOT,
                match theme {
                    ThemeMode::Light => "light",
                    ThemeMode::Dark => "dark",
                }
            ),
            dim,
        );
        put(
            buf,
            if spinning {
                icons::status::SPIN
            } else {
                icons::status::HELD
            },
            if spinning { accent } else { faint },
        );
        put(buf, "  t theme", faint);
        put(buf, &format!(" {} r spin", icons::sep::DOT), faint);
        put(buf, &format!(" {} q quit", icons::sep::DOT), faint);
        if let Some(pct) = scroll_pct {
            let tail = format!("{pct:>3}% {}", icons::nav::UP);
            let tail_x = area.width.saturating_sub(tail.chars().count() as u16 + 1);
            buf.set_string(tail_x, 0, tail, faint);
        }
    }

    fn render_splash(&mut self) {
        if self.intro_done {
            return;
        }
        let intro_state = &self.intro;
        let profile = self.content.profile.clone();
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.splash) {
            buf.reset();
            let area = buf.area;
            intro::render(buf, area, intro_state, &profile);
        }
    }
}

/// The scrollable page region: everything above the status row.
fn page_area(screen: Rect) -> Rect {
    Rect::new(
        screen.x,
        screen.y,
        screen.width,
        screen.height.saturating_sub(1),
    )
}

fn status_area(screen: Rect) -> Rect {
    Rect::new(
        screen.x,
        screen.y + screen.height.saturating_sub(1),
        screen.width,
        1,
    )
}

/// The next scroll offset for a requested delta. Scrolling is rejected
/// outright while the intro holds the page locked; within bounds moves
/// return the clamped offset, and no-ops return `None`.
fn next_scroll(current: usize, delta: i32, max: usize, unlocked: bool) -> Option<usize> {
    if !unlocked || delta == 0 {
        return None;
    }
    let next = (current as i64 + i64::from(delta)).clamp(0, max as i64) as usize;
    (next != current).then_some(next)
}

/// Copy a scratch buffer's inked rows into the content buffer at a
/// (possibly negative) vertical offset.
fn blit_rows(dst: &mut ratatui::buffer::Buffer, src: &ratatui::buffer::Buffer, top: i32) {
    for sy in 0..src.area.height {
        let dy = top + i32::from(sy);
        if dy < 0 || dy >= i32::from(dst.area.height) {
            continue;
        }
        for sx in 0..src.area.width {
            let Some(cell) = src.cell((sx, sy)) else {
                continue;
            };
            if cell.symbol() == " " && cell.bg == ratatui::style::Color::Reset {
                continue;
            }
            if let Some(target) = dst.cell_mut((sx, dy as u16)) {
                *target = cell.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_area_reserves_the_status_row() {
        let screen = Rect::new(0, 0, 100, 30);
        assert_eq!(page_area(screen).height, 29);
        assert_eq!(status_area(screen), Rect::new(0, 29, 100, 1));
    }

    #[test]
    fn blit_rows_clips_negative_offsets() {
        let mut dst = ratatui::buffer::Buffer::empty(Rect::new(0, 0, 10, 5));
        let mut src = ratatui::buffer::Buffer::empty(Rect::new(0, 0, 10, 4));
        src.set_string(0, 0, "aaaa", Style::default());
        src.set_string(0, 3, "bbbb", Style::default());

        blit_rows(&mut dst, &src, -3);
        assert_eq!(dst.cell((0, 0)).unwrap().symbol(), "b");
        assert_eq!(dst.cell((0, 1)).unwrap().symbol(), " ");
    }

    #[test]
    fn scroll_is_rejected_while_the_intro_holds_the_lock() {
        assert_eq!(next_scroll(0, 5, 100, false), None);
        assert_eq!(next_scroll(50, -10, 100, false), None);
    }

    #[test]
    fn scroll_clamps_to_the_document() {
        assert_eq!(next_scroll(0, 5, 100, true), Some(5));
        assert_eq!(next_scroll(2, -5, 100, true), Some(0));
        assert_eq!(next_scroll(98, 10, 100, true), Some(100));
        assert_eq!(next_scroll(0, -3, 100, true), None);
        assert_eq!(next_scroll(100, 3, 100, true), None);
    }

    #[test]
    fn status_row_never_overlaps_the_page() {
        for h in [2_u16, 10, 50] {
            let screen = Rect::new(0, 0, 80, h);
            let page = page_area(screen);
            let status = status_area(screen);
            assert_eq!(page.height + status.height, h);
            assert!(status.y >= page.y + page.height);
        }
    }
}
