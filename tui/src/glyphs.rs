//! Block letter font
//!
//! A tiny 3-row uppercase font built from half-block characters, used
//! for the splash and hero titles. Each glyph is a 3x3 cell pattern;
//! spaces inside a pattern are transparent so whatever sits behind the
//! title shows through.
//!
//! The splash renders the font in "wide" mode (every column doubled),
//! which is what gives the intro merge a real scale factor to animate:
//! wide title down onto the normal-width hero title is a 0.5x fit.

use ratatui::buffer::Buffer;
use ratatui::style::Style;

/// Rows per glyph.
pub const GLYPH_HEIGHT: u16 = 3;

/// Cell columns per glyph, before the inter-glyph gap.
pub const GLYPH_WIDTH: u16 = 3;

/// Pattern rows for one character. Unknown characters render as blanks
/// the size of a glyph, which reads as a gap.
#[must_use]
pub fn glyph_rows(c: char) -> [&'static str; 3] {
    match c.to_ascii_uppercase() {
        'A' => ["▄▀▄", "█▀█", "▀ ▀"],
        'B' => ["█▀▄", "█▀▄", "▀▀ "],
        'C' => ["▄▀▀", "█  ", "▀▀▀"],
        'D' => ["█▀▄", "█ █", "▀▀ "],
        'E' => ["█▀▀", "█▀ ", "▀▀▀"],
        'F' => ["█▀▀", "█▀ ", "▀  "],
        'G' => ["▄▀▀", "█ █", "▀▀█"],
        'H' => ["█ █", "█▀█", "▀ ▀"],
        'I' => [" █ ", " █ ", " ▀ "],
        'J' => ["▀▀█", "  █", "▀▀ "],
        'K' => ["█ █", "█▀▄", "▀ ▀"],
        'L' => ["█  ", "█  ", "▀▀▀"],
        'M' => ["█▄█", "█ █", "▀ ▀"],
        'N' => ["█▀█", "█ █", "▀ ▀"],
        'O' => ["▄▀▄", "█ █", " ▀ "],
        'P' => ["█▀▄", "█▀ ", "▀  "],
        'Q' => ["▄▀▄", "█▄█", " ▀▄"],
        'R' => ["█▀▄", "█▀▄", "▀ ▀"],
        'S' => ["▄▀▀", " ▀▄", "▀▀ "],
        'T' => ["▀█▀", " █ ", " ▀ "],
        'U' => ["█ █", "█ █", "▀▀▀"],
        'V' => ["█ █", "█ █", " ▀ "],
        'W' => ["█ █", "█▄█", "▀ ▀"],
        'X' => ["▀▄▀", " █ ", "▀ ▀"],
        'Y' => ["█ █", " █ ", " ▀ "],
        'Z' => ["▀▀█", "▄▀ ", "▀▀▀"],
        '-' => ["   ", "▀▀▀", "   "],
        '.' => ["   ", "   ", " ▀ "],
        _ => ["   ", "   ", "   "],
    }
}

/// Rendered width of a string in cells. Wide mode doubles every glyph
/// column and the inter-glyph gap.
#[must_use]
pub fn text_width(text: &str, wide: bool) -> u16 {
    let n = text.chars().count() as u16;
    if n == 0 {
        return 0;
    }
    let (glyph, gap) = if wide {
        (GLYPH_WIDTH * 2, 2)
    } else {
        (GLYPH_WIDTH, 1)
    };
    n * glyph + (n - 1) * gap
}

/// The three row strings for `text`, glyphs joined with their gap.
/// Used when the title is laid out as ordinary content rows.
#[must_use]
pub fn big_lines(text: &str, wide: bool) -> [String; 3] {
    let mut rows = [String::new(), String::new(), String::new()];
    for (i, c) in text.chars().enumerate() {
        let glyph = glyph_rows(c);
        for (row_idx, row) in rows.iter_mut().enumerate() {
            if i > 0 {
                row.push_str(if wide { "  " } else { " " });
            }
            for ch in glyph[row_idx].chars() {
                row.push(ch);
                if wide {
                    row.push(ch);
                }
            }
        }
    }
    rows
}

/// Paint `text` with its top-left corner at `(x, y)` in buffer
/// coordinates, clipping to the buffer. Pattern spaces are transparent.
pub fn draw_text(buf: &mut Buffer, x: i32, y: i32, text: &str, style: Style, wide: bool) {
    let area = buf.area;
    let mut pen_x = x;

    for c in text.chars() {
        let rows = glyph_rows(c);
        for (row_idx, row) in rows.iter().enumerate() {
            let cell_y = y + row_idx as i32;
            if cell_y < 0 || cell_y >= i32::from(area.height) {
                continue;
            }

            let mut col = 0_i32;
            for ch in row.chars() {
                let reps = if wide { 2 } else { 1 };
                for _ in 0..reps {
                    let cell_x = pen_x + col;
                    col += 1;
                    if ch == ' ' || cell_x < 0 || cell_x >= i32::from(area.width) {
                        continue;
                    }
                    if let Some(cell) =
                        buf.cell_mut((area.x + cell_x as u16, area.y + cell_y as u16))
                    {
                        cell.set_char(ch);
                        cell.set_style(style);
                    }
                }
            }
        }

        let advance = if wide {
            i32::from(GLYPH_WIDTH) * 2 + 2
        } else {
            i32::from(GLYPH_WIDTH) + 1
        };
        pen_x += advance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    #[test]
    fn every_glyph_is_three_by_three() {
        for c in ('A'..='Z').chain(['-', '.', ' ']) {
            for row in glyph_rows(c) {
                assert_eq!(row.chars().count(), 3, "glyph {c:?}");
            }
        }
    }

    #[test]
    fn width_math() {
        assert_eq!(text_width("", false), 0);
        assert_eq!(text_width("A", false), 3);
        assert_eq!(text_width("AB", false), 7);
        assert_eq!(text_width("A", true), 6);
        assert_eq!(text_width("AB", true), 14);
    }

    #[test]
    fn wide_is_exactly_double() {
        let text = "SIDDHARTH CHOUHAN";
        assert_eq!(text_width(text, true), text_width(text, false) * 2);
    }

    #[test]
    fn big_lines_match_width_math() {
        for wide in [false, true] {
            let rows = big_lines("FOLIO", wide);
            for row in rows {
                assert_eq!(row.chars().count() as u16, text_width("FOLIO", wide));
            }
        }
    }

    #[test]
    fn draw_clips_offscreen() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));
        // Partially off the left edge and below the bottom: no panic
        draw_text(&mut buf, -2, 1, "HI", Style::default(), false);
        draw_text(&mut buf, 0, 5, "HI", Style::default(), true);
    }

    #[test]
    fn draw_leaves_pattern_spaces_untouched() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 3));
        draw_text(&mut buf, 0, 0, "I", Style::default(), false);

        // 'I' column 0 is blank in every row
        for y in 0..3 {
            assert_eq!(buf.cell((0, y)).unwrap().symbol(), " ");
        }
        assert_eq!(buf.cell((1, 0)).unwrap().symbol(), "█");
    }
}
