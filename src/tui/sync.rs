//! Keeps the outline selection and the content scroll offset consistent.
//!
//! Two conversions bind them: a heading selection moves the viewport
//! ([`jump_to_heading`]) and a scroll position picks the current heading
//! ([`sync_current_heading`]). Both fall back to a linear ratio between raw and
//! rendered line counts, which is only an approximation for documents whose
//! sections render to very different heights.

use super::outline::OutlineState;

/// Context lines kept above a heading after jumping to it, like Vim's `scrolloff`.
pub const SCROLL_OFF: usize = 5;

/// What the outline needs from the content viewport.
pub trait ScrollView {
    fn offset(&self) -> usize;
    fn total_lines(&self) -> usize;
    fn view_height(&self) -> usize;
    fn set_offset(&mut self, offset: usize);
}

/// Scroll `view` so the heading at `index` sits `scroll_off` lines from the top.
///
/// Out-of-range indices are ignored. Returns whether the jump happened.
pub fn jump_to_heading(
    outline: &mut OutlineState,
    view: &mut impl ScrollView,
    raw_lines: usize,
    index: usize,
    scroll_off: usize,
) -> bool {
    let Some(heading) = outline.headings().get(index) else {
        return false;
    };

    let total = view.total_lines();
    let target_line = heading
        .rendered_line
        .unwrap_or_else(|| ratio_line(heading.line, raw_lines, total));

    let max_offset = total.saturating_sub(view.view_height());
    let offset = target_line.saturating_sub(scroll_off).min(max_offset);

    view.set_offset(offset);
    outline.select(index, offset);
    log::debug!(
        "jumped to heading {} (target line {}, offset {})",
        index,
        target_line,
        offset
    );
    true
}

/// Point the outline's current heading at the heading shown at the top of `view`.
///
/// Returns whether the current heading changed.
pub fn sync_current_heading(
    outline: &mut OutlineState,
    view: &impl ScrollView,
    raw_lines: usize,
) -> bool {
    if outline.headings().is_empty() {
        return false;
    }
    if outline.is_anchored_at(view.offset()) {
        return false;
    }

    let total = view.total_lines();
    if total == 0 {
        return false;
    }

    let raw_line = ratio_line(view.offset(), total, raw_lines);
    outline.update_current(raw_line)
}

/// Scale `line` from a space of `from_total` lines to one of `to_total` lines.
fn ratio_line(line: usize, from_total: usize, to_total: usize) -> usize {
    if from_total == 0 {
        return 0;
    }
    (line as f64 / from_total as f64 * to_total as f64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::viewport::Viewport;

    fn viewport(content: &str, height: u16) -> Viewport {
        let mut vp = Viewport::new(80, height);
        vp.set_content(content);
        vp
    }

    fn filler(n: usize) -> String {
        "More content\n".repeat(n)
    }

    #[test]
    fn test_jump_uses_rendered_line() {
        let body = "# H1\nLine 1\nLine 2\n## H2\nLine 3\nLine 4\n### H3\nLine 5";
        let rendered = format!(
            "Rendered H1\nLine 1\nLine 2\n{}Rendered H2\nLine 3\nLine 4\n{}Rendered H3\nLine 5\n{}",
            filler(10),
            filler(10),
            filler(30)
        );
        let mut outline = OutlineState::new();
        outline.set_content(body);
        outline.map_rendered_lines(&rendered);
        let mut vp = viewport(&rendered, 10);

        assert!(jump_to_heading(&mut outline, &mut vp, 8, 1, SCROLL_OFF));
        assert_eq!(vp.offset(), 13 - SCROLL_OFF);
        assert_eq!(outline.current(), 1);
        assert_eq!(outline.cursor(), 1);
    }

    #[test]
    fn test_jump_near_top_clamps_to_zero() {
        let mut outline = OutlineState::new();
        outline.set_content("# H1\n## H2");
        outline.map_rendered_lines(&format!("H1\nH2\n{}", filler(40)));
        let mut vp = viewport(&format!("H1\nH2\n{}", filler(40)), 10);

        assert!(jump_to_heading(&mut outline, &mut vp, 2, 1, SCROLL_OFF));
        assert_eq!(vp.offset(), 0);
        assert_eq!(outline.current(), 1);
    }

    #[test]
    fn test_jump_clamps_to_last_page() {
        let mut outline = OutlineState::new();
        outline.set_content("# H1\n## End");
        let rendered = format!("H1\n{}End", filler(20));
        outline.map_rendered_lines(&rendered);
        let mut vp = viewport(&rendered, 10);

        jump_to_heading(&mut outline, &mut vp, 2, 1, 0);
        assert_eq!(vp.offset(), vp.total_lines() - 10);
    }

    #[test]
    fn test_jump_out_of_range_changes_nothing() {
        let mut outline = OutlineState::new();
        outline.set_content("# H1\n## H2");
        let mut vp = viewport(&filler(40), 10);
        vp.set_offset(7);

        assert!(!jump_to_heading(&mut outline, &mut vp, 2, 2, SCROLL_OFF));
        assert!(!jump_to_heading(&mut outline, &mut vp, 2, 100, SCROLL_OFF));
        assert_eq!(vp.offset(), 7);
        assert_eq!(outline.current(), 0);
        assert_eq!(outline.cursor(), 0);
    }

    #[test]
    fn test_jump_with_no_headings() {
        let mut outline = OutlineState::new();
        outline.set_content("");
        let mut vp = viewport(&filler(5), 10);
        assert!(!jump_to_heading(&mut outline, &mut vp, 1, 0, SCROLL_OFF));
    }

    #[test]
    fn test_jump_falls_back_to_ratio() {
        let body = format!("# H1\n{}## H2 at end", "Line\n".repeat(50));
        let mut outline = OutlineState::new();
        outline.set_content(&body);
        let mut vp = viewport(&"Content line\n".repeat(100), 30);

        // H2 is raw line 51 of 52; 51/52 of 101 rendered lines is line 99.
        assert!(jump_to_heading(&mut outline, &mut vp, 52, 1, SCROLL_OFF));
        assert_eq!(outline.current(), 1);
        assert_eq!(vp.offset(), vp.total_lines() - 30);
    }

    #[test]
    fn test_sync_uses_inverse_ratio() {
        let mut outline = OutlineState::new();
        outline.set_content("# H1\ntext\n## H2\nmore text\n### H3\nend");
        let mut vp = viewport(&filler(60), 10);

        vp.set_offset(0);
        sync_current_heading(&mut outline, &vp, 6);
        assert_eq!(outline.current(), 0);

        // offset 21 of 61 rendered lines ~ raw line 2
        vp.set_offset(21);
        assert!(sync_current_heading(&mut outline, &vp, 6));
        assert_eq!(outline.current(), 1);

        vp.set_offset(45);
        sync_current_heading(&mut outline, &vp, 6);
        assert_eq!(outline.current(), 2);
    }

    #[test]
    fn test_sync_on_empty_view_is_noop() {
        let mut outline = OutlineState::new();
        outline.set_content("# H1\n## H2");
        let vp = Viewport::new(80, 10);
        assert!(!sync_current_heading(&mut outline, &vp, 2));
    }

    #[test]
    fn test_jump_then_sync_round_trip() {
        let body = "# Intro\n\n## Usage\n\n### Flags\n\n## FAQ\n";
        let rendered = format!(
            "  Intro\n{}  Usage\n{}  Flags\n{}  FAQ\n{}",
            filler(3),
            filler(25),
            filler(2),
            filler(40)
        );
        let mut outline = OutlineState::new();
        outline.set_content(body);
        outline.map_rendered_lines(&rendered);
        assert!(outline.headings().iter().all(|h| h.rendered_line.is_some()));
        let mut vp = viewport(&rendered, 10);
        let raw_lines = crate::parser::raw_line_count(body);

        for index in 0..outline.headings().len() {
            jump_to_heading(&mut outline, &mut vp, raw_lines, index, SCROLL_OFF);
            sync_current_heading(&mut outline, &vp, raw_lines);
            assert_eq!(outline.current(), index, "round trip for heading {}", index);
        }
    }

    #[test]
    fn test_scrolling_after_jump_resumes_ratio() {
        let mut outline = OutlineState::new();
        outline.set_content("# H1\ntext\n## H2\nmore text\n### H3\nend");
        let rendered = format!("H1\n{}H2\n{}H3\n{}", filler(20), filler(20), filler(20));
        outline.map_rendered_lines(&rendered);
        let mut vp = viewport(&rendered, 10);

        jump_to_heading(&mut outline, &mut vp, 6, 2, SCROLL_OFF);
        assert_eq!(outline.current(), 2);

        vp.goto_top();
        assert!(sync_current_heading(&mut outline, &vp, 6));
        assert_eq!(outline.current(), 0);
    }
}
