//! Page composition — the whole portfolio as a flat list of styled lines.
//!
//! Sections, top to bottom:
//! - Hero: name, headline, contact links
//! - Stats: animated counters
//! - Skills: "Technical Expertise" cards
//! - Timeline: "Professional Journey" entries
//! - Footer: copyright line and contact links
//!
//! Composition is pure: it reads `AppState` and the viewport width and
//! records anchors (first line of each section and card) for scrolling.

pub mod footer;
pub mod hero;
pub mod skills;
pub mod stats;
pub mod timeline;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::{AppState, Focus};

/// First line of each section and of each card, in page coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchors {
    pub about: u16,
    pub stats: u16,
    pub skills: u16,
    pub experience: u16,
    pub footer: u16,
    pub skill_cards: Vec<u16>,
    pub timeline: Vec<u16>,
    /// The "Show More / Show Less" line of each timeline entry.
    pub timeline_toggles: Vec<u16>,
}

impl Anchors {
    /// Skill card or timeline entry covering a page line. A card runs from
    /// its first line up to the next card or the end of its section.
    pub fn element_at(&self, line: u16) -> Option<Focus> {
        if (self.skills..self.experience).contains(&line) {
            return self
                .skill_cards
                .iter()
                .rposition(|&start| start <= line)
                .map(Focus::Skill);
        }
        if (self.experience..self.footer).contains(&line) {
            return self
                .timeline
                .iter()
                .rposition(|&start| start <= line)
                .map(Focus::Timeline);
        }
        None
    }

    /// Timeline entry whose toggle sits on a page line.
    pub fn toggle_at(&self, line: u16) -> Option<usize> {
        self.timeline_toggles.iter().position(|&l| l == line)
    }
}

pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub anchors: Anchors,
}

impl Page {
    pub fn total_lines(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

pub fn compose(app: &AppState, width: u16) -> Page {
    let mut b = PageBuilder::new(width);
    let mut anchors = Anchors {
        about: b.mark(),
        ..Anchors::default()
    };
    hero::compose(&mut b, app);
    anchors.stats = b.mark();
    stats::compose(&mut b, app);
    anchors.skills = b.mark();
    anchors.skill_cards = skills::compose(&mut b, app);
    anchors.experience = b.mark();
    timeline::compose(&mut b, app, &mut anchors);
    anchors.footer = b.mark();
    footer::compose(&mut b, app);

    Page {
        lines: b.lines,
        anchors,
    }
}

/// Accumulates lines at a fixed width.
pub struct PageBuilder {
    lines: Vec<Line<'static>>,
    width: usize,
}

impl PageBuilder {
    pub fn new(width: u16) -> Self {
        Self {
            lines: Vec::new(),
            width: usize::from(width.max(1)),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Index the next pushed line will get.
    pub fn mark(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// A line whose background is padded out to the full width.
    pub fn filled(&mut self, mut spans: Vec<Span<'static>>, style: Style) {
        let used: usize = spans.iter().map(Span::width).sum();
        if used < self.width {
            spans.push(Span::raw(" ".repeat(self.width - used)));
        }
        self.lines.push(Line::from(spans).style(style));
    }

    /// Section heading with an underline.
    pub fn heading(&mut self, title: &str) {
        self.blank();
        self.push(Line::from(Span::styled(format!("  {title}"), crate::theme::title())));
        self.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.chars().count())),
            crate::theme::accent(),
        )));
        self.blank();
    }

    /// Word-wrapped text behind a prefix repeated on every line.
    pub fn wrapped(&mut self, prefix: &[Span<'static>], text: &str, style: Style) {
        self.hanging(prefix, prefix, text, style);
    }

    /// Word-wrapped text with one prefix for the first line and another for
    /// the rest (bullets).
    pub fn hanging(
        &mut self,
        first: &[Span<'static>],
        rest: &[Span<'static>],
        text: &str,
        style: Style,
    ) {
        let prefix_width = first
            .iter()
            .map(Span::width)
            .sum::<usize>()
            .max(rest.iter().map(Span::width).sum());
        let avail = self.width.saturating_sub(prefix_width).max(1);
        for (i, chunk) in wrap(text, avail).into_iter().enumerate() {
            let mut spans = if i == 0 { first.to_vec() } else { rest.to_vec() };
            spans.push(Span::styled(chunk, style));
            self.push(Line::from(spans));
        }
    }

    /// Chips (` item `) packed greedily behind a prefix.
    pub fn chips(&mut self, prefix: &[Span<'static>], items: &[String], style: Style) {
        let prefix_width: usize = prefix.iter().map(Span::width).sum();
        let avail = self.width.saturating_sub(prefix_width).max(1);
        let mut spans = prefix.to_vec();
        let mut used = 0;
        for item in items {
            let chip = format!(" {item} ");
            let w = chip.chars().count();
            let sep = usize::from(used > 0);
            if used > 0 && used + sep + w > avail {
                self.push(Line::from(std::mem::replace(&mut spans, prefix.to_vec())));
                used = 0;
            }
            if used > 0 {
                spans.push(Span::raw(" "));
                used += 1;
            }
            spans.push(Span::styled(chip, style));
            used += w;
        }
        if used > 0 {
            self.push(Line::from(spans));
        }
    }

    /// Centered text.
    pub fn centered(&mut self, spans: Vec<Span<'static>>) {
        let used: usize = spans.iter().map(Span::width).sum();
        let left = self.width.saturating_sub(used) / 2;
        let mut line = vec![Span::raw(" ".repeat(left))];
        line.extend(spans);
        self.push(Line::from(line));
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            out.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            out.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }
    if current_len > 0 || out.is_empty() {
        out.push(current);
    }
    out
}

/// Plain text of a line, for tests and lookups.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::loader::ProfileSource;
    use folio_core::{Profile, Settings};

    fn app() -> AppState {
        AppState::new(Profile::builtin(), ProfileSource::Builtin, Settings::default())
    }

    fn texts(page: &Page) -> Vec<String> {
        page.lines.iter().map(line_text).collect()
    }

    fn count(page: &Page, needle: &str) -> usize {
        texts(page).iter().filter(|l| l.contains(needle)).count()
    }

    #[test]
    fn wrap_basics() {
        assert_eq!(wrap("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("one two", 100), vec!["one two"]);
    }

    #[test]
    fn wrap_respects_width() {
        let text = "Designed and developed PlasmaENGINE - 100x faster than market competitors";
        for width in 1..40 {
            assert!(wrap(text, width).iter().all(|l| l.chars().count() <= width));
        }
    }

    #[test]
    fn anchors_are_ordered() {
        let page = compose(&app(), 80);
        let a = &page.anchors;
        assert_eq!(a.about, 0);
        assert!(a.about < a.stats);
        assert!(a.stats < a.skills);
        assert!(a.skills < a.experience);
        assert!(a.experience < a.footer);
        assert_eq!(a.skill_cards.len(), 6);
        assert_eq!(a.timeline.len(), 3);
        assert!(a.timeline.windows(2).all(|w| w[0] < w[1]));
        assert!(usize::from(a.footer) < page.lines.len());
    }

    #[test]
    fn toggle_anchors_point_at_toggles() {
        let page = compose(&app(), 80);
        let a = &page.anchors;
        assert_eq!(a.timeline_toggles.len(), 3);
        for (i, &line) in a.timeline_toggles.iter().enumerate() {
            assert!(line_text(&page.lines[usize::from(line)]).contains("[ Show More ]"));
            assert_eq!(a.toggle_at(line), Some(i));
        }
        assert_eq!(a.toggle_at(a.about), None);
    }

    #[test]
    fn element_at_maps_lines_to_cards_and_entries() {
        let page = compose(&app(), 80);
        let a = &page.anchors;
        assert_eq!(a.element_at(a.about), None);
        assert_eq!(a.element_at(a.skill_cards[0]), Some(Focus::Skill(0)));
        assert_eq!(a.element_at(a.skill_cards[2] + 1), Some(Focus::Skill(2)));
        assert_eq!(a.element_at(a.timeline[1]), Some(Focus::Timeline(1)));
        assert_eq!(a.element_at(a.timeline_toggles[2]), Some(Focus::Timeline(2)));
        assert_eq!(a.element_at(a.footer), None);
    }

    #[test]
    fn collapsed_page_shows_no_details() {
        let page = compose(&app(), 100);
        assert_eq!(count(&page, "Show More"), 3);
        assert_eq!(count(&page, "Show Less"), 0);
        assert_eq!(count(&page, "Key Achievements"), 0);
        assert_eq!(count(&page, "Technologies Used"), 0);
        assert_eq!(count(&page, "Tradeware Systems LLC"), 1);
    }

    #[test]
    fn expanded_entry_shows_its_lists() {
        let mut app = app();
        app.timeline[2].toggle();
        let page = compose(&app, 200);
        assert_eq!(count(&page, "Show Less"), 1);
        assert_eq!(count(&page, "Key Achievements"), 1);
        assert_eq!(count(&page, "Technologies Used"), 1);
        assert_eq!(count(&page, "•"), 4);
        assert!(texts(&page).iter().any(|l| l.contains(" Infrastructure Design ")));
    }

    #[test]
    fn missing_technologies_omit_heading() {
        let mut profile = Profile::builtin();
        profile.timeline[0].technologies = None;
        profile.timeline[0].achievements.clear();
        let mut app = AppState::new(profile, ProfileSource::Builtin, Settings::default());
        app.timeline[0].toggle();
        let page = compose(&app, 100);
        assert_eq!(count(&page, "Key Achievements"), 1);
        assert_eq!(count(&page, "Technologies Used"), 0);
        assert_eq!(count(&page, "•"), 0);
    }

    #[test]
    fn stats_show_counter_values_with_plus() {
        let mut app = app();
        app.tick(folio_core::FrameTime::from_millis(0));
        app.tick(folio_core::FrameTime::from_millis(5000));
        let page = compose(&app, 100);
        let all = texts(&page).join("\n");
        for v in ["25+", "100+", "3+", "50+"] {
            assert!(all.contains(v), "missing {v}");
        }
        assert!(all.contains("Million $ Raised"));
    }

    #[test]
    fn narrow_page_stacks_stats() {
        let page = compose(&app(), 30);
        let all = texts(&page);
        assert!(all.iter().any(|l| l.contains("0+") && l.contains("Years Experience")));
    }

    #[test]
    fn footer_has_copyright_and_contacts() {
        let page = compose(&app(), 80);
        let footer: Vec<String> = texts(&page)
            .into_iter()
            .skip(usize::from(page.anchors.footer))
            .collect();
        assert!(footer.iter().any(|l| l.contains("Alen Capalik. All rights reserved.")));
        assert!(footer.iter().any(|l| l.contains("alen@wiretap.net") && l.contains("LinkedIn")));
        assert!(!footer.iter().any(|l| l.contains("310-310-9973")));
    }

    #[test]
    fn focused_toggle_is_highlighted() {
        let mut app = app();
        app.set_focus(Some(Focus::Timeline(0)));
        let page = compose(&app, 80);
        let toggle = page
            .lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.content.contains("Show More"))
            .unwrap();
        assert!(toggle.style.add_modifier.contains(ratatui::style::Modifier::REVERSED));
    }

    #[test]
    fn chips_wrap_to_width() {
        let mut b = PageBuilder::new(20);
        let items: Vec<String> = ["Kubernetes", "Docker", "AWS", "Oracle Cloud"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        b.chips(&[Span::raw("  ")], &items, Style::default());
        assert!(b.lines.len() >= 2);
        assert!(b.lines.iter().all(|l| l.width() <= 20));
    }
}
