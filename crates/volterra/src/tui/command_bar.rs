//! Command bar editing state.

use volterra_nav::{suggest, RouteTable, Suggestion};

/// Text input and suggestion list for the command bar. Visibility lives on
/// `DashboardState`; this is only the editing surface.
#[derive(Debug, Default)]
pub struct CommandBarState {
    pub input: String,
    /// Cursor position in the input (character index)
    pub cursor: usize,
    pub suggestions: Vec<Suggestion>,
    /// Highlighted suggestion, if the user has arrowed into the list
    pub selected: Option<usize>,
}

impl CommandBarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a fresh open.
    pub fn open(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.suggestions.clear();
        self.selected = None;
    }

    pub fn close(&mut self) {
        self.open();
    }

    /// The text a submit should act on: the highlighted suggestion's command
    /// if the user arrowed into the list, otherwise the raw input.
    pub fn submission(&self) -> String {
        match self.selected.and_then(|idx| self.suggestions.get(idx)) {
            Some(suggestion) => suggestion.command.to_string(),
            None => self.input.clone(),
        }
    }

    pub fn insert_char(&mut self, table: &RouteTable, c: char) {
        let at = self.byte_offset();
        self.input.insert(at, c);
        self.cursor += 1;
        self.refresh_suggestions(table);
    }

    pub fn backspace(&mut self, table: &RouteTable) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset();
            self.input.remove(at);
            self.refresh_suggestions(table);
        }
    }

    pub fn delete(&mut self, table: &RouteTable) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset();
            self.input.remove(at);
            self.refresh_suggestions(table);
        }
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.suggestions.clear();
        self.selected = None;
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Byte position of the cursor; `cursor` counts characters, so edits on
    /// multi-byte input stay on char boundaries.
    fn byte_offset(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }

    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx + 1 < self.suggestions.len() => idx + 1,
            Some(idx) => idx,
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx > 0 => idx - 1,
            _ => 0,
        });
    }

    /// Recompute suggestions from scratch; any edit invalidates the
    /// highlighted row.
    fn refresh_suggestions(&mut self, table: &RouteTable) {
        self.suggestions = suggest(table, &self.input);
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> (CommandBarState, RouteTable) {
        let table = RouteTable::new();
        let mut bar = CommandBarState::new();
        for c in text.chars() {
            bar.insert_char(&table, c);
        }
        (bar, table)
    }

    #[test]
    fn typing_updates_suggestions() {
        let (bar, _) = typed("gre");
        assert_eq!(bar.suggestions.len(), 1);
        assert_eq!(bar.suggestions[0].command, "GREEKS");
        assert_eq!(bar.cursor, 3);
    }

    #[test]
    fn submission_prefers_the_highlighted_suggestion() {
        let (mut bar, _) = typed("portfolio");
        assert_eq!(bar.submission(), "portfolio");

        bar.select_next();
        assert_eq!(bar.submission(), "PORT");
        bar.select_next();
        assert_eq!(bar.submission(), "ALERTS");
    }

    #[test]
    fn editing_clears_the_highlight() {
        let (mut bar, table) = typed("port");
        bar.select_next();
        assert!(bar.selected.is_some());

        bar.insert_char(&table, 'f');
        assert_eq!(bar.selected, None);
        assert_eq!(bar.submission(), "portf");
    }

    #[test]
    fn backspace_and_delete_edit_at_the_cursor() {
        let (mut bar, table) = typed("dash");
        bar.cursor_left();
        bar.cursor_left();
        bar.backspace(&table);
        assert_eq!(bar.input, "dsh");
        assert_eq!(bar.cursor, 1);

        bar.delete(&table);
        assert_eq!(bar.input, "dh");
    }

    #[test]
    fn selection_stops_at_the_ends() {
        let (mut bar, _) = typed("gre");
        bar.select_prev();
        assert_eq!(bar.selected, Some(0));
        bar.select_next();
        bar.select_next();
        assert_eq!(bar.selected, Some(0));
    }

    #[test]
    fn typing_after_a_multibyte_character_appends() {
        let (bar, _) = typed("éx");
        assert_eq!(bar.input, "éx");
        assert_eq!(bar.cursor, 2);
    }

    #[test]
    fn multibyte_input_edits_at_char_boundaries() {
        let (mut bar, table) = typed("é9");
        bar.cursor_left();
        bar.insert_char(&table, '½');
        assert_eq!(bar.input, "é½9");
        assert_eq!(bar.cursor, 2);

        bar.backspace(&table);
        assert_eq!(bar.input, "é9");
        assert_eq!(bar.cursor, 1);

        bar.delete(&table);
        assert_eq!(bar.input, "é");

        bar.cursor_end();
        assert_eq!(bar.cursor, 1);
        bar.cursor_right();
        assert_eq!(bar.cursor, 1);
    }

    #[test]
    fn open_resets_everything() {
        let (mut bar, _) = typed("scan");
        bar.select_next();
        bar.open();
        assert!(bar.input.is_empty());
        assert!(bar.suggestions.is_empty());
        assert_eq!(bar.selected, None);
        assert_eq!(bar.cursor, 0);
    }
}
