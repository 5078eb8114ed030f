use crate::routes::RouteTable;
use crate::view::{nav_label_for_view, ViewId};

/// Maximum suggestions shown under the command bar.
const MAX_SUGGESTIONS: usize = 8;

/// One command-bar suggestion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub command: &'static str,
    pub view: ViewId,
    pub tab: Option<&'static str>,
}

/// Match the partial query against every route entry: substring match on the
/// token, the view id, or the tab name, case-insensitive. Results keep table
/// order, truncated to the first eight; there is no ranking. An empty query
/// suggests nothing.
pub fn suggest(table: &RouteTable, partial: &str) -> Vec<Suggestion> {
    let query = partial.trim().to_ascii_uppercase();
    if query.is_empty() {
        return Vec::new();
    }

    table
        .entries()
        .iter()
        .filter(|entry| {
            entry.token.contains(&query)
                || entry.view.as_str().to_ascii_uppercase().contains(&query)
                || entry
                    .tab
                    .is_some_and(|tab| tab.to_ascii_uppercase().contains(&query))
        })
        .take(MAX_SUGGESTIONS)
        .map(|entry| Suggestion {
            label: label_for(entry.view, entry.tab),
            command: entry.token,
            view: entry.view,
            tab: entry.tab,
        })
        .collect()
}

/// `"Analyze > options"` shape; tab dashes read as spaces. Views without a
/// nav item use their raw id.
fn label_for(view: ViewId, tab: Option<&'static str>) -> String {
    let base = nav_label_for_view(view);
    match tab {
        Some(tab) => format!("{} > {}", base, tab.replace('-', " ")),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new()
    }

    #[test]
    fn empty_query_suggests_nothing() {
        assert!(suggest(&table(), "").is_empty());
        assert!(suggest(&table(), "   ").is_empty());
    }

    #[test]
    fn token_substring_matches() {
        let results = suggest(&table(), "gree");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].command, "GREEKS");
        assert_eq!(results[0].label, "Analyze > greeks");
    }

    #[test]
    fn view_name_matches_case_insensitively() {
        // "portfolio" matches PORT, ALERTS and PAPER through the view id.
        let results = suggest(&table(), "portfolio");
        let commands: Vec<&str> = results.iter().map(|s| s.command).collect();
        assert_eq!(commands, vec!["PORT", "ALERTS", "PAPER"]);
    }

    #[test]
    fn tab_matches_and_dashes_become_spaces() {
        let results = suggest(&table(), "paper-tr");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, "Portfolio > paper trading");
    }

    #[test]
    fn settings_label_falls_back_to_view_id() {
        let results = suggest(&table(), "SET");
        assert!(results.iter().any(|s| s.label == "settings"));
    }

    #[test]
    fn results_are_capped_and_in_table_order() {
        // "a" appears in analyze/dashboard/watchlist and several tabs;
        // more than eight entries match.
        let matching = table()
            .entries()
            .iter()
            .filter(|e| {
                e.token.contains('A')
                    || e.view.as_str().to_ascii_uppercase().contains('A')
                    || e.tab.is_some_and(|t| t.to_ascii_uppercase().contains('A'))
            })
            .count();
        assert!(matching > 8, "test premise: {} matches", matching);

        let results = suggest(&table(), "a");
        assert_eq!(results.len(), 8);
        let order: Vec<usize> = results
            .iter()
            .map(|s| {
                table()
                    .entries()
                    .iter()
                    .position(|e| e.token == s.command)
                    .unwrap()
            })
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }
}
