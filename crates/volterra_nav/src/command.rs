use crate::routes::RouteTable;
use crate::symbol::{parse_market, ParsedSymbol};
use crate::view::ViewId;

/// What a command-bar submission means. Exactly one shape per non-empty
/// input, decided in precedence order: a lone route token, a symbol followed
/// by a route token, or a bare symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    PureCommand { token: String },
    SymbolPlusCommand { symbol_text: String, token: String },
    BareSymbol { symbol_text: String },
}

/// Parse raw command-bar text into an intent. Empty (after trimming) input
/// parses to `None`; the caller closes the bar without touching state.
pub fn parse(table: &RouteTable, raw: &str) -> Option<NavigationIntent> {
    let text = raw.trim().to_ascii_uppercase();
    if text.is_empty() {
        return None;
    }

    let parts: Vec<&str> = text.split_whitespace().collect();

    if parts.len() == 1 {
        if let Some(entry) = table.lookup(parts[0]) {
            return Some(NavigationIntent::PureCommand {
                token: entry.token.to_string(),
            });
        }
    } else if let Some(entry) = table.lookup(parts[parts.len() - 1]) {
        return Some(NavigationIntent::SymbolPlusCommand {
            symbol_text: parts[..parts.len() - 1].join(" "),
            token: entry.token.to_string(),
        });
    }

    Some(NavigationIntent::BareSymbol {
        symbol_text: parts.join(" "),
    })
}

/// The state transition an intent resolves to. `symbol` is `None` for pure
/// commands, which leave the current symbol untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavResolution {
    pub view: ViewId,
    pub tab: Option<String>,
    pub symbol: Option<ParsedSymbol>,
}

/// Resolve an intent against the route table. Infallible: parse only emits
/// tokens the table contains, and bare symbols route to the analyze
/// overview.
pub fn resolve(table: &RouteTable, intent: &NavigationIntent) -> NavResolution {
    match intent {
        NavigationIntent::PureCommand { token } => {
            let entry = route_for(table, token);
            NavResolution {
                view: entry.0,
                tab: entry.1,
                symbol: None,
            }
        }
        NavigationIntent::SymbolPlusCommand { symbol_text, token } => {
            let entry = route_for(table, token);
            NavResolution {
                view: entry.0,
                tab: entry.1,
                symbol: Some(parse_market(symbol_text)),
            }
        }
        NavigationIntent::BareSymbol { symbol_text } => NavResolution {
            view: ViewId::Analyze,
            tab: Some("overview".to_string()),
            symbol: Some(parse_market(symbol_text)),
        },
    }
}

fn route_for(table: &RouteTable, token: &str) -> (ViewId, Option<String>) {
    match table.lookup(token) {
        Some(entry) => (entry.view, entry.tab.map(str::to_string)),
        // Unreachable through parse(); fall back to the home view rather
        // than panic if a caller hand-builds an intent.
        None => (ViewId::Analyze, None),
    }
}
