use crate::view::Market;

/// A ticker with the market inferred from its suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSymbol {
    pub symbol: String,
    pub market: Market,
}

/// Infer the market from a raw symbol string. Total; anything unrecognized
/// stays US with the text as-is. Rules apply to the upper-cased trimmed
/// input, first match wins, at most one suffix is stripped:
///
/// 1. trailing `" JP"` or `".T"` -> JP, suffix removed
/// 2. trailing `" HK"` (removed), or the whole text being 4-5 digits -> HK
/// 3. trailing `" US"` -> US, suffix removed
/// 4. otherwise US, unchanged
///
/// Bare 4-5 digit inputs are always read as HK board lots, even for US
/// numeric-looking tickers; callers wanting something else must suffix the
/// market explicitly.
pub fn parse_market(raw: &str) -> ParsedSymbol {
    let text = raw.trim().to_ascii_uppercase();

    if let Some(stripped) = text.strip_suffix(" JP").or_else(|| text.strip_suffix(".T")) {
        return ParsedSymbol {
            symbol: stripped.trim_end().to_string(),
            market: Market::Jp,
        };
    }

    if let Some(stripped) = text.strip_suffix(" HK") {
        return ParsedSymbol {
            symbol: stripped.trim_end().to_string(),
            market: Market::Hk,
        };
    }
    if is_bare_hk_digits(&text) {
        return ParsedSymbol {
            symbol: text,
            market: Market::Hk,
        };
    }

    if let Some(stripped) = text.strip_suffix(" US") {
        return ParsedSymbol {
            symbol: stripped.trim_end().to_string(),
            market: Market::Us,
        };
    }

    ParsedSymbol {
        symbol: text,
        market: Market::Us,
    }
}

fn is_bare_hk_digits(text: &str) -> bool {
    (4..=5).contains(&text.len()) && text.bytes().all(|b| b.is_ascii_digit())
}
