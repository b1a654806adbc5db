//! Multi-criteria ranking of rate quotes: cheapest, fastest, best value.
//!
//! Pure and stateless: a batch of quotes goes in, the same quotes come out
//! annotated with at most one tag each, plus named references to the three
//! decision-relevant picks. No ranking state survives across requests.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use vivarium_core::{QuoteTag, ShippingQuote};

/// Matches a day count in the provider's free-text delivery estimate,
/// e.g. "2 days", "1 day", "2-3 days" (the trailing bound wins there,
/// matching how the pattern anchors on "day").
static DAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Pattern is a literal; cannot fail at runtime.
    Regex::new(r"(?i)(\d+)[\s-]*day").expect("day pattern is valid")
});

/// Parsed delivery speed for one quote.
///
/// The provider's `estimatedDelivery` text has no guaranteed format, so
/// parsing is intentionally lossy: anything without a recognizable day
/// count is `Unparsed`, which orders as worst (999 days) rather than being
/// conflated with a merely slow service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryEstimate {
    /// A day count was recognized in the text.
    Days(u32),
    /// No day count could be extracted (date ranges, "Unknown", etc.).
    Unparsed,
}

impl DeliveryEstimate {
    /// Sentinel day count for unparseable estimates.
    pub const UNPARSED_DAYS: u32 = 999;

    /// Day count used for ordering; `Unparsed` counts as 999.
    #[must_use]
    pub const fn effective_days(self) -> u32 {
        match self {
            Self::Days(days) => days,
            Self::Unparsed => Self::UNPARSED_DAYS,
        }
    }
}

/// Extract a delivery-day count from the provider's free text.
#[must_use]
pub fn parse_delivery_days(text: &str) -> DeliveryEstimate {
    DAY_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
        .map_or(DeliveryEstimate::Unparsed, DeliveryEstimate::Days)
}

/// A quote with its (at most one) ranking tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedQuote {
    #[serde(flatten)]
    pub quote: ShippingQuote,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<QuoteTag>,
}

/// The ranked batch: tagged quotes plus the three named picks.
///
/// Any of the named references may be `None` - all three on an empty
/// batch, best-value whenever the batch has fewer than three quotes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedQuotes {
    pub quotes: Vec<RankedQuote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheapest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest: Option<String>,
    #[serde(rename = "bestValue", skip_serializing_if = "Option::is_none")]
    pub best_value: Option<String>,
}

impl RankedQuotes {
    /// Whether a user-selected quote falls outside the three named picks.
    ///
    /// Display concern only; marking a selection custom never mutates the
    /// ranking.
    #[must_use]
    pub fn is_custom_selection(&self, quote_id: &str) -> bool {
        ![&self.cheapest, &self.fastest, &self.best_value]
            .into_iter()
            .flatten()
            .any(|id| id == quote_id)
    }
}

/// Rank a batch of quotes.
///
/// - **Cheapest**: minimum price, first occurrence on ties.
/// - **Fastest**: minimum parsed delivery days, first occurrence on ties.
/// - **Best value**: `None` when the batch has fewer than three quotes.
///   Otherwise, among quotes that are neither cheapest nor fastest, the
///   one minimizing `price / (10 - min(days, 9))`. The clamp keeps the
///   divisor positive for slow and unparseable estimates. (An alternate
///   `price * days` formula exists in the wild; this crate pins the ratio
///   form - see the regression test.)
///
/// Tags are mutually exclusive with precedence
/// Cheapest > Fastest > BestValue.
#[must_use]
pub fn rank_quotes(quotes: Vec<ShippingQuote>) -> RankedQuotes {
    let cheapest_idx = index_of_min_by(&quotes, |quote| quote.price);
    let fastest_idx = index_of_min_by(&quotes, |quote| {
        parse_delivery_days(&quote.estimated_delivery).effective_days()
    });

    let best_value_idx = if quotes.len() < 3 {
        None
    } else {
        quotes
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != cheapest_idx && Some(*idx) != fastest_idx)
            .map(|(idx, quote)| (idx, price_speed_ratio(quote)))
            .reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best })
            .map(|(idx, _)| idx)
    };

    let id_at = |idx: Option<usize>| idx.and_then(|i| quotes.get(i)).map(|q| q.id.clone());
    let cheapest = id_at(cheapest_idx);
    let fastest = id_at(fastest_idx);
    let best_value = id_at(best_value_idx);

    let quotes = quotes
        .into_iter()
        .enumerate()
        .map(|(idx, quote)| {
            let tag = if Some(idx) == cheapest_idx {
                Some(QuoteTag::Cheapest)
            } else if Some(idx) == fastest_idx {
                Some(QuoteTag::Fastest)
            } else if Some(idx) == best_value_idx {
                Some(QuoteTag::BestValue)
            } else {
                None
            };
            RankedQuote { quote, tag }
        })
        .collect();

    RankedQuotes {
        quotes,
        cheapest,
        fastest,
        best_value,
    }
}

/// Index of the minimum by `key`, first occurrence winning ties.
fn index_of_min_by<K: PartialOrd>(
    quotes: &[ShippingQuote],
    key: impl Fn(&ShippingQuote) -> K,
) -> Option<usize> {
    quotes
        .iter()
        .enumerate()
        .map(|(idx, quote)| (idx, key(quote)))
        .reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best })
        .map(|(idx, _)| idx)
}

/// Lower is better: rewards both low price and low day count. Day counts
/// are clamped at 9 so the divisor stays in `1..=10` and never flips sign.
fn price_speed_ratio(quote: &ShippingQuote) -> Decimal {
    let days = parse_delivery_days(&quote.estimated_delivery).effective_days();
    let divisor = 10 - days.min(9);
    quote.price / Decimal::from(divisor)
}
