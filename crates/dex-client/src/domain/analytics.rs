//! The paginated transactions table of the analytics pages.

use {
    bigdecimal::BigDecimal,
    chrono::{DateTime, Utc},
    itertools::Itertools,
    num::Zero,
    number::units::round_half_up_to,
    serde::{Deserialize, Serialize},
    serde_with::{DisplayFromStr, serde_as},
    std::cmp::Reverse,
};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// Recent pool events as delivered by the subgraph.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TransactionFeed {
    #[serde(default)]
    pub mints: Vec<Entry>,
    #[serde(default)]
    pub burns: Vec<Entry>,
    #[serde(default)]
    pub swaps: Vec<Entry>,
}

#[serde_as]
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub transaction: TransactionRef,
    pub pair: PairRef,
    pub sender: String,
    #[serde(rename = "amountUSD")]
    #[serde_as(as = "DisplayFromStr")]
    pub amount_usd: BigDecimal,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub amount0: Option<BigDecimal>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub amount1: Option<BigDecimal>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub amount0_in: Option<BigDecimal>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub amount1_in: Option<BigDecimal>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub amount0_out: Option<BigDecimal>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub amount1_out: Option<BigDecimal>,
}

#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct TransactionRef {
    pub id: String,
    #[serde_as(as = "DisplayFromStr")]
    pub timestamp: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PairRef {
    pub token0: TokenRef,
    pub token1: TokenRef,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TokenRef {
    pub symbol: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    Mint,
    Burn,
    Swap,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Swap,
    Add,
    Remove,
}

impl Filter {
    /// Headers of the two amount columns.
    pub fn amount_headers(self) -> (&'static str, &'static str) {
        match self {
            Self::All | Self::Swap => ("Token(In)", "Token(Out)"),
            Self::Add | Self::Remove => ("Token Amount", "Token Amount"),
        }
    }
}

/// Direction of a swap, resolved from which amounts are non-zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SwapLeg {
    pub from: String,
    pub to: String,
    pub amount_in: BigDecimal,
    pub amount_out: BigDecimal,
}

fn positive(amount: Option<&BigDecimal>) -> bool {
    amount.is_some_and(|amount| *amount > BigDecimal::zero())
}

impl Entry {
    /// `token0 -> token1` when token0 went in and token1 came out, otherwise
    /// `token1 -> token0`.
    pub fn swap_leg(&self) -> SwapLeg {
        let zero = BigDecimal::zero();
        let amount = |a: &Option<BigDecimal>| a.clone().unwrap_or_else(|| zero.clone());
        if positive(self.amount0_in.as_ref()) && positive(self.amount1_out.as_ref()) {
            SwapLeg {
                from: self.pair.token0.symbol.clone(),
                to: self.pair.token1.symbol.clone(),
                amount_in: amount(&self.amount0_in),
                amount_out: amount(&self.amount1_out),
            }
        } else {
            SwapLeg {
                from: self.pair.token1.symbol.clone(),
                to: self.pair.token0.symbol.clone(),
                amount_in: amount(&self.amount1_in),
                amount_out: amount(&self.amount0_out),
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Row {
    pub kind: EntryKind,
    pub entry: Entry,
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub number: usize,
    pub kind: EntryKind,
    pub description: String,
    pub total_value_usd: BigDecimal,
    pub token_in: BigDecimal,
    pub token_out: BigDecimal,
    pub account: String,
    pub time: String,
}

impl Row {
    pub fn view(&self, number: usize, now: DateTime<Utc>) -> RowView {
        let entry = &self.entry;
        let (token0, token1) = (&entry.pair.token0.symbol, &entry.pair.token1.symbol);
        let (description, token_in, token_out) = match self.kind {
            EntryKind::Mint | EntryKind::Burn => {
                let verb = if self.kind == EntryKind::Mint { "Add" } else { "Remove" };
                (
                    format!("{verb} {token0} and {token1}"),
                    entry.amount0.clone().unwrap_or_default(),
                    entry.amount1.clone().unwrap_or_default(),
                )
            }
            EntryKind::Swap => {
                let leg = entry.swap_leg();
                (
                    format!("Swap {} for {}", leg.from, leg.to),
                    leg.amount_in,
                    leg.amount_out,
                )
            }
        };
        RowView {
            number,
            kind: self.kind,
            description,
            total_value_usd: round_half_up_to(&entry.amount_usd, 2),
            token_in,
            token_out,
            account: short_account(&entry.sender),
            time: format_time(entry.transaction.timestamp, now),
        }
    }
}

/// `0x1 ... 4cafe` style abbreviation of an account.
pub fn short_account(account: &str) -> String {
    let chars = account.chars().collect_vec();
    if chars.len() <= 8 {
        return account.to_owned();
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 5..].iter().collect();
    format!("{head} ... {tail}")
}

/// Relative age of an event, falling back to the date for old events.
pub fn format_time(timestamp: i64, now: DateTime<Utc>) -> String {
    let Some(time) = DateTime::from_timestamp(timestamp, 0) else {
        return String::new();
    };
    let age = (now - time).num_seconds().max(0);
    match age {
        0..60 => format!("{age} secs ago"),
        60..3600 => format!("{} mins ago", age / 60),
        3600..86400 => format!("{} hours ago", age / 3600),
        _ => time.format("%Y-%m-%d").to_string(),
    }
}

/// State of the transactions table: the selected filter, sort order and page.
#[derive(Clone, Debug)]
pub struct Table {
    feed: TransactionFeed,
    rows: Vec<Row>,
    filter: Filter,
    newest_first: bool,
    page: usize,
}

impl Table {
    /// All events, newest first, first page.
    pub fn new(feed: TransactionFeed) -> Self {
        let mut table = Self {
            feed,
            rows: Vec::new(),
            filter: Filter::All,
            newest_first: true,
            page: 0,
        };
        table.set_filter(Filter::All);
        table
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn newest_first(&self) -> bool {
        self.newest_first
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selecting a filter shows its events newest first, from the first page.
    pub fn set_filter(&mut self, filter: Filter) {
        let rows = |kind, entries: &[Entry]| {
            entries
                .iter()
                .map(|entry| Row {
                    kind,
                    entry: entry.clone(),
                })
                .collect_vec()
        };
        let mut selected = Vec::new();
        if matches!(filter, Filter::All | Filter::Add) {
            selected.extend(rows(EntryKind::Mint, &self.feed.mints));
        }
        if matches!(filter, Filter::All | Filter::Remove) {
            selected.extend(rows(EntryKind::Burn, &self.feed.burns));
        }
        if matches!(filter, Filter::All | Filter::Swap) {
            selected.extend(rows(EntryKind::Swap, &self.feed.swaps));
        }
        selected.sort_by_key(|row| Reverse(row.entry.transaction.timestamp));

        self.rows = selected;
        self.filter = filter;
        self.newest_first = true;
        self.page = 0;
    }

    /// Flips between newest first and oldest first.
    pub fn toggle_time_sort(&mut self) {
        self.newest_first = !self.newest_first;
        if self.newest_first {
            self.rows
                .sort_by_key(|row| Reverse(row.entry.transaction.timestamp));
        } else {
            self.rows.sort_by_key(|row| row.entry.transaction.timestamp);
        }
    }

    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.has_previous_page() {
            self.page -= 1;
        }
    }

    /// Jumps to `page`, clamped to the last page.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    /// Rows of the current page with their 1-based row numbers.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Row)> {
        let start = self.page * PAGE_SIZE;
        self.rows
            .iter()
            .enumerate()
            .skip(start)
            .take(PAGE_SIZE)
            .map(|(index, row)| (index + 1, row))
    }

    pub fn views(&self, now: DateTime<Utc>) -> Vec<RowView> {
        self.visible()
            .map(|(number, row)| row.view(number, now))
            .collect()
    }
}
