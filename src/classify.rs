//! Partitioning and ranking of wallet adapters into display buckets.
//!
//! One classification pass feeds the whole selection surface: a dedicated
//! recommended slot, a small highlighted row, and the remaining list. The
//! pass is deterministic; calling [`classify`] twice over the same snapshot
//! yields the same result.

use crate::adapter::{AdapterRef, ReadyState};
use std::{cmp::Ordering, collections::HashSet};

/// Wallets surfaced in the dedicated recommended slot when present in the
/// registry. At most one recommended adapter is ever chosen.
pub const RECOMMENDED_WALLETS: &[&str] = &["Jupiter Mobile"];

/// Fixed ordering for the emphasized wallets row.
pub const TOP_WALLETS: &[&str] = &["Phantom", "Solflare", "Backpack"];

/// How many previously connected wallets the highlight row can hold.
pub const HIGHLIGHT_LIMIT: usize = 3;

/// Which rule filled the highlight row.
///
/// Single valued: the first rule with content wins and decides the
/// explanatory label shown above the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightedBy {
    PreviouslyConnected,
    Installed,
    TopWallet,
    Onboarding,
    Recommended,
}

impl HighlightedBy {
    /// default English label for the section header above the highlight row
    pub fn label(&self) -> &'static str {
        match self {
            HighlightedBy::PreviouslyConnected => "Recently used",
            HighlightedBy::Installed => "Installed wallets",
            HighlightedBy::TopWallet => "Popular wallets",
            HighlightedBy::Onboarding => "Get started",
            HighlightedBy::Recommended => "Recommended",
        }
    }
}

/// Result of one classification pass.
///
/// Every adapter of the input snapshot lands in exactly one of
/// `recommended`, `highlight` or `others`, except same-name duplicates
/// (dropped) and wallets that are [`ReadyState::Unsupported`] without a
/// reserved slot (not listed at all).
#[derive(Debug, Clone)]
pub struct Classification {
    /// the recommended slot; never participates in the highlight/others split
    pub recommended: Vec<AdapterRef>,
    pub highlight: Vec<AdapterRef>,
    pub highlighted_by: HighlightedBy,
    pub others: Vec<AdapterRef>,
}

impl Classification {
    /// `true` when the pass found nothing to list and the caller should show
    /// an install-a-wallet flow instead of a selection list.
    pub fn is_onboarding(&self) -> bool {
        self.highlighted_by == HighlightedBy::Onboarding
    }
}

/// Partition and rank `adapters` for display.
///
/// `previously_connected` is the most-recent-first history list (see
/// [`crate::history::PreviouslyConnectedStore`]); `precedence` is the
/// caller-supplied ordering preference applied to the trailing list.
pub fn classify(
    adapters: &[AdapterRef],
    previously_connected: &[String],
    precedence: &[String],
) -> Classification {
    let mut recommended: Vec<AdapterRef> = Vec::new();
    // positional buckets keep the order of the list that reserved the slot
    let mut previous: Vec<Option<AdapterRef>> = vec![None; previously_connected.len()];
    let mut installed: Vec<AdapterRef> = Vec::new();
    let mut top: Vec<Option<AdapterRef>> = vec![None; TOP_WALLETS.len()];
    let mut loadable: Vec<AdapterRef> = Vec::new();

    // first match wins per adapter; first instance wins per name
    let mut seen: HashSet<String> = HashSet::new();
    for adapter in adapters {
        let name = adapter.name();
        if !seen.insert(name.clone()) {
            continue;
        }

        if recommended.is_empty() && RECOMMENDED_WALLETS.contains(&name.as_str()) {
            recommended.push(adapter.clone());
        } else if let Some(pos) = previously_connected.iter().position(|n| *n == name) {
            previous[pos] = Some(adapter.clone());
        } else if adapter.ready_state() == ReadyState::Installed {
            installed.push(adapter.clone());
        } else if let Some(pos) = TOP_WALLETS.iter().position(|n| *n == name) {
            top[pos] = Some(adapter.clone());
        } else if matches!(
            adapter.ready_state(),
            ReadyState::Loadable | ReadyState::NotDetected
        ) {
            loadable.push(adapter.clone());
        }
        // unsupported wallets without a reserved slot are not listed
    }

    let previous: Vec<AdapterRef> = previous.into_iter().flatten().collect();
    let top: Vec<AdapterRef> = top.into_iter().flatten().collect();

    let (highlighted_by, highlight, mut others) = if !previous.is_empty() {
        let highlight: Vec<AdapterRef> = previous.iter().take(HIGHLIGHT_LIMIT).cloned().collect();
        // history overflow leads the trailing list, ahead of the other buckets
        let mut rest: Vec<AdapterRef> = previous.iter().skip(HIGHLIGHT_LIMIT).cloned().collect();
        rest.extend(installed);
        rest.extend(top);
        rest.extend(loadable);
        (HighlightedBy::PreviouslyConnected, highlight, rest)
    } else if !installed.is_empty() {
        // pull the installed top wallets out, keeping the fixed top order
        let mut highlight = Vec::new();
        let mut rest = installed;
        for name in TOP_WALLETS {
            if let Some(pos) = rest.iter().position(|adapter| adapter.name() == *name) {
                highlight.push(rest.remove(pos));
            }
        }
        rest.extend(top);
        rest.extend(loadable);
        (HighlightedBy::Installed, highlight, rest)
    } else if top.is_empty() && loadable.is_empty() && recommended.is_empty() {
        // nothing was bucketed at all: show the install-a-wallet flow
        (HighlightedBy::Onboarding, Vec::new(), Vec::new())
    } else {
        (HighlightedBy::TopWallet, top, loadable)
    };

    sort_others(&mut others, precedence);

    Classification {
        recommended,
        highlight,
        highlighted_by,
        others,
    }
}

/// Order the trailing list: two stable passes, readiness first, then the
/// precedence comparator over the readiness-sorted sequence. The second pass
/// runs last, so a wallet named in the precedence list surfaces ahead of the
/// readiness grouping; two unlisted wallets keep their relative order.
fn sort_others(others: &mut [AdapterRef], precedence: &[String]) {
    others.sort_by_key(|adapter| readiness_rank(adapter.ready_state()));
    others.sort_by(|a, b| precedence_order(precedence, &a.name(), &b.name()));
}

fn readiness_rank(state: ReadyState) -> u8 {
    match state {
        ReadyState::Installed => 0,
        ReadyState::Loadable => 1,
        ReadyState::NotDetected | ReadyState::Unsupported => 2,
    }
}

fn precedence_order(precedence: &[String], a: &str, b: &str) -> Ordering {
    let index_of = |name: &str| precedence.iter().position(|n| n == name);

    match (index_of(a), index_of(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
