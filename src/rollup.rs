use log::{debug, info};

use crate::filter::filter_and_sort;
use crate::schema::{Deal, Financials, FilterState};
use crate::slicing::effective_containers;

/// Financial subtotals for a single deal under a terminal selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealBreakdown {
    /// Number of containers that survived the terminal slice.
    pub container_count: usize,
    /// Summed cost/sale of the effective containers.
    pub containers: Financials,
    /// Combined logistics cost/sale. Independent of the terminal selection.
    pub logistics: Financials,
    /// Containers plus logistics.
    pub total: Financials,
}

/// Report-wide aggregates over all visible deals.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotals {
    pub deal_count: usize,
    /// Effective (post-slice) containers across all visible deals.
    pub container_count: usize,
    /// Visible deals that carry a logistics record, not line items.
    pub logistics_count: usize,
    pub containers: Financials,
    pub transport: Financials,
    pub crane: Financials,
    pub extras: Financials,
    /// Transport + crane + extras combined.
    pub logistics: Financials,
    pub total: Financials,
}

/// The complete recomputation result for one filter state: the visible deals
/// (close date descending), the breakdown for each in the same order, and
/// the report totals.
#[derive(Debug, Clone)]
pub struct PlReport<'a> {
    pub deals: Vec<&'a Deal>,
    pub breakdowns: Vec<DealBreakdown>,
    pub totals: ReportTotals,
}

/// Per-deal rollup under the given terminal selection.
///
/// Container figures come from the effective (sliced) container set.
/// Logistics always contributes in full: a terminal selection narrows which
/// containers count, never how much of the deal's logistics applies. A deal
/// whose slice is empty still reports its full logistics block.
pub fn compute_deal_breakdown(deal: &Deal, terminal: Option<&str>) -> DealBreakdown {
    let effective = effective_containers(deal, terminal);

    let mut containers = Financials::default();
    for container in &effective {
        containers += container.financials();
    }

    let logistics = deal.logistics_financials();

    DealBreakdown {
        container_count: effective.len(),
        containers,
        logistics,
        total: containers + logistics,
    }
}

/// Aggregates breakdowns and per-category logistics sums over the visible
/// deals. Pure function of its inputs; callers rerun it on every filter
/// change.
pub fn compute_report_totals(visible: &[&Deal], terminal: Option<&str>) -> ReportTotals {
    let mut totals = ReportTotals {
        deal_count: visible.len(),
        ..ReportTotals::default()
    };

    for deal in visible {
        let breakdown = compute_deal_breakdown(deal, terminal);
        totals.container_count += breakdown.container_count;
        totals.containers += breakdown.containers;
        totals.total += breakdown.total;

        if let Some(log) = &deal.logistics {
            totals.logistics_count += 1;
            totals.transport += log.transport;
            totals.crane += log.crane;
            totals.extras += log.extras;
            totals.logistics += log.combined();
        }
    }

    totals
}

/// Runs the full pipeline for one filter state: filter, sort, per-deal
/// breakdowns, report totals.
pub fn build_report<'a>(deals: &'a [Deal], filters: &FilterState) -> PlReport<'a> {
    debug!(
        "Building P&L report over {} deals (terminal filter: {:?})",
        deals.len(),
        filters.terminal
    );

    let visible = filter_and_sort(deals, filters);
    let terminal = filters.terminal.as_deref();

    let breakdowns: Vec<DealBreakdown> = visible
        .iter()
        .map(|deal| compute_deal_breakdown(deal, terminal))
        .collect();
    let totals = compute_report_totals(&visible, terminal);

    info!(
        "Report ready: {} of {} deals visible, {} containers, total margin {}",
        totals.deal_count,
        deals.len(),
        totals.container_count,
        totals.total.margin()
    );

    PlReport {
        deals: visible,
        breakdowns,
        totals,
    }
}
