//! # Closed-Deals P&L Report Engine
//!
//! A library for computing profit-and-loss rollups over closed commercial
//! deals composed of nested cost/sale line items (deal -> shipping
//! containers, deal -> logistics sub-service).
//!
//! ## Core Concepts
//!
//! - **Deal**: a closed transaction owning zero or more containers and at
//!   most one logistics sub-service (transport/crane/extras cost-sale pairs)
//! - **Filtering**: conjunctive date range / manager / logistician / terminal
//!   predicates; visible deals are sorted by close date, most recent first
//! - **Terminal slicing**: selecting a terminal narrows container-level
//!   figures to that terminal's containers only, while the deal's logistics
//!   cost always applies in full — containers partition by terminal,
//!   logistics does not
//! - **Rollups**: per-deal breakdowns and report-wide totals, all exact
//!   integer arithmetic over minor currency units
//!
//! Every operation is a pure function of `(deals, filters)`; the engine
//! never mutates its input and holds no state between calls.
//!
//! ## Example
//!
//! ```rust,ignore
//! use deal_pl_report::*;
//!
//! let deals = load_deals_from_file("deals.json")?;
//! let facets = ReportFacets::from_deals(&deals);
//!
//! let filters = FilterState {
//!     terminal: facets.terminals.first().cloned(),
//!     ..FilterState::with_period("2025-01-01", "2025-12-31")?
//! };
//!
//! let report = build_report(&deals, &filters);
//! println!(
//!     "{} deals visible, total margin {}",
//!     report.totals.deal_count,
//!     report.totals.total.margin()
//! );
//! ```

pub mod error;
pub mod facets;
pub mod filter;
pub mod ingestion;
pub mod mock;
pub mod rollup;
pub mod schema;
pub mod slicing;

pub use error::{ReportError, Result};
pub use facets::{extract_logisticians, extract_managers, extract_terminals, ReportFacets};
pub use filter::{filter_and_sort, is_visible};
pub use ingestion::{load_deals_from_file, load_deals_from_json};
pub use mock::{generate_deals, generate_deals_with_rng};
pub use rollup::{
    build_report, compute_deal_breakdown, compute_report_totals, DealBreakdown, PlReport,
    ReportTotals,
};
pub use schema::{Contact, Container, Deal, FilterState, Financials, LogisticsInfo, Money};
pub use slicing::effective_containers;
