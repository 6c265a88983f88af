use serde::Serialize;
use std::collections::BTreeSet;

use crate::schema::Deal;

/// Distinct filter option values present in a deal collection.
///
/// Facets are always computed over the entire unfiltered dataset so option
/// lists never shrink as other filters are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportFacets {
    pub managers: Vec<String>,
    pub logisticians: Vec<String>,
    pub terminals: Vec<String>,
}

impl ReportFacets {
    pub fn from_deals(deals: &[Deal]) -> Self {
        Self {
            managers: extract_managers(deals),
            logisticians: extract_logisticians(deals),
            terminals: extract_terminals(deals),
        }
    }
}

/// Distinct managers, sorted ascending.
pub fn extract_managers(deals: &[Deal]) -> Vec<String> {
    let set: BTreeSet<&str> = deals.iter().map(|d| d.manager.as_str()).collect();
    set.into_iter().map(str::to_string).collect()
}

/// Distinct logisticians, sorted ascending. Only deals that carry a
/// logistics record contribute.
pub fn extract_logisticians(deals: &[Deal]) -> Vec<String> {
    let set: BTreeSet<&str> = deals
        .iter()
        .filter_map(|d| d.logistics.as_ref())
        .map(|log| log.logistician.as_str())
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// Distinct terminals across every container of every deal, sorted ascending.
pub fn extract_terminals(deals: &[Deal]) -> Vec<String> {
    let set: BTreeSet<&str> = deals
        .iter()
        .flat_map(|d| d.containers.iter())
        .map(|c| c.terminal.as_str())
        .collect();
    set.into_iter().map(str::to_string).collect()
}
