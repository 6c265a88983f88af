use crate::schema::{Container, Deal};

/// The containers of `deal` that contribute to container-level figures under
/// the given terminal selection, in original order.
///
/// With no terminal selected this is the full container list. With a terminal
/// selected it is the subsequence handled at that terminal, which may be
/// empty: the visibility check runs against the full list, so a visible deal
/// can still slice down to nothing. Callers must treat an empty slice as a
/// normal outcome.
///
/// Logistics is deliberately untouched here. Containers partition by
/// terminal; the logistics sub-service is a deal-level indivisible cost and
/// always applies in full.
pub fn effective_containers<'a>(deal: &'a Deal, terminal: Option<&str>) -> Vec<&'a Container> {
    match terminal {
        None => deal.containers.iter().collect(),
        Some(terminal) => deal
            .containers
            .iter()
            .filter(|c| c.terminal == terminal)
            .collect(),
    }
}
