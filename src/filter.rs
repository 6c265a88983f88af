use crate::schema::{Deal, FilterState};

/// True iff the deal passes every active filter axis. Axes are conjunctive;
/// an unset axis always matches.
///
/// The terminal axis is an existence check over the deal's *full* container
/// list: a deal is visible when any of its containers touches the selected
/// terminal, even though downstream rollups then slice to that terminal's
/// containers only.
pub fn is_visible(deal: &Deal, filters: &FilterState) -> bool {
    date_match(deal, filters)
        && manager_match(deal, filters)
        && logistician_match(deal, filters)
        && terminal_match(deal, filters)
}

fn date_match(deal: &Deal, filters: &FilterState) -> bool {
    filters.start_date.map_or(true, |start| deal.close_date >= start)
        && filters.end_date.map_or(true, |end| deal.close_date <= end)
}

fn manager_match(deal: &Deal, filters: &FilterState) -> bool {
    filters
        .manager
        .as_deref()
        .map_or(true, |manager| deal.manager == manager)
}

/// A deal without a logistics record never matches an active logistician
/// filter.
fn logistician_match(deal: &Deal, filters: &FilterState) -> bool {
    filters.logistician.as_deref().map_or(true, |logistician| {
        deal.logistics
            .as_ref()
            .is_some_and(|log| log.logistician == logistician)
    })
}

fn terminal_match(deal: &Deal, filters: &FilterState) -> bool {
    filters.terminal.as_deref().map_or(true, |terminal| {
        deal.containers.iter().any(|c| c.terminal == terminal)
    })
}

/// Visible deals ordered by close date, most recent first. The sort is
/// stable: deals closed on the same date keep their original collection
/// order.
pub fn filter_and_sort<'a>(deals: &'a [Deal], filters: &FilterState) -> Vec<&'a Deal> {
    let mut visible: Vec<&Deal> = deals.iter().filter(|d| is_visible(d, filters)).collect();
    visible.sort_by(|a, b| b.close_date.cmp(&a.close_date));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Contact, Container, Financials, LogisticsInfo};
    use chrono::NaiveDate;

    fn deal(id: &str, close_date: &str, manager: &str, terminals: &[&str]) -> Deal {
        Deal {
            id: id.to_string(),
            close_date: close_date.parse().unwrap(),
            title: format!("Deal {id}"),
            contact: Contact {
                id: format!("c-{id}"),
                name: "Client".to_string(),
                phone: "+7 999 000 0000".to_string(),
            },
            manager: manager.to_string(),
            containers: terminals
                .iter()
                .enumerate()
                .map(|(i, t)| Container {
                    id: format!("cont-{id}-{i}"),
                    number: format!("CONT10000{i}U"),
                    terminal: t.to_string(),
                    cost: 100,
                    sale: 150,
                })
                .collect(),
            logistics: None,
        }
    }

    fn with_logistician(mut deal: Deal, logistician: &str) -> Deal {
        deal.logistics = Some(LogisticsInfo {
            id: format!("log-{}", deal.id),
            sp_link: "https://crm.example.com/logistics/1".to_string(),
            logistician: logistician.to_string(),
            transport: Financials::new(50, 60),
            crane: Financials::default(),
            extras: Financials::default(),
        });
        deal
    }

    #[test]
    fn test_no_filters_matches_everything() {
        let d = deal("1", "2025-03-01", "M1", &["A"]);
        assert!(is_visible(&d, &FilterState::default()));
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let d = deal("1", "2025-03-01", "M1", &["A"]);
        let filters = FilterState::with_period("2025-03-01", "2025-03-01").unwrap();
        assert!(is_visible(&d, &filters));

        let filters = FilterState::with_period("2025-03-02", "2025-03-31").unwrap();
        assert!(!is_visible(&d, &filters));

        let filters = FilterState::with_period("2025-02-01", "2025-02-28").unwrap();
        assert!(!is_visible(&d, &filters));
    }

    #[test]
    fn test_open_ended_date_bounds() {
        let d = deal("1", "2025-03-01", "M1", &["A"]);

        let filters = FilterState {
            start_date: Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            ..FilterState::default()
        };
        assert!(is_visible(&d, &filters));

        let filters = FilterState {
            end_date: Some(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()),
            ..FilterState::default()
        };
        assert!(!is_visible(&d, &filters));
    }

    #[test]
    fn test_manager_is_exact_match() {
        let d = deal("1", "2025-03-01", "M1", &["A"]);

        let filters = FilterState {
            manager: Some("M1".to_string()),
            ..FilterState::default()
        };
        assert!(is_visible(&d, &filters));

        let filters = FilterState {
            manager: Some("M".to_string()),
            ..FilterState::default()
        };
        assert!(!is_visible(&d, &filters));
    }

    #[test]
    fn test_logistician_filter_excludes_deals_without_logistics() {
        let plain = deal("1", "2025-03-01", "M1", &["A"]);
        let with_log = with_logistician(deal("2", "2025-03-01", "M1", &["A"]), "L1");

        let filters = FilterState {
            logistician: Some("L1".to_string()),
            ..FilterState::default()
        };
        assert!(!is_visible(&plain, &filters));
        assert!(is_visible(&with_log, &filters));

        let filters = FilterState {
            logistician: Some("L2".to_string()),
            ..FilterState::default()
        };
        assert!(!is_visible(&with_log, &filters));
    }

    #[test]
    fn test_terminal_filter_checks_full_container_list() {
        let d = deal("1", "2025-03-01", "M1", &["A", "B"]);

        let filters = FilterState {
            terminal: Some("B".to_string()),
            ..FilterState::default()
        };
        assert!(is_visible(&d, &filters));

        let filters = FilterState {
            terminal: Some("C".to_string()),
            ..FilterState::default()
        };
        assert!(!is_visible(&d, &filters));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let d = with_logistician(deal("1", "2025-03-01", "M1", &["A"]), "L1");

        let matching = FilterState {
            start_date: Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            end_date: Some(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()),
            manager: Some("M1".to_string()),
            logistician: Some("L1".to_string()),
            terminal: Some("A".to_string()),
        };
        assert!(is_visible(&d, &matching));

        // Breaking any single axis flips visibility.
        for broken in [
            FilterState {
                start_date: Some(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()),
                ..matching.clone()
            },
            FilterState {
                manager: Some("M2".to_string()),
                ..matching.clone()
            },
            FilterState {
                logistician: Some("L2".to_string()),
                ..matching.clone()
            },
            FilterState {
                terminal: Some("Z".to_string()),
                ..matching.clone()
            },
        ] {
            assert!(!is_visible(&d, &broken));
        }
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let deals = vec![
            deal("old", "2025-01-10", "M1", &["A"]),
            deal("tie-first", "2025-02-20", "M1", &["A"]),
            deal("tie-second", "2025-02-20", "M2", &["B"]),
            deal("new", "2025-03-05", "M1", &["A"]),
        ];

        let visible = filter_and_sort(&deals, &FilterState::default());
        let ids: Vec<&str> = visible.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "tie-first", "tie-second", "old"]);

        for pair in visible.windows(2) {
            assert!(pair[0].close_date >= pair[1].close_date);
        }
    }
}
