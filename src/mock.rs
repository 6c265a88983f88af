//! Mock dataset generator for demos and tests, shaped like the production
//! CRM export: 1-3 containers per deal, roughly 80% of deals carrying a
//! logistics sub-service, close dates spread over the trailing 60 days.

use chrono::{Days, Utc};
use log::debug;
use rand::{thread_rng, Rng};

use crate::schema::{Contact, Container, Deal, Financials, LogisticsInfo, Money};

const MANAGERS: &[&str] = &[
    "Иван Иванов",
    "Петр Сидоров",
    "Мария Петрова",
    "Алексей Смирнов",
];

const LOGISTICIANS: &[&str] = &["Дмитрий Лог", "Сергей Транс", "Елена Склад"];

const TERMINALS: &[&str] = &[
    "ТЛЦ Белый Раст",
    "Ворсино",
    "Ховрино",
    "Электроугли",
    "Селятино",
];

/// Whole currency units stored as minor units.
fn units(value: i64) -> Money {
    value * 100
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

fn generate_containers<R: Rng>(rng: &mut R, deal_index: usize) -> Vec<Container> {
    let count = rng.gen_range(1..=3);
    (0..count)
        .map(|i| {
            let cost = units(rng.gen_range(100_000..150_000));
            let sale = cost + units(rng.gen_range(5_000..35_000));
            Container {
                id: format!("cont-{deal_index}-{i}"),
                number: format!("CONT{}U", rng.gen_range(100_000..1_000_000)),
                terminal: pick(rng, TERMINALS).to_string(),
                cost,
                sale,
            }
        })
        .collect()
}

fn generate_logistics<R: Rng>(rng: &mut R, deal_index: usize) -> Option<LogisticsInfo> {
    if rng.gen_bool(0.2) {
        return None;
    }

    let transport_cost = units(rng.gen_range(15_000..35_000));
    let transport = Financials::new(transport_cost, transport_cost + units(rng.gen_range(0..5_000)));

    let crane = if rng.gen_bool(0.7) {
        let cost = units(rng.gen_range(3_000..8_000));
        Financials::new(cost, cost + units(1_000))
    } else {
        Financials::default()
    };

    // Extras are usually resold at cost.
    let extras = if rng.gen_bool(0.5) {
        let cost = units(rng.gen_range(1_000..4_000));
        Financials::new(cost, cost)
    } else {
        Financials::default()
    };

    Some(LogisticsInfo {
        id: format!("log-{deal_index}"),
        sp_link: format!(
            "https://crm.example.com/logistics/{}",
            rng.gen_range(0..1_000)
        ),
        logistician: pick(rng, LOGISTICIANS).to_string(),
        transport,
        crane,
        extras,
    })
}

/// Generates `count` mock deals using the given RNG, so tests can seed a
/// `StdRng` for reproducible datasets.
pub fn generate_deals_with_rng<R: Rng>(count: usize, rng: &mut R) -> Vec<Deal> {
    let today = Utc::now().date_naive();

    let deals = (0..count)
        .map(|i| {
            let close_date = today - Days::new(rng.gen_range(0..60));
            Deal {
                id: format!("deal-{i}"),
                close_date,
                title: format!(
                    "Сделка №{} ({})",
                    1024 + i,
                    if i % 2 == 0 { "Контейнеры" } else { "Опт" }
                ),
                contact: Contact {
                    id: format!("c-{i}"),
                    name: format!("Клиент {}", i + 1),
                    phone: format!("+7 999 000 {:04}", i),
                },
                manager: pick(rng, MANAGERS).to_string(),
                containers: generate_containers(rng, i),
                logistics: generate_logistics(rng, i),
            }
        })
        .collect();

    debug!("Generated {count} mock deals");
    deals
}

pub fn generate_deals(count: usize) -> Vec<Deal> {
    generate_deals_with_rng(count, &mut thread_rng())
}
