use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use crate::error::{ReportError, Result};

/// Currency amount in minor units (e.g. kopecks/cents). Signed: losses and
/// corrections produce negative values and they must survive aggregation.
pub type Money = i64;

/// A cost/sale pair. Margin is always derived, never stored, so the three
/// values can never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Financials {
    pub cost: Money,
    pub sale: Money,
}

impl Financials {
    pub fn new(cost: Money, sale: Money) -> Self {
        Self { cost, sale }
    }

    pub fn margin(&self) -> Money {
        self.sale - self.cost
    }
}

impl Add for Financials {
    type Output = Financials;

    fn add(self, rhs: Financials) -> Financials {
        Financials {
            cost: self.cost + rhs.cost,
            sale: self.sale + rhs.sale,
        }
    }
}

impl AddAssign for Financials {
    fn add_assign(&mut self, rhs: Financials) {
        self.cost += rhs.cost;
        self.sale += rhs.sale;
    }
}

/// Counterparty on a deal. Informational only; never used for filtering or
/// aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
}

/// One shipping unit belonging to a deal, tagged with the terminal facility
/// that handled it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    /// External reference code (e.g. "CONT123456U").
    pub number: String,
    pub terminal: String,
    pub cost: Money,
    pub sale: Money,
}

impl Container {
    pub fn financials(&self) -> Financials {
        Financials::new(self.cost, self.sale)
    }
}

/// Deal-level logistics sub-service: exactly three named cost/sale items.
/// An item with all-zero values simply was not performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsInfo {
    pub id: String,
    /// Link to the record in the external CRM.
    pub sp_link: String,
    pub logistician: String,
    pub transport: Financials,
    pub crane: Financials,
    pub extras: Financials,
}

impl LogisticsInfo {
    /// Combined cost/sale across transport, crane and extras.
    pub fn combined(&self) -> Financials {
        self.transport + self.crane + self.extras
    }
}

/// A closed commercial transaction, the top-level aggregate of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub close_date: NaiveDate,
    pub title: String,
    pub contact: Contact,
    pub manager: String,
    pub containers: Vec<Container>,
    /// At most one consolidated logistics sub-service per deal.
    #[serde(default)]
    pub logistics: Option<LogisticsInfo>,
}

impl Deal {
    /// Combined logistics cost/sale, zero when the deal has no logistics
    /// record. The single place where the absent-logistics default lives;
    /// consumers must not re-implement the fallback.
    pub fn logistics_financials(&self) -> Financials {
        self.logistics
            .as_ref()
            .map(LogisticsInfo::combined)
            .unwrap_or_default()
    }

    pub fn has_logistics(&self) -> bool {
        self.logistics.is_some()
    }
}

/// Active report filters. `None` on any axis means the axis is unfiltered.
/// The terminal axis is a single-value selector, not a multi-select.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Inclusive lower bound on `Deal::close_date`.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on `Deal::close_date`.
    pub end_date: Option<NaiveDate>,
    pub manager: Option<String>,
    pub logistician: Option<String>,
    pub terminal: Option<String>,
}

impl FilterState {
    /// Filter state bounded to the given ISO-8601 period, all other axes off.
    pub fn with_period(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start_date: Some(parse_iso_date(start)?),
            end_date: Some(parse_iso_date(end)?),
            ..Self::default()
        })
    }
}

fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    value
        .parse::<NaiveDate>()
        .map_err(|source| ReportError::InvalidDate {
            value: value.to_string(),
            source,
        })
}
