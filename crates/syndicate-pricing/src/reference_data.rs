//! Static reference tables used by the calculator.
//!
//! Tables are built once (either the built-in desk tables or a TOML file read
//! at startup) and never change afterwards. Every lookup keyed by a sector,
//! rating, currency or market condition is total; only swap pairs may be
//! absent, in which case they cost nothing.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use syndicate_core::types::{
    BasisPoints, CreditRating, Currency, CurrencyMap, MarketCondition, Sector,
};
use syndicate_core::{SyndicateError, SyndicateResult};

static STANDARD: Lazy<Arc<ReferenceData>> = Lazy::new(|| Arc::new(ReferenceData::build_standard()));

/// One point of the size-premium table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBreakpoint {
    /// Deal size in millions.
    pub deal_size_million: u32,
    /// Premium charged for deals nearest this size.
    pub adjustment_bps: BasisPoints,
}

/// Credit spreads for every sector and rating, per currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadTable {
    rows: [[CurrencyMap<BasisPoints>; 4]; 3],
}

impl SpreadTable {
    /// Returns the spreads for a sector/rating pair.
    pub fn get(&self, sector: Sector, rating: CreditRating) -> &CurrencyMap<BasisPoints> {
        &self.rows[sector_index(sector)][rating_index(rating)]
    }

    fn try_from_fn(
        mut f: impl FnMut(Sector, CreditRating) -> SyndicateResult<CurrencyMap<BasisPoints>>,
    ) -> SyndicateResult<Self> {
        let mut row = |sector| -> SyndicateResult<[CurrencyMap<BasisPoints>; 4]> {
            Ok([
                f(sector, CreditRating::AAA)?,
                f(sector, CreditRating::AA)?,
                f(sector, CreditRating::A)?,
                f(sector, CreditRating::BBB)?,
            ])
        };
        Ok(Self {
            rows: [row(Sector::Utility)?, row(Sector::Bank)?, row(Sector::Industrial)?],
        })
    }
}

fn sector_index(sector: Sector) -> usize {
    match sector {
        Sector::Utility => 0,
        Sector::Bank => 1,
        Sector::Industrial => 2,
    }
}

fn rating_index(rating: CreditRating) -> usize {
    usize::from(rating.score() - 1)
}

/// Market-condition adjustments, one per condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketAdjustments {
    /// Light issuance calendar.
    pub quiet_week: BasisPoints,
    /// Heavy issuance calendar.
    pub busy_week: BasisPoints,
    /// Central bank decision in the window.
    pub central_bank_meeting: BasisPoints,
    /// Neutral backdrop.
    pub normal: BasisPoints,
}

impl MarketAdjustments {
    /// Returns the adjustment for a condition.
    pub fn get(&self, condition: MarketCondition) -> BasisPoints {
        match condition {
            MarketCondition::QuietWeek => self.quiet_week,
            MarketCondition::BusyWeek => self.busy_week,
            MarketCondition::CentralBankMeeting => self.central_bank_meeting,
            MarketCondition::Normal => self.normal,
        }
    }
}

/// Immutable reference data for the pricing calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    government_rates: CurrencyMap<Decimal>,
    credit_spreads: SpreadTable,
    market_adjustments: MarketAdjustments,
    size_adjustments: Vec<SizeBreakpoint>,
    swap_costs: BTreeMap<(Currency, Currency), BasisPoints>,
}

impl ReferenceData {
    /// Returns the built-in desk tables, shared for the life of the process.
    pub fn standard() -> Arc<ReferenceData> {
        Arc::clone(&*STANDARD)
    }

    fn build_standard() -> Self {
        let bps = |gbp, eur, usd| {
            CurrencyMap::new(
                BasisPoints::new(gbp),
                BasisPoints::new(eur),
                BasisPoints::new(usd),
            )
        };

        let credit_spreads = SpreadTable {
            rows: [
                // utility
                [bps(80, 85, 75), bps(100, 105, 95), bps(120, 125, 115), bps(180, 190, 170)],
                // bank
                [bps(60, 70, 55), bps(80, 90, 75), bps(100, 110, 95), bps(150, 165, 140)],
                // industrial
                [bps(100, 110, 95), bps(130, 140, 125), bps(160, 175, 150), bps(220, 240, 210)],
            ],
        };

        let size_adjustments = [(100, 0), (250, 5), (500, 10), (750, 15), (1000, 20)]
            .into_iter()
            .map(|(size, adj)| SizeBreakpoint {
                deal_size_million: size,
                adjustment_bps: BasisPoints::new(adj),
            })
            .collect();

        let swap_costs = [
            (Currency::EUR, Currency::GBP, 80),
            (Currency::USD, Currency::GBP, 30),
            (Currency::GBP, Currency::EUR, 75),
            (Currency::USD, Currency::EUR, 45),
            (Currency::GBP, Currency::USD, 35),
            (Currency::EUR, Currency::USD, 50),
        ]
        .into_iter()
        .map(|(from, to, cost)| ((from, to), BasisPoints::new(cost)))
        .collect();

        Self {
            government_rates: CurrencyMap::new(dec!(4.0), dec!(2.5), dec!(4.5)),
            credit_spreads,
            market_adjustments: MarketAdjustments {
                quiet_week: BasisPoints::new(-10),
                busy_week: BasisPoints::new(15),
                central_bank_meeting: BasisPoints::new(20),
                normal: BasisPoints::ZERO,
            },
            size_adjustments,
            swap_costs,
        }
    }

    /// Parses tables from TOML text.
    ///
    /// Every government rate, sector/rating/currency spread and market
    /// condition must be present; swap pairs may be omitted.
    pub fn from_toml_str(content: &str) -> SyndicateResult<Self> {
        let raw: RawReferenceData =
            toml::from_str(content).map_err(|e| SyndicateError::invalid_table(e.to_string()))?;
        raw.validate()
    }

    /// Loads tables from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> SyndicateResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SyndicateError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let data = Self::from_toml_str(&content)?;
        log::info!("Loaded reference tables from {}", path.display());
        Ok(data)
    }

    /// Government base rates in percent.
    pub fn government_rates(&self) -> &CurrencyMap<Decimal> {
        &self.government_rates
    }

    /// Government base rate for a currency, in percent.
    pub fn government_rate(&self, currency: Currency) -> Decimal {
        self.government_rates[currency]
    }

    /// Credit spreads per currency for a sector/rating pair.
    pub fn spreads_for(&self, sector: Sector, rating: CreditRating) -> &CurrencyMap<BasisPoints> {
        self.credit_spreads.get(sector, rating)
    }

    /// Credit spread for a sector/rating/currency triple.
    pub fn credit_spread(
        &self,
        sector: Sector,
        rating: CreditRating,
        currency: Currency,
    ) -> BasisPoints {
        self.credit_spreads.get(sector, rating)[currency]
    }

    /// Adjustment for a market condition.
    pub fn market_adjustment(&self, condition: MarketCondition) -> BasisPoints {
        self.market_adjustments.get(condition)
    }

    /// Size breakpoints, ascending by deal size.
    pub fn size_breakpoints(&self) -> &[SizeBreakpoint] {
        &self.size_adjustments
    }

    /// Size premium for a deal: the breakpoint nearest the requested size.
    ///
    /// Breakpoints are scanned in ascending order and the first one at the
    /// minimum distance wins, so a size exactly between two breakpoints takes
    /// the smaller one. Sizes beyond the table saturate at its ends.
    pub fn size_adjustment(&self, deal_size_million: u32) -> BasisPoints {
        self.size_adjustments
            .iter()
            .min_by_key(|bp| bp.deal_size_million.abs_diff(deal_size_million))
            .map_or(BasisPoints::ZERO, |bp| bp.adjustment_bps)
    }

    /// Cost of swapping proceeds from one currency into another.
    ///
    /// Pairs without a quote, including same-currency pairs, cost zero.
    pub fn swap_cost(&self, from: Currency, to: Currency) -> BasisPoints {
        self.swap_costs
            .get(&(from, to))
            .copied()
            .unwrap_or(BasisPoints::ZERO)
    }
}

/// On-disk layout of the reference tables. Keys use the wire names of the
/// enums (`"utility"`, `"AA"`, `"GBP"`, `"EUR_to_GBP"`).
#[derive(Debug, Deserialize)]
struct RawReferenceData {
    government_rates: BTreeMap<String, Decimal>,
    credit_spreads: BTreeMap<String, BTreeMap<String, BTreeMap<String, i32>>>,
    market_adjustments: BTreeMap<String, i32>,
    size_adjustments: Vec<SizeBreakpoint>,
    #[serde(default)]
    swap_costs: BTreeMap<String, i32>,
}

impl RawReferenceData {
    fn validate(self) -> SyndicateResult<ReferenceData> {
        let government_rates = currency_table(&self.government_rates, "government_rates")?;

        let credit_spreads = {
            let parsed =
                parse_keys(&self.credit_spreads, "credit_spreads", |s| s.parse::<Sector>())?;
            let mut by_sector = BTreeMap::new();
            for (sector, ratings) in parsed {
                let ratings =
                    parse_keys(ratings, "credit_spreads", |s| s.parse::<CreditRating>())?;
                by_sector.insert(sector, ratings);
            }

            SpreadTable::try_from_fn(|sector, rating| {
                let key = format!("{sector}/{rating}");
                let row = by_sector
                    .get(&sector)
                    .and_then(|ratings| ratings.get(&rating).copied())
                    .ok_or_else(|| SyndicateError::missing_entry("credit_spreads", &key))?;
                let row = currency_table(row, "credit_spreads")
                    .map_err(|e| prefix_missing_key(e, &key))?;
                Ok(row.map(|v| BasisPoints::new(*v)))
            })?
        };

        let market_adjustments = {
            let parsed = parse_keys(&self.market_adjustments, "market_adjustments", |s| {
                s.parse::<MarketCondition>()
            })?;
            let get = |condition: MarketCondition| {
                parsed
                    .get(&condition)
                    .map(|v| BasisPoints::new(**v))
                    .ok_or_else(|| {
                        SyndicateError::missing_entry("market_adjustments", condition.as_str())
                    })
            };
            MarketAdjustments {
                quiet_week: get(MarketCondition::QuietWeek)?,
                busy_week: get(MarketCondition::BusyWeek)?,
                central_bank_meeting: get(MarketCondition::CentralBankMeeting)?,
                normal: get(MarketCondition::Normal)?,
            }
        };

        if self.size_adjustments.is_empty() {
            return Err(SyndicateError::invalid_table(
                "size_adjustments must contain at least one breakpoint",
            ));
        }
        let mut size_adjustments = self.size_adjustments;
        size_adjustments.sort_by_key(|bp| bp.deal_size_million);
        if size_adjustments
            .windows(2)
            .any(|w| w[0].deal_size_million == w[1].deal_size_million)
        {
            return Err(SyndicateError::invalid_table(
                "size_adjustments contains duplicate deal sizes",
            ));
        }

        let mut swap_costs = BTreeMap::new();
        for (key, cost) in &self.swap_costs {
            let (from, to) = key.split_once("_to_").ok_or_else(|| {
                SyndicateError::invalid_table(format!(
                    "swap cost key '{key}' must look like 'EUR_to_GBP'"
                ))
            })?;
            let pair = (from.parse::<Currency>()?, to.parse::<Currency>()?);
            if swap_costs.insert(pair, BasisPoints::new(*cost)).is_some() {
                return Err(duplicate_key("swap_costs", key));
            }
        }

        Ok(ReferenceData {
            government_rates,
            credit_spreads,
            market_adjustments,
            size_adjustments,
            swap_costs,
        })
    }
}

/// Parses the keys of a raw table. Keys are matched case-insensitively, so
/// two spellings of the same key are rejected rather than merged.
fn parse_keys<'a, K: Ord, V>(
    map: &'a BTreeMap<String, V>,
    table: &str,
    parse: impl Fn(&str) -> SyndicateResult<K>,
) -> SyndicateResult<BTreeMap<K, &'a V>> {
    let mut parsed = BTreeMap::new();
    for (key, value) in map {
        if parsed.insert(parse(key)?, value).is_some() {
            return Err(duplicate_key(table, key));
        }
    }
    Ok(parsed)
}

fn duplicate_key(table: &str, key: &str) -> SyndicateError {
    SyndicateError::invalid_table(format!("{table} contains duplicate key '{key}'"))
}

fn currency_table<V: Copy>(
    map: &BTreeMap<String, V>,
    table: &'static str,
) -> SyndicateResult<CurrencyMap<V>> {
    let parsed = parse_keys(map, table, |s| s.parse::<Currency>())?;
    CurrencyMap::try_from_fn(|currency| {
        parsed
            .get(&currency)
            .map(|v| **v)
            .ok_or_else(|| SyndicateError::missing_entry(table, currency.code()))
    })
}

fn prefix_missing_key(err: SyndicateError, prefix: &str) -> SyndicateError {
    match err {
        SyndicateError::MissingTableEntry { table, key } => SyndicateError::MissingTableEntry {
            table,
            key: format!("{prefix}/{key}"),
        },
        other => other,
    }
}
