mod import;
mod standard;

pub use import::PriceTableError;

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Fallback rate for ZIP codes missing from the table.
pub const DEFAULT_PRICE_PER_SQ_FT: f64 = 185.0;

/// Row key that carries the fallback rate in imported tables.
pub const DEFAULT_ROW_KEY: &str = "default";

/// Result of resolving a ZIP code against the price table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLookup {
    pub price_per_sq_ft: f64,
    pub zip_code_found: bool,
}

/// Immutable ZIP code -> dollars-per-square-foot baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    rates: BTreeMap<String, f64>,
    default_rate: f64,
}

impl PriceTable {
    pub fn standard() -> Self {
        let rates = standard::ZIP_RATES
            .iter()
            .map(|(zip, rate)| ((*zip).to_string(), *rate))
            .collect();

        Self {
            rates,
            default_rate: DEFAULT_PRICE_PER_SQ_FT,
        }
    }

    pub fn new(rates: BTreeMap<String, f64>, default_rate: f64) -> Self {
        Self {
            rates,
            default_rate,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PriceTableError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load `zip_code,price_per_sq_ft` rows. A `default` row replaces the fallback rate.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PriceTableError> {
        let (rates, default_rate) = import::parse_rates(reader)?;
        Ok(Self {
            rates,
            default_rate: default_rate.unwrap_or(DEFAULT_PRICE_PER_SQ_FT),
        })
    }

    /// Exact string match only. Anything else, including malformed ZIPs, falls back silently.
    pub fn lookup(&self, zip_code: &str) -> RateLookup {
        match self.rates.get(zip_code) {
            Some(rate) => RateLookup {
                price_per_sq_ft: *rate,
                zip_code_found: true,
            },
            None => RateLookup {
                price_per_sq_ft: self.default_rate,
                zip_code_found: false,
            },
        }
    }

    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn zip_codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}
