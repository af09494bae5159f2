use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;

use serde::Deserialize;

use super::DEFAULT_ROW_KEY;

#[derive(Debug)]
pub enum PriceTableError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRate { zip_code: String, rate: f64 },
    DuplicateZip(String),
}

impl fmt::Display for PriceTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceTableError::Io(err) => write!(f, "failed to read price table: {}", err),
            PriceTableError::Csv(err) => write!(f, "invalid price table CSV data: {}", err),
            PriceTableError::InvalidRate { zip_code, rate } => write!(
                f,
                "price per square foot for '{}' must be a positive number (found {})",
                zip_code, rate
            ),
            PriceTableError::DuplicateZip(zip_code) => {
                write!(f, "price table lists '{}' more than once", zip_code)
            }
        }
    }
}

impl std::error::Error for PriceTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PriceTableError::Io(err) => Some(err),
            PriceTableError::Csv(err) => Some(err),
            PriceTableError::InvalidRate { .. } | PriceTableError::DuplicateZip(_) => None,
        }
    }
}

impl From<std::io::Error> for PriceTableError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for PriceTableError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct RateRow {
    zip_code: String,
    price_per_sq_ft: f64,
}

pub(super) fn parse_rates<R: Read>(
    reader: R,
) -> Result<(BTreeMap<String, f64>, Option<f64>), PriceTableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);
    let mut rates = BTreeMap::new();
    let mut default_rate = None;

    for record in csv_reader.deserialize::<RateRow>() {
        let RateRow {
            zip_code,
            price_per_sq_ft,
        } = record?;

        if !price_per_sq_ft.is_finite() || price_per_sq_ft <= 0.0 {
            return Err(PriceTableError::InvalidRate {
                zip_code,
                rate: price_per_sq_ft,
            });
        }

        if zip_code.eq_ignore_ascii_case(DEFAULT_ROW_KEY) {
            if default_rate.replace(price_per_sq_ft).is_some() {
                return Err(PriceTableError::DuplicateZip(zip_code));
            }
            continue;
        }

        if rates.insert(zip_code.clone(), price_per_sq_ft).is_some() {
            return Err(PriceTableError::DuplicateZip(zip_code));
        }
    }

    Ok((rates, default_rate))
}
