pub mod foreclosure;
pub mod valuation;
