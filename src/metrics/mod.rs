//! Derived display metrics for dashboard cards (pure math, no I/O).
//!
//! Each function takes immutable input from the caller and returns a fresh
//! value; nothing here holds state between calls.

pub mod attention;
pub mod coverage;
pub mod status;
pub mod trend;

pub use attention::{rank, top_attention};
pub use coverage::{aggregate, aggregate_with};
pub use status::{classify, classify_with};
pub use trend::{estimate_trend, estimate_trend_with};
