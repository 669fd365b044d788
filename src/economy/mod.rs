//! Economic systems driven by the background population

pub mod labor;
pub mod tax;

pub use labor::allocate_workers;
pub use tax::{accrue_tax, compute_tax, TaxAccrual};
