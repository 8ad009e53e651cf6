pub mod controllers;
pub mod models;
pub mod services;

pub use models::{TaxReclaimableForm, TaxReclaimableView};
pub use services::{validate_tax_claimable_value, DistanceRateService, ReclaimableCalculator};
