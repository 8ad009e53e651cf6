pub mod tax_reclaimable;

pub use tax_reclaimable::{TaxReclaimableForm, TaxReclaimableView, TAX_CLAIMABLE_VALUE};
