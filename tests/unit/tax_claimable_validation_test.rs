// Validation rules for the tax-reclaimable edit form.
//
// A submission must be present, numeric, non-negative, and no larger than
// the base rate amount (it represents at most 100% of the rate). The upper
// bound is skipped for zero or absent base rates: those submissions clear
// the stored percentage instead of computing one.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ratebook::core::Currency;
use ratebook::modules::distance_rates::models::{TaxReclaimableForm, TAX_CLAIMABLE_VALUE};
use ratebook::modules::distance_rates::services::validate_tax_claimable_value;
use ratebook::modules::policies::models::{Rate, RateAttributes};

fn rate_of(amount: Option<Decimal>) -> Rate {
    Rate {
        id: "r1".to_string(),
        name: None,
        rate: amount,
        currency: Some(Currency::USD),
        enabled: true,
        attributes: RateAttributes::default(),
    }
}

fn form(value: &str) -> TaxReclaimableForm {
    TaxReclaimableForm {
        tax_claimable_value: value.to_string(),
    }
}

#[test]
fn rejects_empty_input() {
    let errors = validate_tax_claimable_value(&form(""), &rate_of(Some(dec!(50))));
    assert!(errors.contains_key(TAX_CLAIMABLE_VALUE));

    let errors = validate_tax_claimable_value(&form("   "), &rate_of(Some(dec!(50))));
    assert!(errors.contains_key(TAX_CLAIMABLE_VALUE));
}

#[test]
fn rejects_non_numeric_input() {
    for value in ["abc", "12.3.4", "1,5", "£10"] {
        let errors = validate_tax_claimable_value(&form(value), &rate_of(Some(dec!(50))));
        assert!(
            errors.contains_key(TAX_CLAIMABLE_VALUE),
            "expected {value:?} to be rejected"
        );
    }
}

#[test]
fn rejects_negative_input() {
    let errors = validate_tax_claimable_value(&form("-5"), &rate_of(Some(dec!(50))));
    assert!(errors.contains_key(TAX_CLAIMABLE_VALUE));
}

#[test]
fn rejects_values_exceeding_the_rate() {
    let errors = validate_tax_claimable_value(&form("50.01"), &rate_of(Some(dec!(50))));
    assert!(errors.contains_key(TAX_CLAIMABLE_VALUE));
}

#[test]
fn accepts_values_between_zero_and_the_rate_inclusive() {
    for value in ["0", "15.5", "50"] {
        let errors = validate_tax_claimable_value(&form(value), &rate_of(Some(dec!(50))));
        assert!(errors.is_empty(), "expected {value:?} to be accepted");
    }
}

#[test]
fn skips_the_upper_bound_for_zero_rates() {
    // A zero-rate submission clears the stored percentage, so any amount
    // passes validation here
    let errors = validate_tax_claimable_value(&form("15"), &rate_of(Some(dec!(0))));
    assert!(errors.is_empty());
}

#[test]
fn skips_the_upper_bound_for_absent_rates() {
    let errors = validate_tax_claimable_value(&form("15"), &rate_of(None));
    assert!(errors.is_empty());
}

#[test]
fn trims_surrounding_whitespace_before_parsing() {
    let errors = validate_tax_claimable_value(&form("  15  "), &rate_of(Some(dec!(50))));
    assert!(errors.is_empty());
}
