use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ratebook::core::Currency;
use ratebook::modules::policies::models::{CustomUnit, Policy, Rate, RateAttributes};

/// A distance rate with the given base amount and stored percentage
pub fn distance_rate(id: &str, amount: Option<Decimal>, percentage: Option<Decimal>) -> Rate {
    Rate {
        id: id.to_string(),
        name: Some(format!("Rate {id}")),
        rate: amount,
        currency: Some(Currency::USD),
        enabled: true,
        attributes: RateAttributes {
            tax_claimable_percentage: percentage,
            tax_rate_external_id: None,
        },
    }
}

/// A policy with one "Distance" custom unit and three rates:
/// - `r50`: 50 USD per unit, 20% reclaimable, with an external tax rate ref
/// - `r0`: zero base rate, 20% reclaimable (degenerate, display must be empty)
/// - `rmile`: typical sub-dollar per-mile rate, nothing reclaimable yet
pub fn sample_policy() -> Policy {
    let mut reclaimable = distance_rate("r50", Some(dec!(50)), Some(dec!(20)));
    reclaimable.attributes.tax_rate_external_id = Some("vat-std".to_string());

    let rates = BTreeMap::from([
        ("r50".to_string(), reclaimable),
        ("r0".to_string(), distance_rate("r0", Some(dec!(0)), Some(dec!(20)))),
        ("rmile".to_string(), distance_rate("rmile", Some(dec!(0.655)), None)),
    ]);

    Policy {
        id: "p1".to_string(),
        name: "Field Ops".to_string(),
        custom_units: BTreeMap::from([(
            "cu1".to_string(),
            CustomUnit {
                id: "cu1".to_string(),
                name: "Distance".to_string(),
                rates,
            },
        )]),
    }
}

/// A policy with no custom units configured
pub fn policy_without_units() -> Policy {
    Policy {
        id: "p-empty".to_string(),
        name: "Unconfigured".to_string(),
        custom_units: BTreeMap::new(),
    }
}
