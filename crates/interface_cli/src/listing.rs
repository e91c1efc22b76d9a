//! Selection filters derived from configuration

use domain_agency::criteria::{and, any, by_brand, max_price};
use domain_agency::AgencyConfig;
use domain_fleet::Vehicle;

/// A boxed selection criterion
pub type Criterion = Box<dyn Fn(&Vehicle) -> bool>;

/// Combines the configured brand and price filters; no filter selects everything
pub fn selection(config: &AgencyConfig) -> Criterion {
    let mut criterion: Criterion = Box::new(any());
    if let Some(brand) = &config.brand {
        criterion = Box::new(and(criterion, by_brand(brand.clone())));
    }
    if let Some(max) = config.max_price {
        criterion = Box::new(and(criterion, max_price(max)));
    }
    criterion
}
