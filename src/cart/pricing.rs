use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};
use std::str::FromStr;

/// Unit prices of one cart line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrice {
    /// Discounted base plus accessories
    pub unit: f64,
    /// Undiscounted base plus accessories
    pub original: f64,
}

fn to_decimal(value: f64) -> BigDecimal {
    if value.is_finite() {
        BigDecimal::from_str(&value.to_string()).unwrap_or_else(|_| BigDecimal::zero())
    } else {
        BigDecimal::zero()
    }
}

fn round_cents(value: &BigDecimal) -> f64 {
    value
        .with_scale_round(2, RoundingMode::HalfUp)
        .to_f64()
        .unwrap_or_default()
}

/// Size price when a size is selected and priced, the product price otherwise.
pub fn base_price(product_price: f64, size_price: Option<f64>) -> f64 {
    match size_price {
        Some(p) if p != 0.0 => p,
        _ => product_price,
    }
}

/// `base * (1 - discount / 100)` when the discount is positive, `base` otherwise.
pub fn discounted(base: f64, discount_percentage: Option<f64>) -> f64 {
    match discount_percentage {
        Some(d) if d > 0.0 => {
            let hundred = BigDecimal::from(100);
            round_cents(&(to_decimal(base) * (&hundred - to_decimal(d)) / hundred))
        }
        _ => round_cents(&to_decimal(base)),
    }
}

pub fn line_price(
    product_price: f64,
    discount_percentage: Option<f64>,
    size_price: Option<f64>,
    accessory_prices: &[f64],
) -> LinePrice {
    let base = base_price(product_price, size_price);
    let accessories: BigDecimal = accessory_prices.iter().map(|p| to_decimal(*p)).sum();

    let unit = to_decimal(discounted(base, discount_percentage)) + &accessories;
    let original = to_decimal(base) + &accessories;

    LinePrice {
        unit: round_cents(&unit),
        original: round_cents(&original),
    }
}

/// Σ unit price × quantity, rounded to cents.
pub fn total(lines: impl IntoIterator<Item = (f64, u32)>) -> f64 {
    let sum: BigDecimal = lines
        .into_iter()
        .map(|(unit, quantity)| to_decimal(unit) * BigDecimal::from(quantity))
        .sum();

    round_cents(&sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_percent_off_with_accessory() {
        let price = line_price(100.0, Some(10.0), None, &[20.0]);
        assert_eq!(price.unit, 110.0);
        assert_eq!(price.original, 120.0);
    }

    #[test]
    fn zero_size_price_falls_back_to_product() {
        assert_eq!(base_price(250.0, Some(0.0)), 250.0);
        assert_eq!(base_price(250.0, Some(300.0)), 300.0);
        assert_eq!(base_price(250.0, None), 250.0);
    }

    #[test]
    fn discount_rounds_half_up() {
        // 19.99 * 0.85 = 16.9915
        assert_eq!(discounted(19.99, Some(15.0)), 16.99);
        // 0.05 * 0.5 = 0.025
        assert_eq!(discounted(0.05, Some(50.0)), 0.03);
    }
}
