pub fn format_compact(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// BARK amounts: two decimals, trailing unit.
pub fn format_bark(amount: f64) -> String {
    format!("{:.2} BARK", amount)
}

pub fn format_price(price: f64) -> String {
    format!("${:.4}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_scales() {
        assert_eq!(format_compact(950), "950");
        assert_eq!(format_compact(1_500), "1.5k");
        assert_eq!(format_compact(2_000_000), "2.0M");
    }

    #[test]
    fn test_bark_amounts_keep_two_decimals() {
        assert_eq!(format_bark(20.0), "20.00 BARK");
        assert_eq!(format_bark(0.125), "0.12 BARK");
    }
}
