use chrono::{DateTime, Utc};
use rand::Rng;

const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SUFFIX_LENGTH: usize = 6;

/// Generates an order number of the form `ORD-YYYYMMDD-XXXXXX`.
pub fn generate_order_number(now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();

    let suffix: String = (0..SUFFIX_LENGTH)
        .map(|_| SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())] as char)
        .collect();

    format!("ORD-{}-{}", now.format("%Y%m%d"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn uses_date_prefix_and_uppercase_suffix() {
        let now = Utc.with_ymd_and_hms(2026, 3, 9, 12, 0, 0).unwrap();

        let number = generate_order_number(now);

        assert!(number.starts_with("ORD-20260309-"));
        let suffix = &number["ORD-20260309-".len()..];
        assert_eq!(suffix.len(), SUFFIX_LENGTH);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
