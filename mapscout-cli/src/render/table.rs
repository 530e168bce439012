//! Results table rows

use mapscout_core::domain::record::BusinessRecord;

const MISSING: &str = "-";

/// Column header, printed before the first row of a run
pub fn header() -> String {
    format!(
        "{:>4}  {:<32}  {:<16}  {:>6}  {:>7}  {}",
        "#", "Name", "Phone", "Rating", "Reviews", "Address"
    )
}

/// One table row; `position` is 1-based
pub fn format_row(position: usize, record: &BusinessRecord) -> String {
    let rating = record
        .rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| MISSING.to_string());
    let reviews = record
        .review_count
        .map(|n| n.to_string())
        .unwrap_or_else(|| MISSING.to_string());

    format!(
        "{:>4}  {:<32}  {:<16}  {:>6}  {:>7}  {}",
        position,
        truncate(record.display_name(), 32),
        truncate(record.phone.as_deref().unwrap_or(MISSING), 16),
        rating,
        reviews,
        record.full_address.as_deref().unwrap_or(MISSING),
    )
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_fills_missing_fields() {
        let record = BusinessRecord::new("Joe's Cafe", "555-1111");
        let row = format_row(1, &record);

        assert!(row.starts_with("   1  Joe's Cafe"));
        assert!(row.contains("555-1111"));
        assert!(row.trim_end().ends_with('-'));
    }

    #[test]
    fn test_row_formats_rating_and_reviews() {
        let record = BusinessRecord {
            rating: Some(4.25),
            review_count: Some(1234),
            full_address: Some("1 Main St".into()),
            ..BusinessRecord::new("Joe's Cafe", "555-1111")
        };
        let row = format_row(12, &record);

        assert!(row.contains(" 4.2 ") || row.contains(" 4.3 "));
        assert!(row.contains("1234"));
        assert!(row.ends_with("1 Main St"));
    }

    #[test]
    fn test_long_names_are_truncated() {
        let name = "A".repeat(40);
        let cut = truncate(&name, 32);
        assert_eq!(cut.chars().count(), 32);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate("short", 32), "short");
    }
}
