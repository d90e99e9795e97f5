use chrono::{DateTime, Datelike, Utc};

/// `"Q{1..4}-{YYYY}"` derived from UTC time.
pub fn current_quarter_code(at: DateTime<Utc>) -> String {
    let quarter = (at.month0() / 3) + 1;
    format!("Q{quarter}-{}", at.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn november_is_q4() {
        let at = Utc.with_ymd_and_hms(2025, 11, 18, 10, 0, 0).unwrap();
        assert_eq!(current_quarter_code(at), "Q4-2025");
    }

    #[test]
    fn january_is_q1() {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(current_quarter_code(at), "Q1-2026");
    }

    #[test]
    fn quarter_boundaries() {
        let at = Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap();
        assert_eq!(current_quarter_code(at), "Q1-2025");
        let at = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
        assert_eq!(current_quarter_code(at), "Q2-2025");
    }
}
