//! Calendar helpers.

use chrono::{Datelike, Local};

/// Calendar year of the local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_year_matches_clock() {
        let before = Local::now().year();
        let year = current_year();
        let after = Local::now().year();
        assert!(year == before || year == after);
        assert!(year >= 2024);
    }
}
