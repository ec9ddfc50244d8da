use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default export filename with format: beans-filtered-{YYMMDD}.csv
pub fn generate_default_export_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("beans-filtered-{:02}{:02}{:02}.csv", year, month, day);
    PathBuf::from(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_export_filename() {
        let filename = generate_default_export_filename();
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("beans-filtered-"));
        assert!(filename_str.ends_with(".csv"));

        // Date portion is exactly six digits
        let digits = filename_str
            .trim_start_matches("beans-filtered-")
            .trim_end_matches(".csv");
        assert_eq!(digits.len(), 6);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
