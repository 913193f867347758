//! Formatting of entry sizes, dates and names for display.

/// Format a file size for display (e.g., "1.2K", "3.4M").
///
/// `right_align` pads to a fixed width for column output.
pub fn format_size(size: Option<u64>, right_align: bool) -> String {
    let Some(bytes) = size else {
        return if right_align {
            "    -".to_string()
        } else {
            "-".to_string()
        };
    };

    let (value, unit) = if bytes >= 1_000_000_000 {
        (bytes as f64 / 1_000_000_000.0, 'G')
    } else if bytes >= 1_000_000 {
        (bytes as f64 / 1_000_000.0, 'M')
    } else if bytes >= 1_000 {
        (bytes as f64 / 1_000.0, 'K')
    } else if right_align {
        return format!("{:4}B", bytes);
    } else {
        return format!("{}B", bytes);
    };

    if right_align {
        format!("{:4.1}{}", value, unit)
    } else {
        format!("{:.1}{}", value, unit)
    }
}

/// Format a modification time (Unix seconds) as a UTC date, YYYY-MM-DD.
///
/// `right_align` pads the placeholder to the date's width.
pub fn format_date(modified: Option<u64>, right_align: bool) -> String {
    let Some(secs) = modified else {
        return if right_align {
            format!("{:>10}", "-")
        } else {
            "-".to_string()
        };
    };

    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Gregorian (year, month, day) for a count of days since 1970-01-01.
///
/// Works in 400-year eras starting on March 1st so the leap day falls at
/// the end of each counted year.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let day_of_era = z.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;

    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u32;
    let month = (if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    }) as u32;
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Entry name with a trailing slash for directories.
pub fn display_name(name: &str, is_dir: bool) -> String {
    if is_dir && !name.ends_with('/') && !name.ends_with('\\') {
        format!("{}/", name)
    } else {
        name.to_string()
    }
}
