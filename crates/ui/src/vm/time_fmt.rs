/// "30 minutes", "1 minute", or "45 seconds" for durations under a minute
/// or not a whole number of minutes.
#[must_use]
pub fn duration_phrase(secs: u32) -> String {
    if secs >= 60 && secs % 60 == 0 {
        let minutes = secs / 60;
        if minutes == 1 {
            "1 minute".to_string()
        } else {
            format!("{minutes} minutes")
        }
    } else if secs == 1 {
        "1 second".to_string()
    } else {
        format!("{secs} seconds")
    }
}

#[cfg(test)]
mod tests {
    use super::duration_phrase;

    #[test]
    fn whole_minutes_read_as_minutes() {
        assert_eq!(duration_phrase(1800), "30 minutes");
        assert_eq!(duration_phrase(60), "1 minute");
    }

    #[test]
    fn odd_durations_read_as_seconds() {
        assert_eq!(duration_phrase(90), "90 seconds");
        assert_eq!(duration_phrase(1), "1 second");
    }
}
