use goclass_core::model::SessionDate;

/// Human-readable label for the summary panel, e.g. "Thursday, 1 January 2026".
#[must_use]
pub fn format_session_date(date: SessionDate) -> String {
    date.date().format("%A, %-d %B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_form_label() {
        let date: SessionDate = "2026-01-01".parse().unwrap();
        assert_eq!(format_session_date(date), "Thursday, 1 January 2026");
    }
}
