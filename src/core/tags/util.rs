//! core/tags/util.rs
//! Small parsing helpers shared by tag reading/writing and the form.

/// Parse strings like:
/// - "3" -> (Some(3), None)
/// - "3/12" -> (Some(3), Some(12))
pub(crate) fn parse_slash_pair_u32(s: Option<&str>) -> (Option<u32>, Option<u32>) {
    let Some(s) = s else { return (None, None) };
    let s = s.trim();
    if s.is_empty() {
        return (None, None);
    }

    let mut parts = s.split('/');
    let a = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
    let b = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
    (a, b)
}

/// Lenient unsigned parse for numeric tag fields.
/// - empty / garbage / negative -> None
/// - "0" -> None (zero means "unset" in every container we write)
pub(crate) fn parse_number(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|n| *n != 0)
}

/// BPM values are sometimes stored as decimals ("128.00"). Round them.
pub(crate) fn parse_bpm(s: &str) -> Option<u32> {
    let s = s.trim();
    if let Some(n) = parse_number(s) {
        return Some(n);
    }

    let f = s.parse::<f64>().ok()?;
    if !f.is_finite() || f < 0.5 || f > u32::MAX as f64 {
        return None;
    }
    Some(f.round() as u32)
}

/// First run of four ASCII digits, e.g. "2019-04-01" -> 2019.
pub(crate) fn leading_year(date: &str) -> Option<u32> {
    let mut digits = String::with_capacity(4);
    for ch in date.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            if digits.len() == 4 {
                return parse_number(&digits);
            }
        } else {
            digits.clear();
        }
    }
    None
}

/// Split a joined list field ("A; B;;C ") into trimmed, non-empty entries.
pub(crate) fn split_list(s: &str, separator: char) -> Vec<String> {
    s.split(separator)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join list entries for display.
pub(crate) fn join_list(values: &[String], joiner: &str) -> String {
    values.join(joiner)
}

/// Trimmed, non-empty string or None.
pub(crate) fn clean_optional_string(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_pairs() {
        assert_eq!(parse_slash_pair_u32(Some("3")), (Some(3), None));
        assert_eq!(parse_slash_pair_u32(Some(" 3 / 12 ")), (Some(3), Some(12)));
        assert_eq!(parse_slash_pair_u32(Some("")), (None, None));
        assert_eq!(parse_slash_pair_u32(None), (None, None));
        assert_eq!(parse_slash_pair_u32(Some("x/4")), (None, Some(4)));
    }

    #[test]
    fn unparsable_numbers_become_absent() {
        assert_eq!(parse_number("1999"), Some(1999));
        assert_eq!(parse_number("  7 "), Some(7));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("-3"), None);
        assert_eq!(parse_number("4.5"), None);
        assert_eq!(parse_number("0"), None);
        assert_eq!(parse_number("99999999999"), None);
    }

    #[test]
    fn bpm_rounds_decimals() {
        assert_eq!(parse_bpm("128"), Some(128));
        assert_eq!(parse_bpm("127.6"), Some(128));
        assert_eq!(parse_bpm("0.2"), None);
        assert_eq!(parse_bpm("fast"), None);
        assert_eq!(parse_bpm("NaN"), None);
    }

    #[test]
    fn years_from_dates() {
        assert_eq!(leading_year("2019-04-01"), Some(2019));
        assert_eq!(leading_year("1987"), Some(1987));
        assert_eq!(leading_year("April 85"), None);
        assert_eq!(leading_year(""), None);
    }

    #[test]
    fn split_keeps_order_and_drops_blanks() {
        assert_eq!(
            split_list("Zeta; Alpha ;; Mid;", ';'),
            vec!["Zeta".to_string(), "Alpha".to_string(), "Mid".to_string()]
        );
        assert!(split_list("", ';').is_empty());
        assert!(split_list(" ; ; ", ';').is_empty());
    }

    #[test]
    fn join_then_split_reproduces_list() {
        let list = vec!["B".to_string(), "A".to_string(), "C D".to_string()];
        let joined = join_list(&list, "; ");
        assert_eq!(joined, "B; A; C D");
        assert_eq!(split_list(&joined, ';'), list);
    }

    #[test]
    fn optional_strings() {
        assert_eq!(clean_optional_string("  hi "), Some("hi".to_string()));
        assert_eq!(clean_optional_string("   "), None);
    }
}
