//! Display formatting for ledger entries.

use time::{
    OffsetDateTime, PrimitiveDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};

/// The max number of words to display in the transaction table rows before
/// truncating.
const SHORT_DESCRIPTION_MAX_WORDS: usize = 4;

/// Shorten `description` for display in the transaction table.
///
/// The text is split on whitespace; up to [SHORT_DESCRIPTION_MAX_WORDS] words
/// it is returned unchanged, otherwise the first four words are joined by
/// single spaces, with no ellipsis. The second element carries the full text
/// when the description was shortened, for use as a tooltip.
pub(crate) fn short_description(description: &str) -> (String, Option<&str>) {
    let words: Vec<&str> = description.split_whitespace().collect();

    if words.len() <= SHORT_DESCRIPTION_MAX_WORDS {
        (description.to_owned(), None)
    } else {
        (
            words[..SHORT_DESCRIPTION_MAX_WORDS].join(" "),
            Some(description),
        )
    }
}

// Numeric day.month.year with a 24-hour clock, matching the fixed display
// locale.
const TIMESTAMP_DISPLAY_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day].[month].[year], [hour]:[minute]:[second]");

const DATETIME_ATTR_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

const DATETIME_ATTR_MINUTES_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

/// Render `timestamp` in the display timezone to second precision, e.g.
/// "05.03.2024, 09:15:30".
pub(crate) fn format_timestamp(timestamp: OffsetDateTime, offset: UtcOffset) -> String {
    let local = timestamp.to_offset(offset);

    local
        .format(TIMESTAMP_DISPLAY_FORMAT)
        .unwrap_or_else(|_| local.to_string())
}

/// Render `timestamp` in the display timezone in the format used by `<time
/// datetime>` attributes and `datetime-local` inputs.
pub(crate) fn datetime_attr(timestamp: OffsetDateTime, offset: UtcOffset) -> String {
    let local = timestamp.to_offset(offset);

    local
        .format(DATETIME_ATTR_FORMAT)
        .unwrap_or_else(|_| local.to_string())
}

/// Parse the value of a `datetime-local` form input as a timestamp in the
/// display timezone.
///
/// Browsers omit the seconds component when it is zero, so both
/// "2024-03-05T09:15:30" and "2024-03-05T09:15" are accepted.
pub(crate) fn parse_datetime_local(value: &str, offset: UtcOffset) -> Option<OffsetDateTime> {
    PrimitiveDateTime::parse(value, DATETIME_ATTR_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(value, DATETIME_ATTR_MINUTES_FORMAT))
        .ok()
        .map(|datetime| datetime.assume_offset(offset))
}

#[cfg(test)]
mod short_description_tests {
    use super::short_description;

    #[test]
    fn shortens_to_first_four_words() {
        let (short, tooltip) = short_description("Dinner at a nice restaurant tonight");

        assert_eq!(short, "Dinner at a nice");
        assert_eq!(tooltip, Some("Dinner at a nice restaurant tonight"));
    }

    #[test]
    fn keeps_short_descriptions_unchanged() {
        let (short, tooltip) = short_description("Taxi fare");

        assert_eq!(short, "Taxi fare");
        assert_eq!(tooltip, None);
    }

    #[test]
    fn keeps_exactly_four_words_unchanged() {
        let (short, tooltip) = short_description("Dinner at a restaurant");

        assert_eq!(short, "Dinner at a restaurant");
        assert_eq!(tooltip, None);
    }

    #[test]
    fn keeps_irregular_whitespace_when_not_shortened() {
        let (short, _) = short_description("Taxi  fare");

        assert_eq!(short, "Taxi  fare");
    }

    #[test]
    fn joins_with_single_spaces_when_shortened() {
        let (short, _) = short_description("one  two\tthree  four five");

        assert_eq!(short, "one two three four");
    }

    #[test]
    fn empty_description_stays_empty() {
        let (short, tooltip) = short_description("");

        assert_eq!(short, "");
        assert_eq!(tooltip, None);
    }
}
