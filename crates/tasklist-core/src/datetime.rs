use chrono::{
  DateTime,
  NaiveDate,
  NaiveDateTime
};

const DATE_INPUT_FORMAT: &str =
  "%Y-%m-%d";
const DISPLAY_FORMAT: &str =
  "%-m/%-d/%Y";

/// Parses the value of a date input (`YYYY-MM-DD`).
pub fn parse_date_input(
  raw: &str
) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(
    raw.trim(),
    DATE_INPUT_FORMAT
  )
  .ok()
}

/// Parses a calendar date or timestamp as returned by the API.
///
/// Due dates are calendar dates, so the date part of a timestamp is taken
/// as-is rather than shifted into another timezone.
pub fn parse_api_date(
  raw: &str
) -> Option<NaiveDate> {
  let raw = raw.trim();
  if let Some(date) =
    parse_date_input(raw)
  {
    return Some(date);
  }
  if let Ok(stamp) =
    DateTime::parse_from_rfc3339(raw)
  {
    return Some(stamp.date_naive());
  }
  for format in [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f"
  ] {
    if let Ok(stamp) =
      NaiveDateTime::parse_from_str(
        raw, format
      )
    {
      return Some(stamp.date());
    }
  }
  None
}

/// `M/D/YYYY`, or the raw value when it cannot be parsed.
pub fn format_display_date(
  raw: &str
) -> String {
  parse_api_date(raw)
    .map(|date| {
      date
        .format(DISPLAY_FORMAT)
        .to_string()
    })
    .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_date_input() {
    assert_eq!(
      parse_date_input("2024-01-01"),
      NaiveDate::from_ymd_opt(2024, 1, 1)
    );
    assert_eq!(
      parse_date_input("2024-13-01"),
      None
    );
    assert_eq!(
      parse_date_input("tomorrow"),
      None
    );
  }

  #[test]
  fn timestamp_keeps_its_calendar_date()
  {
    assert_eq!(
      format_display_date(
        "2024-01-01T00:00:00.000Z"
      ),
      "1/1/2024"
    );
    assert_eq!(
      format_display_date(
        "2024-03-09T23:30:00+02:00"
      ),
      "3/9/2024"
    );
    assert_eq!(
      format_display_date(
        "2024-12-25T08:15:00"
      ),
      "12/25/2024"
    );
  }

  #[test]
  fn unparseable_value_is_shown_raw() {
    assert_eq!(
      format_display_date("soon"),
      "soon"
    );
  }
}
