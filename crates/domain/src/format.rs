//! Date and time labels in Korean for the Asia/Seoul time zone.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Timelike, Weekday};

use crate::HourFormat;

/// Asia/Seoul has used UTC+09:00 without daylight saving time since 1988.
pub const SEOUL: FixedOffset = match FixedOffset::east_opt(9 * 3600) {
    Some(offset) => offset,
    None => panic!("offset out of range"),
};

fn weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    }
}

fn local<Tz: TimeZone>(date_time: &DateTime<Tz>) -> DateTime<FixedOffset> {
    date_time.with_timezone(&SEOUL)
}

/// `2024. 01. 01.`
#[must_use]
pub fn format_simple_date<Tz: TimeZone>(date_time: &DateTime<Tz>) -> String {
    let date_time = local(date_time);
    format!(
        "{}. {:02}. {:02}.",
        date_time.year(),
        date_time.month(),
        date_time.day()
    )
}

/// `2024년 1월 1일 (월)`
#[must_use]
pub fn format_long_date<Tz: TimeZone>(date_time: &DateTime<Tz>) -> String {
    let date_time = local(date_time);
    format!(
        "{}년 {}월 {}일 ({})",
        date_time.year(),
        date_time.month(),
        date_time.day(),
        weekday(date_time.weekday())
    )
}

/// `오후 07:00` or `19:00`
#[must_use]
pub fn format_time<Tz: TimeZone>(date_time: &DateTime<Tz>, hour_format: HourFormat) -> String {
    let date_time = local(date_time);
    match hour_format {
        HourFormat::Twelve => {
            let (pm, hour) = date_time.hour12();
            format!(
                "{} {:02}:{:02}",
                if pm { "오후" } else { "오전" },
                hour,
                date_time.minute()
            )
        }
        HourFormat::TwentyFour => format!("{:02}:{:02}", date_time.hour(), date_time.minute()),
    }
}

/// `2024. 01. 01. (월) 오후 07:00`
#[must_use]
pub fn format_date_time<Tz: TimeZone>(
    date_time: &DateTime<Tz>,
    hour_format: HourFormat,
) -> String {
    format!(
        "{} ({}) {}",
        format_simple_date(date_time),
        weekday(local(date_time).weekday()),
        format_time(date_time, hour_format)
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_seoul_offset() {
        assert_eq!(SEOUL.local_minus_utc(), 9 * 3600);
        assert_eq!(
            utc("2024-01-01T15:00:00Z").with_timezone(&SEOUL).to_rfc3339(),
            "2024-01-02T00:00:00+09:00"
        );
    }

    fn utc(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value).unwrap().to_utc()
    }

    #[rstest]
    #[case("2024-01-01T10:00:00Z", "2024. 01. 01.")]
    #[case("2024-01-01T15:00:00Z", "2024. 01. 02.")]
    #[case("2023-12-31T14:59:59Z", "2023. 12. 31.")]
    fn test_format_simple_date(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(format_simple_date(&utc(value)), expected);
    }

    #[rstest]
    #[case("2024-01-01T10:00:00Z", "2024년 1월 1일 (월)")]
    #[case("2024-03-09T16:30:00Z", "2024년 3월 10일 (일)")]
    fn test_format_long_date(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(format_long_date(&utc(value)), expected);
    }

    #[rstest]
    #[case("2024-01-01T10:00:00Z", HourFormat::Twelve, "오후 07:00")]
    #[case("2024-01-01T02:05:00Z", HourFormat::Twelve, "오전 11:05")]
    #[case("2024-01-01T03:30:00Z", HourFormat::Twelve, "오후 12:30")]
    #[case("2024-01-01T15:10:00Z", HourFormat::Twelve, "오전 12:10")]
    #[case("2024-01-01T10:00:00Z", HourFormat::TwentyFour, "19:00")]
    #[case("2024-01-01T15:10:00Z", HourFormat::TwentyFour, "00:10")]
    fn test_format_time(
        #[case] value: &str,
        #[case] hour_format: HourFormat,
        #[case] expected: &str,
    ) {
        assert_eq!(format_time(&utc(value), hour_format), expected);
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(
            format_date_time(&utc("2024-01-01T10:00:00Z"), HourFormat::Twelve),
            "2024. 01. 01. (월) 오후 07:00"
        );
        assert_eq!(
            format_date_time(
                &DateTime::parse_from_rfc3339("2024-01-01T19:00:00+09:00").unwrap(),
                HourFormat::TwentyFour
            ),
            "2024. 01. 01. (월) 19:00"
        );
    }
}
