//! File-backed tests for the ICS reader
//!
//! Calendars are written to temporary files and read back the way the
//! widget reads them on every poll.

use std::io::Write;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use domain::EventTime;
use integration_ics::{IcsError, IcsFileReader, parse_events};
use tempfile::NamedTempFile;

fn write_calendar(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Life Cube//Tests//EN\r\n{body}END:VCALENDAR\r\n"
    )
    .unwrap();
    file
}

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 10, h, m, 0).unwrap()
}

const STANDUP: &str = "BEGIN:VEVENT\r\n\
UID:standup-1\r\n\
DTSTAMP:20260201T000000Z\r\n\
SUMMARY:Standup\r\n\
DTSTART:20260210T090000Z\r\n\
DTEND:20260210T100000Z\r\n\
END:VEVENT\r\n";

#[test]
fn reads_single_utc_event() {
    let file = write_calendar(STANDUP);
    let events = IcsFileReader::new(file.path()).read_events().unwrap();

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.uid.as_deref(), Some("standup-1"));
    assert_eq!(event.summary.as_deref(), Some("Standup"));
    assert_eq!(event.start, EventTime::DateTime(at(9, 0)));
    assert_eq!(event.end, EventTime::DateTime(at(10, 0)));
}

#[test]
fn scenario_nine_to_ten() {
    let file = write_calendar(STANDUP);
    let events = IcsFileReader::new(file.path()).read_events().unwrap();
    let busy = |now| events.iter().any(|e| e.is_active_at(now));

    assert!(busy(at(9, 30)));
    assert!(!busy(at(8, 59)));
    assert!(busy(at(10, 0)));
    assert!(!busy(at(10, 1)));
}

#[test]
fn all_day_event_keeps_date_boundaries() {
    let file = write_calendar(
        "BEGIN:VEVENT\r\n\
UID:holiday\r\n\
DTSTAMP:20260201T000000Z\r\n\
SUMMARY:Holiday\r\n\
DTSTART;VALUE=DATE:20260210\r\n\
DTEND;VALUE=DATE:20260211\r\n\
END:VEVENT\r\n",
    );
    let events = IcsFileReader::new(file.path()).read_events().unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].start,
        EventTime::Date(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap())
    );
    assert!(!events[0].is_timed());
    assert!(!events[0].is_active_at(at(12, 0)));
}

#[test]
fn tzid_event_is_normalised() {
    let file = write_calendar(
        "BEGIN:VEVENT\r\n\
UID:berlin\r\n\
DTSTAMP:20260201T000000Z\r\n\
DTSTART;TZID=Europe/Berlin:20260210T100000\r\n\
DTEND;TZID=Europe/Berlin:20260210T110000\r\n\
END:VEVENT\r\n",
    );
    let events = IcsFileReader::new(file.path()).read_events().unwrap();

    assert_eq!(events[0].start, EventTime::DateTime(at(9, 0)));
    assert_eq!(events[0].end, EventTime::DateTime(at(10, 0)));
}

#[test]
fn floating_event_is_read_as_utc() {
    let file = write_calendar(
        "BEGIN:VEVENT\r\n\
UID:floating\r\n\
DTSTAMP:20260201T000000Z\r\n\
DTSTART:20260210T090000\r\n\
DTEND:20260210T100000\r\n\
END:VEVENT\r\n",
    );
    let events = IcsFileReader::new(file.path()).read_events().unwrap();
    assert_eq!(events[0].start, EventTime::DateTime(at(9, 0)));
}

#[test]
fn event_without_end_is_skipped() {
    let file = write_calendar(
        "BEGIN:VEVENT\r\n\
UID:open-ended\r\n\
DTSTAMP:20260201T000000Z\r\n\
DTSTART:20260210T090000Z\r\n\
DURATION:PT1H\r\n\
END:VEVENT\r\n",
    );
    let events = IcsFileReader::new(file.path()).read_events().unwrap();
    assert!(events.is_empty());
}

#[test]
fn todos_are_ignored() {
    let body = format!(
        "BEGIN:VTODO\r\n\
UID:task-1\r\n\
DTSTAMP:20260201T000000Z\r\n\
SUMMARY:Write report\r\n\
DTSTART:20260210T080000Z\r\n\
DUE:20260210T170000Z\r\n\
END:VTODO\r\n{STANDUP}"
    );
    let file = write_calendar(&body);
    let events = IcsFileReader::new(file.path()).read_events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].uid.as_deref(), Some("standup-1"));
}

#[test]
fn folded_summary_is_unfolded() {
    let file = write_calendar(
        "BEGIN:VEVENT\r\n\
UID:folded\r\n\
DTSTAMP:20260201T000000Z\r\n\
SUMMARY:Quarterly planning with the\r\n  whole team\r\n\
DTSTART:20260210T090000Z\r\n\
DTEND:20260210T100000Z\r\n\
END:VEVENT\r\n",
    );
    let events = IcsFileReader::new(file.path()).read_events().unwrap();
    assert_eq!(
        events[0].summary.as_deref(),
        Some("Quarterly planning with the whole team")
    );
}

#[test]
fn invalid_event_is_skipped_and_active_event_still_counts() {
    let body = format!(
        "BEGIN:VEVENT\r\n\
UID:broken\r\n\
DTSTAMP:20260201T000000Z\r\n\
DTSTART:next tuesday\r\n\
DTEND:20260210T100000Z\r\n\
END:VEVENT\r\n\
{STANDUP}BEGIN:VEVENT\r\n\
UID:also-broken\r\n\
DTSTAMP:20260201T000000Z\r\n\
DTSTART:20260210T090000Z\r\n\
DTEND:soon\r\n\
END:VEVENT\r\n"
    );
    let file = write_calendar(&body);
    let events = IcsFileReader::new(file.path()).read_events().unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].uid.as_deref(), Some("standup-1"));
    assert!(events.iter().any(|e| e.is_active_at(at(9, 30))));
}

const OUTLOOK_TIMEZONES: &str = "BEGIN:VTIMEZONE\r\n\
TZID:W. Europe Standard Time\r\n\
BEGIN:STANDARD\r\n\
DTSTART:16010101T030000\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
RRULE:FREQ=YEARLY;INTERVAL=1;BYDAY=-1SU;BYMONTH=10\r\n\
END:STANDARD\r\n\
BEGIN:DAYLIGHT\r\n\
DTSTART:16010101T020000\r\n\
TZOFFSETFROM:+0100\r\n\
TZOFFSETTO:+0200\r\n\
RRULE:FREQ=YEARLY;INTERVAL=1;BYDAY=-1SU;BYMONTH=3\r\n\
END:DAYLIGHT\r\n\
END:VTIMEZONE\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Customized Time Zone\r\n\
BEGIN:STANDARD\r\n\
DTSTART:16010101T000000\r\n\
TZOFFSETFROM:-0300\r\n\
TZOFFSETTO:-0300\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n";

#[test]
fn outlook_windows_tzid_uses_vtimezone() {
    let body = format!(
        "{OUTLOOK_TIMEZONES}BEGIN:VEVENT\r\n\
UID:outlook-standup\r\n\
DTSTAMP:20260201T000000Z\r\n\
DTSTART;TZID=W. Europe Standard Time:20260210T100000\r\n\
DTEND;TZID=W. Europe Standard Time:20260210T110000\r\n\
END:VEVENT\r\n"
    );
    let file = write_calendar(&body);
    let events = IcsFileReader::new(file.path()).read_events().unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].start, EventTime::DateTime(at(9, 0)));
    assert_eq!(events[0].end, EventTime::DateTime(at(10, 0)));
    assert!(events[0].is_active_at(at(9, 30)));
}

#[test]
fn custom_tzid_only_defined_in_vtimezone() {
    let body = format!(
        "{OUTLOOK_TIMEZONES}BEGIN:VEVENT\r\n\
UID:remote-sync\r\n\
DTSTAMP:20260201T000000Z\r\n\
DTSTART;TZID=Customized Time Zone:20260210T060000\r\n\
DTEND;TZID=Customized Time Zone:20260210T070000\r\n\
END:VEVENT\r\n"
    );
    let file = write_calendar(&body);
    let events = IcsFileReader::new(file.path()).read_events().unwrap();

    // 06:00 at UTC-3
    assert_eq!(events[0].start, EventTime::DateTime(at(9, 0)));
    assert_eq!(events[0].end, EventTime::DateTime(at(10, 0)));
}

#[test]
fn non_calendar_content_is_a_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\x89PNG\r\n\x1a\nnot a calendar at all").unwrap();
    let err = IcsFileReader::new(file.path()).read_events().unwrap_err();
    assert!(matches!(err, IcsError::Parse(_)));
}

#[test]
fn empty_calendar_has_no_events() {
    assert!(parse_events("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n")
        .unwrap()
        .is_empty());
}

mod proptest_tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use domain::EventTime;
    use integration_ics::parse_event_time;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn utc_values_parse_to_the_same_instant(
            year in 2000i32..2100,
            month in 1u32..13,
            day in 1u32..29,
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
        ) {
            let value = format!("{year:04}{month:02}{day:02}T{hour:02}{minute:02}{second:02}Z");
            let expected = Utc
                .with_ymd_and_hms(year, month, day, hour, minute, second)
                .unwrap();
            prop_assert_eq!(
                parse_event_time(&value, None, None),
                Some(EventTime::DateTime(expected))
            );
        }

        #[test]
        fn date_values_parse_as_dates(
            year in 2000i32..2100,
            month in 1u32..13,
            day in 1u32..29,
        ) {
            let value = format!("{year:04}{month:02}{day:02}");
            prop_assert_eq!(
                parse_event_time(&value, Some("DATE"), None),
                NaiveDate::from_ymd_opt(year, month, day).map(EventTime::Date)
            );
        }

        #[test]
        fn arbitrary_text_never_panics(
            value in "\\PC{0,24}",
            tzid in proptest::option::of("[A-Za-z/_]{0,20}"),
        ) {
            let _ = parse_event_time(&value, None, tzid.as_deref());
        }
    }
}

