//! Non-IANA `TZID` resolution
//!
//! Calendar exports from Outlook and Exchange name their zones with Windows
//! names (`W. Europe Standard Time`) or free text (`Customized Time Zone`)
//! and ship the rules as VTIMEZONE blocks. Those blocks are read here so a
//! local time can be converted with the file's own offsets; Windows names
//! without a block are mapped to their IANA zone.
//!
//! Only yearly `RRULE`s (`BYMONTH` with `BYDAY` or `BYMONTHDAY`) are
//! evaluated, which covers what calendar clients emit for DST.

use std::collections::HashMap;

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;
use icalendar::parser::Component;
use tracing::debug;

/// Windows zone names and their IANA equivalents
const WINDOWS_ZONES: &[(&str, &str)] = &[
    ("UTC", "Etc/UTC"),
    ("GMT Standard Time", "Europe/London"),
    ("Greenwich Standard Time", "Atlantic/Reykjavik"),
    ("W. Europe Standard Time", "Europe/Berlin"),
    ("Central Europe Standard Time", "Europe/Budapest"),
    ("Central European Standard Time", "Europe/Warsaw"),
    ("Romance Standard Time", "Europe/Paris"),
    ("GTB Standard Time", "Europe/Bucharest"),
    ("FLE Standard Time", "Europe/Kyiv"),
    ("E. Europe Standard Time", "Europe/Chisinau"),
    ("Turkey Standard Time", "Europe/Istanbul"),
    ("Russian Standard Time", "Europe/Moscow"),
    ("Israel Standard Time", "Asia/Jerusalem"),
    ("South Africa Standard Time", "Africa/Johannesburg"),
    ("Arabian Standard Time", "Asia/Dubai"),
    ("India Standard Time", "Asia/Kolkata"),
    ("China Standard Time", "Asia/Shanghai"),
    ("Singapore Standard Time", "Asia/Singapore"),
    ("Tokyo Standard Time", "Asia/Tokyo"),
    ("Korea Standard Time", "Asia/Seoul"),
    ("W. Australia Standard Time", "Australia/Perth"),
    ("Cen. Australia Standard Time", "Australia/Adelaide"),
    ("E. Australia Standard Time", "Australia/Brisbane"),
    ("AUS Eastern Standard Time", "Australia/Sydney"),
    ("New Zealand Standard Time", "Pacific/Auckland"),
    ("Atlantic Standard Time", "America/Halifax"),
    ("Eastern Standard Time", "America/New_York"),
    ("Central Standard Time", "America/Chicago"),
    ("Canada Central Standard Time", "America/Regina"),
    ("Mountain Standard Time", "America/Denver"),
    ("US Mountain Standard Time", "America/Phoenix"),
    ("Pacific Standard Time", "America/Los_Angeles"),
    ("Alaskan Standard Time", "America/Anchorage"),
    ("Hawaiian Standard Time", "Pacific/Honolulu"),
    ("E. South America Standard Time", "America/Sao_Paulo"),
    ("Argentina Standard Time", "America/Argentina/Buenos_Aires"),
];

/// IANA zone for a Windows zone name
#[must_use]
pub fn windows_zone(name: &str) -> Option<Tz> {
    WINDOWS_ZONES
        .iter()
        .find(|(windows, _)| windows.eq_ignore_ascii_case(name.trim()))
        .and_then(|(_, iana)| iana.parse().ok())
}

/// VTIMEZONE blocks of one calendar, keyed by `TZID`
#[derive(Debug, Clone, Default)]
pub struct Timezones {
    zones: HashMap<String, VTimezone>,
}

impl Timezones {
    /// Collect every usable VTIMEZONE among top-level calendar components
    #[must_use]
    pub fn from_components(components: &[Component<'_>]) -> Self {
        let zones = components
            .iter()
            .filter(|c| c.name.as_str().eq_ignore_ascii_case("VTIMEZONE"))
            .filter_map(|c| {
                let tzid = c.find_prop("TZID")?.val.as_str().trim().to_string();
                let Some(zone) = VTimezone::from_component(c) else {
                    debug!(tzid = %tzid, "VTIMEZONE has no usable observances");
                    return None;
                };
                Some((tzid, zone))
            })
            .collect();
        Self { zones }
    }

    /// Zone defined for `tzid`, if the calendar carries one
    #[must_use]
    pub fn get(&self, tzid: &str) -> Option<&VTimezone> {
        self.zones.get(tzid.trim())
    }
}

/// Zone rules from a VTIMEZONE block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VTimezone {
    observances: Vec<Observance>,
}

impl VTimezone {
    fn from_component(component: &Component<'_>) -> Option<Self> {
        let observances: Vec<_> = component
            .components
            .iter()
            .filter(|c| {
                let name = c.name.as_str();
                name.eq_ignore_ascii_case("STANDARD") || name.eq_ignore_ascii_case("DAYLIGHT")
            })
            .filter_map(Observance::from_component)
            .collect();
        (!observances.is_empty()).then_some(Self { observances })
    }

    /// UTC offset in effect at the wall-clock time `local`
    ///
    /// Before the first observance starts, its `TZOFFSETFROM` applies.
    #[must_use]
    pub fn offset_at(&self, local: NaiveDateTime) -> FixedOffset {
        self.observances
            .iter()
            .filter_map(|o| o.latest_onset(local).map(|onset| (onset, o.offset_to)))
            .max_by_key(|(onset, _)| *onset)
            .map(|(_, offset)| offset)
            .or_else(|| {
                self.observances
                    .iter()
                    .min_by_key(|o| o.start)
                    .map(|o| o.offset_from)
            })
            .unwrap_or_else(|| Utc.fix())
    }

    /// Convert a wall-clock time in this zone to UTC
    #[must_use]
    pub fn to_utc(&self, local: NaiveDateTime) -> DateTime<Utc> {
        let offset = self.offset_at(local);
        Utc.from_utc_datetime(&(local - Duration::seconds(i64::from(offset.local_minus_utc()))))
    }
}

/// A STANDARD or DAYLIGHT block
#[derive(Debug, Clone, PartialEq, Eq)]
struct Observance {
    start: NaiveDateTime,
    offset_from: FixedOffset,
    offset_to: FixedOffset,
    rule: Option<YearlyRule>,
}

impl Observance {
    fn from_component(component: &Component<'_>) -> Option<Self> {
        let start = parse_local(component.find_prop("DTSTART")?.val.as_str())?;
        let offset_to = parse_utc_offset(component.find_prop("TZOFFSETTO")?.val.as_str())?;
        let offset_from = component
            .find_prop("TZOFFSETFROM")
            .and_then(|p| parse_utc_offset(p.val.as_str()))
            .unwrap_or(offset_to);
        let rule = component
            .find_prop("RRULE")
            .and_then(|p| YearlyRule::parse(p.val.as_str(), start));

        Some(Self {
            start,
            offset_from,
            offset_to,
            rule,
        })
    }

    /// Most recent onset at or before `local`
    fn latest_onset(&self, local: NaiveDateTime) -> Option<NaiveDateTime> {
        if local < self.start {
            return None;
        }
        let Some(rule) = self.rule else {
            return Some(self.start);
        };

        let time = self.start.time();
        (self.start.year()..=local.year())
            .rev()
            .filter_map(|year| rule.onset_in(year, time))
            .find(|onset| {
                *onset <= local
                    && *onset >= self.start
                    && rule.until.is_none_or(|until| *onset <= until)
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct YearlyRule {
    month: u32,
    day: RuleDay,
    until: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleDay {
    /// `BYDAY=2SU` or `BYDAY=-1SU`
    Weekday { nth: i8, weekday: Weekday },
    /// `BYMONTHDAY=15`
    MonthDay(u32),
}

impl YearlyRule {
    /// Parse a `FREQ=YEARLY` rule; other frequencies yield `None`
    fn parse(rrule: &str, start: NaiveDateTime) -> Option<Self> {
        let mut yearly = false;
        let mut month = None;
        let mut day = None;
        let mut until = None;

        for part in rrule.split(';') {
            let Some((key, value)) = part.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim().to_ascii_uppercase().as_str() {
                "FREQ" => yearly = value.eq_ignore_ascii_case("YEARLY"),
                "BYMONTH" => month = value.parse::<u32>().ok(),
                "BYDAY" => day = parse_by_day(value),
                "BYMONTHDAY" => day = value.parse::<u32>().ok().map(RuleDay::MonthDay),
                "UNTIL" => until = parse_until(value),
                _ => {},
            }
        }

        yearly.then(|| Self {
            month: month.unwrap_or_else(|| start.month()),
            day: day.unwrap_or(RuleDay::MonthDay(start.day())),
            until,
        })
    }

    fn onset_in(&self, year: i32, time: NaiveTime) -> Option<NaiveDateTime> {
        let date = match self.day {
            RuleDay::MonthDay(day) => NaiveDate::from_ymd_opt(year, self.month, day)?,
            RuleDay::Weekday { nth, weekday } => nth_weekday(year, self.month, nth, weekday)?,
        };
        Some(date.and_time(time))
    }
}

/// `nth` occurrence of `weekday` in the month; negative counts from the end
fn nth_weekday(year: i32, month: u32, nth: i8, weekday: Weekday) -> Option<NaiveDate> {
    if nth == 0 {
        return None;
    }
    if nth > 0 {
        return NaiveDate::from_weekday_of_month_opt(year, month, weekday, nth.unsigned_abs());
    }

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    let back = (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    let date = last
        - Duration::days(i64::from(back))
        - Duration::weeks(i64::from(nth.unsigned_abs() - 1));
    (date.month() == month).then_some(date)
}

fn parse_by_day(value: &str) -> Option<RuleDay> {
    let value = value.split(',').next()?.trim();
    let (nth, code) = value.split_at_checked(value.len().checked_sub(2)?)?;
    let weekday = match code.to_ascii_uppercase().as_str() {
        "MO" => Weekday::Mon,
        "TU" => Weekday::Tue,
        "WE" => Weekday::Wed,
        "TH" => Weekday::Thu,
        "FR" => Weekday::Fri,
        "SA" => Weekday::Sat,
        "SU" => Weekday::Sun,
        _ => return None,
    };
    let nth = match nth {
        "" | "+" => 1,
        n => n.parse::<i8>().ok()?,
    };
    (nth != 0).then_some(RuleDay::Weekday { nth, weekday })
}

fn parse_until(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim_end_matches(['Z', 'z']);
    NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y%m%d")
                .ok()
                .and_then(|d| d.and_hms_opt(23, 59, 59))
        })
}

fn parse_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim().trim_end_matches(['Z', 'z']);
    NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%S").ok()
}

/// Parse `+HHMM`, `-HHMM` or `+HHMMSS`
fn parse_utc_offset(value: &str) -> Option<FixedOffset> {
    let value = value.trim();
    let (sign, digits) = match value.split_at_checked(1)? {
        ("+", digits) => (1, digits),
        ("-", digits) => (-1, digits),
        _ => return None,
    };
    if !matches!(digits.len(), 4 | 6) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits[0..2].parse().ok()?;
    let minutes: i32 = digits[2..4].parse().ok()?;
    let seconds: i32 = if digits.len() == 6 {
        digits[4..6].parse().ok()?
    } else {
        0
    };
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60 + seconds))
}
