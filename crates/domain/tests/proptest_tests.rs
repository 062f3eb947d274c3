//! Property-based tests for domain types
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use domain::{CalendarEvent, Frame, FrameSequence, Status};
use proptest::prelude::*;

fn instant(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

// ============================================================================
// CalendarEvent containment
// ============================================================================

mod containment_tests {
    use super::*;

    proptest! {
        #[test]
        fn instants_inside_range_are_active(
            start in 0i64..2_000_000_000,
            len in 1i64..86_400 * 7,
            offset_ratio in 0.0f64..=1.0
        ) {
            let event = CalendarEvent::new(instant(start), instant(start + len));
            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
            let offset = (len as f64 * offset_ratio) as i64;
            prop_assert!(event.is_active_at(instant(start + offset)));
        }

        #[test]
        fn instants_before_start_are_inactive(
            start in 1i64..2_000_000_000,
            len in 0i64..86_400,
            before in 1i64..86_400
        ) {
            let event = CalendarEvent::new(instant(start), instant(start + len));
            prop_assert!(!event.is_active_at(instant(start) - Duration::seconds(before)));
        }

        #[test]
        fn instants_after_end_are_inactive(
            start in 0i64..2_000_000_000,
            len in 0i64..86_400,
            after in 1i64..86_400
        ) {
            let event = CalendarEvent::new(instant(start), instant(start + len));
            prop_assert!(!event.is_active_at(instant(start + len + after)));
        }

        #[test]
        fn all_day_events_never_active(
            days in 0i64..20_000,
            span in 1i64..30,
            probe in 0i64..2_000_000_000
        ) {
            let base = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
            let start = base + Duration::days(days);
            let event = CalendarEvent::new(start, start + Duration::days(span));
            prop_assert!(!event.is_active_at(instant(probe)));
        }
    }
}

// ============================================================================
// Frame construction
// ============================================================================

mod frame_tests {
    use super::*;

    proptest! {
        #[test]
        fn solid_frame_has_exact_buffer(
            width in 1u32..64,
            height in 1u32..64,
            rgba in any::<[u8; 4]>()
        ) {
            let frame = Frame::solid(width, height, rgba).unwrap();
            prop_assert_eq!(frame.pixels().len(), width as usize * height as usize * 4);
        }

        #[test]
        fn placeholder_always_single_frame(width in 1u32..256, height in 1u32..256) {
            let seq = FrameSequence::placeholder(width, height, [0, 0, 0, 255]).unwrap();
            prop_assert_eq!(seq.len(), 1);
        }
    }
}

// ============================================================================
// Status parsing
// ============================================================================

mod status_tests {
    use super::*;

    proptest! {
        #[test]
        fn label_parses_back(busy in any::<bool>()) {
            let status = if busy { Status::Busy } else { Status::Idle };
            prop_assert_eq!(status.label().parse::<Status>().unwrap(), status);
        }
    }
}
