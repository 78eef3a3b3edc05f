use chrono::{TimeZone, Utc};
use tick_axis_rs::core::{
    AxisTimeZone, Calendar, FixedOffsetCalendar, Granularity, TickRequest, TickSequence,
    TimeRange, select_ticks,
};

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .expect("valid test timestamp")
        .timestamp()
}

fn utc_ticks(start: i64, end: i64, desired: usize) -> TickSequence {
    let calendar = FixedOffsetCalendar::utc();
    let range = TimeRange::new(start, end).expect("valid range");
    let request = TickRequest::new(range, desired).expect("valid request");
    select_ticks(request, &calendar).expect("tick selection")
}

#[test]
fn hour_ticks_anchor_to_midnight_of_the_start_day() {
    // 05:30 inside a 12-hour grid: the first boundary is noon, not some
    // offset carried over from the window start.
    let start = ts(2023, 5, 1, 5, 30, 0);
    let end = ts(2023, 5, 4, 0, 0, 0);

    let ticks = utc_ticks(start, end, 5);

    assert_eq!(ticks.granularity(), Granularity::Hours { step: 12 });
    assert_eq!(ticks.instants()[0], ts(2023, 5, 1, 12, 0, 0));

    let calendar = FixedOffsetCalendar::utc();
    for &instant in ticks.instants() {
        let hour = calendar.hour_of_day(instant).expect("hour");
        assert_eq!(hour % 12, 0);
        assert_eq!(calendar.minute_of_hour(instant).expect("minute"), 0);
        assert_eq!(calendar.second_of_minute(instant).expect("second"), 0);
    }
}

#[test]
fn minute_ticks_anchor_to_the_top_of_the_hour() {
    let start = ts(2023, 5, 10, 9, 7, 30);
    let end = ts(2023, 5, 10, 9, 47, 30);

    let ticks = utc_ticks(start, end, 4);

    assert_eq!(ticks.granularity(), Granularity::Minutes { step: 10 });
    assert_eq!(
        ticks.instants(),
        &[
            ts(2023, 5, 10, 9, 10, 0),
            ts(2023, 5, 10, 9, 20, 0),
            ts(2023, 5, 10, 9, 30, 0),
            ts(2023, 5, 10, 9, 40, 0),
        ]
    );
}

#[test]
fn second_ticks_anchor_to_the_top_of_the_minute() {
    let start = ts(2023, 5, 10, 9, 5, 7);
    let end = ts(2023, 5, 10, 9, 5, 52);

    let ticks = utc_ticks(start, end, 4);

    assert_eq!(ticks.granularity(), Granularity::Seconds { step: 10 });
    let calendar = FixedOffsetCalendar::utc();
    for &instant in ticks.instants() {
        assert_eq!(calendar.second_of_minute(instant).expect("second") % 10, 0);
    }
}

#[test]
fn day_ticks_follow_the_day_of_year_grid() {
    let start = ts(2023, 3, 10, 0, 0, 0);
    let end = ts(2023, 3, 30, 0, 0, 0);

    let ticks = utc_ticks(start, end, 5);

    assert_eq!(ticks.granularity(), Granularity::Days { step: 4 });
    // March 10th 2023 is ordinal 69; the next multiple of four is 72,
    // i.e. March 13th.
    assert_eq!(ticks.instants()[0], ts(2023, 3, 13, 0, 0, 0));

    let calendar = FixedOffsetCalendar::utc();
    for &instant in ticks.instants() {
        assert_eq!(calendar.day_of_year(instant).expect("ordinal") % 4, 0);
        assert_eq!(calendar.start_of_day(instant).expect("midnight"), instant);
    }
}

#[test]
fn first_tick_is_never_before_the_window_start() {
    // The start day itself sits on the aligned grid, but the window
    // starts mid-day; the boundary at its midnight must be skipped.
    let start = ts(2023, 3, 13, 6, 0, 0);
    let end = ts(2023, 3, 30, 0, 0, 0);

    let ticks = utc_ticks(start, end, 5);

    assert_eq!(ticks.granularity(), Granularity::Days { step: 3 });
    assert_eq!(ticks.instants()[0], ts(2023, 3, 16, 0, 0, 0));
    for &instant in ticks.instants() {
        assert!(instant >= start);
        assert!(instant < end);
    }
}

#[test]
fn window_start_exactly_on_a_boundary_is_included() {
    let start = ts(2023, 5, 10, 9, 10, 0);
    let end = ts(2023, 5, 10, 9, 50, 0);

    let ticks = utc_ticks(start, end, 4);

    assert_eq!(ticks.granularity(), Granularity::Minutes { step: 10 });
    assert_eq!(ticks.instants()[0], start);
}

#[test]
fn fixed_offset_timezone_shifts_the_day_anchor() {
    // UTC 03:30 is 05:30 at +02:00; the aligned noon boundary lands at
    // 10:00 UTC.
    let start = ts(2023, 5, 1, 3, 30, 0);
    let end = ts(2023, 5, 3, 15, 30, 0);

    let calendar = FixedOffsetCalendar::new(AxisTimeZone::FixedOffsetMinutes { minutes: 120 });
    let range = TimeRange::new(start, end).expect("valid range");
    let request = TickRequest::new(range, 5).expect("valid request");
    let ticks = select_ticks(request, &calendar).expect("tick selection");

    assert_eq!(ticks.granularity(), Granularity::Hours { step: 12 });
    assert_eq!(ticks.instants()[0], ts(2023, 5, 1, 10, 0, 0));
    for &instant in ticks.instants() {
        assert_eq!(calendar.hour_of_day(instant).expect("local hour") % 12, 0);
    }
}

#[test]
fn panning_the_window_keeps_overlapping_ticks_in_place() {
    let first = utc_ticks(ts(2023, 5, 10, 9, 0, 0), ts(2023, 5, 10, 15, 0, 0), 6);
    let second = utc_ticks(ts(2023, 5, 10, 9, 20, 0), ts(2023, 5, 10, 15, 20, 0), 6);

    assert_eq!(first.granularity(), second.granularity());

    let overlap_start = ts(2023, 5, 10, 9, 20, 0);
    let overlap_end = ts(2023, 5, 10, 15, 0, 0);
    let in_overlap = |instants: &[i64]| {
        instants
            .iter()
            .copied()
            .filter(|&t| t >= overlap_start && t < overlap_end)
            .collect::<Vec<i64>>()
    };

    assert_eq!(in_overlap(first.instants()), in_overlap(second.instants()));
}
