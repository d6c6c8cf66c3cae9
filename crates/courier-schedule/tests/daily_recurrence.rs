// Recurrence properties the scheduler must keep: next-future-occurrence
// selection, non-negative delays, DST tolerance, and freedom from drift.

use std::time::Duration as StdDuration;

use chrono::{Duration, TimeZone, Timelike, Utc};
use chrono_tz::Europe::Madrid;
use courier_schedule::DailySchedule;

#[test]
fn before_the_slot_fires_today_in_madrid() {
    let schedule = DailySchedule::parse("09:00:00", "Europe/Madrid").unwrap();

    // Local 2025-06-10 08:59:00 CEST.
    let from = Utc.with_ymd_and_hms(2025, 6, 10, 6, 59, 0).unwrap();
    let next = schedule.next_fire(from).unwrap();

    assert_eq!(next, Utc.with_ymd_and_hms(2025, 6, 10, 7, 0, 0).unwrap());
    assert_eq!(
        schedule.delay_until_next(from).unwrap(),
        StdDuration::from_secs(60)
    );
}

#[test]
fn after_the_slot_fires_tomorrow_in_madrid() {
    let schedule = DailySchedule::parse("09:00:00", "Europe/Madrid").unwrap();

    // Local 2025-06-10 09:00:01 CEST.
    let from = Utc.with_ymd_and_hms(2025, 6, 10, 7, 0, 1).unwrap();
    let next = schedule.next_fire(from).unwrap();

    assert_eq!(next, Utc.with_ymd_and_hms(2025, 6, 11, 7, 0, 0).unwrap());
}

#[test]
fn spring_forward_yields_one_23h_cycle() {
    // Madrid jumps 02:00 CET -> 03:00 CEST on 2024-03-31.
    let schedule = DailySchedule::parse("09:00:00", "Europe/Madrid").unwrap();

    let fire1 = schedule
        .next_fire(Utc.with_ymd_and_hms(2024, 3, 30, 0, 0, 0).unwrap())
        .unwrap();
    assert_eq!(fire1, Utc.with_ymd_and_hms(2024, 3, 30, 8, 0, 0).unwrap());

    let fire2 = schedule.next_fire(fire1).unwrap();
    assert_eq!(fire2 - fire1, Duration::hours(23));
}

#[test]
fn fall_back_yields_one_25h_cycle() {
    // Madrid falls back 03:00 CEST -> 02:00 CET on 2024-10-27.
    let schedule = DailySchedule::parse("09:00:00", "Europe/Madrid").unwrap();

    let fire1 = schedule
        .next_fire(Utc.with_ymd_and_hms(2024, 10, 26, 0, 0, 0).unwrap())
        .unwrap();
    let fire2 = schedule.next_fire(fire1).unwrap();

    assert_eq!(fire2 - fire1, Duration::hours(25));
}

#[test]
fn slot_inside_the_dst_gap_skips_to_the_next_day() {
    // 02:30 does not exist on 2024-03-31 in Madrid.
    let schedule = DailySchedule::parse("02:30:00", "Europe/Madrid").unwrap();

    let from = Utc.with_ymd_and_hms(2024, 3, 30, 12, 0, 0).unwrap();
    let next = schedule.next_fire(from).unwrap();

    // 2024-04-01 02:30 CEST.
    assert_eq!(next, Utc.with_ymd_and_hms(2024, 4, 1, 0, 30, 0).unwrap());
}

#[test]
fn ambiguous_fall_back_slot_resolves_to_the_earlier_instant() {
    // 02:30 happens twice on 2024-10-27 in Madrid; the CEST instance wins.
    let schedule = DailySchedule::parse("02:30:00", "Europe/Madrid").unwrap();

    let from = Utc.with_ymd_and_hms(2024, 10, 26, 22, 30, 0).unwrap();
    let next = schedule.next_fire(from).unwrap();

    assert_eq!(next, Utc.with_ymd_and_hms(2024, 10, 27, 0, 30, 0).unwrap());
}

#[test]
fn no_drift_across_simulated_firings() {
    let schedule = DailySchedule::parse("09:00:00", "Europe/Madrid").unwrap();

    // 30 cycles spanning the 2024-10-27 DST transition, with callback
    // latencies of up to a few minutes folded into "now" after each fire.
    let mut now = Utc.with_ymd_and_hms(2024, 10, 20, 12, 0, 0).unwrap();
    for cycle in 0..30i64 {
        let next = schedule.next_fire(now).unwrap();
        assert!(next > now, "cycle {cycle}: fire instant not in the future");

        let local = next.with_timezone(&Madrid);
        assert_eq!(
            (local.hour(), local.minute(), local.second()),
            (9, 0, 0),
            "cycle {cycle}: fired outside the configured minute"
        );

        now = next + Duration::seconds(1 + (cycle % 7) * 47);
    }
}
