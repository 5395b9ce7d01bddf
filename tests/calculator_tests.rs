use timepairs::core::calculator::{is_valid_time, pair_minutes, total_hours, total_minutes};
use timepairs::models::TimePair;

#[test]
fn test_valid_times() {
    assert!(is_valid_time("00:00"));
    assert!(is_valid_time("09:30"));
    assert!(is_valid_time("23:59"));
}

#[test]
fn test_invalid_times() {
    assert!(!is_valid_time(""));
    assert!(!is_valid_time("0930"));
    assert!(!is_valid_time("24:00"));
    assert!(!is_valid_time("12:60"));
    assert!(!is_valid_time("ab:cd"));
    assert!(!is_valid_time("12:"));
}

#[test]
fn test_pair_minutes_simple() {
    let pair = TimePair::new("09:00", "17:30");
    assert_eq!(pair_minutes(&pair), Some(510));
}

#[test]
fn test_pair_minutes_midnight_rollover() {
    // end before start means the pair crosses midnight
    let pair = TimePair::new("23:30", "00:15");
    assert_eq!(pair_minutes(&pair), Some(45));
}

#[test]
fn test_pair_minutes_zero_length() {
    let pair = TimePair::new("09:00", "09:00");
    assert_eq!(pair_minutes(&pair), Some(0));
}

#[test]
fn test_pair_minutes_invalid_field() {
    assert_eq!(pair_minutes(&TimePair::new("", "17:00")), None);
    assert_eq!(pair_minutes(&TimePair::new("09:00", "25:00")), None);
}

#[test]
fn test_total_empty_sequence() {
    assert_eq!(total_hours(&[]), 0.0);
}

#[test]
fn test_total_all_invalid() {
    let pairs = vec![
        TimePair::new("", ""),
        TimePair::new("99:99", "17:00"),
        TimePair::new("09:00", "not a time"),
    ];
    assert_eq!(total_hours(&pairs), 0.0);
}

#[test]
fn test_total_midnight_rollover() {
    let pairs = vec![TimePair::new("23:30", "00:15")];
    assert_eq!(total_hours(&pairs), 0.75);
}

#[test]
fn test_total_basic_sum() {
    // 510 min + 60 min = 570 min = 9.5 h
    let pairs = vec![
        TimePair::new("09:00", "17:30"),
        TimePair::new("12:00", "13:00"),
    ];
    assert_eq!(total_minutes(&pairs), 570);
    assert_eq!(total_hours(&pairs), 9.5);
}

#[test]
fn test_total_skips_invalid_pairs() {
    let pairs = vec![
        TimePair::new("09:00", "10:00"),
        TimePair::new("bad", "11:00"),
        TimePair::new("13:00", "14:30"),
    ];
    assert_eq!(total_hours(&pairs), 2.5);
}

#[test]
fn test_total_rounds_to_three_decimals() {
    // 475 min = 7h55m = 7.91666... -> 7.917
    let pairs = vec![TimePair::new("08:05", "16:00")];
    assert_eq!(total_hours(&pairs), 7.917);
}

#[test]
fn test_total_can_span_multiple_days() {
    // each pair wraps at most once, but the sum has no upper bound
    let pairs = vec![
        TimePair::new("01:00", "00:00"),
        TimePair::new("01:00", "00:00"),
    ];
    assert_eq!(total_hours(&pairs), 46.0);
}
