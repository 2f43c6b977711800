use super::*;

#[test]
fn it_generates_tick_labels() {
    let ticks = Ticks::new(123456.0 + 1.0, 123456.0 + 11.0, 14).unwrap();
    assert_eq!(
        ticks.tick_labels,
        vec![
            "57.00", "58.00", "59.00", "60.00", "61.00", "62.00", "63.00", "64.00", "65.00",
            "66.00", "67.00",
        ]
    );
    assert_eq!(ticks.axis_power, 3);
    assert_eq!(ticks.tick_divisor_power, 0);
    assert_eq!(ticks.axis_subtractor_label.as_deref(), Some("123.40k"));
}

#[test]
fn it_rejects_unequal_tick_labels() {
    let err = Ticks::custom(
        0.0,
        10.0,
        20,
        Some(vec![1.0, 2.0, 3.0]),
        Some(vec!["1.0".into(), "2.0".into(), "3.0".into(), "4.0".into()]),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ChartError::TickLabelMismatch {
            values: 3,
            labels: 4
        }
    );
}

#[test]
fn it_keeps_custom_labels() {
    let ticks = Ticks::custom(
        0.0,
        2.0,
        5,
        Some(vec![0.0, 1.0, 2.0]),
        Some(vec!["low".into(), "mid".into(), "high".into()]),
    )
    .unwrap();

    assert_eq!(
        ticks.iter().collect::<Vec<_>>(),
        vec![(0.0, "low"), (1.0, "mid"), (2.0, "high")]
    );
}

#[test]
fn it_treats_empty_custom_values_as_absent() {
    let ticks = Ticks::custom(0.0, 10.0, 3, Some(vec![]), Some(vec![])).unwrap();
    assert_eq!(ticks.tick_values, vec![0.0, 5.0, 10.0]);
    assert_eq!(ticks.tick_labels, vec!["0.00", "5.00", "10.00"]);
}

#[test]
fn it_returns_at_least_two_ticks_in_tight_space() {
    let ticks = Ticks::new(0.0, 10.0, 1).unwrap();
    assert_eq!(ticks.max_ticks, 2);
    assert_eq!(ticks.len(), 2);
}

#[test]
fn it_returns_one_tick_for_a_single_value() {
    let ticks = Ticks::new(5.0, 5.0, 5).unwrap();
    assert_eq!(ticks.tick_values, vec![5.0]);
    assert_eq!(ticks.tick_labels, vec!["5.00"]);
    assert_eq!(ticks.axis_subtractor_label, None);
}

#[test]
fn it_scales_labels_to_a_prefix() {
    let ticks = Ticks::new(1000.0, 5000.0, 5).unwrap();
    assert_eq!(ticks.tick_labels, vec!["0.00k", "2.00k", "4.00k", "6.00k"]);

    let ticks = Ticks::new(1e9 + 3e5, 1e9 + 5e5, 3).unwrap();
    assert_eq!(ticks.tick_labels, vec!["300.00k", "400.00k", "500.00k"]);
    assert_eq!(ticks.axis_subtractor_label.as_deref(), Some("1.00G"));
}

#[test]
fn it_rejects_an_inverted_range() {
    assert_eq!(
        Ticks::new(10.0, 4.0, 5).unwrap_err(),
        ChartError::InvalidRange {
            min: 10.0,
            max: 4.0
        }
    );
}

#[test]
fn it_rejects_non_finite_data() {
    assert!(matches!(
        Ticks::new(f64::NAN, 4.0, 5),
        Err(ChartError::NonFiniteData { .. })
    ));
    assert!(matches!(
        Ticks::new(0.0, f64::INFINITY, 5),
        Err(ChartError::NonFiniteData { .. })
    ));
}

#[test]
fn it_serializes_to_json() {
    let ticks = Ticks::new(0.0, 10.0, 3).unwrap();
    let json = serde_json::to_value(&ticks).unwrap();

    assert_eq!(json["tick_labels"], serde_json::json!(["0.00", "5.00", "10.00"]));
    assert_eq!(json["axis_subtractor_label"], serde_json::Value::Null);
}

#[test]
fn it_rejects_ranges_without_finite_ticks() {
    let err = Ticks::new(0.0, 1.7e308, 10).unwrap_err();

    assert_eq!(
        err,
        ChartError::UnrepresentableRange {
            min: 0.0,
            max: 1.7e308
        }
    );
}

#[test]
fn it_rejects_more_ticks_than_it_can_hold() {
    let err = Ticks::new(0.0, 1.0, usize::MAX).unwrap_err();

    assert!(
        matches!(
            err,
            ChartError::TooManyTicks {
                limit: tick_math::MAX_TICKS,
                ..
            }
        ),
        "{err:?}"
    );
}
