use super::*;

fn assert_approx_eq(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} != {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        let tolerance = (e.abs() * 1e-6).max(1e-12);
        assert!((a - e).abs() <= tolerance, "{actual:?} != {expected:?}");
    }
}

#[test]
fn it_rounds_numbers() {
    assert_eq!(round_number(3.0, &[1.5, 3.0, 7.0], &[1.0, 2.0, 5.0], false), 5.0);
    assert_eq!(round_number(2.0, &[1.0, 2.0, 5.0], &[1.0, 2.0, 5.0], true), 2.0);
    assert_eq!(round_number(1.003, &[1.0, 2.0, 5.0], &[1.0, 2.0, 5.0], true), 2.0);
}

#[test]
fn it_rounds_past_the_last_limit_to_ten() {
    assert_eq!(round_number(8.0, &[1.5, 3.0, 7.0], &[1.0, 2.0, 5.0], false), 10.0);
    assert_eq!(round_number(0.55, &[1.0, 2.0, 5.0], &[1.0, 2.0, 5.0], true), 1.0);
}

#[test]
fn it_returns_a_single_tick_when_bounds_are_equal() {
    assert_eq!(tick_values(10.0, 10.0, 10).unwrap(), vec![10.0]);
}

#[test]
fn it_creates_tick_values() {
    assert_approx_eq(
        &tick_values(0.0, 10.0, 10).unwrap(),
        &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0],
    );
    assert_approx_eq(&tick_values(-20.0, -10.0, 5).unwrap(), &[-20.0, -15.0, -10.0]);
    assert_approx_eq(
        &tick_values(1e6 + 5.0, 1e6 + 10.0, 10).unwrap(),
        &(5..11).map(|pos| 1e6 + f64::from(pos)).collect::<Vec<_>>(),
    );
    assert_approx_eq(
        &tick_values(1.0 + 1e-7, 1.0 + 5e-7, 10).unwrap(),
        &(1..7).map(|factor| 1.0 + 1e-7 * f64::from(factor)).collect::<Vec<_>>(),
    );
    assert_approx_eq(
        &tick_values(0.002, 0.009, 5).unwrap(),
        &[0.002, 0.004, 0.006, 0.008, 0.01],
    );
}

#[test]
fn it_finds_the_closest_prefix_power() {
    assert_eq!(find_closest_prefix_power(1e3), 3);
    assert_eq!(find_closest_prefix_power(200e6), 6);
    assert_eq!(find_closest_prefix_power(0.1), -3);
    assert_eq!(find_closest_prefix_power(1e-3), -3);
    assert_eq!(find_closest_prefix_power(0.0), 0);
    assert_eq!(find_closest_prefix_power(-2500.0), 3);
}

#[test]
fn it_clamps_the_prefix_power() {
    assert_eq!(find_closest_prefix_power(1e30), 24);
    assert_eq!(find_closest_prefix_power(1e-30), -24);
}

#[test]
fn it_looks_up_metric_prefixes() {
    assert_eq!(metric_prefix(3), Some("k"));
    assert_eq!(metric_prefix(-6), Some("μ"));
    assert_eq!(metric_prefix(0), None);
    assert_eq!(metric_prefix(4), None);
}

#[test]
fn it_formats_tick_labels() {
    assert_eq!(
        make_tick_labels(&[1.0, 1.2, 1.4, 1.6, 1.8, 2.0], 0.0, 0),
        vec!["1.00", "1.20", "1.40", "1.60", "1.80", "2.00"]
    );
    assert_eq!(
        make_tick_labels(&[1e6 + 3.0, 1e6 + 4.0, 1e6 + 5.0], 1e6, 0),
        vec!["3.00", "4.00", "5.00"]
    );
    assert_eq!(make_tick_labels(&[5_000_003.0], 0.0, 6), vec!["5.00M"]);
    assert_eq!(
        make_tick_labels(
            &(0..6).map(|tick| 5_561_943.0 + f64::from(tick)).collect::<Vec<_>>(),
            5_561_940.0,
            0,
        ),
        vec!["3.00", "4.00", "5.00", "6.00", "7.00", "8.00"]
    );
    assert_eq!(
        make_tick_labels(&[1e9 + 300.0e3, 1e9 + 400.0e3, 1e9 + 500.0e3], 1e9, 3),
        vec!["300.00k", "400.00k", "500.00k"]
    );
}

#[test]
fn it_finds_axis_label_adjustors() {
    let cases: Vec<(Vec<f64>, f64, i32)> = vec![
        (vec![1.0, 2.0, 3.0], 0.0, 0),
        (vec![2.0, 4.0, 6.0, 8.0, 10.0], 0.0, 0),
        (vec![2.0e3, 4.0e3, 6.0e3, 8.0e3, 10.0e3], 0.0, 3),
        (vec![0.0, 5.0e-6, 10.0e-6, 15.0e-6], 0.0, -6),
        (vec![1.0, 1.2, 1.4, 1.6, 1.8, 2.0], 0.0, 0),
        (vec![1e6 + 3.0, 1e6 + 4.0, 1e6 + 5.0], 1e6, 0),
        (
            (30..50).step_by(5).map(|tick| 1e6 + f64::from(tick) / 10.0).collect(),
            1e6,
            0,
        ),
        (vec![1e9 + 300.0e3, 1e9 + 400.0e3, 1e9 + 500.0e3], 1e9, 3),
        (vec![1.0 + 10.0e-6, 1.0 + 20.0e-6, 1.0 + 30.0e-6], 1.0, -6),
        ((500..10_001).step_by(280).map(f64::from).collect(), 0.0, 3),
        ((10..21).map(|tick| f64::from(tick) / 10.0).collect(), 0.0, 0),
        ((1..11).map(|tick| 100.0 + f64::from(tick) * 1e-6).collect(), 100.0, -6),
        (vec![5_000_003.0], 0.0, 6),
        ((0..6).map(|tick| 5_561_943.0 + f64::from(tick)).collect(), 5_561_940.0, 0),
        (vec![-1e6 + 1.0, -1e6 + 2.0, -1e6 + 3.0], -1e6, 0),
        ((0..101).map(|step| f64::from(step) / 100.0).collect(), 0.0, 0),
    ];

    for (ticks, expected_subtractor, expected_power) in cases {
        let (subtractor, power) = axis_label_adjustors(&ticks).unwrap();
        assert_approx_eq(&[subtractor], &[expected_subtractor]);
        assert_eq!(power, expected_power, "tick divisor power for {ticks:?}");
    }
}

#[test]
fn it_rejects_descending_ticks() {
    let err = axis_label_adjustors(&[1.0, 2.0, 3.0, 6.0, 5.0]).unwrap_err();
    assert_eq!(
        err,
        ChartError::DescendingTicks {
            left: 6.0,
            right: 5.0
        }
    );
}

#[test]
fn it_rejects_duplicate_ticks() {
    let err = axis_label_adjustors(&[1.0, 2.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, ChartError::DuplicateTicks { value: 2.0 });
}

#[test]
fn it_returns_a_zero_step_for_equal_ticks() {
    assert_eq!(min_step_size(&[10.0, 10.0]).unwrap(), 0.0);
}

#[test]
fn it_snaps_steps_to_the_next_power_of_ten() {
    let step = min_step_size(&[1.0, 1.000001, 3.0]).unwrap();
    assert!((step - 1e-6).abs() < 1e-18, "{step}");

    let step = min_step_size(&[0.0, 9.99999e-6, 3e-5]).unwrap();
    assert!((step - 1e-5).abs() < 1e-18, "{step}");
}

#[test]
fn it_needs_two_ticks_for_a_step() {
    assert_eq!(
        min_step_size(&[1.0]).unwrap_err(),
        ChartError::NotEnoughTicks {
            required: 2,
            provided: 1
        }
    );
}

#[test]
fn it_rejects_ranges_that_round_past_the_largest_float() {
    assert_eq!(
        tick_values(0.0, 1.7e308, 10).unwrap_err(),
        ChartError::UnrepresentableRange {
            min: 0.0,
            max: 1.7e308
        }
    );
    assert!(matches!(
        tick_values(-1e308, 1e308, 10),
        Err(ChartError::UnrepresentableRange { .. })
    ));
}

#[test]
fn it_caps_the_number_of_ticks() {
    assert!(matches!(
        tick_values(0.0, 1.0, usize::MAX),
        Err(ChartError::TooManyTicks {
            limit: MAX_TICKS,
            ..
        })
    ));
    assert_eq!(tick_values(0.0, 1.0, 101).unwrap().len(), 101);
}
