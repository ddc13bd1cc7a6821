//! Akima interpolation: regression against reference values and
//! property-based checks of interpolation and chaining.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::f64::consts::PI;

use curvekit::{
    akima::{self, Interval},
    error::{self, Error},
};
use proptest::prelude::*;

/// Samples of `sin(x)` on `[0, 0.972]`, unevenly spaced.
const SINE_SAMPLES: [[f64; 2]; 14] = [
    [0.000, 0.000],
    [0.125, 0.124_674_73],
    [0.217, 0.215_300_95],
    [0.299, 0.294_564_72],
    [0.376, 0.367_202_85],
    [0.450, 0.434_965_53],
    [0.520, 0.496_880_14],
    [0.589, 0.555_529_80],
    [0.656, 0.609_951_99],
    [0.721, 0.660_136_15],
    [0.785_398_163_4, 0.707_106_781_2],
    [0.849, 0.750_620_05],
    [0.911, 0.790_117_09],
    [0.972, 0.826_014_66],
];

/// Reference Akima values for `SINE_SAMPLES` at `x = 0.00, 0.05, ..., 0.95`.
const SINE_REFERENCE: [f64; 20] = [
    0.000_000_0,
    0.050_040_2,
    0.099_843_5,
    0.149_431_0,
    0.198_645_8,
    0.247_415_7,
    0.295_521_8,
    0.342_891_6,
    0.389_426_5,
    0.434_965_5,
    0.479_420_4,
    0.522_689_3,
    0.564_649_3,
    0.605_182_1,
    0.644_214_1,
    0.681_640_5,
    0.717_360_9,
    0.751_281_1,
    0.783_326_7,
    0.813_411_4,
];

#[test]
fn sine_reference_table() -> error::Result<()> {
    for (step, expected) in SINE_REFERENCE.iter().enumerate() {
        let x = step as f64 * 0.05;
        let got = akima::build(&SINE_SAMPLES, x)?.point_at(x);
        assert!(
            (got - expected).abs() < 5e-8,
            "akima({x:.2}) = {got:.7}, expected {expected:.7}"
        );
    }
    Ok(())
}

#[test]
fn dense_sine_walk() -> error::Result<()> {
    let step = PI / 35.0;
    let samples: Vec<[f64; 2]> = (0..=70_i32)
        .map(|i| {
            let x = f64::from(i) * step;
            [x, x.sin()]
        })
        .collect();
    let end = samples[samples.len() - 1][0];

    let mut interval = akima::first(&samples)?;
    for i in 0_i32.. {
        let x = f64::from(i) * 0.05;
        if x > end {
            break;
        }
        while interval.x2() < x {
            interval = interval.next(&samples).expect("x is inside the domain");
        }
        let err = (interval.point_at(x) - x.sin()).abs();
        assert!(err < 5e-5, "sin({x:.2}) off by {err:e}");
    }
    Ok(())
}

#[test]
fn interpolate_matches_walk() -> error::Result<()> {
    let xs: Vec<f64> = (0..20_i32).map(|i| f64::from(i) * 0.05).collect();
    let values = akima::interpolate(&SINE_SAMPLES, xs.iter().copied())?;
    for (x, y) in xs.iter().zip(values) {
        assert_eq!(y, akima::build(&SINE_SAMPLES, *x)?.point_at(*x));
    }
    Ok(())
}

#[test]
fn accepts_vec_points() -> error::Result<()> {
    let samples: Vec<Vec<f64>> = (1..=5_i32)
        .map(|i| vec![f64::from(i), f64::from(i)])
        .collect();
    let interval = akima::build(&samples, 4.5)?;
    assert_eq!(interval.index(), 3);
    assert_eq!(interval.point_at(4.5), 4.5);
    Ok(())
}

#[test]
fn reports_each_cause() {
    let line = [[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0], [5.0, 5.0]];
    assert!(matches!(
        akima::build(&line[..4], 2.0),
        Err(Error::TooFewPoints { actual: 4, .. })
    ));
    assert!(matches!(
        akima::build(&line, -1.0),
        Err(Error::OutOfDomain { .. })
    ));
    assert!(matches!(
        akima::build(&line, 5.5),
        Err(Error::OutOfDomain { .. })
    ));
}

/// Sorted sample sets with uneven spacing and arbitrary ordinates.
fn sorted_samples() -> impl Strategy<Value = Vec<[f64; 2]>> {
    prop::collection::vec((0.05f64..5.0, -50.0f64..50.0), 5..24).prop_map(|steps| {
        let mut x = -10.0;
        steps
            .into_iter()
            .map(|(gap, y)| {
                x += gap;
                [x, y]
            })
            .collect()
    })
}

/// A sample set together with an abscissa inside its domain.
fn samples_and_query() -> impl Strategy<Value = (Vec<[f64; 2]>, f64)> {
    (sorted_samples(), 0.0f64..=1.0).prop_map(|(samples, fraction)| {
        let (min, max) = (samples[0][0], samples[samples.len() - 1][0]);
        let x = (min + fraction * (max - min)).clamp(min, max);
        (samples, x)
    })
}

fn midpoint(interval: &Interval) -> f64 {
    (interval.x1() + interval.x2()) / 2.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// The interval found for a query always brackets it.
    #[test]
    fn build_brackets_query((samples, x) in samples_and_query()) {
        let interval = akima::build(&samples, x).expect("query inside domain");
        prop_assert!(interval.contains(x), "{x} not in [{}, {}]", interval.x1(), interval.x2());
        prop_assert_eq!(interval.x1(), samples[interval.index()][0]);
        prop_assert_eq!(interval.x2(), samples[interval.index() + 1][0]);
    }

    /// Evaluating at a knot reproduces its ordinate, exactly except at the
    /// last knot, which closes its interval.
    #[test]
    fn knots_are_interpolated(samples in sorted_samples()) {
        let (last, inner) = samples.split_last().expect("non-empty");
        for [x, y] in inner {
            let got = akima::build(&samples, *x).expect("knot inside domain").point_at(*x);
            prop_assert_eq!(got, *y, "y({}) = {}, expected {}", x, got, y);
        }
        let [x, y] = *last;
        let got = akima::build(&samples, x).expect("knot inside domain").point_at(x);
        prop_assert!((got - y).abs() < 1e-6, "y({x}) = {got}, expected {y}");
    }

    /// Both ends of every interval meet the samples.
    #[test]
    fn intervals_are_continuous(samples in sorted_samples()) {
        let walk: Vec<_> = akima::intervals(&samples).expect("enough samples").collect();
        prop_assert_eq!(walk.len(), samples.len() - 1);
        for (interval, pair) in walk.iter().zip(samples.windows(2)) {
            prop_assert_eq!(interval.point_at(pair[0][0]), pair[0][1]);
            prop_assert!((interval.point_at(pair[1][0]) - pair[1][1]).abs() < 1e-6);
        }
        for pair in walk.windows(2) {
            prop_assert_eq!(pair[0].x2(), pair[1].x1());
            prop_assert_eq!(pair[0].t2(), pair[1].t1());
        }
    }

    /// Stepping to a neighbour agrees with a fresh search inside it.
    #[test]
    fn chaining_matches_rebuild((samples, x) in samples_and_query()) {
        let interval = akima::build(&samples, x).expect("query inside domain");
        match interval.next(&samples) {
            Some(next) => {
                prop_assert_eq!(next, akima::build(&samples, midpoint(&next)).expect("inside"));
                prop_assert_eq!(next.prev(&samples), Some(interval));
            }
            None => prop_assert_eq!(interval.index() + 2, samples.len()),
        }
        match interval.prev(&samples) {
            Some(prev) => {
                prop_assert_eq!(prev, akima::build(&samples, midpoint(&prev)).expect("inside"));
                prop_assert_eq!(prev.next(&samples), Some(interval));
            }
            None => prop_assert_eq!(interval.index(), 0),
        }
    }

    /// Collinear samples give a straight line with unit slope everywhere.
    #[test]
    fn collinear_samples_stay_linear(samples in sorted_samples()) {
        let line: Vec<[f64; 2]> = samples.iter().map(|&[x, _]| [x, 2.0 * x + 1.0]).collect();
        for interval in akima::intervals(&line).expect("enough samples") {
            prop_assert!((interval.t1() - 2.0).abs() < 1e-9);
            let x = midpoint(&interval);
            prop_assert!((interval.point_at(x) - (2.0 * x + 1.0)).abs() < 1e-9);
        }
    }

    /// Queries outside the domain are rejected.
    #[test]
    fn outside_domain_fails(samples in sorted_samples(), beyond in 1e-6f64..100.0) {
        let (min, max) = (samples[0][0], samples[samples.len() - 1][0]);
        let below = akima::build(&samples, min - beyond);
        let above = akima::build(&samples, max + beyond);
        prop_assert!(matches!(below, Err(Error::OutOfDomain { .. })), "expected OutOfDomain below the domain");
        prop_assert!(matches!(above, Err(Error::OutOfDomain { .. })), "expected OutOfDomain above the domain");
    }
}
