//! Serialization tests for the `serde` feature.
//!
//! Run with `cargo test --features serde` (or `--all-features`). Configs
//! persist as `{"period": n}` and restore to an equal value that computes the
//! same output; frames restore only when their shape is consistent.

#![cfg(feature = "serde")]

use ta_cn::indicators::{BarsSinceN, Diff, Filter, Hhv, Llv, Ma, Ref, Sum};
use ta_cn::SeriesFrame;

fn round_trip<C>(config: &C) -> C
where
    C: serde::Serialize + serde::de::DeserializeOwned,
{
    let json = serde_json::to_string(config).expect("serialize config");
    serde_json::from_str(&json).expect("deserialize config")
}

#[test]
fn serde_window_configs_round_trip() {
    let close = vec![10.0_f64, 10.4, 10.1, 10.9, 11.2, 11.0, 11.5];

    let hhv = Hhv::new().period(3);
    assert_eq!(round_trip(&hhv), hhv);
    let llv = Llv::new();
    assert_eq!(round_trip(&llv), llv);
    let ma = Ma::new().period(2);
    assert_eq!(round_trip(&ma), ma);

    let cumulative = Sum::cumulative();
    let restored = round_trip(&cumulative);
    assert_eq!(restored.get_period(), 0);
    assert_eq!(
        restored.compute(&close).unwrap(),
        cumulative.compute(&close).unwrap()
    );
}

#[test]
fn serde_shift_configs_keep_sign() {
    let lookahead = Ref::new().period(-2);
    assert_eq!(round_trip(&lookahead).get_period(), -2);
    let diff = Diff::new().period(3);
    assert_eq!(round_trip(&diff), diff);
}

#[test]
fn serde_scan_configs_round_trip() {
    let filter = Filter::new().period(3);
    assert_eq!(serde_json::to_string(&filter).unwrap(), r#"{"period":3}"#);
    assert_eq!(round_trip(&filter), filter);

    let restored: BarsSinceN = serde_json::from_str(r#"{"period":4}"#).unwrap();
    assert_eq!(restored, BarsSinceN::new().period(4));

    let cond = [1, 1, 0, 0, 1, 0];
    assert_eq!(
        round_trip(&filter).compute(&cond).unwrap(),
        filter.compute(&cond).unwrap()
    );
}

#[test]
fn serde_frame_rejects_ragged_columns() {
    let json = r#"{"columns":[[1.0],[1.0,2.0]],"names":null,"n_rows":2}"#;
    let err = serde_json::from_str::<SeriesFrame<f64>>(json).unwrap_err();
    assert!(err.to_string().contains("shape mismatch"), "{err}");
}

#[test]
fn serde_frame_round_trip_maps_identically() {
    let frame = SeriesFrame::from_columns(vec![vec![1.0_f64, 3.0, 2.0], vec![4.0, 5.0, 6.0]])
        .unwrap();
    let restored: SeriesFrame<f64> =
        serde_json::from_str(&serde_json::to_string(&frame).unwrap()).unwrap();
    assert_eq!(restored.to_rows(), frame.to_rows());
    assert_eq!(
        restored.map_columns(|c| ta_cn::indicators::sum(c, 0)).unwrap(),
        frame.map_columns(|c| ta_cn::indicators::sum(c, 0)).unwrap()
    );
}
