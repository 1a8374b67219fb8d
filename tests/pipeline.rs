use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use bearing_fixes::{
    reduce_with_divisor, AngleScale, Anomaly, Binner, Config, FixPipeline, FixedAngle, Geometry,
    ReducerConfig, SampleMap, SyntheticSource,
};

fn config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_files")
        .join("fixes.toml")
}

#[test]
fn shipped_config_runs_end_to_end() {
    let config = Config::from_path(config_path()).unwrap();
    assert_eq!(config.source.seed, Some(7));

    let drawn = config.source.generate(config.scale).unwrap();
    assert!(drawn.anomaly.is_none());
    let distinct = drawn.samples.len();

    let report = config
        .pipeline()
        .unwrap()
        .run(&config.geometry, drawn.samples)
        .unwrap();
    assert_eq!(report.precision.raw(), 1146);
    assert_eq!(3_600_000 % report.step.raw(), 0);
    assert!(report.step <= report.precision);
    assert_eq!(report.bins.placed(), distinct);
    assert!(report.anomalies.is_empty());
    assert!(!report.fixes.is_empty() && report.fixes.len() <= distinct);

    // every fix lies inside one of the bins it came from
    let scale = report.scale;
    for degrees in report.fixes.degrees() {
        let angle = scale.discretize(degrees);
        assert!(report.bins.iter().any(|(_, members)| members.contains_key(&angle)));
    }
}

#[test]
fn same_seed_same_fixes() {
    let config = Config::from_path(config_path()).unwrap();
    let pipeline = config.pipeline().unwrap();
    let run = || {
        let samples = config.source.generate(config.scale).unwrap().samples;
        pipeline.run(&config.geometry, samples).unwrap().fixes
    };
    assert_eq!(run(), run());
}

#[test]
fn out_of_range_mean_flows_through_as_empty() {
    let scale = AngleScale::default();
    let drawn = SyntheticSource {
        mean_deg: 400.0,
        seed: Some(1),
        ..Default::default()
    }
    .generate(scale)
    .unwrap();
    assert_eq!(drawn.anomaly, Some(Anomaly::MeanOutOfRange { mean_deg: 400.0 }));

    let report = FixPipeline::new(scale, ReducerConfig::default())
        .unwrap()
        .run(&Geometry::default(), drawn.samples)
        .unwrap();
    assert!(report.samples.is_empty());
    assert!(report.bins.is_empty());
    assert!(report.fixes.is_empty());
}

#[test]
fn single_bearing_survives_reduction() {
    let scale = AngleScale::default();
    let samples = SampleMap::from_counts([(1_234_567, 4)], scale).unwrap();
    let bins = Binner::new(FixedAngle::new(1146), scale)
        .unwrap()
        .assign(&samples)
        .unwrap()
        .bins;
    assert_eq!(bins.max_len(), 1);

    let fixes = reduce_with_divisor(&bins, 1.0, scale);
    let kept: Vec<f64> = fixes.degrees().collect();
    assert_eq!(kept.len(), 1);
    assert_abs_diff_eq!(kept[0], 123.4567, epsilon = 1e-9);
}

#[test]
fn sample_mapping_loads_from_json() {
    let json = r#"{ "scale": 100, "counts": { "10000": 5, "10001": 3, "20000": 9 } }"#;
    let samples: SampleMap = serde_json::from_str(json).unwrap();
    assert_eq!(samples.scale().get(), 100);
    assert_eq!(samples.len(), 3);
    assert_eq!(samples.observations(), 17);

    let binning = Binner::with_step(FixedAngle::new(2), samples.scale())
        .unwrap()
        .assign(&samples)
        .unwrap();
    assert!(binning.lost.is_none());
    assert_eq!(binning.bins.placed(), 3);
}

#[test]
fn wider_tolerance_gives_fewer_or_equal_bins() {
    let scale = AngleScale::default();
    let samples = SyntheticSource {
        seed: Some(11),
        ..Default::default()
    }
    .generate(scale)
    .unwrap()
    .samples;
    let pipeline = FixPipeline::new(scale, ReducerConfig::default()).unwrap();

    let narrow = pipeline
        .run(&Geometry { range_m: 25e3, tolerance_m: 20.0 }, samples.clone())
        .unwrap();
    let wide = pipeline
        .run(&Geometry { range_m: 25e3, tolerance_m: 200.0 }, samples)
        .unwrap();
    assert!(narrow.precision < wide.precision);
    assert!(narrow.bins.len() >= wide.bins.len());
}
