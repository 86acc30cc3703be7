use adaptive_buckets::{
    BucketConfig, HeatmapRequest, HeatmapSeries, ValueRange, Viewport, calculate_time_buckets,
    calculate_value_buckets, create_explicit_value_buckets, merge_series, plan_heatmap,
    plan_heatmap_csv, ranges_from_bounds, rebucket_time_data, rebucket_value_data,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

fn is_nice(v: f64) -> bool {
    let magnitude = 10f64.powf(v.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .any(|p| close(v / magnitude, *p))
}

#[test]
fn time_plan_reference_cases() {
    let r = calculate_time_buckets(0, 60_000, 1000.0, &BucketConfig::new(20.0, 50));
    assert_eq!(
        (r.interval_ms, r.number_of_buckets, r.interval_label.as_str()),
        (2000, 30, "2s")
    );
    assert!((r.cell_width - 33.333).abs() < 0.001);

    let r = calculate_time_buckets(0, 3_600_000, 2000.0, &BucketConfig::new(20.0, 5));
    assert_eq!((r.interval_ms, r.number_of_buckets), (1_000_000, 4));
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn time_plans_stay_within_budget() {
    let widths = [120.0, 333.0, 800.0, 1920.0];
    let ranges = [999, 60_000, 3_600_000, 86_400_000 * 7, 123_456_789];
    let cfg = BucketConfig::new(16.0, 80);
    for &w in &widths {
        for &range in &ranges {
            let r = calculate_time_buckets(1_700_000_000_000, 1_700_000_000_000 + range, w, &cfg);
            let budget = cfg.effective_max_buckets(w).max(1);
            assert!(r.number_of_buckets >= 1);
            assert!(r.number_of_buckets <= budget + 1, "{r:?} over {budget}");
            assert!(is_nice(r.interval_ms as f64), "{} not nice", r.interval_ms);
            assert!(close(r.cell_width * r.number_of_buckets as f64, w));
        }
    }
}

#[test]
fn value_plan_reference_cases() {
    let cfg = BucketConfig::new(20.0, 50);

    let r = calculate_value_buckets(0.0, 100.0, 500.0, &cfg, false);
    assert!(close(r.bucket_size, 5.0));
    assert_eq!(r.number_of_buckets, 20);
    assert!(close(r.cell_height, 25.0));
    assert_eq!(r.buckets[0], ValueRange::new(0.0, 5.0));
    assert_eq!(r.buckets[19], ValueRange::new(95.0, 100.0));

    let r = calculate_value_buckets(1.0, 1000.0, 500.0, &cfg, true);
    assert_eq!(r.number_of_buckets, 25);
    assert!(close(r.cell_height, 20.0));
    assert!(close(r.buckets[0].start, 1.0));
    assert!(close(r.buckets[24].end, 1000.0));

    let r = calculate_value_buckets(4.2, 4.2, 333.0, &cfg, true);
    assert_eq!(r.buckets, vec![ValueRange::new(4.2, 4.2)]);
    assert!(close(r.cell_height, 333.0));
}

#[test]
fn linear_value_buckets_are_contiguous_and_cover_the_range() {
    let cfg = BucketConfig::new(16.0, 100);
    for (lo, hi) in [(0.0, 1.0), (-7.5, 1234.0), (0.001, 0.0042), (1e6, 1e6 + 3.0)] {
        let r = calculate_value_buckets(lo, hi, 480.0, &cfg, false);
        assert!(r.buckets[0].start <= lo);
        assert!(r.buckets.last().unwrap().end >= hi);
        for pair in r.buckets.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert!(r.number_of_buckets <= cfg.effective_max_buckets(480.0) + 2);
    }
}

#[test]
fn time_rebucket_conserves_in_window_mass() {
    let plan = calculate_time_buckets(0, 60_000, 1000.0, &BucketConfig::new(20.0, 50));
    let timestamps: Vec<i64> = (-10..70).map(|i| i * 1_000).collect();
    let counts: Vec<Vec<f64>> = timestamps.iter().map(|_| vec![1.0, 2.0]).collect();

    let out = rebucket_time_data(&timestamps, &counts, &plan, 0);
    let total: f64 = out.bucketed_counts.iter().flatten().sum();
    // 0..60_000 holds 60 one-second samples of mass 3
    assert!(close(total, 180.0));
    assert_eq!(out.bucketed_timestamps[1], 2_000);
    assert!(out.bucketed_counts.iter().all(|row| row.len() == 2));
}

#[test]
fn value_rebucket_reference_and_conservation() {
    let out = rebucket_value_data(
        &[ValueRange::new(0.0, 20.0)],
        &[vec![20.0]],
        &create_explicit_value_buckets(&[ValueRange::new(0.0, 10.0), ValueRange::new(10.0, 20.0)], 100.0),
    );
    assert_eq!(out.bucketed_counts, vec![vec![10.0, 10.0]]);

    // fine source layout, coarser planned layout that tiles it exactly
    let source = ranges_from_bounds(&[0.0, 2.5, 5.0, 7.5, 10.0, 12.5, 15.0, 17.5, 20.0]);
    let rows = vec![
        vec![1.0, 4.0, 0.0, 3.0, 2.0, 0.0, 5.0, 1.0],
        vec![0.0, 0.0, 9.0, 0.0, 0.0, 0.0, 0.0, 0.5],
    ];
    let target = calculate_value_buckets(0.0, 20.0, 80.0, &BucketConfig::new(20.0, 50), false);
    let out = rebucket_value_data(&source, &rows, &target);
    for (before, after) in rows.iter().zip(&out.bucketed_counts) {
        let b: f64 = before.iter().sum();
        let a: f64 = after.iter().sum();
        assert!(close(a, b), "{b} -> {a}");
    }
    assert_eq!(out.bucket_labels.len(), target.number_of_buckets);
}

#[test]
fn linear_to_log_toggle_keeps_mass_inside_the_log_span() {
    let cfg = BucketConfig::new(16.0, 100);
    let linear = calculate_value_buckets(1.0, 1000.0, 400.0, &cfg, false);
    let log = calculate_value_buckets(1.0, 1000.0, 400.0, &cfg, true);
    let rows = vec![vec![1.0; linear.number_of_buckets]];

    let out = rebucket_value_data(&linear.buckets, &rows, &log);
    let total: f64 = out.bucketed_counts[0].iter().sum();
    assert!(total > 0.0);
    assert!(total <= linear.number_of_buckets as f64 + 1e-9);
}

#[test]
fn merged_series_feed_the_heatmap_pipeline() {
    let a = HeatmapSeries {
        bounds: vec![1.0, 10.0, 100.0, 1000.0],
        timestamps: vec![0, 60_000],
        counts: vec![vec![1.0, 2.0, 3.0], vec![0.0, 1.0, 0.0]],
    };
    let b = HeatmapSeries {
        timestamps: vec![60_000, 120_000],
        counts: vec![vec![5.0, 0.0, 0.0], vec![0.0, 0.0, 4.0]],
        ..a.clone()
    };
    let merged = merge_series(&[a, b]).unwrap();
    assert_eq!(merged.timestamps, vec![0, 60_000, 120_000]);

    let mut req = HeatmapRequest::new(&merged, Viewport::new(1080.0, 560.0));
    req.use_log_scale = true;
    req.end_ms = Some(180_000);
    let layout = plan_heatmap(&req).unwrap();

    assert!(close(layout.stats.total, 16.0));
    let total: f64 = layout.counts.iter().flatten().sum();
    assert!(close(total, 16.0), "total {total}");
    assert!(close(layout.y_range.start, 1.0));
    assert!(close(layout.y_range.end, 1000.0));
}

#[test]
fn csv_to_layout() {
    let csv = "timestamp,0,50,100\n0,1,1\n30000,2,0\n60000,0,3\n";
    let layout = plan_heatmap_csv(csv.as_bytes(), Viewport::new(1080.0, 560.0), false).unwrap();
    assert_eq!(layout.counts.len(), layout.time.number_of_buckets);
    assert!(layout.labels.iter().all(|l| l.contains('-')));
    assert!(layout.label_indices.len() <= 15);
}
