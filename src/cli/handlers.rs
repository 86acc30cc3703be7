use std::{
    io::{Write, stdout},
    time::Instant,
};

use serde::Serialize;
use tracing::debug;

use crate::{
    core::{
        bounds::{Viewport, terminal_geometry, terminal_viewport},
        config::HeatmapConfig,
        data::read_heatmap_csv_from_path,
        error::{BucketError, ConfigError},
    },
    heatmap::{HeatmapLayout, HeatmapRequest, plan_heatmap},
    plan::{TimeBucketResult, ValueBucketResult, calculate_time_buckets, calculate_value_buckets},
};

use super::parse::{HeatmapArgs, TimeArgs, ValueArgs};

/// Explicit sizes win; the terminal fills in whatever is missing.
fn viewport(width: Option<f64>, height: Option<f64>) -> Viewport {
    let term = terminal_viewport(terminal_geometry());
    Viewport::new(
        width.unwrap_or(term.width_px),
        height.unwrap_or(term.height_px),
    )
}

fn emit_json<T: Serialize>(value: &T) -> Result<(), BucketError> {
    let mut out = stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
pub fn time(a: &TimeArgs, cfg: &HeatmapConfig) -> Result<(), BucketError> {
    if a.start > a.end {
        return Err(ConfigError::InvalidRange {
            low: a.start as f64,
            high: a.end as f64,
        }
        .into());
    }
    let vp = viewport(a.width, None);
    let plan = calculate_time_buckets(a.start, a.end, vp.width_px, &cfg.time);
    if a.output.json {
        return emit_json(&plan);
    }
    print_time_plan(&plan, a.start)
}

pub fn value(a: &ValueArgs, cfg: &HeatmapConfig) -> Result<(), BucketError> {
    if a.min > a.max {
        return Err(ConfigError::InvalidRange {
            low: a.min,
            high: a.max,
        }
        .into());
    }
    let vp = viewport(None, a.height);
    let plan = calculate_value_buckets(a.min, a.max, vp.height_px, &cfg.value, a.log);
    if a.output.json {
        return emit_json(&plan);
    }
    print_value_plan(&plan)
}

pub fn heatmap(a: &HeatmapArgs, cfg: &HeatmapConfig) -> Result<(), BucketError> {
    let t_ingest = Instant::now();
    let series = read_heatmap_csv_from_path(&a.file)?;
    debug!(
        micros = t_ingest.elapsed().as_micros(),
        rows = series.timestamps.len(),
        "CSV ingest"
    );

    let t_plan = Instant::now();
    let req = HeatmapRequest {
        series: &series,
        start_ms: a.start,
        end_ms: a.end,
        viewport: viewport(a.width, a.height),
        use_log_scale: a.log,
        explicit_buckets: a.explicit,
        config: *cfg,
    };
    let layout = plan_heatmap(&req)?;
    debug!(micros = t_plan.elapsed().as_micros(), "heatmap layout");

    if a.output.json {
        return emit_json(&layout);
    }
    print_heatmap(&layout)
}

fn print_time_plan(plan: &TimeBucketResult, start_ms: i64) -> Result<(), BucketError> {
    let mut out = stdout().lock();
    writeln!(
        out,
        "{} buckets of {} ({} ms), {:.2} px each",
        plan.number_of_buckets, plan.interval_label, plan.interval_ms, plan.cell_width
    )?;
    for i in 0..plan.number_of_buckets {
        let lo = plan.bucket_start(start_ms, i);
        let hi = plan.bucket_start(start_ms, i + 1);
        writeln!(out, "{i:>5}  [{lo}, {hi})")?;
    }
    Ok(())
}

fn print_value_plan(plan: &ValueBucketResult) -> Result<(), BucketError> {
    let mut out = stdout().lock();
    writeln!(
        out,
        "{} {:?} buckets (size {}), {:.2} px each",
        plan.number_of_buckets, plan.scale, plan.bucket_size, plan.cell_height
    )?;
    for (i, b) in plan.buckets.iter().enumerate() {
        writeln!(out, "{i:>5}  [{}, {})", b.start, b.end)?;
    }
    Ok(())
}

fn print_heatmap(layout: &HeatmapLayout) -> Result<(), BucketError> {
    let mut out = stdout().lock();
    writeln!(
        out,
        "time: {} × {}   value: {} {:?} buckets   total count {}",
        layout.time.number_of_buckets,
        layout.time.interval_label,
        layout.value.number_of_buckets,
        layout.value.scale,
        layout.stats.total
    )?;
    let shown: Vec<&str> = layout
        .label_indices
        .iter()
        .filter_map(|&i| layout.labels.get(i).map(String::as_str))
        .collect();
    writeln!(out, "labels: {}", shown.join("  "))?;

    for (ts, row) in layout.bucketed_timestamps.iter().zip(&layout.counts) {
        write!(out, "{ts:>15} |")?;
        for c in row {
            write!(out, " {c:>6.1}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "adaptive-buckets";
    println!(
        "
Example invocations
-------------------
• Time plan          : {bin} time --start 0 --end 3600000 --width 1200
• Value plan (log)   : {bin} value --min 1 --max 1000 --height 500 --log
• Heatmap from CSV   : {bin} heatmap latency.csv --width 1080 --height 560
• Keep CSV buckets   : {bin} heatmap latency.csv --explicit --json
• Custom budgets     : {bin} --config budgets.toml heatmap latency.csv
• Debug timings      : {bin} --debug heatmap - < latency.csv
"
    );
}
