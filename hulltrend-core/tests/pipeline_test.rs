//! End-to-end pipeline scenarios over full bar series.

use hulltrend_core::analysis::run_analysis;
use hulltrend_core::config::AnalysisConfig;
use hulltrend_core::domain::{Bar, Direction};
use hulltrend_core::synthetic::synthetic_bars;
use hulltrend_core::trend::warmup_len;

fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    let base = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                timestamp: base + chrono::Duration::hours(i as i64),
                open,
                high: open.max(close) + 0.5,
                low: open.min(close) - 0.5,
                close,
                volume: 1_000.0,
            }
        })
        .collect()
}

/// Closes tracing a triangle wave: long enough rises and falls that the
/// smoothed trend flips direction repeatedly.
fn triangle_closes(n: usize, half_cycle: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let phase = i % (2 * half_cycle);
            let offset = if phase < half_cycle {
                phase
            } else {
                2 * half_cycle - phase
            };
            1_000.0 + offset as f64 * 3.0
        })
        .collect()
}

#[test]
fn trend_columns_cover_every_bar() {
    let bars = bars_from_closes(&triangle_closes(300, 40));
    let config = AnalysisConfig::new(20, 5).unwrap();
    let report = run_analysis(&bars, &config).unwrap();

    assert_eq!(report.annotated.len(), 300);
    assert_eq!(report.warmup, warmup_len(20));
    let undefined = report
        .annotated
        .iter()
        .take_while(|row| row.trend.is_none())
        .count();
    assert_eq!(undefined, report.warmup - 1);
    assert!(report.annotated[report.warmup - 1].trend.is_some());
}

#[test]
fn turning_point_directions_alternate() {
    let bars = bars_from_closes(&triangle_closes(500, 35));
    let report = run_analysis(&bars, &AnalysisConfig::new(14, 5).unwrap()).unwrap();

    assert!(
        report.turning_points.len() >= 2,
        "triangle wave must produce reversals"
    );
    for pair in report.turning_points.windows(2) {
        assert_eq!(pair[1].direction, pair[0].direction.opposite());
    }
}

#[test]
fn segments_tile_the_span_between_turning_points() {
    let bars = bars_from_closes(&triangle_closes(500, 35));
    let report = run_analysis(&bars, &AnalysisConfig::new(14, 5).unwrap()).unwrap();

    assert_eq!(
        report.segments.len(),
        report.turning_points.len() - 1,
        "one segment per consecutive turning-point pair"
    );
    for (segment, pair) in report.segments.iter().zip(report.turning_points.windows(2)) {
        assert_eq!(segment.start_index, pair[0].index);
        assert_eq!(segment.end_index, pair[1].index);
        assert_eq!(segment.direction, pair[0].direction);
        assert_eq!(segment.duration, pair[1].index - pair[0].index);
    }
    // Consecutive segments abut exactly: no gaps, no overlap.
    for pair in report.segments.windows(2) {
        assert_eq!(pair[0].end_index, pair[1].start_index);
    }
}

#[test]
fn win_flags_agree_with_net_change_signs() {
    let bars = synthetic_bars(1_500, 21);
    let report = run_analysis(&bars, &AnalysisConfig::default()).unwrap();

    for segment in &report.segments {
        let expected = match segment.direction {
            Direction::Up => segment.net_change > 0.0,
            Direction::Down => segment.net_change < 0.0,
        };
        assert_eq!(segment.is_win, expected, "segment {}", segment.id);
    }
}

#[test]
fn aggregate_counts_split_by_direction() {
    let bars = synthetic_bars(1_500, 21);
    let report = run_analysis(&bars, &AnalysisConfig::default()).unwrap();

    let ups = report
        .segments
        .iter()
        .filter(|s| s.direction == Direction::Up)
        .count();
    let downs = report.segments.len() - ups;
    assert_eq!(report.up_segments.count, ups);
    assert_eq!(report.down_segments.count, downs);

    let up_events = report
        .events
        .iter()
        .filter(|e| e.direction == Direction::Up)
        .count();
    assert_eq!(report.up_events.count, up_events);
    assert_eq!(report.down_events.count, report.events.len() - up_events);
}

#[test]
fn flat_series_has_no_turning_points() {
    let bars = bars_from_closes(&vec![1_000.0; 200]);
    let report = run_analysis(&bars, &AnalysisConfig::default()).unwrap();
    // The smoothed trend of a constant series is constant: slope is zero
    // everywhere and never acquires a sign.
    assert!(report.turning_points.is_empty());
    assert!(report.segments.is_empty());
}

#[test]
fn truncated_event_windows_surface_absent_returns() {
    let bars = bars_from_closes(&triangle_closes(500, 35));
    let config = AnalysisConfig::new(14, 8).unwrap();
    let report = run_analysis(&bars, &config).unwrap();

    for event in &report.events {
        assert_eq!(event.returns_after.len(), 8);
        for (k, ret) in event.returns_after.iter().enumerate() {
            let in_bounds = event.index + k + 1 < bars.len();
            assert_eq!(ret.is_some(), in_bounds, "event at {}", event.index);
        }
    }
}
