//! Markdown report generator.

use crate::labels::{labels, Labels, Language};
use hulltrend_core::{AnalysisReport, EventStats, SegmentStats};

pub struct MarkdownReport {
    pub language: Language,
}

impl MarkdownReport {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn render(&self, report: &AnalysisReport) -> String {
        let l = labels(self.language);
        let mut out = String::new();

        out.push_str(&format!("# {}\n\n", l.title));

        // ── Metadata ──
        out.push_str(&format!("## {}\n", l.metadata));
        out.push_str(&format!("- {}: {}\n", l.period, report.config.period));
        out.push_str(&format!(
            "- {}: {}\n",
            l.event_half_width, report.config.event_half_width
        ));
        out.push_str(&format!("- {}: {}\n", l.bar_count, report.bar_count));
        out.push_str(&format!(
            "- {}: `{}`\n\n",
            l.fingerprint,
            &report.fingerprint[..16.min(report.fingerprint.len())]
        ));

        // ── Summary ──
        out.push_str(&format!("## {}\n", l.summary));
        out.push_str(&format!(
            "- {}: {}\n",
            l.turning_points,
            report.turning_points.len()
        ));
        out.push_str(&format!("- {}: {}\n", l.segments, report.segments.len()));
        out.push_str(&format!("- {}: {}\n\n", l.events, report.events.len()));

        // ── Segment statistics ──
        out.push_str(&format!("## {}\n\n", l.segments));
        out.push_str(&segment_table(l, &report.up_segments, &report.down_segments));

        // ── Strategy view ──
        out.push_str(&format!("\n## {}\n\n", l.strategy_view));
        out.push_str(&strategy_view(l, &report.up_segments, &report.down_segments));

        // ── Event statistics ──
        out.push_str(&format!("\n## {}\n\n", l.events));
        out.push_str(&event_table(l, &report.up_events, &report.down_events));

        out
    }
}

fn fmt_opt_pct(l: &Labels, value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:+.2}%"),
        None => l.not_available.to_string(),
    }
}

fn fmt_opt_num(l: &Labels, value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => l.not_available.to_string(),
    }
}

fn fmt_opt_rate(l: &Labels, value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => l.not_available.to_string(),
    }
}

fn segment_table(l: &Labels, up: &SegmentStats, down: &SegmentStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("| | {} | {} |\n", l.up_trends, l.down_trends));
    out.push_str("|---|---|---|\n");
    out.push_str(&format!("| {} | {} | {} |\n", l.count, up.count, down.count));
    out.push_str(&format!(
        "| {} | {} | {} |\n",
        l.win_rate,
        fmt_opt_rate(l, up.win_rate),
        fmt_opt_rate(l, down.win_rate)
    ));
    out.push_str(&format!(
        "| {} | {} | {} |\n",
        l.mean_duration,
        fmt_opt_num(l, up.mean_duration),
        fmt_opt_num(l, down.mean_duration)
    ));
    out.push_str(&format!(
        "| {} | {} | {} |\n",
        l.max_duration,
        up.max_duration
            .map_or(l.not_available.to_string(), |d| d.to_string()),
        down.max_duration
            .map_or(l.not_available.to_string(), |d| d.to_string())
    ));
    out.push_str(&format!(
        "| {} | {} | {} |\n",
        l.mean_net_change,
        fmt_opt_pct(l, up.mean_net_change),
        fmt_opt_pct(l, down.mean_net_change)
    ));
    out.push_str(&format!(
        "| {} | {} | {} |\n",
        l.max_net_change,
        fmt_opt_pct(l, up.max_net_change),
        fmt_opt_pct(l, down.max_net_change)
    ));
    out.push_str(&format!(
        "| {} | {} | {} |\n",
        l.mean_favorable,
        fmt_opt_pct(l, up.mean_favorable_excursion),
        fmt_opt_pct(l, down.mean_favorable_excursion)
    ));
    out.push_str(&format!(
        "| {} | {} | {} |\n",
        l.max_favorable,
        fmt_opt_pct(l, up.max_favorable_excursion),
        fmt_opt_pct(l, down.max_favorable_excursion)
    ));
    out.push_str(&format!(
        "| {} | {} | {} |\n",
        l.mean_adverse,
        fmt_opt_pct(l, up.mean_adverse_excursion),
        fmt_opt_pct(l, down.mean_adverse_excursion)
    ));
    out.push_str(&format!(
        "| {} | {} | {} |\n",
        l.max_adverse,
        fmt_opt_pct(l, up.max_adverse_excursion),
        fmt_opt_pct(l, down.max_adverse_excursion)
    ));
    out.push_str(&format!(
        "| {} | {} | {} |\n",
        l.profit_loss_ratio,
        fmt_opt_num(l, up.profit_loss_ratio),
        fmt_opt_num(l, down.profit_loss_ratio)
    ));
    out
}

/// Trade-oriented reading of the same numbers: a long rides each up trend
/// from flip to flip, a short each down trend.
fn strategy_view(l: &Labels, up: &SegmentStats, down: &SegmentStats) -> String {
    let mut out = String::new();
    for (heading, stats) in [(l.long_view, up), (l.short_view, down)] {
        out.push_str(&format!("### {heading}\n"));
        out.push_str(&format!(
            "- {}: {}\n",
            l.ideal_profit,
            fmt_opt_pct(l, stats.mean_favorable_excursion)
        ));
        out.push_str(&format!(
            "- {}: {}\n",
            l.actual_profit,
            fmt_opt_pct(l, stats.mean_net_change)
        ));
        out.push_str(&format!(
            "- {}: {}\n",
            l.risk_loss,
            fmt_opt_pct(l, stats.mean_adverse_excursion)
        ));
    }
    out
}

fn event_table(l: &Labels, up: &EventStats, down: &EventStats) -> String {
    let mut out = String::new();
    for (heading, stats) in [(l.up_turns, up), (l.down_turns, down)] {
        out.push_str(&format!("### {heading}\n"));
        out.push_str(&format!("- {}: {}\n", l.count, stats.count));
        for (k, mean_ret) in stats.mean_return_by_horizon.iter().enumerate() {
            out.push_str(&format!(
                "- {} {}: {}\n",
                l.mean_return_horizon,
                k + 1,
                fmt_opt_pct(l, *mean_ret)
            ));
        }
        out.push_str(&format!(
            "- {}: {}\n",
            l.mean_volatility,
            match stats.mean_volatility {
                Some(v) => format!("{v:.5}"),
                None => l.not_available.to_string(),
            }
        ));
        out.push_str(&format!(
            "- {}: {}\n",
            l.consistency,
            fmt_opt_rate(l, stats.consistency)
        ));
    }
    out
}
