//! Report label sets.
//!
//! Language is a formatting-layer configuration object: it selects which
//! static label table the renderer uses and touches nothing else.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Chinese,
}

/// Static strings for one report language.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub title: &'static str,
    pub metadata: &'static str,
    pub period: &'static str,
    pub event_half_width: &'static str,
    pub bar_count: &'static str,
    pub fingerprint: &'static str,
    pub summary: &'static str,
    pub turning_points: &'static str,
    pub segments: &'static str,
    pub events: &'static str,
    pub up_trends: &'static str,
    pub down_trends: &'static str,
    pub up_turns: &'static str,
    pub down_turns: &'static str,
    pub count: &'static str,
    pub win_rate: &'static str,
    pub mean_duration: &'static str,
    pub max_duration: &'static str,
    pub mean_net_change: &'static str,
    pub max_net_change: &'static str,
    pub mean_favorable: &'static str,
    pub max_favorable: &'static str,
    pub mean_adverse: &'static str,
    pub max_adverse: &'static str,
    pub profit_loss_ratio: &'static str,
    pub strategy_view: &'static str,
    pub long_view: &'static str,
    pub short_view: &'static str,
    pub ideal_profit: &'static str,
    pub actual_profit: &'static str,
    pub risk_loss: &'static str,
    pub mean_return_horizon: &'static str,
    pub mean_volatility: &'static str,
    pub consistency: &'static str,
    pub not_available: &'static str,
}

static ENGLISH: Labels = Labels {
    title: "Trend Analysis Report",
    metadata: "Metadata",
    period: "Smoothing period",
    event_half_width: "Event half-width",
    bar_count: "Bars",
    fingerprint: "Config fingerprint",
    summary: "Summary",
    turning_points: "Turning points",
    segments: "Segments",
    events: "Events",
    up_trends: "Up trends",
    down_trends: "Down trends",
    up_turns: "Up turns",
    down_turns: "Down turns",
    count: "Count",
    win_rate: "Win rate",
    mean_duration: "Mean duration (bars)",
    max_duration: "Max duration (bars)",
    mean_net_change: "Mean net change",
    max_net_change: "Max net change",
    mean_favorable: "Mean favorable excursion",
    max_favorable: "Max favorable excursion",
    mean_adverse: "Mean adverse excursion",
    max_adverse: "Max adverse excursion",
    profit_loss_ratio: "Profit/loss ratio",
    strategy_view: "Strategy view",
    long_view: "Long (up trends)",
    short_view: "Short (down trends)",
    ideal_profit: "Ideal profit",
    actual_profit: "Actual profit",
    risk_loss: "Risk loss",
    mean_return_horizon: "Mean return at horizon",
    mean_volatility: "Mean local volatility",
    consistency: "Consistency",
    not_available: "n/a",
};

static CHINESE: Labels = Labels {
    title: "趋势分析报告",
    metadata: "元数据",
    period: "平滑周期",
    event_half_width: "事件半窗口",
    bar_count: "K线数量",
    fingerprint: "配置指纹",
    summary: "摘要",
    turning_points: "拐点",
    segments: "趋势区间",
    events: "事件",
    up_trends: "上涨趋势",
    down_trends: "下跌趋势",
    up_turns: "上拐点",
    down_turns: "下拐点",
    count: "数量",
    win_rate: "胜率",
    mean_duration: "平均持续时间（K线）",
    max_duration: "最长持续时间（K线）",
    mean_net_change: "平均涨跌幅",
    max_net_change: "最大涨跌幅",
    mean_favorable: "平均有利偏移",
    max_favorable: "最大有利偏移",
    mean_adverse: "平均不利偏移",
    max_adverse: "最大不利偏移",
    profit_loss_ratio: "盈亏比",
    strategy_view: "策略视角",
    long_view: "做多（上涨趋势）",
    short_view: "做空（下跌趋势）",
    ideal_profit: "理想收益",
    actual_profit: "实际收益",
    risk_loss: "风险损失",
    mean_return_horizon: "各周期平均收益",
    mean_volatility: "平均局部波动率",
    consistency: "一致性",
    not_available: "无",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English => &ENGLISH,
        Language::Chinese => &CHINESE,
    }
}
