//! セル書式の判定ルール
//!
//! ハイライト規則（1〜4）は上から順に評価し、最初に一致した規則だけを適用する。
//! 規則1は一致しても書式を変えない（以降の規則を止めるだけ）。
//! 強調規則はハイライト規則の後に必ずすべて評価し、文字色を上書きできる。

use crate::layout::{ReportColumn, BLACK, FAIL_RED, INFO_BLUE, PASS_GREEN, WARN_ORANGE, WHITE};
use crate::types::ResultRow;

/// 乾燥時間の強調閾値（以上）
pub const LONG_DRYING_TIME: f64 = 7.0;

/// ew の閾値
pub const EW_THRESHOLD: f64 = 1.7;

/// 1セル分の書式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub background: u32,
    pub font_color: u32,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            background: WHITE,
            font_color: BLACK,
            bold: false,
        }
    }
}

/// 一致したハイライト規則
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// 少数サンプルかつ偏差 < 1（書式なし）
    Plain,
    Pass,
    Warn,
    Fail,
}

struct HighlightRule {
    kind: Highlight,
    matches: fn(&ResultRow) -> bool,
    apply: fn(&mut CellStyle),
}

struct EmphasisRule {
    matches: fn(&ResultRow, ReportColumn) -> bool,
    apply: fn(&mut CellStyle),
}

static HIGHLIGHT_RULES: [HighlightRule; 4] = [
    HighlightRule {
        kind: Highlight::Plain,
        matches: |r| r.count < 3 && r.avg_deviation < 1.0,
        apply: |_| {},
    },
    HighlightRule {
        kind: Highlight::Pass,
        matches: |r| r.count >= 3 && r.avg_deviation < 1.0,
        apply: |s| s.background = PASS_GREEN,
    },
    HighlightRule {
        kind: Highlight::Warn,
        matches: |r| {
            (r.avg_deviation > 1.0 && r.avg_ew > EW_THRESHOLD && r.count < 3)
                || (r.avg_deviation < 2.0 && r.avg_ew == 0.0)
        },
        apply: |s| s.background = WARN_ORANGE,
    },
    HighlightRule {
        kind: Highlight::Fail,
        matches: |r| {
            (r.avg_deviation > 1.0 && r.avg_ew < EW_THRESHOLD)
                || (r.avg_deviation > 1.0 && r.count > 3)
                || (r.avg_deviation > 2.0 && r.avg_ew == 0.0)
        },
        apply: |s| s.font_color = FAIL_RED,
    },
];

static EMPHASIS_RULES: [EmphasisRule; 3] = [
    EmphasisRule {
        matches: |r, c| c == ReportColumn::AvgDryingTime && r.avg_drying_time >= LONG_DRYING_TIME,
        apply: |s| s.bold = true,
    },
    EmphasisRule {
        matches: |r, c| c == ReportColumn::AvgEw && r.avg_ew >= EW_THRESHOLD,
        apply: |s| s.bold = true,
    },
    EmphasisRule {
        matches: |r, c| {
            matches!(c, ReportColumn::AvgDryingTime | ReportColumn::AvgEw)
                && r.avg_drying_time >= LONG_DRYING_TIME
                && r.avg_ew >= EW_THRESHOLD
        },
        apply: |s| s.font_color = INFO_BLUE,
    },
];

/// 最初に一致したハイライト規則
fn matching_rule(row: &ResultRow) -> Option<&'static HighlightRule> {
    HIGHLIGHT_RULES.iter().find(|rule| (rule.matches)(row))
}

/// 行に一致するハイライト規則（なければ None）
pub fn highlight(row: &ResultRow) -> Option<Highlight> {
    matching_rule(row).map(|rule| rule.kind)
}

/// 行・列に対するセル書式
pub fn cell_style(row: &ResultRow, column: ReportColumn) -> CellStyle {
    let mut style = CellStyle::default();

    if let Some(rule) = matching_rule(row) {
        (rule.apply)(&mut style);
    }

    for rule in EMPHASIS_RULES.iter().filter(|rule| (rule.matches)(row, column)) {
        (rule.apply)(&mut style);
    }

    style
}
