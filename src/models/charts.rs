//! Static demo chart series.
//!
//! Supplied once at startup; never updated live.

use ratatui::style::Color;

/// One numeric series with its color token.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: &'static str,
    pub values: Vec<u64>,
    pub color: Color,
}

/// Declarative line chart: labeled categories plus one or more series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartSpec {
    pub categories: Vec<&'static str>,
    pub series: Vec<ChartSeries>,
}

impl LineChartSpec {
    /// Largest value across all series.
    pub fn max_value(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// One slice of the threat-type breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownSlice {
    pub label: &'static str,
    pub value: u64,
    pub color: Color,
}

/// Share of `slice` in the total, in whole percent.
pub fn slice_percent(slices: &[BreakdownSlice], index: usize) -> u16 {
    let total: u64 = slices.iter().map(|s| s.value).sum();
    match slices.get(index) {
        Some(slice) if total > 0 => ((slice.value * 100) / total) as u16,
        _ => 0,
    }
}

pub fn threat_trend_chart() -> LineChartSpec {
    LineChartSpec {
        categories: vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        series: vec![
            ChartSeries {
                label: "Threats Detected",
                values: vec![12, 19, 15, 25, 18, 22, 20],
                color: Color::Rgb(239, 68, 68),
            },
            ChartSeries {
                label: "Safe Emails",
                values: vec![165, 158, 172, 148, 169, 155, 163],
                color: Color::Rgb(16, 185, 129),
            },
        ],
    }
}

pub fn threat_type_breakdown() -> Vec<BreakdownSlice> {
    vec![
        BreakdownSlice {
            label: "Phishing",
            value: 45,
            color: Color::Rgb(239, 68, 68),
        },
        BreakdownSlice {
            label: "Malware",
            value: 23,
            color: Color::Rgb(245, 158, 11),
        },
        BreakdownSlice {
            label: "Spoofing",
            value: 15,
            color: Color::Rgb(59, 130, 246),
        },
        BreakdownSlice {
            label: "Other",
            value: 6,
            color: Color::Rgb(148, 163, 184),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_series_match_categories() {
        let chart = threat_trend_chart();
        for series in &chart.series {
            assert_eq!(series.values.len(), chart.categories.len());
        }
        assert_eq!(chart.max_value(), 172);
    }

    #[test]
    fn test_slice_percent() {
        let slices = threat_type_breakdown();
        // 45 of 89
        assert_eq!(slice_percent(&slices, 0), 50);
        assert_eq!(slice_percent(&slices, 99), 0);
        assert_eq!(slice_percent(&[], 0), 0);
    }
}
