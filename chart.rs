//! Maps a ranked word list onto one of seven chart shapes.
//!
//! Output is a renderer-ready ECharts option object ([`serde_json::Value`]),
//! so the display surface only has to hand it to `setOption`. One render
//! function covers all seven kinds; the per-kind differences are small
//! enough that separate functions would just be seven copies of the same
//! scaffolding.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Value, json};

const CHART_TITLE: &str = "词频统计";
const COUNT_LABEL: &str = "出现次数";

/// The closed set of chart styles on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
    Scatter,
    Area,
    Radar,
    Box,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Pie,
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::Area,
        ChartKind::Radar,
        ChartKind::Box,
    ];

    /// Machine name, also accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Area => "area",
            ChartKind::Radar => "radar",
            ChartKind::Box => "box",
        }
    }

    /// Chinese menu label shown by the shell.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Pie => "饼图",
            ChartKind::Bar => "柱状图",
            ChartKind::Line => "折线图",
            ChartKind::Scatter => "散点图",
            ChartKind::Area => "面积图",
            ChartKind::Radar => "雷达图",
            ChartKind::Box => "箱线图",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.label() == s)
            .ok_or_else(|| format!("unknown chart style: {s}"))
    }
}

#[derive(Serialize)]
struct PieDatum<'a> {
    name: &'a str,
    value: usize,
}

/// Build the chart option for `kind` over a ranked word list.
///
/// An empty list renders nothing: the result is `None`, and callers must
/// treat that as a valid silent no-op rather than an error.
pub fn render(word_counts: &[(String, usize)], kind: ChartKind) -> Option<Value> {
    if word_counts.is_empty() {
        return None;
    }
    let words: Vec<&str> = word_counts.iter().map(|(w, _)| w.as_str()).collect();
    let counts: Vec<usize> = word_counts.iter().map(|&(_, n)| n).collect();

    let option = match kind {
        ChartKind::Pie => {
            let data: Vec<PieDatum<'_>> = word_counts
                .iter()
                .map(|(word, count)| PieDatum {
                    name: word.as_str(),
                    value: *count,
                })
                .collect();
            json!({
                "title": { "text": CHART_TITLE },
                "tooltip": {},
                "series": [{ "type": "pie", "name": COUNT_LABEL, "data": data }]
            })
        }
        ChartKind::Bar | ChartKind::Line | ChartKind::Scatter | ChartKind::Area => {
            cartesian(kind, &words, &counts)
        }
        ChartKind::Radar => {
            let max = counts.iter().copied().max().unwrap_or(1);
            let indicators: Vec<Value> = words
                .iter()
                .map(|word| json!({ "name": word, "max": max }))
                .collect();
            json!({
                "title": { "text": CHART_TITLE },
                "tooltip": {},
                "radar": { "indicator": indicators },
                "series": [{
                    "type": "radar",
                    "data": [{ "value": counts, "name": COUNT_LABEL }]
                }]
            })
        }
        // The box plot describes the distribution of the counts alone; the
        // word labels play no part.
        ChartKind::Box => json!({
            "title": { "text": CHART_TITLE },
            "tooltip": {},
            "xAxis": { "type": "category", "data": [COUNT_LABEL] },
            "yAxis": { "type": "value" },
            "series": [{ "type": "boxplot", "data": [five_number_summary(&counts)] }]
        }),
    };
    Some(option)
}

fn cartesian(kind: ChartKind, words: &[&str], counts: &[usize]) -> Value {
    let series_type = match kind {
        ChartKind::Bar => "bar",
        ChartKind::Line | ChartKind::Area => "line",
        ChartKind::Scatter => "scatter",
        _ => unreachable!("not a cartesian chart kind"),
    };
    let mut series = json!({
        "type": series_type,
        "name": COUNT_LABEL,
        "data": counts,
    });
    if kind == ChartKind::Area {
        series["areaStyle"] = json!({});
    }
    json!({
        "title": { "text": CHART_TITLE },
        "tooltip": {},
        "xAxis": { "type": "category", "data": words },
        "yAxis": { "type": "value" },
        "series": [series]
    })
}

/// Min, lower quartile, median, upper quartile, max over the counts, with
/// linear interpolation between ranks.
fn five_number_summary(counts: &[usize]) -> [f64; 5] {
    let mut sorted: Vec<f64> = counts.iter().map(|&n| n as f64).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    [
        sorted[0],
        quantile(&sorted, 0.25),
        quantile(&sorted, 0.5),
        quantile(&sorted, 0.75),
        sorted[sorted.len() - 1],
    ]
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked() -> Vec<(String, usize)> {
        vec![
            ("猫".to_string(), 4),
            ("狗".to_string(), 2),
            ("and".to_string(), 1),
        ]
    }

    #[test]
    fn empty_list_renders_nothing() {
        for kind in ChartKind::ALL {
            assert!(render(&[], kind).is_none());
        }
    }

    #[test]
    fn every_kind_renders_for_nonempty_input() {
        for kind in ChartKind::ALL {
            assert!(render(&ranked(), kind).is_some());
        }
    }

    #[test]
    fn bar_maps_words_to_category_axis_and_counts_to_values() {
        let option = render(&ranked(), ChartKind::Bar).unwrap();
        assert_eq!(option["xAxis"]["data"][0], "猫");
        assert_eq!(option["series"][0]["type"], "bar");
        assert_eq!(option["series"][0]["data"][0], 4);
    }

    #[test]
    fn pie_pairs_names_with_values() {
        let option = render(&ranked(), ChartKind::Pie).unwrap();
        assert_eq!(option["series"][0]["data"][1]["name"], "狗");
        assert_eq!(option["series"][0]["data"][1]["value"], 2);
    }

    #[test]
    fn area_is_a_line_with_area_styling() {
        let option = render(&ranked(), ChartKind::Area).unwrap();
        assert_eq!(option["series"][0]["type"], "line");
        assert!(option["series"][0]["areaStyle"].is_object());
    }

    #[test]
    fn radar_has_one_indicator_per_word() {
        let option = render(&ranked(), ChartKind::Radar).unwrap();
        assert_eq!(option["radar"]["indicator"].as_array().unwrap().len(), 3);
        assert_eq!(option["radar"]["indicator"][0]["max"], 4);
        assert_eq!(option["series"][0]["data"][0]["value"][0], 4);
    }

    #[test]
    fn box_uses_counts_only() {
        let option = render(&ranked(), ChartKind::Box).unwrap();
        let summary = option["series"][0]["data"][0].as_array().unwrap();
        assert_eq!(summary.len(), 5);
        assert_eq!(summary[0], 1.0);
        assert_eq!(summary[4], 4.0);
        // No word appears anywhere in the box option.
        assert!(!option.to_string().contains("猫"));
    }

    #[test]
    fn five_number_summary_interpolates_quartiles() {
        let summary = five_number_summary(&[1, 2, 3, 4]);
        assert_eq!(summary, [1.0, 1.75, 2.5, 3.25, 4.0]);
    }

    #[test]
    fn kind_parses_from_name_and_label() {
        assert_eq!("pie".parse::<ChartKind>().unwrap(), ChartKind::Pie);
        assert_eq!("雷达图".parse::<ChartKind>().unwrap(), ChartKind::Radar);
        assert!("donut".parse::<ChartKind>().is_err());
    }
}
