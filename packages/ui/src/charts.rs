//! Mood line chart and word cloud.
//!
//! Both components draw exactly what the formatters in [`store::insights`]
//! produced; the only per-item computation here is cosmetic (positions, font
//! size, rotation).

use dioxus::prelude::*;
use store::{MoodTrendPoint, WordFrequency};

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 300.0;
const CHART_PADDING: f64 = 40.0;

/// Smallest font size a word is drawn at.
pub const MIN_FONT_PX: f64 = 12.0;

/// Font size for a word seen `count` times: `log2(count) * 10`, floored at [`MIN_FONT_PX`].
pub fn font_size(count: u32) -> f64 {
    let size = (count.max(1) as f64).log2() * 10.0;
    size.max(MIN_FONT_PX)
}

/// Either 0 or 90 degrees, stable for a given word.
pub fn rotation(word: &str) -> u32 {
    let sum: u32 = word.bytes().map(u32::from).sum();
    if sum % 2 == 0 {
        0
    } else {
        90
    }
}

/// Value range for the y axis. Zero is always inside it.
fn y_range(points: &[MoodTrendPoint]) -> (f64, f64) {
    let (mut lo, mut hi) = (0.0_f64, 0.0_f64);
    for p in points {
        lo = lo.min(p.sentiment_score);
        hi = hi.max(p.sentiment_score);
    }
    if hi - lo < f64::EPSILON {
        hi = lo + 1.0;
    }
    (lo, hi)
}

/// Pixel coordinates for each point inside a `width` x `height` box.
pub fn plot_points(points: &[MoodTrendPoint], width: f64, height: f64, padding: f64) -> Vec<(f64, f64)> {
    let (lo, hi) = y_range(points);
    let inner_w = width - 2.0 * padding;
    let inner_h = height - 2.0 * padding;
    let step = if points.len() > 1 {
        inner_w / (points.len() - 1) as f64
    } else {
        0.0
    };

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if points.len() > 1 {
                padding + step * i as f64
            } else {
                width / 2.0
            };
            let y = padding + inner_h * (1.0 - (p.sentiment_score - lo) / (hi - lo));
            (x, y)
        })
        .collect()
}

#[component]
pub fn MoodChart(points: Vec<MoodTrendPoint>) -> Element {
    if points.is_empty() {
        return rsx! {
            p { style: "color: #6b7280;", "No entries yet to chart." }
        };
    }

    let coords = plot_points(&points, CHART_WIDTH, CHART_HEIGHT, CHART_PADDING);
    let polyline = coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    let (lo, hi) = y_range(&points);
    let baseline = CHART_HEIGHT - CHART_PADDING;
    let right = CHART_WIDTH - CHART_PADDING;
    let lo_label = format!("{lo:.1}");
    let hi_label = format!("{hi:.1}");
    let label_y = CHART_HEIGHT - 8.0;
    let labelled: Vec<(String, f64, f64)> = points
        .iter()
        .zip(coords.iter())
        .map(|(p, (x, y))| (p.date.clone(), *x, *y))
        .collect();

    rsx! {
        div {
            class: "mood-chart",
            style: "height: 300px;",
            h3 { style: "font-weight: 600; margin-bottom: 0.5rem;", "Sentiment Score" }
            svg {
                width: "100%",
                height: "100%",
                view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                line { x1: "{CHART_PADDING}", y1: "{baseline}", x2: "{right}", y2: "{baseline}", stroke: "#d1d5db" }
                line { x1: "{CHART_PADDING}", y1: "{CHART_PADDING}", x2: "{CHART_PADDING}", y2: "{baseline}", stroke: "#d1d5db" }
                text { x: "4", y: "{baseline}", font_size: "10", "{lo_label}" }
                text { x: "4", y: "{CHART_PADDING}", font_size: "10", "{hi_label}" }
                polyline {
                    points: "{polyline}",
                    fill: "none",
                    stroke: "rgba(75, 192, 192, 1)",
                    stroke_width: "2",
                }
                for (i, (date, x, y)) in labelled.into_iter().enumerate() {
                    g {
                        key: "{i}",
                        circle { cx: "{x}", cy: "{y}", r: "4", fill: "rgba(75, 192, 192, 0.4)", stroke: "rgba(75, 192, 192, 1)" }
                        text { x: "{x}", y: "{label_y}", font_size: "9", text_anchor: "middle", "{date}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn WordCloud(words: Vec<WordFrequency>) -> Element {
    if words.is_empty() {
        return rsx! {
            p { style: "color: #6b7280;", "Write a few entries to grow your word cloud." }
        };
    }

    let styled: Vec<(WordFrequency, String)> = words
        .into_iter()
        .map(|word| {
            let style = format!(
                "font-size: {:.0}px; writing-mode: {}; color: #0f766e;",
                font_size(word.value),
                writing_mode(rotation(&word.text)),
            );
            (word, style)
        })
        .collect();

    rsx! {
        div {
            class: "word-cloud",
            style: "display: flex; flex-wrap: wrap; align-items: center; justify-content: center; gap: 0.5rem 1rem; padding: 1rem;",
            for (word, style) in styled {
                span {
                    key: "{word.text}",
                    title: "{word.text}: {word.value}",
                    style: "{style}",
                    "{word.text}"
                }
            }
        }
    }
}

fn writing_mode(degrees: u32) -> &'static str {
    if degrees == 90 {
        "vertical-rl"
    } else {
        "horizontal-tb"
    }
}
