use dioxus::prelude::*;

/// One labelled bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Width of a bar as a percentage of `max`, clamped to `0..=100`.
pub fn bar_width_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() || !max.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Whole numbers print without decimals, everything else with one.
pub fn format_value(value: f64, unit: &str) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}{unit}")
    } else {
        format!("{value:.1}{unit}")
    }
}

/// Horizontal bar chart. Bars are scaled against `max`, or against the
/// largest value when no max is given.
#[component]
pub fn BarChart(
    bars: Vec<Bar>,
    #[props(default)] unit: String,
    #[props(default)] max: Option<f64>,
) -> Element {
    let scale = max.unwrap_or_else(|| bars.iter().map(|b| b.value).fold(0.0, f64::max));
    let rows: Vec<(String, String, String)> = bars
        .iter()
        .map(|bar| {
            (
                bar.label.clone(),
                format!("width: {:.0}%", bar_width_percent(bar.value, scale)),
                format_value(bar.value, &unit),
            )
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "bar-chart",
            for (i, (label, style, value)) in rows.into_iter().enumerate() {
                div { key: "{i}", class: "bar-row",
                    span { class: "bar-label", "{label}" }
                    div { class: "bar-track",
                        div { class: "bar-fill", style: "{style}" }
                    }
                    span { class: "bar-value", "{value}" }
                }
            }
        }
    }
}
