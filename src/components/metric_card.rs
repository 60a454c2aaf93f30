//! Presentational metric tile for dashboard summaries.
//!
//! DESIGN
//! ======
//! Pure display: the caller supplies the label, value and optional change
//! since the previous period. Formatting lives in plain functions so it can
//! be tested without a DOM.

#[cfg(test)]
#[path = "metric_card_test.rs"]
mod metric_card_test;

use leptos::prelude::*;

/// Direction of a metric's change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn of(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Up
        } else if delta < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Up => "metric-card__delta--up",
            Self::Down => "metric-card__delta--down",
            Self::Flat => "metric-card__delta--flat",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Flat => "■",
        }
    }
}

/// `+12.5%`, `-3%`, `0%`: one decimal at most, trailing `.0` dropped.
pub fn format_delta(delta: f64) -> String {
    let rounded = (delta * 10.0).round() / 10.0;
    let body = if rounded.fract().abs() < f64::EPSILON {
        format!("{}", rounded.abs().trunc())
    } else {
        format!("{:.1}", rounded.abs())
    };
    match Trend::of(rounded) {
        Trend::Up => format!("+{body}%"),
        Trend::Down => format!("-{body}%"),
        Trend::Flat => format!("{body}%"),
    }
}

/// A labelled number with an optional percentage change.
#[component]
pub fn MetricCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] delta: Option<Signal<f64>>,
) -> impl IntoView {
    view! {
        <div class="metric-card">
            <span class="metric-card__label">{label}</span>
            <span class="metric-card__value">{move || value.get()}</span>
            {delta.map(|delta| {
                view! {
                    <span class=move || format!("metric-card__delta {}", Trend::of(delta.get()).class())>
                        {move || Trend::of(delta.get()).marker()}
                        " "
                        {move || format_delta(delta.get())}
                    </span>
                }
            })}
        </div>
    }
}
