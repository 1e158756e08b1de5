use yew::prelude::*;

pub const DEFAULT_MAX: f64 = 100.0;

/// Thickness of the progress track.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ProgressSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ProgressSize {
    pub fn class(self) -> &'static str {
        match self {
            ProgressSize::Small => "progress-bar__track--sm",
            ProgressSize::Medium => "progress-bar__track--md",
            ProgressSize::Large => "progress-bar__track--lg",
        }
    }
}

// Unknown sizes render as medium.
impl From<&str> for ProgressSize {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" | "sm" => ProgressSize::Small,
            "large" | "lg" => ProgressSize::Large,
            _ => ProgressSize::Medium,
        }
    }
}

/// Semantic tone of the fill.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ProgressColor {
    #[default]
    Primary,
    Success,
    Warning,
    Error,
    Info,
}

impl ProgressColor {
    pub fn class(self) -> &'static str {
        match self {
            ProgressColor::Success => "progress-bar__fill--success",
            ProgressColor::Warning => "progress-bar__fill--warning",
            ProgressColor::Error => "progress-bar__fill--error",
            ProgressColor::Info => "progress-bar__fill--info",
            ProgressColor::Primary => "progress-bar__fill--primary",
        }
    }
}

// Unknown colors render with the primary tone.
impl From<&str> for ProgressColor {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => ProgressColor::Success,
            "warning" => ProgressColor::Warning,
            "error" => ProgressColor::Error,
            "info" => ProgressColor::Info,
            _ => ProgressColor::Primary,
        }
    }
}

/// Share of `max` covered by `value`, clamped to `[0, 100]`.
///
/// A non-positive or non-finite `max`, or a ratio that is not a number,
/// yields `0.0` instead of leaking a degenerate width into the markup.
pub fn fill_percentage(value: f64, max: f64) -> f64 {
    if !(max.is_finite() && max > 0.0) {
        return 0.0;
    }
    let percentage = (value / max) * 100.0;
    // Also catches -0.0, which would otherwise render as "-0%".
    if percentage.is_nan() || percentage <= 0.0 {
        return 0.0;
    }
    percentage.min(100.0)
}

/// Everything the bar needs to draw, resolved once per render.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarView {
    pub percentage: f64,
    pub track_class: &'static str,
    pub fill_class: &'static str,
    /// `None` when the label row is hidden.
    pub label: Option<String>,
    pub percentage_text: String,
}

impl ProgressBarView {
    pub fn resolve(props: &ProgressBarProps) -> Self {
        let percentage = fill_percentage(props.value, props.max);
        let label = props.show_label.then(|| match &props.label {
            Some(label) => label.to_string(),
            None => format!("{}/{}", props.value, props.max),
        });

        Self {
            percentage,
            track_class: props.size.class(),
            fill_class: props.color.class(),
            label,
            percentage_text: format!("{}%", percentage.round()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub value: f64,
    #[prop_or(DEFAULT_MAX)]
    pub max: f64,
    #[prop_or_default]
    pub size: ProgressSize,
    #[prop_or_default]
    pub color: ProgressColor,
    #[prop_or(true)]
    pub show_label: bool,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let view = ProgressBarView::resolve(props);

    html! {
        <div class={classes!("progress-bar", props.class.clone())}>
            {
                if let Some(label) = view.label {
                    html! {
                        <div class="progress-bar__label-row">
                            <span class="progress-bar__label">{ label }</span>
                            <span class="progress-bar__percentage">{ view.percentage_text }</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class={classes!("progress-bar__track", view.track_class)}>
                <div
                    class={classes!("progress-bar__fill", "progress-bar__fill--animated", view.fill_class)}
                    style={format!("width: {}%", view.percentage)}
                ></div>
            </div>
        </div>
    }
}
