use dioxus::prelude::*;

use crate::features::project::progress_label;

#[derive(Props, PartialEq, Clone)]
pub struct ProgressDisplayProps {
    /// 0.0 to 100.0
    pub percent: f64,
}

#[component]
pub fn ProgressDisplay(props: ProgressDisplayProps) -> Element {
    let label = progress_label(props.percent);

    rsx! {
        div {
            class: "progress-container",
            div {
                class: "progress-bar",
                style: format!("width: {}%", props.percent),
            }
        }
        p {
            class: "progress-text",
            "{label}"
        }
    }
}
