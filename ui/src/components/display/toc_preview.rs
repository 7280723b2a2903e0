use dioxus::prelude::*;

use crate::features::project::{ProjectData, ProjectField};
use crate::utils::is_blank;

#[derive(Props, PartialEq, Clone)]
pub struct TheoryOfChangePreviewProps {
    pub data: ProjectData,
}

/// Read-only view of the project, one card per step in form order
#[component]
pub fn TheoryOfChangePreview(props: TheoryOfChangePreviewProps) -> Element {
    rsx! {
        div {
            class: "toc-preview",
            h2 {
                class: "toc-preview-title",
                "{props.data.display_title()}"
            }
            for field in ProjectField::ALL {
                div {
                    key: "{field.key()}",
                    class: if is_blank(props.data.get(field)) { "toc-step empty" } else { "toc-step" },
                    h3 {
                        class: "toc-step-label",
                        "{field.label()}"
                    }
                    if is_blank(props.data.get(field)) {
                        p { class: "toc-step-text", "Not yet defined" }
                    } else {
                        p { class: "toc-step-text", "{props.data.get(field)}" }
                    }
                }
            }
        }
    }
}
