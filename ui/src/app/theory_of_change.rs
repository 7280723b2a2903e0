use dioxus::prelude::*;

use crate::app::AuthContext;
use crate::components::display::TheoryOfChangePreview;
use crate::components::forms::FormPanel;
use crate::features::project::{ProjectData, ProjectField, ProjectStore};
use crate::services::config::get_global_config;
use crate::{console_error, console_warn};

const THEORY_OF_CHANGE_CSS: Asset = asset!("/assets/styling/theory_of_change.css");

/// Restore the saved project, keeping the supplied title when there is one
fn load_project(store: &ProjectStore, title: &str) -> ProjectData {
    match store.load() {
        Ok(Some(mut data)) => {
            if !title.is_empty() {
                data.project_title = title.to_string();
            }
            data
        }
        Ok(None) => ProjectData::with_title(title),
        Err(e) => {
            console_warn!("[Project] Starting from an empty project: {}", e);
            ProjectData::with_title(title)
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TheoryOfChangeProps {
    #[props(default)]
    pub project_title: String,
}

/// Owns the project record: applies the form panel's updates and persists them
#[component]
pub fn TheoryOfChange(props: TheoryOfChangeProps) -> Element {
    let store = use_hook(|| {
        let config = get_global_config();
        ProjectStore::new(&config.storage.project, config.form.max_chars)
    });
    let mut data = {
        let store = store.clone();
        let title = props.project_title.clone();
        use_signal(move || load_project(&store, &title))
    };
    let auth = use_context::<AuthContext>();

    let update_field = move |(field, value): (ProjectField, String)| {
        data.with_mut(|project| project.set(field, value));
        if let Err(e) = store.save(&data.read()) {
            console_error!("[Project] Failed to save project: {}", e);
        }
    };

    let signed_in_as = auth.user().map(|user| user.display_name());

    rsx! {
        document::Link { rel: "stylesheet", href: THEORY_OF_CHANGE_CSS }

        div {
            class: "toc-page",

            div {
                class: "toc-topbar",
                if let Some(name) = signed_in_as {
                    span { class: "signed-in-as", "Signed in as {name}" }
                }
                button {
                    class: "sign-out-button",
                    onclick: move |_| auth.logout(),
                    "Sign out"
                }
            }

            div {
                class: "toc-layout",
                FormPanel {
                    data: data(),
                    update_field: update_field,
                }
                TheoryOfChangePreview { data: data() }
            }
        }
    }
}
