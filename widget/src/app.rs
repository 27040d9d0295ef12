//! Server-rendered demo host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget itself renders in the browser. This page only places an
//! `<agodify-chatbot>` tag and loads the WASM bundle, the way any third-party
//! site would embed the widget.

use leptos::prelude::*;

use crate::embed::CHATBOT_TAG;

/// Attribute values and bundle location for the demo page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostPageOptions {
    pub title: String,
    pub subtitle: String,
    pub restore_state: bool,
    /// URL of the wasm-bindgen JS loader.
    pub bundle_url: String,
}

impl Default for HostPageOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            restore_state: false,
            bundle_url: "/pkg/chat_widget.js".to_owned(),
        }
    }
}

/// Full HTML document for the demo host.
pub fn host_page(options: HostPageOptions) -> impl IntoView {
    let HostPageOptions {
        title,
        subtitle,
        restore_state,
        bundle_url,
    } = options;
    let boot = format!("import init from {bundle_url:?};\ninit();");

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Chat widget demo"</title>
            </head>
            <body>
                <main>
                    <h1>"Chat widget demo"</h1>
                    <p>{format!("The floating widget is embedded below with a <{CHATBOT_TAG}> tag.")}</p>
                </main>
                <agodify-chatbot
                    title=title
                    subtitle=subtitle
                    restore-state=restore_state.then_some("")
                ></agodify-chatbot>
                <script type="module" inner_html=boot></script>
            </body>
        </html>
    }
}

/// Render the demo page to a string.
pub fn render_host_page(options: HostPageOptions) -> String {
    host_page(options).to_html()
}
