//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{chat_widget::ChatWidget, upload_widget::UploadWidget};
use crate::config::ClientConfig;
use crate::state::{chat::ChatState, upload::UploadState};

/// Root application component.
///
/// Provides the client config and one state signal per widget, then renders
/// both widgets. Widgets share nothing beyond this wiring.
#[component]
pub fn App(#[prop(optional)] config: Option<ClientConfig>) -> impl IntoView {
    provide_meta_context();

    provide_context(config.unwrap_or_default());
    provide_context(RwSignal::new(UploadState::default()));
    provide_context(RwSignal::new(ChatState::default()));

    view! {
        <Title text="Upload & Chat"/>
        <main class="page">
            <UploadWidget/>
            <ChatWidget/>
        </main>
    }
}
