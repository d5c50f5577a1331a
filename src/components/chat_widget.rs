//! Polled chat transcript with a message input.

use leptos::prelude::*;

use crate::config::{ClientConfig, ids};
use crate::net::api::HttpChat;
use crate::net::types::ChatMessage;
use crate::state::chat::ChatState;
#[cfg(feature = "csr")]
use crate::state::chat::{refresh, submit};
#[cfg(feature = "csr")]
use crate::util::poll::{PollSwitch, spawn_poller};
use crate::util::form::timestamp_label;

/// Chat widget: refreshes on mount, then on a fixed cadence until unmounted.
///
/// Refreshes are independent requests; whichever response lands last
/// determines the rendered list.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<ClientConfig>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let switch = PollSwitch::new();
        let transport = HttpChat { url: config.chat_url.clone() };
        spawn_poller(config.poll_interval, switch.clone(), move || {
            let transport = transport.clone();
            async move {
                refresh(&chat, &transport).await;
            }
        });
        on_cleanup(move || switch.stop());
    }

    let render_seq = Memo::new(move |_| chat.with(|c| c.render_seq));
    Effect::new(move || {
        render_seq.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let transport = HttpChat { url: config.chat_url };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "csr")]
        {
            let transport = transport.clone();
            leptos::task::spawn_local(async move {
                submit(&chat, &transport).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("chat post to {} requires a browser", transport.url);
        }
    };

    view! {
        <section class="chat">
            <div id=ids::CHAT_MESSAGES class="chat__messages" node_ref=messages_ref>
                {move || chat.with(|c| c.messages.iter().map(message_line).collect::<Vec<_>>())}
            </div>
            <form id=ids::CHAT_FORM class="chat__form" on:submit=on_submit>
                <input
                    id=ids::CHAT_INPUT
                    class="chat__input"
                    type="text"
                    autocomplete="off"
                    placeholder="Type a message..."
                    prop:value=move || chat.with(|c| c.draft.clone())
                    on:input=move |ev| chat.update(|c| c.draft = event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Send"</button>
            </form>
        </section>
    }
}

fn message_line(msg: &ChatMessage) -> impl IntoView + use<> {
    let stamp = timestamp_label(&msg.timestamp);
    let text = msg.message.clone();
    view! {
        <div class="msg">
            <span class="timestamp">{stamp}</span>
            <span>{text}</span>
        </div>
    }
}
