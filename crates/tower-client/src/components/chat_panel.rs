//! ChatPanel component: a collapsible assistant chat backed by the relay.

use tower_core::{Author, ChatTranscript};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::services::chat::send_message;
use crate::state::use_viewer_context;

/// ChatPanel component - floating chat in the bottom-right corner.
///
/// The user's message is shown immediately; the reply (or an error notice)
/// is appended when the relay answers.
#[function_component(ChatPanel)]
pub fn chat_panel() -> Html {
    let ctx = use_viewer_context();
    let is_open = use_state(|| false);
    let transcript = use_mut_ref(ChatTranscript::new);
    let pending = use_state(|| false);
    let input_ref = use_node_ref();
    let input_value = use_state(String::new);

    let on_toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let on_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                input_value.set(input.value());
            }
        })
    };

    let on_submit = {
        let endpoint = ctx.config.chat_endpoint.clone();
        let transcript = transcript.clone();
        let pending = pending.clone();
        let input_value = input_value.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *pending {
                return;
            }
            let Some(request) = transcript.borrow_mut().push_user(&input_value) else {
                return;
            };
            input_value.set(String::new());
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            pending.set(true);

            let endpoint = endpoint.clone();
            let transcript = transcript.clone();
            let pending = pending.clone();
            spawn_local(async move {
                match send_message(&endpoint, &request).await {
                    Ok(reply) => transcript.borrow_mut().push_reply(&reply),
                    Err(e) => {
                        tracing::error!(error = %e, "chat relay failed");
                        transcript.borrow_mut().push_error();
                    }
                }
                pending.set(false);
            });
        })
    };

    if !*is_open {
        return html! {
            <button class="chat-toggle" title="Open chat" onclick={on_toggle}>
                <Icon data={IconData::LUCIDE_MESSAGE_CIRCLE} width="24px" height="24px" />
            </button>
        };
    }

    let transcript = transcript.borrow();

    html! {
        <div class="chat-panel">
            <div class="chat-panel-header">
                <span>{ "Ask about the tower" }</span>
                <button class="chat-close" title="Close chat" onclick={on_toggle}>
                    <Icon data={IconData::LUCIDE_X} width="16px" height="16px" />
                </button>
            </div>
            <div class="chat-panel-messages">
                { for transcript.messages().iter().map(|msg| {
                    let msg_class = match msg.author {
                        Author::User => "chat-message self",
                        Author::Agent => "chat-message",
                    };
                    html! {
                        <div class={msg_class} key={msg.id}>
                            <span class="chat-content">{ msg.text.clone() }</span>
                        </div>
                    }
                })}
                if *pending {
                    <div class="chat-message pending">{ "..." }</div>
                }
            </div>
            <form class="chat-panel-input" onsubmit={on_submit}>
                <input
                    ref={input_ref}
                    type="text"
                    placeholder="Type a message..."
                    oninput={on_input}
                    disabled={*pending}
                />
                <button type="submit" class="send-btn" disabled={*pending}>
                    <Icon data={IconData::LUCIDE_SEND} />
                </button>
            </form>
        </div>
    }
}
