//! Conversation panel: header, transcript, input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used inside the floating shell (with a back button) and standalone for the
//! full-page tag (without one). Transcript mutations go through
//! [`ConversationState`]; this component performs only the browser side
//! effects those transitions ask for: URL navigation, scrolling, and parent
//! notification.

use chrono::Utc;
use leptos::prelude::*;

use crate::components::icons::{AttachmentIcon, BackIcon, ChatIcon, EmojiIcon, SendIcon};
use crate::components::message_content::MessageContent;
use crate::model::message::{Message, MessageButton, SuggestionChip};
use crate::state::conversation::{ButtonOutcome, ConversationState, KeyOutcome};
use crate::styles::CONVERSATION_CSS;
use crate::util::navigation::open_in_new_tab;
use crate::util::time::format_time;

/// Default header title when the host supplies none.
pub const DEFAULT_CONVERSATION_TITLE: &str = "Chatwoot";

const STATUS_LINE: &str = "We will be back online at 09:00 AM";

/// Transcript plus input for one conversation.
#[component]
pub fn ConversationView(
    #[prop(into, default = Signal::stored(DEFAULT_CONVERSATION_TITLE.to_owned()))]
    conversation_title: Signal<String>,
    /// Return to the shell menu. No back button is rendered without it.
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    /// Accepted for hosts that rename the conversation; not yet driven.
    #[prop(optional)]
    on_update_title: Option<Callback<String>>,
    /// Text of every message the user sends, posts, or picks.
    #[prop(optional)]
    on_message_sent: Option<Callback<String>>,
) -> impl IntoView {
    let _ = on_update_title;
    let conversation = RwSignal::new(ConversationState::demo(Utc::now()));
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let notify = move |text: String| match on_message_sent {
        Some(callback) => callback.run(text),
        None => log::debug!("message sent: {text}"),
    };

    let message_count = Memo::new(move |_| conversation.with(|c| c.messages().len()));

    Effect::new(move || {
        message_count.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        if let Some(text) = conversation.try_update(|c| c.send_message(Utc::now())).flatten() {
            notify(text);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if !ConversationState::is_send_key(&ev.key(), ev.shift_key(), ev.is_composing()) {
            return;
        }
        let outcome = conversation.try_update(|c| c.handle_key(&ev.key(), ev.shift_key(), ev.is_composing(), Utc::now()));
        let Some(outcome) = outcome else {
            return;
        };
        if outcome.prevents_default() {
            ev.prevent_default();
        }
        if let KeyOutcome::Submitted(Some(text)) = outcome {
            notify(text);
        }
    };

    let on_button = Callback::new(move |button: MessageButton| {
        let outcome = conversation.try_update(|c| c.handle_button_click(&button, Utc::now()));
        match outcome {
            Some(ButtonOutcome::Navigate(url)) => {
                if let Err(err) = open_in_new_tab(&url) {
                    log::warn!("button {} did not open: {err}", button.id);
                }
            }
            Some(ButtonOutcome::Posted(label)) => notify(label),
            None => {}
        }
    });

    let on_chip = Callback::new(move |chip: SuggestionChip| {
        if let Some(label) = conversation.try_update(|c| c.handle_chip_click(&chip, Utc::now())) {
            notify(label);
        }
    });

    view! {
        <style>{CONVERSATION_CSS}</style>
        <div class="conversation">
            <div class="conversation__header">
                {on_close
                    .map(|close| {
                        view! {
                            <button
                                class="conversation__back"
                                type="button"
                                aria-label="Back"
                                on:click=move |_| close.run(())
                            >
                                <BackIcon />
                            </button>
                        }
                    })}
                <div class="conversation__header-content">
                    <div class="conversation__header-icon">
                        <ChatIcon />
                    </div>
                    <div class="conversation__header-text">
                        <h3 class="conversation__title">{move || conversation_title.get()}</h3>
                        <p class="conversation__status">{STATUS_LINE}</p>
                    </div>
                </div>
            </div>

            <div class="conversation__messages" node_ref=messages_ref>
                <div class="conversation__date-separator">"Today"</div>
                <For
                    each=move || {
                        message_count.track();
                        conversation.with_untracked(|c| c.messages().to_vec())
                    }
                    key=|message| message.id.clone()
                    children=move |message| view! { <MessageBubble message=message on_button=on_button on_chip=on_chip /> }
                />
            </div>

            <div class="conversation__input-row">
                <button class="conversation__tool" type="button" aria-label="Attach a file">
                    <AttachmentIcon />
                </button>
                <input
                    class="conversation__input"
                    type="text"
                    placeholder="Type your message"
                    prop:value=move || conversation.with(|c| c.draft().to_owned())
                    on:input=move |ev| conversation.update(|c| c.set_draft(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button class="conversation__tool" type="button" aria-label="Insert emoji">
                    <EmojiIcon />
                </button>
                <button class="conversation__send" type="button" aria-label="Send" on:click=move |_| do_send()>
                    <SendIcon />
                </button>
            </div>
        </div>
    }
}

#[component]
fn MessageBubble(
    message: Message,
    on_button: Callback<MessageButton>,
    on_chip: Callback<SuggestionChip>,
) -> impl IntoView {
    let Message {
        id,
        timestamp,
        is_user,
        sender,
        body,
    } = message;
    let kind_class = format!("message message--{}", body.kind());

    view! {
        <div
            class=kind_class
            class:message--user=is_user
            class:message--bot=!is_user
            data-message-id=id
        >
            {(!is_user)
                .then(|| {
                    view! {
                        <div class="message__avatar">
                            <ChatIcon />
                        </div>
                    }
                })}
            <div class="message__content">
                {sender.map(|name| view! { <div class="message__sender">{name}</div> })}
                <MessageContent body=body on_button=on_button on_chip=on_chip />
                <div class="message__timestamp">{format_time(timestamp)}</div>
            </div>
        </div>
    }
}
