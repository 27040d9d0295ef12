//! Support options listed under the shell header.

use leptos::prelude::*;

use crate::components::icons::MenuOptionIcon;
use crate::state::menu::{MENU_OPTIONS, MenuOption};
use crate::state::widget::ActiveView;

/// The fixed menu. Only options carrying an action call `on_select`.
#[component]
pub fn ChatOptions(on_select: Callback<ActiveView>) -> impl IntoView {
    view! {
        <div class="chat-options">
            {MENU_OPTIONS
                .iter()
                .map(|option| view! { <ChatOptionRow option=*option on_select=on_select /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ChatOptionRow(option: MenuOption, on_select: Callback<ActiveView>) -> impl IntoView {
    let on_click = move |_| {
        if let Some(view) = option.action {
            on_select.run(view);
        }
    };
    let icon_class = format!("chat-option__icon chat-option__icon--{}", option.accent);

    view! {
        <button
            class="chat-option"
            class:chat-option--inert=option.is_inert()
            type="button"
            on:click=on_click
        >
            <div class=icon_class>
                <MenuOptionIcon icon=option.icon />
            </div>
            <div class="chat-option__content">
                <h3 class="chat-option__title">{option.title}</h3>
                <p class="chat-option__description">{option.description}</p>
            </div>
            <div class="chat-option__action">
                {option
                    .action_text
                    .map(|text| view! { <span class="chat-option__action-text">{text}</span> })}
                <span class="chat-option__arrow">"›"</span>
            </div>
        </button>
    }
}
