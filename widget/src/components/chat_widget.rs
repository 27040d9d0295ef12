//! Floating chat widget shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the toggle button, the expanded container, and the switch between the
//! menu and the conversation view. State transitions live in
//! [`WidgetState`]; this component wires them to DOM events and performs the
//! persistence each transition returns.
//!
//! LIFECYCLE
//! =========
//! Under `csr` the shell holds a keep-alive interval and two window listeners
//! (`beforeunload`, `visibilitychange`). All three are released in
//! `on_cleanup`, so unmounting the host element cancels them.

use leptos::prelude::*;

use crate::components::chat_options::ChatOptions;
use crate::components::conversation_view::ConversationView;
use crate::components::icons::{ChatIcon, CloseIcon, LogoMark};
use crate::state::widget::{ActiveView, WidgetState};
use crate::styles::WIDGET_CSS;
use crate::util::storage::{BrowserStorage, PersistedWidget, WidgetStore};

const DESCRIPTION: &str = "Get the best prices on 2,000,000+ properties, worldwide";

/// The floating widget: toggle button plus expandable menu/conversation panel.
#[component]
pub fn ChatWidget(
    /// Header title; a signal when the host element's attribute can change.
    #[prop(into, default = Signal::stored(String::new()))]
    title: Signal<String>,
    #[prop(into, default = Signal::stored(String::new()))]
    subtitle: Signal<String>,
    /// Start from the persisted flags instead of closed/menu.
    #[prop(optional)]
    restore_state: bool,
) -> impl IntoView {
    let store = StoredValue::new_local(WidgetStore::new(BrowserStorage));
    let initial = if restore_state {
        WidgetState::restored(store.with_value(WidgetStore::load))
    } else {
        WidgetState::default()
    };
    let state = RwSignal::new(initial);

    let persist = move |snapshot: Option<PersistedWidget>| {
        if let Some(snapshot) = snapshot {
            store.update_value(|s| s.persist(&snapshot));
        }
    };

    let on_toggle = move |_| persist(state.try_update(WidgetState::toggle_expand).flatten());

    let on_select = Callback::new(move |view: ActiveView| {
        log::debug!("chat option selected: {}", view.as_str());
        persist(state.try_update(|s| s.select_view(view)).flatten());
    });

    let on_back = Callback::new(move |()| on_select.run(ActiveView::Menu));

    #[cfg(feature = "csr")]
    install_lifecycle(state, persist);

    // Memos keep keep-alive ticks from rebuilding the open panel.
    let expanded_memo = Memo::new(move |_| state.with(|s| s.expanded));
    let active_view = Memo::new(move |_| state.with(|s| s.active_view));
    let expanded = move || expanded_memo.get();

    view! {
        <style>{WIDGET_CSS}</style>
        <div class="chat-widget">
            <Show when=expanded>
                <div class="chat-widget__container">
                    {move || match active_view.get() {
                        ActiveView::Menu => {
                            view! {
                                <ShellHeader title=title subtitle=subtitle />
                                <ChatOptions on_select=on_select />
                            }
                                .into_any()
                        }
                        ActiveView::Conversation => view! { <ConversationView on_close=on_back /> }.into_any(),
                    }}
                </div>
            </Show>
            <button
                class="chat-widget__toggle"
                class:chat-widget__toggle--expanded=expanded
                type="button"
                aria-label=move || if expanded() { "Close chat" } else { "Open chat" }
                on:click=on_toggle
            >
                {move || if expanded() { view! { <CloseIcon /> }.into_any() } else { view! { <ChatIcon /> }.into_any() }}
            </button>
        </div>
    }
}

/// Logo, host-supplied title and subtitle, and the fixed description line
/// shown above the menu.
#[component]
pub fn ShellHeader(#[prop(into)] title: Signal<String>, #[prop(into)] subtitle: Signal<String>) -> impl IntoView {
    view! {
        <div class="chat-widget__header">
            <div class="chat-widget__logo">
                <LogoMark />
            </div>
            <h2 class="chat-widget__title">{move || title.get()}</h2>
            <p class="chat-widget__subtitle">{move || subtitle.get()}</p>
            <p class="chat-widget__description">{DESCRIPTION}</p>
        </div>
    }
}

/// Keep-alive interval plus page-hide and visibility listeners.
#[cfg(feature = "csr")]
fn install_lifecycle(state: RwSignal<WidgetState>, persist: impl Fn(Option<PersistedWidget>) + Copy + Send + Sync + 'static) {
    use gloo_timers::callback::Interval;
    use leptos::ev;

    use crate::state::widget::KEEP_ALIVE_INTERVAL_MS;

    let keep_alive = StoredValue::new_local(None::<Interval>);

    Effect::new(move || {
        if !state.with(WidgetState::keep_alive_armed) {
            keep_alive.update_value(|tick| {
                tick.take();
            });
            return;
        }
        if keep_alive.with_value(Option::is_some) {
            return;
        }
        let tick = Interval::new(KEEP_ALIVE_INTERVAL_MS, move || {
            persist(state.try_update(WidgetState::keep_alive_tick).flatten());
        });
        keep_alive.set_value(Some(tick));
    });

    let unload = window_event_listener(ev::beforeunload, move |_| {
        persist(state.with_untracked(WidgetState::page_hide_snapshot));
    });

    let visibility = window_event_listener(ev::Custom::<ev::Event>::new("visibilitychange"), move |_| {
        if document().hidden() {
            persist(state.with_untracked(WidgetState::page_hide_snapshot));
        } else {
            persist(state.try_update(WidgetState::visibility_regained).flatten());
        }
    });

    on_cleanup(move || {
        keep_alive.try_update_value(|tick| {
            tick.take();
        });
        unload.remove();
        visibility.remove();
    });
}
