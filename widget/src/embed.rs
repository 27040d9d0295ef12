//! Custom-element embedding for host pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Host pages drop `<agodify-chatbot>` or `<agodify-fullchatbot>` tags into
//! their markup. The WASM start function registers both tags: it mounts every
//! tag already in the document and then watches the document with a
//! `MutationObserver`, so the tags behave like defined custom elements.
//!
//! LIFECYCLE
//! =========
//! - connected: a tag that enters the document gets a shadow root and one
//!   independent widget mounted inside it. A marker attribute keeps repeated
//!   scans from mounting it twice.
//! - attribute changed: `title`, `subtitle` and `conversation-title` feed
//!   live signals, so the mounted widget re-renders its header text.
//!   `restore-state` is read once at mount.
//! - disconnected: the widget is unmounted, which disposes its reactive owner
//!   and runs its cleanup (keep-alive timer, window listeners).

#[cfg(test)]
#[path = "embed_test.rs"]
mod embed_test;

/// Floating widget tag.
pub const CHATBOT_TAG: &str = "agodify-chatbot";
/// Inline full-conversation tag.
pub const FULL_CHATBOT_TAG: &str = "agodify-fullchatbot";
/// Marker set on elements that already host a widget.
pub const MOUNTED_ATTR: &str = "data-agodify-mounted";

/// Attributes whose changes reach a mounted widget.
pub const OBSERVED_ATTRIBUTES: [&str; 4] = ["title", "subtitle", "restore-state", "conversation-title"];

/// Registered embedding tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbedTag {
    Chatbot,
    FullChatbot,
}

impl EmbedTag {
    pub const ALL: [Self; 2] = [Self::Chatbot, Self::FullChatbot];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Chatbot => CHATBOT_TAG,
            Self::FullChatbot => FULL_CHATBOT_TAG,
        }
    }

    /// Match a DOM tag name, case-insensitively (`Element.tagName` is
    /// upper-case for HTML documents).
    #[must_use]
    pub fn from_tag_name(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name().eq_ignore_ascii_case(raw))
    }

    /// Attributes this tag maps to props.
    #[must_use]
    pub fn observed_attributes(self) -> &'static [&'static str] {
        match self {
            Self::Chatbot => &OBSERVED_ATTRIBUTES[..3],
            Self::FullChatbot => &OBSERVED_ATTRIBUTES[3..],
        }
    }

    /// Selector for elements of this tag not yet mounted.
    #[must_use]
    pub fn pending_selector(self) -> String {
        format!("{}:not([{MOUNTED_ATTR}])", self.name())
    }
}

/// Props for `<agodify-chatbot>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatbotProps {
    pub title: String,
    pub subtitle: String,
    pub restore_state: bool,
}

impl ChatbotProps {
    /// Read `title`, `subtitle` and `restore-state` through `lookup`.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            title: lookup("title").unwrap_or_default(),
            subtitle: lookup("subtitle").unwrap_or_default(),
            restore_state: lookup("restore-state").is_some_and(|raw| boolean_attribute(&raw)),
        }
    }

    /// Props to apply after an attribute change, or `None` when nothing the
    /// mounted widget displays has changed. `restore_state` only matters at
    /// mount, so it is carried over from `self`.
    #[must_use]
    pub fn live_update(&self, fresh: Self) -> Option<Self> {
        if fresh.title == self.title && fresh.subtitle == self.subtitle {
            return None;
        }
        Some(Self {
            restore_state: self.restore_state,
            ..fresh
        })
    }
}

/// Props for `<agodify-fullchatbot>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullChatbotProps {
    pub conversation_title: String,
}

impl Default for FullChatbotProps {
    fn default() -> Self {
        Self {
            conversation_title: crate::components::conversation_view::DEFAULT_CONVERSATION_TITLE.to_owned(),
        }
    }
}

impl FullChatbotProps {
    /// Read `conversation-title` through `lookup`; blank values use the default.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup("conversation-title")
            .filter(|title| !title.trim().is_empty())
            .map_or_else(Self::default, |conversation_title| Self { conversation_title })
    }

    /// Props to apply after an attribute change, or `None` when unchanged.
    #[must_use]
    pub fn live_update(&self, fresh: Self) -> Option<Self> {
        (fresh != *self).then_some(fresh)
    }
}

/// HTML boolean attribute: present means on, except an explicit `"false"`.
fn boolean_attribute(raw: &str) -> bool {
    !raw.trim().eq_ignore_ascii_case("false")
}

/// Mounted widgets keyed by their host element.
///
/// Generic over the element and the per-widget payload so the bookkeeping
/// runs natively; the browser build stores `HtmlElement`s and unmount
/// handles.
#[derive(Debug)]
pub struct Registry<E, W> {
    entries: Vec<(E, W)>,
}

impl<E, W> Default for Registry<E, W> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<E: PartialEq, W> Registry<E, W> {
    pub fn insert(&mut self, element: E, widget: W) {
        self.entries.push((element, widget));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, element: &E) -> bool {
        self.entries.iter().any(|(e, _)| e == element)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&E, &W)> {
        self.entries.iter().map(|(e, w)| (e, w))
    }

    /// Remove and return every entry whose element has left the document.
    pub fn take_detached(&mut self, is_attached: impl Fn(&E) -> bool) -> Vec<(E, W)> {
        let (kept, detached): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|(element, _)| is_attached(element));
        self.entries = kept;
        detached
    }

    /// Remove and return every entry.
    pub fn drain(&mut self) -> Vec<(E, W)> {
        std::mem::take(&mut self.entries)
    }
}

#[cfg(feature = "csr")]
mod browser {
    use std::any::Any;
    use std::cell::RefCell;

    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::{JsValue, wasm_bindgen};
    use web_sys::{HtmlElement, MutationObserver, MutationObserverInit, ShadowRootInit, ShadowRootMode};

    use super::{ChatbotProps, EmbedTag, FullChatbotProps, MOUNTED_ATTR, OBSERVED_ATTRIBUTES, Registry};
    use crate::components::chat_widget::ChatWidget;
    use crate::components::conversation_view::ConversationView;
    use crate::styles::HOST_CSS;

    /// Attribute signals a mounted widget reads from.
    enum LiveProps {
        Chatbot(RwSignal<ChatbotProps>),
        FullChatbot(RwSignal<FullChatbotProps>),
    }

    impl LiveProps {
        fn refresh(&self, element: &HtmlElement) {
            let lookup = |name: &str| element.get_attribute(name);
            match self {
                Self::Chatbot(props) => {
                    let fresh = ChatbotProps::from_attributes(lookup);
                    if let Some(next) = props.with_untracked(|current| current.live_update(fresh)) {
                        props.set(next);
                    }
                }
                Self::FullChatbot(props) => {
                    let fresh = FullChatbotProps::from_attributes(lookup);
                    if let Some(next) = props.with_untracked(|current| current.live_update(fresh)) {
                        props.set(next);
                    }
                }
            }
        }

        fn dispose(self) {
            match self {
                Self::Chatbot(props) => props.dispose(),
                Self::FullChatbot(props) => props.dispose(),
            }
        }
    }

    struct MountedWidget {
        handle: Box<dyn Any>,
        props: LiveProps,
    }

    struct DocumentObserver {
        observer: MutationObserver,
        _callback: Closure<dyn FnMut()>,
    }

    thread_local! {
        static MOUNTED: RefCell<Registry<HtmlElement, MountedWidget>> = RefCell::new(Registry::default());
        static OBSERVER: RefCell<Option<DocumentObserver>> = const { RefCell::new(None) };
    }

    /// Mount every tag already in the document, then follow tags added,
    /// removed, or re-attributed later. Calling it again is a no-op.
    #[wasm_bindgen]
    pub fn register_widgets() -> bool {
        mount_widgets();
        if OBSERVER.with(|slot| slot.borrow().is_some()) {
            return true;
        }
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            log::warn!("chat widget: no document to observe");
            return false;
        };

        let callback = Closure::<dyn FnMut()>::new(reconcile);
        let observer = match MutationObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("chat widget: cannot create MutationObserver: {err:?}");
                return false;
            }
        };

        let filter = js_sys::Array::new();
        for name in OBSERVED_ATTRIBUTES {
            filter.push(&JsValue::from_str(name));
        }
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        init.set_attributes(true);
        init.set_attribute_filter(&filter);

        if let Err(err) = observer.observe_with_options(&root, &init) {
            log::warn!("chat widget: cannot observe the document: {err:?}");
            return false;
        }
        OBSERVER.with(|slot| {
            *slot.borrow_mut() = Some(DocumentObserver {
                observer,
                _callback: callback,
            });
        });
        true
    }

    /// Mount a widget into every tag not mounted yet. Returns how many
    /// widgets were mounted by this call.
    #[wasm_bindgen]
    pub fn mount_widgets() -> u32 {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("chat widget: no document to mount into");
            return 0;
        };

        let mut mounted = 0;
        for tag in EmbedTag::ALL {
            let nodes = match document.query_selector_all(&tag.pending_selector()) {
                Ok(nodes) => nodes,
                Err(err) => {
                    log::warn!("chat widget: cannot query {}: {err:?}", tag.name());
                    continue;
                }
            };
            for index in 0..nodes.length() {
                let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                    continue;
                };
                if element.set_attribute(MOUNTED_ATTR, "").is_err() {
                    continue;
                }
                match mount_one(tag, &element) {
                    Ok(widget) => {
                        MOUNTED.with(|registry| registry.borrow_mut().insert(element, widget));
                        mounted += 1;
                    }
                    Err(err) => {
                        log::warn!("chat widget: cannot mount {}: {err:?}", tag.name());
                        let _ = element.remove_attribute(MOUNTED_ATTR);
                    }
                }
            }
        }
        if mounted > 0 {
            log::debug!("chat widget: mounted {mounted} instance(s)");
        }
        mounted
    }

    /// Stop observing the document and unmount every widget, running each
    /// instance's cleanup (timers, window listeners) and clearing the marker.
    #[wasm_bindgen]
    pub fn unmount_widgets() {
        if let Some(slot) = OBSERVER.with(|slot| slot.borrow_mut().take()) {
            slot.observer.disconnect();
        }
        let widgets = MOUNTED.with(|registry| registry.borrow_mut().drain());
        for (element, widget) in widgets {
            release(&element, widget);
        }
    }

    /// Observer callback. Records are not inspected: the registry is
    /// reconciled against the live document instead.
    fn reconcile() {
        let detached = MOUNTED.with(|registry| registry.borrow_mut().take_detached(|element| element.is_connected()));
        for (element, widget) in detached {
            log::debug!("chat widget: {} removed from the page", element.tag_name().to_ascii_lowercase());
            release(&element, widget);
        }
        MOUNTED.with(|registry| {
            for (element, widget) in registry.borrow().iter() {
                widget.props.refresh(element);
            }
        });
        mount_widgets();
    }

    fn release(element: &HtmlElement, widget: MountedWidget) {
        let MountedWidget { handle, props } = widget;
        drop(handle);
        props.dispose();
        let _ = element.remove_attribute(MOUNTED_ATTR);
    }

    /// Container inside the element's open shadow root. A shadow root left by
    /// an earlier mount is emptied and reused.
    fn shadow_container(element: &HtmlElement) -> Result<HtmlElement, JsValue> {
        let shadow = match element.shadow_root() {
            Some(shadow) => {
                shadow.set_inner_html("");
                shadow
            }
            None => element.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?,
        };
        let document = element
            .owner_document()
            .ok_or_else(|| JsValue::from_str("element has no owner document"))?;
        let container = document.create_element("div")?;
        shadow.append_child(&container)?;
        container.dyn_into::<HtmlElement>().map_err(JsValue::from)
    }

    fn mount_one(tag: EmbedTag, element: &HtmlElement) -> Result<MountedWidget, JsValue> {
        let container = shadow_container(element)?;
        let lookup = |name: &str| element.get_attribute(name);
        let widget = match tag {
            EmbedTag::Chatbot => {
                let initial = ChatbotProps::from_attributes(lookup);
                let restore_state = initial.restore_state;
                let props = RwSignal::new(initial);
                let title = Signal::derive(move || props.with(|p| p.title.clone()));
                let subtitle = Signal::derive(move || props.with(|p| p.subtitle.clone()));
                let handle = leptos::mount::mount_to(container, move || {
                    view! {
                        <style>{HOST_CSS}</style>
                        <ChatWidget title=title subtitle=subtitle restore_state=restore_state />
                    }
                });
                MountedWidget {
                    handle: Box::new(handle),
                    props: LiveProps::Chatbot(props),
                }
            }
            EmbedTag::FullChatbot => {
                let props = RwSignal::new(FullChatbotProps::from_attributes(lookup));
                let conversation_title = Signal::derive(move || props.with(|p| p.conversation_title.clone()));
                let handle = leptos::mount::mount_to(container, move || {
                    view! {
                        <style>{HOST_CSS}</style>
                        <ConversationView conversation_title=conversation_title />
                    }
                });
                MountedWidget {
                    handle: Box::new(handle),
                    props: LiveProps::FullChatbot(props),
                }
            }
        };
        Ok(widget)
    }
}

#[cfg(feature = "csr")]
pub use browser::{mount_widgets, register_widgets, unmount_widgets};
