//! Stylesheets injected alongside each component.
//!
//! The widget lands on arbitrary host pages, so its CSS ships inside the
//! markup instead of depending on a host stylesheet. Embedded instances
//! render inside a shadow root, so these rules stay scoped to the widget and
//! [`HOST_CSS`] cuts off inheritance from the host page.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

/// Reset applied to the shadow host so host-page inherited styles stop at
/// the tag boundary.
pub const HOST_CSS: &str = ":host { all: initial; display: block; }";

/// Floating shell: container, menu header, options, toggle button.
pub const WIDGET_CSS: &str = r#"
.chat-widget {
  position: fixed;
  bottom: 24px;
  right: 24px;
  z-index: 1000;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
}
.chat-widget *, .chat-widget *::before, .chat-widget *::after { box-sizing: border-box; }
.chat-widget__container {
  width: 420px;
  margin-bottom: 76px;
  background: #fff;
  border-radius: 20px;
  box-shadow: 0 4px 24px rgba(0, 0, 0, 0.12);
  overflow: hidden;
}
.chat-widget__header { padding: 24px; background: #1a73e8; color: #fff; text-align: center; }
.chat-widget__logo { display: flex; justify-content: center; margin-bottom: 20px; }
.chat-widget__logo-img { width: 50px; height: 50px; }
.chat-widget__title { margin: 0 0 16px; font-size: 24px; font-weight: 600; }
.chat-widget__subtitle { margin: 0 0 12px; font-size: 15px; color: rgba(255, 255, 255, 0.9); }
.chat-widget__description { margin: 0; font-size: 14px; line-height: 1.4; color: rgba(255, 255, 255, 0.9); }
.chat-options { padding: 0 14px; }
.chat-option {
  display: flex;
  align-items: center;
  width: 100%;
  margin: 14px 0;
  padding: 16px;
  background: #fff;
  border: 0.5px solid #e0e0e0;
  border-radius: 12px;
  text-align: left;
  cursor: pointer;
  transition: background-color 0.2s;
}
.chat-option:hover { background: #f8f9fa; }
.chat-option__icon {
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  width: 40px;
  height: 40px;
  margin-right: 16px;
  border-radius: 50%;
  color: #fff;
}
.chat-option__icon svg { width: 20px; height: 20px; }
.chat-option__icon--conversation, .chat-option__icon--knowledge { background: #4285f4; }
.chat-option__icon--schedule { background: #ea4335; }
.chat-option__icon--call { background: #00bfa5; }
.chat-option__content { flex: 1; min-width: 0; }
.chat-option__title { margin: 0 0 4px; font-size: 16px; font-weight: 800; color: #1a1a1a; }
.chat-option__description {
  margin: 0;
  font-size: 14px;
  color: #666;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}
.chat-option__action { display: flex; align-items: center; margin-left: 16px; }
.chat-option__action-text { margin-right: 8px; font-size: 14px; color: #4285f4; }
.chat-option__arrow { font-size: 30px; line-height: 1; color: #666; }
.chat-widget__toggle {
  position: fixed;
  bottom: 24px;
  right: 24px;
  z-index: 1001;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 56px;
  height: 56px;
  border: none;
  border-radius: 50%;
  background: #4285f4;
  color: #fff;
  cursor: pointer;
  box-shadow: 0 4px 12px rgba(66, 133, 244, 0.3);
  transition: transform 0.2s, box-shadow 0.2s;
}
.chat-widget__toggle:hover { transform: scale(1.05); box-shadow: 0 6px 16px rgba(66, 133, 244, 0.4); }
.chat-widget__toggle svg { width: 24px; height: 24px; }
.chat-widget__toggle--expanded { background: #1a73e8; }
@media screen and (max-width: 480px) {
  .chat-widget { bottom: 16px; right: 16px; }
  .chat-widget__container { width: calc(100vw - 32px); max-width: 420px; margin-bottom: 60px; }
  .chat-widget__header { padding: 16px; }
  .chat-widget__title { font-size: 20px; margin-bottom: 12px; }
  .chat-option { padding: 12px; margin: 10px 0; }
  .chat-widget__toggle { width: 48px; height: 48px; bottom: 16px; right: 16px; }
}
@media screen and (max-height: 600px) {
  .chat-widget__container { max-height: calc(100vh - 100px); }
  .chat-options { max-height: calc(100vh - 280px); overflow-y: auto; }
}
"#;

/// Conversation view: header, transcript, message kinds, input row.
pub const CONVERSATION_CSS: &str = r#"
.conversation {
  display: flex;
  flex-direction: column;
  height: 100vh;
  max-height: 800px;
  background: #fff;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  border-radius: 12px;
  overflow: hidden;
}
.conversation *, .conversation *::before, .conversation *::after { box-sizing: border-box; }
.conversation__header {
  display: flex;
  align-items: center;
  min-height: 72px;
  padding: 16px 20px;
  border-bottom: 1px solid #e5e7eb;
}
.conversation__back, .conversation__tool {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border: none;
  border-radius: 8px;
  background: none;
  color: #6b7280;
  cursor: pointer;
}
.conversation__back:hover, .conversation__tool:hover { background: #f3f4f6; color: #374151; }
.conversation__back svg { width: 20px; height: 20px; }
.conversation__tool svg { width: 18px; height: 18px; }
.conversation__header-content { display: flex; align-items: center; flex: 1; margin-left: 16px; }
.conversation__header-icon, .message__avatar {
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  border-radius: 50%;
  background: #4f46e5;
  color: #fff;
}
.conversation__header-icon { width: 44px; height: 44px; margin-right: 12px; }
.conversation__header-icon svg { width: 22px; height: 22px; }
.conversation__title { margin: 0 0 2px; font-size: 17px; font-weight: 600; color: #111827; }
.conversation__status { margin: 0; font-size: 14px; color: #6b7280; }
.conversation__messages { flex: 1; overflow-y: auto; padding: 20px; background: #f9fafb; }
.conversation__date-separator { margin: 24px 0; text-align: center; font-size: 13px; font-weight: 500; color: #6b7280; }
.message { display: flex; align-items: flex-start; margin-bottom: 20px; }
.message--user { justify-content: flex-end; }
.message__avatar { width: 36px; height: 36px; margin-right: 12px; }
.message__avatar svg { width: 18px; height: 18px; }
.message__content {
  max-width: 75%;
  padding: 12px 16px;
  background: #fff;
  border-radius: 20px 20px 20px 5px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}
.message--user .message__content { background: #4f46e5; color: #fff; border-radius: 20px 20px 5px 20px; }
.message__sender {
  margin-bottom: 6px;
  font-size: 12px;
  font-weight: 600;
  letter-spacing: 0.5px;
  text-transform: uppercase;
  color: #6b7280;
}
.message__text { margin-bottom: 8px; font-size: 15px; line-height: 1.5; color: #111827; }
.message--user .message__text { color: #fff; }
.message__timestamp { margin-top: 6px; text-align: right; font-size: 11px; font-weight: 500; color: #9ca3af; }
.message--user .message__timestamp { color: rgba(255, 255, 255, 0.7); }
.message__buttons, .message-card__buttons, .carousel-card__buttons { display: flex; gap: 12px; margin-top: 12px; }
.message__button, .message-card__button, .carousel-card__button {
  display: flex;
  align-items: center;
  justify-content: center;
  flex: 1;
  min-height: 40px;
  border: none;
  border-radius: 8px;
  background: #4f46e5;
  color: #fff;
  font-size: 14px;
  font-weight: 500;
  cursor: pointer;
}
.message__button:hover, .message-card__button:hover, .carousel-card__button:hover { background: #4338ca; }
.message__button--url, .message-card__button--url, .carousel-card__button--url { background: #10b981; }
.message-card {
  max-width: 340px;
  margin-top: 8px;
  border-radius: 16px;
  background: #fff;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
  overflow: hidden;
}
.message-card__image { width: 100%; height: 180px; object-fit: cover; }
.message-card__body { padding: 20px; }
.message-card__title { margin: 0 0 8px; font-size: 18px; font-weight: 700; color: #111827; }
.message-card__subtitle { margin: 0 0 16px; font-size: 14px; line-height: 1.5; color: #6b7280; }
.message-carousel { max-width: 100%; margin-top: 8px; overflow: hidden; }
.message-carousel__track { display: flex; gap: 12px; padding: 4px 4px 12px; overflow-x: auto; }
.carousel-card { flex: 0 0 260px; border-radius: 14px; background: #fff; box-shadow: 0 3px 10px rgba(0, 0, 0, 0.1); overflow: hidden; }
.carousel-card__image { width: 100%; height: 140px; object-fit: cover; }
.carousel-card__body { padding: 16px; }
.carousel-card__title { margin: 0 0 6px; font-size: 16px; font-weight: 700; color: #111827; }
.carousel-card__subtitle { margin: 0 0 12px; font-size: 13px; line-height: 1.4; color: #6b7280; }
.carousel-card__button { min-height: 32px; border-radius: 6px; font-size: 13px; }
.suggestion-chips { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 12px; }
.suggestion-chip {
  padding: 8px 16px;
  border: 1px solid #e5e7eb;
  border-radius: 20px;
  background: #f3f4f6;
  color: #374151;
  font-size: 14px;
  font-weight: 500;
  cursor: pointer;
}
.suggestion-chip:hover { background: #4f46e5; border-color: #4f46e5; color: #fff; }
.conversation__input-row {
  display: flex;
  align-items: center;
  gap: 12px;
  padding: 16px 20px;
  border-top: 1px solid #e5e7eb;
}
.conversation__input {
  flex: 1;
  height: 44px;
  padding: 0 16px;
  border: 2px solid #e5e7eb;
  border-radius: 22px;
  background: #f9fafb;
  font-size: 15px;
}
.conversation__input:focus { outline: none; border-color: #4f46e5; background: #fff; }
.conversation__send {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 44px;
  height: 44px;
  border: none;
  border-radius: 50%;
  background: #4f46e5;
  color: #fff;
  cursor: pointer;
}
.conversation__send svg { width: 18px; height: 18px; }
@media (max-width: 768px) {
  .conversation { border-radius: 0; }
  .message__content { max-width: 85%; }
  .carousel-card { flex-basis: 240px; }
  .message-card { max-width: 300px; }
}
"#;
