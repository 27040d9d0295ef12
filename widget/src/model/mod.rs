//! Conversation message model.
//!
//! DESIGN
//! ======
//! Messages are a closed tagged union. Rendering and click handling dispatch
//! on [`message::MessageBody`] exhaustively, so a new message kind is added by
//! extending the enum and letting the compiler point at every match.

pub mod message;
pub mod seed;
