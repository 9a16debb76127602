//! Application services for the combined chat.
//!
//! Services orchestrate domain operations and coordinate between ports.

mod combined_chat;


pub use combined_chat::CombinedChatService;
