mod delete_message;
mod mark_read;
mod send_message;

pub use delete_message::delete_message;
pub use mark_read::mark_message_read;
pub use send_message::send_message;
