pub mod catalog;
pub mod chatbot;
pub mod conversation;
pub mod dashboard;
pub mod forms;
pub mod session;
pub mod sweeper;
