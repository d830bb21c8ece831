pub mod chatbot;
pub mod trip;
