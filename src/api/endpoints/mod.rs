pub mod about;
pub mod chat;
pub mod health;
