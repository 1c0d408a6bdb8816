pub mod models;
pub mod services;

pub use models::*;
pub use services::dispatch::NotificationDispatcher;
pub use services::email::EmailSender;
pub use services::sms::SmsSender;
