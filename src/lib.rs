//! Typed in-memory containers for SMS, Email and Push notifications,
//! ordered chronologically on demand.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{NotificationError, Result};
pub use models::notification::{
    Channel, ChannelDetails, ChannelKind, Email, EmailNotification, Notification, Push,
    PushNotification, Sms, SmsNotification,
};
pub use services::container::NotificationContainer;
