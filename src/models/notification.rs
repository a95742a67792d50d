use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// The closed set of delivery channels a notification can target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Sms,
    Email,
    Push,
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelKind::Sms => write!(f, "SMS"),
            ChannelKind::Email => write!(f, "Email"),
            ChannelKind::Push => write!(f, "Push"),
        }
    }
}

/// Identifying payload carried by a channel, used when rendering a notification.
pub trait ChannelDetails {
    fn kind(&self) -> ChannelKind;
    fn field_label(&self) -> &'static str;
    fn field_value(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sms {
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Email {
    pub email_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Push {
    pub device_id: String,
}

impl Sms {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self { phone_number: phone_number.into() }
    }
}

impl Email {
    pub fn new(email_address: impl Into<String>) -> Self {
        Self { email_address: email_address.into() }
    }
}

impl Push {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self { device_id: device_id.into() }
    }
}

impl ChannelDetails for Sms {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Sms
    }

    fn field_label(&self) -> &'static str {
        "Phone number"
    }

    fn field_value(&self) -> &str {
        &self.phone_number
    }
}

impl ChannelDetails for Email {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Email
    }

    fn field_label(&self) -> &'static str {
        "Email address"
    }

    fn field_value(&self) -> &str {
        &self.email_address
    }
}

impl ChannelDetails for Push {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Push
    }

    fn field_label(&self) -> &'static str {
        "Device ID"
    }

    fn field_value(&self) -> &str {
        &self.device_id
    }
}

/// Tagged union over every channel, for containers that mix variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Channel {
    Sms(Sms),
    Email(Email),
    Push(Push),
}

impl ChannelDetails for Channel {
    fn kind(&self) -> ChannelKind {
        match self {
            Channel::Sms(sms) => sms.kind(),
            Channel::Email(email) => email.kind(),
            Channel::Push(push) => push.kind(),
        }
    }

    fn field_label(&self) -> &'static str {
        match self {
            Channel::Sms(sms) => sms.field_label(),
            Channel::Email(email) => email.field_label(),
            Channel::Push(push) => push.field_label(),
        }
    }

    fn field_value(&self) -> &str {
        match self {
            Channel::Sms(sms) => sms.field_value(),
            Channel::Email(email) => email.field_value(),
            Channel::Push(push) => push.field_value(),
        }
    }
}

impl From<Sms> for Channel {
    fn from(sms: Sms) -> Self {
        Channel::Sms(sms)
    }
}

impl From<Email> for Channel {
    fn from(email: Email) -> Self {
        Channel::Email(email)
    }
}

impl From<Push> for Channel {
    fn from(push: Push) -> Self {
        Channel::Push(push)
    }
}

/// A message stamped with a point in time, addressed through channel `C`.
///
/// Construction accepts any message and timestamp; nothing is validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification<C> {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub channel: C,
}

pub type SmsNotification = Notification<Sms>;
pub type EmailNotification = Notification<Email>;
pub type PushNotification = Notification<Push>;

impl<C> Notification<C> {
    pub fn new(message: impl Into<String>, timestamp: DateTime<Utc>, channel: C) -> Self {
        Self {
            message: message.into(),
            timestamp,
            channel,
        }
    }

    pub fn now(message: impl Into<String>, channel: C) -> Self {
        Self::new(message, Utc::now(), channel)
    }

    /// Orders by timestamp only. Message and channel never break ties.
    pub fn compare_timestamp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }

    /// Lifts a single-channel notification into the mixed-channel form.
    pub fn into_any(self) -> Notification<Channel>
    where
        C: Into<Channel>,
    {
        Notification {
            message: self.message,
            timestamp: self.timestamp,
            channel: self.channel.into(),
        }
    }
}

impl<C: ChannelDetails> std::fmt::Display for Notification<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Message: {}, {}: {}",
            self.message,
            self.channel.field_label(),
            self.channel.field_value()
        )
    }
}
