use std::io::Write;

use crate::models::notification::{ChannelDetails, ChannelKind, Email, Notification, Push, Sms};
use crate::services::container::NotificationContainer;

/// One container per channel, as populated by the demonstration run.
#[derive(Debug, Default)]
pub struct DemoContainers {
    pub sms: NotificationContainer<Sms>,
    pub email: NotificationContainer<Email>,
    pub push: NotificationContainer<Push>,
}

impl DemoContainers {
    pub fn populate() -> Self {
        let mut containers = Self::default();

        containers
            .sms
            .add(Notification::now("SMS notification", Sms::new("123456789")));
        containers
            .email
            .add(Notification::now("Email notification", Email::new("example@example.com")));
        containers
            .push
            .add(Notification::now("Push notification", Push::new("device123")));

        containers
    }

    pub fn sort_all(&mut self) {
        self.sms.sort();
        self.email.sort();
        self.push.sort();
    }
}

fn write_block<C: ChannelDetails>(
    out: &mut impl Write,
    kind: ChannelKind,
    container: &NotificationContainer<C>,
) -> std::io::Result<()> {
    writeln!(out, "{} notifications:", kind)?;
    for notification in container {
        writeln!(out, "{}", notification)?;
    }
    Ok(())
}

/// Writes every channel block followed by the existence checks.
pub fn render(out: &mut impl Write, containers: &DemoContainers) -> std::io::Result<()> {
    write_block(out, ChannelKind::Sms, &containers.sms)?;
    writeln!(out)?;
    write_block(out, ChannelKind::Email, &containers.email)?;
    writeln!(out)?;
    write_block(out, ChannelKind::Push, &containers.push)?;

    writeln!(out)?;
    let checks = [
        (ChannelKind::Sms, containers.sms.has_any()),
        (ChannelKind::Email, containers.email.has_any()),
        (ChannelKind::Push, containers.push.has_any()),
    ];
    for (kind, has_any) in checks {
        writeln!(out, "Does {} container have notifications? {}", kind, has_any)?;
    }
    Ok(())
}

/// Populates, prints, then sorts the three demo containers.
pub fn run(out: &mut impl Write) -> std::io::Result<DemoContainers> {
    log::info!("Running notification container demo");

    let mut containers = DemoContainers::populate();
    render(out, &containers)?;
    containers.sort_all();

    log::info!("Demo finished");
    Ok(containers)
}
