mod browser;
mod mailer;

pub use browser::{FantocciniGateway, IBrowserGateway, IBrowserSession};
pub use mailer::{EmailMessage, IMailer, SmtpMailer};
