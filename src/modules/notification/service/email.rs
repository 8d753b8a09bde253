use super::{Error, Notification, Result};
use crate::{modules::user::repository::User, types::Context};
use lettre::{
    message::{header::ContentType, Mailbox},
    AsyncTransport, Message,
};
use std::sync::Arc;

fn sender_mailbox(ctx: &Context) -> Result<Mailbox> {
    format!("{} <{}>", ctx.mail.sender_name, ctx.mail.sender_email)
        .parse()
        .map_err(|err| {
            tracing::error!("Failed to parse the sender mailbox: {}", err);
            Error::NotSent
        })
}

fn recipient_mailbox(user: &User) -> Result<Mailbox> {
    format!("{} <{}>", user.name, user.email).parse().map_err(|err| {
        tracing::error!("Failed to parse the recipient mailbox: {}", err);
        Error::NotSent
    })
}

async fn deliver(ctx: Arc<Context>, user: &User, subject: &str, body: String) -> Result<()> {
    let message = Message::builder()
        .from(sender_mailbox(&ctx)?)
        .to(recipient_mailbox(user)?)
        .subject(subject)
        .header(ContentType::TEXT_HTML)
        .body(body)
        .map_err(|err| {
            tracing::error!("Failed to build email message: {}", err);
            Error::NotSent
        })?;

    ctx.mail.transport.send(message).await.map_err(|err| {
        tracing::error!("Failed to send email to {}: {}", user.email, err);
        Error::NotSent
    })?;

    tracing::debug!("Email sent to {}", user.email);
    Ok(())
}

pub async fn send(ctx: Arc<Context>, notification: Notification) -> Result<()> {
    match notification {
        Notification::Registered {
            user,
            confirmation_code,
        } => {
            let body = format!(
                "<h1>Welcome to Mealdrop, {}!</h1>\
                 <p>Thank you for signing up. Use the code below to verify your email address:</p>\
                 <h2>{}</h2>\
                 <p>If you did not create an account, you can safely ignore this email.</p>",
                user.name, confirmation_code
            );
            deliver(ctx, &user, "Verify your Mealdrop account", body).await
        }
        Notification::PasswordResetRequested { user, reset_token } => {
            let reset_url = format!(
                "{}/reset-password?token={}",
                ctx.app.frontend_url, reset_token
            );
            let body = format!(
                "<h1>Password reset</h1>\
                 <p>Hi {}, we received a request to reset your password.</p>\
                 <p><a href=\"{}\">Click here to choose a new password</a></p>\
                 <p>The link expires in one hour. If you did not request a reset, \
                 you can safely ignore this email.</p>",
                user.name, reset_url
            );
            deliver(ctx, &user, "Reset your Mealdrop password", body).await
        }
    }
}
