pub use crate::utils::database;
use async_trait::async_trait;
use lettre::{
    transport::smtp::authentication::Credentials, AsyncSmtpTransport, Tokio1Executor,
};
use std::env;

#[derive(Clone)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
    pub frontend_url: String,
}

#[derive(Clone)]
pub struct AuthContext {
    pub jwt_secret: String,
    pub token_expiry_secs: i64,
}

#[derive(Clone)]
pub struct MailContext {
    pub sender_name: String,
    pub sender_email: String,
    pub transport: AsyncSmtpTransport<Tokio1Executor>,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub auth: AuthContext,
    pub mail: MailContext,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
    pub frontend_url: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_expiry_secs: i64,
}

#[derive(Clone)]
pub struct MailConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub sender_name: String,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub mail: MailConfig,
}

impl Default for Config {
    fn default() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL not set");
        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .expect("Invalid DATABASE_MAX_CONNECTIONS number");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET not set");
        let token_expiry_secs = env::var("JWT_EXPIRY")
            .unwrap_or_else(|_| "604800".to_string())
            .parse::<i64>()
            .expect("Invalid JWT_EXPIRY number");
        let mail_host = env::var("SMTP_HOST").expect("SMTP_HOST not set");
        let mail_user = env::var("SMTP_USER").expect("SMTP_USER not set");
        let mail_password = env::var("SMTP_PASS").expect("SMTP_PASS not set");
        let mail_sender_name =
            env::var("MAIL_SENDER_NAME").unwrap_or_else(|_| "Mealdrop".to_string());

        Self {
            database: DatabaseConfig {
                url: database_url,
                max_connections: database_max_connections,
            },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
                frontend_url,
            },
            auth: AuthConfig {
                jwt_secret,
                token_expiry_secs,
            },
            mail: MailConfig {
                host: mail_host,
                user: mail_user,
                password: mail_password,
                sender_name: mail_sender_name,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let db_conn = database::DatabaseConnection::connect(&self.database).await;
        db_conn.migrate().await;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(self.mail.host.as_str())
            .expect("Invalid SMTP host")
            .credentials(Credentials::new(
                self.mail.user.clone(),
                self.mail.password.clone(),
            ))
            .build();

        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
                frontend_url: self.app.frontend_url,
            },
            db_conn,
            auth: AuthContext {
                jwt_secret: self.auth.jwt_secret,
                token_expiry_secs: self.auth.token_expiry_secs,
            },
            mail: MailContext {
                sender_name: self.mail.sender_name,
                sender_email: self.mail.user,
                transport,
            },
        }
    }
}
