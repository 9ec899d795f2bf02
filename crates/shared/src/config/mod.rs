mod database;
mod jwt;
mod myconfig;
mod redis;
mod webhook;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::jwt::{Claims, JwtConfig};
pub use self::myconfig::Config;
pub use self::redis::{RedisClient, RedisConfig};
pub use self::webhook::WebhookVerifier;
