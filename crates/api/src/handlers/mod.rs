pub mod achievements;
pub mod games;
pub mod profiles;
pub mod steam_auth;
