mod config;
mod credentials;
mod favorites;
