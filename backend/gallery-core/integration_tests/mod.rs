mod error;
mod favorites;
mod search;
