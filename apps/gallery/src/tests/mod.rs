mod input;
mod logger;
