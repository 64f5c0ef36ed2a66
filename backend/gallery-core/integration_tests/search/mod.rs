mod client;
mod cycle;
mod helpers;
