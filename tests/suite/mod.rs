mod config;
mod filter;
mod projection;
mod render;
