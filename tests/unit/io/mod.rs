mod cli;
mod error;
mod exemplars;
mod render;
