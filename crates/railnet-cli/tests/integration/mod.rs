mod assign;
mod build;
mod config;
mod route;
mod visualize;
