use clap::Parser;

/// Takes no arguments: always operates on ./server.js
#[derive(Parser)]
#[command(name = "dbscrub")]
#[command(
    about = "Redact passwords in MySQL connection URLs inside ./server.js",
    long_about = None
)]
#[command(version)]
pub struct Cli {}
