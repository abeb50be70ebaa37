use clap::Parser;

/// Command-line interface definition for schedcache
/// CLI application to pull and cache the weekly class schedule
#[derive(Parser)]
#[command(
    name = "schedcache",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pull the current week's class schedule from the course site and cache it as plain text",
    long_about = None,
    after_help = "Configuration is read from the environment:\n  \
        LINK             URL of the course schedule page\n  \
        LAST_UPDATE_FN   file holding the Unix timestamp of the last update\n  \
        SCHEDULE_OUT_FN  file the rendered schedule is written to"
)]
pub struct Cli {}
