//! # react-setup
//!
//! Bootstrap a React project in one command: generate it with
//! `create-react-app`, add routing and Tailwind CSS, lay out the usual `src/`
//! folders, write starter files and make the first Git commit, optionally
//! pushing it to a remote.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod pipeline;
pub mod templates;
pub mod variant;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
