//! # react-setup
//!
//! Scaffold a React app with routing, Tailwind CSS and an initial Git commit.
//!
//! ## Usage
//!
//! - Local only: `react-setup my-app`
//! - Push to a remote: `react-setup my-app https://github.com/me/my-app.git`
//! - Preview the steps: `react-setup my-app --inspect`

/// Entry point for the CLI tool.
fn main() {
    react_setup::cli::run_cli();
}
