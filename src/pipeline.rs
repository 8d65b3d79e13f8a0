//! The ordered scaffold plan and its fail-fast runner.
//!
//! [`Pipeline::plan`] turns a [`ScaffoldConfig`] into a flat list of
//! [`Step`]s. [`Pipeline::run`] executes them in order and stops at the first
//! failure; nothing already done is rolled back.

use crate::config::{MAIN_BRANCH, REMOTE_NAME, ScaffoldConfig};
use crate::error::{Result, StepError, StepFailure};
use crate::executor::{CommandExecutor, display_command};
use crate::templates;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Folders created under the project root after dependencies are installed.
pub const PROJECT_FOLDERS: &[&str] = &[
    "src/assets",
    "src/components",
    "src/context",
    "src/data",
    "src/hooks",
    "src/pages",
    "src/services",
    "src/store",
    "src/styles",
    "src/utils",
];

/// What a step does.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Run an external program in `dir`
    Run {
        program: String,
        args: Vec<String>,
        dir: PathBuf,
    },
    /// Create each directory along with any missing parents
    CreateDirs { paths: Vec<PathBuf> },
    /// Write `contents` to `path`, replacing whatever is there
    WriteFile {
        path: PathBuf,
        #[serde(skip)]
        contents: String,
    },
}

/// One unit of the scaffold plan.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    /// Progress line printed before the step runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub description: String,
    pub action: Action,
    /// Printed to stderr if the step fails
    pub failure_message: String,
}

impl Step {
    fn command(
        program: &str,
        args: &[&str],
        dir: PathBuf,
        failure_message: impl Into<String>,
    ) -> Self {
        let args: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
        Self {
            heading: None,
            description: display_command(program, &args),
            action: Action::Run {
                program: program.to_string(),
                args,
                dir,
            },
            failure_message: failure_message.into(),
        }
    }

    fn write(path: PathBuf, contents: String, failure_message: impl Into<String>) -> Self {
        Self {
            heading: None,
            description: format!("write {}", path.display()),
            action: Action::WriteFile { path, contents },
            failure_message: failure_message.into(),
        }
    }

    fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }
}

/// The full ordered plan for one project.
#[derive(Debug, Clone, Serialize)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    /// Lay out every step for `config`, in execution order.
    #[must_use]
    pub fn plan(config: &ScaffoldConfig) -> Self {
        let name = config.project_name.as_str();
        let root = config.project_root();
        let variant = config.variant;
        let mut steps = Vec::new();

        steps.push(
            Step::command(
                "npx",
                &["create-react-app", name],
                config.base_dir.clone(),
                format!(
                    "Failed to create React app: {name}. Please check your internet connection or npx installation."
                ),
            )
            .with_heading(format!("Creating a new React app: {name}")),
        );

        let mut install = vec!["install"];
        install.extend_from_slice(variant.runtime_dependencies());
        steps.push(
            Step::command(
                "npm",
                &install,
                root.clone(),
                format!(
                    "Failed to install {}. Please check your internet connection.",
                    join_names(variant.runtime_dependencies())
                ),
            )
            .with_heading("Installing additional dependencies..."),
        );
        steps.push(Step::command(
            "npm",
            &["install", "-D", "tailwindcss"],
            root.clone(),
            "Failed to install Tailwind CSS. Please check your internet connection.",
        ));
        steps.push(Step::command(
            "npx",
            &["tailwindcss", "init"],
            root.clone(),
            "Failed to initialize Tailwind CSS configuration. Please check your installation.",
        ));

        steps.push(Step {
            heading: Some("Creating additional folders...".to_string()),
            description: format!("create {} folders under src/", PROJECT_FOLDERS.len()),
            action: Action::CreateDirs {
                paths: PROJECT_FOLDERS.iter().map(|f| root.join(f)).collect(),
            },
            failure_message: "Failed to create project folders.".to_string(),
        });

        steps.push(
            Step::write(
                root.join("src").join("pages").join("Home.jsx"),
                templates::home_page(variant),
                "Failed to create Home.jsx.",
            )
            .with_heading("Creating Home.jsx..."),
        );
        steps.push(
            Step::write(
                root.join("src").join("index.css"),
                templates::index_css(variant),
                "Failed to update index.css.",
            )
            .with_heading("Updating index.css..."),
        );
        steps.push(
            Step::write(
                root.join("tailwind.config.js"),
                templates::TAILWIND_CONFIG.to_string(),
                "Failed to update tailwind.config.js.",
            )
            .with_heading("Updating tailwind.config.js..."),
        );
        steps.push(
            Step::write(
                root.join("src").join("App.js"),
                templates::APP_JS.to_string(),
                "Failed to create App.js.",
            )
            .with_heading("Creating App.js..."),
        );
        if variant.writes_entry_point() {
            steps.push(
                Step::write(
                    root.join("src").join("index.js"),
                    templates::ENTRY_POINT.to_string(),
                    "Failed to update index.js.",
                )
                .with_heading("Updating index.js..."),
            );
        }

        let commit_message = config.commit_message();
        steps.push(
            Step::command(
                "git",
                &["init"],
                root.clone(),
                "Failed to initialize Git repository.",
            )
            .with_heading("Initializing Git repository..."),
        );
        steps.push(Step::command(
            "git",
            &["add", "."],
            root.clone(),
            "Failed to stage files for commit.",
        ));
        steps.push(Step::command(
            "git",
            &["commit", "-m", commit_message.as_str()],
            root.clone(),
            "Failed to commit changes.",
        ));

        if let Some(url) = config.repo_url.as_deref() {
            steps.push(
                Step::command(
                    "git",
                    &["remote", "add", REMOTE_NAME, url],
                    root.clone(),
                    "Failed to add GitHub repository as remote. Please check the URL and try again.",
                )
                .with_heading(format!("Adding remote repository: {url}")),
            );
            steps.push(
                Step::command(
                    "git",
                    &["branch", "-M", MAIN_BRANCH],
                    root.clone(),
                    format!("Failed to rename branch to {MAIN_BRANCH}."),
                )
                .with_heading("Pushing to GitHub..."),
            );
            steps.push(Step::command(
                "git",
                &["push", "-u", REMOTE_NAME, MAIN_BRANCH],
                root,
                "Failed to push to GitHub. Repo not found or access denied. Please check the repository URL or your permissions.",
            ));
        }

        Self { steps }
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Execute every step in order, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the failing step's index, description and message along with
    /// the underlying failure. Steps after it are never started.
    pub fn run(&self, executor: &mut dyn CommandExecutor) -> std::result::Result<(), StepError> {
        for (index, step) in self.steps.iter().enumerate() {
            if let Some(heading) = &step.heading {
                println!("{heading}");
            }
            tracing::debug!(index, description = %step.description, "running step");

            perform(&step.action, executor).map_err(|failure| StepError {
                index,
                description: step.description.clone(),
                message: step.failure_message.clone(),
                failure,
            })?;
        }
        Ok(())
    }
}

fn perform(
    action: &Action,
    executor: &mut dyn CommandExecutor,
) -> std::result::Result<(), StepFailure> {
    match action {
        Action::Run { program, args, dir } => executor.run(program, args, dir),
        Action::CreateDirs { paths } => {
            for path in paths {
                fs::create_dir_all(path).map_err(|source| StepFailure::Io {
                    path: path.clone(),
                    source,
                })?;
            }
            Ok(())
        }
        Action::WriteFile { path, contents } => {
            fs::write(path, contents).map_err(|source| StepFailure::Io {
                path: path.clone(),
                source,
            })
        }
    }
}

/// `a`, `a and b`, `a, b and c`.
fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

/// Closing line printed after a successful run.
#[must_use]
pub fn completion_message(config: &ScaffoldConfig) -> String {
    let next = format!(
        "Navigate to the {} directory and run 'npm start' to begin.",
        config.project_name
    );
    match config.repo_url.as_deref() {
        Some(url) => format!("React app setup complete and pushed to {url}! {next}"),
        None => format!("React app setup complete without pushing to GitHub. {next}"),
    }
}

/// Check the target, run the whole plan, and return the closing message.
///
/// # Errors
/// Fails before any side effect if the project directory is already
/// populated, otherwise with the first failing step.
pub fn scaffold(config: &ScaffoldConfig, executor: &mut dyn CommandExecutor) -> Result<String> {
    config.check_target_is_free()?;
    Pipeline::plan(config).run(executor)?;
    Ok(completion_message(config))
}
