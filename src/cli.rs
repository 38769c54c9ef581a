use crate::utils::{get_config_path, get_log_path};
use anyhow::{bail, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

/// Ocean-themed sign-in and sign-up screens for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "tidepool",
    version,
    about = "Ocean-themed sign-in and sign-up screens for the terminal",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Disable all colors (NO_COLOR is honored too)
    #[arg(long, global = true)]
    pub no_colors: bool,

    /// Freeze the ocean backdrop
    #[arg(long, global = true)]
    pub no_animations: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the log file path
    Logs,
    /// Print the config file path
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate for (auto-detected when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Run the chosen subcommand. With none, the caller starts the TUI.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Logs) => Self::cmd_logs(),
            Some(Commands::Config) => Self::cmd_config(),
            Some(Commands::Completions { shell }) => Self::cmd_completions(shell),
            None => Ok(()),
        }
    }

    fn cmd_logs() -> Result<()> {
        println!("{}", get_log_path().display());
        Ok(())
    }

    fn cmd_config() -> Result<()> {
        println!("{}", get_config_path().display());
        Ok(())
    }

    fn cmd_completions(shell: Option<Shell>) -> Result<()> {
        let Some(shell) = shell.or_else(Shell::from_env) else {
            bail!("shell not recognized; pass one explicitly, e.g. `tidepool completions zsh`");
        };

        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());

        Ok(())
    }
}
