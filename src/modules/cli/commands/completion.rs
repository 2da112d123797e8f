//! Shell completion scripts for the `dbmigrate` binary

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Completion command arguments
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Shell to generate completions for (e.g. bash, zsh)
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionCommand {
    /// Write the completion script to stdout
    pub fn execute(&self) {
        self.write_to(&mut io::stdout());
    }

    /// Write the completion script for the full command tree to `out`
    pub fn write_to(&self, out: &mut dyn Write) {
        let mut cmd = crate::Cli::command();
        let bin_name = cmd.get_name().to_string();
        generate(self.shell, &mut cmd, bin_name, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_completion_parses_shell() {
        let cli = Cli::try_parse_from(["dbmigrate", "completion", "bash"]).unwrap();
        match cli.command {
            Commands::Completion(cmd) => assert_eq!(cmd.shell, Shell::Bash),
            other => panic!("expected completion command, got {:?}", other),
        }
    }

    #[test]
    fn test_completion_covers_commands_and_global_flags() {
        let cmd = CompletionCommand { shell: Shell::Bash };
        let mut out = Vec::new();
        cmd.write_to(&mut out);

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("dbmigrate"));
        for word in ["show", "envs", "init", "--path", "--env"] {
            assert!(script.contains(word), "missing {}", word);
        }
    }
}
