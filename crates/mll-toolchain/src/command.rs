use std::fmt;
use std::process::Command;

/// A fully resolved toolchain invocation.
///
/// Built by a backend, so the argument vector already reflects native or
/// containerized paths. Holding plain strings keeps command construction
/// inspectable in tests without spawning anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Program followed by its arguments, in invocation order.
    pub fn tokens(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    /// The equivalent `std::process` command, ready to be configured.
    pub fn to_std(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokens_keep_invocation_order() {
        let command = ToolCommand::new("opt")
            .arg("-O2")
            .args(["a.ll", "-So", "b.ll"]);
        assert_eq!(command.tokens(), vec!["opt", "-O2", "a.ll", "-So", "b.ll"]);
    }

    #[test]
    fn display_joins_with_spaces() {
        let command = ToolCommand::new("clang").args(["--version"]);
        assert_eq!(command.to_string(), "clang --version");
    }

    #[test]
    fn program_is_the_first_token() {
        let command = ToolCommand::new("lli").arg("out/llvm/add.ll");
        assert_eq!(command.program(), "lli");
        assert_eq!(command.tokens()[0], "lli");
    }
}
