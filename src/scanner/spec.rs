//! Static descriptors for the scanner subcommands.
//!
//! A [`SubcommandSpec`] carries everything the host needs to register a
//! subcommand and everything the engine needs to build the child command line.

use std::env::consts::EXE_SUFFIX;

/// Binary name used when rendering usage lines.
pub const BIN_NAME: &str = "log4shell-scan";

/// Default message when a scanner exits cleanly but only writes to stderr.
pub const DEFAULT_FAILURE_MESSAGE: &str = "command failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubcommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub about: &'static str,
    pub args: &'static [ArgSpec],
    pub flags: &'static [FlagSpec],
    pub target: Target,
    pub flag_style: FlagStyle,
    /// Error message for a clean exit with only stderr output.
    pub failure_message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub forward: Forward,
}

/// Where a positional value lands on the child command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forward {
    /// Exactly one value, passed verbatim after the target tokens.
    Scanner,
    /// Any number of values, each passed as `-D<value>` ahead of `-jar`.
    SystemProperty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub value_name: &'static str,
    pub kind: FlagKind,
    pub mandatory: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Text { default: &'static str },
    /// Boolean flag, false unless given.
    Switch,
}

/// How the scanner expects its flags to be spelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlagStyle {
    #[default]
    DoubleDash,
    SingleDash,
}

impl FlagStyle {
    #[must_use]
    pub fn switch(self, name: &str) -> String {
        match self {
            FlagStyle::DoubleDash => format!("--{}", name),
            FlagStyle::SingleDash => format!("-{}", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A bundled JAR run as `java [-D..] -jar <file>`.
    Jar { file: &'static str },
    /// A bundled native executable; the platform suffix is appended to `stem`.
    Native { stem: &'static str },
}

impl Target {
    /// File name of the bundled artifact inside the resources directory.
    #[must_use]
    pub fn file_name(&self) -> String {
        match self {
            Target::Jar { file } => (*file).to_string(),
            Target::Native { stem } => format!("{}{}", stem, EXE_SUFFIX),
        }
    }

    #[must_use]
    pub fn needs_runtime(&self) -> bool {
        matches!(self, Target::Jar { .. })
    }
}

impl SubcommandSpec {
    /// True if the positional count is open-ended.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.args
            .iter()
            .any(|a| a.forward == Forward::SystemProperty)
    }

    /// Number of positional values the scanner requires, if fixed.
    #[must_use]
    pub fn required_positionals(&self) -> Option<usize> {
        if self.is_variadic() {
            None
        } else {
            Some(self.args.len())
        }
    }

    /// One-line usage string returned on arity errors.
    #[must_use]
    pub fn usage(&self) -> String {
        let mut line = format!("usage: {} {}", BIN_NAME, self.name);
        for arg in self.args {
            match arg.forward {
                Forward::Scanner => line.push_str(&format!(" {}", arg.name)),
                Forward::SystemProperty => line.push_str(&format!(" [{}...]", arg.name)),
            }
        }
        for flag in self.flags {
            match flag.kind {
                FlagKind::Text { .. } if flag.mandatory => {
                    line.push_str(&format!(" --{} {}", flag.name, flag.value_name))
                }
                FlagKind::Text { .. } => {
                    line.push_str(&format!(" [--{} {}]", flag.name, flag.value_name))
                }
                FlagKind::Switch => line.push_str(&format!(" [--{}]", flag.name)),
            }
        }
        line
    }
}
