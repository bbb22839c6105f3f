use crate::commands;
use crate::scanner::engine::EngineConfig;
use crate::scanner::marshal::{FlagValue, ResolvedArgs};
use crate::scanner::spec::{BIN_NAME, FlagKind, Forward, SubcommandSpec};
use clap::{Arg, ArgAction, ArgMatches, Args, Command, FromArgMatches};
use std::path::PathBuf;
use std::time::Duration;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode - only print the scanner report
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory holding the bundled scanner jars and executables
    #[arg(long, value_name = "DIR", env = "LOG4SHELL_RESOURCES_DIR", global = true)]
    pub resources_dir: Option<PathBuf>,

    /// Kill the scanner after this many seconds (0 = wait indefinitely)
    #[arg(long, value_name = "SECS", default_value = "0", global = true)]
    pub timeout: u64,
}

impl GlobalArgs {
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            resources_dir: self.resources_dir.clone(),
            timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            show_progress: !self.quiet,
        }
    }
}

/// Build the top-level command with one subcommand per descriptor.
pub fn command<'a>(specs: impl IntoIterator<Item = &'a SubcommandSpec>) -> Command {
    let root = Command::new(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Detect Log4Shell (CVE-2021-44228 / CVE-2021-45046) exposure with the bundled scanners")
        .subcommand_required(true)
        .arg_required_else_help(true);

    specs
        .into_iter()
        .fold(GlobalArgs::augment_args(root), |root, spec| {
            root.subcommand(subcommand(spec))
        })
}

fn subcommand(spec: &SubcommandSpec) -> Command {
    let mut cmd = Command::new(spec.name)
        .about(spec.about)
        .visible_aliases(spec.aliases.iter().copied());

    // Positionals take any count here; arity is checked by the engine so the
    // scanner-specific usage line is reported.
    let last = spec.args.len().saturating_sub(1);
    for (i, arg) in spec.args.iter().enumerate() {
        let mut positional = Arg::new(arg.name)
            .value_name(arg.name)
            .help(arg.description)
            .action(ArgAction::Append);
        positional = if i == last || arg.forward == Forward::SystemProperty {
            positional.num_args(0..)
        } else {
            positional.num_args(0..=1)
        };
        cmd = cmd.arg(positional);
    }

    for flag in spec.flags {
        let mut opt = Arg::new(flag.name)
            .long(flag.name)
            .help(flag.description)
            .required(flag.mandatory);
        opt = match flag.kind {
            FlagKind::Text { default } => {
                let opt = opt
                    .value_name(flag.value_name)
                    .num_args(1)
                    .action(ArgAction::Set);
                if default.is_empty() {
                    opt
                } else {
                    opt.default_value(default)
                }
            }
            FlagKind::Switch => opt.action(ArgAction::SetTrue),
        };
        cmd = cmd.arg(opt);
    }

    cmd
}

/// Extract the values of one subcommand's matches.
#[must_use]
pub fn resolve(spec: &SubcommandSpec, matches: &ArgMatches) -> ResolvedArgs {
    let mut resolved = ResolvedArgs::default();

    for arg in spec.args {
        if let Some(values) = matches.get_many::<String>(arg.name) {
            resolved.positionals.extend(values.cloned());
        }
    }

    for flag in spec.flags {
        let value = match flag.kind {
            FlagKind::Text { default } => FlagValue::Text(
                matches
                    .get_one::<String>(flag.name)
                    .cloned()
                    .unwrap_or_else(|| default.to_string()),
            ),
            FlagKind::Switch => FlagValue::Switch(matches.get_flag(flag.name)),
        };
        resolved.flags.insert(flag.name.to_string(), value);
    }

    resolved
}

/// A parsed command line: global options plus the chosen subcommand.
#[derive(Debug)]
pub struct Invocation {
    pub globals: GlobalArgs,
    pub spec: &'static SubcommandSpec,
    pub args: ResolvedArgs,
}

/// Parse `argv` against the given specs.
pub fn parse_from<I, T>(specs: &[&'static SubcommandSpec], argv: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let mut cmd = command(specs.iter().copied());
    let matches = cmd.try_get_matches_from_mut(argv)?;
    let globals = GlobalArgs::from_arg_matches(&matches)?;

    let (name, sub_matches) = matches.subcommand().ok_or_else(|| {
        cmd.error(
            clap::error::ErrorKind::MissingSubcommand,
            "a subcommand is required",
        )
    })?;
    let spec = commands::find(specs, name).ok_or_else(|| {
        cmd.error(
            clap::error::ErrorKind::InvalidSubcommand,
            format!("unknown subcommand '{}'", name),
        )
    })?;

    Ok(Invocation {
        globals,
        spec,
        args: resolve(spec, sub_matches),
    })
}
