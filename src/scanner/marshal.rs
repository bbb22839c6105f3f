use crate::error::{Result, ScanError};
use crate::scanner::spec::{FlagKind, Forward, SubcommandSpec};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Text(String),
    Switch(bool),
}

/// Argument and flag values resolved by the host for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedArgs {
    pub positionals: Vec<String>,
    pub flags: BTreeMap<String, FlagValue>,
}

impl ResolvedArgs {
    pub fn new<I, S>(positionals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positionals: positionals.into_iter().map(Into::into).collect(),
            flags: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.flags
            .insert(name.to_string(), FlagValue::Text(value.into()));
        self
    }

    #[must_use]
    pub fn with_switch(mut self, name: &str, on: bool) -> Self {
        self.flags.insert(name.to_string(), FlagValue::Switch(on));
        self
    }

    fn text<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        match self.flags.get(name) {
            Some(FlagValue::Text(v)) => v.as_str(),
            _ => default,
        }
    }

    fn switch(&self, name: &str) -> bool {
        matches!(self.flags.get(name), Some(FlagValue::Switch(true)))
    }
}

/// Reject the invocation if positional arity or mandatory flags don't match the descriptor.
pub fn validate(spec: &SubcommandSpec, args: &ResolvedArgs) -> Result<()> {
    if let Some(required) = spec.required_positionals()
        && args.positionals.len() != required
    {
        return Err(ScanError::Usage(spec.usage()));
    }

    for flag in spec.flags.iter().filter(|f| f.mandatory) {
        let present = match flag.kind {
            FlagKind::Text { default } => !args.text(flag.name, default).is_empty(),
            FlagKind::Switch => args.switch(flag.name),
        };
        if !present {
            return Err(ScanError::Usage(spec.usage()));
        }
    }

    Ok(())
}

/// Build the child argv.
///
/// `artifact` is the resolved JAR path for JAR targets and is ignored for
/// native targets, where the executable itself is the invocation target.
/// Flags are emitted in declaration order; empty text flags and unset
/// switches contribute nothing.
#[must_use]
pub fn marshal(spec: &SubcommandSpec, args: &ResolvedArgs, artifact: &Path) -> Vec<String> {
    let mut argv = Vec::new();

    // Scanner args are assigned in declaration order; anything left over
    // belongs to a variadic system-property arg.
    let mut values = args.positionals.iter();
    let mut properties = Vec::new();
    let mut scanner_args = Vec::new();
    for arg in spec.args {
        match arg.forward {
            Forward::Scanner => scanner_args.extend(values.next().cloned()),
            Forward::SystemProperty => {
                properties.extend(values.by_ref().map(|v| format!("-D{}", v)))
            }
        }
    }

    if spec.target.needs_runtime() {
        argv.extend(properties);
        argv.push("-jar".to_string());
        argv.push(artifact.to_string_lossy().into_owned());
    }

    argv.extend(scanner_args);

    for flag in spec.flags {
        match flag.kind {
            FlagKind::Text { default } => {
                let value = args.text(flag.name, default);
                if !value.is_empty() {
                    argv.push(spec.flag_style.switch(flag.name));
                    argv.push(value.to_string());
                }
            }
            FlagKind::Switch => {
                if args.switch(flag.name) {
                    argv.push(spec.flag_style.switch(flag.name));
                }
            }
        }
    }

    argv
}
