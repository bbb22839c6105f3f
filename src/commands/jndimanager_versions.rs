use crate::commands::ROOT_FOLDER;
use crate::scanner::spec::{DEFAULT_FAILURE_MESSAGE, FlagStyle, SubcommandSpec, Target};

pub const SPEC: SubcommandSpec = SubcommandSpec {
    name: "scan-jndimanager-versions",
    aliases: &[],
    about: "Scan recursively for JndiManager classes from vulnerable log4j-core versions",
    args: &[ROOT_FOLDER],
    flags: &[],
    target: Target::Jar {
        file: "scan_jndimanager_versions.jar",
    },
    flag_style: FlagStyle::DoubleDash,
    failure_message: DEFAULT_FAILURE_MESSAGE,
};
