use crate::commands::ROOT_FOLDER;
use crate::scanner::spec::{
    DEFAULT_FAILURE_MESSAGE, FlagKind, FlagSpec, FlagStyle, SubcommandSpec, Target,
};

pub const SPEC: SubcommandSpec = SubcommandSpec {
    name: "scan-log4j-versions",
    aliases: &[],
    about: "Scan recursively for compiled Java files vulnerable to CVE-2021-44228",
    args: &[ROOT_FOLDER],
    flags: &[FlagSpec {
        name: "exclude",
        description: "Don't scan the specified directory",
        value_name: "folder",
        kind: FlagKind::Text { default: "" },
        mandatory: false,
    }],
    target: Target::Jar {
        file: "scan-log4j-versions.jar",
    },
    // The jar parses `-exclude`, not `--exclude`.
    flag_style: FlagStyle::SingleDash,
    failure_message: DEFAULT_FAILURE_MESSAGE,
};
