use crate::commands::{CLASS_REGEX, METHOD_REGEX, ROOT_FOLDER};
use crate::scanner::spec::{FlagStyle, SubcommandSpec, Target};

pub const SPEC: SubcommandSpec = SubcommandSpec {
    name: "scan-log4j-calls-src",
    aliases: &[],
    about: "Scan recursively for Java source files calling log4j2 logging methods",
    args: &[ROOT_FOLDER],
    flags: &[CLASS_REGEX, METHOD_REGEX],
    target: Target::Native {
        stem: "scan_log4j_calls_src",
    },
    flag_style: FlagStyle::DoubleDash,
    // This scanner writes to stderr only when it found nothing to report.
    failure_message: "no log4j2 logging calls were found",
};
