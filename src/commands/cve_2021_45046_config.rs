use crate::commands::ROOT_FOLDER;
use crate::scanner::spec::{DEFAULT_FAILURE_MESSAGE, FlagStyle, SubcommandSpec, Target};

pub const SPEC: SubcommandSpec = SubcommandSpec {
    name: "scan-cve-2021-45046-config",
    aliases: &["scan-log4j-config"],
    about: "Scan recursively for Log4j configuration files applicable to CVE-2021-45046",
    args: &[ROOT_FOLDER],
    flags: &[],
    target: Target::Jar {
        file: "scan_cve_2021_45046_config.jar",
    },
    flag_style: FlagStyle::DoubleDash,
    failure_message: DEFAULT_FAILURE_MESSAGE,
};
