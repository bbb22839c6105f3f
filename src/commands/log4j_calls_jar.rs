use crate::commands::{CLASS_REGEX, METHOD_REGEX, ROOT_FOLDER};
use crate::scanner::spec::{
    DEFAULT_FAILURE_MESSAGE, FlagKind, FlagSpec, FlagStyle, SubcommandSpec, Target,
};

pub const SPEC: SubcommandSpec = SubcommandSpec {
    name: "scan-log4j-calls-jar",
    aliases: &[],
    about: "Scan recursively for Java binary archives calling log4j2 logging methods",
    args: &[ROOT_FOLDER],
    flags: &[
        CLASS_REGEX,
        METHOD_REGEX,
        FlagSpec {
            name: "quickmatch_string",
            description: "Static pre-condition string for file analysis",
            value_name: "quickmatch",
            kind: FlagKind::Text { default: "" },
            mandatory: false,
        },
        FlagSpec {
            name: "caller_block",
            description: "Regular expression for discarding caller classes",
            value_name: "regex",
            kind: FlagKind::Text { default: "" },
            mandatory: false,
        },
        FlagSpec {
            name: "class_existence",
            description: "Ignore --method_regex and only look for classes matching --class_regex in each jar",
            value_name: "",
            kind: FlagKind::Switch,
            mandatory: false,
        },
        FlagSpec {
            name: "no_quickmatch",
            description: "Ignore --quickmatch_string and analyze every jar file",
            value_name: "",
            kind: FlagKind::Switch,
            mandatory: false,
        },
    ],
    target: Target::Native {
        stem: "scan_log4j_calls_jar",
    },
    flag_style: FlagStyle::DoubleDash,
    failure_message: DEFAULT_FAILURE_MESSAGE,
};
