use crate::scanner::spec::{
    ArgSpec, DEFAULT_FAILURE_MESSAGE, FlagStyle, Forward, SubcommandSpec, Target,
};

/// Reports whether JVM-level Log4Shell mitigations are in effect for the
/// given system properties.
pub const SPEC: SubcommandSpec = SubcommandSpec {
    name: "env-verify",
    aliases: &[],
    about: "Alert on JVM-based mitigations to Log4Shell",
    args: &[ArgSpec {
        name: "VM_ARGS",
        description: "Arguments to the JVM, as passed to the original Java program",
        forward: Forward::SystemProperty,
    }],
    flags: &[],
    target: Target::Jar {
        file: "env_verify.jar",
    },
    flag_style: FlagStyle::DoubleDash,
    failure_message: DEFAULT_FAILURE_MESSAGE,
};
