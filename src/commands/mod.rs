//! Built-in scanner subcommands.

pub mod cve_2021_45046_config;
pub mod env_verify;
pub mod jndimanager_versions;
pub mod log4j_calls_jar;
pub mod log4j_calls_src;
pub mod log4j_versions;

use crate::scanner::spec::{ArgSpec, FlagKind, FlagSpec, Forward, SubcommandSpec};

pub const ROOT_FOLDER: ArgSpec = ArgSpec {
    name: "root-folder",
    description: "Directory to start the recursive scan from",
    forward: Forward::Scanner,
};

pub const CLASS_REGEX: FlagSpec = FlagSpec {
    name: "class_regex",
    description: "Regular expression for required class name",
    value_name: "regex",
    kind: FlagKind::Text { default: "" },
    mandatory: false,
};

pub const METHOD_REGEX: FlagSpec = FlagSpec {
    name: "method_regex",
    description: "Regular expression for required method name",
    value_name: "regex",
    kind: FlagKind::Text { default: "" },
    mandatory: false,
};

/// Every subcommand the binary registers, in help order.
pub static BUILTIN: [&SubcommandSpec; 6] = [
    &env_verify::SPEC,
    &cve_2021_45046_config::SPEC,
    &log4j_calls_jar::SPEC,
    &log4j_calls_src::SPEC,
    &log4j_versions::SPEC,
    &jndimanager_versions::SPEC,
];

/// Look a subcommand up by name or alias in `specs`.
#[must_use]
pub fn find(specs: &[&'static SubcommandSpec], name: &str) -> Option<&'static SubcommandSpec> {
    specs
        .iter()
        .copied()
        .find(|spec| spec.name == name || spec.aliases.contains(&name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::marshal::{ResolvedArgs, marshal, validate};
    use crate::scanner::spec::Target;
    use std::collections::HashSet;
    use std::path::Path;

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for spec in BUILTIN {
            assert!(seen.insert(spec.name), "duplicate name {}", spec.name);
            for alias in spec.aliases {
                assert!(seen.insert(*alias), "duplicate alias {}", alias);
            }
        }
    }

    #[test]
    fn test_flag_names_unique_within_spec() {
        for spec in BUILTIN {
            let names: HashSet<_> = spec.flags.iter().map(|f| f.name).collect();
            assert_eq!(names.len(), spec.flags.len(), "{}", spec.name);
        }
    }

    #[test]
    fn test_find_by_alias() {
        let spec = find(&BUILTIN, "scan-log4j-config").unwrap();
        assert_eq!(spec.name, "scan-cve-2021-45046-config");
        assert!(find(&BUILTIN, "scan-everything").is_none());
    }

    #[test]
    fn test_env_verify_argv() {
        let args = ResolvedArgs::new(["log4j2.formatMsgNoLookups=True"]);
        let argv = marshal(&env_verify::SPEC, &args, Path::new("res/env_verify.jar"));
        assert_eq!(
            argv,
            vec!["-Dlog4j2.formatMsgNoLookups=True", "-jar", "res/env_verify.jar"]
        );
    }

    #[test]
    fn test_versions_argv_without_exclude() {
        let args = ResolvedArgs::new(["test_resources"]).with_text("exclude", "");
        let argv = marshal(&log4j_versions::SPEC, &args, Path::new("r.jar"));
        assert_eq!(argv, vec!["-jar", "r.jar", "test_resources"]);
    }

    #[test]
    fn test_versions_argv_with_exclude() {
        let args = ResolvedArgs::new(["test_resources"]).with_text("exclude", "vendor");
        let argv = marshal(&log4j_versions::SPEC, &args, Path::new("r.jar"));
        assert_eq!(
            argv,
            vec!["-jar", "r.jar", "test_resources", "-exclude", "vendor"]
        );
    }

    #[test]
    fn test_calls_jar_full_argv() {
        let args = ResolvedArgs::new(["apps"])
            .with_switch("no_quickmatch", true)
            .with_switch("class_existence", true)
            .with_text("caller_block", "org\\.apache\\..*")
            .with_text("quickmatch_string", "log4j")
            .with_text("method_regex", "(info|error)")
            .with_text("class_regex", "Logger");
        let argv = marshal(&log4j_calls_jar::SPEC, &args, Path::new("ignored"));
        assert_eq!(
            argv,
            vec![
                "apps",
                "--class_regex",
                "Logger",
                "--method_regex",
                "(info|error)",
                "--quickmatch_string",
                "log4j",
                "--caller_block",
                "org\\.apache\\..*",
                "--class_existence",
                "--no_quickmatch",
            ]
        );
    }

    #[test]
    fn test_calls_src_argv() {
        let args = ResolvedArgs::new(["src"]).with_text("method_regex", "warn");
        let argv = marshal(&log4j_calls_src::SPEC, &args, Path::new("ignored"));
        assert_eq!(argv, vec!["src", "--method_regex", "warn"]);
    }

    #[test]
    fn test_root_folder_subcommands_require_exactly_one() {
        for spec in BUILTIN.iter().filter(|s| s.name != "env-verify") {
            assert!(validate(spec, &ResolvedArgs::default()).is_err(), "{}", spec.name);
            assert!(validate(spec, &ResolvedArgs::new(["a", "b"])).is_err(), "{}", spec.name);
            assert!(validate(spec, &ResolvedArgs::new(["a"])).is_ok(), "{}", spec.name);
        }
    }

    #[test]
    fn test_targets() {
        assert!(matches!(env_verify::SPEC.target, Target::Jar { .. }));
        assert!(matches!(log4j_calls_jar::SPEC.target, Target::Native { .. }));
        assert!(matches!(log4j_calls_src::SPEC.target, Target::Native { .. }));
        assert_eq!(
            log4j_calls_src::SPEC.failure_message,
            "no log4j2 logging calls were found"
        );
    }
}
