use crate::error::Result;
use crate::scanner::classify::{ClassifiedOutcome, classify};
use crate::scanner::locate::{
    PathLookup, ResourceDirs, ResourceLocator, SystemPath, artifact_path, find_runtime,
};
use crate::scanner::marshal::{ResolvedArgs, marshal, validate};
use crate::scanner::runner::{InvocationRequest, ProcessRunner, TokioRunner};
use crate::scanner::spec::{SubcommandSpec, Target};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the scan engine.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Explicit resources directory (skips plugin-layout discovery)
    pub resources_dir: Option<PathBuf>,
    /// Kill the scanner after this long (None = wait indefinitely)
    pub timeout: Option<Duration>,
    /// Show a spinner on stderr while the scanner runs
    pub show_progress: bool,
}

/// Runs one scanner subcommand: validate, check preconditions, marshal,
/// spawn, classify.
pub struct ScanEngine<R: ProcessRunner = TokioRunner> {
    config: EngineConfig,
    runner: R,
    lookup: Box<dyn PathLookup>,
    resources: Box<dyn ResourceLocator>,
}

impl ScanEngine<TokioRunner> {
    /// Create an engine backed by real child processes and the system `PATH`.
    pub fn new(config: EngineConfig) -> Self {
        let runner = TokioRunner::new(config.timeout);
        Self::with_runner(config, runner)
    }
}

impl<R: ProcessRunner> ScanEngine<R> {
    pub fn with_runner(config: EngineConfig, runner: R) -> Self {
        let resources = ResourceDirs::new(config.resources_dir.clone());
        Self {
            config,
            runner,
            lookup: Box::new(SystemPath),
            resources: Box::new(resources),
        }
    }

    pub fn with_path_lookup(mut self, lookup: impl PathLookup + 'static) -> Self {
        self.lookup = Box::new(lookup);
        self
    }

    pub fn with_resources(mut self, resources: impl ResourceLocator + 'static) -> Self {
        self.resources = Box::new(resources);
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Build the child invocation for a subcommand.
    ///
    /// Fails before anything is spawned on arity errors, a missing Java
    /// runtime (JAR targets only) or a missing resources directory.
    pub fn prepare(&self, spec: &SubcommandSpec, args: &ResolvedArgs) -> Result<InvocationRequest> {
        validate(spec, args)?;

        let runtime = if spec.target.needs_runtime() {
            let java = find_runtime(self.lookup.as_ref())?;
            debug!("Using Java runtime at {}", java.display());
            Some(java)
        } else {
            None
        };

        let resources = self.resources.resources_dir(spec.name)?;
        let artifact = artifact_path(&resources, &spec.target.file_name());
        let argv = marshal(spec, args, &artifact);

        let executable = match (spec.target, runtime) {
            (Target::Jar { .. }, Some(java)) => java,
            _ => artifact,
        };

        Ok(InvocationRequest::new(executable, argv))
    }

    /// Run the scanner and classify its outcome.
    ///
    /// Pre-spawn failures are returned as `Err`; everything after the spawn
    /// attempt is expressed as a [`ClassifiedOutcome`].
    pub async fn execute(
        &self,
        spec: &SubcommandSpec,
        args: &ResolvedArgs,
    ) -> Result<ClassifiedOutcome> {
        let request = self.prepare(spec, args)?;
        info!("Running {}", spec.name);
        debug!("Command line: {}", request);

        let spinner = self.config.show_progress.then(|| scan_spinner(spec.name));
        let result = self.runner.run(&request).await;
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        if let Ok(ref finished) = result {
            debug!(
                "{} exited with {:?} ({} bytes stdout, {} bytes stderr)",
                spec.name,
                finished.exit_code,
                finished.stdout.len(),
                finished.stderr.len()
            );
        }

        Ok(classify(result))
    }

    /// Run the scanner and return the raw report bytes to print.
    pub async fn run(&self, spec: &SubcommandSpec, args: &ResolvedArgs) -> Result<Vec<u8>> {
        self.execute(spec, args)
            .await?
            .into_report(spec.failure_message)
    }
}

fn scan_spinner(name: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})") {
        pb.set_style(style);
    }
    pb.set_message(format!("{} running", name));
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
