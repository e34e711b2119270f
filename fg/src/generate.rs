//! Generation run: locate, transform, write

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::engine::{transform, write};
use crate::error::{GenError, Result};
use crate::locator::locate;
use crate::plan::{Names, SubstitutionPlan};

/// Inputs for one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub names: Names,
    pub package: Option<String>,
    pub config: Config,
    /// Transform but do not write
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, names: Names, config: Config) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            names,
            package: None,
            config,
            dry_run: false,
        }
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// What happened to one known template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOutcome {
    /// Written (or, in a dry run, would be written) to `path`
    Generated { name: String, path: PathBuf },
    /// Not present in the source directory
    Skipped { name: String },
}

impl TemplateOutcome {
    pub fn name(&self) -> &str {
        match self {
            TemplateOutcome::Generated { name, .. } | TemplateOutcome::Skipped { name } => name,
        }
    }
}

/// Per-template outcomes of a run, in template table order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub outcomes: Vec<TemplateOutcome>,
}

impl GenerationReport {
    pub fn generated(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.outcomes.iter().filter_map(|o| match o {
            TemplateOutcome::Generated { name, path } => Some((name.as_str(), path.as_path())),
            TemplateOutcome::Skipped { .. } => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|o| match o {
            TemplateOutcome::Skipped { name } => Some(name.as_str()),
            TemplateOutcome::Generated { .. } => None,
        })
    }

    /// True when no template was found at all
    pub fn nothing_generated(&self) -> bool {
        self.generated().next().is_none()
    }
}

/// Generate every located template into the output directory
///
/// Missing templates are skipped. The first read or write failure stops the
/// run; files written before it stay in place.
pub fn generate(opts: &GenerateOptions) -> Result<GenerationReport> {
    opts.config.validate()?;
    debug!(
        "generate: source={} output={} dry_run={}",
        opts.source_dir.display(),
        opts.output_dir.display(),
        opts.dry_run
    );

    let mut report = GenerationReport::default();
    for spec in locate(&opts.source_dir, &opts.config.templates) {
        let Some(source) = spec.path else {
            debug!("generate: skipping {}, not in source dir", spec.def.name);
            report.outcomes.push(TemplateOutcome::Skipped { name: spec.def.name });
            continue;
        };

        let content = fs::read_to_string(&source).map_err(|e| GenError::io(&source, e))?;
        let plan = SubstitutionPlan::new(&spec.def, &opts.names, &opts.config.namespace, opts.package.as_deref());
        let output = transform(&content, &plan);

        let path = if opts.dry_run {
            if !opts.output_dir.is_dir() {
                return Err(GenError::OutputDir(opts.output_dir.clone()));
            }
            opts.output_dir.join(spec.def.file_name())
        } else {
            write(&opts.output_dir, &spec.def.name, &spec.def.extension, &output)?
        };
        info!("generate: {} -> {}", source.display(), path.display());
        report.outcomes.push(TemplateOutcome::Generated {
            name: spec.def.name,
            path,
        });
    }
    Ok(report)
}
