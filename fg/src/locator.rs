//! Template lookup in the source directory

use log::debug;
use std::path::{Path, PathBuf};

use crate::config::TemplateDef;

/// A known template and where it was found, if anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    pub def: TemplateDef,
    pub path: Option<PathBuf>,
}

impl TemplateSpec {
    pub fn is_present(&self) -> bool {
        self.path.is_some()
    }
}

/// Resolve each known template to a file directly inside `source_dir`
///
/// A missing source directory or template is not an error; the template
/// simply resolves to absent. Table order is preserved.
pub fn locate(source_dir: &Path, templates: &[TemplateDef]) -> Vec<TemplateSpec> {
    templates
        .iter()
        .map(|def| {
            let candidate = source_dir.join(def.file_name());
            let path = candidate.is_file().then_some(candidate);
            debug!(
                "locate: name={} found={}",
                def.name,
                path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "-".to_string())
            );
            TemplateSpec { def: def.clone(), path }
        })
        .collect()
}
