//! Substitution plan built from the user-supplied names

use crate::config::{NamespaceConfig, TemplateDef};
use crate::error::{GenError, Result};

/// The three identifiers substituted into every template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    pub data: String,
    pub result: String,
    pub prepare: String,
}

impl Names {
    /// Build names from optional inputs, reporting every one that is missing or blank
    pub fn from_options(data: Option<&str>, result: Option<&str>, prepare: Option<&str>) -> Result<Self> {
        let present = |v: Option<&str>| v.filter(|s| !s.trim().is_empty()).map(str::to_string);

        let (data, result, prepare) = (present(data), present(result), present(prepare));
        let missing: Vec<&'static str> = [("data", &data), ("result", &result), ("prepare", &prepare)]
            .into_iter()
            .filter(|(_, v)| v.is_none())
            .map(|(flag, _)| flag)
            .collect();

        match (data, result, prepare) {
            (Some(data), Some(result), Some(prepare)) => Ok(Self { data, result, prepare }),
            _ => Err(GenError::Usage { missing }),
        }
    }

    /// Names in substitution order: data, result, prepare
    pub fn ordered(&self) -> [&str; 3] {
        [&self.data, &self.result, &self.prepare]
    }
}

/// Ordered token replacements plus the optional namespace rewrite for one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionPlan {
    /// (placeholder, replacement) pairs, applied front to back
    pub replacements: Vec<(String, String)>,

    /// (declaration, replacement declaration), present only with a package override
    pub namespace: Option<(String, String)>,
}

impl SubstitutionPlan {
    pub fn new(def: &TemplateDef, names: &Names, namespace: &NamespaceConfig, package: Option<&str>) -> Self {
        let replacements = def
            .placeholders
            .iter()
            .zip(names.ordered())
            .map(|(token, name)| (token.clone(), name.to_string()))
            .collect();

        let namespace = package
            .filter(|p| !p.trim().is_empty())
            .map(|p| (namespace.declaration.clone(), namespace.render(p)));

        Self { replacements, namespace }
    }
}
