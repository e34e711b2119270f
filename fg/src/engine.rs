//! Substitution engine
//!
//! `transform` is pure text rewriting; `write` puts the result on disk so that
//! the destination either keeps its old content or holds the complete new one.

use log::{Level, debug, info, log_enabled};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

use crate::error::{GenError, Result};
use crate::plan::SubstitutionPlan;

/// Apply every replacement of `plan` to `content`
///
/// Pairs are applied in declared order as literal, global replacements. The
/// namespace rewrite, if any, runs last. Tokens that never occur are no-ops.
pub fn transform(content: &str, plan: &SubstitutionPlan) -> String {
    let mut out = content.to_string();
    for (token, replacement) in &plan.replacements {
        if token.is_empty() {
            continue;
        }
        if log_enabled!(Level::Debug) {
            debug!("transform: {} -> {} ({} hits)", token, replacement, out.matches(token.as_str()).count());
        }
        out = out.replace(token.as_str(), replacement);
    }
    if let Some((declaration, replacement)) = &plan.namespace {
        out = out.replace(declaration.as_str(), replacement);
    }
    out
}

/// Write `content` to `output_dir/base_name.extension`, replacing any existing file
///
/// The output directory must already exist. Content is staged in a temporary
/// file next to the destination and renamed over it.
pub fn write(output_dir: &Path, base_name: &str, extension: &str, content: &str) -> Result<PathBuf> {
    if !output_dir.is_dir() {
        return Err(GenError::OutputDir(output_dir.to_path_buf()));
    }
    let dest = output_dir.join(format!("{}.{}", base_name, extension));

    let mut tmp = staging_file(output_dir).map_err(|e| GenError::io(output_dir, e))?;
    tmp.write_all(content.as_bytes()).map_err(|e| GenError::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| GenError::io(tmp.path(), e))?;
    if let Some(meta) = fs::metadata(&dest).ok().filter(|m| m.is_file()) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| GenError::io(&dest, e))?;
    }

    tmp.persist(&dest).map_err(|e| GenError::Persist {
        path: dest.clone(),
        source: e.error,
    })?;
    info!("write: wrote {} bytes to {}", content.len(), dest.display());
    Ok(dest)
}

// Opened with 0o666 so the umask decides the final mode, as with File::create.
#[cfg(unix)]
fn staging_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    Builder::new()
        .prefix(".fg-")
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn staging_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().prefix(".fg-").tempfile_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plan(namespace: Option<(&str, &str)>) -> SubstitutionPlan {
        SubstitutionPlan {
            replacements: vec![
                ("_Data".to_string(), "MyData".to_string()),
                ("_Result".to_string(), "MyResult".to_string()),
                ("_PrepareInput".to_string(), "MyPrep".to_string()),
            ],
            namespace: namespace.map(|(a, b)| (a.to_string(), b.to_string())),
        }
    }

    const TEMPLATE: &str = "package goflow\n\n\
        type ICallable = func(_data *_Data) *_Result\n\
        type IPrepareFunc = func(_data *_Data, input _PrepareInput) *_Data\n";

    #[test]
    fn test_transform_replaces_every_occurrence() {
        let out = transform(TEMPLATE, &plan(None));
        assert!(!out.contains("_Data"));
        assert!(!out.contains("_Result"));
        assert!(!out.contains("_PrepareInput"));
        assert_eq!(out.matches("MyData").count(), 3);
        // lowercase parameter names are not placeholders
        assert!(out.contains("func(_data *MyData)"));
    }

    #[test]
    fn test_transform_keeps_namespace_without_override() {
        let out = transform(TEMPLATE, &plan(None));
        assert!(out.starts_with("package goflow\n"));
    }

    #[test]
    fn test_transform_rewrites_namespace() {
        let out = transform(TEMPLATE, &plan(Some(("package goflow", "package pipeline"))));
        assert!(out.starts_with("package pipeline\n"));
        assert!(!out.contains("package goflow"));
    }

    #[test]
    fn test_transform_no_tokens_is_identity() {
        let text = "package other\n\nfunc main() {}\n";
        assert_eq!(transform(text, &plan(Some(("package goflow", "package x")))), text);
    }

    #[test]
    fn test_transform_order_is_declared_order() {
        // A data name containing a later token gets that token replaced too.
        let p = SubstitutionPlan {
            replacements: vec![
                ("_Data".to_string(), "Wrap_Result".to_string()),
                ("_Result".to_string(), "Out".to_string()),
            ],
            namespace: None,
        };
        assert_eq!(transform("_Data _Result", &p), "WrapOut Out");
    }

    #[test]
    fn test_write_creates_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "go_flow", "go", "first").unwrap();
        assert_eq!(path, temp.path().join("go_flow.go"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        write(temp.path(), "go_flow", "go", "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");

        // no staging files left behind
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_missing_output_dir() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let err = write(&missing, "go_flow", "go", "x").unwrap_err();
        assert!(matches!(err, GenError::OutputDir(_)));
        assert!(!missing.exists());
    }

    #[test]
    fn test_write_failed_persist_keeps_destination() {
        let temp = TempDir::new().unwrap();
        // a non-empty directory cannot be replaced by a file, even as root
        let dest = temp.path().join("go_flow.go");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("keep.txt"), "old").unwrap();

        let err = write(temp.path(), "go_flow", "go", "new").unwrap_err();
        assert!(matches!(err, GenError::Persist { .. }));
        assert!(dest.is_dir());
        assert_eq!(fs::read_to_string(dest.join("keep.txt")).unwrap(), "old");
        // staging file is cleaned up
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_new_file_follows_umask() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let plain = temp.path().join("plain.go");
        fs::File::create(&plain).unwrap();
        let expected = fs::metadata(&plain).unwrap().permissions().mode() & 0o777;

        let path = write(temp.path(), "structure", "go", "x").unwrap();
        let mode = fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_overwrite_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("structure.go");
        fs::write(&dest, "old").unwrap();
        fs::set_permissions(&dest, fs::Permissions::from_mode(0o600)).unwrap();

        write(temp.path(), "structure", "go", "new").unwrap();
        assert_eq!(fs::metadata(&dest).unwrap().permissions().mode() & 0o777, 0o600);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }
}
