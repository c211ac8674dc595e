use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to a rendered floor plan.
pub struct Payload {
    pub params: Value,
    /// Files produced by the run; defaults to the artifact itself.
    pub outputs: Vec<PathBuf>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            outputs: Vec::new(),
        }
    }

    pub fn with_outputs(mut self, outputs: Vec<PathBuf>) -> Self {
        self.outputs = outputs;
        self
    }
}

/// Write `<artifact>.provenance.json` containing the git commit, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let outputs: Vec<String> = if payload.outputs.is_empty() {
        vec![artifact.to_string_lossy().into_owned()]
    } else {
        payload
            .outputs
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    };
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": floorplan::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "outputs": outputs
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("floorplan"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit of the running build: `GIT_COMMIT` at build or run time, else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    match Command::new("git").args(["rev-parse", "HEAD"]).output() {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).trim().to_string(),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_image_extension() {
        let base = Path::new("/tmp/output/floorplan.png");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/floorplan.provenance.json"));
    }

    #[test]
    fn write_sidecar_lists_all_outputs() {
        let dir = tempdir().unwrap();
        let png = dir.path().join("plan.png");
        let svg = dir.path().join("plan.svg");
        fs::write(&png, b"png").unwrap();
        let payload =
            Payload::new(json!({"dpi": 150.0})).with_outputs(vec![png.clone(), svg.clone()]);
        let prov_path = write_sidecar(&png, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], json!(png));
        assert_eq!(parsed["outputs"][1], json!(svg));
        assert_eq!(parsed["params"]["dpi"], 150.0);
    }

    #[test]
    fn write_sidecar_defaults_to_artifact() {
        let dir = tempdir().unwrap();
        let png = dir.path().join("a.png");
        let prov_path = write_sidecar(&png, Payload::new(json!({}))).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], json!(png));
    }
}
