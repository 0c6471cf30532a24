use fluxrep::{ReportRow, SolverSession};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub base: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_dp("DP001")
    }

    /// Builds the nested `<dp>/solve/run` layout a run executes inside:
    /// the result folder lands three levels above `base`, the DP prefix is
    /// the directory two levels above.
    pub fn with_dp(dp: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let base = tmp.path().join(dp).join("solve").join("run");
        fs::create_dir_all(&base).expect("create run dir");
        Self {
            root: tmp.path().to_path_buf(),
            base,
            _tmp: tmp,
        }
    }

    pub fn result_file(&self, name: &str) -> PathBuf {
        self.root.join("result_folder").join(name)
    }
}

pub fn row(cells: &[(&str, Value)]) -> ReportRow {
    cells
        .iter()
        .map(|(k, v)| (k.to_string(), vec![v.clone()]))
        .collect()
}

/// Scripted solver session: records scripting calls in order, returns
/// canned rows, optionally fails at a chosen step.
#[derive(Default)]
pub struct StubSession {
    pub rows: Vec<ReportRow>,
    pub fail_on: Option<&'static str>,
    pub calls: Vec<String>,
}

impl StubSession {
    pub fn with_rows(rows: Vec<ReportRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn failing_at(step: &'static str) -> Self {
        Self {
            fail_on: Some(step),
            ..Self::default()
        }
    }

    fn guard(&self, name: &'static str) -> anyhow::Result<()> {
        if self.fail_on == Some(name) {
            anyhow::bail!("solver rejected {}", name);
        }
        Ok(())
    }
}

impl SolverSession for StubSession {
    fn register_flux_definition(&mut self, name: &str) -> anyhow::Result<()> {
        self.guard("register")?;
        self.calls.push(format!("register:{}", name));
        Ok(())
    }

    fn allowed_boundaries(&self, _name: &str) -> anyhow::Result<Vec<String>> {
        self.guard("allowed")?;
        Ok(["cha", "chb", "chc", "chd"]
            .iter()
            .map(|b| b.to_string())
            .collect())
    }

    fn set_boundaries(&mut self, _name: &str, boundaries: &[String]) -> anyhow::Result<()> {
        self.guard("boundaries")?;
        self.calls
            .push(format!("boundaries:{}", boundaries.join(",")));
        Ok(())
    }

    fn set_per_zone(&mut self, _name: &str, per_zone: bool) -> anyhow::Result<()> {
        self.guard("per_zone")?;
        self.calls.push(format!("per_zone:{}", per_zone));
        Ok(())
    }

    fn compute(&mut self, report_defs: &[&str]) -> anyhow::Result<Vec<ReportRow>> {
        self.guard("compute")?;
        self.calls.push(format!("compute:{}", report_defs.join(",")));
        Ok(self.rows.clone())
    }
}
