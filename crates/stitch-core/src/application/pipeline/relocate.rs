use crate::{
    application::pipeline::Transformer,
    domain::{RunTimestamp, VirtualFile},
    error::StitchResult,
};

/// Moves versioned-schema files to `<dir>/<timestamp>_<basename>`.
///
/// The timestamp is borrowed from the run, so every file relocated in one run
/// gets the same prefix. Collisions with files already on disk are not
/// checked here.
#[derive(Debug, Clone)]
pub struct Relocation<'a> {
    suffix: String,
    dir: String,
    timestamp: &'a RunTimestamp,
}

impl<'a> Relocation<'a> {
    pub fn new(suffix: impl Into<String>, dir: impl Into<String>, timestamp: &'a RunTimestamp) -> Self {
        Self {
            suffix: suffix.into(),
            dir: dir.into(),
            timestamp,
        }
    }
}

impl Transformer for Relocation<'_> {
    fn name(&self) -> &'static str {
        "relocation"
    }

    fn transform(&self, file: &VirtualFile) -> StitchResult<VirtualFile> {
        if !file.has_suffix(&self.suffix) {
            return Ok(file.clone());
        }
        let base = file.path().file_name().unwrap_or_default();
        let dir = self.dir.trim_end_matches('/');
        let name = format!("{}_{base}", self.timestamp);
        let path = if dir.is_empty() {
            name
        } else {
            format!("{dir}/{name}")
        };
        Ok(file.with_path(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ts(sec: u32) -> RunTimestamp {
        RunTimestamp::at(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, sec).unwrap())
    }

    #[test]
    fn files_in_one_run_share_a_prefix() {
        let stamp = ts(0);
        let stage = Relocation::new(".fizz", "migrations", &stamp);

        let up = stage
            .transform(&VirtualFile::new("migrations/create_users.up.fizz", "up").unwrap())
            .unwrap();
        let down = stage
            .transform(&VirtualFile::new("db/create_users.down.fizz", "down").unwrap())
            .unwrap();

        assert_eq!(up.path().to_slash(), "migrations/20250601120000_create_users.up.fizz");
        assert_eq!(down.path().to_slash(), "migrations/20250601120000_create_users.down.fizz");
        assert_eq!(up.text(), Some("up"));
    }

    #[test]
    fn later_runs_sort_after_earlier_ones() {
        let file = VirtualFile::new("create_users.fizz", "").unwrap();
        let (first, second) = (ts(1), ts(2));
        let a = Relocation::new(".fizz", "migrations", &first).transform(&file).unwrap();
        let b = Relocation::new(".fizz", "migrations", &second).transform(&file).unwrap();
        assert!(a.path().to_slash() < b.path().to_slash());
    }

    #[test]
    fn other_files_pass_through() {
        let stamp = ts(0);
        let stage = Relocation::new(".fizz", "migrations", &stamp);
        let file = VirtualFile::new("models/user.go", "package models").unwrap();
        assert_eq!(stage.transform(&file).unwrap(), file);
    }
}
