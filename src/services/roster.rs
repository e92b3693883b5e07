use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Outcome of a roster import: one headcount per grade (in grade-list
/// order) and a fingerprint of the source for the session record.
pub struct RosterImport {
    pub headcounts: Vec<u32>,
    pub fingerprint: String,
}

/// Swappable roster collaborator. Real spreadsheet parsing is out of scope;
/// implementations only need to produce per-grade headcounts.
pub trait RosterSource {
    fn import(&self, grade_count: usize) -> anyhow::Result<RosterImport>;
}

/// Mock parser over a roster file: headcounts (1..=10 per grade) are derived
/// from the SHA-256 of the file bytes, so the same file always yields the
/// same counts.
pub struct FileRoster {
    path: PathBuf,
}

impl FileRoster {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl RosterSource for FileRoster {
    fn import(&self, grade_count: usize) -> anyhow::Result<RosterImport> {
        let bytes = std::fs::read(&self.path).map_err(|e| {
            anyhow::anyhow!("failed to read roster file {}: {}", self.path.display(), e)
        })?;
        let digest = Sha256::digest(&bytes);
        let headcounts = (0..grade_count)
            .map(|i| u32::from(digest[i % digest.len()] % 10) + 1)
            .collect();
        Ok(RosterImport {
            headcounts,
            fingerprint: hex::encode(digest),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FileRoster, RosterSource};

    #[test]
    fn same_file_yields_same_headcounts_and_fingerprint() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("roster.csv");
        std::fs::write(&path, "employee_id,grade\n1,A\n2,B\n").expect("write fixture");

        let roster = FileRoster::new(&path);
        let a = roster.import(5).expect("first import");
        let b = roster.import(5).expect("second import");

        assert_eq!(a.headcounts, b.headcounts);
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_eq!(a.headcounts.len(), 5);
        assert!(a.headcounts.iter().all(|&c| (1..=10).contains(&c)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let roster = FileRoster::new(std::path::Path::new("/nonexistent/roster.csv"));
        assert!(roster.import(5).is_err());
    }
}
