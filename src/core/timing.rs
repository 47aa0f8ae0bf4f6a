use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

/// In-progress wall-clock measurement, started just before a spawn.
#[derive(Debug)]
pub struct TimingStart {
    started_at: OffsetDateTime,
    instant: Instant,
}

impl TimingStart {
    #[must_use]
    pub fn begin() -> Self {
        Self {
            started_at: now_with_offset(),
            instant: Instant::now(),
        }
    }

    /// RFC 3339 rendering of the start instant.
    #[must_use]
    pub fn timestamp(&self) -> String {
        format_timestamp(self.started_at)
    }

    #[must_use]
    pub fn finish(self) -> TimingRecord {
        TimingRecord {
            started_at: self.started_at,
            duration: self.instant.elapsed(),
        }
    }
}

/// One completed (timestamp, duration) measurement for an invocation.
#[derive(Debug, Clone)]
pub struct TimingRecord {
    pub started_at: OffsetDateTime,
    pub duration: Duration,
}

impl TimingRecord {
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    /// One CSV record: `<rfc3339 start>,<fractional seconds>` plus newline.
    #[must_use]
    pub fn csv_line(&self) -> String {
        format!(
            "{},{:.6}\n",
            format_timestamp(self.started_at),
            self.duration_secs()
        )
    }

    /// Append this record to the timing log.
    ///
    /// The log is append-only and best-effort: a write failure is traced at
    /// debug level and otherwise swallowed.
    pub fn append_to(&self, log_path: &Path) {
        if let Err(e) = self.try_append(log_path) {
            debug!(path = %log_path.display(), error = %e, "failed to append timing record");
        }
    }

    fn try_append(&self, log_path: &Path) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .with_context(|| format!("failed to open {}", log_path.display()))?;
        file.write_all(self.csv_line().as_bytes())
            .with_context(|| format!("failed to write {}", log_path.display()))?;
        Ok(())
    }
}

fn now_with_offset() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn format_timestamp(t: OffsetDateTime) -> String {
    t.format(&Rfc3339).unwrap_or_else(|_| t.to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn sample_record() -> TimingRecord {
        TimingRecord {
            started_at: now_with_offset(),
            duration: Duration::from_millis(1500),
        }
    }

    #[test]
    fn csv_line_is_timestamp_comma_seconds() {
        let line = sample_record().csv_line();
        assert!(line.ends_with('\n'));
        let (stamp, secs) = line.trim_end().split_once(',').expect("comma separator");
        // RFC 3339 shape: date, 'T', time with offset.
        assert!(stamp.contains('T'), "timestamp {stamp:?}");
        assert!(stamp.contains(':'), "timestamp {stamp:?}");
        let secs: f64 = secs.parse().expect("float seconds");
        assert!((secs - 1.5).abs() < 1e-9);
    }

    #[test]
    fn append_writes_one_line_per_record() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let log = tmp.path().join("Bootstrap.log");

        sample_record().append_to(&log);
        sample_record().append_to(&log);

        let contents = fs::read_to_string(&log).expect("read log");
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn append_failure_is_swallowed() {
        let tmp = tempfile::tempdir().expect("tempdir");
        // A directory cannot be opened for appending; must not panic or error.
        sample_record().append_to(tmp.path());
        assert!(fs::read_dir(tmp.path()).expect("read dir").next().is_none());
    }
}
