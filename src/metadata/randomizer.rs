use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Encoder/software names written by the randomizer.
pub const SOFTWARE_POOL: [&str; 4] = [
    "Adobe Premiere Pro 2024 (Windows)",
    "DaVinci Resolve 18.6",
    "Vegas Pro 21.0",
    "CapCut v11.5.0",
];

/// Days back from `now` the creation timestamp may reach.
pub const MAX_AGE_DAYS: i64 = 7;

/// `creation_time` layout: UTC, whole seconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const MAX_DRAWS: usize = 32;

/// One container metadata instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetadataDirective {
    /// Drop every tag inherited from the input (`-map_metadata -1`).
    ClearAll,
    /// Write one tag (`-metadata key=value`).
    Tag {
        /// Tag name.
        key: String,
        /// Tag value.
        value: String,
    },
}

impl MetadataDirective {
    /// ffmpeg arguments for this directive.
    pub fn to_args(&self) -> [String; 2] {
        match self {
            Self::ClearAll => ["-map_metadata".to_string(), "-1".to_string()],
            Self::Tag { key, value } => ["-metadata".to_string(), format!("{key}={value}")],
        }
    }

    fn tag(key: &str, value: impl Into<String>) -> Self {
        Self::Tag {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// Produces metadata directives for export.
///
/// The random source and the clock are injected so output is reproducible.
#[derive(Debug)]
pub struct MetadataRandomizer<'r, R: Rng> {
    rng: &'r mut R,
    now: DateTime<Utc>,
}

impl<'r, R: Rng> MetadataRandomizer<'r, R> {
    /// Randomizer drawing from `rng`, with `now` as the upper end of the date window.
    pub fn new(rng: &'r mut R, now: DateTime<Utc>) -> Self {
        Self { rng, now }
    }

    /// Directives for the clear/randomize flags.
    ///
    /// Randomizing always clears first, even when `clear` is off; with both set the
    /// clear directive appears twice.
    pub fn directives(&mut self, clear: bool, randomize: bool) -> Vec<MetadataDirective> {
        let mut out = Vec::new();
        if clear {
            out.push(MetadataDirective::ClearAll);
        }
        if randomize {
            let software = self.pick_software();
            let created = self.creation_time();
            out.push(MetadataDirective::ClearAll);
            out.push(MetadataDirective::tag("encoder", software));
            out.push(MetadataDirective::tag("software", software));
            out.push(MetadataDirective::tag(
                "creation_time",
                created.format(TIMESTAMP_FORMAT).to_string(),
            ));
        }
        out
    }

    /// One name from [`SOFTWARE_POOL`].
    pub fn pick_software(&mut self) -> &'static str {
        SOFTWARE_POOL
            .choose(&mut *self.rng)
            .copied()
            .unwrap_or(SOFTWARE_POOL[0])
    }

    /// Random time in `[now - 7 days, now]`: a random day back, then independently
    /// random hour, minute and second on that day.
    ///
    /// Candidates outside the window (a late time on the current day, or an early one
    /// seven days back) are redrawn; after a bounded number of draws `now` is used.
    pub fn creation_time(&mut self) -> DateTime<Utc> {
        let now = self.now;
        let earliest = now - Duration::days(MAX_AGE_DAYS);

        for _ in 0..MAX_DRAWS {
            let days_back = self.rng.random_range(0..=MAX_AGE_DAYS);
            let hour = self.rng.random_range(0..24);
            let minute = self.rng.random_range(0..60);
            let second = self.rng.random_range(0..60);

            let day = (now - Duration::days(days_back)).date_naive();
            let Some(time) = NaiveTime::from_hms_opt(hour, minute, second) else {
                continue;
            };
            let candidate = Utc.from_utc_datetime(&day.and_time(time));
            if candidate >= earliest && candidate <= now {
                return candidate;
            }
        }

        tracing::debug!("no in-window creation time drawn, using now");
        truncate_to_seconds(now)
    }
}

fn truncate_to_seconds(t: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_opt(t.timestamp(), 0).single().unwrap_or(t)
}

#[cfg(test)]
#[path = "../../tests/unit/metadata/randomizer.rs"]
mod tests;
