//! Show and season model
//!
//! A [`Show`] knows how many episodes each season has and which absolute
//! episode numbers are filler. Seasons are derived from the counts by
//! numbering episodes 1, 2, 3, ... across season boundaries, and each
//! [`Season`] turns its share of the filler set into a [`FillerInstruction`].
//!
//! # Example
//! ```
//! use fillers_core::Show;
//!
//! let show = Show::from_absolute(vec![5, 3], [2, 5]);
//! let first = show.season(1).unwrap();
//! assert_eq!(first.instruction().to_string(), "2, 5");
//! ```

use std::cell::OnceCell;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

use crate::ranges::{compress, decompress, format_ranges, CompressedRange};

/// What a viewer should do with one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillerInstruction {
    /// Every episode of the season is filler
    SkipSeason,
    /// The season contains no filler
    NoFiller,
    /// Some episodes are filler; holds the formatted relative numbers
    Partial(String),
}

impl FillerInstruction {
    /// Derive the instruction for a season of `season_len` episodes whose
    /// filler episodes (relative, ascending) are `filler_episodes`.
    ///
    /// An empty season is reported as [`FillerInstruction::NoFiller`].
    pub fn for_season(season_len: usize, filler_episodes: &[u32]) -> Self {
        if season_len > 0 && filler_episodes.len() == season_len {
            FillerInstruction::SkipSeason
        } else if !filler_episodes.is_empty() {
            FillerInstruction::Partial(format_ranges(filler_episodes))
        } else {
            FillerInstruction::NoFiller
        }
    }
}

impl fmt::Display for FillerInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillerInstruction::SkipSeason => f.write_str("skip season"),
            FillerInstruction::NoFiller => f.write_str("no filler"),
            FillerInstruction::Partial(ranges) => f.write_str(ranges),
        }
    }
}

#[derive(Debug, Clone)]
struct SeasonData {
    absolute: Range<u32>,
    filler_episodes: OnceCell<Vec<u32>>,
    instruction: OnceCell<FillerInstruction>,
}

/// A TV show: episode counts per season plus its filler episodes.
#[derive(Debug, Clone)]
pub struct Show {
    season_episode_counts: Vec<u32>,
    fillers_compressed: Vec<CompressedRange>,
    seasons: OnceCell<Vec<SeasonData>>,
    fillers: OnceCell<BTreeSet<u32>>,
}

impl Show {
    /// Create a show from per-season episode counts and an already
    /// compressed filler list.
    pub fn new(season_episode_counts: Vec<u32>, fillers_compressed: Vec<CompressedRange>) -> Self {
        Self {
            season_episode_counts,
            fillers_compressed,
            seasons: OnceCell::new(),
            fillers: OnceCell::new(),
        }
    }

    /// Create a show from per-season episode counts and a flat list of
    /// absolute filler episode numbers, which are compressed on the way in.
    pub fn from_absolute<I>(season_episode_counts: Vec<u32>, absolute_fillers: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self::new(season_episode_counts, compress(absolute_fillers))
    }

    /// Episode count of each season, in season order.
    pub fn season_episode_counts(&self) -> &[u32] {
        &self.season_episode_counts
    }

    /// The filler set in compressed form.
    pub fn fillers_compressed(&self) -> &[CompressedRange] {
        &self.fillers_compressed
    }

    /// Total number of episodes across all seasons.
    pub fn total_episodes(&self) -> u32 {
        self.season_episode_counts.iter().sum()
    }

    /// Absolute episode numbers that are filler.
    pub fn fillers(&self) -> &BTreeSet<u32> {
        self.fillers.get_or_init(|| decompress(&self.fillers_compressed))
    }

    /// Swap in a new filler set, dropping everything derived from the old one.
    pub fn replace_fillers<I>(&mut self, absolute_fillers: I)
    where
        I: IntoIterator<Item = u32>,
    {
        self.fillers_compressed = compress(absolute_fillers);
        self.fillers = OnceCell::new();
        self.seasons = OnceCell::new();
    }

    /// All seasons, in order.
    pub fn seasons(&self) -> Vec<Season<'_>> {
        (0..self.season_table().len())
            .map(|index| Season { show: self, index })
            .collect()
    }

    /// Season by its 1-based number.
    pub fn season(&self, number: usize) -> Option<Season<'_>> {
        let index = number.checked_sub(1)?;
        (index < self.season_table().len()).then_some(Season { show: self, index })
    }

    fn season_table(&self) -> &[SeasonData] {
        self.seasons.get_or_init(|| {
            season_ranges(&self.season_episode_counts)
                .into_iter()
                .map(|absolute| SeasonData {
                    absolute,
                    filler_episodes: OnceCell::new(),
                    instruction: OnceCell::new(),
                })
                .collect()
        })
    }
}

/// Absolute episode range of each season: seasons are laid end to end
/// starting at episode 1.
fn season_ranges(counts: &[u32]) -> Vec<Range<u32>> {
    let mut start = 1;
    counts
        .iter()
        .map(|&count| {
            let range = start..start + count;
            start += count;
            range
        })
        .collect()
}

/// One season of a [`Show`]; a lightweight handle borrowing its show.
#[derive(Debug, Clone, Copy)]
pub struct Season<'a> {
    show: &'a Show,
    index: usize,
}

impl<'a> Season<'a> {
    fn data(&self) -> &'a SeasonData {
        &self.show.season_table()[self.index]
    }

    /// 1-based season number.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Number of episodes in this season.
    pub fn len(&self) -> usize {
        self.data().absolute.len()
    }

    /// Whether the season has no episodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Relative episode numbers `1..=len`.
    pub fn episodes(&self) -> Vec<u32> {
        (1..=self.data().absolute.len() as u32).collect()
    }

    /// Absolute episode numbers owned by this season, in order.
    pub fn absolute_episodes(&self) -> Vec<u32> {
        self.data().absolute.clone().collect()
    }

    /// Relative numbers of the filler episodes in this season, ascending.
    pub fn filler_episodes(&self) -> &'a [u32] {
        let data = self.data();
        let fillers = self.show.fillers();
        data.filler_episodes.get_or_init(|| {
            data.absolute
                .clone()
                .zip(1..)
                .filter(|(absolute, _)| fillers.contains(absolute))
                .map(|(_, relative)| relative)
                .collect()
        })
    }

    /// What to do with this season.
    pub fn instruction(&self) -> &'a FillerInstruction {
        let data = self.data();
        data.instruction
            .get_or_init(|| FillerInstruction::for_season(self.len(), self.filler_episodes()))
    }
}
