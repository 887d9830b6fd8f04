use core::{fmt, num::NonZeroUsize, str::FromStr};

use crate::error::OptionsError;

/// How [`tally`](crate::tally) reduces a buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// One scan over the whole buffer on the calling thread. Ignores the
    /// worker count.
    Sequential,
    /// Split after delimiters, reduce each range on its own thread.
    #[default]
    Aligned,
    /// Split at even byte offsets, reduce each range on its own thread and
    /// stitch the records cut at each seam back together.
    Naive,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 3] = [Self::Sequential, Self::Aligned, Self::Naive];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Aligned => "aligned",
            Self::Naive => "naive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| OptionsError::UnknownStrategy(s.into()))
    }
}

/// Configuration for a single [`tally`](crate::tally) call.
///
/// The worker count is always passed explicitly; nothing is read from the
/// environment or the host's core count.
///
/// # Examples
///
/// ```rust
/// use segcost::{Strategy, TallyOptions};
///
/// let options = TallyOptions::with_workers(8)?.strategy(Strategy::Naive);
/// assert_eq!(options.workers.get(), 8);
/// # Ok::<(), segcost::OptionsError>(())
/// ```
///
/// # Default
///
/// One worker, [`Strategy::Aligned`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TallyOptions {
    /// Number of ranges the buffer is split into, one thread each.
    pub workers: NonZeroUsize,

    /// Reduction strategy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: Strategy,
}

impl Default for TallyOptions {
    fn default() -> Self {
        Self {
            workers: NonZeroUsize::MIN,
            strategy: Strategy::default(),
        }
    }
}

impl TallyOptions {
    /// Default options with `workers` ranges.
    ///
    /// # Errors
    ///
    /// [`OptionsError::ZeroWorkers`] if `workers` is zero.
    pub fn with_workers(workers: usize) -> Result<Self, OptionsError> {
        let workers = NonZeroUsize::new(workers).ok_or(OptionsError::ZeroWorkers)?;
        Ok(Self {
            workers,
            ..Self::default()
        })
    }

    /// Replace the strategy.
    #[must_use]
    pub const fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}
