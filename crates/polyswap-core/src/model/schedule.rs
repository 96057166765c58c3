use core::fmt;

/// The instants within one period that are actual throw events. Beats are
/// absolute positions in `[0, period)`, strictly increasing, and the period
/// must be a positive even integer; the translator's wraparound arithmetic
/// relies on all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    beats: Vec<usize>,
    period: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    BadPeriod(usize),
    Empty,
    BeatOutOfRange { beat: usize, period: usize },
    NotIncreasing { prev: usize, next: usize },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::BadPeriod(period) => {
                write!(f, "period must be a positive even integer, got {period}")
            }
            ScheduleError::Empty => write!(f, "beat schedule must contain at least one beat"),
            ScheduleError::BeatOutOfRange { beat, period } => {
                write!(f, "beat {beat} lies outside the period 0..{period}")
            }
            ScheduleError::NotIncreasing { prev, next } => {
                write!(f, "beats must be strictly increasing, got {prev} then {next}")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

impl Schedule {
    pub fn new(beats: Vec<usize>, period: usize) -> Result<Self, ScheduleError> {
        if period == 0 || period % 2 != 0 {
            return Err(ScheduleError::BadPeriod(period));
        }
        if beats.is_empty() {
            return Err(ScheduleError::Empty);
        }
        for pair in beats.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ScheduleError::NotIncreasing {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        if let Some(&last) = beats.last() {
            if last >= period {
                return Err(ScheduleError::BeatOutOfRange { beat: last, period });
            }
        }
        Ok(Self { beats, period })
    }

    /// The uniform schedule where every instant is a throw event.
    pub fn uniform(period: usize) -> Result<Self, ScheduleError> {
        Self::new((0..period).collect(), period)
    }

    pub fn beats(&self) -> &[usize] {
        &self.beats
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn len(&self) -> usize {
        self.beats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// Absolute position of the event at `idx`, folding back into the first
    /// period.
    pub fn position(&self, idx: usize) -> usize {
        self.beats[idx % self.beats.len()]
    }
}
