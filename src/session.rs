//! Controller state for one visualizer session.
//!
//! Holds the user's settings, the array currently on screen and the
//! in-progress and stop flags. Every mutation is rejected while a sort is
//! running, so settings read by `begin_sort` cannot change underneath it.

use crate::algorithms::Algorithm;
use crate::defaults::*;
use crate::pacing::CancelFlag;
use crate::sorting::SortOutcome;
use crate::{generate_array, VisualizerError};
use log::{debug, info};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub algorithm: Algorithm,
    pub speed: u32,
    pub size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            speed: DEFAULT_SPEED,
            size: DEFAULT_ARRAY_SIZE,
        }
    }
}

impl Settings {
    /// Higher speed means a shorter pause.
    pub fn delay_ms(&self) -> u32 {
        DELAY_CEILING_MS.saturating_sub(self.speed)
    }
}

/// Everything a sort run needs, captured when the user presses start.
#[derive(Debug, Clone)]
pub struct SortJob {
    pub algorithm: Algorithm,
    pub values: Vec<u32>,
    pub delay_ms: u32,
    pub cancel: CancelFlag,
}

#[derive(Debug)]
pub struct Session {
    settings: Settings,
    values: Vec<u32>,
    sorting: bool,
    cancel: CancelFlag,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let settings = Settings::default();
        // Only fails for a zero canvas height.
        let values = generate_array(rng, settings.size, CANVAS_HEIGHT).unwrap_or_default();
        Self {
            settings,
            values,
            sorting: false,
            cancel: CancelFlag::new(),
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn is_sorting(&self) -> bool {
        self.sorting
    }

    fn ensure_idle(&self) -> Result<(), VisualizerError> {
        if self.sorting {
            Err(VisualizerError::SortInProgress)
        } else {
            Ok(())
        }
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<(), VisualizerError> {
        self.ensure_idle()?;
        self.settings.algorithm = algorithm;
        Ok(())
    }

    pub fn set_speed(&mut self, speed: u32) -> Result<(), VisualizerError> {
        self.ensure_idle()?;
        check_range("Speed", speed as usize, MIN_SPEED as usize, MAX_SPEED as usize)?;
        self.settings.speed = speed;
        Ok(())
    }

    /// Change the array length and draw a fresh array of that length.
    pub fn set_size<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        rng: &mut R,
    ) -> Result<(), VisualizerError> {
        self.ensure_idle()?;
        check_range("Array size", size, MIN_ARRAY_SIZE, MAX_ARRAY_SIZE)?;
        self.settings.size = size;
        self.regenerate(rng)
    }

    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), VisualizerError> {
        self.ensure_idle()?;
        self.values = generate_array(rng, self.settings.size, CANVAS_HEIGHT)?;
        debug!("Regenerated array of {} values", self.values.len());
        Ok(())
    }

    /// Mark the session busy and hand out a copy of the array to sort.
    pub fn begin_sort(&mut self) -> Result<SortJob, VisualizerError> {
        self.ensure_idle()?;
        self.cancel.reset();
        self.sorting = true;
        info!(
            "Starting {} on {} values ({} ms per step)",
            self.settings.algorithm,
            self.values.len(),
            self.settings.delay_ms()
        );
        Ok(SortJob {
            algorithm: self.settings.algorithm,
            values: self.values.clone(),
            delay_ms: self.settings.delay_ms(),
            cancel: self.cancel.clone(),
        })
    }

    /// Replace the on-screen array with an intermediate snapshot.
    pub fn publish(&mut self, snapshot: &[u32]) {
        self.values.clear();
        self.values.extend_from_slice(snapshot);
    }

    pub fn finish_sort(&mut self, outcome: SortOutcome<u32>) -> Result<(), VisualizerError> {
        if !self.sorting {
            return Err(VisualizerError::NotSorting);
        }
        if outcome.cancelled {
            info!("{} stopped early", self.settings.algorithm);
        } else {
            info!("{} finished", self.settings.algorithm);
        }
        self.values = outcome.values;
        self.sorting = false;
        Ok(())
    }

    /// Ask the running sort to stop at its next step. Returns false when idle.
    pub fn request_cancel(&self) -> bool {
        if !self.sorting {
            return false;
        }
        info!("Stop requested for {}", self.settings.algorithm);
        self.cancel.cancel();
        true
    }
}

fn check_range(
    field: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), VisualizerError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(VisualizerError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacing::Immediate;
    use crate::sorting::animate;
    use futures::executor::block_on;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> (Session, StdRng) {
        let mut rng = StdRng::seed_from_u64(11);
        let session = Session::new(&mut rng);
        (session, rng)
    }

    #[test]
    fn new_session_uses_defaults() {
        let (session, _) = session();
        assert_eq!(session.settings(), Settings::default());
        assert_eq!(session.values().len(), DEFAULT_ARRAY_SIZE);
        assert!(session.values().iter().all(|&v| v < CANVAS_HEIGHT));
        assert!(!session.is_sorting());
    }

    #[test]
    fn delay_is_ceiling_minus_speed() {
        let mut settings = Settings::default();
        assert_eq!(settings.delay_ms(), 50);
        settings.speed = MAX_SPEED;
        assert_eq!(settings.delay_ms(), 1);
        settings.speed = MIN_SPEED;
        assert_eq!(settings.delay_ms(), 99);
    }

    #[test]
    fn resizing_while_idle_regenerates() {
        let (mut session, mut rng) = session();
        session.set_size(MAX_ARRAY_SIZE, &mut rng).unwrap();
        assert_eq!(session.values().len(), MAX_ARRAY_SIZE);
        assert_eq!(session.settings().size, MAX_ARRAY_SIZE);

        session.set_size(MIN_ARRAY_SIZE, &mut rng).unwrap();
        assert_eq!(session.values().len(), MIN_ARRAY_SIZE);
    }

    #[test]
    fn out_of_range_settings_are_rejected() {
        let (mut session, mut rng) = session();
        assert_eq!(
            session.set_size(MAX_ARRAY_SIZE + 1, &mut rng),
            Err(VisualizerError::OutOfRange {
                field: "Array size",
                value: 101,
                min: 10,
                max: 100,
            })
        );
        assert!(session.set_speed(0).is_err());
        assert!(session.set_speed(100).is_err());
        assert_eq!(session.settings(), Settings::default());
    }

    #[test]
    fn settings_are_frozen_during_a_sort() {
        let (mut session, mut rng) = session();
        let before = session.values().to_vec();
        session.begin_sort().unwrap();

        assert_eq!(session.set_size(20, &mut rng), Err(VisualizerError::SortInProgress));
        assert_eq!(session.set_speed(10), Err(VisualizerError::SortInProgress));
        assert_eq!(
            session.set_algorithm(Algorithm::Quick),
            Err(VisualizerError::SortInProgress)
        );
        assert_eq!(session.regenerate(&mut rng), Err(VisualizerError::SortInProgress));
        assert!(matches!(session.begin_sort(), Err(VisualizerError::SortInProgress)));

        assert_eq!(session.values(), &before[..]);
        assert_eq!(session.settings(), Settings::default());
    }

    #[test]
    fn job_captures_settings_at_start() {
        let (mut session, _) = session();
        session.set_algorithm(Algorithm::Merge).unwrap();
        session.set_speed(90).unwrap();
        let job = session.begin_sort().unwrap();

        assert_eq!(job.algorithm, Algorithm::Merge);
        assert_eq!(job.delay_ms, 10);
        assert_eq!(job.values, session.values());
        assert!(!job.cancel.is_cancelled());
    }

    #[test]
    fn full_run_publishes_and_finishes_sorted() {
        let (mut session, _) = session();
        session.set_algorithm(Algorithm::Quick).unwrap();
        let job = session.begin_sort().unwrap();

        let outcome = block_on(animate(
            job.algorithm,
            job.values,
            job.delay_ms,
            &Immediate,
            &job.cancel,
            |snapshot: &[u32]| session.publish(snapshot),
        ));
        session.finish_sort(outcome).unwrap();

        assert!(!session.is_sorting());
        assert!(session.values().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn cancel_reaches_the_running_job() {
        let (mut session, _) = session();
        assert!(!session.request_cancel());

        let job = session.begin_sort().unwrap();
        assert!(session.request_cancel());
        assert!(job.cancel.is_cancelled());

        let outcome = block_on(animate(
            job.algorithm,
            job.values.clone(),
            job.delay_ms,
            &Immediate,
            &job.cancel,
            |_: &[u32]| {},
        ));
        assert!(outcome.cancelled);
        session.finish_sort(outcome).unwrap();

        // The next run starts with a cleared flag.
        let next = session.begin_sort().unwrap();
        assert!(!next.cancel.is_cancelled());
    }

    #[test]
    fn finishing_without_a_sort_is_an_error() {
        let (mut session, _) = session();
        let outcome = SortOutcome {
            values: vec![1, 2],
            cancelled: false,
        };
        assert_eq!(session.finish_sort(outcome), Err(VisualizerError::NotSorting));
        assert_eq!(session.values().len(), DEFAULT_ARRAY_SIZE);
    }
}
