use log::{debug, warn};
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod algorithms;
pub mod pacing;
pub mod render;
pub mod session;
pub mod sorting;

pub use algorithms::{Algorithm, AlgorithmInfo};
pub use pacing::{CancelFlag, Immediate, Pacer, TimeoutPacer};
pub use session::{Session, Settings, SortJob};
pub use sorting::{animate, trace, SortOutcome};

/// Drawing surface and control limits
pub mod defaults {
    pub const CANVAS_WIDTH: u32 = 800;
    pub const CANVAS_HEIGHT: u32 = 400;
    pub const BAR_WIDTH: u32 = 8;

    pub const MIN_ARRAY_SIZE: usize = 10;
    pub const MAX_ARRAY_SIZE: usize = (CANVAS_WIDTH / BAR_WIDTH) as usize;
    pub const DEFAULT_ARRAY_SIZE: usize = 50;

    pub const MIN_SPEED: u32 = 1;
    pub const MAX_SPEED: u32 = 99;
    pub const DEFAULT_SPEED: u32 = 50;

    /// Per-step delay is this ceiling minus the speed setting.
    pub const DELAY_CEILING_MS: u32 = 100;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualizerError {
    /// A setting or the array was touched while a sort is running
    SortInProgress,
    /// Cancellation or completion was requested with no sort running
    NotSorting,
    OutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    /// Values cannot be drawn from `[0, 0)`
    EmptyRange,
    UnknownAlgorithm(String),
}

impl fmt::Display for VisualizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualizerError::SortInProgress => {
                write!(f, "A sort is in progress; wait for it to finish or stop it")
            }
            VisualizerError::NotSorting => write!(f, "No sort is running"),
            VisualizerError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{} must be between {} and {}, got {}", field, min, max, value),
            VisualizerError::EmptyRange => {
                write!(f, "Cannot generate values: the upper bound must be above zero")
            }
            VisualizerError::UnknownAlgorithm(key) => write!(
                f,
                "Unknown algorithm '{}'. Use one of: bubble, selection, insertion, merge, quick",
                key
            ),
        }
    }
}

impl std::error::Error for VisualizerError {}

/// Fill a fresh array of `len` values drawn uniformly from `[0, max_value)`.
pub fn generate_array<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    max_value: u32,
) -> Result<Vec<u32>, VisualizerError> {
    let dist = Uniform::new(0, max_value).map_err(|_| VisualizerError::EmptyRange)?;
    let values: Vec<u32> = (0..len).map(|_| dist.sample(rng)).collect();
    debug!("Generated {} values below {}", values.len(), max_value);
    Ok(values)
}

/// Return every snapshot the chosen algorithm publishes while sorting `values`.
///
/// # Arguments
/// * `values_js` - Array of non-negative integers
/// * `algorithm` - One of `bubble`, `selection`, `insertion`, `merge`, `quick`
///
/// # Returns
/// An array of arrays, one per published snapshot, or an error string
#[wasm_bindgen]
pub fn sort_snapshots(values_js: JsValue, algorithm: &str) -> Result<JsValue, JsValue> {
    let algorithm: Algorithm = algorithm.parse().map_err(|e: VisualizerError| {
        warn!("{}", e);
        JsValue::from_str(&e.to_string())
    })?;

    let values: Vec<u32> = serde_wasm_bindgen::from_value(values_js)
        .map_err(|e| JsValue::from_str(&format!("Failed to deserialize values: {}", e)))?;

    let snapshots = trace(algorithm, values);
    serde_wasm_bindgen::to_value(&snapshots)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize snapshots: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::defaults::*;
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_array_respects_length_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0, 1, MIN_ARRAY_SIZE, DEFAULT_ARRAY_SIZE, MAX_ARRAY_SIZE] {
            let values = generate_array(&mut rng, len, CANVAS_HEIGHT).unwrap();
            assert_eq!(values.len(), len);
            assert!(values.iter().all(|&v| v < CANVAS_HEIGHT));
        }
    }

    #[test]
    fn generating_with_zero_height_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_array(&mut rng, 5, 0),
            Err(VisualizerError::EmptyRange)
        );
    }

    #[test]
    fn max_array_size_follows_canvas_width() {
        assert_eq!(MAX_ARRAY_SIZE, 100);
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = VisualizerError::OutOfRange {
            field: "Speed",
            value: 150,
            min: 1,
            max: 99,
        };
        assert_eq!(err.to_string(), "Speed must be between 1 and 99, got 150");
    }
}
