use sort_visualizer::defaults::{MAX_ARRAY_SIZE, MAX_SPEED, MIN_ARRAY_SIZE, MIN_SPEED};

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Validate the speed slider value
pub fn parse_speed(input: &str) -> Result<u32, String> {
    validate_numeric_input(input, Some(MIN_SPEED), Some(MAX_SPEED), "Speed")
}

/// Validate the array size slider value
pub fn parse_size(input: &str) -> Result<usize, String> {
    validate_numeric_input(input, Some(MIN_ARRAY_SIZE), Some(MAX_ARRAY_SIZE), "Array size")
}
