use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("expected 2 or 3 dimensions, got {0}")]
    DimensionCount(usize),
    #[error("dimension {axis} is {value}, must be at least 1")]
    NonPositiveDimension { axis: usize, value: i64 },
    #[error("blocks length {actual} does not match the count implied by dimensions ({expected})")]
    BlockCountMismatch { expected: i64, actual: usize },
    #[error("block {index} has id {id}, valid ids are 0..{names}")]
    BlockIdOutOfRange { index: usize, id: i64, names: usize },
}

/// Outcome of [`validate`]: `ok` plus a human-readable reason on failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub ok: bool,
    pub reason: Option<String>,
    error: Option<ValidationError>,
}

impl Validation {
    fn pass() -> Self {
        Self {
            ok: true,
            reason: None,
            error: None,
        }
    }

    fn fail(error: ValidationError) -> Self {
        Self {
            ok: false,
            reason: Some(error.to_string()),
            error: Some(error),
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            None => write!(f, "ok"),
            Some(r) => write!(f, "invalid: {r}"),
        }
    }
}

/// Checks a flat grid description. The first failing rule wins:
/// dimension count, positive dimensions, block count, id range.
pub fn validate(dimensions: &[i64], blocks: &[i64], block_names: &[String]) -> Validation {
    match check(dimensions, blocks, block_names.len()) {
        Ok(()) => Validation::pass(),
        Err(e) => Validation::fail(e),
    }
}

fn check(dimensions: &[i64], blocks: &[i64], names: usize) -> Result<(), ValidationError> {
    if !(2..=3).contains(&dimensions.len()) {
        return Err(ValidationError::DimensionCount(dimensions.len()));
    }
    if let Some((axis, &value)) = dimensions.iter().enumerate().find(|(_, d)| **d < 1) {
        return Err(ValidationError::NonPositiveDimension { axis, value });
    }
    // Overflowing products can never match a real buffer.
    let expected = dimensions
        .iter()
        .try_fold(1i64, |acc, d| acc.checked_mul(*d))
        .unwrap_or(i64::MAX);
    if expected != blocks.len() as i64 {
        return Err(ValidationError::BlockCountMismatch {
            expected,
            actual: blocks.len(),
        });
    }
    if let Some((index, &id)) = blocks
        .iter()
        .enumerate()
        .find(|(_, id)| **id < 0 || **id >= names as i64)
    {
        return Err(ValidationError::BlockIdOutOfRange { index, id, names });
    }
    Ok(())
}
