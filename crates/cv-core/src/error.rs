use thiserror::Error;

pub type CvResult<T> = Result<T, CvError>;

#[derive(Error, Debug)]
pub enum CvError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub fn ensure_finite(v: f64, what: &'static str) -> CvResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CvError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_finite_passes_normal_values() {
        assert_eq!(ensure_finite(1.5, "test").unwrap(), 1.5);
    }
}
