use crate::error::MatrixError;

pub(crate) trait Validate {
    fn validate<F: FnOnce(String) -> MatrixError>(&self, err: F) -> Result<(), MatrixError>;
}

impl<R: AsRef<[f64]>> Validate for [R] {
    fn validate<F: FnOnce(String) -> MatrixError>(&self, err: F) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(err("matrix must not be empty".to_string()));
        }
        let n = self.len();
        match self.iter().position(|row| row.as_ref().len() != n) {
            Some(i) => {
                let msg = format!(
                    "matrix must be square: row {} has {} elements, expected {}",
                    i,
                    self[i].as_ref().len(),
                    n
                );
                Err(err(msg))
            }
            None => Ok(()),
        }
    }
}
