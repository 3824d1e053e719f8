use crate::error::MatrixError;
use crate::square_matrix::SquareMatrix;
use std::io::Read;

/// Build a [`SquareMatrix`] from a `YAML` list of rows.
///
/// # Errors
///
/// * [`MatrixError::YamlError`] if the input is not valid `YAML`
///   or does not describe a square matrix.
///
/// ```
/// let m = squaremat::loads("[[1, 0], [0, 1]]").unwrap();
/// assert_eq!(m, squaremat::SquareMatrix::identity(2).unwrap());
/// assert!(squaremat::loads("[[1, 0], [0]]").is_err());
/// ```
pub fn loads(yaml: &str) -> Result<SquareMatrix, MatrixError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Build a [`SquareMatrix`] from a reader of `YAML`.
///
/// # Errors
///
/// See [`loads`].
pub fn load<T: Read>(reader: T) -> Result<SquareMatrix, MatrixError> {
    Ok(serde_yaml::from_reader(reader)?)
}

/// Build a [`SquareMatrix`] from a `JSON` array of rows.
///
/// # Errors
///
/// [`MatrixError::JsonError`] if the input is not valid `JSON`
/// or does not describe a square matrix.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn loads_json(json: &str) -> Result<SquareMatrix, MatrixError> {
    Ok(serde_json::from_str(json)?)
}

/// Build a [`SquareMatrix`] from a reader of `JSON`.
///
/// # Errors
///
/// See [`loads_json`].
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn load_json<T: Read>(reader: T) -> Result<SquareMatrix, MatrixError> {
    Ok(serde_json::from_reader(reader)?)
}

impl SquareMatrix {
    /// Return a `YAML` representation of the matrix as a list of rows.
    ///
    /// # Errors
    ///
    /// Will return an error if `serde_yaml::to_string`
    /// returns an error.
    pub fn as_yaml_string(&self) -> Result<String, MatrixError> {
        match serde_yaml::to_string(self) {
            Ok(string) => Ok(string),
            Err(e) => Err(e.into()),
        }
    }

    /// Return a `JSON` representation of the matrix as an array of rows.
    ///
    /// # Errors
    ///
    /// Will return an error if `serde_json::to_string`
    /// returns an error.
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    pub fn as_json_string(&self) -> Result<String, MatrixError> {
        match serde_json::to_string(self) {
            Ok(string) => Ok(string),
            Err(e) => Err(e.into()),
        }
    }
}
