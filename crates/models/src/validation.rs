use crate::errors::ModelError;

/// Trim `value` and require at least `min` characters of what remains.
/// Returns the trimmed string so callers store the normalized form.
pub fn trimmed_min_len(value: &str, min: usize, message: &str) -> Result<String, ModelError> {
    let trimmed = value.trim();
    if trimmed.chars().count() < min {
        return Err(ModelError::validation(message));
    }
    Ok(trimmed.to_string())
}
