//! # Validación de Valores Requeridos
//! src/validate.rs
//!
//! Guarda de construcción para entidades: verifica que un mapa de
//! valores contenga todas las claves requeridas con contenido no
//! vacío. No valida semántica, solo presencia.

use std::collections::HashMap;

/// Errores de validación
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Una clave requerida está ausente o vacía
    MissingValue(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingValue(key) => {
                write!(f, "Required value '{}' is missing or empty", key)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Verifica que todas las claves requeridas existan y no estén vacías
///
/// # Ejemplo
/// ```
/// use std::collections::HashMap;
/// use web_tools::validate::validate_required;
///
/// let mut values = HashMap::new();
/// values.insert("method".to_string(), "GET".to_string());
/// values.insert("path".to_string(), "/".to_string());
///
/// assert!(validate_required(&values, &["method", "path"]).is_ok());
/// assert!(validate_required(&values, &["method", "host"]).is_err());
/// ```
pub fn validate_required(
    values: &HashMap<String, String>,
    required: &[&str],
) -> Result<(), ValidationError> {
    for key in required {
        match values.get(*key) {
            Some(value) if !value.trim().is_empty() => {}
            _ => return Err(ValidationError::MissingValue((*key).to_string())),
        }
    }
    Ok(())
}
