//! # Normalización de Nombres de Headers
//! src/headers/name.rs
//!
//! Este módulo canonicaliza nombres de headers HTTP al formato
//! `Title-Case-With-Hyphens`. Por ejemplo, "CONTENT_TYPE" se convierte
//! en "Content-Type".
//!
//! Algunos headers usan capitalización no estándar ("ETag", "DNT",
//! "XSS-Protection"); para esos casos existe una tabla de excepciones
//! estática que sustituye la forma canónica por la escritura conocida.
//!
//! La normalización es idempotente: normalizar un nombre ya canónico
//! lo retorna sin cambios.

/// Headers con capitalización no estándar
///
/// Tabla de solo lectura; la búsqueda es case-insensitive y el valor
/// de la tabla reemplaza al nombre calculado.
static SPECIAL_CASES: [&str; 13] = [
    "Content-MD5",
    "TE",
    "DNT",
    "ATT-DeviceId",
    "X-ATT-DeviceId",
    "ETag",
    "P3P",
    "WWW-Authenticate",
    "XSS-Protection",
    "WebKit-CSP",
    "X-WebKit-CSP",
    "UA-Compatible",
    "X-UA-Compatible",
];

/// Errores que pueden ocurrir al normalizar un nombre
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// El nombre contiene un ':' interno o caracteres fuera de `[A-Za-z0-9 _-]`
    InvalidName(String),
}

impl std::fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeError::InvalidName(name) => write!(
                f,
                "String '{}' cannot be normalized because of bad formatting",
                name
            ),
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Normaliza un nombre de header al formato `Title-Case-With-Hyphens`
///
/// Pasos:
/// 1. Recorta espacios, tabs y ':' de los extremos
/// 2. Rechaza ':' internos y caracteres fuera de `[A-Za-z0-9 _-]`
/// 3. Reemplaza `-` y `_` por espacios, pasa a minúsculas y capitaliza
///    cada palabra
/// 4. Reemplaza los espacios por guiones
/// 5. Si `strip_x` es true y el resultado empieza con "X-", elimina el prefijo
/// 6. Aplica la tabla de excepciones
///
/// # Ejemplo
/// ```
/// use web_tools::headers::name::normalize;
///
/// assert_eq!(normalize("CONTENT_TYPE", false).unwrap(), "Content-Type");
/// assert_eq!(normalize("xss-protection", false).unwrap(), "XSS-Protection");
/// assert_eq!(normalize("x-forwarded-for", true).unwrap(), "Forwarded-For");
/// ```
pub fn normalize(name: &str, strip_x: bool) -> Result<String, NormalizeError> {
    let trimmed = name.trim_matches([' ', '\t', ':']);

    if trimmed.contains(':') || trimmed.chars().any(|c| !is_name_char(c)) {
        return Err(NormalizeError::InvalidName(trimmed.to_string()));
    }

    // "-" y "_" se tratan como separadores de palabras
    let lowered = trimmed.replace(['-', '_'], " ").to_lowercase();
    let mut normal = lowered
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("-");

    if strip_x && normal.starts_with("X-") {
        normal = normal[2..].to_string();
    }

    // Sustituir por la escritura conocida si el header es una excepción
    for special in &SPECIAL_CASES {
        if special.eq_ignore_ascii_case(&normal) {
            return Ok((*special).to_string());
        }
    }

    Ok(normal)
}

/// Normaliza una lista de nombres, preservando el orden
///
/// El primer nombre inválido aborta la operación completa.
///
/// # Ejemplo
/// ```
/// use web_tools::headers::name::normalize_all;
///
/// let names = normalize_all(&["CONTENT_TYPE", "XSS_PROTECTION"], false).unwrap();
/// assert_eq!(names, vec!["Content-Type", "XSS-Protection"]);
/// ```
pub fn normalize_all(names: &[&str], strip_x: bool) -> Result<Vec<String>, NormalizeError> {
    names.iter().map(|name| normalize(name, strip_x)).collect()
}

/// Caracteres permitidos en un nombre de header (antes de normalizar)
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '_' || c == '-'
}

/// Capitaliza la primera letra de una palabra ya en minúsculas
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic_forms() {
        // Todas estas variantes producen exactamente "Content-Type"
        for input in [
            "content-type",
            "content_type",
            "CONTENT-TYPE",
            "CONTENT_TYPE",
            "content type",
            " content-type ",
            "Content-Type: ",
        ] {
            assert_eq!(normalize(input, false).unwrap(), "Content-Type");
        }
    }

    #[test]
    fn test_normalize_idempotent() {
        let names = ["content-type", "xss-protection", "etag", "x-att-deviceid"];
        for name in names {
            let once = normalize(name, false).unwrap();
            let twice = normalize(&once, false).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_normalize_special_cases() {
        assert_eq!(normalize("xss-protection", false).unwrap(), "XSS-Protection");
        assert_eq!(normalize("XSS_PROTECTION", false).unwrap(), "XSS-Protection");
        assert_eq!(normalize("etag", false).unwrap(), "ETag");
        assert_eq!(normalize("content-md5", false).unwrap(), "Content-MD5");
        assert_eq!(normalize("dnt", false).unwrap(), "DNT");
        assert_eq!(normalize("www-authenticate", false).unwrap(), "WWW-Authenticate");
    }

    #[test]
    fn test_normalize_strip_x() {
        assert_eq!(
            normalize("x-forwarded-for", false).unwrap(),
            "X-Forwarded-For"
        );
        assert_eq!(normalize("x-forwarded-for", true).unwrap(), "Forwarded-For");
        // El prefijo nunca se agrega, solo se quita
        assert_eq!(normalize("forwarded-for", false).unwrap(), "Forwarded-For");
    }

    #[test]
    fn test_normalize_strip_x_special_case() {
        // "X-XSS-Protection" sin prefijo cae en la excepción "XSS-Protection"
        assert_eq!(
            normalize("X-XSS-Protection", true).unwrap(),
            "XSS-Protection"
        );
        assert_eq!(normalize("x-ua-compatible", true).unwrap(), "UA-Compatible");
        // Sin strip, la forma con prefijo también es una excepción conocida
        assert_eq!(
            normalize("x-ua-compatible", false).unwrap(),
            "X-UA-Compatible"
        );
    }

    #[test]
    fn test_normalize_rejects_full_header() {
        // Un header completo no es un nombre
        let result = normalize("content-type: text/html", false);
        assert!(matches!(result, Err(NormalizeError::InvalidName(_))));
    }

    #[test]
    fn test_normalize_rejects_special_characters() {
        assert!(normalize("content*type", false).is_err());
        assert!(normalize("content@type", false).is_err());
        assert!(normalize("nombre/header", false).is_err());
    }

    #[test]
    fn test_normalize_error_message() {
        let err = normalize("content*type", false).unwrap_err();
        assert!(err.to_string().contains("cannot be normalized"));
        assert!(err.to_string().contains("content*type"));
    }

    #[test]
    fn test_normalize_all_preserves_order() {
        let names = normalize_all(&["accept", "HOST", "user_agent"], false).unwrap();
        assert_eq!(names, vec!["Accept", "Host", "User-Agent"]);
    }

    #[test]
    fn test_normalize_all_fails_on_first_invalid() {
        let result = normalize_all(&["accept", "a:b:c"], false);
        assert!(result.is_err());
    }
}
