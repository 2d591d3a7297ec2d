//! # Construcción de Bloques de Headers
//! src/headers/builder.rs
//!
//! Operación inversa al parser: convierte una colección de headers en
//! un bloque de texto listo para el wire.
//!
//! ## Formato de salida
//!
//! ```text
//! Content-Type: text/html\r\n
//! Accept-Language: en-US,en\r\n
//! ```
//!
//! Los nombres se normalizan antes de serializar y el separador de
//! líneas es siempre CRLF, con CRLF final.

use super::map::HeaderMap;
use super::name::{self, NormalizeError};

/// Secuencia de nueva línea del wire format
pub const NEWLINE: &str = "\r\n";

/// Cantidad máxima de campos permitida en un bloque
pub const MAX_FIELDS: usize = 100;

/// Una entrada de header para el builder
///
/// Puede ser un par nombre/valor o una línea cruda "Nombre: Valor"
/// (que se separa en el primer ':').
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEntry {
    /// Par nombre y valor separados
    Pair(String, String),

    /// Línea completa "Nombre: Valor"
    Raw(String),
}

impl From<(&str, &str)> for HeaderEntry {
    fn from((name, value): (&str, &str)) -> Self {
        HeaderEntry::Pair(name.to_string(), value.to_string())
    }
}

impl From<(String, String)> for HeaderEntry {
    fn from((name, value): (String, String)) -> Self {
        HeaderEntry::Pair(name, value)
    }
}

impl From<&str> for HeaderEntry {
    fn from(line: &str) -> Self {
        HeaderEntry::Raw(line.to_string())
    }
}

impl From<String> for HeaderEntry {
    fn from(line: String) -> Self {
        HeaderEntry::Raw(line)
    }
}

/// Errores que pueden ocurrir al construir un bloque
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// La cantidad de entradas supera [`MAX_FIELDS`]
    TooManyFields(usize),

    /// Un nombre no pudo ser normalizado
    InvalidName(NormalizeError),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::TooManyFields(_) => write!(
                f,
                "Number of header fields exceeds the {} max number",
                MAX_FIELDS
            ),
            BuildError::InvalidName(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<NormalizeError> for BuildError {
    fn from(err: NormalizeError) -> Self {
        BuildError::InvalidName(err)
    }
}

/// Rol de builder de headers
///
/// Contraparte del trait de parsing; permite variantes alternativas
/// (por ejemplo una versión estricta según RFC) sin tocar a los
/// consumidores.
pub trait HeadersBuilder {
    /// Normaliza las entradas en una colección nombre → valor
    fn normalize(&self, entries: &[HeaderEntry]) -> Result<HeaderMap, BuildError>;

    /// Serializa las entradas al bloque de texto del wire
    fn build(&self, entries: &[HeaderEntry]) -> Result<String, BuildError>;
}

/// Builder de bloques de headers por defecto
///
/// La configuración es inmutable y se fija en la construcción: no hay
/// setters encadenados.
///
/// # Ejemplo
/// ```
/// use web_tools::headers::{BlockBuilder, HeaderEntry, HeadersBuilder};
///
/// let entries: Vec<HeaderEntry> = vec![
///     ("CONTENT_TYPE", "text/html").into(),
///     ("x-Forwarded-For", "127.0.0.1").into(),
///     "Accept-Language: en-US,en".into(),
///     "accept-encoding: gzip,deflate".into(),
/// ];
///
/// let raw = BlockBuilder::new(true).build(&entries).unwrap();
/// assert_eq!(
///     raw,
///     "Content-Type: text/html\r\nForwarded-For: 127.0.0.1\r\n\
///      Accept-Language: en-US,en\r\nAccept-Encoding: gzip,deflate\r\n"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlockBuilder {
    strip_x: bool,
}

impl BlockBuilder {
    /// Crea un builder
    ///
    /// `strip_x` indica si el prefijo experimental "X-" se elimina de
    /// los nombres al normalizar.
    pub fn new(strip_x: bool) -> Self {
        Self { strip_x }
    }

    /// Indica si el builder elimina prefijos "X-"
    pub fn strip_x(&self) -> bool {
        self.strip_x
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new(false)
    }
}

impl HeadersBuilder for BlockBuilder {
    fn normalize(&self, entries: &[HeaderEntry]) -> Result<HeaderMap, BuildError> {
        let mut headers = HeaderMap::new();
        for entry in entries {
            let (raw_name, raw_value) = match entry {
                HeaderEntry::Pair(name, value) => (name.as_str(), value.as_str()),
                HeaderEntry::Raw(line) => {
                    line.split_once(':').unwrap_or((line.as_str(), ""))
                }
            };
            let normal = name::normalize(raw_name, self.strip_x)?;
            headers.insert(normal, raw_value.trim());
        }
        Ok(headers)
    }

    fn build(&self, entries: &[HeaderEntry]) -> Result<String, BuildError> {
        if entries.len() > MAX_FIELDS {
            return Err(BuildError::TooManyFields(entries.len()));
        }

        let headers = self.normalize(entries)?;
        let mut raw = String::new();
        for (name, value) in headers.iter() {
            raw.push_str(name);
            raw.push_str(": ");
            raw.push_str(value);
            raw.push_str(NEWLINE);
        }
        Ok(raw)
    }
}
