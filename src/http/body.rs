//! # Decodificación de Bodies de Request
//! src/http/body.rs
//!
//! Decodifica el body de un request POST según su `Content-Type`:
//!
//! - `application/x-www-form-urlencoded`: pares `key=value` unidos por
//!   `&`, con percent-encoding
//! - `multipart/form-data`: segmentos delimitados por `--boundary`,
//!   donde cada segmento aporta un parámetro o un archivo subido
//!
//! ## Formato multipart
//!
//! ```text
//! ------WebKitFormBoundaryX\r\n
//! Content-Disposition: form-data; name="campo"\r\n
//! \r\n
//! valor\r\n
//! ------WebKitFormBoundaryX--\r\n
//! ```
//!
//! Los segmentos de los que no se puede extraer un nombre se descartan
//! en silencio: es una política tolerante heredada, preferible a
//! rechazar un request completo por un campo malformado.

use crate::headers::parser::split_double_break;
use serde::Serialize;
use std::collections::HashMap;

/// Marcador de disposición que identifica a un segmento como archivo
const OCTET_STREAM: &str = "application/octet-stream";

/// Resultado de decodificar un body de formulario
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    /// Parámetros de texto del formulario
    pub params: HashMap<String, String>,

    /// Archivos subidos, por nombre de campo
    pub files: HashMap<String, Vec<u8>>,
}

/// Decodifica un body según el valor de `Content-Type`
///
/// Body vacío o `Content-Type` ausente producen mapas vacíos. Si el
/// content type anuncia un `boundary=` se interpreta como multipart;
/// si no, como URL-encoded.
///
/// # Ejemplo
/// ```
/// use web_tools::http::body;
///
/// let form = body::decode("name=Sean&job=programmer", Some("application/x-www-form-urlencoded"));
/// assert_eq!(form.params.get("name"), Some(&"Sean".to_string()));
/// assert_eq!(form.params.get("job"), Some(&"programmer".to_string()));
/// assert!(form.files.is_empty());
/// ```
pub fn decode(body: &str, content_type: Option<&str>) -> FormData {
    let mut form = FormData::default();

    let content_type = match content_type {
        Some(ct) if !body.is_empty() && !ct.is_empty() => ct,
        _ => return form,
    };

    match boundary_of(content_type) {
        Some(boundary) => decode_multipart(body, boundary, &mut form),
        None => decode_urlencoded(body, &mut form.params),
    }
    form
}

/// Extrae el boundary anunciado en un `Content-Type`, si existe
///
/// El boundary es todo lo que sigue a "boundary=".
fn boundary_of(content_type: &str) -> Option<&str> {
    content_type
        .find("boundary=")
        .map(|pos| &content_type[pos + "boundary=".len()..])
}

/// Decodifica un body URL-encoded
///
/// El body completo se percent-decodifica primero y recién después se
/// separa en pares `&`/`=`. Ese orden replica el comportamiento
/// heredado y se mantiene a propósito.
fn decode_urlencoded(body: &str, params: &mut HashMap<String, String>) {
    let decoded = percent_decode(body);
    for pair in decoded.split('&') {
        if pair.is_empty() {
            continue;
        }
        match pair.split_once('=') {
            Some((key, value)) => params.insert(key.to_string(), value.to_string()),
            // Parámetro sin valor (ej: "debug")
            None => params.insert(pair.to_string(), String::new()),
        };
    }
}

/// Decodifica una query string en pares clave/valor
///
/// A diferencia del body URL-encoded, aquí cada clave y cada valor se
/// decodifican por separado después de la división.
pub(crate) fn decode_query(query: &str, params: &mut HashMap<String, String>) {
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        match pair.split_once('=') {
            Some((key, value)) => {
                params.insert(percent_decode(key), percent_decode(value))
            }
            None => params.insert(percent_decode(pair), String::new()),
        };
    }
}

/// Decodifica un body multipart delimitado por `--boundary`
fn decode_multipart(body: &str, boundary: &str, form: &mut FormData) {
    let mut blocks = split_on_boundary(body, boundary);
    // El último segmento es el cierre ("--" tras el boundary final)
    blocks.pop();

    for block in blocks {
        if block.is_empty() {
            continue;
        }
        if block.contains(OCTET_STREAM) {
            if let Some((name, content)) = extract_file(block) {
                form.files.insert(name.to_string(), content.as_bytes().to_vec());
            }
        } else if let Some((name, content)) = extract_param(block) {
            form.params.insert(name.to_string(), content.to_string());
        }
        // Segmento sin nombre extraíble: se descarta en silencio
    }
}

/// Divide el body en los delimitadores `-+boundary`
///
/// El delimitador es el boundary precedido por uno o más guiones; los
/// guiones consecutivos previos forman parte del delimitador.
fn split_on_boundary<'a>(body: &'a str, boundary: &str) -> Vec<&'a str> {
    if boundary.is_empty() {
        return vec![body];
    }

    let mut parts = Vec::new();
    let mut start = 0;
    let mut search = 0;

    while let Some(found) = body[search..].find(boundary) {
        let pos = search + found;
        let hyphens = body[start..pos]
            .bytes()
            .rev()
            .take_while(|&b| b == b'-')
            .count();
        if hyphens > 0 {
            parts.push(&body[start..pos - hyphens]);
            start = pos + boundary.len();
        }
        search = pos + boundary.len();
    }
    parts.push(&body[start..]);
    parts
}

/// Extrae el valor del atributo `name="..."` de un segmento
fn extract_name(block: &str) -> Option<&str> {
    let marker = "name=\"";
    let start = block.find(marker)? + marker.len();
    let end = block[start..].find('"')? + start;
    Some(&block[start..end])
}

/// Extrae (nombre, contenido) de un segmento de parámetro
///
/// El contenido es lo que sigue a la línea en blanco que separa la
/// mini-cabecera de disposición del valor. Segmentos sin separador se
/// descartan.
fn extract_param(block: &str) -> Option<(&str, &str)> {
    let name = extract_name(block)?;
    let (_, content) = split_double_break(block)?;
    Some((name, trim_trailing_break(content)))
}

/// Extrae (nombre, contenido) de un segmento de archivo
///
/// El contenido es lo que sigue al marcador octet-stream y sus saltos
/// de línea.
fn extract_file(block: &str) -> Option<(&str, &str)> {
    let name = extract_name(block)?;
    let pos = block.rfind(OCTET_STREAM)?;
    let rest = &block[pos + OCTET_STREAM.len()..];
    let content = rest.trim_start_matches(['\r', '\n']);
    if content.len() == rest.len() {
        // Sin salto de línea tras el marcador no hay contenido
        return None;
    }
    Some((name, trim_trailing_break(content)))
}

/// Recorta el salto de línea final que pertenece al delimitador siguiente
fn trim_trailing_break(content: &str) -> &str {
    let content = content.strip_suffix('\n').unwrap_or(content);
    content.strip_suffix('\r').unwrap_or(content)
}

/// Decodifica una cadena percent-encoded
///
/// `+` se convierte en espacio y las secuencias `%XX` en su byte.
/// Los escapes inválidos se dejan pasar tal cual.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                (Some(high), Some(low)) => {
                    out.push(high << 4 | low);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Valor numérico de un dígito hexadecimal
fn hex_val(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
