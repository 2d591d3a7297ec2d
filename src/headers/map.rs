//! # Colección Ordenada de Headers
//! src/headers/map.rs
//!
//! Mapa nombre → valor que preserva el orden de inserción. Los nombres
//! se asumen ya normalizados (ver [`crate::headers::name`]).
//!
//! Internamente es un `Vec` de pares con búsqueda lineal: la cantidad
//! de headers de un mensaje HTTP es pequeña y el orden de aparición
//! importa al serializar.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Mapa ordenado de headers HTTP
///
/// Si se inserta un nombre que ya existe, el valor nuevo sobrescribe al
/// anterior pero conserva la posición original. Esta política de
/// "el último gana" replica el comportamiento histórico del parser;
/// no se hace merge de valores duplicados.
///
/// # Ejemplo
/// ```
/// use web_tools::headers::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("Host", "localhost:8888");
/// headers.insert("Accept", "*/*");
///
/// assert_eq!(headers.get("Host"), Some("localhost:8888"));
/// assert_eq!(headers.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, String)>,
}

impl HeaderMap {
    /// Crea un mapa vacío
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserta un header
    ///
    /// Si el nombre ya existe, sobrescribe el valor en su posición
    /// original (el último valor gana).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Obtiene el valor de un header por nombre exacto
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Indica si el header existe
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Cantidad de headers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Indica si el mapa está vacío
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Itera los pares (nombre, valor) en orden de inserción
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Itera los nombres en orden de inserción
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl FromIterator<(String, String)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = HeaderMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a str, &'a str);
    type IntoIter = std::vec::IntoIter<(&'a str, &'a str)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl Serialize for HeaderMap {
    /// Serializa como mapa JSON preservando el orden de inserción
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut headers = HeaderMap::new();
        headers.insert("Host", "localhost");
        headers.insert("Accept", "*/*");

        assert_eq!(headers.get("Host"), Some("localhost"));
        assert_eq!(headers.get("Accept"), Some("*/*"));
        assert_eq!(headers.get("Missing"), None);
        assert!(headers.contains("Host"));
        assert!(!headers.contains("host"));
    }

    #[test]
    fn test_order_preserved() {
        let mut headers = HeaderMap::new();
        headers.insert("Zeta", "1");
        headers.insert("Alpha", "2");
        headers.insert("Mid", "3");

        let names: Vec<&str> = headers.names().collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut headers = HeaderMap::new();
        headers.insert("Host", "first");
        headers.insert("Accept", "*/*");
        headers.insert("Host", "second");

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Host"), Some("second"));
        let names: Vec<&str> = headers.names().collect();
        assert_eq!(names, vec!["Host", "Accept"]);
    }

    #[test]
    fn test_from_iterator() {
        let headers: HeaderMap = vec![
            ("Host".to_string(), "localhost".to_string()),
            ("Accept".to_string(), "*/*".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Host"), Some("localhost"));
    }

    #[test]
    fn test_serialize_as_ordered_map() {
        let mut headers = HeaderMap::new();
        headers.insert("Zeta", "1");
        headers.insert("Alpha", "2");

        let json = serde_json::to_string(&headers).unwrap();
        assert_eq!(json, r#"{"Zeta":"1","Alpha":"2"}"#);
    }
}
