use std::{collections::HashMap, fs::File, io::{self, BufReader}, path::Path};

use thiserror::Error;

use crate::alphabet::BYTE_ALPHABET_SIZE;

pub const PROPERTIES_VERSION: u32 = 0;
pub const BIT_ORDER: &str = "msbfirst";

/// Description of an encoded stream, stored next to it as a `.properties` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Properties {
    pub version: u32,
    pub alphabet_size: usize,
    pub symbols: usize,
    pub distinct_symbols: usize,
    pub encoded_bits: usize,
    pub max_code_length: usize,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            version: PROPERTIES_VERSION,
            alphabet_size: BYTE_ALPHABET_SIZE,
            symbols: 0,
            distinct_symbols: 0,
            encoded_bits: 0,
            max_code_length: 0,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertiesError {
    #[error("property {key} has the malformed value {value:?}")]
    Malformed { key: &'static str, value: String },

    #[error("unsupported properties version {0}")]
    UnsupportedVersion(u32),

    #[error("unsupported bit order {0:?}")]
    UnsupportedBitOrder(String),
}

fn parse_field<T: std::str::FromStr>(
    value: &HashMap<String, String>,
    key: &'static str,
    default: T,
) -> Result<T, PropertiesError> {
    match value.get(key) {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| PropertiesError::Malformed { key, value: v.clone() }),
    }
}

impl TryFrom<HashMap<String, String>> for Properties {
    type Error = PropertiesError;

    /// Missing keys keep their default, so a file holding only `alphabetsize` is a valid
    /// configuration.
    fn try_from(value: HashMap<String, String>) -> Result<Self, Self::Error> {
        let defaults = Properties::default();

        let props = Properties {
            version: parse_field(&value, "version", defaults.version)?,
            alphabet_size: parse_field(&value, "alphabetsize", defaults.alphabet_size)?,
            symbols: parse_field(&value, "symbols", defaults.symbols)?,
            distinct_symbols: parse_field(&value, "distinctsymbols", defaults.distinct_symbols)?,
            encoded_bits: parse_field(&value, "encodedbits", defaults.encoded_bits)?,
            max_code_length: parse_field(&value, "maxcodelength", defaults.max_code_length)?,
        };

        if props.version != PROPERTIES_VERSION {
            return Err(PropertiesError::UnsupportedVersion(props.version));
        }

        if let Some(order) = value.get("bitorder") {
            if order.trim() != BIT_ORDER {
                return Err(PropertiesError::UnsupportedBitOrder(order.clone()));
            }
        }

        Ok(props)
    }
}

impl From<Properties> for String {
    fn from(val: Properties) -> Self {
        let mut s = String::new();

        s.push_str("#Huffman stream properties\n");
        s.push_str(&format!("version={}\n", val.version));
        s.push_str(&format!("alphabetsize={}\n", val.alphabet_size));
        s.push_str(&format!("symbols={}\n", val.symbols));
        s.push_str(&format!("distinctsymbols={}\n", val.distinct_symbols));
        s.push_str(&format!("encodedbits={}\n", val.encoded_bits));
        s.push_str(&format!("maxcodelength={}\n", val.max_code_length));
        s.push_str(&format!("bitorder={}\n", BIT_ORDER));

        s
    }
}

impl Properties {
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let map = java_properties::read(BufReader::new(file))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Properties::try_from(map).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[test]
fn test_properties_text_round_trip() {
    let props = Properties {
        alphabet_size: 128,
        symbols: 10,
        distinct_symbols: 4,
        encoded_bits: 19,
        max_code_length: 3,
        ..Default::default()
    };

    let text = String::from(props.clone());
    let map = java_properties::read(text.as_bytes()).unwrap();

    assert_eq!(map.get("bitorder").map(String::as_str), Some("msbfirst"));
    assert_eq!(Properties::try_from(map).unwrap(), props);
}

#[test]
fn test_partial_properties_use_defaults() {
    let map = HashMap::from([("alphabetsize".to_owned(), " 64 ".to_owned())]);

    let props = Properties::try_from(map).unwrap();

    assert_eq!(props.alphabet_size, 64);
    assert_eq!(props.symbols, 0);
}

#[test]
fn test_malformed_properties() {
    let map = HashMap::from([("encodedbits".to_owned(), "many".to_owned())]);

    assert_eq!(
        Properties::try_from(map),
        Err(PropertiesError::Malformed { key: "encodedbits", value: "many".to_owned() })
    );

    let map = HashMap::from([("bitorder".to_owned(), "lsbfirst".to_owned())]);
    assert_eq!(Properties::try_from(map), Err(PropertiesError::UnsupportedBitOrder("lsbfirst".to_owned())));
}
