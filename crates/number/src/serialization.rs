use {
    primitive_types::U256,
    serde::{Deserialize, Deserializer, Serializer, de},
    serde_with::{DeserializeAs, SerializeAs},
};

/// Serializes a `U256` as a base 10 string, the format balances and reserves
/// are exchanged in. Deserialization also accepts `0x` prefixed hex strings
/// and plain JSON numbers.
pub struct DecimalU256;

impl SerializeAs<U256> for DecimalU256 {
    fn serialize_as<S>(source: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&source.to_string())
    }
}

impl<'de> DeserializeAs<'de, U256> for DecimalU256 {
    fn deserialize_as<D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            String(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(value.into()),
            Raw::String(value) => {
                let parsed = match value.strip_prefix("0x") {
                    Some(hex) => U256::from_str_radix(hex, 16).map_err(|err| format!("{err:?}")),
                    None => U256::from_dec_str(&value).map_err(|err| format!("{err:?}")),
                };
                parsed.map_err(|err| de::Error::custom(format!("invalid U256 {value:?}: {err}")))
            }
        }
    }
}
