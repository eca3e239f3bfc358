//! Caller-side adapters between typed filter values and their string form.
//!
//! The controller only stores strings. Typed values cross the boundary through
//! [`FilterCodec`]; an empty string always stands for "unset".

/// Conversion between a domain value and a filter string.
pub trait FilterCodec: Sized {
    /// Encode to the stored string form.
    fn encode(&self) -> String;
    /// Decode from the stored string form. `None` if unset or unparsable.
    fn decode(raw: &str) -> Option<Self>;
}

impl FilterCodec for String {
    fn encode(&self) -> String {
        self.clone()
    }

    fn decode(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| raw.to_string())
    }
}

impl FilterCodec for bool {
    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(raw: &str) -> Option<Self> {
        match raw.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

macro_rules! numeric_codec {
    ($($ty:ty),*) => {
        $(
            impl FilterCodec for $ty {
                fn encode(&self) -> String {
                    self.to_string()
                }

                fn decode(raw: &str) -> Option<Self> {
                    raw.trim().parse().ok()
                }
            }
        )*
    };
}

numeric_codec!(i32, i64, u32, u64, usize);

impl<T: FilterCodec> FilterCodec for Option<T> {
    fn encode(&self) -> String {
        self.as_ref().map(FilterCodec::encode).unwrap_or_default()
    }

    fn decode(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return Some(None);
        }
        T::decode(raw).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool() {
        assert_eq!(true.encode(), "true");
        assert_eq!(bool::decode("1"), Some(true));
        assert_eq!(bool::decode("false"), Some(false));
        assert_eq!(bool::decode(""), None);
        assert_eq!(bool::decode("yes"), None);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(42_u64.encode(), "42");
        assert_eq!(i64::decode(" -7 "), Some(-7));
        assert_eq!(u32::decode("abc"), None);
    }

    #[test]
    fn test_option_maps_none_to_empty() {
        assert_eq!(None::<bool>.encode(), "");
        assert_eq!(Some(5_u32).encode(), "5");
        assert_eq!(Option::<u32>::decode(""), Some(None));
        assert_eq!(Option::<u32>::decode("5"), Some(Some(5)));
        assert_eq!(Option::<u32>::decode("x"), None);
    }
}
