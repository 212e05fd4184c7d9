//! Query-string writer shared by the URL builders

use std::fmt::Display;

use url::Url;

use crate::error::{GeocodingError, Provider, Result};

/// Maps an enum value onto the exact string a provider expects on the wire
pub trait WireValue {
    fn wire(&self) -> &'static str;
}

/// How a provider spells boolean query values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolStyle {
    /// `true` / `false`
    Word,
    /// `1` / `0`
    Digit,
}

impl BoolStyle {
    pub fn format(&self, value: bool) -> &'static str {
        match (self, value) {
            (Self::Word, true) => "true",
            (Self::Word, false) => "false",
            (Self::Digit, true) => "1",
            (Self::Digit, false) => "0",
        }
    }
}

/// Collects query pairs in insertion order and renders them onto a base URL
#[derive(Debug, Clone)]
pub struct QueryWriter {
    url: Url,
    pairs: Vec<(String, String)>,
}

impl QueryWriter {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            pairs: Vec::new(),
        }
    }

    /// Parse `base` and start a writer on it
    pub fn parse(provider: Provider, base: &str) -> Result<Self> {
        let url = Url::parse(base).map_err(|e| {
            GeocodingError::config(provider, format!("invalid base URL {base:?}: {e}"))
                .with_source(e)
        })?;
        Ok(Self::new(url))
    }

    /// Append path segments (each one percent-encoded)
    pub fn segments<I, S>(&mut self, provider: Provider, segments: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base = self.url.to_string();
        self.url
            .path_segments_mut()
            .map_err(|_| GeocodingError::config(provider, format!("{base} cannot be a base URL")))?
            .pop_if_empty()
            .extend(segments);
        Ok(self)
    }

    /// Percent-encode ASCII characters that segment encoding leaves as-is
    pub fn escape_path(&mut self, reserved: &[char]) -> &mut Self {
        let path = self.url.path();
        if !path.contains(reserved) {
            return self;
        }
        let escaped: String = path
            .chars()
            .map(|c| {
                if reserved.contains(&c) {
                    format!("%{:02X}", c as u32)
                } else {
                    c.to_string()
                }
            })
            .collect();
        self.url.set_path(&escaped);
        self
    }

    pub fn pair(&mut self, name: &str, value: impl Display) -> &mut Self {
        self.pairs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn opt(&mut self, name: &str, value: Option<impl Display>) -> &mut Self {
        if let Some(value) = value {
            self.pair(name, value);
        }
        self
    }

    /// Append a string value, skipping `None` and blank strings
    pub fn text(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => self.pair(name, v),
            _ => self,
        }
    }

    pub fn flag(&mut self, name: &str, value: Option<bool>, style: BoolStyle) -> &mut Self {
        if let Some(value) = value {
            self.pair(name, style.format(value));
        }
        self
    }

    pub fn wire<W: WireValue>(&mut self, name: &str, value: Option<&W>) -> &mut Self {
        if let Some(value) = value {
            self.pair(name, value.wire());
        }
        self
    }

    /// Append a list of wire values joined by `separator`; empty lists are skipped
    pub fn wire_list<W: WireValue>(&mut self, name: &str, values: &[W], separator: &str) -> &mut Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(WireValue::wire)
            .collect::<Vec<_>>()
            .join(separator);
        self.pair(name, joined)
    }

    /// Append a list of strings joined by `separator`; blank entries are dropped
    pub fn list<S: AsRef<str>>(&mut self, name: &str, values: &[S], separator: &str) -> &mut Self {
        let items: Vec<&str> = values
            .iter()
            .map(|v| v.as_ref().trim())
            .filter(|v| !v.is_empty())
            .collect();
        if items.is_empty() {
            return self;
        }
        self.pair(name, items.join(separator))
    }

    pub fn finish(mut self) -> Url {
        if !self.pairs.is_empty() {
            self.url.query_pairs_mut().extend_pairs(&self.pairs);
        }
        self.url
    }
}

/// Reject a blank or absent required string, naming the field
pub fn require_text<'a>(provider: Provider, field: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(GeocodingError::missing_field(provider, field)),
    }
}

/// Reject values outside `min..=max`, naming the field
pub fn require_range<T>(provider: Provider, field: &str, value: T, min: T, max: T) -> Result<T>
where
    T: PartialOrd + Display + Copy,
{
    if value < min || value > max {
        return Err(GeocodingError::invalid_field(
            provider,
            field,
            format_args!("must be between {min} and {max}, got {value}"),
        ));
    }
    Ok(value)
}

/// Declare an enum whose variants map onto provider wire strings
///
/// ```
/// geocoding_core::wire_enum! {
///     /// Result ordering
///     pub enum RankBy {
///         Prominence => "prominence",
///         Distance => "distance",
///     }
/// }
///
/// use geocoding_core::WireValue;
/// assert_eq!(RankBy::Distance.wire(), "distance");
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// All variants, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl $crate::WireValue for $name {
            fn wire(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::WireValue::wire(self))
            }
        }
    };
}
