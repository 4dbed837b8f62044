//! Color Scheme Model

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of the base palette, used to seed new schemes
pub const BASE_SCHEME_ID: &str = "Light";

/// A single named color of a scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSchemeColor {
    pub name: String,
    pub hex: String,
    /// Hex of the same color in the scheme's base palette, if the palette defines it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_hex: Option<String>,
}

/// Color scheme entity
///
/// Built-in palettes are rendered as schemes with `id: None` and `is_base: true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub is_base: bool,
    #[serde(default)]
    pub base_scheme_id: Option<String>,
    #[serde(default)]
    pub user_selectable: bool,
    #[serde(default)]
    pub colors: Vec<ColorSchemeColor>,
}

impl ColorScheme {
    /// Look up a color by name
    pub fn color(&self, name: &str) -> Option<&ColorSchemeColor> {
        self.colors.iter().find(|c| c.name == name)
    }
}

/// `{name, hex}` pair as submitted by the admin UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorInput {
    pub name: String,
    pub hex: String,
}

impl ColorInput {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// Create / update color scheme payload
///
/// On create every absent field takes its default; on update absent fields
/// are left unchanged and `colors` is merged by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorSchemeParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_scheme_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_selectable: Option<bool>,
    #[serde(default)]
    pub colors: Vec<ColorInput>,
}

/// Request body accepted by the color scheme endpoints
///
/// Both `{"color_scheme": {...}}` and the bare object are accepted. An
/// object with a `color_scheme` key is always read as the wrapped form, so
/// errors inside it are reported instead of falling back to the bare form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSchemePayload {
    Wrapped { color_scheme: ColorSchemeParams },
    Bare(ColorSchemeParams),
}

impl<'de> Deserialize<'de> for ColorSchemePayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let mut value = serde_json::Value::deserialize(deserializer)?;
        match value.get_mut("color_scheme").map(serde_json::Value::take) {
            Some(inner) => ColorSchemeParams::deserialize(inner)
                .map(Self::wrap)
                .map_err(|e| D::Error::custom(format!("color_scheme: {e}"))),
            None => ColorSchemeParams::deserialize(value)
                .map(Self::Bare)
                .map_err(D::Error::custom),
        }
    }
}

impl ColorSchemePayload {
    pub fn wrap(params: ColorSchemeParams) -> Self {
        Self::Wrapped {
            color_scheme: params,
        }
    }

    pub fn into_params(self) -> ColorSchemeParams {
        match self {
            Self::Wrapped { color_scheme } => color_scheme,
            Self::Bare(params) => params,
        }
    }
}

/// Read-only palette shipped with the service
#[derive(Debug)]
pub struct BuiltinPalette {
    pub id: &'static str,
    pub colors: &'static [(&'static str, &'static str)],
}

/// Built-in palettes; the first entry is the base scheme
pub const BUILTIN_PALETTES: &[BuiltinPalette] = &[
    BuiltinPalette {
        id: BASE_SCHEME_ID,
        colors: &[
            ("primary", "222222"),
            ("secondary", "ffffff"),
            ("tertiary", "0088cc"),
            ("quaternary", "e45735"),
            ("header_background", "ffffff"),
            ("header_primary", "333333"),
            ("highlight", "ffff4d"),
            ("danger", "e45735"),
            ("success", "009900"),
            ("love", "fa6c8d"),
        ],
    },
    BuiltinPalette {
        id: "Dark",
        colors: &[
            ("primary", "dddddd"),
            ("secondary", "222222"),
            ("tertiary", "099dd7"),
            ("quaternary", "c14924"),
            ("header_background", "111111"),
            ("header_primary", "dddddd"),
            ("highlight", "a87137"),
            ("danger", "e45735"),
            ("success", "1ca551"),
            ("love", "fa6c8d"),
        ],
    },
];

impl BuiltinPalette {
    /// Hex of `name` in this palette
    pub fn hex_for(&self, name: &str) -> Option<&'static str> {
        self.colors
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, hex)| *hex)
    }

    /// Render the palette as a read-only scheme
    pub fn to_scheme(&self) -> ColorScheme {
        ColorScheme {
            id: None,
            name: self.id.to_string(),
            is_base: true,
            base_scheme_id: Some(self.id.to_string()),
            user_selectable: false,
            colors: self
                .colors
                .iter()
                .map(|(name, hex)| ColorSchemeColor {
                    name: name.to_string(),
                    hex: hex.to_string(),
                    default_hex: Some(hex.to_string()),
                })
                .collect(),
        }
    }
}

/// Find a built-in palette by id
pub fn builtin_palette(id: &str) -> Option<&'static BuiltinPalette> {
    BUILTIN_PALETTES.iter().find(|p| p.id == id)
}

/// The base palette
pub fn base_palette() -> &'static BuiltinPalette {
    &BUILTIN_PALETTES[0]
}

/// `true` for 3 or 6 hex digits, without a leading `#`
pub fn is_valid_hex(hex: &str) -> bool {
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}
