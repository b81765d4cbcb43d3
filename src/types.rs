use serde::{Deserialize, Serialize};

/// Ranking hint attached to every result handed to the launcher.
pub const RESULT_SCORE: i32 = 300;

/// Icon used on light backgrounds.
pub const LIGHT_ICON_PATH: &str = "Images/statuslens.light.png";

/// Icon used on dark backgrounds.
pub const DARK_ICON_PATH: &str = "Images/statuslens.dark.png";

/// A single HTTP status code as compiled into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub code: &'static str,
    pub reason_phrase: &'static str,
    /// One-line description of when the code is used.
    pub summary: &'static str,
    /// Section of the RFC that defines the code.
    pub rfc_url: &'static str,
}

impl StatusEntry {
    /// Returns the response class derived from the leading digit.
    pub fn class(&self) -> Option<StatusClass> {
        self.code
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .and_then(StatusClass::from_digit)
    }
}

/// The five response classes of HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl StatusClass {
    /// Maps the leading digit of a code (1-5) to its class.
    pub fn from_digit(digit: u32) -> Option<StatusClass> {
        match digit {
            1 => Some(StatusClass::Informational),
            2 => Some(StatusClass::Success),
            3 => Some(StatusClass::Redirection),
            4 => Some(StatusClass::ClientError),
            5 => Some(StatusClass::ServerError),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Informational => "informational",
            StatusClass::Success => "success",
            StatusClass::Redirection => "redirection",
            StatusClass::ClientError => "client_error",
            StatusClass::ServerError => "server_error",
        }
    }
}

/// Which documentation a result links to.
///
/// Persisted as the launcher combobox value: `0` for RFC, `1` for MDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceType {
    #[default]
    Rfc,
    Mdn,
}

impl ReferenceType {
    /// Label shown in the launcher settings.
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceType::Rfc => "RFC",
            ReferenceType::Mdn => "MDN",
        }
    }

    pub fn as_index(&self) -> i64 {
        match self {
            ReferenceType::Rfc => 0,
            ReferenceType::Mdn => 1,
        }
    }

    /// Parses a combobox value, returning `None` for anything but 0 or 1.
    pub fn from_index(index: i64) -> Option<ReferenceType> {
        match index {
            0 => Some(ReferenceType::Rfc),
            1 => Some(ReferenceType::Mdn),
            _ => None,
        }
    }
}

impl Serialize for ReferenceType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_index())
    }
}

impl<'de> Deserialize<'de> for ReferenceType {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let index = i64::deserialize(deserializer)?;
        ReferenceType::from_index(index).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown reference type index: {}", index))
        })
    }
}

/// A search issued by the launcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Search text after the action keyword.
    pub search: String,
    /// Keyword that directed the query at this plugin; empty for global queries.
    #[serde(default)]
    pub action_keyword: String,
}

impl Query {
    /// Creates a query scoped to this plugin by `action_keyword`.
    pub fn scoped(action_keyword: &str, search: &str) -> Self {
        Self {
            search: search.to_string(),
            action_keyword: action_keyword.to_string(),
        }
    }

    /// Creates an unscoped query, as issued by the launcher's global search.
    pub fn global(search: &str) -> Self {
        Self {
            search: search.to_string(),
            action_keyword: String::new(),
        }
    }

    pub fn is_global(&self) -> bool {
        self.action_keyword.is_empty()
    }
}

/// A result row handed back to the launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub title: String,
    pub subtitle: String,
    pub icon_path: String,
    /// URL opened when the result is activated; empty for error rows.
    pub target_url: String,
    pub score: i32,
}

/// Launcher color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    HighContrastOne,
    HighContrastTwo,
    HighContrastBlack,
    HighContrastWhite,
}

impl Theme {
    /// Returns the icon that stays legible on this theme's background.
    pub fn icon_path(&self) -> &'static str {
        match self {
            Theme::Light | Theme::HighContrastWhite => LIGHT_ICON_PATH,
            _ => DARK_ICON_PATH,
        }
    }
}
