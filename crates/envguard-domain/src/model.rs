use std::borrow::Cow;
use std::fmt;

/// Value bound to a key before validation.
///
/// `Absent` and `Empty` are distinct: an empty string is present.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ResolvedValue {
    #[default]
    Absent,
    Empty,
    Bool(bool),
    /// Always non-empty; use [`ResolvedValue::text`] to construct.
    Text(String),
}

impl ResolvedValue {
    pub fn text<S: Into<String>>(s: S) -> Self {
        let s = s.into();
        if s.is_empty() {
            ResolvedValue::Empty
        } else {
            ResolvedValue::Text(s)
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ResolvedValue::Absent)
    }

    /// Textual content, if the value is a string (empty included).
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResolvedValue::Empty => Some(""),
            ResolvedValue::Text(s) => Some(s.as_str()),
            ResolvedValue::Absent | ResolvedValue::Bool(_) => None,
        }
    }

    /// String form used by membership and length comparisons.
    pub fn string_form(&self) -> Option<Cow<'_, str>> {
        match self {
            ResolvedValue::Absent => None,
            ResolvedValue::Empty => Some(Cow::Borrowed("")),
            ResolvedValue::Bool(true) => Some(Cow::Borrowed("true")),
            ResolvedValue::Bool(false) => Some(Cow::Borrowed("false")),
            ResolvedValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
        }
    }
}

/// A single constraint applied to one key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    Required,
    Nullable,
    String,
    Boolean,
    Integer,
    Url,
    Email,
    In(Vec<String>),
    Min(i64),
    /// Name not in the built-in vocabulary. Always fails.
    Unknown { name: String },
    /// Known name with unusable arguments. Always fails.
    Malformed { name: String, detail: String },
}

impl Directive {
    /// Parse `name` or `name:arg1,arg2` into a directive.
    ///
    /// Never fails: typos become [`Directive::Unknown`] so the engine can report them.
    pub fn parse(raw: &str) -> Directive {
        let raw = raw.trim();
        let (name, args) = match raw.split_once(':') {
            Some((name, args)) => (name.trim(), Some(args)),
            None => (raw, None),
        };
        let lowered = name.to_ascii_lowercase();

        match lowered.as_str() {
            "required" => Directive::Required,
            "nullable" => Directive::Nullable,
            "string" => Directive::String,
            "boolean" | "bool" => Directive::Boolean,
            "integer" | "int" => Directive::Integer,
            "url" => Directive::Url,
            "email" => Directive::Email,
            "in" => match args {
                Some(args) => Directive::In(args.split(',').map(str::to_string).collect()),
                None => Directive::Malformed {
                    name: lowered,
                    detail: "expected at least one value".to_string(),
                },
            },
            "min" => match args.map(str::trim) {
                Some(bound) => match bound.parse::<i64>() {
                    Ok(n) => Directive::Min(n),
                    Err(_) => Directive::Malformed {
                        name: lowered,
                        detail: format!("'{bound}' is not an integer"),
                    },
                },
                None => Directive::Malformed {
                    name: lowered,
                    detail: "expected a minimum".to_string(),
                },
            },
            _ => Directive::Unknown {
                name: name.to_string(),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Directive::Required => "required",
            Directive::Nullable => "nullable",
            Directive::String => "string",
            Directive::Boolean => "boolean",
            Directive::Integer => "integer",
            Directive::Url => "url",
            Directive::Email => "email",
            Directive::In(_) => "in",
            Directive::Min(_) => "min",
            Directive::Unknown { name } | Directive::Malformed { name, .. } => name,
        }
    }

    /// Configuration errors are reported even when `nullable` skips a key.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Directive::Unknown { .. } | Directive::Malformed { .. }
        )
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::In(values) => write!(f, "in:{}", values.join(",")),
            Directive::Min(n) => write!(f, "min:{n}"),
            other => f.write_str(other.name()),
        }
    }
}

/// Directives for a single key, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyRules {
    pub key: String,
    pub directives: Vec<Directive>,
}

impl KeyRules {
    pub fn has(&self, directive: &Directive) -> bool {
        self.directives.contains(directive)
    }
}

/// Ordered mapping of key -> directives. Keys are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    entries: Vec<KeyRules>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule set from directive strings, e.g. `("APP_ENV", ["required", "in:a,b"])`.
    pub fn from_strings<K, I, S>(rules: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut set = RuleSet::new();
        for (key, directives) in rules {
            set.insert(
                key,
                directives.iter().map(|d| Directive::parse(d.as_ref())).collect(),
            );
        }
        set
    }

    /// Insert or replace a key's whole directive list. Replacing keeps the key's position.
    pub fn insert<K: Into<String>>(&mut self, key: K, directives: Vec<Directive>) {
        let key = key.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.directives = directives,
            None => self.entries.push(KeyRules { key, directives }),
        }
    }

    /// Apply `overrides` on top of `self`: same-named keys are replaced wholesale.
    pub fn merge(&mut self, overrides: RuleSet) {
        for entry in overrides.entries {
            self.insert(entry.key, entry.directives);
        }
    }

    pub fn get(&self, key: &str) -> Option<&KeyRules> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyRules> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
