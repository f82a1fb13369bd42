use envguard_domain::model::ResolvedValue;
use envguard_domain::source::EnvSource;
use envguard_types::ids::SOURCE_RUNTIME;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
struct Table {
    name: String,
    values: BTreeMap<String, String>,
}

/// The live environment: named tables consulted in order, then `std::env::var_os`.
///
/// Values are taken verbatim as text; no dotenv sentinel handling applies here.
#[derive(Clone, Debug)]
pub struct RuntimeEnv {
    tables: Vec<Table>,
    live_fallback: bool,
}

impl RuntimeEnv {
    /// Snapshot of the process environment plus the live fallback.
    ///
    /// The snapshot and the fallback read the same process data. Tables pushed
    /// with [`RuntimeEnv::with_table`] stand in for the server/request-context tier
    /// and are consulted after the snapshot.
    pub fn capture() -> Self {
        let values = std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect();
        let env = Self {
            tables: vec![Table {
                name: "process".to_string(),
                values,
            }],
            live_fallback: true,
        };
        tracing::debug!(vars = env.tables[0].values.len(), "captured process environment");
        env
    }

    /// No tables and no fallback; lookups only see tables added with [`RuntimeEnv::with_table`].
    pub fn isolated() -> Self {
        Self {
            tables: Vec::new(),
            live_fallback: false,
        }
    }

    /// Append a table consulted after the existing ones.
    pub fn with_table<N, I, K, V>(mut self, name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tables.push(Table {
            name: name.into(),
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        });
        self
    }

    fn lookup(&self, key: &str) -> Option<String> {
        if let Some((table, value)) = self
            .tables
            .iter()
            .find_map(|t| t.values.get(key).map(|v| (&t.name, v)))
        {
            tracing::trace!(key, table = %table, "resolved from table");
            return Some(value.clone());
        }
        if !self.live_fallback || key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvSource for RuntimeEnv {
    fn resolve(&self, key: &str) -> ResolvedValue {
        match self.lookup(key) {
            Some(value) => ResolvedValue::text(value),
            None => ResolvedValue::Absent,
        }
    }

    fn declared_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for table in &self.tables {
            for key in table.values.keys() {
                if !keys.contains(key) {
                    keys.push(key.clone());
                }
            }
        }
        keys
    }

    fn describe(&self) -> String {
        SOURCE_RUNTIME.to_string()
    }
}
