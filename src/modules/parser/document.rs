//! `dbconf.yml` document reader
//!
//! Keys and scalar values are kept exactly as written: `open: 1.10` reads back
//! as `"1.10"` and a section named `2024:` is found by `2024.driver`.
//!
//! The document is parsed twice. The first pass builds a [`Value`] to learn
//! the shape of the tree; the second replays the same text through
//! [`NodeSeed`], which reads every key and scalar with `deserialize_str` so no
//! number or bool conversion takes place.

use dbmigrate_core::DbConfError;
use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A loaded `dbconf.yml`, answering dotted-path lookups such as `production.open`
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    path: PathBuf,
    root: Node,
}

/// Document tree with scalars held as source text
#[derive(Debug, Clone, PartialEq)]
enum Node {
    Scalar(String),
    Mapping(Vec<(String, Node)>),
    /// Anything that cannot be navigated or read as a scalar
    Other(&'static str),
}

impl ConfigDocument {
    /// File name of the configuration document inside the base directory
    pub const CONFIG_FILE: &'static str = "dbconf.yml";

    /// Location of the configuration document for a base directory
    pub fn path_in(base_dir: impl AsRef<Path>) -> PathBuf {
        base_dir.as_ref().join(Self::CONFIG_FILE)
    }

    /// Read and parse `<base_dir>/dbconf.yml`. Nothing is cached.
    pub fn load(base_dir: impl AsRef<Path>) -> Result<Self, DbConfError> {
        let path = Self::path_in(base_dir);
        debug!("Loading configuration from: {}", path.display());

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DbConfError::DocumentNotFound(path));
            }
            Err(e) => return Err(e.into()),
        };

        Self::parse(&content, path)
    }

    /// Parse document content; `path` is only used in error messages
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self, DbConfError> {
        let path = path.into();
        let parse_error = |e: serde_yaml::Error| DbConfError::DocumentParse {
            path: path.clone(),
            message: e.to_string(),
        };

        let shape = serde_yaml::from_str::<Value>(content).map_err(parse_error)?;
        let root = match &shape {
            Value::Mapping(_) => NodeSeed(&shape)
                .deserialize(serde_yaml::Deserializer::from_str(content))
                .map_err(parse_error)?,
            // Empty documents and top-level scalars have no sections
            _ => Node::Mapping(Vec::new()),
        };

        Ok(Self { path, root })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a scalar by dotted key, returning it as written
    pub fn get(&self, key: &str) -> Result<String, DbConfError> {
        let mut node = &self.root;
        for segment in key.split('.') {
            node = match node {
                Node::Mapping(entries) => entries
                    .iter()
                    .find(|(name, _)| name == segment)
                    .map(|(_, child)| child),
                _ => None,
            }
            .ok_or_else(|| DbConfError::MissingField(key.to_string()))?;
        }

        match node {
            Node::Scalar(s) => Ok(s.clone()),
            Node::Mapping(_) => Err(field_type(key, "a mapping")),
            Node::Other(found) => Err(field_type(key, found)),
        }
    }

    /// Top-level section names, in document order
    pub fn environments(&self) -> Vec<String> {
        match &self.root {
            Node::Mapping(entries) => entries.iter().map(|(name, _)| name.clone()).collect(),
            _ => Vec::new(),
        }
    }
}

fn field_type(key: &str, found: &'static str) -> DbConfError {
    DbConfError::FieldType {
        key: key.to_string(),
        found,
    }
}

/// Reads one node of the document, guided by its shape from the first pass
struct NodeSeed<'a>(&'a Value);

impl<'de, 'a> DeserializeSeed<'de> for NodeSeed<'a> {
    type Value = Node;

    fn deserialize<D>(self, deserializer: D) -> Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        match self.0 {
            Value::Mapping(shape) => deserializer.deserialize_map(MappingVisitor(shape)),
            Value::Sequence(_) => {
                IgnoredAny::deserialize(deserializer)?;
                Ok(Node::Other("a sequence"))
            }
            Value::Tagged(_) => {
                IgnoredAny::deserialize(deserializer)?;
                Ok(Node::Other("a tagged value"))
            }
            Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
                String::deserialize(deserializer).map(Node::Scalar)
            }
        }
    }
}

struct MappingVisitor<'a>(&'a Mapping);

impl<'de, 'a> Visitor<'de> for MappingVisitor<'a> {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut shapes = self.0.values();
        let mut entries = Vec::with_capacity(self.0.len());
        while let Some(key) = map.next_key::<String>()? {
            let shape = shapes
                .next()
                .ok_or_else(|| de::Error::custom("mapping has more entries than expected"))?;
            entries.push((key, map.next_value_seed(NodeSeed(shape))?));
        }

        Ok(Node::Mapping(entries))
    }
}
