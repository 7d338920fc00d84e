//! In-memory program facts
//!
//! Classes and method bodies held in hash maps keyed by name and signature.
//! Bodies are shared behind `Arc` so parallel graph population can hand the
//! same body to several workers.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::shared::models::{ClassInfo, FactsError, FactsResult, MethodBody, MethodRef};
use crate::shared::ports::ProgramFacts;

/// Serialized fact dump
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactsDump {
    #[serde(default)]
    pub classes: Vec<ClassInfo>,
    #[serde(default)]
    pub bodies: Vec<MethodBody>,
}

#[derive(Debug, Default)]
pub struct InMemoryFacts {
    classes: FxHashMap<String, ClassInfo>,
    bodies: FxHashMap<String, Arc<MethodBody>>,
}

impl InMemoryFacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dump(dump: FactsDump) -> FactsResult<Self> {
        let mut facts = Self::new();
        for class in dump.classes {
            facts.add_class(class);
        }
        for body in dump.bodies {
            body.validate()?;
            facts.add_body(body);
        }
        Ok(facts)
    }

    pub fn from_json_str(json: &str) -> FactsResult<Self> {
        let dump: FactsDump = serde_json::from_str(json)?;
        Self::from_dump(dump)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> FactsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FactsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Dump with classes sorted by name and bodies by signature
    pub fn to_dump(&self) -> FactsDump {
        let mut classes: Vec<ClassInfo> = self.classes.values().cloned().collect();
        classes.sort_by(|a, b| a.name.cmp(&b.name));
        let mut bodies: Vec<MethodBody> = self.bodies.values().map(|b| b.as_ref().clone()).collect();
        bodies.sort_by(|a, b| a.method.signature.cmp(&b.method.signature));
        FactsDump { classes, bodies }
    }

    pub fn to_json(&self) -> FactsResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_dump())?)
    }

    pub fn add_class(&mut self, class: ClassInfo) {
        self.classes.insert(class.name.name().to_string(), class);
    }

    pub fn add_body(&mut self, body: MethodBody) {
        self.bodies
            .insert(body.method.signature.clone(), Arc::new(body));
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

impl ProgramFacts for InMemoryFacts {
    fn application_classes(&self) -> Vec<ClassInfo> {
        let mut classes: Vec<ClassInfo> = self
            .classes
            .values()
            .filter(|c| c.is_application)
            .cloned()
            .collect();
        // Case-insensitive name order, like the bytecode front end reports them
        classes.sort_by_key(|c| c.name.name().to_lowercase());
        classes
    }

    fn find_class(&self, name: &str) -> Option<ClassInfo> {
        self.classes.get(name).cloned()
    }

    fn body_of(&self, method: &MethodRef) -> FactsResult<Arc<MethodBody>> {
        self.bodies
            .get(&method.signature)
            .cloned()
            .ok_or_else(|| FactsError::missing_body(&method.signature))
    }

    fn is_application_type(&self, type_name: &str) -> bool {
        self.classes
            .get(type_name)
            .map(|c| c.is_application)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{Constant, Local, Place, Statement, StmtKind, Value};

    fn sample() -> InMemoryFacts {
        let method = MethodRef::new("app.Main", "void", "run", &[]).application();
        let mut class = ClassInfo::new("app.Main", true);
        class.methods.push(method.clone());
        let x = Local::new(0, "i0", "int");
        let body = MethodBody::straight_line(
            method,
            vec![Statement::new(
                0,
                StmtKind::Assign {
                    lhs: Place::Local(x),
                    rhs: Value::Constant(Constant::Int(1)),
                },
            )],
        )
        .unwrap();

        let mut facts = InMemoryFacts::new();
        facts.add_class(class);
        facts.add_class(ClassInfo::new("java.lang.Object", false));
        facts.add_body(body);
        facts
    }

    #[test]
    fn test_application_classes_filter_library() {
        let facts = sample();
        let names: Vec<String> = facts
            .application_classes()
            .into_iter()
            .map(|c| c.name.0)
            .collect();
        assert_eq!(names, vec!["app.Main"]);
        assert!(facts.is_application_type("app.Main"));
        assert!(!facts.is_application_type("java.lang.Object"));
        assert!(!facts.is_application_type("unknown.Type"));
    }

    #[test]
    fn test_missing_body_is_an_error() {
        let facts = sample();
        let err = facts
            .body_of(&MethodRef::new("app.Main", "void", "absent", &[]))
            .unwrap_err();
        assert!(matches!(err, FactsError::MissingBody { .. }));
    }

    #[test]
    fn test_json_dump_roundtrip() {
        let facts = sample();
        let json = facts.to_json().unwrap();
        let back = InMemoryFacts::from_json_str(&json).unwrap();

        assert_eq!(back.class_count(), 2);
        let method = MethodRef::new("app.Main", "void", "run", &[]).application();
        assert_eq!(back.body_of(&method).unwrap().statements().len(), 1);
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = InMemoryFacts::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, FactsError::Decode(_)));
    }
}
