/*
 * Graph Population
 *
 * Per analyzed method:
 *   ROOT --CONTAINS--> METHOD
 *   METHOD --REFER--> API      (every invocation leaving the application)
 *   METHOD --REFER--> CONST    (structure mode)
 *
 * Per class (structure mode):
 *   ROOT --CONTAINS--> .pkg --CONTAINS--> .pkg.seg ... --CONTAINS--> CLASS
 *   CLASS --CONTAINS--> METHOD | FIELD,  FIELD --REFER--> TYPE
 *
 * A method whose body cannot be read is logged and skipped; the rest of the
 * graph is still built.
 */

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use super::nodes::{
    api_node, class_node, const_node, field_node, method_node, package_node, package_segments,
    type_node,
};
use super::store::AttributeGraph;
use crate::config::AnalyzerConfig;
use crate::features::attribute_graph::domain::EdgeType;
use crate::features::value_resolution::ValueResolver;
use crate::shared::models::{ClassInfo, FactsResult, MethodRef, Value};
use crate::shared::ports::ProgramFacts;

/// Outcome counters of one population pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationStats {
    pub classes: usize,
    pub methods_visited: usize,
    pub methods_skipped: usize,
}

pub struct GraphPopulator<'a> {
    graph: &'a AttributeGraph,
    facts: &'a dyn ProgramFacts,
    config: &'a AnalyzerConfig,
}

impl<'a> GraphPopulator<'a> {
    pub fn new(
        graph: &'a AttributeGraph,
        facts: &'a dyn ProgramFacts,
        config: &'a AnalyzerConfig,
    ) -> Self {
        Self {
            graph,
            facts,
            config,
        }
    }

    /// Record the API calls made by one method
    pub fn add_api_call_relations(&self, method: &MethodRef) -> FactsResult<()> {
        let body = self.facts.body_of(method)?;
        let graph = self.graph;

        let v_method = method_node(graph, method);
        let v_root = graph.gen_default_root();
        graph.create_edge(&v_root, &v_method, EdgeType::Contains);

        let resolver = ValueResolver::new(&body, self.config);
        for stmt in body.statements() {
            for invoke in stmt.invocations() {
                let target = &invoke.method;
                if target.is_application
                    || self.facts.is_application_type(target.declaring_type.name())
                {
                    continue;
                }
                let call = resolver.build_call(invoke, stmt.id);
                let v_api = api_node(graph, &call);
                graph.create_edge(&v_method, &v_api, EdgeType::Refer);
            }

            if self.config.graph.include_structure {
                for value in stmt.values() {
                    if let Value::Constant(constant) = value {
                        let v_const = const_node(graph, constant);
                        graph.create_edge(&v_method, &v_const, EdgeType::Refer);
                    }
                }
            }
        }

        Ok(())
    }

    /// Record package, class and member structure of one class
    pub fn add_structure(&self, class: &ClassInfo) {
        let graph = self.graph;

        let mut parent = graph.gen_default_root();
        for segment in package_segments(class.package()) {
            let v_pkg = package_node(graph, &segment);
            graph.create_edge(&parent, &v_pkg, EdgeType::Contains);
            parent = v_pkg;
        }

        let v_class = class_node(graph, &class.name);
        graph.create_edge(&parent, &v_class, EdgeType::Contains);

        for method in &class.methods {
            let v_method = method_node(graph, method);
            graph.create_edge(&v_class, &v_method, EdgeType::Contains);
        }

        for field in &class.fields {
            let v_field = field_node(graph, field);
            graph.create_edge(&v_class, &v_field, EdgeType::Contains);
            let v_type = type_node(graph, &field.ty);
            graph.create_edge(&v_field, &v_type, EdgeType::Refer);
        }
    }

    /// Populate the graph for every method of `classes`
    pub fn populate(&self, classes: &[ClassInfo]) -> PopulationStats {
        if self.config.graph.include_structure {
            for class in classes {
                self.add_structure(class);
            }
        }

        let methods: Vec<&MethodRef> = classes.iter().flat_map(|c| c.methods.iter()).collect();
        let outcomes = self.visit_all(&methods);
        let visited = outcomes.iter().filter(|ok| **ok).count();

        let stats = PopulationStats {
            classes: classes.len(),
            methods_visited: visited,
            methods_skipped: outcomes.len() - visited,
        };
        debug!(
            "Graph populated: {} classes, {} methods ({} skipped), {} nodes, {} edges",
            stats.classes,
            stats.methods_visited,
            stats.methods_skipped,
            self.graph.node_count(),
            self.graph.edge_count()
        );
        stats
    }

    fn visit(&self, method: &MethodRef) -> bool {
        match self.add_api_call_relations(method) {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping {} in graph population: {}", method.signature, e);
                false
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn visit_all(&self, methods: &[&MethodRef]) -> Vec<bool> {
        if self.config.graph.parallel {
            return methods.par_iter().map(|m| self.visit(m)).collect();
        }
        methods.iter().map(|m| self.visit(m)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn visit_all(&self, methods: &[&MethodRef]) -> Vec<bool> {
        methods.iter().map(|m| self.visit(m)).collect()
    }
}
