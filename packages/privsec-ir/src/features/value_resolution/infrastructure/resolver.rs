/*
 * Value Resolver + Call Reconstructor
 *
 * Follows reaching definitions backwards from a use-site operand:
 * - Constant                      → Literal
 * - Local, single def = invoke    → Nested(CallNode)
 * - Local, single def = new array → ArrayLiteral (element stores among the def's uses)
 * - Local, single def = local     → alias, resolved at the def
 * - anything else                 → Opaque
 *
 * Every step reads the same immutable MethodBody, so repeated calls on one
 * (value, site) pair yield structurally identical results.
 */

use tracing::{debug, warn};

use crate::config::{AnalyzerConfig, ArrayOrder};
use crate::features::value_resolution::domain::{CallNode, Receiver, ResolvedValue};
use crate::shared::models::{
    Constant, Expr, InvokeExpr, Local, MethodBody, Place, Statement, StmtId, StmtKind, Value,
};

/// Resolves operands of one method body
pub struct ValueResolver<'a> {
    body: &'a MethodBody,
    config: &'a AnalyzerConfig,
}

impl<'a> ValueResolver<'a> {
    pub fn new(body: &'a MethodBody, config: &'a AnalyzerConfig) -> Self {
        Self { body, config }
    }

    pub fn body(&self) -> &'a MethodBody {
        self.body
    }

    /// Semantic value of `value` as read at statement `at`
    pub fn resolve(&self, value: &Value, at: StmtId) -> ResolvedValue {
        self.resolve_at_depth(value, at, 0, &mut Vec::new())
    }

    /// Rebuild the invocation hosted by statement `host`
    pub fn build_call(&self, invoke: &InvokeExpr, host: StmtId) -> CallNode {
        self.build_call_at_depth(invoke, host, 0, &mut Vec::new())
    }

    // `path` holds the definitions currently being expanded; re-entering one
    // means the oracle reported a cycle.

    fn build_call_at_depth(
        &self,
        invoke: &InvokeExpr,
        host: StmtId,
        depth: usize,
        path: &mut Vec<StmtId>,
    ) -> CallNode {
        let target = &self.config.target;
        let declaring = &invoke.method.declaring_type;

        let receiver = if declaring.name() == target.entry_point_class {
            Receiver::Entry
        } else if declaring.short_name() == target.stream_type {
            Receiver::Anonymous
        } else {
            match (&invoke.receiver, invoke.is_instance()) {
                (Some(recv), true) => {
                    Receiver::Value(self.resolve_at_depth(recv, host, depth, path))
                }
                _ => Receiver::Static,
            }
        };

        let args = invoke
            .args
            .iter()
            .map(|arg| self.resolve_at_depth(arg, host, depth, path))
            .collect();

        CallNode::new(receiver, invoke.method.clone(), args)
    }

    fn resolve_at_depth(
        &self,
        value: &Value,
        at: StmtId,
        depth: usize,
        path: &mut Vec<StmtId>,
    ) -> ResolvedValue {
        match value {
            Value::Constant(c) => ResolvedValue::Literal(c.clone()),
            Value::Local(local) => {
                let mark = path.len();
                let resolved = self.resolve_local(local, at, depth, path);
                path.truncate(mark);
                resolved
            }
            Value::Expr(expr) => match expr.as_ref() {
                Expr::Invoke(invoke) if depth < self.config.resolver.max_depth => {
                    ResolvedValue::Nested(Box::new(self.build_call_at_depth(
                        invoke,
                        at,
                        depth + 1,
                        path,
                    )))
                }
                _ => ResolvedValue::Opaque(value.to_string()),
            },
        }
    }

    /// Copies are followed in a loop; only invocations and arrays recurse
    fn resolve_local(
        &self,
        local: &Local,
        at: StmtId,
        depth: usize,
        path: &mut Vec<StmtId>,
    ) -> ResolvedValue {
        let (mut current, mut at, mut depth) = (local, at, depth);

        loop {
            if depth >= self.config.resolver.max_depth {
                warn!(
                    "Resolution depth bound ({}) exceeded for {} in {}",
                    self.config.resolver.max_depth, current.name, self.body.method.signature
                );
                return opaque(current);
            }

            let [def_id] = self.body.reaching_definitions(current.id, at) else {
                return opaque(current);
            };
            if path.contains(def_id) {
                debug!(
                    "Definition cycle through {} at {:?} in {}",
                    current.name, def_id, self.body.method.signature
                );
                return opaque(current);
            }
            let Some(def) = self.body.statement(*def_id) else {
                return opaque(current);
            };
            let (Some(defined), Some(rhs)) = (def.defined_local(), def.rhs()) else {
                return opaque(current);
            };
            path.push(def.id);

            match rhs {
                Value::Local(source) => {
                    current = source;
                    at = def.id;
                    depth += 1;
                }
                Value::Expr(expr) => {
                    return match expr.as_ref() {
                        Expr::Invoke(invoke) => ResolvedValue::Nested(Box::new(
                            self.build_call_at_depth(invoke, def.id, depth + 1, path),
                        )),
                        Expr::NewArray { .. } => {
                            self.resolve_array(def, defined, depth + 1, path)
                        }
                        Expr::FieldRef(_) | Expr::Cast { .. } | Expr::ArrayRef { .. } => {
                            opaque(current)
                        }
                    }
                }
                Value::Constant(_) => return opaque(current),
            }
        }
    }

    /// Elements stored into the array allocated by `def`
    fn resolve_array(
        &self,
        def: &Statement,
        array: &Local,
        depth: usize,
        path: &mut Vec<StmtId>,
    ) -> ResolvedValue {
        let mut elements: Vec<(Option<usize>, ResolvedValue)> = Vec::new();

        for site in self.body.uses_of(def.id) {
            if site.local != array.id {
                continue;
            }
            let Some(store) = self.body.statement(site.stmt) else {
                continue;
            };
            if let StmtKind::Assign {
                lhs: Place::ArrayElement { base, index },
                rhs,
            } = &store.kind
            {
                if base.id != array.id {
                    continue;
                }
                let slot = index.as_constant().and_then(Constant::as_index);
                elements.push((slot, self.resolve_at_depth(rhs, store.id, depth, path)));
            }
        }

        if self.config.resolver.array_order == ArrayOrder::Index {
            // Stable: equal or unknown slots keep use-site order
            elements.sort_by_key(|(slot, _)| (slot.is_none(), slot.unwrap_or(0)));
        }

        ResolvedValue::ArrayLiteral(elements.into_iter().map(|(_, v)| v).collect())
    }
}

fn opaque(local: &Local) -> ResolvedValue {
    ResolvedValue::Opaque(local.name.clone())
}
