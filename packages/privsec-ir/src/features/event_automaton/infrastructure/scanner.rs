/*
 * Trace Scanner
 *
 * Walks one method's statements in program order and emits tokens:
 * - `add(<string literal>)`            → pending list text
 * - `x = <static field>`               → pending static field
 * - `x = staticinvoke f(.., v)`        → pending static value (last operand)
 * - `x = newarray [N]`                 → next N raw statements become pending varargs
 * - `.. = b.<opening setter>(..)`      → BEGIN, EventType
 * - setter-shaped call on a builder    → (name, values)
 * - end of trace                       → END
 *
 * A local argument drains the pending buffers (static value, static field,
 * list, varargs); with nothing pending it falls back to the literal the
 * resolver recovers for it.
 */

use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::features::event_automaton::domain::{
    is_setter_shaped, BuiltinFunctionUse, SetterKind, Token,
};
use crate::features::value_resolution::domain::{Receiver, ResolvedValue};
use crate::features::value_resolution::ValueResolver;
use crate::shared::models::{
    Constant, Expr, InvokeExpr, InvokeKind, MethodBody, Statement, StmtId, StmtKind, Value,
};

/// Values captured ahead of the setter that consumes them
#[derive(Debug, Default)]
struct PendingBuffers {
    static_value: Option<String>,
    static_field: Option<String>,
    list: String,
    varargs: Vec<String>,
}

impl PendingBuffers {
    fn drain(&mut self) -> Vec<String> {
        let mut out = Vec::new();
        out.extend(self.static_value.take());
        out.extend(self.static_field.take());
        if !self.list.is_empty() {
            out.push(std::mem::take(&mut self.list));
        }
        out.append(&mut self.varargs);
        out
    }
}

/// Tokens and built-in function uses of one method
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub builtins: Vec<BuiltinFunctionUse>,
}

pub struct TraceScanner<'a> {
    resolver: ValueResolver<'a>,
    config: &'a AnalyzerConfig,
}

impl<'a> TraceScanner<'a> {
    pub fn new(body: &'a MethodBody, config: &'a AnalyzerConfig) -> Self {
        Self {
            resolver: ValueResolver::new(body, config),
            config,
        }
    }

    pub fn scan(&self) -> ScanOutput {
        let statements = self.resolver.body().statements();
        let mut pending = PendingBuffers::default();
        let mut out = ScanOutput::default();

        let mut i = 0;
        while i < statements.len() {
            let stmt = &statements[i];
            i += 1;

            if let Some(invoke) = stmt.invoke_expr() {
                if invoke.method.name == self.config.target.list_accumulator {
                    for arg in &invoke.args {
                        if let Value::Constant(c @ Constant::Str(_)) = arg {
                            pending.list.push_str(&c.to_string());
                        }
                    }
                }
            }

            match &stmt.kind {
                StmtKind::Assign { rhs, .. } => {
                    self.record_builtin(rhs, &mut out);
                    match rhs.as_expr() {
                        Some(Expr::FieldRef(field)) if field.is_static => {
                            pending.static_field = Some(field.to_string());
                        }
                        Some(Expr::Invoke(invoke)) if invoke.kind == InvokeKind::Static => {
                            if let Some(last) = invoke.args.last() {
                                pending.static_value = Some(last.to_string());
                            }
                        }
                        Some(Expr::NewArray { size, .. }) => {
                            let consumed = self.capture_varargs(size, &statements[i..], &mut pending);
                            i += consumed;
                        }
                        Some(Expr::Invoke(invoke)) if invoke.is_instance() => {
                            self.emit_setter(invoke, stmt.id, &mut pending, &mut out.tokens);
                        }
                        _ => {}
                    }
                }
                StmtKind::Invoke(invoke) if invoke.is_instance() => {
                    self.emit_setter(invoke, stmt.id, &mut pending, &mut out.tokens);
                }
                _ => {}
            }
        }

        out.tokens.push(Token::end());
        out
    }

    fn record_builtin(&self, rhs: &Value, out: &mut ScanOutput) {
        let Some(invoke) = rhs.as_invoke() else {
            return;
        };
        if invoke.kind != InvokeKind::Static
            || invoke.result_type().name() != self.config.target.function_type
        {
            return;
        }
        let usage =
            BuiltinFunctionUse::new(&self.resolver.body().method.signature, &invoke.method.name);
        debug!("{}", usage.summary());
        out.builtins.push(usage);
    }

    /// Element stores following a `newarray`; returns how many were consumed
    fn capture_varargs(
        &self,
        size: &Value,
        following: &[Statement],
        pending: &mut PendingBuffers,
    ) -> usize {
        let Some(len) = size.as_constant().and_then(Constant::as_index) else {
            debug!("Vararg array with non-constant size {} left unresolved", size);
            return 0;
        };
        let len = len.min(following.len());
        for stmt in &following[..len] {
            match stmt.rhs() {
                Some(Value::Constant(c)) => pending.varargs.push(c.to_string()),
                Some(_) => pending
                    .varargs
                    .push(self.config.target.vararg_placeholder.clone()),
                None => {}
            }
        }
        len
    }

    fn emit_setter(
        &self,
        invoke: &InvokeExpr,
        host: StmtId,
        pending: &mut PendingBuffers,
        tokens: &mut Vec<Token>,
    ) {
        let name = invoke.method.name.as_str();
        if !self.targets_builder(invoke) {
            return;
        }
        if name == self.config.target.opening_setter {
            tokens.push(Token::begin());
            tokens.push(Token::event_type(
                self.config.target.event_kind_for(invoke.result_type()),
            ));
        }
        if !is_setter_shaped(name) {
            return;
        }

        let mut values = Vec::new();
        for arg in &invoke.args {
            match arg {
                Value::Constant(c) => values.push(c.to_string()),
                Value::Local(_) => {
                    let drained = pending.drain();
                    if drained.is_empty() {
                        values.extend(fallback_texts(&self.resolver.resolve(arg, host)));
                    } else {
                        values.extend(drained);
                    }
                }
                Value::Expr(_) => values.extend(fallback_texts(&self.resolver.resolve(arg, host))),
            }
        }

        tokens.push(Token::setter(SetterKind::from_method_name(name), values));
    }

    /// Builder-typed call or a known setter; other `set*` calls (UI, framework)
    /// must not consume the pending buffers
    fn targets_builder(&self, invoke: &InvokeExpr) -> bool {
        let target = &self.config.target;
        target.event_kind_for(&invoke.method.declaring_type).is_some()
            || target.event_kind_for(invoke.result_type()).is_some()
            || !matches!(
                SetterKind::from_method_name(&invoke.method.name),
                SetterKind::Unrecognized(_)
            )
    }
}

/// Literal texts of a resolved argument; a static wrapper call (`valueOf`)
/// contributes its last argument
fn fallback_texts(value: &ResolvedValue) -> Vec<String> {
    match value {
        ResolvedValue::Nested(call) if call.receiver == Receiver::Static => {
            call.args.last().map(fallback_texts).unwrap_or_default()
        }
        other => other.literal_texts(),
    }
}
