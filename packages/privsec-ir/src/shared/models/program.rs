//! Program facts model
//!
//! Statement and value shapes of the three-address bytecode IR handed to the
//! core by the program facts oracle. Everything here is plain data: the
//! oracle builds it once per method and the analyses only read it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Statement identity inside one method body (program order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StmtId(pub u32);

/// Local variable identity inside one method body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalId(pub u32);

const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// Fully qualified type name (`java.lang.String`, `int`, `long[]`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(pub String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Simple name without the package (`AudioEvent$AudioEventBuilder`)
    pub fn short_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Package part of the name, empty for the default package
    pub fn package(&self) -> &str {
        self.0.rsplit_once('.').map(|(pkg, _)| pkg).unwrap_or("")
    }

    pub fn is_array(&self) -> bool {
        self.0.ends_with("[]")
    }

    /// Class/interface type (not primitive, not array)
    pub fn is_reference(&self) -> bool {
        !self.is_array() && !PRIMITIVES.contains(&self.0.as_str())
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Literal operand
///
/// `Display` follows the IR printer: strings are quoted, longs carry an `L`
/// suffix and floats an `F` suffix. Downstream text (API node labels, event
/// tokens) is built from that form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Constant {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(String),
    Null,
    Class(String),
}

impl Constant {
    pub fn string(s: impl Into<String>) -> Self {
        Constant::Str(s.into())
    }

    /// Non-negative integer value usable as an array index
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Constant::Int(i) if *i >= 0 => Some(*i as usize),
            Constant::Long(l) if *l >= 0 => usize::try_from(*l).ok(),
            _ => None,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Constant::Str(_))
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Int(i) => write!(f, "{}", i),
            Constant::Long(l) => write!(f, "{}L", l),
            Constant::Float(v) => write!(f, "{:?}F", v),
            Constant::Double(v) => write!(f, "{:?}", v),
            Constant::Str(s) => write!(f, "\"{}\"", s),
            Constant::Null => f.write_str("null"),
            Constant::Class(name) => write!(f, "class \"{}\"", name),
        }
    }
}

/// Local variable with its declared type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Local {
    pub id: LocalId,
    pub name: String,
    pub ty: TypeRef,
}

impl Local {
    pub fn new(id: u32, name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            id: LocalId(id),
            name: name.into(),
            ty: TypeRef::new(ty),
        }
    }
}

impl fmt::Display for Local {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Target of an invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodRef {
    pub declaring_type: TypeRef,
    pub name: String,
    /// Full signature, `<decl: ret name(params)>`
    pub signature: String,
    pub return_type: TypeRef,
    /// Declared inside the analyzed application
    #[serde(default)]
    pub is_application: bool,
}

impl MethodRef {
    pub fn new(declaring_type: &str, return_type: &str, name: &str, params: &[&str]) -> Self {
        Self {
            declaring_type: TypeRef::new(declaring_type),
            name: name.to_string(),
            signature: format!(
                "<{}: {} {}({})>",
                declaring_type,
                return_type,
                name,
                params.join(",")
            ),
            return_type: TypeRef::new(return_type),
            is_application: false,
        }
    }

    pub fn application(mut self) -> Self {
        self.is_application = true;
        self
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature)
    }
}

/// Field reference (static fields carry no base)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    pub declaring_type: TypeRef,
    pub name: String,
    pub ty: TypeRef,
    #[serde(default)]
    pub is_static: bool,
}

impl FieldRef {
    pub fn new(declaring_type: &str, ty: &str, name: &str, is_static: bool) -> Self {
        Self {
            declaring_type: TypeRef::new(declaring_type),
            name: name.to_string(),
            ty: TypeRef::new(ty),
            is_static,
        }
    }

    /// `<decl: type name>`
    pub fn signature(&self) -> String {
        format!("<{}: {} {}>", self.declaring_type, self.ty, self.name)
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvokeKind {
    Static,
    Virtual,
    Interface,
    Special,
}

impl InvokeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvokeKind::Static => "staticinvoke",
            InvokeKind::Virtual => "virtualinvoke",
            InvokeKind::Interface => "interfaceinvoke",
            InvokeKind::Special => "specialinvoke",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeExpr {
    pub kind: InvokeKind,
    #[serde(default)]
    pub receiver: Option<Value>,
    pub method: MethodRef,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl InvokeExpr {
    pub fn new_static(method: MethodRef, args: Vec<Value>) -> Self {
        Self {
            kind: InvokeKind::Static,
            receiver: None,
            method,
            args,
        }
    }

    pub fn new_virtual(receiver: Value, method: MethodRef, args: Vec<Value>) -> Self {
        Self {
            kind: InvokeKind::Virtual,
            receiver: Some(receiver),
            method,
            args,
        }
    }

    /// Invocation dispatched on a receiver object
    pub fn is_instance(&self) -> bool {
        self.kind != InvokeKind::Static && self.receiver.is_some()
    }

    /// Static type of the invocation result
    pub fn result_type(&self) -> &TypeRef {
        &self.method.return_type
    }
}

impl fmt::Display for InvokeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.args.iter().map(|a| a.to_string()).collect();
        match &self.receiver {
            Some(recv) if self.kind != InvokeKind::Static => write!(
                f,
                "{} {}.{}({})",
                self.kind.as_str(),
                recv,
                self.method.signature,
                args.join(", ")
            ),
            _ => write!(
                f,
                "{} {}({})",
                self.kind.as_str(),
                self.method.signature,
                args.join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "expr", rename_all = "snake_case")]
pub enum Expr {
    Invoke(InvokeExpr),
    NewArray { element_type: TypeRef, size: Value },
    FieldRef(FieldRef),
    Cast { ty: TypeRef, inner: Value },
    ArrayRef { base: Local, index: Value },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Invoke(invoke) => write!(f, "{}", invoke),
            Expr::NewArray { element_type, size } => {
                write!(f, "newarray ({})[{}]", element_type, size)
            }
            Expr::FieldRef(field) => write!(f, "{}", field),
            Expr::Cast { ty, inner } => write!(f, "({}) {}", ty, inner),
            Expr::ArrayRef { base, index } => write!(f, "{}[{}]", base, index),
        }
    }
}

/// Operand or right-hand side of a statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "value", content = "of", rename_all = "snake_case")]
pub enum Value {
    Constant(Constant),
    Local(Local),
    Expr(Box<Expr>),
}

impl Value {
    pub fn local(local: &Local) -> Self {
        Value::Local(local.clone())
    }

    pub fn expr(expr: Expr) -> Self {
        Value::Expr(Box::new(expr))
    }

    pub fn as_local(&self) -> Option<&Local> {
        match self {
            Value::Local(local) => Some(local),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Value::Constant(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Value::Expr(expr) => Some(expr),
            _ => None,
        }
    }

    pub fn as_invoke(&self) -> Option<&InvokeExpr> {
        match self.as_expr() {
            Some(Expr::Invoke(invoke)) => Some(invoke),
            _ => None,
        }
    }

    /// Pre-order walk over this value and every nested operand
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Value)) {
        visit(self);
        if let Value::Expr(expr) = self {
            match expr.as_ref() {
                Expr::Invoke(invoke) => {
                    if let Some(recv) = &invoke.receiver {
                        recv.walk(visit);
                    }
                    for arg in &invoke.args {
                        arg.walk(visit);
                    }
                }
                Expr::NewArray { size, .. } => size.walk(visit),
                Expr::FieldRef(_) => {}
                Expr::Cast { inner, .. } => inner.walk(visit),
                Expr::ArrayRef { index, .. } => index.walk(visit),
            }
        }
    }

    /// Locals read when this value is evaluated
    pub fn used_locals(&self) -> Vec<&Local> {
        let mut locals = Vec::new();
        self.walk(&mut |value| match value {
            Value::Local(local) => locals.push(local),
            Value::Expr(expr) => {
                if let Expr::ArrayRef { base, .. } = expr.as_ref() {
                    locals.push(base);
                }
            }
            Value::Constant(_) => {}
        });
        locals
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Constant(c) => write!(f, "{}", c),
            Value::Local(local) => write!(f, "{}", local),
            Value::Expr(expr) => write!(f, "{}", expr),
        }
    }
}

/// Left-hand side of an assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "place", rename_all = "snake_case")]
pub enum Place {
    Local(Local),
    ArrayElement { base: Local, index: Value },
    Field(FieldRef),
}

impl Place {
    pub fn as_local(&self) -> Option<&Local> {
        match self {
            Place::Local(local) => Some(local),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stmt", rename_all = "snake_case")]
pub enum StmtKind {
    Assign { lhs: Place, rhs: Value },
    Invoke(InvokeExpr),
    Return { value: Option<Value> },
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub id: StmtId,
    #[serde(flatten)]
    pub kind: StmtKind,
}

impl Statement {
    pub fn new(id: u32, kind: StmtKind) -> Self {
        Self {
            id: StmtId(id),
            kind,
        }
    }

    /// Local written by this statement, if it is a plain local assignment
    pub fn defined_local(&self) -> Option<&Local> {
        match &self.kind {
            StmtKind::Assign { lhs, .. } => lhs.as_local(),
            _ => None,
        }
    }

    pub fn rhs(&self) -> Option<&Value> {
        match &self.kind {
            StmtKind::Assign { rhs, .. } => Some(rhs),
            _ => None,
        }
    }

    /// Invocation performed by this statement (bare or assigned)
    pub fn invoke_expr(&self) -> Option<&InvokeExpr> {
        match &self.kind {
            StmtKind::Invoke(invoke) => Some(invoke),
            StmtKind::Assign { rhs, .. } => rhs.as_invoke(),
            _ => None,
        }
    }

    /// Every value box of the statement, defs and uses, nested ones included
    pub fn values(&self) -> Vec<&Value> {
        let mut roots: Vec<&Value> = Vec::new();
        match &self.kind {
            StmtKind::Assign { lhs, rhs } => {
                if let Place::ArrayElement { index, .. } = lhs {
                    roots.push(index);
                }
                roots.push(rhs);
            }
            StmtKind::Invoke(invoke) => {
                roots.extend(invoke.receiver.iter());
                roots.extend(invoke.args.iter());
            }
            StmtKind::Return { value: Some(value) } => roots.push(value),
            StmtKind::Return { value: None } | StmtKind::Other => {}
        }
        let mut values = Vec::new();
        for root in roots {
            root.walk(&mut |value| values.push(value));
        }
        values
    }

    /// Invocations anywhere in the statement
    pub fn invocations(&self) -> Vec<&InvokeExpr> {
        let mut found: Vec<&InvokeExpr> = self
            .values()
            .into_iter()
            .filter_map(Value::as_invoke)
            .collect();
        if let StmtKind::Invoke(invoke) = &self.kind {
            found.insert(0, invoke);
        }
        found
    }

    /// Field references read or written by the statement
    pub fn field_refs(&self) -> Vec<&FieldRef> {
        let mut fields: Vec<&FieldRef> = self
            .values()
            .into_iter()
            .filter_map(|value| match value.as_expr() {
                Some(Expr::FieldRef(field)) => Some(field),
                _ => None,
            })
            .collect();
        if let StmtKind::Assign {
            lhs: Place::Field(field),
            ..
        } = &self.kind
        {
            fields.push(field);
        }
        fields
    }

    /// Locals read by the statement
    pub fn used_locals(&self) -> Vec<&Local> {
        let mut locals = Vec::new();
        match &self.kind {
            StmtKind::Assign { lhs, rhs } => {
                if let Place::ArrayElement { base, index } = lhs {
                    locals.push(base);
                    locals.extend(index.used_locals());
                }
                locals.extend(rhs.used_locals());
            }
            StmtKind::Invoke(invoke) => {
                if let Some(recv) = &invoke.receiver {
                    locals.extend(recv.used_locals());
                }
                for arg in &invoke.args {
                    locals.extend(arg.used_locals());
                }
            }
            StmtKind::Return { value: Some(value) } => locals.extend(value.used_locals()),
            StmtKind::Return { value: None } | StmtKind::Other => {}
        }
        locals
    }
}

/// Class as reported by the oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: TypeRef,
    #[serde(default)]
    pub is_application: bool,
    #[serde(default)]
    pub methods: Vec<MethodRef>,
    #[serde(default)]
    pub fields: Vec<FieldRef>,
}

impl ClassInfo {
    pub fn new(name: &str, is_application: bool) -> Self {
        Self {
            name: TypeRef::new(name),
            is_application,
            methods: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn package(&self) -> &str {
        self.name.package()
    }

    pub fn find_method(&self, signature: &str) -> Option<&MethodRef> {
        self.methods.iter().find(|m| m.signature == signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_display_follows_ir_printer() {
        assert_eq!(Constant::string("gt").to_string(), "\"gt\"");
        assert_eq!(Constant::Long(5000).to_string(), "5000L");
        assert_eq!(Constant::Double(20.0).to_string(), "20.0");
        assert_eq!(Constant::Float(1.5).to_string(), "1.5F");
        assert_eq!(Constant::Int(3).to_string(), "3");
    }

    #[test]
    fn test_type_ref_names() {
        let ty = TypeRef::new("io.github.privacystreamsevents.core.AudioEvent$AudioEventBuilder");
        assert_eq!(ty.short_name(), "AudioEvent$AudioEventBuilder");
        assert_eq!(ty.package(), "io.github.privacystreamsevents.core");
        assert!(ty.is_reference());
        assert!(!TypeRef::new("long").is_reference());
        assert!(!TypeRef::new("long[]").is_reference());
    }

    #[test]
    fn test_method_signature_format() {
        let m = MethodRef::new("java.lang.Double", "java.lang.Double", "valueOf", &["double"]);
        assert_eq!(m.signature, "<java.lang.Double: java.lang.Double valueOf(double)>");
    }

    #[test]
    fn test_statement_used_locals_include_array_base() {
        let arr = Local::new(0, "r1", "long[]");
        let stmt = Statement::new(
            1,
            StmtKind::Assign {
                lhs: Place::ArrayElement {
                    base: arr.clone(),
                    index: Value::Constant(Constant::Int(0)),
                },
                rhs: Value::Constant(Constant::Long(10)),
            },
        );
        let used: Vec<_> = stmt.used_locals().into_iter().map(|l| l.id).collect();
        assert_eq!(used, vec![arr.id]);
        assert!(stmt.defined_local().is_none());
    }

    #[test]
    fn test_nested_invocations_are_found() {
        let inner = InvokeExpr::new_static(
            MethodRef::new("java.lang.Long", "java.lang.Long", "valueOf", &["long"]),
            vec![Value::Constant(Constant::Long(1))],
        );
        let outer = InvokeExpr::new_static(
            MethodRef::new("a.B", "void", "take", &["java.lang.Long"]),
            vec![Value::expr(Expr::Invoke(inner))],
        );
        let stmt = Statement::new(0, StmtKind::Invoke(outer));
        assert_eq!(stmt.invocations().len(), 2);
    }
}
