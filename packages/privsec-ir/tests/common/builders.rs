//! Test data builders
//!
//! `BodyBuilder` appends statements in program order and allocates local and
//! statement ids, so tests read like the IR they model.

use privsec_ir::shared::models::{
    Constant, DefUseIndex, Expr, FieldRef, InvokeExpr, Local, MethodBody, MethodRef, Place, Statement,
    StmtId, StmtKind, TypeRef, Value,
};

/// Builder for MethodBody
#[derive(Debug)]
pub struct BodyBuilder {
    method: MethodRef,
    statements: Vec<Statement>,
    next_stmt: u32,
    next_local: u32,
}

impl BodyBuilder {
    pub fn new(method: MethodRef) -> Self {
        Self {
            method,
            statements: Vec::new(),
            next_stmt: 0,
            next_local: 0,
        }
    }

    /// Fresh local named `$r<n>`
    pub fn local(&mut self, ty: &str) -> Local {
        let id = self.next_local;
        self.next_local += 1;
        Local::new(id, format!("$r{}", id), ty)
    }

    fn push(&mut self, kind: StmtKind) -> StmtId {
        let id = self.next_stmt;
        self.next_stmt += 1;
        self.statements.push(Statement::new(id, kind));
        StmtId(id)
    }

    pub fn assign(&mut self, lhs: &Local, rhs: Value) -> StmtId {
        self.push(StmtKind::Assign {
            lhs: Place::Local(lhs.clone()),
            rhs,
        })
    }

    /// `array[index] = rhs`
    pub fn store(&mut self, array: &Local, index: i32, rhs: Value) -> StmtId {
        self.push(StmtKind::Assign {
            lhs: Place::ArrayElement {
                base: array.clone(),
                index: Value::Constant(Constant::Int(index)),
            },
            rhs,
        })
    }

    pub fn invoke(&mut self, invoke: InvokeExpr) -> StmtId {
        self.push(StmtKind::Invoke(invoke))
    }

    /// Statement the IR model does not describe (`new`, `<init>`, gotos)
    pub fn other(&mut self) -> StmtId {
        self.push(StmtKind::Other)
    }

    pub fn ret(&mut self) -> StmtId {
        self.push(StmtKind::Return { value: None })
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn method(&self) -> &MethodRef {
        &self.method
    }

    /// Body with last-def chains
    pub fn build(self) -> MethodBody {
        MethodBody::straight_line(self.method, self.statements).unwrap()
    }

    /// Body with an explicit def/use index
    pub fn build_with(self, index: DefUseIndex) -> MethodBody {
        MethodBody::new(self.method, self.statements, index).unwrap()
    }
}

// ============================================================
// Value helpers
// ============================================================

pub fn string(s: &str) -> Value {
    Value::Constant(Constant::string(s))
}

pub fn long(n: i64) -> Value {
    Value::Constant(Constant::Long(n))
}

pub fn int(n: i32) -> Value {
    Value::Constant(Constant::Int(n))
}

pub fn double(x: f64) -> Value {
    Value::Constant(Constant::Double(x))
}

pub fn local(l: &Local) -> Value {
    Value::local(l)
}

pub fn call_static(method: MethodRef, args: Vec<Value>) -> Value {
    Value::expr(Expr::Invoke(InvokeExpr::new_static(method, args)))
}

pub fn call_virtual(receiver: &Local, method: MethodRef, args: Vec<Value>) -> Value {
    Value::expr(Expr::Invoke(InvokeExpr::new_virtual(
        Value::local(receiver),
        method,
        args,
    )))
}

pub fn new_array(element_type: &str, size: i32) -> Value {
    Value::expr(Expr::NewArray {
        element_type: TypeRef::new(element_type),
        size: int(size),
    })
}

pub fn static_field(declaring: &str, ty: &str, name: &str) -> Value {
    Value::expr(Expr::FieldRef(FieldRef::new(declaring, ty, name, true)))
}
