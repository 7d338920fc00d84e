//! Test fixtures
//!
//! Provides statement traces shaped like compiled PrivacyStreams-Events
//! apps: fluent builder chains, listener registrations and a small sample
//! application with library and event-library classes.

use privsec_ir::features::program_facts::InMemoryFacts;
use privsec_ir::shared::constants::target_api;
use privsec_ir::shared::models::{ClassInfo, InvokeExpr, Local, MethodRef, Value};

use super::builders::*;

pub const MAIN_ACTIVITY: &str = "com.example.app.MainActivity";
pub const EVENT_HELPER: &str = "io.github.privacystreamsevents.core.Helper";
pub const OPERATORS: &str = "io.github.privacystreamsevents.core.Operators";
pub const EVENT_CALLBACK: &str = "io.github.privacystreamsevents.core.EventCallback";
pub const EVENT_TYPE: &str = "io.github.privacystreamsevents.core.EventType";

pub const AUDIO_DESCRIPTION: &str = "The app checks when avgLoudness is gt 20.0dB.";
pub const CALLER_DESCRIPTION: &str = "The app checks when caller is from a certain phone number.";

/// Setter argument as written in app source
#[derive(Debug, Clone)]
pub enum Arg {
    /// String literal passed directly
    Str(&'static str),
    /// Any operand passed directly
    Lit(Value),
    /// `Double.valueOf(x)` stored in a temporary first
    Boxed(f64),
    /// Built-in field function (`Operators.calcSpeed()`)
    Function(&'static str),
    /// `new long[] { .. }` vararg array
    Longs(Vec<i64>),
    /// Static `java.lang.Long` field read into a temporary
    StaticField(&'static str, &'static str),
}

impl Arg {
    fn param_type(&self) -> &'static str {
        match self {
            Arg::Str(_) => "java.lang.String",
            Arg::Lit(_) => "java.lang.Object",
            Arg::Boxed(_) => "java.lang.Double",
            Arg::Function(_) => target_api::FUNCTION_TYPE,
            Arg::Longs(_) => "long[]",
            Arg::StaticField(..) => "java.lang.Long",
        }
    }

    /// Emit the statements computing the argument and return its operand
    fn lower(&self, b: &mut BodyBuilder) -> Value {
        match self {
            Arg::Str(s) => string(s),
            Arg::Lit(v) => v.clone(),
            Arg::Boxed(x) => {
                let t = b.local("java.lang.Double");
                b.assign(&t, call_static(double_value_of(), vec![double(*x)]));
                local(&t)
            }
            Arg::Function(name) => {
                let t = b.local(target_api::FUNCTION_TYPE);
                let function = MethodRef::new(OPERATORS, target_api::FUNCTION_TYPE, name, &[]);
                b.assign(&t, call_static(function, vec![]));
                local(&t)
            }
            Arg::Longs(values) => {
                let arr = b.local("long[]");
                b.assign(&arr, new_array("long", values.len() as i32));
                for (i, v) in values.iter().enumerate() {
                    b.store(&arr, i as i32, long(*v));
                }
                local(&arr)
            }
            Arg::StaticField(declaring, name) => {
                let t = b.local("java.lang.Long");
                b.assign(&t, static_field(declaring, "java.lang.Long", name));
                local(&t)
            }
        }
    }
}

pub fn double_value_of() -> MethodRef {
    MethodRef::new("java.lang.Double", "java.lang.Double", "valueOf", &["double"])
}

pub fn log_d() -> MethodRef {
    MethodRef::new(
        "android.util.Log",
        "int",
        "d",
        &["java.lang.String", "java.lang.String"],
    )
}

/// `UQI.addEventListener(EventType, EventCallback)`
pub fn listener_method() -> MethodRef {
    MethodRef::new(
        target_api::ENTRY_POINT_CLASS,
        "void",
        "addEventListener",
        &[EVENT_TYPE, EVENT_CALLBACK],
    )
}

/// Library entry-point class as the front end reports it
pub fn uqi_class() -> ClassInfo {
    let mut class = ClassInfo::new(target_api::ENTRY_POINT_CLASS, false);
    class.methods.push(listener_method());
    class
}

/// `new <Builder>().setA(..).setB(..)...build()`; returns the built event local
pub fn event_chain(b: &mut BodyBuilder, builder_type: &str, calls: &[(&str, Vec<Arg>)]) -> Local {
    let mut current = b.local(builder_type);
    b.other();

    for (name, args) in calls {
        let params: Vec<&str> = args.iter().map(Arg::param_type).collect();
        let operands: Vec<Value> = args.iter().map(|arg| arg.lower(b)).collect();
        let setter = MethodRef::new(builder_type, builder_type, name, &params);
        let next = b.local(builder_type);
        b.assign(&next, call_virtual(&current, setter, operands));
        current = next;
    }

    let event_type = builder_type.split('$').next().unwrap_or(builder_type);
    let event = b.local(event_type);
    let build = MethodRef::new(builder_type, event_type, "build", &[]);
    b.assign(&event, call_virtual(&current, build, vec![]));
    event
}

/// `uqi.addEventListener(event, new Callback())`
pub fn listen(b: &mut BodyBuilder, uqi: &Local, event: &Local) {
    let callback = b.local(EVENT_CALLBACK);
    b.other();
    b.invoke(InvokeExpr::new_virtual(
        local(uqi),
        listener_method(),
        vec![local(event), local(&callback)],
    ));
}

pub fn audio_calls() -> Vec<(&'static str, Vec<Arg>)> {
    vec![
        (
            "setField",
            vec![Arg::Str("avgLoudness"), Arg::Function("calcAvgLoudness")],
        ),
        ("setComparator", vec![Arg::Str("gt")]),
        ("setFieldConstraints", vec![Arg::Boxed(20.0)]),
        ("setSamplingMode", vec![Arg::Lit(long(1000))]),
    ]
}

pub fn caller_calls() -> Vec<(&'static str, Vec<Arg>)> {
    vec![
        (
            "setField",
            vec![Arg::Str("caller"), Arg::Function("callerIdentification")],
        ),
        ("setComparator", vec![Arg::Str("from")]),
        ("setPhoneNumber", vec![Arg::Str("123")]),
    ]
}

pub fn on_create() -> MethodRef {
    MethodRef::new(MAIN_ACTIVITY, "void", "onCreate", &["android.os.Bundle"]).application()
}

pub fn log_twice() -> MethodRef {
    MethodRef::new(MAIN_ACTIVITY, "void", "logTwice", &[]).application()
}

pub fn on_destroy() -> MethodRef {
    MethodRef::new(MAIN_ACTIVITY, "void", "onDestroy", &[]).application()
}

pub fn helper_compute() -> MethodRef {
    MethodRef::new(EVENT_HELPER, "void", "compute", &[]).application()
}

pub fn helper_missing() -> MethodRef {
    MethodRef::new(EVENT_HELPER, "void", "missing", &[]).application()
}

/// Audio and caller events registered on one UQI
pub fn on_create_builder() -> BodyBuilder {
    let mut b = BodyBuilder::new(on_create());
    let uqi = b.local(target_api::ENTRY_POINT_CLASS);
    b.other();

    let audio = event_chain(&mut b, target_api::AUDIO_BUILDER, &audio_calls());
    listen(&mut b, &uqi, &audio);

    let contact = event_chain(&mut b, target_api::CONTACT_BUILDER, &caller_calls());
    listen(&mut b, &uqi, &contact);

    b.ret();
    b
}

/// `Log.d("tag", "a"); Log.d("tag", "b"); Log.d("tag", "a");`
pub fn log_twice_builder() -> BodyBuilder {
    let mut b = BodyBuilder::new(log_twice());
    for msg in ["a", "b", "a"] {
        b.invoke(InvokeExpr::new_static(
            log_d(),
            vec![string("tag"), string(msg)],
        ));
    }
    b.ret();
    b
}

/// Application with one listener-registering method, a logging method, a
/// bodiless method and an event-library helper class
pub fn sample_app() -> InMemoryFacts {
    let mut main = ClassInfo::new(MAIN_ACTIVITY, true);
    main.methods = vec![on_create(), log_twice(), on_destroy()];

    let mut helper = ClassInfo::new(EVENT_HELPER, true);
    helper.methods = vec![helper_compute(), helper_missing()];

    let mut compute = BodyBuilder::new(helper_compute());
    compute.invoke(InvokeExpr::new_static(
        log_d(),
        vec![string("helper"), string("compute")],
    ));
    compute.ret();

    let mut facts = InMemoryFacts::new();
    facts.add_class(main);
    facts.add_class(helper);
    facts.add_class(uqi_class());
    facts.add_body(on_create_builder().build());
    facts.add_body(log_twice_builder().build());
    facts.add_body(compute.build());
    facts
}
