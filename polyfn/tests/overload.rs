//! End-to-end overload scenarios against the public API.

use pretty_assertions::assert_eq;

use polyfn::{Arg, DispatchError, Marker, OverloadBuilder, Param, Tag, Value};

fn int(n: i64) -> Value {
    Value::Int(n)
}

fn str_(s: &str) -> Value {
    Value::from(s)
}

/// Scenario A: two exact overloads selected by argument types.
#[test]
fn test_exact_overloads_select_by_argument_types() {
    let adder = OverloadBuilder::new()
        .add([Param::of(Tag::Int), Param::of(Tag::Int)], |args: Vec<Value>| {
            Value::Int(args[0].as_int().unwrap_or(0) + args[1].as_int().unwrap_or(0))
        })
        .unwrap()
        .add([Param::of(Tag::Str), Param::of(Tag::Str)], |args: Vec<Value>| {
            let mut joined = args[0].as_str().unwrap_or_default().to_string();
            joined.push('-');
            joined.push_str(args[1].as_str().unwrap_or_default());
            Value::Str(joined)
        })
        .unwrap()
        .finalize();

    assert_eq!(adder.call(vec![int(1), int(2)]).unwrap(), int(3));
    assert_eq!(adder.call(vec![str_("a"), str_("b")]).unwrap(), str_("a-b"));
}

/// Scenario B: a variadic overload matches any repetition count.
#[test]
fn test_variadic_overload_matches_any_repetition_count() {
    let sum = OverloadBuilder::new()
        .add([Param::variadic([Tag::Int])], |args: Vec<Value>| {
            Value::Int(args.iter().filter_map(Value::as_int).sum())
        })
        .unwrap()
        .finalize();

    assert_eq!(sum.call(vec![int(1), int(2), int(3), int(4)]).unwrap(), int(10));
    assert_eq!(sum.call(vec![int(7)]).unwrap(), int(7));
    assert_eq!(
        sum.call((1..=9).map(int).collect()).unwrap(),
        int(45),
    );
}

/// Scenario C: an unmatched signature is a structured dispatch failure.
#[test]
fn test_unmatched_call_fails_with_dispatch_error() {
    let only_ints = OverloadBuilder::new()
        .add([Param::of(Tag::Int), Param::of(Tag::Int)], |_: Vec<Value>| Value::Unit)
        .unwrap()
        .finalize();

    let err = only_ints.call(vec![int(1), str_("x")]).unwrap_err();
    let DispatchError::NoMatch { signature, arity } = err;
    assert_eq!(arity, 2);
    assert_eq!(signature.to_string(), "int, str");
}

/// Scenario D: a typed placeholder omits the value; the handler supplies
/// its own default.
#[test]
fn test_typed_placeholder_lets_handler_default() {
    let add = OverloadBuilder::new()
        .add([Param::of(Tag::Int), Param::of(Tag::Int)], |args: Vec<Value>| {
            let a = args[0].as_int().unwrap_or(0);
            let b = args[1].as_int().unwrap_or(5);
            Value::Int(a + b)
        })
        .unwrap()
        .finalize();

    let result = add
        .call_with(vec![Arg::Value(int(1)), Arg::placeholder(Tag::Int)])
        .unwrap();
    assert_eq!(result, int(6));
}

/// Distinct host classes dispatch to distinct handlers.
#[test]
fn test_class_identity_selects_per_class_handlers() {
    struct Circle {
        radius: f64,
    }
    struct Square {
        side: f64,
    }

    let area = OverloadBuilder::new()
        .add([Param::of(polyfn::TypeIdentity::class::<Circle>())], |args: Vec<Value>| {
            let circle = args[0].as_object().and_then(|o| o.downcast_ref::<Circle>());
            Value::Float(circle.map_or(0.0, |c| std::f64::consts::PI * c.radius * c.radius))
        })
        .unwrap()
        .add([Param::of(polyfn::TypeIdentity::class::<Square>())], |args: Vec<Value>| {
            let square = args[0].as_object().and_then(|o| o.downcast_ref::<Square>());
            Value::Float(square.map_or(0.0, |s| s.side * s.side))
        })
        .unwrap()
        .finalize();

    let circle = area.call(vec![Value::object(Circle { radius: 1.0 })]).unwrap();
    assert_eq!(circle, Value::Float(std::f64::consts::PI));

    let square = area.call(vec![Value::object(Square { side: 3.0 })]).unwrap();
    assert_eq!(square, Value::Float(9.0));
}

/// A definition mixing a fixed prefix with a variadic tail matches any
/// tail length, including via the below-bound fallback path.
#[test]
fn test_fixed_prefix_with_variadic_tail() {
    let label_sum = OverloadBuilder::new()
        .add(
            [Param::of(Tag::Str), Param::variadic([Tag::Int])],
            |args: Vec<Value>| {
                let label = args[0].as_str().unwrap_or_default().to_string();
                let total: i64 = args.iter().skip(1).filter_map(Value::as_int).sum();
                Value::Str(format!("{label}={total}"))
            },
        )
        .unwrap()
        .finalize();

    assert_eq!(
        label_sum.call(vec![str_("t"), int(1), int(2)]).unwrap(),
        str_("t=3")
    );
    assert_eq!(
        label_sum
            .call(vec![str_("t"), int(1), int(2), int(3), int(4)])
            .unwrap(),
        str_("t=10")
    );
}

/// Variadic markers are definition-time only.
#[test]
fn test_variadic_marker_is_rejected_at_call_time() {
    let sum = OverloadBuilder::new()
        .add([Param::variadic([Tag::Int])], |_: Vec<Value>| Value::Unit)
        .unwrap()
        .finalize();

    let err = sum
        .call_with(vec![Arg::Marker(Marker::variadic([Tag::Int]))])
        .unwrap_err();
    assert_eq!(err, polyfn::Error::Config(polyfn::ConfigError::VariadicAtCall));
}

/// A finalized dispatcher is shared across threads without locking.
#[test]
fn test_finalized_dispatcher_dispatches_concurrently() {
    let sum = OverloadBuilder::new()
        .add([Param::variadic([Tag::Int])], |args: Vec<Value>| {
            Value::Int(args.iter().filter_map(Value::as_int).sum())
        })
        .unwrap()
        .finalize();

    let shared = std::sync::Arc::new(sum);
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let dispatcher = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || {
                for i in 0..100 {
                    let result = dispatcher.call(vec![int(t), int(i)]).unwrap();
                    assert_eq!(result, int(t + i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
