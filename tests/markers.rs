use subprim::error::Error;
use subprim::primitive::catalog::{MosParams, MOS};
use subprim::signal::Port;
use subprim::{concat, connect, elab};

struct NotConnectable;

struct Wire(#[allow(dead_code)] u32);

struct Bus;

#[test]
fn test_mark_unconnectable_type_fails() {
    let res = concat::mark_concatable::<NotConnectable>();
    assert!(matches!(res, Err(Error::Capability(_))));
    // A failed marking leaves no record behind.
    assert!(!concat::is_concatable(&NotConnectable));
}

#[test]
fn test_mark_connectable_type() {
    connect::register_connectable::<Wire>();
    assert!(connect::is_connectable(&Wire(0)));

    concat::mark_concatable::<Wire>().expect("failed to mark connectable type");
    assert!(concat::is_concatable(&Wire(3)));
}

#[test]
fn test_marking_is_idempotent() {
    connect::register_connectable::<Bus>();
    concat::mark_concatable::<Bus>().expect("first marking failed");
    concat::mark_concatable::<Bus>().expect("second marking failed");
    assert!(concat::is_concatable(&Bus));
}

#[test]
fn test_port_is_connectable() {
    assert!(connect::is_connectable(&Port::new("p")));
    concat::mark_concatable::<Port>().expect("ports should be markable");
    assert!(concat::is_concatable(&Port::new("n")));
}

#[test]
fn test_unmarked_types_are_not_concatable() {
    assert!(!concat::is_concatable(&42i32));
    assert!(!concat::is_concatable(&"wire"));
}

#[test]
fn test_calls_are_instantiable() {
    let call = MOS.call(MosParams::new(1, 1)).expect("failed to call Mos");
    assert!(elab::is_instantiable(&call));
    assert!(!elab::is_instantiable(&42i32));
}

#[test]
fn test_mark_instantiable() {
    struct CustomCell;
    assert!(!elab::is_instantiable(&CustomCell));
    elab::mark_instantiable::<CustomCell>();
    elab::mark_instantiable::<CustomCell>();
    assert!(elab::is_instantiable(&CustomCell));
}
