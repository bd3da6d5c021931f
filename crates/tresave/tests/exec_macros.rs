use tresave::macros::{child_ids, edit_target, upsert_action, IdRegistry, SaveAction};
use tresave::{record, Value};

#[test]
fn registry_tracks_last_id_per_name() {
    let mut ids = IdRegistry::new();
    ids.register("dept", 10);
    ids.register("dept", 20);
    ids.register("emp", 7);

    assert_eq!(ids.last("dept"), Some(&Value::I64(20)));
    assert_eq!(ids.last("emp"), Some(&Value::I64(7)));
    assert_eq!(ids.last("car"), None);
}

#[test]
fn id_ref_id_reregisters_under_the_new_name() {
    let mut ids = IdRegistry::new();
    ids.register("dept", 10);

    assert_eq!(ids.id_ref_id("dept", "car"), Some(Value::I64(10)));
    // descendants of the car statement now resolve :#car as well
    assert_eq!(ids.last("car"), Some(&Value::I64(10)));
}

#[test]
fn id_ref_id_of_unknown_name_is_none() {
    let mut ids = IdRegistry::new();
    assert_eq!(ids.id_ref_id("dept", "car"), None);
    assert_eq!(ids.last("car"), None);
}

#[test]
fn upsert_dispatches_on_a_non_null_key() {
    let env = record! { "empno" => 1, "ename" => "A" };
    assert_eq!(upsert_action(&env, Some("empno")), SaveAction::Update);

    let env = record! { "empno" => Value::Null, "ename" => "A" };
    assert_eq!(upsert_action(&env, Some("empno")), SaveAction::Insert);

    let env = record! { "ename" => "A" };
    assert_eq!(upsert_action(&env, Some("empno")), SaveAction::Insert);

    assert_eq!(upsert_action(&env, None), SaveAction::Insert);
}

#[test]
fn edit_target_must_be_an_object() {
    let value = Value::Record(record! { "deptno" => 10 });
    assert!(edit_target(&value, "dept").is_ok());

    let err = edit_target(&Value::I64(10), "dept").unwrap_err();
    assert!(err.is_shape());
}

#[test]
fn child_ids_collects_non_null_keys() {
    let children = Value::from(vec![
        record! { "empno" => 1, "ename" => "A" },
        record! { "empno" => Value::Null, "ename" => "B" },
        record! { "ename" => "C" },
        record! { "empno" => 4 },
    ]);

    let ids = child_ids(&children, "empno").unwrap();
    assert_eq!(ids, [Value::I64(1), Value::I64(4)]);
}

#[test]
fn child_ids_requires_a_sequence() {
    let err = child_ids(&Value::Record(record! { "empno" => 1 }), "empno").unwrap_err();
    assert!(err.is_shape());
}

#[test]
fn child_ids_requires_object_elements() {
    let children = Value::from(vec![Value::I64(1), Value::I64(2)]);
    let err = child_ids(&children, "empno").unwrap_err();
    assert!(err.is_shape());
}
