use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use tresave::schema::Type;
use tresave::{Compiler, Schema, Value};

fn schema() -> Schema {
    Schema::builder()
        .table("dept", |t| {
            t.column("deptno", Type::I64)
                .column("dname", Type::String)
                .primary_key(&["deptno"])
        })
        .table("remark", |t| {
            t.column("note", Type::String).column("deptno", Type::I64)
        })
        .table("car_usage", |t| {
            t.column("car_nr", Type::String)
                .column("empno", Type::I64)
                .primary_key(&["car_nr", "empno"])
        })
        .build()
}

#[test]
fn delete_by_id() {
    let schema = schema();
    let compiler = Compiler::new(&schema);

    let delete = compiler.delete("dept", 10, None, None).unwrap();

    assert_eq!(delete.tresql, "-dept[deptno = ?]");
    assert_eq!(
        delete.params,
        IndexMap::<String, Value>::from_iter([("1".to_string(), Value::I64(10))])
    );
}

#[test]
fn delete_with_filter_and_params() {
    let schema = schema();
    let compiler = Compiler::new(&schema);

    let extra = IndexMap::from_iter([("2".to_string(), Value::from("LOCKED"))]);
    let delete = compiler
        .delete("dept", 10, Some("dname != ?"), Some(extra))
        .unwrap();

    assert_eq!(delete.tresql, "-dept[deptno = ? & (dname != ?)]");
    assert_eq!(
        delete.params,
        IndexMap::<String, Value>::from_iter([
            ("1".to_string(), Value::I64(10)),
            ("2".to_string(), Value::from("LOCKED")),
        ])
    );
}

#[test]
fn delete_with_alias() {
    let schema = schema();
    let compiler = Compiler::new(&schema);

    let delete = compiler.delete("dept d", 10, None, None).unwrap();

    assert_eq!(delete.tresql, "-dept d[deptno = ?]");
}

#[test]
fn delete_requires_a_single_column_key() {
    let schema = schema();
    let compiler = Compiler::new(&schema);

    let err = compiler.delete("remark", 10, None, None).unwrap_err();
    assert!(err.is_no_primary_key());

    // composite keys do not qualify either
    let err = compiler.delete("car_usage", 10, None, None).unwrap_err();
    assert!(err.is_no_primary_key());
}

#[test]
fn delete_of_missing_table_fails() {
    let schema = schema();
    let compiler = Compiler::new(&schema);

    let err = compiler.delete("warehouse", 10, None, None).unwrap_err();
    assert!(err.is_table_not_found());
}

#[test]
fn delete_of_malformed_descriptor_fails() {
    let schema = schema();
    let compiler = Compiler::new(&schema);

    let err = compiler.delete("dept[", 10, None, None).unwrap_err();
    assert!(err.is_bad_descriptor());
}
