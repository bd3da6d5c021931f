use tresave_core::schema::{Schema, Type};

fn schema() -> Schema {
    Schema::builder()
        .table("dept", |t| {
            t.column("deptno", Type::I64)
                .column("dname", Type::String)
                .primary_key(&["deptno"])
        })
        .table("emp", |t| {
            t.column("empno", Type::I64)
                .column("ename", Type::String)
                .column("deptno", Type::I64)
                .column("mgr", Type::I64)
                .primary_key(&["empno"])
                .foreign_key(&["deptno"], "dept", &["deptno"])
                .foreign_key(&["mgr"], "emp", &["empno"])
        })
        .table("car_usage", |t| {
            t.column("car_nr", Type::String)
                .column("empno", Type::I64)
                .primary_key(&["car_nr", "empno"])
        })
        .value_expr("emp", "ename", "upper(:ename)")
        .build()
}

#[test]
fn table_lookup() {
    let schema = schema();
    assert!(schema.table("dept").is_some());
    assert!(schema.table("bonus").is_none());
}

#[test]
fn column_lookup() {
    let schema = schema();
    let emp = schema.table("emp").unwrap();
    assert_eq!(emp.col("ename").map(|c| c.name.as_str()), Some("ename"));
    assert!(emp.col("salary").is_none());
}

#[test]
fn single_key() {
    let schema = schema();
    assert_eq!(schema.table("dept").unwrap().single_key(), Some("deptno"));
    // composite keys do not qualify
    assert_eq!(schema.table("car_usage").unwrap().single_key(), None);
}

#[test]
fn refs_to_parent() {
    let schema = schema();
    let emp = schema.table("emp").unwrap();
    let refs: Vec<_> = emp.refs_to("dept").collect();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].cols, ["deptno"]);
}

#[test]
fn ref_table_by_columns() {
    let schema = schema();
    let emp = schema.table("emp").unwrap();
    assert_eq!(emp.ref_table(&["deptno"]), Some("dept"));
    assert_eq!(emp.ref_table(&["mgr"]), Some("emp"));
    assert_eq!(emp.ref_table(&["ename"]), None);
}

#[test]
fn value_expr_default_and_override() {
    let schema = schema();
    assert_eq!(schema.value_expr("dept", "dname"), ":dname");
    assert_eq!(schema.value_expr("emp", "ename"), "upper(:ename)");
}
