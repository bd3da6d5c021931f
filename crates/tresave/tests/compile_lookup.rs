use pretty_assertions::assert_eq;
use tresave::schema::Type;
use tresave::{record, Compiler, Schema};

// emp.dept is a single-column reference to dept: a nested `dept` object is
// edited first and its id bound to the referencing column.
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
                .column("dept", Type::I64)
                .primary_key(&["empno"])
                .foreign_key(&["dept"], "dept", &["deptno"])
        })
        .build()
}

#[test]
fn insert_with_lookup_edit() {
    let schema = schema();
    let compiler = Compiler::new(&schema);

    let obj = record! {
        "dept" => record! { "deptno" => 10, "dname" => "Z" },
        "ename" => "A",
    };
    let tresql = compiler.insert("emp", &obj, None).unwrap();

    assert_eq!(
        tresql,
        "[:dept = |_lookup_edit('dept', 'deptno', \
         +dept{deptno, dname}[:deptno, :dname], \
         =dept[deptno = :deptno]{dname}[:dname]), \
         +emp{dept, ename}[:dept, :ename]]"
    );
}

#[test]
fn update_with_lookup_edit() {
    let schema = schema();
    let compiler = Compiler::new(&schema);

    let obj = record! {
        "empno" => 1,
        "ename" => "A",
        "dept" => record! { "deptno" => 10, "dname" => "Z" },
    };
    let tresql = compiler.update("emp", &obj, None).unwrap();

    assert_eq!(
        tresql,
        "[:dept = |_lookup_edit('dept', 'deptno', \
         +dept{deptno, dname}[:deptno, :dname], \
         =dept[deptno = :deptno]{dname}[:dname]), \
         =emp[empno = :empno]{ename, dept}[:ename, :dept]]"
    );
}

#[test]
fn lookup_update_degrades_to_null_without_columns() {
    let schema = schema();
    let compiler = Compiler::new(&schema);

    // the looked-up object carries only the key: nothing to update
    let obj = record! {
        "dept" => record! { "deptno" => 10 },
        "ename" => "A",
    };
    let tresql = compiler.insert("emp", &obj, None).unwrap();

    assert_eq!(
        tresql,
        "[:dept = |_lookup_edit('dept', 'deptno', \
         +dept{deptno}[:deptno], null), \
         +emp{dept, ename}[:dept, :ename]]"
    );
}

#[test]
fn lookup_key_is_null_for_composite_keys() {
    let schema = Schema::builder()
        .table("dept", |t| {
            t.column("deptno", Type::I64)
                .column("dname", Type::String)
                .primary_key(&["deptno", "dname"])
        })
        .table("emp", |t| {
            t.column("empno", Type::I64)
                .column("ename", Type::String)
                .column("dept", Type::I64)
                .primary_key(&["empno"])
                .foreign_key(&["dept"], "dept", &["deptno"])
        })
        .build();
    let compiler = Compiler::new(&schema);

    let obj = record! {
        "dept" => record! { "deptno" => 10, "dname" => "Z" },
        "ename" => "A",
    };
    let tresql = compiler.insert("emp", &obj, None).unwrap();

    assert_eq!(
        tresql,
        "[:dept = |_lookup_edit('dept', null, \
         +dept{deptno, dname}[:deptno, :dname], null), \
         +emp{dept, ename}[:dept, :ename]]"
    );
}
