/// Builds an ordered [`Record`](crate::stmt::Record) from `key => value`
/// pairs. Field order is the order the pairs are written in.
#[macro_export]
macro_rules! record {
    () => {
        $crate::stmt::Record::new()
    };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut record = $crate::stmt::Record::new();
        $( record.insert($key, $crate::stmt::Value::from($value)); )+
        record
    }};
}
