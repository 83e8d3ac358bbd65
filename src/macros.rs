#[macro_export]
macro_rules! summary {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle the undefined/missing marker
    (undefined) => {
        $crate::Value::Undefined
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::summary!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::SummaryMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::SummaryMap::new();
        $(
            object.insert($key.to_string(), $crate::summary!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any expression, converted through serde
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
