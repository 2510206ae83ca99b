#[allow(unused_macros)]
macro_rules! evals {
    ($($lhs:expr => $rhs:expr),+) => {{
         $(
            assert_eq!(sexpr::eval(&$lhs), Ok($rhs));
         )+
    }};
}

#[allow(unused_macros)]
macro_rules! prints {
    ($($lhs:expr => $rhs:expr),+) => {{
         $(
            assert_eq!(sexpr::eval(&$lhs).unwrap().to_string(), $rhs);
         )+
    }};
}

#[allow(unused_macros)]
macro_rules! fails {
    ($($lhs:expr => $rhs:expr),+) => {{
         $(
            assert_eq!(sexpr::eval(&$lhs), Err($rhs));
         )+
    }};
}
