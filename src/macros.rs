macro_rules! invalid_format {
    ($s:expr) => {
        $crate::types::Error::InvalidFormat($s.into())
    };
    ($fmt:expr, $($args:tt)*) => {
        $crate::types::Error::InvalidFormat(format!($fmt, $($args)*).into())
    };
}

macro_rules! unexpected_eof {
    ($s:expr) => {
        $crate::types::Error::UnexpectedEndOfData($s.into())
    };
    ($fmt:expr, $($args:tt)*) => {
        $crate::types::Error::UnexpectedEndOfData(format!($fmt, $($args)*).into())
    };
}
