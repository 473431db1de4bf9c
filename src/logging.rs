//! Internal logging shims.
//!
//! With the `log` feature these forward to the `log` facade; without it they
//! expand to nothing and the crate carries no logging dependency.

macro_rules! isb_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            ::log::debug!($($arg)+);
        }
    };
}

macro_rules! isb_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            ::log::trace!($($arg)+);
        }
    };
}
