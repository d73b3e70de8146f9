//! crates/flaglog/src/macros.rs
//! Formatting macros that skip rendering for messages no channel receives.

/// Routes a formatted message through a [`Router`](crate::Router).
///
/// The format arguments are only evaluated into text when
/// [`Router::is_interested`](crate::Router::is_interested) reports that some
/// channel will receive the message.
///
/// ```
/// use std::sync::Arc;
///
/// use flaglog::{Level, Router, flag_log};
/// use flaglog_sink::ConsoleSink;
///
/// let console = Arc::new(ConsoleSink::new(Vec::new()));
/// let router = Router::builder().shared_sink(console.clone()).build();
/// router.registry().enable("DRIVE");
///
/// flag_log!(router, "DRIVE", Level::High, "speed {:.1} m/s", 2.5);
///
/// let output = console.with_sink(|sink| String::from_utf8(sink.get_ref().clone()).unwrap());
/// assert_eq!(output, "High: [DRIVE] speed 2.5 m/s\n");
/// ```
#[macro_export]
macro_rules! flag_log {
    ($router:expr, $category:expr, $level:expr, $($arg:tt)+) => {{
        let router: &$crate::Router = &$router;
        let category = $category;
        let level: $crate::Level = $level;
        if router.is_interested(::core::convert::AsRef::<str>::as_ref(&category), level) {
            router.log(::core::format_args!($($arg)+), category, level);
        }
    }};
}

/// [`flag_log!`] at [`Level::Low`](crate::Level::Low).
#[macro_export]
macro_rules! flag_low {
    ($router:expr, $category:expr, $($arg:tt)+) => {
        $crate::flag_log!($router, $category, $crate::Level::Low, $($arg)+)
    };
}

/// [`flag_log!`] at [`Level::Normal`](crate::Level::Normal).
#[macro_export]
macro_rules! flag_normal {
    ($router:expr, $category:expr, $($arg:tt)+) => {
        $crate::flag_log!($router, $category, $crate::Level::Normal, $($arg)+)
    };
}

/// [`flag_log!`] at [`Level::High`](crate::Level::High).
#[macro_export]
macro_rules! flag_high {
    ($router:expr, $category:expr, $($arg:tt)+) => {
        $crate::flag_log!($router, $category, $crate::Level::High, $($arg)+)
    };
}

/// [`flag_log!`] at [`Level::Critical`](crate::Level::Critical).
#[macro_export]
macro_rules! flag_critical {
    ($router:expr, $category:expr, $($arg:tt)+) => {
        $crate::flag_log!($router, $category, $crate::Level::Critical, $($arg)+)
    };
}
