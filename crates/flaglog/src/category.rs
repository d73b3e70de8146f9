//! crates/flaglog/src/category.rs
//! Application-defined category sets.

/// A closed, application-defined set of categories.
///
/// Applications usually describe their subsystems as an enum; this trait
/// gives the router the string tag of each variant and lets a
/// [`FlagLogger`](crate::FlagLogger) enable the whole set at once. The
/// [`categories!`](crate::categories) macro derives an implementation.
pub trait CategorySet: Copy + Send + Sync + 'static {
    /// The tag used as the category identifier.
    fn tag(&self) -> &'static str;

    /// Every member of the set.
    fn all() -> &'static [Self];
}

/// Declares a category enum and implements [`CategorySet`] for it.
///
/// Each variant is bound to its string tag. The generated type also
/// implements `AsRef<str>` and `Display`, so values can be passed straight
/// to [`Router::log`](crate::Router::log).
///
/// # Example
///
/// ```
/// use flaglog::{CategorySet, categories};
///
/// categories! {
///     /// Robot subsystems.
///     pub enum Subsystem {
///         Drive => "DRIVE",
///         Vision => "VISION",
///     }
/// }
///
/// assert_eq!(Subsystem::Drive.tag(), "DRIVE");
/// assert_eq!(Subsystem::all().len(), 2);
/// assert_eq!(Subsystem::Vision.to_string(), "VISION");
/// ```
#[macro_export]
macro_rules! categories {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $crate::CategorySet for $name {
            fn tag(&self) -> &'static str {
                match self {
                    $( Self::$variant => $tag ),+
                }
            }

            fn all() -> &'static [Self] {
                &[ $( Self::$variant ),+ ]
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                $crate::CategorySet::tag(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::CategorySet::tag(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::categories! {
        enum Robot {
            Drive => "DRIVE",
            Arm => "ARM",
            /// Cameras.
            Vision => "VISION",
        }
    }

    #[test]
    fn tags_match_declaration() {
        assert_eq!(Robot::Drive.tag(), "DRIVE");
        assert_eq!(Robot::Arm.tag(), "ARM");
        assert_eq!(Robot::Vision.tag(), "VISION");
    }

    #[test]
    fn all_lists_every_variant_in_order() {
        assert_eq!(Robot::all(), &[Robot::Drive, Robot::Arm, Robot::Vision]);
    }

    #[test]
    fn as_ref_and_display_use_tag() {
        assert_eq!(Robot::Arm.as_ref(), "ARM");
        assert_eq!(format!("{}", Robot::Vision), "VISION");
    }
}
