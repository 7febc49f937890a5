//! The [`bindable!`](crate::bindable) macro.

/// Implements [`Bindable`](crate::Bindable) for a struct from a table
/// of field entries.
///
/// Each entry names a field and its `(section, key)` address, optionally
/// followed by `default = "literal"` and/or a `code_points` flag:
///
/// ```
/// use tenon::{bindable, ConfigParser};
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: u16,
///     keepalive: Option<bool>,
///     weights: Vec<f64>,
///     separator: i32,
/// }
///
/// bindable! {
///     Server {
///         host: ("server", "host"),
///         port: ("server", "port", default = "80"),
///         keepalive: ("server", "keepalive", default = "on"),
///         weights: ("server", "weights"),
///         separator: ("format", "separator", code_points),
///     }
/// }
///
/// let parser: ConfigParser = "[server]\nhost = localhost\n".parse().unwrap();
/// let mut server = Server::default();
/// tenon::bind(&parser, &mut server);
///
/// assert_eq!(server.host, "localhost");
/// assert_eq!(server.port, 80);
/// assert_eq!(server.keepalive, Some(true));
/// ```
///
/// Fields not listed in the table keep their values untouched; nested
/// composite fields cannot be listed at all.
#[macro_export]
macro_rules! bindable {
    (@field ($dest:expr) $section:expr, $key:expr, default = $default:expr, code_points) => {
        $crate::bindable!(@field ($dest) $section, $key)
            .with_default($default)
            .code_points()
    };
    (@field ($dest:expr) $section:expr, $key:expr, default = $default:expr) => {
        $crate::bindable!(@field ($dest) $section, $key).with_default($default)
    };
    (@field ($dest:expr) $section:expr, $key:expr, code_points) => {
        $crate::bindable!(@field ($dest) $section, $key).code_points()
    };
    (@field ($dest:expr) $section:expr, $key:expr) => {
        $crate::bind::Field::new(
            $section,
            $key,
            $crate::bind::AsSlot::as_slot($dest),
        )
    };

    ($target:ty { $( $field:ident : ( $($entry:tt)* ) ),+ $(,)? }) => {
        impl $crate::bind::Bindable for $target {
            fn fields(&mut self) -> ::std::vec::Vec<$crate::bind::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::bindable!(@field (&mut self.$field) $($entry)*)
                    ),+
                ]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{bind, ConfigParser};

    #[derive(Default)]
    struct Sample {
        name: String,
        count: i64,
        ratio: f64,
        tags: Vec<String>,
        initial: i32,
    }

    bindable! {
        Sample {
            name: ("sample", "name"),
            count: ("sample", "count", default = "5"),
            ratio: ("sample", "ratio"),
            tags: ("sample", "tags"),
            initial: ("sample", "initial", code_points),
        }
    }

    #[test]
    fn test_macro_generated_binding() {
        let parser: ConfigParser = "\
[sample]
name = demo
ratio = 0.5
tags = a, b
initial = Q
"
        .parse()
        .unwrap();

        let mut sample = Sample::default();
        bind(&parser, &mut sample);

        assert_eq!(sample.name, "demo");
        assert_eq!(sample.count, 5);
        assert!((sample.ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(sample.tags, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(sample.initial, 'Q' as i32);
    }

    #[test]
    fn test_macro_with_trailing_comma_and_empty_doc() {
        let parser = ConfigParser::new();
        let mut sample = Sample::default();
        bind(&parser, &mut sample);

        assert_eq!(sample.name, "");
        assert_eq!(sample.count, 5);
        assert!(sample.tags.is_empty());
        assert_eq!(sample.initial, 0);
    }
}
