//! Caller identification
//!
//! Every logging macro expands `caller!()` at the call site. The macro declares
//! an empty marker function in the caller's body and asks the compiler for its
//! path with `std::any::type_name`, which yields something like
//! `my_app::player::Player::take_damage::__callerlog_marker`. The segment
//! before the marker is the calling method and the one before that is its
//! type (or the enclosing module for free functions).
//!
//! No stack walk happens at runtime, so the result names the lexically
//! enclosing method regardless of how deep the call stack is, and it cannot
//! land on a frame inside this crate. Each call still scans the path string
//! once, which is cheap but not free; logging is not assumed to be on a hot path.
//!
//! `type_name` output is not a stable format. Closures (`{{closure}}`),
//! generic arguments and `<Type as Trait>` qualifiers are stripped here.
//! Impls on unnamed types (tuples, slices, arrays) have no `Type` to report
//! and resolution panics. A fn item nested inside a method reports the outer
//! method in the type position (`outer.helper`).

use std::fmt;

/// Name of the marker function declared by `caller!()`
#[doc(hidden)]
pub const MARKER: &str = "__callerlog_marker";

/// Type and method that issued a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Caller {
    pub type_name: &'static str,
    pub method: &'static str,
}

impl Caller {
    /// Create a caller identity explicitly
    pub const fn new(type_name: &'static str, method: &'static str) -> Self {
        Self { type_name, method }
    }

    /// Resolve a caller from a compiler-generated item path.
    ///
    /// # Panics
    ///
    /// Panics when the path has fewer than two usable segments, or when the
    /// implementing type is not a named type (`impl Trait for (A, B)`,
    /// `impl Trait for [T]`). Log from such impls with an explicit
    /// [`Caller::new`] instead.
    pub fn from_path(path: &'static str) -> Self {
        match Self::parse(path) {
            Some(caller) => caller,
            None => panic!("cannot resolve caller from item path '{}'", path),
        }
    }

    /// Fallible form of [`Caller::from_path`]
    pub fn parse(path: &'static str) -> Option<Self> {
        let mut segments: Vec<&'static str> = split_path(path)
            .into_iter()
            .filter(|s| !s.is_empty() && !s.starts_with("{{"))
            .collect();

        if segments.last() == Some(&MARKER) {
            segments.pop();
        }

        let method = strip_generics(segments.pop()?);
        let type_name = short_type_name(segments.pop()?);

        // Tuple, slice and fn-pointer self types have no name to print
        if !is_identifier(method) || !is_identifier(type_name) {
            return None;
        }
        Some(Self { type_name, method })
    }

    /// `Type.method: ` prefix used on every log line
    pub fn prefix(&self) -> String {
        format!("{}: ", self)
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.method)
    }
}

/// `type_name` of a value's type; used by `caller!()` on the marker fn item
#[doc(hidden)]
#[inline]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Resolve the [`Caller`] of the enclosing function
#[macro_export]
macro_rules! caller {
    () => {{
        fn __callerlog_marker() {}
        $crate::Caller::from_path($crate::caller::type_name_of(__callerlog_marker))
    }};
}

/// Bracket depth change for the byte at `i`.
///
/// `->` inside fn pointer types is not a closing bracket.
fn bracket_delta(bytes: &[u8], i: usize) -> isize {
    match bytes[i] {
        b'<' | b'(' | b'[' => 1,
        b'>' if i > 0 && bytes[i - 1] == b'-' => 0,
        b'>' | b')' | b']' => -1,
        _ => 0,
    }
}

/// Split on `::` outside of `<...>`, `(...)` and `[...]`
fn split_path(path: &'static str) -> Vec<&'static str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0isize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        depth = (depth + bracket_delta(bytes, i)).max(0);
        match bytes[i] {
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments
}

/// `Foo<T>` -> `Foo`
fn strip_generics(segment: &'static str) -> &'static str {
    match segment.find('<') {
        Some(0) | None => segment,
        Some(idx) => &segment[..idx],
    }
}

/// Reduce a type path to the short name of the implementing type.
///
/// `<app::Foo<T> as app::Greet>` -> `Foo`, `<impl app::Greet for app::Foo>` -> `Foo`,
/// `app::Foo<T>` -> `Foo`
pub(crate) fn short_type_name(segment: &'static str) -> &'static str {
    let mut ty = segment;
    if let Some(inner) = ty.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
        ty = if let Some(imp) = inner.strip_prefix("impl ") {
            // impl outside the type's module
            match find_top_level(imp, " for ") {
                Some(idx) => &imp[idx + " for ".len()..],
                None => imp,
            }
        } else {
            match find_top_level(inner, " as ") {
                Some(idx) => &inner[..idx],
                None => inner,
            }
        };
    }
    ty = ty.trim_start_matches('&').trim_start_matches("mut ");
    for prefix in ["*const ", "*mut ", "dyn "] {
        ty = ty.strip_prefix(prefix).unwrap_or(ty);
    }
    // Tuples, slices and arrays are kept whole
    if ty.starts_with('(') || ty.starts_with('[') {
        return ty;
    }
    let last = split_path(ty).pop().unwrap_or(ty);
    strip_generics(last)
}

/// Byte index of `needle` outside of brackets
fn find_top_level(haystack: &str, needle: &str) -> Option<usize> {
    let bytes = haystack.as_bytes();
    let mut depth = 0isize;
    for i in 0..bytes.len() {
        if depth == 0 && bytes[i..].starts_with(needle.as_bytes()) {
            return Some(i);
        }
        depth = (depth + bracket_delta(bytes, i)).max(0);
    }
    None
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Foo;

    impl Foo {
        fn bar(&self) -> Caller {
            caller!()
        }

        fn from_closure(&self) -> Caller {
            let resolve = || caller!();
            resolve()
        }
    }

    fn free_function() -> Caller {
        caller!()
    }

    // === Live resolution ===

    #[test]
    fn test_resolves_inherent_method() {
        let caller = Foo.bar();
        assert_eq!(caller.type_name, "Foo");
        assert_eq!(caller.method, "bar");
        assert_eq!(caller.prefix(), "Foo.bar: ");
    }

    #[test]
    fn test_closure_resolves_to_enclosing_method() {
        assert_eq!(Foo.from_closure(), Caller::new("Foo", "from_closure"));
    }

    #[test]
    fn test_free_function_uses_module() {
        assert_eq!(free_function(), Caller::new("tests", "free_function"));
    }

    // === Path parsing ===

    #[test]
    fn test_parse_plain_path() {
        let caller = Caller::parse("app::player::Player::take_damage::__callerlog_marker");
        assert_eq!(caller, Some(Caller::new("Player", "take_damage")));
    }

    #[test]
    fn test_parse_trait_impl() {
        let caller = Caller::parse("<app::Foo as app::Greet>::greet::__callerlog_marker");
        assert_eq!(caller, Some(Caller::new("Foo", "greet")));
    }

    #[test]
    fn test_parse_generic_trait_impl() {
        let caller =
            Caller::parse("<app::Wrapper<alloc::vec::Vec<u8>> as core::fmt::Debug>::fmt::__callerlog_marker");
        assert_eq!(caller, Some(Caller::new("Wrapper", "fmt")));
    }

    #[test]
    fn test_parse_impl_in_other_module() {
        let caller =
            Caller::parse("app::systems::<impl app::Greet for app::actors::Npc>::greet::__callerlog_marker");
        assert_eq!(caller, Some(Caller::new("Npc", "greet")));

        let caller = Caller::parse("app::systems::<impl app::actors::Npc>::spawn::__callerlog_marker");
        assert_eq!(caller, Some(Caller::new("Npc", "spawn")));
    }

    #[test]
    fn test_parse_pointer_self_types() {
        let caller = Caller::parse("<&mut app::Foo as app::Greet>::greet::__callerlog_marker");
        assert_eq!(caller, Some(Caller::new("Foo", "greet")));

        let caller = Caller::parse("<*const app::Foo as app::Greet>::greet::__callerlog_marker");
        assert_eq!(caller, Some(Caller::new("Foo", "greet")));
    }

    #[test]
    fn test_parse_rejects_unnamed_self_types() {
        assert_eq!(
            Caller::parse("<(u8, app::Foo) as app::Greet>::greet::__callerlog_marker"),
            None
        );
        assert_eq!(
            Caller::parse("<[u8] as app::Greet>::greet::__callerlog_marker"),
            None
        );
        assert_eq!(
            Caller::parse("<[app::Foo; 4] as app::Greet>::greet::__callerlog_marker"),
            None
        );
        assert_eq!(
            Caller::parse("app::<impl app::Greet for (u8, app::Foo)>::greet::__callerlog_marker"),
            None
        );
    }

    #[test]
    fn test_short_type_name_keeps_tuples_whole() {
        assert_eq!(short_type_name("(u8, app::Foo)"), "(u8, app::Foo)");
        assert_eq!(short_type_name("[app::Foo]"), "[app::Foo]");
        assert_eq!(short_type_name("alloc::vec::Vec<(u8, app::Foo)>"), "Vec");
    }

    #[test]
    fn test_parse_generic_inherent_impl() {
        let caller = Caller::parse("app::Pool<T>::acquire::__callerlog_marker");
        assert_eq!(caller, Some(Caller::new("Pool", "acquire")));
    }

    #[test]
    fn test_parse_skips_closures() {
        let caller =
            Caller::parse("app::Foo::run::{{closure}}::{{closure}}::__callerlog_marker");
        assert_eq!(caller, Some(Caller::new("Foo", "run")));
    }

    #[test]
    fn test_parse_fn_pointer_generic() {
        let caller = Caller::parse("app::Cb<fn() -> u8>::call::__callerlog_marker");
        assert_eq!(caller, Some(Caller::new("Cb", "call")));
    }

    #[test]
    fn test_parse_too_shallow() {
        assert_eq!(Caller::parse("__callerlog_marker"), None);
        assert_eq!(Caller::parse("main::__callerlog_marker"), None);
        assert_eq!(Caller::parse(""), None);
    }

    #[test]
    #[should_panic(expected = "cannot resolve caller")]
    fn test_from_path_panics_when_too_shallow() {
        Caller::from_path("__callerlog_marker");
    }

    trait Greet {
        fn greet(&self) -> Caller;
    }

    impl Greet for (u8, Foo) {
        fn greet(&self) -> Caller {
            caller!()
        }
    }

    #[test]
    #[should_panic(expected = "cannot resolve caller")]
    fn test_tuple_impl_panics_instead_of_malformed_prefix() {
        (1u8, Foo).greet();
    }

    #[test]
    fn test_display() {
        assert_eq!(Caller::new("Foo", "bar").to_string(), "Foo.bar");
    }
}
