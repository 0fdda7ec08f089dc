//! # **Print Module** - *Pretty Printing for Views*
//!
//! Contains the preview limit used by the view's `Display` implementation
//! and an additional `Print` trait which wraps `Display` to provide
//! `myview.print()` for any object that implements it.
use std::fmt::{self, Debug, Formatter};

/// Maximum number of elements rendered before the output is elided.
pub(crate) const MAX_PREVIEW: usize = 50;

/// # Print
///
/// Provides a more convenient way to activate `Display`
/// via `myview.print()`, avoiding the need to write `println!("{}", myview);`
pub trait Print {
    #[inline]
    fn print(&self)
    where
        Self: fmt::Display,
    {
        println!("{}", self);
    }
}

impl<T: fmt::Display> Print for T where T: fmt::Display {}

/// Writes `[a, b, c, … (n more)]` from an element iterator of known length.
///
/// `Err` items are rendered with their message in angle brackets rather than
/// aborting the whole write.
pub(crate) fn write_preview<I, T, E>(f: &mut Formatter<'_>, len: usize, items: I) -> fmt::Result
where
    I: Iterator<Item = Result<T, E>>,
    T: Debug,
    E: fmt::Display,
{
    write!(f, "[")?;
    for (i, item) in items.take(MAX_PREVIEW).enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        match item {
            Ok(value) => write!(f, "{:?}", value)?,
            Err(err) => write!(f, "<{}>", err)?,
        }
    }
    if len > MAX_PREVIEW {
        write!(f, ", … ({} more)", len - MAX_PREVIEW)?;
    }
    write!(f, "]")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Preview(Vec<Result<i32, &'static str>>);

    impl fmt::Display for Preview {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write_preview(f, self.0.len(), self.0.iter().cloned())
        }
    }

    #[test]
    fn test_preview_renders_errors_inline() {
        let p = Preview(vec![Ok(1), Err("gone"), Ok(3)]);
        assert_eq!(p.to_string(), "[1, <gone>, 3]");
    }

    #[test]
    fn test_preview_elides_long_output() {
        let p = Preview((0..(MAX_PREVIEW as i32 + 5)).map(Ok).collect());
        let s = p.to_string();
        assert!(s.ends_with(", … (5 more)]"));
        assert!(s.contains(", 49"));
        assert!(!s.contains(", 50"));
    }
}
