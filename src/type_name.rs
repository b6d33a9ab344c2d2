//! Human readable type names.

/// Name of `T` with every module path removed, generic arguments included.
///
/// `Option<alloc::string::String>` becomes `Option<String>`, `&my_crate::Config` becomes
/// `&Config`.
pub fn type_name<T: ?Sized>() -> String {
    shorten(std::any::type_name::<T>())
}

/// [`type_name`] of the static type of `val`.
pub fn type_name_of_val<T: ?Sized>(_val: &T) -> String {
    type_name::<T>()
}

/// Fully qualified name of `T`, module paths included.
pub fn type_string<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
}

fn shorten(full: &str) -> String {
    let bytes = full.as_bytes();
    let mut out = String::with_capacity(full.len());
    // Start of the segment not yet copied to `out`.
    let mut pending = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i..].starts_with(b"::") {
            // Everything pending is a path prefix.
            i += 2;
            pending = i;
            continue;
        }

        let c = bytes[i];
        if !(c.is_ascii_alphanumeric() || c == b'_' || !c.is_ascii()) {
            out.push_str(&full[pending..=i]);
            pending = i + 1;
        }
        i += 1;
    }

    out.push_str(&full[pending..]);
    out
}
