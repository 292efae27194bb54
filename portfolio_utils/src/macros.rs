/// Asserts that a value matches a pattern, panicking with a debug dump of the
/// value otherwise.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "{val:?} does not match {}",
                ::core::stringify!($pat)
            ),
        }
    };
}
