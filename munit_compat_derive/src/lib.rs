mod case;

use proc_macro::TokenStream;

/// Turns a plain `fn name() { ... }` into a munit_compat test function.
///
/// The generated function has the runner's signature, ignores its parameters and user data,
/// runs the body and reports `TestResult::Ok`. The kind tag (`RUN`, `SUBMIT`, ...) is
/// accepted and ignored.
///
/// ```ignore
/// use munit_compat::{attr::munit_case, *};
///
/// #[munit_case(RUN)]
/// fn test_add() {
///     assert_int!(2 + 3, ==, 5, "2 + 3 should be 5");
/// }
/// ```
#[proc_macro_attribute]
pub fn munit_case(attr: TokenStream, item: TokenStream) -> TokenStream {
	case::expand_case(attr.into(), item.into())
		.unwrap_or_else(syn::Error::into_compile_error)
		.into()
}
