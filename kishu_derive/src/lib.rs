//!
//! Generate Inspect implementations.
//!
use proc_macro::TokenStream;
use proc_macro_error::proc_macro_error;

mod inspect_derive;
mod util;

/// Derive the `Inspect` traversal capability for a struct.
///
/// Every field is visited in declaration order, whatever its visibility.
/// ```ignore
/// /// Annotation Support: inspect (skip, display)
/// #[derive(Inspect)]
/// #[inspect(display)]
/// struct Post {
///     title: String,
///     #[inspect(skip)]
///     view_count: u64,
/// }
/// ```
/// `#[inspect(skip)]` leaves a field out of the walk entirely;
/// `#[inspect(display)]` on the struct emits its `Display` rendering as an
/// additional leaf before the fields.
#[proc_macro_derive(Inspect, attributes(inspect))]
#[proc_macro_error]
pub fn inspect(input: TokenStream) -> TokenStream {
    inspect_derive::impl_inspect(input)
}
