use proc_macro2::{Span, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::quote;
use syn::Ident;

/// Resolve the path of the kishu crate at the expansion site.
pub fn get_crate_name() -> TokenStream {
    match crate_name("kishu") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        // Inside kishu itself (and its tests) the crate is addressable by
        // its own name through `extern crate self as kishu`.
        Ok(FoundCrate::Itself) | Err(_) => quote!(::kishu),
    }
}
