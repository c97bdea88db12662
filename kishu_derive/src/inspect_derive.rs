use proc_macro::TokenStream;
use proc_macro_error::abort;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Fields, Index, Meta, NestedMeta};

use crate::util::get_crate_name;

pub fn impl_inspect(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse::<DeriveInput>(input).unwrap();
    let crate_name = get_crate_name();
    let name = &derive_input.ident;
    let (impl_generics, ty_generics, where_clause) = derive_input.generics.split_for_impl();

    let fields = match derive_input.data {
        Data::Struct(ref rstruct) => &rstruct.fields,
        Data::Enum(_) => abort!(
            derive_input.span(),
            "#[derive(Inspect)] can only be used with structs"
        ),
        Data::Union(_) => abort!(
            derive_input.span(),
            "#[derive(Inspect)] can only be used with structs"
        ),
    };

    let display = if has_annotation(&derive_input.attrs, "display") {
        quote!( walker.text(&::std::string::ToString::to_string(self)); )
    } else {
        quote!()
    };

    let visits = field_visits(fields);
    let scope_arg = if visits.is_empty() && display.is_empty() {
        quote!(_walker)
    } else {
        quote!(walker)
    };

    quote!(
        impl #impl_generics #crate_name::Inspect for #name #ty_generics #where_clause {
            fn inspect(&self, walker: &mut #crate_name::Walker<'_>) {
                walker.guarded(self, |#scope_arg| {
                    #display
                    #(#visits)*
                });
            }
        }
    )
    .into()
}

fn field_visits(fields: &Fields) -> Vec<proc_macro2::TokenStream> {
    match fields {
        Fields::Named(ref named) => named
            .named
            .iter()
            .filter(|field| !has_annotation(&field.attrs, "skip"))
            .map(|field| {
                let ident = field.ident.as_ref().unwrap();
                let field_name = ident.to_string();
                quote!( walker.field(#field_name, &self.#ident); )
            })
            .collect(),
        Fields::Unnamed(ref unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .filter(|(_, field)| !has_annotation(&field.attrs, "skip"))
            .map(|(position, _)| {
                let index = Index::from(position);
                let field_name = position.to_string();
                quote!( walker.field(#field_name, &self.#index); )
            })
            .collect(),
        Fields::Unit => Vec::new(),
    }
}

/// Look for `#[inspect(word)]` among the attributes.
fn has_annotation(attrs: &[Attribute], word: &str) -> bool {
    for attr in attrs {
        if !attr.path.is_ident("inspect") {
            continue;
        }
        let meta = match attr.parse_meta() {
            Ok(meta) => meta,
            Err(_) => abort!(attr.span(), "malformed #[inspect(..)] annotation"),
        };
        let list = match meta {
            Meta::List(list) => list,
            _ => abort!(attr.span(), "expected #[inspect(..)] with arguments"),
        };
        for nested in list.nested.iter() {
            match nested {
                NestedMeta::Meta(Meta::Path(path)) if path.is_ident(word) => return true,
                NestedMeta::Meta(Meta::Path(path))
                    if path.is_ident("skip") || path.is_ident("display") => {}
                other => abort!(
                    other.span(),
                    "unsupported #[inspect(..)] annotation; expected `skip` or `display`"
                ),
            }
        }
    }
    false
}
