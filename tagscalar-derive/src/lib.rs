//! Derive macro implementation for `tagscalar` tag types.
//!
//! The `Tag` derive implements `Tag` for a marker type so it can be used as the `G` parameter of `Scalar<G, T>`.
//!
//! Most users should reach it through the `tagscalar` facade crate, which re-exports it next to the trait.
//!
//! # Generated impls
//!
//! For a tag marker type `Deg`, the derive implements:
//!
//! - `::tagscalar::Tag for Deg`, with `NAME` set to `"Deg"` unless overridden.
//!
//! Generic markers are accepted; each type parameter gets a `'static` bound. Lifetime parameters are rejected.
//!
//! # Attributes
//!
//! The derive reads an optional `#[tag(...)]` attribute:
//!
//! - `name = "deg"`: value of `Tag::NAME`
//! - `crate = some::path`: path of the crate exporting `Tag` (default `::tagscalar`; use `tagscalar_core` when
//!   depending on the core crate directly)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_macro_input, parse_quote, Attribute, DeriveInput, Ident, LitStr, Path, Token,
};

/// Derive `Tag` for a marker type.
///
/// ```rust,ignore
/// use tagscalar::{Scalar, Tag};
///
/// #[derive(Tag)]
/// #[tag(name = "deg")]
/// pub enum Deg {}
///
/// let right = Scalar::<Deg>::new(90.0);
/// ```
#[proc_macro_derive(Tag, attributes(tag))]
pub fn derive_tag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_tag_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_tag_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let tag_attr = parse_tag_attributes(&input.attrs)?;

    let tag_name = tag_attr
        .name
        .unwrap_or_else(|| LitStr::new(&name.unraw().to_string(), name.span()));
    let krate = tag_attr.krate.unwrap_or_else(|| parse_quote!(::tagscalar));

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "tag types must be 'static; lifetime parameters are not supported",
        ));
    }

    // `Tag: 'static`, so every type parameter has to be as well.
    let mut generics = input.generics.clone();
    let type_params: Vec<Ident> = generics.type_params().map(|param| param.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for ident in type_params {
        where_clause.predicates.push(parse_quote!(#ident: 'static));
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #krate::Tag for #name #ty_generics #where_clause {
            const NAME: &'static str = #tag_name;
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[tag(...)]` attribute.
#[derive(Default)]
struct TagAttribute {
    name: Option<LitStr>,
    krate: Option<Path>,
}

impl Parse for TagAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attr = TagAttribute::default();

        while !input.is_empty() {
            // `crate` is a keyword, so plain `Ident` parsing would reject it.
            let ident = Ident::parse_any(input)?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    attr.name = Some(input.parse()?);
                }
                "crate" => {
                    attr.krate = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(attr)
    }
}

/// Merges every `#[tag(...)]` attribute on the item; later keys override earlier ones.
fn parse_tag_attributes(attrs: &[Attribute]) -> syn::Result<TagAttribute> {
    let mut merged = TagAttribute::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("tag")) {
        let parsed = attr.parse_args::<TagAttribute>()?;
        if parsed.name.is_some() {
            merged.name = parsed.name;
        }
        if parsed.krate.is_some() {
            merged.krate = parsed.krate;
        }
    }

    Ok(merged)
}
