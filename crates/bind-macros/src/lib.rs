//! `#[derive(Bind)]` for micro-bind.
//!
//! Generates the `micro_bind::Bindable` implementation of a struct at build time, so binding
//! needs no runtime type inspection. Use it through the `micro_bind::Bind` re-export.

mod expand;
mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive `micro_bind::Bindable`.
///
/// Every named field is bound in declaration order and must be a `String`. A field takes its
/// tag from an optional `#[bind("...")]` attribute:
///
/// ```rust,ignore
/// #[derive(Bind, Default)]
/// struct Params {
///     // query parameter `page`
///     page: String,
///     // header `x-user-email`
///     #[bind("in=header,label=x-user-email")]
///     email: String,
///     // left at its default
///     #[bind("-")]
///     cache: String,
/// }
/// ```
///
/// Tuple structs, unit structs and enums derive a shape which fails to bind at runtime.
#[proc_macro_derive(Bind, attributes(bind))]
pub fn derive_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::expand_bind(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}
