//! Code generation for `#[derive(Bind)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::parse::{BindField, BindTarget, TargetKind};

const SKIP_SENTINEL: &str = "-";

pub fn expand_bind(input: &DeriveInput) -> syn::Result<TokenStream> {
    let target = BindTarget::parse(input)?;

    let ident = &input.ident;
    let type_name = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let shape = match target.kind {
        TargetKind::Record => {
            let fields = target.fields.iter().map(field_tokens);
            quote! {
                ::micro_bind::Shape::record(#type_name, ::std::vec![#(#fields),*])
            }
        }
        TargetKind::Tuple => unsupported(&type_name, &quote!(Tuple)),
        TargetKind::Unit => unsupported(&type_name, &quote!(Unit)),
        TargetKind::Enum => unsupported(&type_name, &quote!(Enum)),
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::micro_bind::Bindable for #ident #ty_generics #where_clause {
            fn shape() -> ::micro_bind::Shape<Self> {
                #shape
            }
        }
    })
}

fn field_tokens(field: &BindField) -> TokenStream {
    let ident = &field.ident;
    let name = &field.name;
    let tag = match &field.tag {
        Some(tag) => quote!(::std::option::Option::Some(#tag)),
        None => quote!(::std::option::Option::None),
    };

    // skipped fields are never assigned and may have any type
    if field.tag.as_deref() == Some(SKIP_SENTINEL) {
        return quote! {
            ::micro_bind::Field::new(#name, #tag, |_: &mut Self, _: ::std::string::String| {})
        };
    }

    quote! {
        ::micro_bind::Field::new(#name, #tag, |target: &mut Self, value: ::std::string::String| {
            target.#ident = value;
        })
    }
}

fn unsupported(type_name: &str, kind: &TokenStream) -> TokenStream {
    quote! {
        ::micro_bind::Shape::unsupported(#type_name, ::micro_bind::ShapeKind::#kind)
    }
}
