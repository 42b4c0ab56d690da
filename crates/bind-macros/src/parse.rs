//! Parsing of bind targets and their `#[bind("...")]` field attributes.

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr};

const BIND_ATTR: &str = "bind";

/// The structural kind of a derive input, mirroring `micro_bind::ShapeKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Record,
    Tuple,
    Unit,
    Enum,
}

/// A named field taking part in binding.
#[derive(Debug)]
pub struct BindField {
    /// The field identifier as used in generated code.
    pub ident: Ident,
    /// The declared name, raw identifier prefix removed.
    pub name: String,
    /// The raw tag, `None` when the field has no `#[bind]` attribute.
    pub tag: Option<String>,
}

#[derive(Debug)]
pub struct BindTarget {
    pub kind: TargetKind,
    pub fields: Vec<BindField>,
}

impl BindTarget {
    pub fn parse(input: &DeriveInput) -> syn::Result<Self> {
        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => {
                    let fields = named
                        .named
                        .iter()
                        .map(|field| {
                            // named fields always carry an ident
                            let ident = field.ident.clone().ok_or_else(|| syn::Error::new(field.span(), "expected named field"))?;
                            let tag = parse_tag(&field.attrs)?;
                            Ok(BindField { name: ident.unraw().to_string(), ident, tag })
                        })
                        .collect::<syn::Result<Vec<_>>>()?;
                    Ok(Self { kind: TargetKind::Record, fields })
                }
                Fields::Unnamed(_) => Ok(Self { kind: TargetKind::Tuple, fields: Vec::new() }),
                Fields::Unit => Ok(Self { kind: TargetKind::Unit, fields: Vec::new() }),
            },
            Data::Enum(_) => Ok(Self { kind: TargetKind::Enum, fields: Vec::new() }),
            Data::Union(data) => Err(syn::Error::new(data.union_token.span(), "Bind can not be derived for unions")),
        }
    }
}

fn parse_tag(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut tag = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(BIND_ATTR)) {
        if tag.is_some() {
            return Err(syn::Error::new(attr.span(), "duplicate bind attribute"));
        }
        let lit: LitStr = attr.parse_args().map_err(|e| {
            syn::Error::new(e.span(), "expected a tag string, e.g. #[bind(\"in=header,label=x-user-email\")]")
        })?;
        tag = Some(lit.value());
    }

    Ok(tag)
}
