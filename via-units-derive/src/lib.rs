//! Derive macro implementation used by `via-units-core`.
//!
//! `via-units-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::SiUnit`, `crate::Accumulate` and `crate::Convertible`, so it is intended to be used by
//! `via-units-core` (or by crates that expose an identical crate-root API).
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive always implements `crate::Unit for MyUnit`. Then, depending on the
//! attribute contents:
//!
//! - no `base`: `crate::SiUnit for MyUnit` (the unit is an SI base unit);
//! - `accumulate = true`: `crate::Accumulate for MyUnit`;
//! - `base = B, ratio = R`: `crate::Convertible for MyUnit` with `Base = B` and `RATIO = R`.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `name = "Metres"`: name used in the `Name(value)` representation
//! - `symbol = "m"`: short unit symbol
//! - `dimension = SomeDim`: dimension marker type
//! - `accumulate = true`: optional, enables addition and subtraction
//! - `base = Metre`: optional, the SI unit this unit converts to
//! - `ratio = 1852.0`: required with `base`, base units per one of this unit

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitBool, LitStr, Token, Type,
};

/// Derive `crate::Unit` and the marker traits selected by the `#[unit(...)]` attribute.
///
/// This macro is intended for use by `via-units-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let name = &unit_attr.name;
    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;

    let mut expanded = quote! {
        impl crate::Unit for #ident {
            const NAME: &'static str = #name;
            const SYMBOL: &'static str = #symbol;
            type Dim = #dimension;
        }
    };

    match &unit_attr.conversion {
        Some((base, ratio)) => expanded.extend(quote! {
            impl crate::Convertible for #ident {
                type Base = #base;
                const RATIO: f64 = #ratio;
            }
        }),
        None => expanded.extend(quote! {
            impl crate::SiUnit for #ident {}
        }),
    }

    if unit_attr.accumulate {
        expanded.extend(quote! {
            impl crate::Accumulate for #ident {}
        });
    }

    Ok(expanded)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    name: LitStr,
    symbol: LitStr,
    dimension: Expr,
    accumulate: bool,
    conversion: Option<(Type, Expr)>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut accumulate: Option<LitBool> = None;
        let mut base: Option<Type> = None;
        let mut ratio: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    name = Some(input.parse()?);
                }
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "accumulate" => {
                    accumulate = Some(input.parse()?);
                }
                "base" => {
                    base = Some(input.parse()?);
                }
                "ratio" => {
                    ratio = Some(input.parse()?);
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

        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;
        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;

        let conversion = match (base, ratio) {
            (Some(base), Some(ratio)) => Some((base, ratio)),
            (None, None) => None,
            (Some(_), None) => {
                return Err(syn::Error::new(
                    input.span(),
                    "attribute `base` requires `ratio`",
                ))
            }
            (None, Some(_)) => {
                return Err(syn::Error::new(
                    input.span(),
                    "attribute `ratio` requires `base`",
                ))
            }
        };

        let accumulate = accumulate.is_some_and(|flag| flag.value);
        if accumulate && conversion.is_some() {
            return Err(syn::Error::new(
                input.span(),
                "`accumulate` is only supported on SI units",
            ));
        }

        Ok(UnitAttribute {
            name,
            symbol,
            dimension,
            accumulate,
            conversion,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}
