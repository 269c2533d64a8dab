use quote::ToTokens;
use syn::meta::ParseNestedMeta;
use syn::parse::Parse;
use syn::{Attribute, Expr, ExprLit, Lit};

use super::symbol::{Symbol, CRATE, DESCRIPTION, NAME, SMART_ENUM, UNKNOWN, UNKNOWN_NAME};
use super::Context;

#[derive(Debug, PartialEq, Eq)]
pub struct Variant {
    pub name: Option<syn::LitStr>,
    pub description: Option<syn::LitStr>,
}

impl Variant {
    pub fn from_ast(ctx: &Context, attrs: &[Attribute]) -> Variant {
        let mut name = None;
        let mut description = None;
        for attr in attrs {
            if attr.path() != SMART_ENUM {
                continue;
            }
            if let Err(err) = attr.parse_nested_meta(|meta| {
                if meta.path == NAME {
                    name = get_lit_str(ctx, &meta, NAME)?;
                } else if meta.path == DESCRIPTION {
                    description = get_lit_str(ctx, &meta, DESCRIPTION)?;
                } else {
                    let path = meta.path.to_token_stream().to_string();
                    return Err(meta.error(format_args!(
                        "unknown smart_enum variant attribute '{}'",
                        path
                    )));
                }
                Ok(())
            }) {
                ctx.syn_error(err);
            }
        }

        Variant { name, description }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Container {
    pub crate_path: Option<syn::Path>,
    pub unknown: Option<syn::Expr>,
    pub unknown_name: Option<syn::LitStr>,
}

impl Container {
    pub fn from_ast(ctx: &Context, attrs: &[Attribute]) -> Container {
        let mut crate_path = None;
        let mut unknown = None;
        let mut unknown_name = None;

        for attr in attrs {
            if attr.path() != SMART_ENUM {
                continue;
            }
            if let Err(err) = attr.parse_nested_meta(|meta| {
                if meta.path == CRATE {
                    crate_path = parse_lit(ctx, &meta, CRATE)?;
                } else if meta.path == UNKNOWN {
                    unknown = Some(meta.value()?.parse()?);
                } else if meta.path == UNKNOWN_NAME {
                    unknown_name = get_lit_str(ctx, &meta, UNKNOWN_NAME)?;
                } else {
                    let path = meta.path.to_token_stream().to_string();
                    return Err(meta.error(format_args!(
                        "unknown smart_enum container attribute '{}'",
                        path
                    )));
                }
                Ok(())
            }) {
                ctx.syn_error(err);
            }
        }

        Container {
            crate_path,
            unknown,
            unknown_name,
        }
    }
}

pub fn get_lit_str(
    ctx: &Context,
    meta: &ParseNestedMeta,
    attr: Symbol,
) -> syn::Result<Option<syn::LitStr>> {
    let expr: Expr = meta.value()?.parse()?;
    let mut value = &expr;
    while let Expr::Group(e) = value {
        value = &e.expr;
    }
    if let Expr::Lit(ExprLit {
        lit: Lit::Str(s), ..
    }) = value
    {
        Ok(Some(s.clone()))
    } else {
        ctx.error_spanned(
            expr,
            format_args!("expected smart_enum attribute {} to be string", attr),
        );
        Ok(None)
    }
}

pub fn parse_lit<T: Parse>(
    ctx: &Context,
    meta: &ParseNestedMeta,
    attr: Symbol,
) -> syn::Result<Option<T>> {
    match get_lit_str(ctx, meta, attr)? {
        Some(lit) => Ok(Some(lit.parse()?)),
        None => Ok(None),
    }
}
