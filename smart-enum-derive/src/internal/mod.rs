use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;

use proc_macro2::Span;
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::{parse_quote, Attribute, DeriveInput, Expr, Ident, LitStr, Path, Visibility};

use self::symbol::{CFG, REPR, SMART_ENUM};

pub mod attrs;
pub mod symbol;

const INTEGER_REPRS: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// Names the generated inherent impl already uses.
const RESERVED: &[&str] = &[
    "TABLE",
    "UNKNOWN",
    "ROWS",
    "from_repr_unchecked",
    "to_repr",
    "ordinal",
    "is_valid",
    "name",
    "description",
    "from_name",
];

/// Collects errors while the input is walked so that they can all be
/// reported at once.
#[derive(Default)]
pub struct Context {
    errors: RefCell<Vec<syn::Error>>,
}

impl Context {
    pub fn new() -> Context {
        Context::default()
    }

    pub fn error_spanned<A: ToTokens, T: fmt::Display>(&self, obj: A, msg: T) {
        self.errors
            .borrow_mut()
            .push(syn::Error::new_spanned(obj.into_token_stream(), msg));
    }

    pub fn syn_error(&self, err: syn::Error) {
        self.errors.borrow_mut().push(err);
    }

    pub fn check(self) -> syn::Result<()> {
        let mut errors = self.errors.into_inner().into_iter();
        let Some(mut combined) = errors.next() else {
            return Ok(());
        };
        for err in errors {
            combined.combine(err);
        }
        Err(combined)
    }
}

pub struct Variant<'a> {
    pub ident: &'a Ident,
    pub attrs: attrs::Variant,
    pub value: Expr,
    pub forward_attrs: Vec<&'a Attribute>,
}

impl Variant<'_> {
    /// The symbol as written, without any `r#` prefix.
    pub fn symbol(&self) -> LitStr {
        LitStr::new(&self.ident.unraw().to_string(), self.ident.span())
    }

    pub fn name(&self) -> LitStr {
        self.attrs.name.clone().unwrap_or_else(|| self.symbol())
    }

    pub fn description(&self) -> LitStr {
        self.attrs.description.clone().unwrap_or_else(|| self.name())
    }
}

pub struct Container<'a> {
    pub ident: &'a Ident,
    pub vis: &'a Visibility,
    pub attrs: attrs::Container,
    pub repr: Ident,
    pub forward_attrs: Vec<&'a Attribute>,
    pub variants: Vec<Variant<'a>>,
    crate_path: Path,
}

impl<'a> Container<'a> {
    pub fn from_ast(
        ctx: &Context,
        crate_path: Path,
        input: &'a DeriveInput,
    ) -> Option<Container<'a>> {
        let data = match &input.data {
            syn::Data::Enum(data) => data,
            _ => {
                ctx.error_spanned(&input.ident, "#[smart_enum] can only be used on enums");
                return None;
            }
        };
        if !input.generics.params.is_empty() || input.generics.where_clause.is_some() {
            ctx.error_spanned(&input.generics, "smart enums cannot be generic");
        }

        let attrs = attrs::Container::from_ast(ctx, &input.attrs);
        let mut repr = None;
        let mut forward_attrs = Vec::new();
        for attr in &input.attrs {
            if attr.path() == SMART_ENUM {
                continue;
            }
            if attr.path() == REPR {
                match attr.parse_args::<Ident>() {
                    Ok(ident) if INTEGER_REPRS.iter().any(|r| ident == r) => repr = Some(ident),
                    Ok(ident) => ctx.error_spanned(
                        &ident,
                        format_args!(
                            "unsupported smart enum repr `{}`, expected a primitive integer type",
                            ident
                        ),
                    ),
                    Err(err) => ctx.syn_error(err),
                }
                continue;
            }
            forward_attrs.push(attr);
        }
        let repr = repr.unwrap_or_else(|| Ident::new("i32", Span::call_site()));

        let mut symbols = HashSet::new();
        let mut names = HashSet::new();
        let mut previous: Option<Expr> = None;
        let mut variants = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            let ident = &variant.ident;
            if !matches!(variant.fields, syn::Fields::Unit) {
                ctx.error_spanned(
                    ident,
                    format_args!("smart enum element `{}` cannot carry data", ident),
                );
            }
            let symbol = ident.unraw().to_string();
            if RESERVED.contains(&symbol.as_str()) {
                ctx.error_spanned(
                    ident,
                    format_args!("`{}` is reserved and cannot name a smart enum element", symbol),
                );
            }
            if !symbols.insert(symbol.clone()) {
                ctx.error_spanned(
                    ident,
                    format_args!("duplicate smart enum symbol `{}`", symbol),
                );
            }

            let mut forward = Vec::new();
            for attr in &variant.attrs {
                if attr.path() == CFG {
                    ctx.error_spanned(attr, "smart enum elements cannot be conditional");
                } else if attr.path() != SMART_ENUM {
                    forward.push(attr);
                }
            }

            let value: Expr = match (&variant.discriminant, &previous) {
                (Some((_, expr)), _) => expr.clone(),
                (None, Some(prev)) => parse_quote!((#prev) + 1),
                (None, None) => parse_quote!(0),
            };
            previous = Some(value.clone());

            let variant = Variant {
                ident,
                attrs: attrs::Variant::from_ast(ctx, &variant.attrs),
                value,
                forward_attrs: forward,
            };
            let name = variant.name();
            if !names.insert(name.value()) {
                ctx.error_spanned(
                    &name,
                    format_args!("duplicate smart enum name \"{}\"", name.value()),
                );
            }
            variants.push(variant);
        }

        Some(Container {
            ident: &input.ident,
            vis: &input.vis,
            attrs,
            repr,
            forward_attrs,
            variants,
            crate_path,
        })
    }

    pub fn crate_path(&self) -> &Path {
        self.attrs.crate_path.as_ref().unwrap_or(&self.crate_path)
    }

    /// The enumeration's name as a string literal.
    pub fn name(&self) -> LitStr {
        LitStr::new(&self.ident.unraw().to_string(), self.ident.span())
    }

    pub fn unknown(&self) -> Expr {
        let repr = &self.repr;
        self.attrs
            .unknown
            .clone()
            .unwrap_or_else(|| parse_quote!(#repr::MAX))
    }
}
