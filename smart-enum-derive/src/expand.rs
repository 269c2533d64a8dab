use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, Path};

use crate::internal::{Container, Context};

pub fn expand_smart_enum(crate_path: Path, input: &DeriveInput) -> syn::Result<TokenStream> {
    let cx = Context::new();
    let cont = Container::from_ast(&cx, crate_path, input);
    cx.check()?;
    let cont = cont.unwrap();

    let ty = smart_enum_type(&cont);
    let elements = smart_enum_elements(&cont);
    let table = smart_enum_table(&cont);
    let checks = smart_enum_checks(&cont);
    let trait_impl = smart_enum_impl(&cont);
    let fmt = smart_enum_fmt(&cont);
    let conversions = smart_enum_conversions(&cont);
    Ok(quote! {
        #ty
        #elements
        #table
        #checks
        #trait_impl
        #fmt
        #conversions
    })
}

fn smart_enum_type(cont: &Container) -> TokenStream {
    let attrs = &cont.forward_attrs;
    let vis = cont.vis;
    let ident = cont.ident;
    let repr = &cont.repr;
    quote! {
        #(#attrs)*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        #vis struct #ident(#repr);
    }
}

fn smart_enum_elements(cont: &Container) -> TokenStream {
    let ident = cont.ident;
    let consts = cont.variants.iter().map(|variant| {
        let attrs = &variant.forward_attrs;
        let name = variant.ident;
        let value = &variant.value;
        quote! {
            #(#attrs)*
            pub const #name: #ident = #ident(#value);
        }
    });
    quote! {
        #[allow(non_upper_case_globals, dead_code)]
        impl #ident {
            #(#consts)*
        }
    }
}

fn smart_enum_table(cont: &Container) -> TokenStream {
    let crate_path = cont.crate_path();
    let ident = cont.ident;
    let repr = &cont.repr;
    let unknown = cont.unknown();
    let rows = cont.variants.iter().enumerate().map(|(ordinal, variant)| {
        let symbol = variant.symbol();
        let value = &variant.value;
        let name = variant.name();
        let description = variant.description();
        quote! {
            #crate_path::MetadataRow::new(#ordinal, #symbol, #value, #name, #description)
        }
    });
    let ordinals = cont.variants.iter().enumerate().map(|(ordinal, variant)| {
        let name = variant.ident;
        quote! {
            Self::#name => ::core::option::Option::Some(#ordinal),
        }
    });
    quote! {
        #[allow(dead_code)]
        impl #ident {
            const ROWS: &'static [#crate_path::MetadataRow<#repr>] = &[#(#rows),*];

            /// Metadata rows in declaration order.
            pub const TABLE: #crate_path::MetadataTable<#repr> =
                #crate_path::MetadataTable::new(Self::ROWS);

            /// Returned by lenient name lookups that match nothing.
            pub const UNKNOWN: #ident = #ident(#unknown);

            /// Wraps `value` without checking that it is declared.
            #[inline]
            pub const fn from_repr_unchecked(value: #repr) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn to_repr(self) -> #repr {
                self.0
            }

            /// Declaration-order index, `None` for undeclared values.
            #[allow(unreachable_patterns)]
            pub const fn ordinal(self) -> ::core::option::Option<usize> {
                match self {
                    #(#ordinals)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            pub const fn is_valid(self) -> bool {
                self.ordinal().is_some()
            }

            pub const fn name(self) -> ::core::option::Option<&'static str> {
                match self.ordinal() {
                    ::core::option::Option::Some(ordinal) => {
                        ::core::option::Option::Some(Self::TABLE.row_at(ordinal).name)
                    }
                    ::core::option::Option::None => ::core::option::Option::None,
                }
            }

            pub const fn description(self) -> ::core::option::Option<&'static str> {
                match self.ordinal() {
                    ::core::option::Option::Some(ordinal) => {
                        ::core::option::Option::Some(Self::TABLE.row_at(ordinal).description)
                    }
                    ::core::option::Option::None => ::core::option::Option::None,
                }
            }

            /// Instance whose display name is exactly `name`.
            pub const fn from_name(name: &str) -> ::core::option::Option<Self> {
                match Self::TABLE.find_by_name(name) {
                    ::core::option::Option::Some(row) => ::core::option::Option::Some(Self(row.value)),
                    ::core::option::Option::None => ::core::option::Option::None,
                }
            }
        }
    }
}

fn smart_enum_checks(cont: &Container) -> TokenStream {
    let ident = cont.ident;
    let duplicate = LitStr::new(
        &format!("smart enum `{}` declares two elements with the same value", ident),
        ident.span(),
    );
    let unknown = LitStr::new(
        &format!(
            "the unknown value of smart enum `{}` is also a declared value, pick another with #[smart_enum(unknown = ...)]",
            ident
        ),
        ident.span(),
    );
    quote! {
        const _: () = {
            let rows = #ident::TABLE.rows();
            let mut i = 0;
            while i < rows.len() {
                let mut j = i + 1;
                while j < rows.len() {
                    if rows[i].value == rows[j].value {
                        ::core::panic!(#duplicate);
                    }
                    j += 1;
                }
                i += 1;
            }
            if #ident::UNKNOWN.is_valid() {
                ::core::panic!(#unknown);
            }
        };
    }
}

fn smart_enum_impl(cont: &Container) -> TokenStream {
    let crate_path = cont.crate_path();
    let ident = cont.ident;
    let repr = &cont.repr;
    let name = cont.name();
    let unknown_name = cont.attrs.unknown_name.as_ref().map(|unknown_name| {
        quote! {
            const UNKNOWN_NAME: &'static str = #unknown_name;
        }
    });
    quote! {
        #[automatically_derived]
        impl #crate_path::SmartEnum for #ident {
            type Repr = #repr;

            const NAME: &'static str = #name;
            const TABLE: #crate_path::MetadataTable<#repr> = #ident::TABLE;
            const UNKNOWN: Self = #ident::UNKNOWN;
            #unknown_name

            #[inline]
            fn from_repr(value: #repr) -> Self {
                Self(value)
            }

            #[inline]
            fn to_repr(self) -> #repr {
                self.0
            }

            #[inline]
            fn ordinal(self) -> ::core::option::Option<usize> {
                #ident::ordinal(self)
            }
        }
    }
}

fn smart_enum_fmt(cont: &Container) -> TokenStream {
    let crate_path = cont.crate_path();
    let ident = cont.ident;
    let name = cont.name();
    quote! {
        #[automatically_derived]
        impl ::core::fmt::Debug for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match #ident::ordinal(*self) {
                    ::core::option::Option::Some(ordinal) => {
                        f.write_str(#ident::TABLE.row_at(ordinal).symbol)
                    }
                    ::core::option::Option::None => f.debug_tuple(#name).field(&self.0).finish(),
                }
            }
        }

        #[automatically_derived]
        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(#crate_path::to_string_lenient(*self))
            }
        }
    }
}

fn smart_enum_conversions(cont: &Container) -> TokenStream {
    let crate_path = cont.crate_path();
    let ident = cont.ident;
    let repr = &cont.repr;
    let name = cont.name();
    quote! {
        #[automatically_derived]
        impl ::core::str::FromStr for #ident {
            type Err = #crate_path::Error;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                #crate_path::to_enum(s)
            }
        }

        #[automatically_derived]
        impl ::core::convert::TryFrom<#repr> for #ident {
            type Error = #crate_path::Error;

            fn try_from(value: #repr) -> ::core::result::Result<Self, Self::Error> {
                let this = Self(value);
                if this.is_valid() {
                    ::core::result::Result::Ok(this)
                } else {
                    ::core::result::Result::Err(#crate_path::Error::invalid_value(#name, value))
                }
            }
        }

        #[automatically_derived]
        impl ::core::convert::From<#ident> for #repr {
            fn from(value: #ident) -> Self {
                value.0
            }
        }
    }
}
