use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::attributes::{OneofInfo, OneofVariantInfo};
use crate::utils;

/// A oneof member after validation, with the names of everything that
/// gets generated for it.
struct Member<'a> {
    variant: &'a syn::Ident,
    ty: &'a syn::Type,
    stem: syn::Ident,
    skip: bool,
}

impl<'a> Member<'a> {
    fn from_variant(variant: &'a OneofVariantInfo) -> darling::Result<Self> {
        if variant.ident == "None" {
            return Err(darling::Error::custom(
                "a oneof member cannot be named `None`, it is reserved for the unset case",
            )
            .with_span(&variant.ident));
        }

        let ty = match variant.fields.fields.as_slice() {
            [field] if variant.fields.is_tuple() => &field.ty,
            _ => {
                return Err(darling::Error::custom(
                    "a oneof member must wrap exactly one value, e.g. `Cron(Cron)`",
                )
                .with_span(&variant.ident))
            }
        };

        let stem = match variant.name.as_ref() {
            Some(name) => name.clone(),
            None => utils::ident(&utils::snake_case(&variant.ident), &variant.ident)?,
        };

        Ok(Member {
            variant: &variant.ident,
            ty,
            stem,
            skip: variant.skip,
        })
    }
}

pub(crate) fn expand_oneof_accessors(info: OneofInfo) -> darling::Result<TokenStream> {
    // `supports(enum_any)` has already turned structs away.
    let variants = info.data.as_ref().take_enum().unwrap_or_default();

    let mut errors = darling::Error::accumulator();
    let mut seen = HashSet::new();
    let mut members = Vec::with_capacity(variants.len());
    for member in variants
        .into_iter()
        .filter_map(|variant| errors.handle(Member::from_variant(variant)))
        .collect::<Vec<_>>()
    {
        if !member.skip && !seen.insert(member.stem.to_string()) {
            errors.push(
                darling::Error::custom(format!(
                    "duplicate accessor name `{}`, rename one with #[accessors(name = \"...\")]",
                    member.stem
                ))
                .with_span(member.variant),
            );
            continue;
        }
        members.push(member);
    }
    errors.finish()?;

    let case_enum = expand_case_enum(&info, &members);
    let readers = expand_readers(&info, &members);
    let mutators = expand_mutators(&info, &members);

    Ok(quote! {
        #case_enum
        #readers
        #mutators
    })
}

fn expand_case_enum(info: &OneofInfo, members: &[Member<'_>]) -> TokenStream {
    let vis = &info.vis;
    let case = &info.case;
    let non_exhaustive = if *info.non_exhaustive {
        quote!(#[non_exhaustive])
    } else {
        TokenStream::new()
    };
    let variants: Vec<_> = members.iter().map(|m| m.variant).collect();
    let names: Vec<_> = members.iter().map(|m| m.stem.to_string()).collect();
    let doc = format!(
        "Which member of the `{}` oneof is currently set.",
        info.field
    );

    quote! {
        #[doc = #doc]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #non_exhaustive
        #vis enum #case {
            #[default]
            None,
            #(#variants,)*
        }

        impl #case {
            /// The field name of the active member, or `"none"`.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    #case::None => "none",
                    #(#case::#variants => #names,)*
                }
            }
        }
    }
}

fn expand_readers(info: &OneofInfo, members: &[Member<'_>]) -> TokenStream {
    let oneof = &info.ident;
    let message = &info.message;
    let field = &info.field;
    let case = &info.case;
    let case_fn = format_ident!("{}_case", field);
    let all_variants: Vec<_> = members.iter().map(|m| m.variant).collect();

    let per_member = members.iter().filter(|m| !m.skip).map(|member| {
        let variant = member.variant;
        let ty = member.ty;
        let getter = &member.stem;
        let has = format_ident!("has_{}", member.stem);
        let or_none = format_ident!("{}_or_none", member.stem);

        quote! {
            pub fn #getter(&self) -> &#ty {
                match &self.#field {
                    ::core::option::Option::Some(#oneof::#variant(value)) => value,
                    _ => {
                        static DEFAULT: ::std::sync::OnceLock<#ty> = ::std::sync::OnceLock::new();
                        DEFAULT.get_or_init(<#ty as ::core::default::Default>::default)
                    }
                }
            }

            pub fn #has(&self) -> bool {
                ::core::matches!(&self.#field, ::core::option::Option::Some(#oneof::#variant(_)))
            }

            pub fn #or_none(&self) -> ::core::option::Option<&#ty> {
                match &self.#field {
                    ::core::option::Option::Some(#oneof::#variant(value)) => {
                        ::core::option::Option::Some(value)
                    }
                    _ => ::core::option::Option::None,
                }
            }
        }
    });

    quote! {
        impl #message {
            pub fn #case_fn(&self) -> #case {
                match &self.#field {
                    ::core::option::Option::None => #case::None,
                    #(::core::option::Option::Some(#oneof::#all_variants(_)) => #case::#all_variants,)*
                }
            }

            #(#per_member)*
        }
    }
}

fn expand_mutators(info: &OneofInfo, members: &[Member<'_>]) -> TokenStream {
    let oneof = &info.ident;
    let receiver = info.receiver();
    let target = receiver.path();
    let slot = receiver.slot(&info.field);
    let clear_group = format_ident!("clear_{}", info.field);

    let per_member = members.iter().filter(|m| !m.skip).map(|member| {
        let variant = member.variant;
        let ty = member.ty;
        let set = format_ident!("set_{}", member.stem);
        let clear = format_ident!("clear_{}", member.stem);
        let take = format_ident!("take_{}", member.stem);

        quote! {
            pub fn #set(&mut self, value: #ty) -> &mut Self {
                #slot = ::core::option::Option::Some(#oneof::#variant(value));
                self
            }

            pub fn #clear(&mut self) -> &mut Self {
                if ::core::matches!(&#slot, ::core::option::Option::Some(#oneof::#variant(_))) {
                    #slot = ::core::option::Option::None;
                }
                self
            }

            pub fn #take(&mut self) -> ::core::option::Option<#ty> {
                match #slot.take() {
                    ::core::option::Option::Some(#oneof::#variant(value)) => {
                        ::core::option::Option::Some(value)
                    }
                    other => {
                        #slot = other;
                        ::core::option::Option::None
                    }
                }
            }
        }
    });

    quote! {
        impl #target {
            pub fn #clear_group(&mut self) -> &mut Self {
                #slot = ::core::option::Option::None;
                self
            }

            #(#per_member)*
        }
    }
}
