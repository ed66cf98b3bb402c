use darling::util::{Ignored, SpannedValue};
use darling::{FromDeriveInput, FromField, FromVariant};
use proc_macro2::TokenStream;
use quote::quote;

/// Where the generated mutators live: on the message itself, or on a
/// builder that owns the message in a field named `message`.
#[derive(Debug, Clone)]
pub(crate) enum Receiver<'a> {
    Message(&'a syn::Path),
    Builder(&'a syn::Path),
}

impl<'a> Receiver<'a> {
    pub fn path(&self) -> &'a syn::Path {
        match self {
            Receiver::Message(path) | Receiver::Builder(path) => path,
        }
    }

    /// Expression naming the oneof slot from inside a `&mut self` method.
    pub fn slot(&self, field: &syn::Ident) -> TokenStream {
        match self {
            Receiver::Message(_) => quote!(self.#field),
            Receiver::Builder(_) => quote!(self.message.#field),
        }
    }
}

// Attributes for enum level #[accessors(...)]
#[derive(Debug, Clone, FromDeriveInput)]
#[darling(attributes(accessors), supports(enum_any))]
pub(crate) struct OneofInfo {
    // automatically populated by darling
    pub ident: syn::Ident,
    pub vis: syn::Visibility,
    pub data: darling::ast::Data<OneofVariantInfo, Ignored>,

    // The message owning the `Option<Self>` field.
    pub message: syn::Path,
    pub field: syn::Ident,
    pub case: syn::Ident,
    #[darling(default)]
    pub builder: Option<syn::Path>,
    #[darling(default)]
    // If true, the generated case enum is marked #[non_exhaustive].
    pub non_exhaustive: SpannedValue<bool>,
}

impl OneofInfo {
    pub fn receiver(&self) -> Receiver<'_> {
        match self.builder.as_ref() {
            Some(builder) => Receiver::Builder(builder),
            None => Receiver::Message(&self.message),
        }
    }
}

// Attributes for enum-variant level #[accessors(...)]
#[derive(Debug, Clone, FromVariant)]
#[darling(attributes(accessors))]
pub(crate) struct OneofVariantInfo {
    // automatically populated by darling
    pub ident: syn::Ident,
    pub fields: darling::ast::Fields<OneofFieldInfo>,
    // our variant attributes
    #[darling(default)]
    pub name: Option<syn::Ident>,
    #[darling(default)]
    pub skip: bool,
}

#[derive(Debug, Clone, FromField)]
#[darling(attributes(accessors))]
pub(crate) struct OneofFieldInfo {
    pub ty: syn::Type,
}
