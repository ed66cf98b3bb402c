use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use syn::DeriveInput;
mod attributes;
mod oneof_codegen;
mod utils;

use self::attributes::OneofInfo;

pub fn derive_oneof_accessors(input: DeriveInput) -> TokenStream {
    let tokens =
        OneofInfo::from_derive_input(&input).and_then(oneof_codegen::expand_oneof_accessors);

    match tokens {
        Ok(tokens) => tokens,
        Err(e) => e.write_errors(),
    }
}
